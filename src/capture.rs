use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::error::{RelatoError, RelatoResult};

/// One lead-capture request. At least one contact field must carry a
/// non-blank value for the submission to be recorded.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct LeadSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
}

impl LeadSubmission {
    pub fn validate(&self) -> RelatoResult<()> {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        if !filled(&self.email) && !filled(&self.telegram) {
            return Err(RelatoError::validation(
                "submission must include an email or a telegram handle",
            ));
        }
        Ok(())
    }
}

/// Accepted submission as written to the log: the contact fields plus the
/// server-assigned timestamp and the requester's user agent.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RecordedLead {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub user_agent: String,
}

/// Narrow seam for lead storage so the mechanism can be swapped without
/// touching callers.
pub trait LeadRecorder {
    fn record(
        &mut self,
        submission: &LeadSubmission,
        user_agent: &str,
    ) -> RelatoResult<RecordedLead>;
}

/// Append-only JSON Lines writer. A development convenience, not a
/// production storage layer.
#[derive(Debug)]
pub struct JsonlLeadLog<W: Write> {
    out: W,
}

impl JsonlLeadLog<File> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> RelatoResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                RelatoError::capture(format!("open lead log '{}': {e}", path.display()))
            })?;
        Ok(Self::new(file))
    }
}

impl<W: Write> JsonlLeadLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LeadRecorder for JsonlLeadLog<W> {
    fn record(
        &mut self,
        submission: &LeadSubmission,
        user_agent: &str,
    ) -> RelatoResult<RecordedLead> {
        submission.validate()?;

        let lead = RecordedLead {
            email: submission.email.clone(),
            telegram: submission.telegram.clone(),
            timestamp: Utc::now(),
            user_agent: user_agent.to_string(),
        };

        let line = serde_json::to_string(&lead).map_err(|e| RelatoError::serde(e.to_string()))?;
        writeln!(self.out, "{line}")
            .and_then(|()| self.out.flush())
            .map_err(|e| RelatoError::capture(format!("append lead log line: {e}")))?;

        tracing::info!(
            email = lead.email.as_deref().unwrap_or(""),
            telegram = lead.telegram.as_deref().unwrap_or(""),
            "lead recorded"
        );
        Ok(lead)
    }
}

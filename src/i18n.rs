use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::labels::LabelSet;

/// One node of a translation table: a leaf string or a nested table.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StringValue {
    Text(String),
    Table(BTreeMap<String, StringValue>),
}

/// Nested string table for one language, as deserialized from
/// `<locales>/<lang>.json`.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct StringTable(pub BTreeMap<String, StringValue>);

impl StringTable {
    /// Dotted-path lookup, e.g. `get("nav.finish")`. Returns `None` when
    /// any segment is missing or the path ends on a nested table.
    pub fn get(&self, path: &str) -> Option<&str> {
        let mut current = &self.0;
        let mut segments = path.split('.').peekable();
        while let Some(seg) = segments.next() {
            match current.get(seg)? {
                StringValue::Text(s) => {
                    return if segments.peek().is_none() {
                        Some(s)
                    } else {
                        None
                    };
                }
                StringValue::Table(t) => {
                    if segments.peek().is_none() {
                        return None;
                    }
                    current = t;
                }
            }
        }
        None
    }
}

impl LabelSet {
    /// Pull the `nav.*` words from a table, keeping the English default for
    /// any missing key.
    pub fn from_table(table: &StringTable) -> Self {
        let base = Self::default();
        let pick = |key: &str, fallback: String| {
            table.get(key).map(str::to_string).unwrap_or(fallback)
        };
        Self {
            start: pick("nav.start", base.start),
            finish: pick("nav.finish", base.finish),
            summary: pick("nav.summary", base.summary),
            layer: pick("nav.layer", base.layer),
            shift: pick("nav.shift", base.shift),
            intro: pick("nav.intro", base.intro),
        }
    }
}

/// Loader for per-language string tables with a session-scoped cache.
///
/// IO happens on the first request for a language; the resolved outcome
/// (including a failed resolution) is memoized until [`clear`] is called.
/// A language that fails to load falls back to the default language with a
/// warning; if the default also fails, the table is reported absent and
/// consumers render without one.
///
/// [`clear`]: Translations::clear
#[derive(Debug)]
pub struct Translations {
    root: PathBuf,
    default_lang: String,
    cache: HashMap<String, Option<StringTable>>,
}

impl Translations {
    pub fn new(root: impl Into<PathBuf>, default_lang: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            default_lang: default_lang.into(),
            cache: HashMap::new(),
        }
    }

    /// Table for `lang`, loading and caching on first use.
    pub fn table(&mut self, lang: &str) -> Option<&StringTable> {
        if !self.cache.contains_key(lang) {
            let resolved = self.resolve(lang);
            self.cache.insert(lang.to_string(), resolved);
        }
        self.cache.get(lang).and_then(|t| t.as_ref())
    }

    /// Navigation words for `lang`; English defaults when no table loads.
    pub fn label_set(&mut self, lang: &str) -> LabelSet {
        match self.table(lang) {
            Some(table) => LabelSet::from_table(table),
            None => LabelSet::default(),
        }
    }

    /// Drop every cached table. The next request per language re-reads.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    fn resolve(&self, lang: &str) -> Option<StringTable> {
        match load_table(&self.root, lang) {
            Ok(table) => Some(table),
            Err(err) => {
                tracing::warn!(%lang, error = %err, "language table failed to load");
                if lang == self.default_lang {
                    return None;
                }
                match load_table(&self.root, &self.default_lang) {
                    Ok(table) => Some(table),
                    Err(err) => {
                        tracing::warn!(
                            lang = %self.default_lang,
                            error = %err,
                            "default language table failed to load; rendering without strings"
                        );
                        None
                    }
                }
            }
        }
    }
}

fn load_table(root: &Path, lang: &str) -> anyhow::Result<StringTable> {
    let path = root.join(format!("{lang}.json"));
    let s = std::fs::read_to_string(&path)
        .with_context(|| format!("read string table '{}'", path.display()))?;
    let table =
        serde_json::from_str(&s).with_context(|| format!("parse string table '{}'", path.display()))?;
    Ok(table)
}

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use relato::{
    ContentModel, JsonlLeadLog, LabelSet, LeadRecorder as _, LeadSubmission, Timeline,
    Translations, next_label, prev_label,
};

#[derive(Parser, Debug)]
#[command(name = "relato", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flatten a content model into its slide sequence and print it as JSON.
    Timeline(TimelineArgs),
    /// Print the next/previous navigation labels for a position.
    Labels(LabelsArgs),
    /// Validate a content model and report shifts that would be dropped.
    Validate(ValidateArgs),
    /// Append a lead submission to a capture log (dev tool).
    Capture(CaptureArgs),
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Input content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pretty-print the output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct LabelsArgs {
    /// Input content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Position in the flattened sequence (0-based).
    #[arg(long)]
    index: usize,

    /// Language code for the label words.
    #[arg(long, default_value = "en")]
    lang: String,

    /// Directory of `<lang>.json` string tables. English defaults when omitted.
    #[arg(long)]
    locales: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input content JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct CaptureArgs {
    /// Append-only JSONL log path (created if missing).
    #[arg(long)]
    log: PathBuf,

    /// Contact email.
    #[arg(long)]
    email: Option<String>,

    /// Contact telegram handle.
    #[arg(long)]
    telegram: Option<String>,

    /// User agent recorded with the submission.
    #[arg(long, default_value = concat!("relato-cli/", env!("CARGO_PKG_VERSION")))]
    user_agent: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
        Command::Labels(args) => cmd_labels(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Capture(args) => cmd_capture(args),
    }
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let model = ContentModel::from_path(&args.in_path)
        .with_context(|| format!("load '{}'", args.in_path.display()))?;
    let timeline = Timeline::build(&model);

    let out = if args.pretty {
        serde_json::to_string_pretty(timeline.items())?
    } else {
        serde_json::to_string(timeline.items())?
    };
    println!("{out}");
    Ok(())
}

fn cmd_labels(args: LabelsArgs) -> anyhow::Result<()> {
    let model = ContentModel::from_path(&args.in_path)
        .with_context(|| format!("load '{}'", args.in_path.display()))?;
    let timeline = Timeline::build(&model);

    let set = match &args.locales {
        Some(dir) => Translations::new(dir, "en").label_set(&args.lang),
        None => LabelSet::default(),
    };

    println!("next: {}", next_label(&timeline, args.index, &set));
    println!("prev: {}", prev_label(&timeline, args.index, &set));
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let model = ContentModel::from_path(&args.in_path)
        .with_context(|| format!("load '{}'", args.in_path.display()))?;

    let orphans = model.orphan_shifts();
    for shift in &orphans {
        eprintln!(
            "warning: shift '{}' references missing layer '{}' and will be dropped",
            shift.id, shift.layer_id
        );
    }

    let timeline = Timeline::build(&model);
    eprintln!(
        "ok: {} layers, {} shifts ({} dropped), {} slides",
        model.layers.len(),
        model.shifts.len(),
        orphans.len(),
        timeline.len()
    );
    Ok(())
}

fn cmd_capture(args: CaptureArgs) -> anyhow::Result<()> {
    let submission = LeadSubmission {
        email: args.email,
        telegram: args.telegram,
    };

    let mut log = JsonlLeadLog::open(&args.log)?;
    let lead = log.record(&submission, &args.user_agent)?;
    eprintln!("recorded at {}", lead.timestamp.to_rfc3339());
    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

use crate::model::Parameters;
use crate::report::OutputFormat;
use crate::util::DEFAULT_DATE_FORMAT;

#[derive(Parser, Debug)]
#[command(
    name = "git-spend",
    version,
    about = "Calculate an estimate of time a git user spent on a repository"
)]
pub struct Cli {
    /// Authors to estimate, matched exactly against commit author name or email
    #[arg(value_name = "USERNAMES")]
    pub usernames: Vec<String>,

    /// Maximum minutes between two commits for them to count as one session
    #[arg(short, long = "max-duration", value_name = "MINUTES", default_value_t = 180)]
    pub max_duration: u32,

    /// Directory of the git repository
    #[arg(short, long, default_value = "./")]
    pub directory: PathBuf,

    /// Only calculate total hours, without breaking out days
    #[arg(short, long)]
    pub no_days: bool,

    /// Minutes to add at the start of each session
    #[arg(short, long, value_name = "MINUTES", default_value_t = 0)]
    pub session_begin: u32,

    /// Check commits on all branches
    #[arg(short, long)]
    pub all: bool,

    /// Pattern for rendering commit dates (`time` format description)
    #[arg(long, value_name = "PATTERN", default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Log query details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parameters(&self) -> Parameters {
        Parameters {
            max_gap_minutes: self.max_duration,
            session_begin_minutes: self.session_begin,
            include_days: !self.no_days,
            scan_all_branches: self.all,
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

use clap::Parser;

/// Input used when no words are given and stdin is not requested.
pub const SAMPLE_INPUT: &str = "Python Formatting in VS Code";

#[derive(Parser, Debug)]
#[command(name = "make-title")]
#[command(version, about = "Turn a free-form title into a date-prefixed slug")]
pub struct Cli {
    /// Title words, joined with spaces (defaults to a sample title)
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Read titles from stdin, one per line
    #[arg(long, conflicts_with = "words")]
    pub stdin: bool,

    /// Stamp titles with this date (YYYY-MM-DD) instead of today
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Keep only ASCII letters and digits
    #[arg(long)]
    pub ascii: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

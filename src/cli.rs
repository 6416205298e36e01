use clap::Parser;

/// Wordle game CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited wordbank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Play against a fixed goal word instead of a random one
    /// (takes precedence over --input)
    #[arg(short = 'w', long = "word")]
    pub goal_word: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

use clap::Parser;
use std::path::PathBuf;

use numerus::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "numerus", version, about = "Roman numeral minimizer CLI")]
pub struct CliArgs {
    /// File with one Roman numeral per line ("-" reads stdin)
    #[arg(short, long, default_value = "roman.txt")]
    pub input: PathBuf,

    /// Decode a single numeral and print its value
    #[arg(short, long, conflicts_with_all = ["encode", "minimize"])]
    pub decode: Option<String>,

    /// Encode a single value (1..=1000000) as its minimal numeral
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "minimize")]
    pub encode: Option<i64>,

    /// Rewrite a single numeral in minimal form
    #[arg(short, long)]
    pub minimize: Option<String>,

    /// Output format (text or json)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Keep scanning past lines that fail to decode and list them in the report
    #[arg(long, default_value_t = false)]
    pub skip_invalid: bool,

    /// Treat blank lines as invalid instead of skipping them
    #[arg(long, default_value_t = false)]
    pub strict_blank_lines: bool,

    /// JSON file with savings parameters; flags above override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging (to stderr; RUST_LOG overrides the level)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

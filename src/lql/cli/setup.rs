use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "lql", bin_name = "lql", version)]
#[command(about = "Keep whisky tasting notes, one directory per distillery", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Clear the screen before printing
    #[arg(long, global = true)]
    pub clear: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new tasting note (prompts for anything not given as a flag)
    #[command(alias = "n", display_order = 1)]
    New(NewArgs),

    /// List distilleries
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Show the tasting notes of a distillery
    #[command(alias = "v", display_order = 3)]
    View {
        /// Index of the distillery, as shown by `list`
        index: String,
    },

    /// Print the store directory, or a distillery's directory
    #[command(display_order = 4)]
    Path {
        /// Index of the distillery, as shown by `list`
        index: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (e.g., max-rating)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store (optional utility)
    #[command(display_order = 6)]
    Init,
}

#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct NewArgs {
    /// Distillery name
    #[arg(short, long)]
    pub distillery: Option<String>,

    /// Age in years
    #[arg(short, long)]
    pub age: Option<u32>,

    /// Display name of the bottling
    #[arg(short, long)]
    pub name: Option<String>,

    /// Rating, up to the configured max-rating
    #[arg(short, long)]
    pub rating: Option<f64>,

    /// Vintage (distillation) year
    #[arg(long)]
    pub vintage: Option<i32>,

    /// Bottling year
    #[arg(long)]
    pub bottled: Option<i32>,

    /// Bottler name
    #[arg(short, long)]
    pub bottler: Option<String>,
}

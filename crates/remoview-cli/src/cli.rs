use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// RemoView - Remote viewing trivia game
#[derive(Parser, Debug)]
#[command(name = "remoview")]
#[command(about = "Remote viewing trivia: sense a random place, then see how close you were", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .remoview/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// History file (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Gemini API key (overrides REMOVIEW_API_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Gemini model name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Gemini API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a session: receive coordinates, record impressions, get graded
    Play(PlayArgs),

    /// List past sessions
    History(HistoryArgs),

    /// Show the full result of a past session
    Show(ShowArgs),

    /// Sample random coordinates
    Coords(CoordsArgs),

    /// Show effective configuration and where each value comes from
    Config,
}

#[derive(Parser, Debug)]
pub struct PlayArgs {
    /// An impression of the target (give exactly three to skip prompts)
    #[arg(long = "impression", value_name = "TEXT")]
    pub impressions: Vec<String>,

    /// Continent guess (e.g., "South America")
    #[arg(long)]
    pub continent: Option<String>,

    /// Area type guess (e.g., Urban, Forest, Desert)
    #[arg(long)]
    pub area_type: Option<String>,

    /// Language guess
    #[arg(long)]
    pub language: Option<String>,

    /// Target latitude (random when omitted)
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Target longitude (random when omitted)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lng: Option<f64>,
}

impl PlayArgs {
    /// Whether every guess was supplied on the command line
    pub fn is_scripted(&self) -> bool {
        self.impressions.len() == 3
            && self.continent.is_some()
            && self.area_type.is_some()
            && self.language.is_some()
    }
}

#[derive(Parser, Debug)]
pub struct HistoryArgs {
    /// Show at most this many sessions
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Session ID (as printed by `remoview history`)
    pub id: String,
}

#[derive(Parser, Debug)]
pub struct CoordsArgs {
    /// Number of coordinates to sample
    #[arg(
        long,
        short = 'c',
        default_value = "1",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub count: usize,
}

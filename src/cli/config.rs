use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::classify::classify_model::FieldRole;
use crate::classify::lexicon::Lexicon;
use crate::fill::response::DEFAULT_PROMPT;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "field-detection",
    version,
    about = "Form-field role detection for autofill snapshots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: field-detection.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Trace output path (JSONL); overrides the config file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a snapshot and print the detected field roles
    Classify {
        /// Path to a snapshot JSON file (bare tree or fill request)
        #[arg(long)]
        snapshot: String,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Classify a snapshot and apply the fill gate
    Fill {
        /// Path to a snapshot JSON file (bare tree or fill request)
        #[arg(long)]
        snapshot: String,

        /// Output format: console, json
        #[arg(long, default_value = "console")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `field-detection.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub lexicon: LexiconConfig,

    #[serde(default)]
    pub trace: TraceConfig,

    /// Suggestion label shown on the fill offer.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lexicon: LexiconConfig::default(),
            trace: TraceConfig::default(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Extra trigger tokens merged into the built-in lexicon, per role.
/// New locales are added here rather than in code.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LexiconConfig {
    #[serde(default)]
    pub password: Vec<String>,

    #[serde(default)]
    pub username: Vec<String>,

    #[serde(default)]
    pub email: Vec<String>,

    #[serde(default)]
    pub name: Vec<String>,

    #[serde(default)]
    pub phone: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("field-detection.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Lexicon Building (merge built-ins with config additions)
// ============================================================================

/// Build the effective lexicon: built-in token sets plus config additions.
/// Additions never change the role priority order.
pub fn build_lexicon(config: &LexiconConfig) -> Lexicon {
    let mut lexicon = Lexicon::default();
    lexicon.extend(FieldRole::Password, config.password.iter().cloned());
    lexicon.extend(FieldRole::Username, config.username.iter().cloned());
    lexicon.extend(FieldRole::EmailAddress, config.email.iter().cloned());
    lexicon.extend(FieldRole::PersonName, config.name.iter().cloned());
    lexicon.extend(FieldRole::PhoneNumber, config.phone.iter().cloned());
    lexicon
}

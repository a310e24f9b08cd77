// Settings for the workflow-tags binary, read from the environment
// (after loading `.env` if present)

pub const LOG_ENV: &str = "WORKFLOW_TAGS_LOG";
pub const COMPACT_ENV: &str = "WORKFLOW_TAGS_COMPACT";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber` filter directive
    pub log_filter: String,
    /// Print JSON on a single line instead of pretty-printed
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compact: false,
        }
    }
}

impl Config {
    /// Loads `.env` and reads the process environment
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup(LOG_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compact = lookup(COMPACT_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            log_filter,
            compact,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

// config.rs - Configuration file support

use crate::error::{PivotError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    // Input/Output
    pub output: Option<String>,

    // Markdown report
    pub intro: Option<String>,
    pub intro_file: Option<String>,
    pub header_rows: Option<usize>,

    // Selection
    pub month: Option<String>,

    // Flags
    pub verbose: Option<bool>,
    pub skip_check: Option<bool>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PivotError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            PivotError::Config(format!("Failed to parse config file '{}': {}", path.display(), e))
        })?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r##"# pivotab.toml - Configuration file for pivotab
# Command line arguments override these settings

# =============================================================================
# OUTPUT
# =============================================================================

# Output file: a .md extension produces a Markdown table, anything else CSV
output = "submitters.md"

# =============================================================================
# MARKDOWN REPORT
# =============================================================================

# Text written verbatim before the table
intro = "# Submitters"

# Or read the introduction from a file (exclusive with intro)
# intro_file = "intro.md"

# Rows forming the table header; the separator line follows them
header_rows = 1

# =============================================================================
# SELECTION
# =============================================================================

# Keep a single period column: "YYYY-MM" or "latest"
# month = "latest"

# =============================================================================
# FLAGS
# =============================================================================

# Display details while processing
verbose = false

# Render without validating the input first
skip_check = false
"##
        .to_string()
    }
}

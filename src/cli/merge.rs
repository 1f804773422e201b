// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::{CheckArgs, Command, RenderArgs};
use crate::cli::{Args, Config};
use crate::error::Result;

impl CheckArgs {
    pub fn merge_with_config(mut self, config: &Config) -> Self {
        if !self.verbose && config.verbose.unwrap_or(false) {
            self.verbose = true;
        }
        self
    }
}

impl RenderArgs {
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: &Config) -> Self {
        if self.output.is_none() {
            self.output = config.output.clone();
        }

        // An explicit intro source on the command line shadows both config sources
        if self.intro.is_none() && self.intro_file.is_none() {
            self.intro = config.intro.clone();
            self.intro_file = config.intro_file.clone();
        }
        if self.header_rows.is_none() {
            self.header_rows = config.header_rows;
        }
        if self.month.is_none() {
            self.month = config.month.clone();
        }

        if !self.verbose && config.verbose.unwrap_or(false) {
            self.verbose = true;
        }
        if !self.skip_check && config.skip_check.unwrap_or(false) {
            self.skip_check = true;
        }
        self
    }
}

impl Args {
    pub fn merge_with_config(mut self, config: Config) -> Self {
        self.command = match self.command {
            Command::Check(c) => Command::Check(c.merge_with_config(&config)),
            Command::Render(r) => Command::Render(r.merge_with_config(&config)),
            other => other,
        };
        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

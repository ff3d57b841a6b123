//! `deck expand` command implementation.
//!
//! Expands shorthand directive lines to comment syntax without rendering,
//! leaving the rest of the markdown untouched.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use deck_config::{CliSettings, Config};
use deck_directives::DirectivePreprocessor;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the expand command.
#[derive(Args)]
pub(crate) struct ExpandArgs {
    /// Input markdown file.
    input: PathBuf,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover deck.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directive marker character (overrides config).
    #[arg(long)]
    directive_marker: Option<char>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExpandArgs {
    /// Execute the expand command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or file I/O fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            directive_marker: self.directive_marker,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source = std::fs::read_to_string(&self.input)?;
        let expanded = DirectivePreprocessor::with_marker(config.markup.directive_marker)
            .process(&source);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &expanded)?;
                output.success(&format!("Expanded {}", path.display()));
            }
            None => std::io::stdout().write_all(expanded.as_bytes())?,
        }
        Ok(())
    }
}

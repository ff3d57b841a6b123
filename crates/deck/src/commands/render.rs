//! `deck render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use deck_config::{CliSettings, Config, MarkupConfig};
use deck_directives::DirectivePreprocessor;
use deck_syntax::{Parser, ParserOptions};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input markdown file.
    input: PathBuf,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover deck.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Container marker character (overrides config).
    #[arg(long)]
    container_marker: Option<char>,

    /// Directive marker character (overrides config).
    #[arg(long)]
    directive_marker: Option<char>,

    /// Disable `==highlight==` parsing.
    #[arg(long)]
    no_highlight: bool,

    /// Wrap output in a full HTML document.
    #[arg(long)]
    full_document: bool,

    /// Theme name for the full document shell (overrides config).
    #[arg(long)]
    theme: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or file I/O fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            container_marker: self.container_marker,
            directive_marker: self.directive_marker,
            highlight: self.no_highlight.then_some(false),
            full_document: self.full_document.then_some(true),
            theme: self.theme,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source = std::fs::read_to_string(&self.input)?;
        let expanded = DirectivePreprocessor::with_marker(config.markup.directive_marker)
            .process(&source);
        let parser = Parser::with_options(parser_options(&config.markup));
        let mut html = parser.render(&expanded);

        if config.html.full_document {
            html = wrap_document(&html, config.html.theme.as_deref());
        }
        tracing::info!(input = %self.input.display(), bytes = html.len(), "rendered");

        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                output.success(&format!("Rendered {}", path.display()));
            }
            None => std::io::stdout().write_all(html.as_bytes())?,
        }
        Ok(())
    }
}

/// Map markup configuration onto parser options.
fn parser_options(markup: &MarkupConfig) -> ParserOptions {
    ParserOptions {
        container_marker: markup.container_marker,
        default_container_tag: markup.default_container_tag.clone(),
        highlight: markup.highlight,
    }
}

/// Wrap a rendered fragment in a minimal HTML document shell.
fn wrap_document(body: &str, theme: Option<&str>) -> String {
    let theme_class = theme.map_or_else(String::new, |theme| format!(" class=\"{theme}\""));
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n\
         <body{theme_class}>\n{body}</body>\n</html>\n"
    )
}

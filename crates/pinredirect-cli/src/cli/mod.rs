//! CLI for pinredirect.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pinredirect_core::config;
use std::io;
use std::path::PathBuf;

use commands::{run_completions, run_man, run_redirect, run_resolve, run_table};

/// Top-level CLI for pinredirect.
#[derive(Debug, Parser)]
#[command(name = "pinredirect")]
#[command(about = "Rewrite branch links to a pinned commit and redirect", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the pinned form of a URL without navigating.
    Resolve {
        /// URL to rewrite (any string is accepted).
        url: String,
        /// Also report which mapping matched, on stderr.
        #[arg(long)]
        explain: bool,
    },

    /// Resolve a URL and navigate to it (plain line or HTML redirect page).
    Redirect {
        /// URL to rewrite (any string is accepted).
        url: String,
        /// Emit an HTML page that performs location.replace, regardless of config.
        #[arg(long)]
        html: bool,
        /// Write to this file instead of stdout.
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List the active mapping table in match order.
    Table {
        /// Print as JSON instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a roff man page.
    Man,
}

impl CliCommand {
    /// Only `redirect` creates a default config; read-only commands never touch disk.
    fn writes_default_config(&self) -> bool {
        matches!(self, CliCommand::Redirect { .. })
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cmd = match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell, &mut io::stdout()),
            CliCommand::Man => return run_man(&mut io::stdout()),
            cmd => cmd,
        };

        let cfg = if cmd.writes_default_config() {
            config::load_or_init()?
        } else {
            config::load()?
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let table = cfg.table()?;

        match cmd {
            CliCommand::Resolve { url, explain } => {
                run_resolve(&table, &url, explain, &mut io::stdout(), &mut io::stderr())?
            }
            CliCommand::Redirect { url, html, output } => {
                run_redirect(&cfg, &table, &url, html, output.as_deref())?
            }
            CliCommand::Table { json } => run_table(&table, json, &mut io::stdout())?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

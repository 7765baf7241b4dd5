//! CLI command definitions.

pub mod clipboards;
pub mod items;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the todoboard API.
#[derive(Debug, Parser)]
#[command(name = "todoboard-client")]
#[command(about = "CLI client for the todoboard API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "TODOBOARD_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Bearer token for servers running with authentication.
    #[arg(long, env = "TODOBOARD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clipboard management.
    Clipboards(clipboards::ClipboardsCommand),
    /// Item management.
    Items(items::ItemsCommand),
    /// Server liveness check.
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_add() {
        let cli = Cli::try_parse_from([
            "todoboard-client",
            "--format",
            "json",
            "items",
            "add",
            "1",
            "Milk",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Items(items::ItemsCommand {
                action: items::ItemsAction::Add { clipboard_id, name },
            }) => {
                assert_eq!(clipboard_id, 1);
                assert_eq!(name, "Milk");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_clipboards_rename() {
        let cli = Cli::try_parse_from([
            "todoboard-client",
            "--token",
            "abc",
            "clipboards",
            "rename",
            "3",
            "Groceries",
        ])
        .unwrap();

        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert!(matches!(
            cli.command,
            Commands::Clipboards(clipboards::ClipboardsCommand {
                action: clipboards::ClipboardsAction::Rename { id: 3, .. },
            })
        ));
    }
}

//! todoboard-client CLI entry point.

use clap::Parser;
use serde::Serialize;
use todoboard_client::cli::clipboards::ClipboardsAction;
use todoboard_client::cli::items::ItemsAction;
use todoboard_client::cli::{Cli, Commands, OutputFormat};
use todoboard_client::client::TodoboardClient;
use todoboard_client::output::{format_output, pretty};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut client = TodoboardClient::new(&cli.base_url);
    if let Some(token) = &cli.token {
        client = client.with_token(token);
    }
    let out = Output {
        format: cli.format,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Clipboards(clipboards_cmd) => match clipboards_cmd.action {
            ClipboardsAction::List => {
                let clipboards = client.list_clipboards().await?;
                print(out, &clipboards, || pretty::format_clipboards(&clipboards));
            }
            ClipboardsAction::Create { name } => {
                let clipboard = client.create_clipboard(&name).await?;
                print(out, &clipboard, || {
                    format!("Created:\n{}", pretty::format_clipboard(&clipboard))
                });
            }
            ClipboardsAction::Rename { id, name } => {
                let clipboard = client.rename_clipboard(id, &name).await?;
                print(out, &clipboard, || {
                    format!("Renamed:\n{}", pretty::format_clipboard(&clipboard))
                });
            }
            ClipboardsAction::Delete { id } => {
                let clipboard = client.delete_clipboard(id).await?;
                print(out, &clipboard, || format!("Deleted clipboard {}", id));
            }
        },
        Commands::Items(items_cmd) => match items_cmd.action {
            ItemsAction::List { clipboard_id } => {
                let items = client.list_items(clipboard_id).await?;
                print(out, &items, || pretty::format_items(&items));
            }
            ItemsAction::Add { clipboard_id, name } => {
                let item = client.add_item(clipboard_id, &name).await?;
                print(out, &item, || format!("Added:\n{}", pretty::format_item(&item)));
            }
            ItemsAction::Rename { id, name } => {
                let item = client.rename_item(id, &name).await?;
                print(out, &item, || format!("Renamed:\n{}", pretty::format_item(&item)));
            }
            ItemsAction::Delete { id } => {
                let item = client.delete_item(id).await?;
                print(out, &item, || format!("Deleted item {}", id));
            }
            ItemsAction::Complete { id } => {
                let item = client.complete_item(id).await?;
                print(out, &item, || pretty::format_item(&item));
            }
            ItemsAction::Unfinish { id } => {
                let item = client.unfinish_item(id).await?;
                print(out, &item, || pretty::format_item(&item));
            }
        },
        Commands::Health => {
            let health = client.health().await?;
            print(out, &health, || format!("Server status: {}", health.status));
        }
    }

    Ok(())
}

#[derive(Clone, Copy)]
struct Output {
    format: OutputFormat,
    quiet: bool,
}

/// Prints `value` as JSON, or its pretty form unless `--quiet` is set.
fn print<T: Serialize>(out: Output, value: &T, pretty: impl FnOnce() -> String) {
    match out.format {
        OutputFormat::Json => println!("{}", format_output(value, out.format)),
        OutputFormat::Pretty if !out.quiet => println!("{}", pretty()),
        OutputFormat::Pretty => {}
    }
}

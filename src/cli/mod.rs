pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "noteful")]
#[command(about = "Noteful CLI - manage folders on a running API or directly in the database")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Folder operations against a running API server")]
    Folders {
        #[arg(
            long,
            global = true,
            env = "NOTEFUL_SERVER",
            default_value = "http://localhost:8000/api",
            help = "API root URL"
        )]
        server: String,

        #[command(subcommand)]
        cmd: commands::folders::FolderCommands,
    },

    #[command(about = "Direct database maintenance (uses DATABASE_URL)")]
    Db {
        #[command(subcommand)]
        cmd: commands::db::DbCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Folders { server, cmd } => commands::folders::handle(cmd, &server, output_format).await,
        Commands::Db { cmd } => commands::db::handle(cmd, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_folder_create() {
        let cli = Cli::try_parse_from([
            "noteful",
            "--json",
            "folders",
            "--server",
            "http://127.0.0.1:9000/api",
            "create",
            "Important",
        ])
        .unwrap();

        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        match cli.command {
            Commands::Folders { server, cmd } => {
                assert_eq!(server, "http://127.0.0.1:9000/api");
                assert!(matches!(
                    cmd,
                    commands::folders::FolderCommands::Create { ref name } if name == "Important"
                ));
            }
            _ => panic!("expected folders command"),
        }
    }

    #[test]
    fn parses_db_reset() {
        let cli = Cli::try_parse_from(["noteful", "db", "reset"]).unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Text));
        assert!(matches!(
            cli.command,
            Commands::Db { cmd: commands::db::DbCommands::Reset }
        ));
    }
}

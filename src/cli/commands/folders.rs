use clap::Subcommand;
use serde_json::json;

use crate::cli::client::FolderClient;
use crate::cli::utils::{output_folder, output_folders, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum FolderCommands {
    #[command(about = "List all folders")]
    List,

    #[command(about = "Show a single folder")]
    Get {
        #[arg(help = "Folder ID")]
        id: String,
    },

    #[command(about = "Create a folder")]
    Create {
        #[arg(help = "Folder name")]
        name: String,
    },

    #[command(about = "Delete a folder")]
    Delete {
        #[arg(help = "Folder ID")]
        id: String,
    },
}

pub async fn handle(cmd: FolderCommands, server: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = FolderClient::new(server)?;

    match cmd {
        FolderCommands::List => {
            let folders = client.list().await?;
            output_folders(&output_format, &folders)
        }
        FolderCommands::Get { id } => {
            let folder = client.get(&id).await?;
            output_folder(&output_format, &folder)
        }
        FolderCommands::Create { name } => {
            let (folder, location) = client.create(&name).await?;
            output_success(
                &output_format,
                &format!("Created folder {} ({})", folder.id, folder.name),
                Some(json!({ "folder": folder, "location": location })),
            )
        }
        FolderCommands::Delete { id } => {
            client.delete(&id).await?;
            output_success(&output_format, &format!("Deleted folder {}", id), None)
        }
    }
}

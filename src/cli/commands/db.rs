use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;
use crate::database::{DatabaseManager, FolderRepository, FolderStore, NewFolder};

/// Folder names inserted by `db seed`; they get ids 1..=3 on a fresh table
pub const FIXTURE_FOLDERS: &[&str] = &["Important", "Super", "Spangley"];

#[derive(Subcommand)]
pub enum DbCommands {
    #[command(about = "Create the folders table if it does not exist")]
    Init,

    #[command(about = "Delete every folder and restart id assignment")]
    Reset,

    #[command(about = "Insert the fixture folders")]
    Seed,
}

pub async fn handle(cmd: DbCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let db = DatabaseManager::from_env(&config::config().database).await?;
    let repo = FolderRepository::new(db.pool().clone());

    let result = match cmd {
        DbCommands::Init => {
            repo.ensure_table().await?;
            output_success(&output_format, "Folders table ready", None)
        }
        DbCommands::Reset => {
            repo.reset().await?;
            output_success(&output_format, "Folders table reset", None)
        }
        DbCommands::Seed => {
            let folders = seed_fixtures(&repo).await?;
            output_success(
                &output_format,
                &format!("Seeded {} folders", folders.len()),
                Some(json!(folders)),
            )
        }
    };

    db.close().await;
    result
}

/// Insert `FIXTURE_FOLDERS` in order
pub async fn seed_fixtures(
    store: &dyn FolderStore,
) -> anyhow::Result<Vec<crate::database::Folder>> {
    let mut created = Vec::with_capacity(FIXTURE_FOLDERS.len());
    for name in FIXTURE_FOLDERS {
        let folder = store
            .insert(NewFolder {
                name: name.to_string(),
            })
            .await?;
        created.push(folder);
    }
    Ok(created)
}

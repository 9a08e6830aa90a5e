use serde::Serialize;
use serde_json::{json, Value};

use crate::api::format::FolderView;
use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output folders as pretty JSON or an aligned `id  name` table
pub fn output_folders(output_format: &OutputFormat, folders: &[FolderView]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => print_json(&folders)?,
        OutputFormat::Text => {
            if folders.is_empty() {
                println!("No folders found");
                return Ok(());
            }
            for line in folder_table(folders) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

pub fn output_folder(output_format: &OutputFormat, folder: &FolderView) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => print_json(folder)?,
        OutputFormat::Text => println!("{}\t{}", folder.id, folder.name),
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn folder_table(folders: &[FolderView]) -> Vec<String> {
    let width = folders
        .iter()
        .map(|f| f.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut lines = Vec::with_capacity(folders.len() + 1);
    lines.push(format!("{:>width$}  {}", "ID", "NAME", width = width));
    for folder in folders {
        lines.push(format!("{:>width$}  {}", folder.id, folder.name, width = width));
    }
    lines
}

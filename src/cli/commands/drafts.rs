//! `fwt drafts` command - list saved wizard drafts

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{open_workspace, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::store::DraftStore;

#[derive(clap::Args, Debug)]
pub struct DraftsArgs {}

pub fn run(_args: DraftsArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = open_workspace(global)?;
    let store = DraftStore::new(&workspace);
    let drafts = store.list()?;

    if drafts.is_empty() {
        println!("No drafts found.");
        println!();
        println!(
            "Save one from the wizard with: {}",
            style("fwt new --draft").yellow()
        );
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            let configs: Vec<_> = drafts.iter().map(|(_, d)| d).collect();
            println!("{}", serde_json::to_string_pretty(&configs).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            let configs: Vec<_> = drafts.iter().map(|(_, d)| d).collect();
            print!("{}", serde_yml::to_string(&configs).into_diagnostic()?);
        }
        _ => {
            println!(
                "{:<32} {:<16} {}",
                style("NAME").bold(),
                style("CATEGORY").bold(),
                style("FILE").bold()
            );
            println!("{}", "-".repeat(72));
            for (path, draft) in &drafts {
                let name = if draft.template_name.is_empty() {
                    "(unnamed)"
                } else {
                    &draft.template_name
                };
                println!(
                    "{:<32} {:<16} {}",
                    truncate_str(name, 30),
                    draft
                        .category
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    style(path.display()).dim()
                );
            }
            println!();
            println!("{} draft(s) found", style(drafts.len()).cyan());
        }
    }

    Ok(())
}

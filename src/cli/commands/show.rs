//! `fwt show` command - display one template's schema

use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::open_workspace;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::loader;
use crate::schema::form::FormSchema;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Template ID (or unique fragment of one)
    pub id: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = open_workspace(global)?;

    let (_, schema): (_, FormSchema) =
        loader::load_by_id(&workspace.templates_dir(), &args.id)?
            .ok_or_else(|| miette::miette!("no template matching '{}' found", args.id))?;

    match global.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&schema).into_diagnostic()?);
        }
        OutputFormat::Id => println!("{}", schema.id),
        // YAML is the natural full-fidelity view for show
        _ => print!("{}", serde_yml::to_string(&schema).into_diagnostic()?),
    }

    Ok(())
}

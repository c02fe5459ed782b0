//! `fwt list` command - list templates in the workspace

use console::style;
use miette::{IntoDiagnostic, Result};
use std::str::FromStr;

use crate::cli::helpers::{escape_csv, format_short_id, open_workspace, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::category::Category;
use crate::schema::form::FormSchema;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by category
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Limit output to N items
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only, not the items
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = open_workspace(global)?;

    let mut schemas: Vec<FormSchema> = Vec::new();
    for path in workspace.iter_template_files() {
        match crate::yaml::parse_yaml_file::<FormSchema>(&path) {
            Ok(schema) => schemas.push(schema),
            Err(e) => {
                eprintln!(
                    "{} Failed to parse {}: {}",
                    style("!").yellow(),
                    path.display(),
                    e
                );
            }
        }
    }

    if let Some(filter) = &args.category {
        let filter = Category::from_str(filter).map_err(|e| miette::miette!("{}", e))?;
        schemas.retain(|s| s.category == filter);
    }

    schemas.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    if let Some(limit) = args.limit {
        schemas.truncate(limit);
    }

    if args.count {
        println!("{}", schemas.len());
        return Ok(());
    }

    if schemas.is_empty() {
        match global.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Yaml => println!("[]"),
            _ => {
                println!("No templates found.");
                println!();
                println!("Create one with: {}", style("fwt new --interactive").yellow());
            }
        }
        return Ok(());
    }

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&schemas).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&schemas).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            println!("id,title,category,fields,published,created");
            for schema in &schemas {
                println!(
                    "{},{},{},{},{},{}",
                    schema.id,
                    escape_csv(&schema.title),
                    schema.category,
                    schema.fields.len(),
                    schema.is_published,
                    schema.created_at.format("%Y-%m-%dT%H:%M:%SZ")
                );
            }
        }
        OutputFormat::Tsv => {
            println!(
                "{:<16} {:<32} {:<16} {:<7} {:<10}",
                style("ID").bold(),
                style("TITLE").bold(),
                style("CATEGORY").bold(),
                style("FIELDS").bold(),
                style("CREATED").bold()
            );
            println!("{}", "-".repeat(84));

            for schema in &schemas {
                println!(
                    "{:<16} {:<32} {:<16} {:<7} {:<10}",
                    format_short_id(&schema.id),
                    truncate_str(&schema.title, 30),
                    schema.category,
                    schema.fields.len(),
                    schema.created_at.format("%Y-%m-%d")
                );
            }

            println!();
            println!("{} template(s) found", style(schemas.len()).cyan());
        }
        OutputFormat::Id => {
            for schema in &schemas {
                println!("{}", schema.id);
            }
        }
        OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}

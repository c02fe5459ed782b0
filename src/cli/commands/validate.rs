//! `fwt validate` command - check a category configuration
//!
//! Runs the category validator over a YAML file and/or `--set` pairs and
//! prints every error it finds. An unrecognized category name degrades to
//! an invalid result rather than a hard error, so scripts can probe
//! categories they do not control.

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::new::parse_set_pairs;
use crate::cli::GlobalOpts;
use crate::core::category::Category;
use crate::wizard::config::CategoryData;
use crate::wizard::validate::{validate_category_configuration, ValidationResult};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Template category
    #[arg(long, short = 'c')]
    pub category: String,

    /// YAML file holding the category configuration
    pub file: Option<PathBuf>,

    /// Additional configuration entries, e.g. --set passingScore=70
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let mut data = match &args.file {
        Some(path) => crate::yaml::parse_yaml_file::<CategoryData>(path)?,
        None => CategoryData::new(),
    };
    data.merge(&parse_set_pairs(&args.set)?);

    // Unknown category names degrade to an invalid result; the schema
    // builder path is the one that refuses outright.
    let result = match args.category.parse::<Category>() {
        Ok(category) => validate_category_configuration(category, &data),
        Err(_) => ValidationResult::unknown_category(&args.category),
    };

    if result.valid {
        if !global.quiet {
            println!(
                "{} Configuration is valid for category '{}'",
                style("✓").green(),
                args.category
            );
        }
        Ok(())
    } else {
        for error in &result.errors {
            println!("{} {}", style("✗").red(), error);
        }
        Err(miette::miette!(
            "{} validation error(s) for category '{}'",
            result.errors.len(),
            args.category
        ))
    }
}

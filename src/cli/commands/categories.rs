//! `fwt categories` command - list categories and their configuration keys

use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::category::Category;

#[derive(clap::Args, Debug)]
pub struct CategoriesArgs {}

pub fn run(_args: CategoriesArgs, _global: &GlobalOpts) -> Result<()> {
    println!(
        "{:<18} {:<22} {}",
        style("CATEGORY").bold(),
        style("LABEL").bold(),
        style("REQUIRED KEYS").bold()
    );
    println!("{}", "-".repeat(72));

    for category in Category::all() {
        println!(
            "{:<18} {:<22} {}",
            category.as_str(),
            category.label(),
            category.required_keys().join(", ")
        );
    }

    println!();
    println!(
        "Validate a configuration with: {}",
        style("fwt validate --category <name> --set key=value").yellow()
    );
    Ok(())
}

//! `fwt new` command - build a template through the wizard
//!
//! Two front ends over the same [`TemplateWizard`]: a flag-driven path
//! (`--category`, `--name`, `--set key=value`) for scripting, and an
//! interactive dialoguer path (`--interactive`) that walks the steps the
//! way the hosting UI would.

use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use miette::{IntoDiagnostic, Result};
use serde_json::Value;

use crate::cli::helpers::open_workspace;
use crate::cli::GlobalOpts;
use crate::core::category::Category;
use crate::core::store::{save_template, DraftStore};
use crate::schema::builder::build_schema_for_category;
use crate::wizard::config::{CategoryData, ConfigPatch};
use crate::wizard::state::{TemplateWizard, STEP_COUNT};
use crate::wizard::validate::{SLOT_INTERVALS, VOTE_TRACKING_METHODS};

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Template category (polls, quiz, ecommerce, services, data-collection, events)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Template name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Template description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Category configuration entries, e.g. --set minOptions=2
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Walk through the wizard steps interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Save the configuration as a draft instead of finalizing
    #[arg(long)]
    pub draft: bool,

    /// Resume a saved draft by name
    #[arg(long, value_name = "NAME")]
    pub from_draft: Option<String>,
}

pub fn run(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = open_workspace(global)?;
    let mut store = DraftStore::new(&workspace);

    let mut wizard = match &args.from_draft {
        Some(name) => {
            let (path, draft) = store
                .load(name)?
                .ok_or_else(|| miette::miette!("no draft named '{}' found", name))?;
            if !global.quiet {
                println!(
                    "{} Resuming draft {}",
                    style("✓").green(),
                    style(path.display()).cyan()
                );
            }
            TemplateWizard::from_draft(draft)
        }
        None => TemplateWizard::new(),
    };

    // Flags apply in both modes; interactive prompts fill in the rest.
    if let Some(category) = &args.category {
        let category: Category = category.parse().map_err(|e| miette::miette!("{}", e))?;
        wizard.select_category(category);
    }
    let mut patch = ConfigPatch::default();
    patch.template_name = args.name.clone();
    patch.template_description = args.description.clone();
    patch.category_data = parse_set_pairs(&args.set)?;
    wizard.update(patch);

    if args.interactive {
        run_interactive(wizard, &workspace, &mut store, global)
    } else {
        run_scripted(wizard, &workspace, &mut store, args.draft, global)
    }
}

/// Parse repeated `--set key=value` flags; values are read as YAML
/// scalars so `2`, `true`, and `session` get their natural types
pub fn parse_set_pairs(pairs: &[String]) -> Result<CategoryData> {
    let mut data = CategoryData::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| miette::miette!("--set expects KEY=VALUE, got '{}'", pair))?;
        let value: Value = serde_yml::from_str(raw).into_diagnostic()?;
        data.set(key.trim(), value);
    }
    Ok(data)
}

fn run_scripted(
    mut wizard: TemplateWizard,
    workspace: &crate::core::project::Workspace,
    store: &mut DraftStore,
    save_draft: bool,
    global: &GlobalOpts,
) -> Result<()> {
    if save_draft {
        let name = wizard.config().template_name.clone();
        wizard
            .close(true, store)
            .map_err(|e| miette::miette!("{}", e))?;
        println!(
            "{} Saved draft {}",
            style("✓").green(),
            style(store.draft_path(&name).display()).cyan()
        );
        return Ok(());
    }

    let reached = wizard.go_to_step(STEP_COUNT - 1);
    if reached != STEP_COUNT - 1 {
        let labels = wizard.step_labels();
        eprintln!(
            "{} Cannot finalize: blocked at step {} ({})",
            style("✗").red(),
            reached,
            labels[reached]
        );
        for error in wizard.validation_errors() {
            eprintln!("  {} {}", style("-").dim(), error);
        }
        return Err(miette::miette!("template configuration is not valid"));
    }

    finalize(&wizard, workspace, global)
}

fn finalize(
    wizard: &TemplateWizard,
    workspace: &crate::core::project::Workspace,
    global: &GlobalOpts,
) -> Result<()> {
    let schema =
        build_schema_for_category(wizard.config()).map_err(|e| miette::miette!("{}", e))?;
    let path = save_template(workspace, &schema)?;

    println!(
        "{} Created template {} ({})",
        style("✓").green(),
        style(&schema.id).bold(),
        schema.category
    );
    if !global.quiet {
        println!("  {} fields, saved to {}", schema.fields.len(), style(path.display()).dim());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Interactive mode
// ---------------------------------------------------------------------------

fn run_interactive(
    mut wizard: TemplateWizard,
    workspace: &crate::core::project::Workspace,
    store: &mut DraftStore,
    global: &GlobalOpts,
) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!();
    println!("{} Template wizard", style("◆").cyan());
    println!("{}", style("─".repeat(50)).dim());

    loop {
        let step = wizard.current_step();
        let labels = wizard.step_labels();
        println!();
        println!(
            "{} Step {}/{}: {}",
            style("›").cyan(),
            step + 1,
            STEP_COUNT,
            style(&labels[step]).bold()
        );

        match step {
            0 => prompt_category(&mut wizard, &theme)?,
            1 => prompt_basics(&mut wizard, &theme)?,
            2 => prompt_category_settings(&mut wizard, &theme)?,
            _ => {
                return preview_and_finish(wizard, workspace, store, global, &theme);
            }
        }

        wizard.next_step();
        if wizard.current_step() == step {
            // validation refused the advance; show why and loop back
            for error in wizard.validation_errors() {
                eprintln!("  {} {}", style("✗").red(), error);
            }
        }
    }
}

fn prompt_category(wizard: &mut TemplateWizard, theme: &ColorfulTheme) -> Result<()> {
    let items: Vec<&str> = Category::all().iter().map(|c| c.label()).collect();
    let default = wizard
        .category()
        .and_then(|c| Category::all().iter().position(|x| *x == c))
        .unwrap_or(0);

    let selection = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&items)
        .default(default)
        .interact()
        .into_diagnostic()?;

    wizard.select_category(Category::all()[selection]);
    Ok(())
}

fn prompt_basics(wizard: &mut TemplateWizard, theme: &ColorfulTheme) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Template name")
        .default(wizard.config().template_name.clone())
        .interact_text()
        .into_diagnostic()?;

    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .allow_empty(true)
        .default(wizard.config().template_description.clone())
        .interact_text()
        .into_diagnostic()?;

    wizard.update(ConfigPatch {
        template_name: Some(name),
        template_description: Some(description),
        category_data: CategoryData::new(),
    });
    Ok(())
}

/// One configuration prompt on the category settings step
struct Prompt {
    key: &'static str,
    label: &'static str,
    kind: PromptKind,
    /// Only ask when this boolean key is already answered true
    gated_on: Option<&'static str>,
}

enum PromptKind {
    Int { default: i64 },
    Float { default: f64 },
    Bool { default: bool },
    Choice { options: Vec<String>, default: usize },
}

fn config_prompts(category: Category) -> Vec<Prompt> {
    let prompt = |key, label, kind| Prompt {
        key,
        label,
        kind,
        gated_on: None,
    };

    match category {
        Category::Polls => vec![
            prompt("minOptions", "Minimum options", PromptKind::Int { default: 2 }),
            prompt("maxOptions", "Maximum options", PromptKind::Int { default: 10 }),
            prompt(
                "voteTracking",
                "Vote tracking",
                PromptKind::Choice {
                    options: VOTE_TRACKING_METHODS.iter().map(|s| s.to_string()).collect(),
                    default: 0,
                },
            ),
            prompt(
                "preventDuplicates",
                "Prevent duplicate votes",
                PromptKind::Bool { default: true },
            ),
        ],
        Category::Quiz => vec![
            prompt("minQuestions", "Minimum questions", PromptKind::Int { default: 5 }),
            prompt("passingScore", "Passing score (0-100)", PromptKind::Int { default: 70 }),
            prompt("allowRetakes", "Allow retakes", PromptKind::Bool { default: false }),
        ],
        Category::Ecommerce => vec![
            prompt(
                "enableInventory",
                "Track inventory",
                PromptKind::Bool { default: true },
            ),
            prompt("enableTax", "Charge tax", PromptKind::Bool { default: false }),
            Prompt {
                key: "taxRate",
                label: "Tax rate (0-1)",
                kind: PromptKind::Float { default: 0.0 },
                gated_on: Some("enableTax"),
            },
        ],
        Category::Services => vec![
            prompt(
                "slotInterval",
                "Slot interval (minutes)",
                PromptKind::Choice {
                    options: SLOT_INTERVALS.iter().map(|n| n.to_string()).collect(),
                    default: 1,
                },
            ),
            prompt(
                "maxBookingsPerSlot",
                "Max bookings per slot",
                PromptKind::Int { default: 1 },
            ),
        ],
        Category::DataCollection => vec![
            prompt("minItems", "Minimum items per order", PromptKind::Int { default: 1 }),
            prompt(
                "enableCategories",
                "Group items into categories",
                PromptKind::Bool { default: false },
            ),
        ],
        Category::Events => vec![
            prompt(
                "maxTicketsPerOrder",
                "Max tickets per order",
                PromptKind::Int { default: 4 },
            ),
            prompt(
                "allowGuestCount",
                "Ask for a guest count",
                PromptKind::Bool { default: false },
            ),
        ],
    }
}

fn prompt_category_settings(wizard: &mut TemplateWizard, theme: &ColorfulTheme) -> Result<()> {
    let category = match wizard.category() {
        Some(c) => c,
        None => return Ok(()),
    };

    let mut data = CategoryData::new();
    for prompt in config_prompts(category) {
        if let Some(gate) = prompt.gated_on {
            let answered = data
                .get_bool(gate)
                .or_else(|| wizard.category_data().get_bool(gate));
            if answered != Some(true) {
                continue;
            }
        }

        let value = match prompt.kind {
            PromptKind::Int { default } => {
                let existing = wizard.category_data().get_i64(prompt.key).unwrap_or(default);
                let answer: i64 = Input::with_theme(theme)
                    .with_prompt(prompt.label)
                    .default(existing)
                    .interact_text()
                    .into_diagnostic()?;
                Value::from(answer)
            }
            PromptKind::Float { default } => {
                let existing = wizard.category_data().get_f64(prompt.key).unwrap_or(default);
                let answer: f64 = Input::with_theme(theme)
                    .with_prompt(prompt.label)
                    .default(existing)
                    .interact_text()
                    .into_diagnostic()?;
                Value::from(answer)
            }
            PromptKind::Bool { default } => {
                let existing = wizard.category_data().get_bool(prompt.key).unwrap_or(default);
                let answer = Confirm::with_theme(theme)
                    .with_prompt(prompt.label)
                    .default(existing)
                    .interact()
                    .into_diagnostic()?;
                Value::from(answer)
            }
            PromptKind::Choice { options, default } => {
                let selection = Select::with_theme(theme)
                    .with_prompt(prompt.label)
                    .items(&options)
                    .default(default)
                    .interact()
                    .into_diagnostic()?;
                // numeric choices (slot intervals) stay numbers
                match options[selection].parse::<i64>() {
                    Ok(n) => Value::from(n),
                    Err(_) => Value::from(options[selection].clone()),
                }
            }
        };
        data.set(prompt.key, value);
    }

    wizard.update(ConfigPatch::data(data));
    Ok(())
}

fn preview_and_finish(
    mut wizard: TemplateWizard,
    workspace: &crate::core::project::Workspace,
    store: &mut DraftStore,
    global: &GlobalOpts,
    theme: &ColorfulTheme,
) -> Result<()> {
    let config = wizard.config();
    println!();
    println!("  Name:        {}", style(&config.template_name).bold());
    if !config.template_description.is_empty() {
        println!("  Description: {}", config.template_description);
    }
    if let Some(category) = config.category {
        println!("  Category:    {}", category.label());
    }
    for (key, value) in config.category_data.iter() {
        println!("  {:<12} {}", format!("{}:", key), value);
    }
    println!();

    let choices = ["Create template", "Save as draft", "Discard"];
    let selection = Select::with_theme(theme)
        .with_prompt("Finish")
        .items(&choices)
        .default(0)
        .interact()
        .into_diagnostic()?;

    match selection {
        0 => finalize(&wizard, workspace, global),
        1 => {
            let name = wizard.config().template_name.clone();
            wizard
                .close(true, store)
                .map_err(|e| miette::miette!("{}", e))?;
            println!(
                "{} Saved draft {}",
                style("✓").green(),
                style(store.draft_path(&name).display()).cyan()
            );
            Ok(())
        }
        _ => {
            wizard.cancel();
            println!("{} Discarded", style("!").yellow());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_pairs_types() {
        let data = parse_set_pairs(&[
            "minOptions=2".to_string(),
            "voteTracking=session".to_string(),
            "preventDuplicates=true".to_string(),
        ])
        .unwrap();

        assert_eq!(data.get_i64("minOptions"), Some(2));
        assert_eq!(data.get_str("voteTracking"), Some("session"));
        assert_eq!(data.get_bool("preventDuplicates"), Some(true));
    }

    #[test]
    fn test_parse_set_pairs_rejects_bare_key() {
        assert!(parse_set_pairs(&["minOptions".to_string()]).is_err());
    }

    #[test]
    fn test_every_category_has_prompts_for_required_keys() {
        for category in Category::all() {
            let prompts = config_prompts(*category);
            for required in category.required_keys() {
                assert!(
                    prompts.iter().any(|p| p.key == *required),
                    "{} missing prompt for {}",
                    category,
                    required
                );
            }
        }
    }
}

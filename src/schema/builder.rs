//! Per-category schema builders
//!
//! Builders turn a finalized [`WizardConfig`] into a complete
//! [`FormSchema`]: generated fields, submission settings, and the
//! category's business-logic block. They trust that the category
//! validator already passed and do not re-check the configuration;
//! missing optional values fall back to documented defaults.
//!
//! Unlike the validators, which degrade gracefully, builders refuse to
//! proceed on a config that cannot produce a schema (no category, empty
//! template name).

use chrono::Utc;
use thiserror::Error;

use crate::core::category::Category;
use crate::core::identity::{field_id, TemplateId};
use crate::schema::form::{
    BusinessLogicConfig, FieldOption, FieldType, FieldValidation, FormField, FormSchema,
    FormSettings, LayoutSettings, SubmissionSettings,
};
use crate::wizard::config::WizardConfig;

/// Errors from schema building
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("cannot build a schema without a category")]
    MissingCategory,

    #[error("template name must not be empty")]
    EmptyTemplateName,
}

/// Build the form schema for the config's category
pub fn build_schema_for_category(config: &WizardConfig) -> Result<FormSchema, BuildError> {
    let category = config.category.ok_or(BuildError::MissingCategory)?;
    if config.template_name.trim().is_empty() {
        return Err(BuildError::EmptyTemplateName);
    }

    let schema = match category {
        Category::Polls => build_poll_schema(config),
        Category::Quiz => build_quiz_schema(config),
        Category::Ecommerce => build_product_schema(config),
        Category::Services => build_appointment_schema(config),
        Category::DataCollection => build_restaurant_schema(config),
        Category::Events => build_events_schema(config),
    };
    Ok(schema)
}

/// Incrementally numbers fields as they are added, so `order` always
/// matches insertion sequence
#[derive(Default)]
struct FieldList {
    fields: Vec<FormField>,
}

impl FieldList {
    fn push(&mut self, mut field: FormField) {
        field.order = self.fields.len() as u32;
        self.fields.push(field);
    }
}

fn field(field_type: FieldType, label: &str, field_name: &str, required: bool) -> FormField {
    FormField {
        id: field_id("fld"),
        field_type,
        label: label.to_string(),
        field_name: field_name.to_string(),
        placeholder: None,
        help_text: None,
        required,
        options: None,
        validation: None,
        order: 0,
    }
}

fn envelope(
    config: &WizardConfig,
    category: Category,
    fields: Vec<FormField>,
    allow_multiple: bool,
    success_message: &str,
    business_logic: Option<BusinessLogicConfig>,
) -> FormSchema {
    let now = Utc::now();
    FormSchema {
        id: TemplateId::new(),
        form_id: field_id("form"),
        version: 1,
        title: config.template_name.clone(),
        description: config.template_description.clone(),
        fields,
        settings: FormSettings {
            layout: LayoutSettings::default(),
            submission: SubmissionSettings {
                success_message: success_message.to_string(),
                allow_multiple,
            },
        },
        category,
        business_logic,
        is_published: false,
        created_at: now,
        updated_at: now,
    }
}

fn build_poll_schema(config: &WizardConfig) -> FormSchema {
    let data = &config.category_data;

    let mut list = FieldList::default();
    let mut choice = field(FieldType::Radio, "Your choice", "poll_choice", true);
    choice.options = Some(vec![
        FieldOption::new("Option 1", "option_1"),
        FieldOption::new("Option 2", "option_2"),
        FieldOption::new("Option 3", "option_3"),
    ]);
    choice.help_text = Some("Replace these placeholder options with your poll choices".to_string());
    list.push(choice);

    let logic = BusinessLogicConfig::Poll {
        vote_field: "poll_choice".to_string(),
        prevent_duplicates: data.get_bool("preventDuplicates").unwrap_or(true),
        tracking_method: data
            .get_str("voteTracking")
            .unwrap_or("session")
            .to_string(),
    };

    envelope(
        config,
        Category::Polls,
        list.fields,
        false,
        "Thanks for voting!",
        Some(logic),
    )
}

fn build_quiz_schema(config: &WizardConfig) -> FormSchema {
    let data = &config.category_data;
    let allow_retakes = data.get_bool("allowRetakes").unwrap_or(false);

    let mut list = FieldList::default();
    for n in 1..=2 {
        let mut question = field(
            FieldType::Radio,
            &format!("Sample question {}", n),
            &format!("question_{}", n),
            true,
        );
        question.options = Some(vec![
            FieldOption::new("Answer A", "a"),
            FieldOption::new("Answer B", "b"),
            FieldOption::new("Answer C", "c"),
        ]);
        list.push(question);
    }

    let logic = BusinessLogicConfig::Quiz {
        passing_score: data.get_f64("passingScore").unwrap_or(70.0),
        allow_retakes,
    };

    envelope(
        config,
        Category::Quiz,
        list.fields,
        allow_retakes,
        "Quiz submitted. Your score is on its way!",
        Some(logic),
    )
}

fn build_product_schema(config: &WizardConfig) -> FormSchema {
    let data = &config.category_data;

    let mut list = FieldList::default();
    let mut product = field(FieldType::Select, "Product", "product", true);
    product.options = Some(vec![
        FieldOption::new("Sample product", "sample_product"),
    ]);
    list.push(product);

    let mut quantity = field(FieldType::Number, "Quantity", "quantity", true);
    quantity.validation = Some(FieldValidation {
        min: Some(1.0),
        max: None,
    });
    quantity.placeholder = Some("1".to_string());
    list.push(quantity);

    let logic = BusinessLogicConfig::Inventory {
        enable_inventory: data.get_bool("enableInventory").unwrap_or(false),
        enable_tax: data.get_bool("enableTax").unwrap_or(false),
        tax_rate: data.get_f64("taxRate").unwrap_or(0.0),
    };

    envelope(
        config,
        Category::Ecommerce,
        list.fields,
        true,
        "Order received. You will get a confirmation shortly.",
        Some(logic),
    )
}

fn build_appointment_schema(config: &WizardConfig) -> FormSchema {
    let data = &config.category_data;
    let slot_interval = data.get_i64("slotInterval").unwrap_or(30);

    let mut list = FieldList::default();
    list.push(field(FieldType::Date, "Preferred date", "appointment_date", true));

    let mut slot = field(FieldType::Select, "Time slot", "time_slot", true);
    slot.options = Some(slot_options(slot_interval));
    list.push(slot);

    let logic = BusinessLogicConfig::Appointment {
        slot_interval,
        max_bookings_per_slot: data.get_i64("maxBookingsPerSlot").unwrap_or(1),
    };

    envelope(
        config,
        Category::Services,
        list.fields,
        false,
        "Your appointment request has been received.",
        Some(logic),
    )
}

fn build_restaurant_schema(config: &WizardConfig) -> FormSchema {
    let data = &config.category_data;

    let mut list = FieldList::default();
    let mut item = field(FieldType::Select, "Menu item", "menu_item", true);
    item.options = Some(vec![FieldOption::new("Sample item", "sample_item")]);
    item.help_text = Some("Replace with your menu items".to_string());
    list.push(item);

    let logic = BusinessLogicConfig::Order {
        min_items: data.get_i64("minItems").unwrap_or(1),
        enable_categories: data.get_bool("enableCategories").unwrap_or(false),
    };

    envelope(
        config,
        Category::DataCollection,
        list.fields,
        true,
        "Order received!",
        Some(logic),
    )
}

fn build_events_schema(config: &WizardConfig) -> FormSchema {
    let data = &config.category_data;

    let mut list = FieldList::default();
    let mut rsvp = field(FieldType::Radio, "Will you attend?", "rsvp", true);
    rsvp.options = Some(vec![
        FieldOption::new("Yes", "yes"),
        FieldOption::new("No", "no"),
        FieldOption::new("Maybe", "maybe"),
    ]);
    list.push(rsvp);

    if data.get_bool("allowGuestCount").unwrap_or(false) {
        let mut guests = field(FieldType::Number, "Number of guests", "guest_count", false);
        guests.validation = Some(FieldValidation {
            min: Some(0.0),
            max: data.get_i64("maxTicketsPerOrder").map(|n| n as f64),
        });
        list.push(guests);
    }

    // Events schemas carry no business logic block
    envelope(
        config,
        Category::Events,
        list.fields,
        false,
        "Thanks for your RSVP!",
        None,
    )
}

/// Generate time-slot options from 09:00 to 17:00 at `interval` minutes
fn slot_options(interval: i64) -> Vec<FieldOption> {
    let mut options = Vec::new();
    let mut minutes = 9 * 60;
    while minutes < 17 * 60 {
        let label = format!("{:02}:{:02}", minutes / 60, minutes % 60);
        let value = format!("slot_{:02}{:02}", minutes / 60, minutes % 60);
        options.push(FieldOption::new(label, value));
        minutes += interval.max(1);
    }
    options
}

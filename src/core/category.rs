//! Template category enumeration
//!
//! The category is chosen on the wizard's first step and fixes, for the
//! rest of the session, which validator runs, which schema builder runs,
//! and which configuration keys are legal. Every dispatch over this enum
//! is an exhaustive `match`, so adding a variant without wiring up a
//! validator and builder branch fails compilation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Business domain a form template belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Voting / opinion polls
    Polls,
    /// Scored quizzes with pass thresholds
    Quiz,
    /// Product order forms with inventory and tax
    Ecommerce,
    /// Appointment booking with time slots
    Services,
    /// Menu-style item collection (e.g. restaurant orders)
    DataCollection,
    /// Event RSVP forms
    Events,
}

impl Category {
    /// Get the string representation of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Polls => "polls",
            Category::Quiz => "quiz",
            Category::Ecommerce => "ecommerce",
            Category::Services => "services",
            Category::DataCollection => "data-collection",
            Category::Events => "events",
        }
    }

    /// Human-readable label for prompts and listings
    pub fn label(&self) -> &'static str {
        match self {
            Category::Polls => "Poll",
            Category::Quiz => "Quiz",
            Category::Ecommerce => "Product Order",
            Category::Services => "Appointment Booking",
            Category::DataCollection => "Menu Order",
            Category::Events => "Event RSVP",
        }
    }

    /// All categories, in wizard display order
    pub fn all() -> &'static [Category] {
        &[
            Category::Polls,
            Category::Quiz,
            Category::Ecommerce,
            Category::Services,
            Category::DataCollection,
            Category::Events,
        ]
    }

    /// Configuration keys this category requires before the wizard can
    /// advance past its configure step
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            Category::Polls => &["minOptions", "maxOptions"],
            Category::Quiz => &["minQuestions", "passingScore"],
            Category::Ecommerce => &["enableInventory"],
            Category::Services => &["slotInterval", "maxBookingsPerSlot"],
            Category::DataCollection => &["minItems"],
            Category::Events => &["maxTicketsPerOrder"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "polls" | "poll" => Ok(Category::Polls),
            "quiz" => Ok(Category::Quiz),
            "ecommerce" | "product" => Ok(Category::Ecommerce),
            "services" | "appointment" => Ok(Category::Services),
            "data-collection" | "data_collection" | "restaurant" => Ok(Category::DataCollection),
            "events" | "event" => Ok(Category::Events),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Error for category names arriving from outside the type system
#[derive(Debug, Error)]
#[error("Unknown template category: '{0}' (valid: polls, quiz, ecommerce, services, data-collection, events)")]
pub struct UnknownCategory(pub String);

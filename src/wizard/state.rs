//! Wizard state machine
//!
//! Holds the in-progress [`WizardConfig`], the current step index, and
//! nothing else; all navigation is gated by per-step validity. Forward
//! movement that is not allowed is a silent no-op, so UI button handlers
//! can call `next_step` speculatively without guarding.
//!
//! Steps: 0 Select Category, 1 Basic Details, 2 Category Settings,
//! 3 Preview.

use thiserror::Error;

use crate::core::category::Category;
use crate::wizard::config::{CategoryData, ConfigPatch, WizardConfig};
use crate::wizard::validate::{validate_category_configuration, ValidationResult};

/// Number of wizard steps
pub const STEP_COUNT: usize = 4;

const LAST_STEP: usize = STEP_COUNT - 1;

/// Events reported to registered observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// The step index changed
    StepChanged { from: usize, to: usize },
    /// The working config was updated
    ConfigUpdated,
    /// The session ended; `saved` is true when a draft was persisted
    Closed { saved: bool },
}

/// Collaborator that persists an in-progress config as a draft
pub trait DraftSink {
    fn save_draft(&mut self, draft: &WizardConfig) -> Result<(), DraftError>;
}

/// Errors from draft persistence
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("failed to serialize draft: {0}")]
    Serialize(String),

    #[error("failed to write draft: {0}")]
    Io(#[from] std::io::Error),
}

type Observer = Box<dyn FnMut(&WizardEvent)>;

/// The wizard session state machine
#[derive(Default)]
pub struct TemplateWizard {
    config: WizardConfig,
    step: usize,
    closed: bool,
    observers: Vec<Observer>,
}

impl TemplateWizard {
    /// Open a fresh wizard at step 0 with no category selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a wizard seeded from a saved draft
    pub fn from_draft(draft: WizardConfig) -> Self {
        Self {
            config: draft,
            ..Self::default()
        }
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn category(&self) -> Option<Category> {
        self.config.category
    }

    pub fn category_data(&self) -> &CategoryData {
        &self.config.category_data
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Register an observer fired on every state change
    pub fn on_change(&mut self, observer: impl FnMut(&WizardEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, event: WizardEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Choose the category; only honored at step 0. Returns whether the
    /// selection took effect.
    pub fn select_category(&mut self, category: Category) -> bool {
        if self.step != 0 {
            return false;
        }
        self.config.category = Some(category);
        self.notify(WizardEvent::ConfigUpdated);
        true
    }

    /// Apply a partial update to the working config
    pub fn update(&mut self, patch: ConfigPatch) {
        if let Some(name) = patch.template_name {
            self.config.template_name = name;
        }
        if let Some(description) = patch.template_description {
            self.config.template_description = description;
        }
        self.config.category_data.merge(&patch.category_data);
        self.notify(WizardEvent::ConfigUpdated);
    }

    /// Validation of the current category data; invalid when no category
    /// has been chosen yet
    pub fn validation(&self) -> ValidationResult {
        match self.config.category {
            Some(category) => {
                validate_category_configuration(category, &self.config.category_data)
            }
            None => ValidationResult::from_errors(vec!["Select a category first".to_string()]),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation().valid
    }

    pub fn validation_errors(&self) -> Vec<String> {
        self.validation().errors
    }

    /// Whether forward navigation is currently allowed
    pub fn can_go_next(&self) -> bool {
        if self.step >= LAST_STEP {
            return false;
        }
        match self.step {
            0 => self.config.category.is_some(),
            _ => self.is_valid(),
        }
    }

    /// Advance one step; a silent no-op when not allowed
    pub fn next_step(&mut self) {
        if !self.can_go_next() {
            return;
        }
        let from = self.step;
        self.step += 1;
        self.notify(WizardEvent::StepChanged { from, to: from + 1 });
    }

    /// Go back one step; floored at 0, never validated
    pub fn previous_step(&mut self) {
        if self.step == 0 {
            return;
        }
        let from = self.step;
        self.step -= 1;
        self.notify(WizardEvent::StepChanged { from, to: from - 1 });
    }

    /// Jump to `target`. Backward jumps always land; forward jumps
    /// advance one gated step at a time and stop at the first step whose
    /// validation fails. Returns the step actually reached.
    pub fn go_to_step(&mut self, target: usize) -> usize {
        let target = target.min(LAST_STEP);
        while self.step > target {
            self.previous_step();
        }
        while self.step < target && self.can_go_next() {
            self.next_step();
        }
        self.step
    }

    /// Discard all session state and end the session
    pub fn cancel(&mut self) {
        self.config = WizardConfig::new();
        let from = self.step;
        self.step = 0;
        if from != 0 {
            self.notify(WizardEvent::StepChanged { from, to: 0 });
        }
        self.closed = true;
        self.notify(WizardEvent::Closed { saved: false });
    }

    /// End the session, optionally saving the working config as a draft
    /// through `sink`. Returns whether a draft was saved.
    pub fn close(&mut self, save_changes: bool, sink: &mut dyn DraftSink) -> Result<bool, DraftError> {
        if save_changes {
            sink.save_draft(&self.config)?;
        }
        self.closed = true;
        self.notify(WizardEvent::Closed { saved: save_changes });
        Ok(save_changes)
    }

    /// Cosmetic step labels; the middle steps name the chosen category
    pub fn step_labels(&self) -> Vec<String> {
        match self.config.category {
            None => vec![
                "Select Category".to_string(),
                "Basics".to_string(),
                "Configure".to_string(),
                "Preview".to_string(),
            ],
            Some(category) => vec![
                "Select Category".to_string(),
                "Basic Details".to_string(),
                format!("{} Settings", category.label()),
                "Preview".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::config::CategoryData;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// DraftSink that records what it was asked to save
    #[derive(Default)]
    struct RecordingSink {
        drafts: Vec<WizardConfig>,
    }

    impl DraftSink for RecordingSink {
        fn save_draft(&mut self, draft: &WizardConfig) -> Result<(), DraftError> {
            self.drafts.push(draft.clone());
            Ok(())
        }
    }

    fn valid_poll_data() -> CategoryData {
        [
            ("minOptions".to_string(), json!(2)),
            ("maxOptions".to_string(), json!(10)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_next_is_noop_without_category() {
        let mut wizard = TemplateWizard::new();
        wizard.next_step();
        wizard.next_step();
        assert_eq!(wizard.current_step(), 0);
    }

    #[test]
    fn test_next_advances_after_category_selected() {
        let mut wizard = TemplateWizard::new();
        wizard.select_category(Category::Polls);
        wizard.next_step();
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn test_next_gated_by_validator_beyond_step_zero() {
        let mut wizard = TemplateWizard::new();
        wizard.select_category(Category::Polls);
        wizard.next_step();

        // empty poll data fails validation, so we stay at step 1
        wizard.next_step();
        assert_eq!(wizard.current_step(), 1);

        wizard.update(ConfigPatch::data(valid_poll_data()));
        wizard.next_step();
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn test_previous_floored_at_zero() {
        let mut wizard = TemplateWizard::new();
        wizard.previous_step();
        wizard.previous_step();
        assert_eq!(wizard.current_step(), 0);
    }

    #[test]
    fn test_backward_movement_never_validated() {
        let mut wizard = TemplateWizard::new();
        wizard.select_category(Category::Polls);
        wizard.update(ConfigPatch::data(valid_poll_data()));
        wizard.go_to_step(3);
        assert_eq!(wizard.current_step(), 3);

        // wreck the data, then walk back freely
        let mut bad = CategoryData::new();
        bad.set("maxOptions", json!(1));
        wizard.update(ConfigPatch::data(bad));
        wizard.previous_step();
        wizard.previous_step();
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn test_forward_jump_truncates_at_first_invalid_step() {
        let mut wizard = TemplateWizard::new();
        wizard.select_category(Category::Polls);

        // category chosen but data invalid: step 0 gate passes, step 1 gate fails
        let reached = wizard.go_to_step(3);
        assert_eq!(reached, 1);
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn test_forward_jump_lands_when_valid() {
        let mut wizard = TemplateWizard::new();
        wizard.select_category(Category::Polls);
        wizard.update(ConfigPatch::data(valid_poll_data()));
        assert_eq!(wizard.go_to_step(3), 3);
    }

    #[test]
    fn test_go_to_step_clamps_target() {
        let mut wizard = TemplateWizard::new();
        wizard.select_category(Category::Polls);
        wizard.update(ConfigPatch::data(valid_poll_data()));
        assert_eq!(wizard.go_to_step(99), 3);
    }

    #[test]
    fn test_category_immutable_after_step_zero() {
        let mut wizard = TemplateWizard::new();
        wizard.select_category(Category::Polls);
        wizard.next_step();

        assert!(!wizard.select_category(Category::Quiz));
        assert_eq!(wizard.category(), Some(Category::Polls));
    }

    #[test]
    fn test_cancel_resets_everything() {
        let mut wizard = TemplateWizard::new();
        wizard.select_category(Category::Quiz);
        wizard.update(ConfigPatch::name("Pop Quiz"));
        wizard.next_step();

        wizard.cancel();
        assert_eq!(wizard.current_step(), 0);
        assert_eq!(wizard.category(), None);
        assert!(wizard.config().template_name.is_empty());
        assert!(wizard.is_closed());
    }

    #[test]
    fn test_close_with_save_persists_draft() {
        let mut wizard = TemplateWizard::new();
        wizard.select_category(Category::Polls);
        wizard.update(ConfigPatch::name("Half-finished Poll"));

        let mut sink = RecordingSink::default();
        let saved = wizard.close(true, &mut sink).unwrap();
        assert!(saved);
        assert!(wizard.is_closed());
        assert_eq!(sink.drafts.len(), 1);
        assert_eq!(sink.drafts[0].template_name, "Half-finished Poll");
    }

    #[test]
    fn test_close_without_save_skips_sink() {
        let mut wizard = TemplateWizard::new();
        let mut sink = RecordingSink::default();
        let saved = wizard.close(false, &mut sink).unwrap();
        assert!(!saved);
        assert!(sink.drafts.is_empty());
    }

    #[test]
    fn test_observers_see_step_changes() {
        let events: Rc<RefCell<Vec<WizardEvent>>> = Rc::default();
        let sink = events.clone();

        let mut wizard = TemplateWizard::new();
        wizard.on_change(move |e| sink.borrow_mut().push(e.clone()));

        wizard.select_category(Category::Polls);
        wizard.next_step();
        wizard.previous_step();

        let seen = events.borrow();
        assert!(seen.contains(&WizardEvent::ConfigUpdated));
        assert!(seen.contains(&WizardEvent::StepChanged { from: 0, to: 1 }));
        assert!(seen.contains(&WizardEvent::StepChanged { from: 1, to: 0 }));
    }

    #[test]
    fn test_step_labels_follow_category() {
        let mut wizard = TemplateWizard::new();
        assert_eq!(wizard.step_labels()[1], "Basics");

        wizard.select_category(Category::Services);
        assert_eq!(wizard.step_labels()[2], "Appointment Booking Settings");
        assert_eq!(wizard.step_labels().len(), STEP_COUNT);
    }

    #[test]
    fn test_draft_seeded_wizard_starts_at_step_zero() {
        let mut draft = WizardConfig::new();
        draft.template_name = "Resumed".to_string();
        draft.category = Some(Category::Quiz);

        let wizard = TemplateWizard::from_draft(draft);
        assert_eq!(wizard.current_step(), 0);
        assert_eq!(wizard.category(), Some(Category::Quiz));
        assert_eq!(wizard.config().template_name, "Resumed");
    }
}

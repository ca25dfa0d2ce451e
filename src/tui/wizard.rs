//! Multi-step job application form.
//!
//! A wizard over the form steps defined in content. Progress markers are an
//! indexed controller in lockstep with the step index; forward transitions
//! are gated by validating only the current step's fields. On the final step
//! a successful validation emits the collected values; the parent writes the
//! submission and resets the wizard only after the write succeeds, so a
//! failed write leaves the form intact for retry.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::collections::BTreeMap;

use crate::controller::PanelController;
use crate::models::{ApplicationForm, FieldKind, FieldSpec};
use crate::tui::component::Component;
use crate::tui::Theme;
use crate::validate::{validate_step, FieldError, FieldValue};

/// Entered state of one field.
#[derive(Debug, Clone)]
enum FieldState {
    Text {
        buffer: String,
    },
    Select {
        options: Vec<String>,
        chosen: Option<usize>,
    },
    Checkboxes {
        options: Vec<String>,
        checked: Vec<bool>,
        cursor: usize,
    },
}

impl FieldState {
    fn from_spec(spec: &FieldSpec) -> Self {
        match &spec.kind {
            FieldKind::Select { options } => Self::Select {
                options: options.clone(),
                chosen: None,
            },
            FieldKind::Checkboxes { options } => Self::Checkboxes {
                options: options.clone(),
                checked: vec![false; options.len()],
                cursor: 0,
            },
            _ => Self::Text {
                buffer: String::new(),
            },
        }
    }

    fn value(&self) -> FieldValue {
        match self {
            Self::Text { buffer } => FieldValue::Text(buffer.clone()),
            Self::Select { options, chosen } => {
                FieldValue::Selected(chosen.map(|i| options[i].clone()))
            }
            Self::Checkboxes { checked, .. } => FieldValue::Checked(checked.clone()),
        }
    }

    fn as_submission_value(&self) -> String {
        match self {
            Self::Text { buffer } => buffer.trim().to_string(),
            Self::Select { options, chosen } => {
                chosen.map(|i| options[i].clone()).unwrap_or_default()
            }
            Self::Checkboxes {
                options, checked, ..
            } => options
                .iter()
                .zip(checked)
                .filter(|(_, &checked)| checked)
                .map(|(option, _)| option.clone())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Events the wizard reports to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Final step validated; the parent should persist these values and call
    /// [`FormWizard::reset`] once the write succeeds.
    Submit(BTreeMap<String, String>),
    /// A forward transition was refused; the step has this many invalid
    /// fields.
    Invalid(usize),
    /// The user stepped back from a later step.
    SteppedBack,
}

/// Form wizard state.
#[derive(Debug, Clone)]
pub struct FormWizard {
    form: ApplicationForm,
    progress: PanelController,
    focus: usize,
    values: Vec<Vec<FieldState>>,
    errors: Vec<FieldError>,
}

impl FormWizard {
    /// Initializes the wizard from content. Returns `None` (with a logged
    /// warning) when the form has no steps.
    #[must_use]
    pub fn init(form: &ApplicationForm) -> Option<Self> {
        let Some(progress) = PanelController::new(form.steps.len()) else {
            tracing::warn!("application form disabled: no steps in content");
            return None;
        };
        let values = form
            .steps
            .iter()
            .map(|step| step.fields.iter().map(FieldState::from_spec).collect())
            .collect();
        Some(Self {
            form: form.clone(),
            progress,
            focus: 0,
            values,
            errors: Vec::new(),
        })
    }

    /// Zero-based index of the current step.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.progress.current()
    }

    /// Number of steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.progress.len()
    }

    /// Index of the focused field within the current step.
    #[must_use]
    pub const fn focused_field(&self) -> usize {
        self.focus
    }

    /// Validation errors shown for the current step.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    fn step_specs(&self) -> &[FieldSpec] {
        &self.form.steps[self.progress.current()].fields
    }

    fn step_values(&self) -> Vec<FieldValue> {
        self.values[self.progress.current()]
            .iter()
            .map(FieldState::value)
            .collect()
    }

    /// Sets a text-ish field's content directly (tests and scripted input).
    pub fn set_text(&mut self, step: usize, field: usize, content: &str) {
        if let Some(FieldState::Text { buffer }) =
            self.values.get_mut(step).and_then(|v| v.get_mut(field))
        {
            *buffer = content.to_string();
        }
    }

    /// Toggles one checkbox of a checkbox-group field.
    pub fn toggle_checkbox(&mut self, step: usize, field: usize, option: usize) {
        if let Some(FieldState::Checkboxes { checked, .. }) =
            self.values.get_mut(step).and_then(|v| v.get_mut(field))
        {
            if let Some(flag) = checked.get_mut(option) {
                *flag = !*flag;
            }
        }
    }

    /// Chooses a select field's option by index.
    pub fn choose(&mut self, step: usize, field: usize, option: usize) {
        if let Some(FieldState::Select { options, chosen }) =
            self.values.get_mut(step).and_then(|v| v.get_mut(field))
        {
            if option < options.len() {
                *chosen = Some(option);
            }
        }
    }

    /// Attempts the forward transition: validates the current step, then
    /// either advances, emits the submission on the final step, or refuses
    /// with the step index unchanged.
    pub fn advance(&mut self) -> Option<WizardEvent> {
        let errors = validate_step(self.step_specs(), &self.step_values());
        if !errors.is_empty() {
            let count = errors.len();
            self.errors = errors;
            return Some(WizardEvent::Invalid(count));
        }
        self.errors.clear();

        let current = self.progress.current();
        if current + 1 == self.progress.len() {
            return Some(WizardEvent::Submit(self.collect()));
        }
        self.progress.go_to(current + 1);
        self.focus = 0;
        None
    }

    /// Steps back without validating. Entered values are kept. No-op on the
    /// first step.
    pub fn step_back(&mut self) -> Option<WizardEvent> {
        let current = self.progress.current();
        if current == 0 {
            return None;
        }
        self.progress.go_to(current - 1);
        self.focus = 0;
        self.errors.clear();
        Some(WizardEvent::SteppedBack)
    }

    /// Clears every field and returns to the first step. Called by the
    /// parent after a successful submission write.
    pub fn reset(&mut self) {
        self.values = self
            .form
            .steps
            .iter()
            .map(|step| step.fields.iter().map(FieldState::from_spec).collect())
            .collect();
        self.progress.go_to(0);
        self.focus = 0;
        self.errors.clear();
    }

    fn collect(&self) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();
        for (step, states) in self.form.steps.iter().zip(&self.values) {
            for (spec, state) in step.fields.iter().zip(states) {
                values.insert(spec.id.clone(), state.as_submission_value());
            }
        }
        values
    }

    fn focused_state_mut(&mut self) -> Option<&mut FieldState> {
        let step = self.progress.current();
        self.values.get_mut(step)?.get_mut(self.focus)
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.step_specs().len();
        if count == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % count
        } else {
            (self.focus + count - 1) % count
        };
    }

    fn error_for(&self, field_id: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field_id == field_id)
            .map(|e| e.message.as_str())
    }
}

impl Component for FormWizard {
    type Event = WizardEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Enter => return self.advance(),
            KeyCode::Esc => return self.step_back(),
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                return None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                return None;
            }
            _ => {}
        }

        match self.focused_state_mut() {
            Some(FieldState::Text { buffer }) => match key.code {
                KeyCode::Char(c) => buffer.push(c),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                _ => {}
            },
            Some(FieldState::Select { options, chosen }) => match key.code {
                KeyCode::Left => {
                    let count = options.len();
                    if count > 0 {
                        *chosen = Some(chosen.map_or(count - 1, |i| (i + count - 1) % count));
                    }
                }
                KeyCode::Right | KeyCode::Char(' ') => {
                    let count = options.len();
                    if count > 0 {
                        *chosen = Some(chosen.map_or(0, |i| (i + 1) % count));
                    }
                }
                _ => {}
            },
            Some(FieldState::Checkboxes {
                options,
                checked,
                cursor,
            }) => match key.code {
                KeyCode::Left => {
                    if *cursor > 0 {
                        *cursor -= 1;
                    }
                }
                KeyCode::Right => {
                    if *cursor + 1 < options.len() {
                        *cursor += 1;
                    }
                }
                KeyCode::Char(' ') => {
                    if let Some(flag) = checked.get_mut(*cursor) {
                        *flag = !*flag;
                    }
                }
                _ => {}
            },
            None => {}
        }
        None
    }

    fn lines(&self, _width: u16, theme: &Theme) -> Vec<Line<'static>> {
        let step_index = self.progress.current();
        let step = &self.form.steps[step_index];
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            format!("  {}", self.form.heading),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )));

        // Progress markers mirror the controller's indicator flags.
        let mut markers = vec![Span::raw("  ".to_string())];
        for (i, step) in self.form.steps.iter().enumerate() {
            let style = if self.progress.indicator_is_active(i) {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.inactive)
            };
            markers.push(Span::styled(format!("({}) {}", i + 1, step.title), style));
            if i + 1 < self.form.steps.len() {
                markers.push(Span::styled(
                    " ── ".to_string(),
                    Style::default().fg(theme.text_muted),
                ));
            }
        }
        lines.push(Line::from(markers));
        lines.push(Line::from(""));

        for (i, (spec, state)) in step.fields.iter().zip(&self.values[step_index]).enumerate() {
            let focused = i == self.focus;
            let label_style = if focused {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            let pointer = if focused { "▸" } else { " " };
            let required = if spec.required { "*" } else { " " };

            match state {
                FieldState::Text { buffer } => {
                    let cursor = if focused { "_" } else { "" };
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {pointer} {}{required}: ", spec.label), label_style),
                        Span::styled(
                            format!("{buffer}{cursor}"),
                            Style::default().fg(theme.text),
                        ),
                    ]));
                }
                FieldState::Select { options, chosen } => {
                    let shown = chosen
                        .map(|i| options[i].clone())
                        .unwrap_or_else(|| "◂ choose ▸".to_string());
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {pointer} {}{required}: ", spec.label), label_style),
                        Span::styled(format!("◂ {shown} ▸"), Style::default().fg(theme.text)),
                    ]));
                }
                FieldState::Checkboxes {
                    options,
                    checked,
                    cursor,
                } => {
                    lines.push(Line::from(Span::styled(
                        format!("  {pointer} {}{required}:", spec.label),
                        label_style,
                    )));
                    for (j, (option, &is_checked)) in options.iter().zip(checked.iter()).enumerate()
                    {
                        let mark = if is_checked { "[x]" } else { "[ ]" };
                        let style = if focused && j == *cursor {
                            Style::default().fg(theme.accent)
                        } else {
                            Style::default().fg(theme.text)
                        };
                        lines.push(Line::from(Span::styled(
                            format!("      {mark} {option}"),
                            style,
                        )));
                    }
                }
            }

            if let Some(message) = self.error_for(&spec.id) {
                lines.push(Line::from(Span::styled(
                    format!("      {message}"),
                    Style::default().fg(theme.error),
                )));
            }
        }

        lines.push(Line::from(""));
        let hint = if step_index + 1 == self.form.steps.len() {
            "  Enter: submit   Esc: back   Tab: next field"
        } else if step_index == 0 {
            "  Enter: continue   Tab: next field"
        } else {
            "  Enter: continue   Esc: back   Tab: next field"
        };
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(theme.text_muted),
        )));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard() -> FormWizard {
        FormWizard::init(&ApplicationForm::default()).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_init_refuses_empty_form() {
        let empty = ApplicationForm {
            heading: "x".to_string(),
            steps: vec![],
        };
        assert!(FormWizard::init(&empty).is_none());
    }

    #[test]
    fn test_required_empty_field_blocks_advance() {
        let mut wizard = wizard();
        let event = wizard.advance();
        assert!(matches!(event, Some(WizardEvent::Invalid(_))));
        assert_eq!(wizard.current_step(), 0);
        assert!(!wizard.errors().is_empty());
    }

    #[test]
    fn test_filling_fields_unblocks_advance() {
        let mut wizard = wizard();
        wizard.set_text(0, 0, "Sam Park");
        assert!(matches!(wizard.advance(), Some(WizardEvent::Invalid(1))));
        assert_eq!(wizard.current_step(), 0);

        wizard.set_text(0, 1, "sam@example.com");
        assert!(wizard.advance().is_none());
        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_checkbox_group_needs_any_one_checked() {
        let mut wizard = wizard();
        wizard.set_text(0, 0, "Sam Park");
        wizard.set_text(0, 1, "sam@example.com");
        wizard.advance();
        assert_eq!(wizard.current_step(), 1);

        wizard.choose(1, 0, 0);
        // No box checked: blocked on step 2 (index 1).
        assert!(matches!(wizard.advance(), Some(WizardEvent::Invalid(1))));
        assert_eq!(wizard.current_step(), 1);

        wizard.toggle_checkbox(1, 1, 2);
        assert!(wizard.advance().is_none());
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn test_final_step_emits_submission() {
        let mut wizard = wizard();
        wizard.set_text(0, 0, "Sam Park");
        wizard.set_text(0, 1, "sam@example.com");
        wizard.advance();
        wizard.choose(1, 0, 1);
        wizard.toggle_checkbox(1, 1, 0);
        wizard.toggle_checkbox(1, 1, 3);
        wizard.advance();
        wizard.set_text(2, 0, "I like buildings.");

        let event = wizard.advance();
        let Some(WizardEvent::Submit(values)) = event else {
            panic!("expected submission, got {event:?}");
        };
        assert_eq!(values["name"], "Sam Park");
        assert_eq!(values["position"], "Interior Designer");
        assert_eq!(values["skills"], "AutoCAD / Revit; Client relations");
        // Step index is unchanged until the parent confirms the write.
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn test_reset_clears_values_and_returns_to_start() {
        let mut wizard = wizard();
        wizard.set_text(0, 0, "Sam Park");
        wizard.set_text(0, 1, "sam@example.com");
        wizard.advance();
        wizard.reset();
        assert_eq!(wizard.current_step(), 0);
        // The name field is empty again, so advancing is blocked.
        assert!(matches!(wizard.advance(), Some(WizardEvent::Invalid(_))));
    }

    #[test]
    fn test_step_back_keeps_values() {
        let mut wizard = wizard();
        wizard.set_text(0, 0, "Sam Park");
        wizard.set_text(0, 1, "sam@example.com");
        wizard.advance();
        assert_eq!(wizard.step_back(), Some(WizardEvent::SteppedBack));
        assert_eq!(wizard.current_step(), 0);
        // Values survived the round trip, so advancing works again.
        assert!(wizard.advance().is_none());
    }

    #[test]
    fn test_step_back_on_first_step_is_noop() {
        let mut wizard = wizard();
        assert!(wizard.step_back().is_none());
        assert_eq!(wizard.current_step(), 0);
    }

    #[test]
    fn test_key_driven_text_entry() {
        let mut wizard = wizard();
        for c in "Sam".chars() {
            wizard.handle_input(key(KeyCode::Char(c)));
        }
        wizard.handle_input(key(KeyCode::Backspace));
        wizard.handle_input(key(KeyCode::Tab));
        for c in "sam@example.com".chars() {
            wizard.handle_input(key(KeyCode::Char(c)));
        }
        wizard.handle_input(key(KeyCode::Enter));
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn test_focus_wraps_within_step() {
        let mut wizard = wizard();
        assert_eq!(wizard.focused_field(), 0);
        wizard.handle_input(key(KeyCode::Tab));
        wizard.handle_input(key(KeyCode::Tab));
        wizard.handle_input(key(KeyCode::Tab));
        assert_eq!(wizard.focused_field(), 0);
        wizard.handle_input(key(KeyCode::BackTab));
        assert_eq!(wizard.focused_field(), 2);
    }
}

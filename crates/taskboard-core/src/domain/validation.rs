//! Field rules shared by task and contact inputs.
//!
//! Inputs derive `validator::Validate`; the functions here are their
//! `custom` rules. Every rule runs, so one call reports all rejected fields.

use std::borrow::Cow;

use chrono::NaiveDate;
use validator::{ValidationError, ValidationErrorsKind};

pub use validator::ValidationErrors;

pub const TITLE_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 10;

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Form order used when listing messages.
const FIELD_ORDER: [&str; 7] = [
    "title",
    "description",
    "due_date",
    "name",
    "email",
    "subject",
    "message",
];

/// What the task rules need besides the input itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskContext {
    pub today: NaiveDate,
}

impl TaskContext {
    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }
}

fn rejected(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Required text, compared after trimming.
pub(crate) fn required(value: &str, label: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rejected("required", format!("{label} is required")));
    }
    Ok(())
}

/// Required text with a minimum trimmed length, counted in chars.
pub(crate) fn min_trimmed_len(value: &str, label: &str, min: usize) -> Result<(), ValidationError> {
    required(value, label)?;
    if value.trim().chars().count() < min {
        return Err(rejected(
            "length",
            format!("{label} must be at least {min} characters long"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    min_trimmed_len(title, "Title", TITLE_MIN_LEN)
}

pub(crate) fn validate_description(description: &str) -> Result<(), ValidationError> {
    min_trimmed_len(description, "Description", DESCRIPTION_MIN_LEN)
}

/// A supplied due date must be `YYYY-MM-DD` and not before `today`.
/// Blank input means no due date and passes.
pub(crate) fn validate_due_date(raw: &str, context: &TaskContext) -> Result<(), ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(());
    }
    match NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT) {
        Ok(date) if date < context.today => {
            Err(rejected("past_date", "Due date cannot be in the past"))
        }
        Ok(_) => Ok(()),
        Err(_) => Err(rejected(
            "date_format",
            "Due date must be a valid date (YYYY-MM-DD)",
        )),
    }
}

/// The stored form of a due date that already passed `validate_due_date`.
pub(crate) fn parse_due_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT).ok()
}

/// Read access to the per-field messages `validator` collected.
pub trait FieldMessages {
    /// `(field, message)` pairs, fields in form order, messages in rule order.
    fn messages(&self) -> Vec<(&str, &str)>;

    fn message_for(&self, field: &str) -> Option<&str> {
        self.messages()
            .into_iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message)
    }

    fn has(&self, field: &str) -> bool {
        self.message_for(field).is_some()
    }

    /// One line: `title: Title is required; due_date: ...`.
    fn describe(&self) -> String {
        self.messages()
            .into_iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl FieldMessages for ValidationErrors {
    fn messages(&self) -> Vec<(&str, &str)> {
        let mut messages = Vec::new();
        for (field, kind) in self.errors() {
            let ValidationErrorsKind::Field(errors) = kind else {
                continue;
            };
            let field: &str = field;
            for error in errors {
                let message: &str = match &error.message {
                    Some(message) => message,
                    None => &error.code,
                };
                messages.push((field, message));
            }
        }
        messages.sort_by_key(|(field, _)| {
            FIELD_ORDER
                .iter()
                .position(|known| known == field)
                .unwrap_or(FIELD_ORDER.len())
        });
        messages
    }
}

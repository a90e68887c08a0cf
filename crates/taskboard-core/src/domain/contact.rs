//! Contact form message and its validation rules.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError};

use super::MessageId;
use super::validation::{FieldMessages, ValidationErrors, min_trimmed_len, required};

/// Loose "something@something.something" check used by the contact form.
/// Blank input matches too; the required rule reports that case.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*$|\S+@\S+\.\S+").expect("email pattern is valid")
});

pub const MESSAGE_MIN_LEN: usize = 10;

fn validate_name(name: &str) -> Result<(), ValidationError> {
    required(name, "Name")
}

fn validate_email_present(email: &str) -> Result<(), ValidationError> {
    required(email, "Email")
}

fn validate_subject(subject: &str) -> Result<(), ValidationError> {
    required(subject, "Subject")
}

fn validate_body(message: &str) -> Result<(), ValidationError> {
    min_trimmed_len(message, "Message", MESSAGE_MIN_LEN)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    #[validate(
        custom(function = "validate_email_present"),
        regex(path = *EMAIL_RE, code = "email", message = "Email is invalid")
    )]
    pub email: String,
    #[validate(custom(function = "validate_subject"))]
    pub subject: String,
    #[validate(custom(function = "validate_body"))]
    pub message: String,
}

/// A message accepted by the inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedMessage {
    pub id: MessageId,
    pub received_on: NaiveDate,
    pub message: ContactMessage,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    #[error("invalid contact message: {}", .0.describe())]
    Validation(ValidationErrors),
}

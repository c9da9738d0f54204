//! Per-form validators for the admin web application's forms
//!
//! Each validator reads the fixed field identifiers the server-rendered
//! templates use, runs its checks in order, and reports the first failure.
//! Field lookup goes through the [`FieldSource`] adapter so the validators
//! run without a rendered page.

use crate::validation::{self, InjectionPolicy};
use std::collections::HashMap;
use thiserror::Error;

/// Element identifiers used by the server-rendered templates. These are a
/// stable contract with the external application.
pub mod fields {
    pub const LOGIN_NAME: &str = "inputName";
    pub const LOGIN_PASSWORD: &str = "inputPassword";

    pub const COURT_TITLE: &str = "exampleInputTitle1";
    pub const COURT_ADDRESS: &str = "exampleInputAddress1";

    pub const NOTE_CASE: &str = "inlineFormCustomSelectCase";
    pub const NOTE_COURT: &str = "inlineFormCustomSelectCourt";
    pub const NOTE_STATUS: &str = "inlineFormCustomSelectStatus";
    pub const NOTE_DETAILS: &str = "exampleInputDetails1";
    pub const NOTE_DATE: &str = "exampleInputDate1";
    pub const NOTE_TIME: &str = "exampleInputTime1";

    pub const USER_EMAIL: &str = "inputEmail";

    pub const CASE_TITLE: &str = "exampleInputCaseTitle1";
    pub const CASE_DETAILS: &str = "exampleInputCaseDetails1";
    pub const CASE_FULL_NAME: &str = "exampleInputFullName1";
    pub const CASE_PHONE: &str = "exampleInputPhone1";
}

/// Note statuses the application accepts.
pub const ALLOWED_STATUSES: &[&str] = &["resolved", "pending", "rejected"];

/// First failed check of a form validation. The display text is the message
/// shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing form field: {0}")]
    MissingField(&'static str),
    #[error("{0}")]
    Check(&'static str),
}

/// Source of form field values, keyed by element identifier.
pub trait FieldSource {
    fn value(&self, id: &str) -> Option<String>;
}

/// In-memory field map backing the CLI and tests.
#[derive(Debug, Default, Clone)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(id.into(), value.into());
    }

    pub fn with(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }
}

impl FieldSource for FormFields {
    fn value(&self, id: &str) -> Option<String> {
        self.0.get(id).cloned()
    }
}

fn required(fields: &dyn FieldSource, id: &'static str) -> Result<String, FormError> {
    fields.value(id).ok_or(FormError::MissingField(id))
}

fn scan(policy: &dyn InjectionPolicy, value: &str) -> Result<(), FormError> {
    if let Some(matched) = policy.scan(value) {
        log::debug!("Rejected input containing {:?}", matched);
        return Err(FormError::Check(policy.rejection_message()));
    }
    Ok(())
}

fn check(passed: bool, message: &'static str) -> Result<(), FormError> {
    if passed {
        Ok(())
    } else {
        Err(FormError::Check(message))
    }
}

pub fn validate_login_form(
    fields: &dyn FieldSource,
    policy: &dyn InjectionPolicy,
) -> Result<(), FormError> {
    let name = required(fields, fields::LOGIN_NAME)?;
    let password = required(fields, fields::LOGIN_PASSWORD)?;
    scan(policy, &name)?;
    scan(policy, &password)?;
    Ok(())
}

pub fn validate_court_form(
    fields: &dyn FieldSource,
    policy: &dyn InjectionPolicy,
) -> Result<(), FormError> {
    let title = required(fields, fields::COURT_TITLE)?;
    let address = required(fields, fields::COURT_ADDRESS)?;
    scan(policy, &title)?;
    scan(policy, &address)?;
    check(
        validation::is_valid_range(&title, 100),
        "Title must be between 1 and 100 characters long.",
    )?;
    check(
        validation::is_valid_range(&address, 100),
        "Address must be between 1 and 100 characters long.",
    )?;
    Ok(())
}

pub fn validate_note_form(
    fields: &dyn FieldSource,
    policy: &dyn InjectionPolicy,
) -> Result<(), FormError> {
    let case_id = required(fields, fields::NOTE_CASE)?;
    let court_id = required(fields, fields::NOTE_COURT)?;
    let status = required(fields, fields::NOTE_STATUS)?;
    let details = required(fields, fields::NOTE_DETAILS)?;
    let date = required(fields, fields::NOTE_DATE)?;
    let time = required(fields, fields::NOTE_TIME)?;

    scan(policy, &details)?;
    check(validation::is_valid_date(&date), "Invalid date format.")?;
    check(validation::is_valid_time(&time), "Invalid time format.")?;
    check(validation::is_number(&case_id), "Invalid case selection.")?;
    check(validation::is_number(&court_id), "Invalid court selection.")?;
    check(ALLOWED_STATUSES.contains(&status.as_str()), "Invalid status selection.")?;
    Ok(())
}

pub fn validate_user_form(
    fields: &dyn FieldSource,
    policy: &dyn InjectionPolicy,
) -> Result<(), FormError> {
    let email = required(fields, fields::USER_EMAIL)?;
    check(validation::is_valid_range(&email, 150), "Invalid email format.")?;
    scan(policy, &email)?;
    check(validation::is_valid_email(&email), "Invalid email format.")?;
    Ok(())
}

pub fn validate_case_form(
    fields: &dyn FieldSource,
    policy: &dyn InjectionPolicy,
) -> Result<(), FormError> {
    let title = required(fields, fields::CASE_TITLE)?;
    let details = required(fields, fields::CASE_DETAILS)?;
    let full_name = required(fields, fields::CASE_FULL_NAME)?;
    let phone = required(fields, fields::CASE_PHONE)?;

    scan(policy, &title)?;
    scan(policy, &details)?;
    scan(policy, &full_name)?;
    scan(policy, &phone)?;
    check(
        validation::is_valid_range(&title, 100),
        "Title must be between 1 and 100 characters long.",
    )?;
    check(
        validation::is_valid_range(&details, 100),
        "Details must be between 1 and 100 characters long.",
    )?;
    check(
        validation::is_valid_range(&full_name, 100),
        "Full name must be between 1 and 100 characters long.",
    )?;
    check(
        validation::is_valid_range(&phone, 20),
        "Phone must be between 1 and 20 characters long.",
    )?;
    Ok(())
}

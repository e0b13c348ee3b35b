//! Field-level validation for doctor drafts.
//!
//! Validation is a pure function: it never touches the store and reports every
//! failing field at once, keyed by attribute, so forms can render the messages
//! next to their inputs.

use std::{collections::BTreeMap, fmt};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::doctor::{DoctorDraft, DoctorField};

// ASCII-only classes: case folding would let U+212A and U+017F through.
// Local part may not start with a dot or contain ".."; both are checked separately
// because the regex engine has no lookaround.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("valid email regex")
});

/// Per-field validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationErrors {
    fields: BTreeMap<DoctorField, String>,
}

impl ValidationErrors {
    /// Returns true when no field failed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Message recorded for `field`, if it failed.
    pub fn get(&self, field: DoctorField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Failing fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (DoctorField, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// Messages keyed by wire attribute name (`firstName`, `email`, ...).
    pub fn by_name(&self) -> BTreeMap<&'static str, String> {
        self.fields
            .iter()
            .map(|(f, m)| (f.name(), m.clone()))
            .collect()
    }

    /// Drops the message for `field`, as a form does once the input is edited.
    pub fn clear(&mut self, field: DoctorField) {
        self.fields.remove(&field);
    }

    fn insert(&mut self, field: DoctorField, message: &str) {
        self.fields.insert(field, message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks presence of every text field and email syntax.
pub fn validate_draft(draft: &DoctorDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for field in DoctorField::ALL {
        let value = draft.value(field);
        match field {
            DoctorField::Email => {
                if !is_valid_email(value) {
                    errors.insert(field, "Invalid email address");
                }
            }
            _ if value.is_empty() => errors.insert(field, required_message(field)),
            _ => {}
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Standard `local@domain.tld` syntax check.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    !local.starts_with('.') && !local.contains("..") && EMAIL_RE.is_match(value)
}

fn required_message(field: DoctorField) -> &'static str {
    match field {
        DoctorField::FirstName => "First name is required",
        DoctorField::LastName => "Last name is required",
        DoctorField::Email => "Invalid email address",
        DoctorField::Specialization => "Specialization is required",
        DoctorField::ContactNumber => "Contact number is required",
    }
}

//! Doctor domain record, draft, and field names.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::DoctorId;

/// Fully materialized, authoritative doctor record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRecord {
    /// Store-assigned identifier, immutable after creation.
    pub id: DoctorId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Medical specialization, e.g. "Cardiology".
    pub specialization: String,
    /// Free-form phone number.
    pub contact_number: String,
}

impl DoctorRecord {
    /// Builds a record from an id and the non-id attributes.
    pub fn from_draft(id: DoctorId, draft: DoctorDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            specialization: draft.specialization,
            contact_number: draft.contact_number,
        }
    }

    /// Returns every attribute except `id`.
    pub fn to_draft(&self) -> DoctorDraft {
        DoctorDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            specialization: self.specialization.clone(),
            contact_number: self.contact_number.clone(),
        }
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// First character of the first and last names, as shown in avatars.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

/// Create/update payload: every [`DoctorRecord`] attribute except `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDraft {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Medical specialization.
    pub specialization: String,
    /// Free-form phone number.
    pub contact_number: String,
}

impl DoctorDraft {
    /// Convenience constructor taking the fields in form order.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        specialization: impl Into<String>,
        contact_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            specialization: specialization.into(),
            contact_number: contact_number.into(),
        }
    }

    /// Returns the value held for `field`.
    pub fn value(&self, field: DoctorField) -> &str {
        match field {
            DoctorField::FirstName => &self.first_name,
            DoctorField::LastName => &self.last_name,
            DoctorField::Email => &self.email,
            DoctorField::Specialization => &self.specialization,
            DoctorField::ContactNumber => &self.contact_number,
        }
    }
}

/// Editable attribute of a doctor, used to key per-field errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DoctorField {
    /// `firstName`.
    FirstName,
    /// `lastName`.
    LastName,
    /// `email`.
    Email,
    /// `specialization`.
    Specialization,
    /// `contactNumber`.
    ContactNumber,
}

impl DoctorField {
    /// All fields in form order.
    pub const ALL: [DoctorField; 5] = [
        DoctorField::FirstName,
        DoctorField::LastName,
        DoctorField::Email,
        DoctorField::Specialization,
        DoctorField::ContactNumber,
    ];

    /// Attribute name as it appears on the wire.
    pub fn name(self) -> &'static str {
        match self {
            DoctorField::FirstName => "firstName",
            DoctorField::LastName => "lastName",
            DoctorField::Email => "email",
            DoctorField::Specialization => "specialization",
            DoctorField::ContactNumber => "contactNumber",
        }
    }
}

impl fmt::Display for DoctorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

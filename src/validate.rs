use std::collections::BTreeMap;

use crate::contact::{Draft, Field};

pub const NAME_REQUIRED: &str = "Name is required";
pub const MOBILE_REQUIRED: &str = "Mobile number is required";
pub const MOBILE_FORMAT: &str = "Mobile number must be 10 digits";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const ADDRESS_REQUIRED: &str = "Address is required";

const MOBILE_DIGITS: usize = 10;

/// Field-level validation messages. Empty means the draft may be committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Entries in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Check every rule independently and collect all violations.
pub fn validate(draft: &Draft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if draft.mobile.trim().is_empty() {
        errors.insert(Field::Mobile, MOBILE_REQUIRED);
    }
    // Any non-empty value that is not ten digits reports the format message,
    // including whitespace-only input.
    if !draft.mobile.is_empty() && !is_mobile_number(&draft.mobile) {
        errors.insert(Field::Mobile, MOBILE_FORMAT);
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    }

    if draft.address.trim().is_empty() {
        errors.insert(Field::Address, ADDRESS_REQUIRED);
    }

    errors
}

/// Exactly ten ASCII decimal digits.
pub fn is_mobile_number(value: &str) -> bool {
    value.len() == MOBILE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

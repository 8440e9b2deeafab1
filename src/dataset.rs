//! Seed contacts for the directory.
//!
//! The bundled fixture is compiled into the binary; a JSON file with the same
//! shape can replace it. Either way the data is read once at startup.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::contact::{Contact, ContactId};
use crate::validate::{self, FieldErrors};

const BUNDLED: &str = include_str!("../data/contacts.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse dataset {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("dataset {origin} contains contact id {id} more than once")]
    DuplicateId { origin: String, id: ContactId },
}

/// Load seed contacts from `path`, or the bundled fixture when `None`.
pub fn load(path: Option<&Path>) -> Result<Vec<Contact>, DatasetError> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| DatasetError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            parse(&raw, &path.display().to_string())
        }
        None => bundled(),
    }
}

pub fn bundled() -> Result<Vec<Contact>, DatasetError> {
    parse(BUNDLED, "<bundled>")
}

pub fn parse(raw: &str, origin: &str) -> Result<Vec<Contact>, DatasetError> {
    let contacts: Vec<Contact> =
        serde_json::from_str(raw).map_err(|source| DatasetError::Parse {
            origin: origin.to_string(),
            source,
        })?;

    let mut seen = HashSet::new();
    for contact in &contacts {
        if !seen.insert(contact.id) {
            return Err(DatasetError::DuplicateId {
                origin: origin.to_string(),
                id: contact.id,
            });
        }
    }

    Ok(contacts)
}

/// Seed records that would not pass the form validator. They are kept, only
/// reported.
pub fn invalid_records(contacts: &[Contact]) -> Vec<(ContactId, FieldErrors)> {
    contacts
        .iter()
        .filter_map(|contact| {
            let errors = validate::validate(&contact.draft());
            (!errors.is_empty()).then_some((contact.id, errors))
        })
        .collect()
}

use std::str::FromStr;

use thiserror::Error;

use crate::contact::{Contact, ContactId, Draft};

/// How the store picks the id of a newly added contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdAllocation {
    /// `len + 1`. Can hand out an id that is still in use after a delete.
    #[default]
    Count,
    /// One more than the highest id the store has ever held. Once that would
    /// pass `ContactId::MAX`, the lowest id not currently in use.
    Monotonic,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid id_allocation '{0}', expected one of: count, monotonic")]
pub struct ParseIdAllocationError(String);

impl FromStr for IdAllocation {
    type Err = ParseIdAllocationError;

    /// Parse from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" => Ok(IdAllocation::Count),
            "monotonic" => Ok(IdAllocation::Monotonic),
            _ => Err(ParseIdAllocationError(s.to_string())),
        }
    }
}

/// Ordered, in-memory collection of contacts.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    allocation: IdAllocation,
    high_water: ContactId,
}

impl ContactStore {
    pub fn new(seed: Vec<Contact>, allocation: IdAllocation) -> Self {
        let high_water = seed.iter().map(|c| c.id).max().unwrap_or(0);
        Self {
            contacts: seed,
            allocation,
            high_water,
        }
    }

    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Append a contact and return its id. Validation is the caller's job.
    pub fn add(&mut self, record: Draft) -> ContactId {
        let id = self.next_id();
        self.high_water = self.high_water.max(id);
        self.contacts.push(record.into_contact(id));
        id
    }

    /// Replace every contact carrying `id` with `record`. Returns whether
    /// anything matched.
    pub fn update(&mut self, id: ContactId, record: Draft) -> bool {
        let mut matched = false;
        for contact in self.contacts.iter_mut().filter(|c| c.id == id) {
            *contact = record.clone().into_contact(id);
            matched = true;
        }
        matched
    }

    /// Remove every contact carrying `id`. Returns whether anything matched.
    pub fn remove(&mut self, id: ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        self.contacts.len() != before
    }

    fn next_id(&self) -> ContactId {
        match self.allocation {
            IdAllocation::Count => self.contacts.len() as ContactId + 1,
            IdAllocation::Monotonic => self
                .high_water
                .checked_add(1)
                .unwrap_or_else(|| self.lowest_free_id()),
        }
    }

    fn lowest_free_id(&self) -> ContactId {
        let mut ids: Vec<ContactId> = self.contacts.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();

        let mut candidate: ContactId = 1;
        for id in ids {
            if id > candidate {
                break;
            }
            if id == candidate {
                candidate = candidate.saturating_add(1);
            }
        }
        candidate
    }
}

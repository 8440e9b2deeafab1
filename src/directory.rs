//! The contact directory: store, search query and the modal state machine.
//!
//! At most one modal is open at a time. Add and edit forms carry a draft and
//! the errors from the last submit; the view modal carries a read-only
//! snapshot of the contact.

use crate::contact::{Contact, ContactId, Draft, Field};
use crate::search;
use crate::store::ContactStore;
use crate::validate::{self, FieldErrors};

/// An add or edit form in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub draft: Draft,
    pub errors: FieldErrors,
    pub focus: Field,
}

impl Form {
    fn new(draft: Draft) -> Self {
        Self {
            draft,
            errors: FieldErrors::default(),
            focus: Field::Name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Idle,
    Adding(Form),
    Editing { id: ContactId, form: Form },
    Viewing(Contact),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(ContactId),
    Updated(ContactId),
    /// The form stays open with this many field errors.
    Rejected(usize),
    /// No add or edit form was open.
    NotEditing,
}

#[derive(Debug, Clone, Default)]
pub struct Directory {
    store: ContactStore,
    modal: Modal,
    query: String,
}

impl Directory {
    pub fn new(store: ContactStore) -> Self {
        Self {
            store,
            modal: Modal::Idle,
            query: String::new(),
        }
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn contacts(&self) -> &[Contact] {
        self.store.list()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.modal, Modal::Idle)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Contacts matching the current query, in store order.
    pub fn visible(&self) -> Vec<&Contact> {
        search::filter(self.store.list(), &self.query)
    }

    /// The open add/edit form, if any.
    pub fn form(&self) -> Option<&Form> {
        match &self.modal {
            Modal::Adding(form) | Modal::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    fn form_mut(&mut self) -> Option<&mut Form> {
        match &mut self.modal {
            Modal::Adding(form) | Modal::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn open_add(&mut self) {
        self.modal = Modal::Adding(Form::new(Draft::default()));
    }

    /// Open the edit form on a copy of contact `id`. Unknown ids leave the
    /// current modal untouched.
    pub fn open_edit(&mut self, id: ContactId) -> bool {
        let Some(contact) = self.store.get(id) else {
            return false;
        };
        self.modal = Modal::Editing {
            id,
            form: Form::new(contact.draft()),
        };
        true
    }

    pub fn open_view(&mut self, id: ContactId) -> bool {
        let Some(contact) = self.store.get(id).cloned() else {
            return false;
        };
        self.modal = Modal::Viewing(contact);
        true
    }

    /// Cancel a form or close the view modal. Drafts are discarded.
    pub fn close(&mut self) {
        self.modal = Modal::Idle;
    }

    /// Replace one field of the open draft. Returns false when no form is open.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self.form_mut() {
            Some(form) => {
                form.draft.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn focus(&mut self, field: Field) {
        if let Some(form) = self.form_mut() {
            form.focus = field;
        }
    }

    pub fn focus_next(&mut self) {
        if let Some(form) = self.form_mut() {
            form.focus = form.focus.next();
        }
    }

    pub fn focus_prev(&mut self) {
        if let Some(form) = self.form_mut() {
            form.focus = form.focus.prev();
        }
    }

    /// Validate the open draft and commit it when clean. On failure the
    /// errors replace the previous ones and the form stays open.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(form) = self.form_mut() else {
            return SubmitOutcome::NotEditing;
        };

        let errors = validate::validate(&form.draft);
        if !errors.is_empty() {
            let count = errors.len();
            form.errors = errors;
            return SubmitOutcome::Rejected(count);
        }

        match std::mem::take(&mut self.modal) {
            Modal::Adding(form) => SubmitOutcome::Added(self.store.add(form.draft)),
            Modal::Editing { id, form } => {
                self.store.update(id, form.draft);
                SubmitOutcome::Updated(id)
            }
            other => {
                self.modal = other;
                SubmitOutcome::NotEditing
            }
        }
    }

    /// Remove contact `id` from the store. Returns the removed contact.
    pub fn delete(&mut self, id: ContactId) -> Option<Contact> {
        let removed = self.store.get(id).cloned()?;
        self.store.remove(id);
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IdAllocation;
    use crate::validate::{
        ADDRESS_REQUIRED, EMAIL_REQUIRED, MOBILE_FORMAT, NAME_REQUIRED,
    };

    fn seeded() -> Directory {
        let seed = vec![
            Draft::new("Ann Lee", "5551234567", "ann@x.com", "1 Rd").into_contact(1),
            Draft::new("Bob Stone", "5559876543", "bob@x.com", "2 Ave").into_contact(2),
            Draft::new("Cid Moss", "4440001111", "cid@x.com", "3 Ln").into_contact(3),
        ];
        Directory::new(ContactStore::new(seed, IdAllocation::Count))
    }

    fn fill(dir: &mut Directory, draft: &Draft) {
        for field in Field::ALL {
            assert!(dir.set_field(field, draft.get(field)));
        }
    }

    #[test]
    fn test_add_valid_contact_commits_and_closes() {
        let mut dir = Directory::default();
        dir.open_add();
        assert_eq!(dir.form().map(|f| &f.draft), Some(&Draft::default()));

        fill(&mut dir, &Draft::new("Ann", "1234567890", "a@x.com", "1 Rd"));
        assert_eq!(dir.submit(), SubmitOutcome::Added(1));
        assert!(dir.is_idle());
        assert_eq!(dir.contacts().len(), 1);
        assert_eq!(dir.contacts()[0].name, "Ann");
    }

    #[test]
    fn test_add_invalid_keeps_form_and_draft() {
        let mut dir = seeded();
        dir.open_add();
        fill(&mut dir, &Draft::new("", "123", "", ""));

        assert_eq!(dir.submit(), SubmitOutcome::Rejected(4));
        let form = dir.form().expect("form stays open");
        assert_eq!(form.draft.mobile, "123");
        assert_eq!(form.errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(form.errors.get(Field::Mobile), Some(MOBILE_FORMAT));
        assert_eq!(form.errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(form.errors.get(Field::Address), Some(ADDRESS_REQUIRED));
        assert_eq!(dir.contacts().len(), 3);
    }

    #[test]
    fn test_resubmit_replaces_previous_errors() {
        let mut dir = seeded();
        dir.open_add();
        dir.submit();
        assert_eq!(dir.form().unwrap().errors.len(), 4);

        fill(&mut dir, &Draft::new("Dee", "42", "d@x.com", "4 Ct"));
        assert_eq!(dir.submit(), SubmitOutcome::Rejected(1));
        let errors = &dir.form().unwrap().errors;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Mobile), Some(MOBILE_FORMAT));
    }

    #[test]
    fn test_edit_with_bad_mobile_leaves_store_unchanged() {
        let mut dir = seeded();
        let before = dir.contacts().to_vec();
        assert!(dir.open_edit(2));
        assert_eq!(dir.form().unwrap().draft, before[1].draft());

        dir.set_field(Field::Mobile, "42");
        assert_eq!(dir.submit(), SubmitOutcome::Rejected(1));
        assert!(matches!(dir.modal(), Modal::Editing { id: 2, .. }));
        assert_eq!(dir.contacts(), before.as_slice());

        dir.set_field(Field::Mobile, "5550000002");
        assert_eq!(dir.submit(), SubmitOutcome::Updated(2));
        assert!(dir.is_idle());
        assert_eq!(dir.store().get(2).unwrap().mobile, "5550000002");
        assert_eq!(dir.store().get(2).unwrap().name, "Bob Stone");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut dir = seeded();
        let before = dir.contacts().to_vec();
        dir.open_edit(1);
        dir.set_field(Field::Name, "Changed");
        dir.close();
        assert!(dir.is_idle());
        assert_eq!(dir.contacts(), before.as_slice());

        dir.open_add();
        dir.set_field(Field::Name, "Half typed");
        dir.close();
        dir.open_add();
        assert_eq!(dir.form().unwrap().draft, Draft::default());
    }

    #[test]
    fn test_view_then_close_leaves_store_unchanged() {
        let mut dir = seeded();
        let before = dir.contacts().to_vec();
        assert!(dir.open_view(3));
        assert!(matches!(dir.modal(), Modal::Viewing(c) if c.id == 3));
        assert!(!dir.set_field(Field::Name, "nope"));
        assert_eq!(dir.submit(), SubmitOutcome::NotEditing);
        dir.close();
        assert!(dir.is_idle());
        assert_eq!(dir.contacts(), before.as_slice());
    }

    #[test]
    fn test_opening_while_open_replaces_modal() {
        let mut dir = seeded();
        dir.open_add();
        dir.set_field(Field::Name, "Draft");
        assert!(dir.open_view(1));
        assert!(matches!(dir.modal(), Modal::Viewing(c) if c.id == 1));
        assert!(dir.open_edit(2));
        assert!(matches!(dir.modal(), Modal::Editing { id: 2, .. }));
        dir.open_add();
        assert_eq!(dir.form().unwrap().draft, Draft::default());
    }

    #[test]
    fn test_open_unknown_id_is_ignored() {
        let mut dir = seeded();
        assert!(!dir.open_edit(99));
        assert!(!dir.open_view(99));
        assert!(dir.is_idle());

        dir.open_add();
        assert!(!dir.open_view(99));
        assert!(matches!(dir.modal(), Modal::Adding(_)));
    }

    #[test]
    fn test_delete_then_add_reuses_count_id() {
        let mut dir = seeded();
        let removed = dir.delete(2).expect("contact 2 exists");
        assert_eq!(removed.name, "Bob Stone");
        let ids: Vec<_> = dir.contacts().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(dir.delete(2).is_none());

        dir.open_add();
        fill(&mut dir, &Draft::new("Dee", "1112223333", "d@x.com", "4 Ct"));
        assert_eq!(dir.submit(), SubmitOutcome::Added(3));
    }

    #[test]
    fn test_visible_follows_query_and_store() {
        let mut dir = seeded();
        dir.set_query("555");
        let ids: Vec<_> = dir.visible().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);

        dir.delete(1);
        let ids: Vec<_> = dir.visible().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2]);

        dir.set_query("");
        assert_eq!(dir.visible().len(), 2);
    }

    #[test]
    fn test_focus_cycles_within_form_only() {
        let mut dir = seeded();
        dir.focus_next();
        assert!(dir.form().is_none());

        dir.open_add();
        dir.focus_next();
        dir.focus_next();
        assert_eq!(dir.form().unwrap().focus, Field::Email);
        dir.focus_prev();
        dir.focus_prev();
        dir.focus_prev();
        assert_eq!(dir.form().unwrap().focus, Field::Address);
        dir.focus(Field::Mobile);
        assert_eq!(dir.form().unwrap().focus, Field::Mobile);
    }
}

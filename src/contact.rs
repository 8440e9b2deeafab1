use serde::{Deserialize, Serialize};

pub type ContactId = u32;

/// The four editable fields of a contact, in form order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    #[default]
    Name,
    Mobile,
    Email,
    Address,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Mobile, Field::Email, Field::Address];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "NAME",
            Field::Mobile => "MOBILE",
            Field::Email => "EMAIL",
            Field::Address => "ADDRESS",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Mobile => "mobile",
            Field::Email => "email",
            Field::Address => "address",
        }
    }

    /// Next field in form order, wrapping to the first.
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Mobile,
            Field::Mobile => Field::Email,
            Field::Email => Field::Address,
            Field::Address => Field::Name,
        }
    }

    /// Previous field in form order, wrapping to the last.
    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Address,
            Field::Mobile => Field::Name,
            Field::Email => Field::Mobile,
            Field::Address => Field::Email,
        }
    }
}

/// A contact record without its id: the add form's draft, the edit form's
/// draft, and the payload handed to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        mobile: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
            Field::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Mobile => &mut self.mobile,
            Field::Email => &mut self.email,
            Field::Address => &mut self.address,
        };
        *slot = value.into();
    }

    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            mobile: self.mobile,
            email: self.email,
            address: self.address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
            Field::Address => &self.address,
        }
    }

    /// Copy of the editable fields, used to seed the edit form.
    pub fn draft(&self) -> Draft {
        Draft {
            name: self.name.clone(),
            mobile: self.mobile.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}

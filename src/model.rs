//! Contact row, submitted form and tag whitelist.

use crate::error::AppError;
use serde::Serialize;
use std::collections::HashMap;

/// Category label on a contact. Stored and submitted in lowercase; empty means untagged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    Family,
    Work,
    Friends,
    Other,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::Family, Tag::Work, Tag::Friends, Tag::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Family => "family",
            Tag::Work => "work",
            Tag::Friends => "friends",
            Tag::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tag::Family => "Family",
            Tag::Work => "Work",
            Tag::Friends => "Friends",
            Tag::Other => "Other",
        }
    }

    /// Exact, case-sensitive match against the whitelist.
    pub fn parse(s: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// A persisted contact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tag: String,
    pub notes: String,
}

/// Raw field values as submitted by the create/edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tag: String,
    pub notes: String,
}

impl ContactForm {
    /// Build from decoded form fields. Every field but `tag` must be present.
    pub fn from_fields(mut fields: HashMap<String, String>) -> Result<Self, AppError> {
        let mut required = |key: &str| {
            fields
                .remove(key)
                .ok_or_else(|| AppError::BadRequest(format!("missing form field '{}'", key)))
        };
        let name = required("name")?;
        let email = required("email")?;
        let phone = required("phone")?;
        let notes = required("notes")?;
        let tag = fields.remove("tag").unwrap_or_default();
        Ok(ContactForm {
            name,
            email,
            phone,
            tag,
            notes,
        })
    }

    /// Values as they get persisted: text fields trimmed, tag verbatim.
    pub fn normalized(&self) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            tag: self.tag.clone(),
            notes: self.notes.trim().to_string(),
        }
    }
}

impl From<Contact> for ContactForm {
    fn from(c: Contact) -> Self {
        ContactForm {
            name: c.name,
            email: c.email,
            phone: c.phone,
            tag: c.tag,
            notes: c.notes,
        }
    }
}

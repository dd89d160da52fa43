//! Contact validation: first failing rule wins, checked in a fixed order.

use crate::model::{ContactForm, Tag};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

const NAME_MAX: usize = 80;
const EMAIL_MAX: usize = 120;
const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15;
const NOTES_MAX: usize = 500;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\s+]+$").unwrap());

/// Why a submitted contact was rejected. Only the first failing rule is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("Name must be between 1 and 80 characters.")]
    NameLength,
    #[error("Name may only contain letters and spaces.")]
    NameCharacters,
    #[error("Email must not exceed 120 characters.")]
    EmailLength,
    #[error("Invalid email format.")]
    EmailFormat,
    #[error("Phone is required.")]
    PhoneMissing,
    #[error("Phone contains invalid characters.")]
    PhoneCharacters,
    #[error("Phone must have between 7 and 15 digits (has {0}).")]
    PhoneDigits(usize),
    #[error("Invalid tag.")]
    Tag,
    #[error("Notes must not exceed 500 characters.")]
    NotesLength,
    #[error("Notes must not contain HTML characters (< >).")]
    NotesHtml,
}

pub struct ContactValidator;

impl ContactValidator {
    /// Validate a submitted contact. Text fields are trimmed before every check; tag is matched verbatim.
    pub fn validate(form: &ContactForm) -> Result<(), Rejection> {
        validate_name(form.name.trim())?;
        validate_email(form.email.trim())?;
        validate_phone(form.phone.trim())?;
        validate_tag(&form.tag)?;
        validate_notes(form.notes.trim())?;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), Rejection> {
    let len = name.chars().count();
    if !(1..=NAME_MAX).contains(&len) {
        return Err(Rejection::NameLength);
    }
    if !NAME_RE.is_match(name) {
        return Err(Rejection::NameCharacters);
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), Rejection> {
    if email.chars().count() > EMAIL_MAX {
        return Err(Rejection::EmailLength);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(Rejection::EmailFormat);
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), Rejection> {
    if phone.is_empty() {
        return Err(Rejection::PhoneMissing);
    }
    if !PHONE_RE.is_match(phone) {
        return Err(Rejection::PhoneCharacters);
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        return Err(Rejection::PhoneDigits(digits));
    }
    Ok(())
}

fn validate_tag(tag: &str) -> Result<(), Rejection> {
    // empty means "no tag" and is allowed
    if tag.is_empty() || Tag::parse(tag).is_some() {
        Ok(())
    } else {
        Err(Rejection::Tag)
    }
}

fn validate_notes(notes: &str) -> Result<(), Rejection> {
    if notes.chars().count() > NOTES_MAX {
        return Err(Rejection::NotesLength);
    }
    if notes.contains(['<', '>']) {
        return Err(Rejection::NotesHtml);
    }
    Ok(())
}

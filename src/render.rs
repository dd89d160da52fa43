//! HTML pages rendered with Handlebars from templates compiled into the binary.

use crate::error::AppError;
use crate::model::{Contact, ContactForm, Tag};
use crate::notice::Notice;
use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Registered by name; "notice" is pulled into the other pages as a partial.
const TEMPLATES: &[(&str, &str)] = &[
    ("notice", include_str!("templates/notice.hbs")),
    ("index", include_str!("templates/index.hbs")),
    ("form", include_str!("templates/form.hbs")),
];

/// Which form is being shown; decides title and submit target.
#[derive(Clone, Copy, Debug)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Serialize)]
struct TagOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

/// Registered templates. Cheap to clone.
#[derive(Clone)]
pub struct Pages {
    registry: Arc<Handlebars<'static>>,
}

impl Pages {
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut hb = Handlebars::new();
        for (name, source) in TEMPLATES {
            hb.register_template_string(name, source)?;
        }
        Ok(Self {
            registry: Arc::new(hb),
        })
    }

    pub fn index(&self, contacts: &[Contact], notice: Option<Notice>) -> Result<Html<String>, AppError> {
        let ctx = json!({ "contacts": contacts, "notice": notice });
        Ok(Html(self.registry.render("index", &ctx)?))
    }

    pub fn form(
        &self,
        mode: FormMode,
        contact: &ContactForm,
        notice: Option<Notice>,
    ) -> Result<Html<String>, AppError> {
        let (title, action) = match mode {
            FormMode::Create => ("Create", "/create".to_string()),
            FormMode::Edit(id) => ("Edit", format!("/edit/{}", id)),
        };
        let tags: Vec<TagOption> = Tag::ALL
            .into_iter()
            .map(|t| TagOption {
                value: t.as_str(),
                label: t.label(),
                selected: t.as_str() == contact.tag,
            })
            .collect();
        let ctx = json!({
            "title": title,
            "action": action,
            "contact": contact,
            "tags": tags,
            "notice": notice,
        });
        Ok(Html(self.registry.render("form", &ctx)?))
    }
}

//! User-facing message formatting.
//!
//! The controllers never hardcode notification text; they ask a
//! [`Translator`] with a message key and parameters. The production
//! implementation carries the fixed English patterns of the generated
//! screens; hosts may plug in a real localization layer instead.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix of all entity notification keys, e.g. `stayhubApp.booking.deleted`.
pub const APP_KEY: &str = "stayhubApp";

pub trait Translator {
    /// Resolve `key` to a display string, substituting `{name}` placeholders
    /// from `params`. Unknown keys come back verbatim so a missing entry is
    /// visible instead of silent.
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;
}

static MESSAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("entity.validation.required", "This field is required."),
        ("entity.validation.min", "This field should be at least {min}."),
        ("entity.validation.max", "This field cannot be more than {max}."),
        (
            "entity.validation.maxlength",
            "This field cannot be longer than {max} characters.",
        ),
        ("entity.validation.number", "This field should be a number."),
        ("error.server.not.reachable", "Server not reachable"),
        ("error.http.404", "The page does not exist."),
    ])
});

/// English message catalog matching the generated screens.
#[derive(Debug, Default, Clone)]
pub struct MessageCatalog;

impl MessageCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Notification keys are generated per entity (`stayhubApp.<entity>.<op>`)
    /// but share one English pattern per operation.
    fn entity_pattern(key: &str) -> Option<String> {
        let rest = key.strip_prefix(APP_KEY)?.strip_prefix('.')?;
        let (entity, op) = rest.split_once('.')?;
        match op {
            "created" => Some(format!(
                "A new {entity} is created with identifier {{param}}"
            )),
            "updated" => Some(format!("A {entity} is updated with identifier {{param}}")),
            "deleted" => Some(format!("A {entity} is deleted with identifier {{param}}")),
            _ => None,
        }
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = match MESSAGES.get(key) {
            Some(template) => (*template).to_string(),
            None => Self::entity_pattern(key).unwrap_or_else(|| key.to_string()),
        };
        let mut message = template;
        for (name, value) in params {
            message = message.replace(&format!("{{{name}}}"), value);
        }
        message
    }
}

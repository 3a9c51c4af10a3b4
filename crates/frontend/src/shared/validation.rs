//! Declarative field validation for update forms.
//!
//! Each entity declares a schema: per field, an accessor plus the rules the
//! backend also enforces. Evaluation is advisory — the result feeds inline
//! hints in the form, and `save` proceeds regardless; the backend is the
//! authoritative gate.

use std::collections::HashMap;

use super::i18n::Translator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required,
    MinValue(f64),
    MaxValue(f64),
    MaxLength(usize),
    Integer,
}

/// A field's current value reduced to what the rules can judge.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Unset. Only `Required` fails on it; range rules skip it.
    Blank,
    Text(String),
    Number(f64),
    Flag(bool),
    /// Set, but not text or numeric (dates, enums, references).
    Present,
}

/// Accessor helpers used by the per-entity schemas.
pub fn text(value: &Option<String>) -> FieldValue {
    match value {
        Some(text) => FieldValue::Text(text.clone()),
        None => FieldValue::Blank,
    }
}

pub fn number(value: &Option<f64>) -> FieldValue {
    match value {
        Some(number) => FieldValue::Number(*number),
        None => FieldValue::Blank,
    }
}

pub fn int(value: &Option<i32>) -> FieldValue {
    match value {
        Some(number) => FieldValue::Number(f64::from(*number)),
        None => FieldValue::Blank,
    }
}

pub fn flag(value: bool) -> FieldValue {
    FieldValue::Flag(value)
}

pub fn present<V>(value: &Option<V>) -> FieldValue {
    match value {
        Some(_) => FieldValue::Present,
        None => FieldValue::Blank,
    }
}

/// One field of an entity's validation schema.
pub struct FieldRules<T> {
    pub field: &'static str,
    pub read: fn(&T) -> FieldValue,
    pub rules: &'static [Rule],
}

/// Per-field rule results from the last evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationState {
    errors: HashMap<&'static str, Vec<String>>,
}

impl ValidationState {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn check(rule: &Rule, value: &FieldValue, i18n: &dyn Translator) -> Option<String> {
    match rule {
        Rule::Required => {
            let missing = match value {
                FieldValue::Blank => true,
                FieldValue::Text(text) => text.trim().is_empty(),
                _ => false,
            };
            missing.then(|| i18n.translate("entity.validation.required", &[]))
        }
        Rule::MinValue(min) => match value {
            FieldValue::Number(number) if number < min => Some(
                i18n.translate("entity.validation.min", &[("min", &min.to_string())]),
            ),
            _ => None,
        },
        Rule::MaxValue(max) => match value {
            FieldValue::Number(number) if number > max => Some(
                i18n.translate("entity.validation.max", &[("max", &max.to_string())]),
            ),
            _ => None,
        },
        Rule::MaxLength(max) => match value {
            FieldValue::Text(text) if text.chars().count() > *max => Some(i18n.translate(
                "entity.validation.maxlength",
                &[("max", &max.to_string())],
            )),
            _ => None,
        },
        Rule::Integer => match value {
            FieldValue::Number(number) if number.fract() != 0.0 => {
                Some(i18n.translate("entity.validation.number", &[]))
            }
            _ => None,
        },
    }
}

/// Evaluate the whole schema against the current draft.
pub fn validate<T>(
    entity: &T,
    schema: &[FieldRules<T>],
    i18n: &dyn Translator,
) -> ValidationState {
    let mut errors: HashMap<&'static str, Vec<String>> = HashMap::new();
    for field in schema {
        let value = (field.read)(entity);
        let messages: Vec<String> = field
            .rules
            .iter()
            .filter_map(|rule| check(rule, &value, i18n))
            .collect();
        if !messages.is_empty() {
            errors.insert(field.field, messages);
        }
    }
    ValidationState { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::MessageCatalog;

    #[derive(Default)]
    struct Draft {
        name: Option<String>,
        rating: Option<i32>,
        price: Option<f64>,
        active: bool,
    }

    const SCHEMA: &[FieldRules<Draft>] = &[
        FieldRules {
            field: "name",
            read: |d: &Draft| text(&d.name),
            rules: &[Rule::Required, Rule::MaxLength(5)],
        },
        FieldRules {
            field: "rating",
            read: |d: &Draft| int(&d.rating),
            rules: &[
                Rule::Required,
                Rule::Integer,
                Rule::MinValue(1.0),
                Rule::MaxValue(5.0),
            ],
        },
        FieldRules {
            field: "price",
            read: |d: &Draft| number(&d.price),
            rules: &[Rule::MinValue(0.0)],
        },
        FieldRules {
            field: "active",
            read: |d: &Draft| flag(d.active),
            rules: &[Rule::Required],
        },
    ];

    #[test]
    fn test_required_fails_on_blank_and_whitespace() {
        let catalog = MessageCatalog::new();
        let state = validate(&Draft::default(), SCHEMA, &catalog);
        assert!(!state.is_valid());
        assert_eq!(
            state.field_errors("name"),
            &["This field is required.".to_string()]
        );

        let draft = Draft {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        let state = validate(&draft, SCHEMA, &catalog);
        assert!(!state.field_errors("name").is_empty());
    }

    #[test]
    fn test_range_rules_skip_blank_values() {
        let catalog = MessageCatalog::new();
        let state = validate(&Draft::default(), SCHEMA, &catalog);
        // price is optional and unset: no range violation reported
        assert!(state.field_errors("price").is_empty());
    }

    #[test]
    fn test_bounds_and_length() {
        let catalog = MessageCatalog::new();
        let draft = Draft {
            name: Some("toolongname".to_string()),
            rating: Some(9),
            price: Some(-1.0),
            active: true,
        };
        let state = validate(&draft, SCHEMA, &catalog);
        assert_eq!(
            state.field_errors("name"),
            &["This field cannot be longer than 5 characters.".to_string()]
        );
        assert_eq!(
            state.field_errors("rating"),
            &["This field cannot be more than 5.".to_string()]
        );
        assert_eq!(
            state.field_errors("price"),
            &["This field should be at least 0.".to_string()]
        );
    }

    #[test]
    fn test_valid_draft() {
        let catalog = MessageCatalog::new();
        let draft = Draft {
            name: Some("ok".to_string()),
            rating: Some(4),
            price: Some(10.0),
            active: false,
        };
        let state = validate(&draft, SCHEMA, &catalog);
        assert!(state.is_valid());
        assert!(state.field_errors("active").is_empty());
    }
}

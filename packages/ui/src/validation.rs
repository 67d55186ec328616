//! # Form validation
//!
//! A [`Schema`] is a list of fields, each with an ordered list of [`Rule`]s.
//! Validation checks every field (it does not stop at the first failing field)
//! and records the message of the **first** rule that fails per field, so the
//! form can show one inline error under each offending input.
//!
//! Forms expose their values through [`FormValues`]; a field the form does not
//! know reads as the empty string.
//!
//! ```ignore
//! let schema = Schema::new()
//!     .field("email", [Rule::required("Email required"), Rule::email("Please insert a valid email")])
//!     .field("password", [Rule::min_length(6, "Min 6 characters")]);
//! schema.validate(&form)?;
//! ```
//!
//! `required` rejects only the empty string; whitespace counts as a value.
//! `email` only judges non-empty values; pair it with `required` when the
//! field is mandatory. `min_length` counts characters and fails on an empty
//! value.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern compiles")
});

/// Read access to the current values of a form.
pub trait FormValues {
    fn value(&self, field: &str) -> &str;
}

/// Per-field error messages, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// One check on a field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    Required(&'static str),
    Email(&'static str),
    MinLength(usize, &'static str),
    /// Must equal the value of another field.
    Equals(&'static str, &'static str),
}

impl Rule {
    pub fn required(message: &'static str) -> Self {
        Self::Required(message)
    }

    pub fn email(message: &'static str) -> Self {
        Self::Email(message)
    }

    pub fn min_length(min: usize, message: &'static str) -> Self {
        Self::MinLength(min, message)
    }

    pub fn equals(other_field: &'static str, message: &'static str) -> Self {
        Self::Equals(other_field, message)
    }

    /// The failure message, or `None` when `value` passes.
    fn check(&self, value: &str, values: &impl FormValues) -> Option<&'static str> {
        let ok = match self {
            Self::Required(_) => !value.is_empty(),
            Self::Email(_) => value.is_empty() || EMAIL_RE.is_match(value.trim()),
            Self::MinLength(min, _) => value.chars().count() >= *min,
            Self::Equals(other, _) => value == values.value(other),
        };
        if ok {
            None
        } else {
            Some(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::Required(m) | Self::Email(m) | Self::MinLength(_, m) | Self::Equals(_, m) => *m,
        }
    }
}

/// An ordered set of field rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    fields: Vec<(&'static str, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name, rules.into_iter().collect()));
        self
    }

    /// Check every field; `Err` holds one message per failing field.
    pub fn validate(&self, values: &impl FormValues) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for (name, rules) in &self.fields {
            let value = values.value(name);
            if let Some(message) = rules.iter().find_map(|rule| rule.check(value, values)) {
                errors.insert(*name, message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

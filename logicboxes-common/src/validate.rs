//! Declarative validation run before any wire encoding.
//!
//! Rules are declared per field in the descriptor table and checked against
//! the populated instance in one pass. The gate fails fast: the first
//! violated rule is reported and nothing is encoded. Format rules only apply
//! to populated fields; `Required` is the only rule that fires on a zero
//! value. Fields with an empty rule list are exempt entirely.

use crate::error::Error;
use crate::wire::{FieldDescriptor, FieldValue};
use std::collections::HashMap;

/// A named rule implementation registered on the [`Validator`].
pub type CustomRule = fn(&str) -> bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field must hold a non-zero value.
    Required,
    /// Exact character count, e.g. two-character phone country codes.
    Len(usize),
    MinLen(usize),
    MaxLen(usize),
    /// Decimal digits only.
    Numeric,
    /// ISO 3166-1 alpha-2 shape: two ASCII uppercase letters.
    CountryCode,
    Email,
    /// Resolved by name through the validator's registry.
    Custom(&'static str),
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Len(_) => "len",
            Rule::MinLen(_) => "min",
            Rule::MaxLen(_) => "max",
            Rule::Numeric => "numeric",
            Rule::CountryCode => "iso3166-1-alpha2",
            Rule::Email => "email",
            Rule::Custom(name) => name,
        }
    }
}

/// Rule engine with a registry of named custom rules. Intended to be built
/// once at startup and shared; checking is read-only.
#[derive(Debug, Default)]
pub struct Validator {
    custom: HashMap<&'static str, CustomRule>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rule` under `name` for use via [`Rule::Custom`].
    pub fn register(&mut self, name: &'static str, rule: CustomRule) {
        self.custom.insert(name, rule);
    }

    /// Checks every field against its declared rules, stopping at the first
    /// violation.
    pub fn check(
        &self,
        descriptors: &[FieldDescriptor],
        values: &[FieldValue<'_>],
    ) -> Result<(), Error> {
        for (desc, value) in descriptors.iter().zip(values) {
            for rule in desc.rules {
                let violated = match rule {
                    Rule::Required => value.is_zero(),
                    _ if value.is_zero() => false,
                    rule => match value.as_str() {
                        Some(text) => !self.passes(rule, text)?,
                        // Format rules are string rules; other kinds pass.
                        None => false,
                    },
                };
                if violated {
                    return Err(Error::Validation {
                        field: desc.key,
                        rule: rule.name(),
                    });
                }
            }
        }
        Ok(())
    }

    fn passes(&self, rule: &Rule, text: &str) -> Result<bool, Error> {
        let ok = match rule {
            Rule::Required => true,
            Rule::Len(n) => text.chars().count() == *n,
            Rule::MinLen(n) => text.chars().count() >= *n,
            Rule::MaxLen(n) => text.chars().count() <= *n,
            Rule::Numeric => is_numeric(text),
            Rule::CountryCode => is_country_code(text),
            Rule::Email => is_email(text),
            Rule::Custom(name) => {
                let custom = self.custom.get(name).ok_or(Error::UnknownRule(name))?;
                custom(text)
            }
        };
        Ok(ok)
    }
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_country_code(text: &str) -> bool {
    text.len() == 2 && text.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_email(text: &str) -> bool {
    let Some((local, domain)) = text.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if text.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    // The domain needs at least one dot with non-empty labels around it.
    domain.contains('.') && !domain.split('.').any(str::is_empty)
}

//! Search Validation Rule
//!
//! Per-field shape checks plus the cross-field search rule. Everything here
//! is a pure function of the current form values.

use std::sync::LazyLock;

use regex::Regex;

use super::filter::{Field, SearchFilter};
use crate::error::{AppError, AppResult};

const NAME_MIN: usize = 2;
const FIELD_MAX: usize = 50;

/// Letters, spaces, apostrophes, hyphens
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s'-]+$").expect("name pattern compiles"));

/// Letters and spaces
static COUNTRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\s]+$").expect("country pattern compiles"));

/// Shape constraint broken by a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    MinLength(usize),
    MaxLength(usize),
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub violation: Violation,
}

impl FieldViolation {
    pub fn message(&self) -> String {
        let name = self.field.label();
        match self.violation {
            Violation::MinLength(n) => format!("{} must be at least {} characters", name, n),
            Violation::MaxLength(n) => format!("{} must not exceed {} characters", name, n),
            Violation::Pattern => format!("{} contains invalid characters", name),
        }
    }
}

/// Cross-field rule failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSearch;

impl InvalidSearch {
    pub const MESSAGE: &'static str = "Enter a first or last name and select at least one business unit";
}

/// Everything wrong with a filter, reported together
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub fields: Vec<FieldViolation>,
    pub invalid_search: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty() && !self.invalid_search
    }

    /// Violations for one field, in check order
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldViolation> {
        self.fields.iter().filter(move |v| v.field == field)
    }

    pub fn messages(&self) -> Vec<String> {
        let mut messages: Vec<String> = self.fields.iter().map(FieldViolation::message).collect();
        if self.invalid_search {
            messages.push(InvalidSearch::MESSAGE.to_string());
        }
        messages
    }

    /// `Ok` when the form may be sent, otherwise the report as an error
    pub fn into_result(self) -> AppResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

/// The cross-field search rule on its own.
///
/// Holds iff a first or last name is given and at least one business unit is
/// selected, regardless of whether those values pass their shape checks.
pub fn check_search_rule(filter: &SearchFilter) -> Result<(), InvalidSearch> {
    let has_name = !filter.first_name.trim().is_empty() || !filter.last_name.trim().is_empty();
    if has_name && !filter.business_units.is_empty() {
        Ok(())
    } else {
        Err(InvalidSearch)
    }
}

/// Run every field check and the search rule.
pub fn validate(filter: &SearchFilter) -> ValidationReport {
    let mut fields = Vec::new();
    for field in Field::ALL {
        if let Some(value) = filter.text(field) {
            fields.extend(check_field(field, value).into_iter().map(|violation| FieldViolation { field, violation }));
        }
    }
    ValidationReport {
        fields,
        invalid_search: check_search_rule(filter).is_err(),
    }
}

/// Shape checks for one text field. Empty values are not checked.
pub fn check_field(field: Field, value: &str) -> Vec<Violation> {
    if value.is_empty() {
        return Vec::new();
    }
    let len = value.chars().count();
    let mut violations = Vec::new();

    let (min, pattern) = match field {
        Field::FirstName | Field::LastName => (NAME_MIN, Some(&*NAME_PATTERN)),
        Field::MiddleName => (0, Some(&*NAME_PATTERN)),
        Field::Country => (0, Some(&*COUNTRY_PATTERN)),
        Field::SourceMemberId => (0, None),
        Field::BusinessUnits => return violations,
    };

    if len < min {
        violations.push(Violation::MinLength(min));
    }
    if len > FIELD_MAX {
        violations.push(Violation::MaxLength(FIELD_MAX));
    }
    if let Some(pattern) = pattern {
        if !pattern.is_match(value) {
            violations.push(Violation::Pattern);
        }
    }
    violations
}

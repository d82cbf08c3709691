//! Search Form State
//!
//! Field values, business unit selection and the pagination cursor.

use std::collections::BTreeSet;

/// Selectable business units (value, label)
pub const BUSINESS_UNITS: &[(&str, &str)] = &[
    ("IT", "IT"),
    ("Sales", "Sales"),
    ("HR", "Human Resources"),
    ("Finance", "Finance"),
    ("Marketing", "Marketing"),
    ("Operations", "Operations"),
];

/// Default page size when none is configured
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Active search mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Standard,
    NaturalLanguage,
}

/// Structured form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    BusinessUnits,
    Country,
    SourceMemberId,
}

impl Field {
    /// Every field, in form order
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::BusinessUnits,
        Field::Country,
        Field::SourceMemberId,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::MiddleName => "Middle Name",
            Field::LastName => "Last Name",
            Field::BusinessUnits => "Business Unit",
            Field::Country => "Country",
            Field::SourceMemberId => "Source Member ID",
        }
    }
}

/// Page index and size sent with every search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub size: u32,
}

impl PageCursor {
    pub fn new(size: u32) -> Self {
        Self { page: 0, size: size.max(1) }
    }

    pub fn at(self, page: u32) -> Self {
        Self { page, ..self }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Transient standard-search input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub country: String,
    pub source_member_id: String,
    pub business_units: BTreeSet<String>,
}

impl SearchFilter {
    /// Current value of a text field (`None` for the business unit facet)
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::MiddleName => Some(&self.middle_name),
            Field::LastName => Some(&self.last_name),
            Field::Country => Some(&self.country),
            Field::SourceMemberId => Some(&self.source_member_id),
            Field::BusinessUnits => None,
        }
    }

    /// Set a text field. Ignored for the business unit facet.
    pub fn set_text(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::LastName => &mut self.last_name,
            Field::Country => &mut self.country,
            Field::SourceMemberId => &mut self.source_member_id,
            Field::BusinessUnits => return,
        };
        *slot = value;
    }

    /// Select or deselect a business unit
    pub fn toggle_business_unit(&mut self, unit: &str, selected: bool) {
        if selected {
            self.business_units.insert(unit.to_string());
        } else {
            self.business_units.remove(unit);
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_units_are_a_set() {
        let mut filter = SearchFilter::default();
        filter.toggle_business_unit("IT", true);
        filter.toggle_business_unit("IT", true);
        filter.toggle_business_unit("Sales", true);
        assert_eq!(filter.business_units.len(), 2);

        filter.toggle_business_unit("IT", false);
        assert!(!filter.business_units.contains("IT"));
        assert!(filter.business_units.contains("Sales"));
    }

    #[test]
    fn test_set_text_ignores_facet() {
        let mut filter = SearchFilter::default();
        filter.set_text(Field::BusinessUnits, "IT".to_string());
        assert!(filter.is_empty());

        filter.set_text(Field::Country, "Canada".to_string());
        assert_eq!(filter.text(Field::Country), Some("Canada"));
    }

    #[test]
    fn test_cursor_never_zero_sized() {
        assert_eq!(PageCursor::new(0).size, 1);
        assert_eq!(PageCursor::default().at(3), PageCursor { page: 3, size: DEFAULT_PAGE_SIZE });
    }
}

//! Deterministic reporting of `validator` failures.
//!
//! `ValidationErrors` keeps field errors in a hash map, so the order in which
//! they come back is unspecified. Inputs declare their field order and the
//! first failing field in that order is the one reported to the client.

use bookshelf_core::error::CoreError;
use validator::{Validate, ValidationErrors};

pub trait CheckedInput: Validate {
    /// Validated field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Run the `validator` rules and collapse any failure into a single
    /// [`CoreError::Validation`] describing the first failing field.
    fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(first_violation(&errors, Self::FIELDS)))
    }
}

fn first_violation(errors: &ValidationErrors, fields: &[&str]) -> String {
    let field_errors = errors.field_errors();
    for field in fields {
        let Some(first) = field_errors.get(*field).and_then(|errs| errs.first()) else {
            continue;
        };
        return match &first.message {
            Some(message) => message.to_string(),
            None => format!("{field} is invalid ({})", first.code),
        };
    }
    errors.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::CreateBook;

    fn valid_book() -> CreateBook {
        CreateBook {
            title: "Dune".into(),
            description: None,
            image_url: None,
            release_year: 2010,
            price: 50_000,
            total_page: 412,
            category_id: None,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid_book().check().is_ok());
    }

    #[test]
    fn reports_first_field_in_declaration_order() {
        let mut input = valid_book();
        input.title = String::new();
        input.release_year = 1970;
        input.total_page = 0;

        let err = input.check().unwrap_err();
        match err {
            CoreError::Validation(msg) => assert_eq!(msg, "title is required"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn release_year_bounds_are_inclusive() {
        let mut input = valid_book();
        input.release_year = 1980;
        assert!(input.check().is_ok());
        input.release_year = 2024;
        assert!(input.check().is_ok());
        input.release_year = 2025;
        let err = input.check().unwrap_err();
        assert!(err.to_string().contains("release_year must be between 1980 and 2024"));
    }

    #[test]
    fn zero_price_is_allowed_but_negative_is_not() {
        let mut input = valid_book();
        input.price = 0;
        assert!(input.check().is_ok());
        input.price = -1;
        assert!(input.check().is_err());
    }
}

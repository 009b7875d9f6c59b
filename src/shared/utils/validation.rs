use chrono::{Datelike, Utc};
use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_book_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 200 {
            return Err(AppError::ValidationError(
                "Title too long (max 200 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_rating(rating: i32) -> Result<(), AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::ValidationError(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_publication_year(year: i32) -> Result<(), AppError> {
        let next_year = Utc::now().year() + 1;
        if year < 0 || year > next_year {
            return Err(AppError::ValidationError(format!(
                "Publication year must be between 0 and {}",
                next_year
            )));
        }
        Ok(())
    }

    pub fn validate_page_count(pages: i32) -> Result<(), AppError> {
        if pages < 0 {
            return Err(AppError::ValidationError(
                "Page count cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_isbn(isbn: &str) -> Result<(), AppError> {
        if isbn.len() > 20 {
            return Err(AppError::ValidationError(
                "ISBN too long (max 20 characters)".to_string(),
            ));
        }

        // Digits with optional dashes, ISBN-10 may end in X
        let re = Regex::new(r"^[0-9][0-9\-]*[0-9Xx]$|^[0-9]$").unwrap();
        if !re.is_match(isbn) {
            return Err(AppError::ValidationError(
                "ISBN may only contain digits, dashes and a trailing X".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_person_name(name: &str, field: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(format!(
                "{} cannot be empty",
                field
            )));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(format!(
                "{} too long (max 100 characters)",
                field
            )));
        }
        Ok(())
    }

    pub fn validate_genre_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Genre name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(
                "Genre name too long (max 100 characters)".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_rejected() {
        assert!(Validator::validate_book_title("").is_err());
        assert!(Validator::validate_book_title("   ").is_err());
        assert!(Validator::validate_book_title("Emma").is_ok());
    }

    #[test]
    fn rating_bounds() {
        assert!(Validator::validate_rating(0).is_err());
        assert!(Validator::validate_rating(1).is_ok());
        assert!(Validator::validate_rating(5).is_ok());
        assert!(Validator::validate_rating(6).is_err());
    }

    #[test]
    fn publication_year_bounds() {
        assert!(Validator::validate_publication_year(-1).is_err());
        assert!(Validator::validate_publication_year(1816).is_ok());
        assert!(Validator::validate_publication_year(9999).is_err());
    }

    #[test]
    fn isbn_shapes() {
        assert!(Validator::validate_isbn("978-0-14-143958-8").is_ok());
        assert!(Validator::validate_isbn("014143958X").is_ok());
        assert!(Validator::validate_isbn("not an isbn").is_err());
        assert!(Validator::validate_isbn("978-0-14-143958-8-978-0-14").is_err());
    }

    #[test]
    fn page_count_must_be_non_negative() {
        assert!(Validator::validate_page_count(-5).is_err());
        assert!(Validator::validate_page_count(0).is_ok());
    }
}

//! Validation utilities for the HatWorks manufacturing platform

use chrono::NaiveDate;

/// Validate product code format (3-12 uppercase alphanumeric)
pub fn validate_product_code(code: &str) -> Result<(), &'static str> {
    if code.len() < 3 {
        return Err("Product code must be at least 3 characters");
    }
    if code.len() > 12 {
        return Err("Product code must be at most 12 characters");
    }
    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err("Product code must be uppercase alphanumeric only");
    }
    Ok(())
}

/// Validate that a batch's planned window is ordered
pub fn validate_batch_dates(start: NaiveDate, end: NaiveDate) -> Result<(), &'static str> {
    if end <= start {
        return Err("End date must be after start date");
    }
    Ok(())
}

/// Validate a requested or distributed line quantity
pub fn validate_line_quantity(quantity: u32) -> Result<(), &'static str> {
    if quantity == 0 {
        return Err("Quantity must be positive");
    }
    Ok(())
}

/// Validate a factory name (non-empty, trimmed)
pub fn validate_factory_name(factory: &str) -> Result<(), &'static str> {
    if factory.trim().is_empty() {
        return Err("Factory name must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_code_valid() {
        assert!(validate_product_code("HAT").is_ok());
        assert!(validate_product_code("HAT01").is_ok());
        assert!(validate_product_code("CAP2024BR").is_ok());
    }

    #[test]
    fn test_validate_product_code_invalid() {
        assert!(validate_product_code("HA").is_err()); // Too short
        assert!(validate_product_code("HATHATHATHAT1").is_err()); // Too long
        assert!(validate_product_code("hat01").is_err()); // Lowercase
        assert!(validate_product_code("HAT-01").is_err()); // Special char
    }

    #[test]
    fn test_validate_batch_dates_ordered() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(validate_batch_dates(start, end).is_ok());
    }

    #[test]
    fn test_validate_batch_dates_inverted() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            validate_batch_dates(start, end),
            Err("End date must be after start date")
        );
    }

    #[test]
    fn test_validate_batch_dates_equal() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert!(validate_batch_dates(day, day).is_err());
    }

    #[test]
    fn test_validate_line_quantity() {
        assert!(validate_line_quantity(1).is_ok());
        assert!(validate_line_quantity(500).is_ok());
        assert!(validate_line_quantity(0).is_err());
    }

    #[test]
    fn test_validate_factory_name() {
        assert!(validate_factory_name("Riverside").is_ok());
        assert!(validate_factory_name("").is_err());
        assert!(validate_factory_name("   ").is_err());
    }
}

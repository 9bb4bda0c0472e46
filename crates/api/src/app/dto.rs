use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(custom(function = non_negative_price))]
    pub price: Decimal,
}

fn non_negative_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut error = ValidationError::new("range");
        error.message = Some("price must be at least 0".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_fails_validation() {
        let request = CreateProductRequest {
            name: "New Product".to_string(),
            price: Decimal::new(-500, 2),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn zero_price_passes_validation() {
        let request = CreateProductRequest {
            name: "Freebie".to_string(),
            price: Decimal::ZERO,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_name_fails_validation() {
        let request = CreateProductRequest {
            name: String::new(),
            price: Decimal::new(100, 2),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn overlong_name_fails_validation() {
        let request = CreateProductRequest {
            name: "x".repeat(256),
            price: Decimal::new(100, 2),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}

//! Validation utilities for the Mesa platform
//!
//! Small, dependency-free checks shared by the client core and the WASM
//! bindings; form-level validation uses `validator` derives on the payload
//! structs.

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength (the auth provider's minimum is 6 characters)
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Validate a dish price: must be a positive, finite number
pub fn validate_dish_price(price: f64) -> Result<(), &'static str> {
    if !price.is_finite() {
        return Err("Price must be a number");
    }
    if price <= 0.0 {
        return Err("Price must be greater than zero");
    }
    Ok(())
}

/// Validate a latitude/longitude pair is in range
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), &'static str> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude out of range");
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude out of range");
    }
    Ok(())
}

/// Validate a user-entered title (dish name, event title)
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title must not be empty");
    }
    Ok(())
}

//! Field rules that the `validator` derive cannot express on its own

use std::borrow::Cow;

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

/// US-style phone number, e.g. `(555) 123-4567`
pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").expect("valid phone regex"));

pub fn violation(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Merge derive-based results with additional field violations
pub fn merge(
    derived: Result<(), ValidationErrors>,
    extra: Vec<(&'static str, ValidationError)>,
) -> Result<(), ValidationErrors> {
    let mut errors = derived.err().unwrap_or_else(ValidationErrors::new);
    for (field, error) in extra {
        errors.add(field, error);
    }
    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Positive with at most two decimal places
pub fn check_price(price: &Decimal) -> Option<ValidationError> {
    if *price <= Decimal::ZERO {
        return Some(violation("price_positive", "Price must be positive"));
    }
    if price.normalize().scale() > 2 {
        return Some(violation("price_decimals", "Price can have max 2 decimal places"));
    }
    None
}

pub fn check_phone(phone: &str) -> Option<ValidationError> {
    if PHONE_RE.is_match(phone) {
        None
    } else {
        Some(violation(
            "phone_format",
            "Phone number must be in format (XXX) XXX-XXXX",
        ))
    }
}

/// 24-hour `HH:mm`
pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    if value.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

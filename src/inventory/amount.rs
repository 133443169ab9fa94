use crate::error::InventoryError;

/// Parses a stock amount typed by the user. Only finite, non-negative numbers
/// are accepted.
pub fn parse_amount(input: &str) -> Result<f64, InventoryError> {
    let invalid = || InventoryError::InvalidAmount {
        input: input.to_string(),
    };
    let value: f64 = input.trim().parse().map_err(|_| invalid())?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(invalid())
    }
}

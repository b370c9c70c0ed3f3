use crate::utils::error::{KataError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Grid resolutions get their own error variant so callers can tell them apart.
pub fn validate_resolution(axis: &'static str, value: usize) -> Result<()> {
    if value < 1 {
        return Err(KataError::InvalidResolution { axis, value });
    }
    Ok(())
}

/// Number of cells in a `columns` x `rows` grid, if it fits in `usize`.
pub fn validate_cell_count(columns: usize, rows: usize) -> Result<usize> {
    columns
        .checked_mul(rows)
        .ok_or(KataError::GridTooLarge { columns, rows })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KataError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(KataError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

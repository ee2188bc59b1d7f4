use crate::errors::{HwinvError, Result};
use crate::model::{HardwareDraft, HardwareItem};

/// Validate the replaceable fields of a candidate item
///
/// Checks, in order:
///
/// 1. `name`, `brand`, `model` and `serialNumber` are not empty or whitespace-only
/// 2. `monthlyRentingCost` is finite and not negative
///
/// # Errors
/// * `InvalidField` - for the first blank required field
/// * `InvalidMonthlyCost` - if the cost is negative, NaN or infinite
pub fn validate_draft(draft: &HardwareDraft) -> Result<()> {
    require_text("name", &draft.name)?;
    require_text("brand", &draft.brand)?;
    require_text("model", &draft.model)?;
    require_text("serialNumber", &draft.serial_number)?;
    validate_monthly_cost(draft.monthly_renting_cost)
}

/// Validate a full item as supplied to the update operation
///
/// Same rules as [`validate_draft`], plus a non-empty id.
///
/// # Errors
/// * `InvalidField` - if the id or a required text field is blank
/// * `InvalidMonthlyCost` - if the cost is negative, NaN or infinite
pub fn validate_item(item: &HardwareItem) -> Result<()> {
    require_text("id", item.id.as_str())?;
    require_text("name", &item.name)?;
    require_text("brand", &item.brand)?;
    require_text("model", &item.model)?;
    require_text("serialNumber", &item.serial_number)?;
    validate_monthly_cost(item.monthly_renting_cost)
}

/// Check a monthly renting cost value
///
/// # Errors
/// * `InvalidMonthlyCost` - if the cost is negative, NaN or infinite
pub fn validate_monthly_cost(cost: f64) -> Result<()> {
    if !cost.is_finite() {
        return Err(HwinvError::InvalidMonthlyCost {
            value: cost.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    if cost < 0.0 {
        return Err(HwinvError::InvalidMonthlyCost {
            value: cost.to_string(),
            reason: "cannot be negative".to_string(),
        });
    }
    Ok(())
}

/// Parse a monthly renting cost typed into a form field
///
/// Surrounding whitespace is ignored. The parsed value must pass
/// [`validate_monthly_cost`].
///
/// # Errors
/// * `InvalidMonthlyCost` - if the text is blank, not a number, negative or not finite
pub fn parse_monthly_cost(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(HwinvError::InvalidMonthlyCost {
            value: text.to_string(),
            reason: "is required".to_string(),
        });
    }

    let cost: f64 = trimmed
        .parse()
        .map_err(|_| HwinvError::InvalidMonthlyCost {
            value: text.to_string(),
            reason: "is not a number".to_string(),
        })?;

    validate_monthly_cost(cost)?;
    Ok(cost)
}

fn require_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HwinvError::InvalidField {
            field,
            reason: "cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_blank_field_is_reported() {
        let draft = HardwareDraft::new("Laptop", "", " ", "SN-1", 1.0);
        match validate_draft(&draft) {
            Err(HwinvError::InvalidField { field, .. }) => assert_eq!(field, "brand"),
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_cost_is_allowed() {
        assert!(validate_monthly_cost(0.0).is_ok());
    }

    #[test]
    fn test_parse_rejects_special_values() {
        assert!(parse_monthly_cost("NaN").is_err());
        assert!(parse_monthly_cost("inf").is_err());
        assert!(parse_monthly_cost("-1").is_err());
    }

    #[test]
    fn test_parse_trims_input() {
        assert_eq!(parse_monthly_cost("  19.99 ").unwrap(), 19.99);
    }
}

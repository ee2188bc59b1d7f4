pub mod invariants;
pub mod validation;

pub use validation::{parse_monthly_cost, validate_draft, validate_item, validate_monthly_cost};

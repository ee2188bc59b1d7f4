//! Query module for read-only operations
//!
//! Key principles:
//! - All queries are read-only (no mutations)
//! - Results keep the inventory's insertion order
//! - Derived values (brands, stock counts) are computed, never stored

pub mod inventory_queries;

pub use inventory_queries::{
    filter_by_brand, list_brands, search, stock_count, stock_listing, total_monthly_cost,
    StockLine,
};

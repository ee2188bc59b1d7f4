//! Listing commands
//!
//! Usage:
//!   hwinv list [--brand <BRAND>] [--query <TEXT>] [--stock] [--json]
//!   hwinv brands
//!   hwinv stock <NAME>

use anyhow::Result;
use clap::Args;
use hwinv_core::queries::total_monthly_cost;
use hwinv_core::{HardwareItem, StockLine};
use hwinv_store::{FsKv, HardwareRepository};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only items of this brand (exact match)
    #[arg(long)]
    pub brand: Option<String>,

    /// Case-insensitive search text
    #[arg(long, default_value = "")]
    pub query: String,

    /// One row per distinct name with its stock count; the query then
    /// matches names only
    #[arg(long)]
    pub stock: bool,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct StockArgs {
    /// Exact item name
    pub name: String,
}

/// Execute list
pub fn execute_list(repo: &HardwareRepository<FsKv>, args: ListArgs) -> Result<()> {
    let brand = args.brand.as_deref();

    if args.stock {
        let lines = repo.stock_listing(brand, &args.query);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&lines)?);
        } else {
            print!("{}", render_stock_table(&lines));
        }
        return Ok(());
    }

    let items = search_within_brand(repo, brand, &args.query);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", render_item_table(&items));
    }
    Ok(())
}

/// Execute brands
pub fn execute_brands(repo: &HardwareRepository<FsKv>) -> Result<()> {
    for brand in repo.list_brands() {
        println!("{}", brand);
    }
    Ok(())
}

/// Execute stock
pub fn execute_stock(repo: &HardwareRepository<FsKv>, args: StockArgs) -> Result<()> {
    println!("{}", repo.stock_count(&args.name));
    Ok(())
}

/// Search results restricted to a brand, in collection order
fn search_within_brand<'a>(
    repo: &'a HardwareRepository<FsKv>,
    brand: Option<&str>,
    query: &str,
) -> Vec<&'a HardwareItem> {
    within_brand(repo.search(query), brand)
}

/// Keep items of `brand`; `None` or an empty brand keeps everything
fn within_brand<'a>(items: Vec<&'a HardwareItem>, brand: Option<&str>) -> Vec<&'a HardwareItem> {
    match brand {
        Some(brand) if !brand.is_empty() => {
            items.into_iter().filter(|item| item.brand == brand).collect()
        }
        _ => items,
    }
}

fn render_item_table(items: &[&HardwareItem]) -> String {
    let mut out = format!(
        "{:<36}  {:<16}  {:<12}  {:<16}  {:<14}  {:>10}\n",
        "ID", "NAME", "BRAND", "MODEL", "SERIAL", "MONTHLY"
    );
    for item in items {
        out.push_str(&format!(
            "{:<36}  {:<16}  {:<12}  {:<16}  {:<14}  {:>10.2}\n",
            item.id,
            item.name,
            item.brand,
            item.model,
            item.serial_number,
            item.monthly_renting_cost
        ));
    }
    out.push_str(&format!(
        "{} item(s), {:.2} per month\n",
        items.len(),
        total_monthly_cost(items.iter().copied())
    ));
    out
}

fn render_stock_table(lines: &[StockLine<'_>]) -> String {
    let mut out = format!(
        "{:<16}  {:<12}  {:<16}  {:>5}\n",
        "NAME", "BRAND", "MODEL", "STOCK"
    );
    for line in lines {
        out.push_str(&format!(
            "{:<16}  {:<12}  {:<16}  {:>5}\n",
            line.item.name, line.item.brand, line.item.model, line.stock
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hwinv_core::{HardwareDraft, HardwareId};

    fn item(id: &str, name: &str, cost: f64) -> HardwareItem {
        HardwareDraft::new(name, "Acme", "X1", format!("SN-{}", id), cost)
            .into_item(HardwareId::from(id))
    }

    #[test]
    fn test_item_table_footer_totals() {
        let a = item("a", "Laptop", 20.0);
        let b = item("b", "Mouse", 2.5);

        let out = render_item_table(&[&a, &b]);

        assert_eq!(out.lines().count(), 4);
        assert!(out.ends_with("2 item(s), 22.50 per month\n"));
    }

    #[test]
    fn test_within_brand_matches_exactly() {
        let a = item("a", "Laptop", 20.0);
        let mut b = item("b", "Monitor", 5.0);
        b.brand = "Globex".to_string();
        let mut c = item("c", "Mouse", 1.0);
        c.brand = "acme".to_string();

        let acme: Vec<&str> = within_brand(vec![&a, &b, &c], Some("Acme"))
            .into_iter()
            .map(|item| item.id.as_ref())
            .collect();
        assert_eq!(acme, vec!["a"]);

        assert_eq!(within_brand(vec![&a, &b, &c], None).len(), 3);
        assert_eq!(within_brand(vec![&a, &b, &c], Some("")).len(), 3);
        assert!(within_brand(vec![&a, &b], Some("Initech")).is_empty());
    }

    #[test]
    fn test_stock_table_rows() {
        let a = item("a", "Laptop", 20.0);
        let lines = vec![StockLine { item: &a, stock: 2 }];

        let out = render_stock_table(&lines);

        let row = out.lines().nth(1).unwrap();
        assert!(row.starts_with("Laptop"));
        assert!(row.ends_with("    2"));
    }
}

//! Single-item commands
//!
//! Usage:
//!   hwinv add --name <NAME> --brand <BRAND> --model <MODEL> --serial <SERIAL> --cost <COST> [--details <TEXT>]
//!   hwinv update <ID> [--name ..] [--brand ..] [--model ..] [--serial ..] [--cost ..] [--details <TEXT> | --clear-details]
//!   hwinv remove <ID>
//!   hwinv show <ID> [--json]

use anyhow::{Context, Result};
use clap::Args;
use hwinv_core::rules::parse_monthly_cost;
use hwinv_core::{ExError, HardwareDraft, HardwareId, HardwareItem};
use hwinv_store::{FsKv, HardwareRepository};

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub brand: String,

    #[arg(long)]
    pub model: String,

    #[arg(long = "serial")]
    pub serial_number: String,

    /// Monthly renting cost, e.g. 19.90
    #[arg(long, allow_hyphen_values = true)]
    pub cost: String,

    #[arg(long)]
    pub details: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long = "serial")]
    pub serial_number: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub cost: Option<String>,

    #[arg(long, conflicts_with = "clear_details")]
    pub details: Option<String>,

    /// Drop the existing details note
    #[arg(long)]
    pub clear_details: bool,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,

    /// Print the stored JSON form
    #[arg(long)]
    pub json: bool,
}

/// Execute add
pub async fn execute_add(repo: &mut HardwareRepository<FsKv>, args: AddArgs) -> Result<()> {
    let cost = parse_cost(&args.cost, "add_hardware")?;

    let mut draft = HardwareDraft::new(
        args.name,
        args.brand,
        args.model,
        args.serial_number,
        cost,
    );
    if let Some(details) = args.details {
        draft = draft.with_details(details);
    }

    let (item, write) = repo.add(draft)?;
    write
        .await
        .context("Item was added but the inventory could not be saved")?;

    println!("Added {}", item.id);
    Ok(())
}

/// Execute update
///
/// Unspecified fields keep their current values.
pub async fn execute_update(repo: &mut HardwareRepository<FsKv>, args: UpdateArgs) -> Result<()> {
    let id = HardwareId::from_string(args.id);
    let mut item = repo
        .inventory()
        .get_required(&id)
        .map_err(|e| ExError::from(e).with_op("update_hardware"))?
        .clone();

    if let Some(name) = args.name {
        item.name = name;
    }
    if let Some(brand) = args.brand {
        item.brand = brand;
    }
    if let Some(model) = args.model {
        item.model = model;
    }
    if let Some(serial_number) = args.serial_number {
        item.serial_number = serial_number;
    }
    if let Some(cost) = args.cost {
        item.monthly_renting_cost = parse_cost(&cost, "update_hardware")?;
    }
    if args.clear_details {
        item.details = None;
    } else if let Some(details) = args.details {
        item.details = Some(details);
    }

    let write = repo.update(item)?;
    write
        .await
        .context("Item was updated but the inventory could not be saved")?;

    println!("Updated {}", id);
    Ok(())
}

/// Execute remove
///
/// An unknown id is reported but is not an error.
pub async fn execute_remove(repo: &mut HardwareRepository<FsKv>, args: RemoveArgs) -> Result<()> {
    let id = HardwareId::from_string(args.id);
    let (removed, write) = repo.remove(&id)?;
    write
        .await
        .context("The inventory could not be saved")?;

    if removed {
        println!("Removed {}", id);
    } else {
        println!("No item with id {}", id);
    }
    Ok(())
}

/// Execute show
pub fn execute_show(repo: &HardwareRepository<FsKv>, args: ShowArgs) -> Result<()> {
    let id = HardwareId::from_string(args.id);
    let item = repo
        .inventory()
        .get_required(&id)
        .map_err(|e| ExError::from(e).with_op("show_hardware"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        print!("{}", render_detail(item, repo.stock_count(&item.name)));
    }
    Ok(())
}

fn parse_cost(text: &str, op: &str) -> Result<f64> {
    Ok(parse_monthly_cost(text).map_err(|e| ExError::from(e).with_op(op))?)
}

/// Render the detail view of one item
pub fn render_detail(item: &HardwareItem, stock: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Id:            {}\n", item.id));
    out.push_str(&format!("Name:          {}\n", item.name));
    out.push_str(&format!("Brand:         {}\n", item.brand));
    out.push_str(&format!("Model:         {}\n", item.model));
    out.push_str(&format!("Serial number: {}\n", item.serial_number));
    out.push_str(&format!("Monthly cost:  {:.2}\n", item.monthly_renting_cost));
    out.push_str(&format!("In stock:      {}\n", stock));
    if let Some(details) = &item.details {
        out.push_str(&format!("Details:       {}\n", details));
    }
    out
}

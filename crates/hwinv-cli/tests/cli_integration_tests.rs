//! CLI integration tests
//!
//! Each test runs the real `hwinv` binary in a scratch directory, one process
//! per command, so every assertion after the first command also covers
//! reloading the inventory from disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn hwinv(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hwinv"))
        .current_dir(dir)
        .env_remove("HWINV_DATA_DIR")
        .env("HWINV_LOG_PROFILE", "test")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Add an item and return its id
fn add(dir: &Path, name: &str, brand: &str, serial: &str, cost: &str) -> String {
    let output = hwinv(
        dir,
        &[
            "add", "--name", name, "--brand", brand, "--model", "M1", "--serial", serial,
            "--cost", cost,
        ],
    );
    assert!(output.status.success(), "add failed: {}", stderr(&output));
    stdout(&output)
        .trim()
        .strip_prefix("Added ")
        .expect("add should print the new id")
        .to_string()
}

fn list_json(dir: &Path, extra: &[&str]) -> serde_json::Value {
    let mut args = vec!["list", "--json"];
    args.extend_from_slice(extra);
    let output = hwinv(dir, &args);
    assert!(output.status.success(), "list failed: {}", stderr(&output));
    serde_json::from_str(&stdout(&output)).unwrap()
}

#[test]
fn test_cli_add_then_list() {
    // Given: an empty working directory
    let temp_dir = TempDir::new().unwrap();

    // When: two items are added in separate runs
    let id = add(temp_dir.path(), "Laptop", "Acme", "SN-1", "19.90");
    add(temp_dir.path(), "Monitor", "Globex", "SN-2", "7");

    // Then: a later run lists both, in insertion order
    let items = list_json(temp_dir.path(), &[]);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], id.as_str());
    assert_eq!(items[0]["monthlyRentingCost"], 19.9);
    assert_eq!(items[1]["name"], "Monitor");

    // And: the store lives under the default data directory
    assert!(temp_dir.path().join(".hwinv").join("hardware.json").exists());
}

#[test]
fn test_cli_duplicate_serial_rejected() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "Laptop", "Acme", "SN-1", "10");

    let output = hwinv(
        temp_dir.path(),
        &[
            "add", "--name", "Mouse", "--brand", "Acme", "--model", "M", "--serial", "sn-1",
            "--cost", "1",
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("ERR_DUPLICATE_SERIAL_NUMBER"));
    assert_eq!(list_json(temp_dir.path(), &[]).as_array().unwrap().len(), 1);
}

#[test]
fn test_cli_invalid_cost_rejected() {
    let temp_dir = TempDir::new().unwrap();

    for cost in ["abc", "-3", ""] {
        let output = hwinv(
            temp_dir.path(),
            &[
                "add", "--name", "Laptop", "--brand", "Acme", "--model", "X1", "--serial",
                "SN-1", "--cost", cost,
            ],
        );
        assert!(!output.status.success(), "cost {:?} accepted", cost);
        assert!(
            stderr(&output).contains("ERR_INVALID_MONTHLY_COST"),
            "cost {:?}: {}",
            cost,
            stderr(&output)
        );
    }
}

#[test]
fn test_cli_update_and_show() {
    let temp_dir = TempDir::new().unwrap();
    let id = add(temp_dir.path(), "Laptop", "Acme", "SN-1", "10");

    let output = hwinv(
        temp_dir.path(),
        &["update", &id, "--model", "X2", "--details", "New battery"],
    );
    assert!(output.status.success(), "update failed: {}", stderr(&output));

    let output = hwinv(temp_dir.path(), &["show", &id]);
    let shown = stdout(&output);
    assert!(shown.contains("Model:         X2"));
    assert!(shown.contains("Details:       New battery"));
    assert!(shown.contains("Serial number: SN-1"));
}

#[test]
fn test_cli_update_unknown_id_fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = hwinv(temp_dir.path(), &["update", "missing", "--name", "X"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("ERR_NOT_FOUND"));
}

#[test]
fn test_cli_remove() {
    let temp_dir = TempDir::new().unwrap();
    let id = add(temp_dir.path(), "Laptop", "Acme", "SN-1", "10");

    let output = hwinv(temp_dir.path(), &["remove", &id]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Removed"));

    let output = hwinv(temp_dir.path(), &["remove", &id]);
    assert!(output.status.success(), "Unknown id is not an error");
    assert!(stdout(&output).contains("No item with id"));

    assert!(list_json(temp_dir.path(), &[]).as_array().unwrap().is_empty());
}

#[test]
fn test_cli_brands_and_stock() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "Laptop", "Globex", "SN-1", "10");
    add(temp_dir.path(), "Laptop", "Acme", "SN-2", "10");
    add(temp_dir.path(), "Mouse", "Acme", "SN-3", "1");

    let brands = stdout(&hwinv(temp_dir.path(), &["brands"]));
    assert_eq!(brands.lines().collect::<Vec<_>>(), vec!["Acme", "Globex"]);

    let stock = stdout(&hwinv(temp_dir.path(), &["stock", "Laptop"]));
    assert_eq!(stock.trim(), "2");

    let lines = list_json(temp_dir.path(), &["--stock", "--brand", "Acme"]);
    let lines = lines.as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["item"]["name"], "Laptop");
    assert_eq!(lines[0]["stock"], 2);
}

#[test]
fn test_cli_list_filters() {
    let temp_dir = TempDir::new().unwrap();
    add(temp_dir.path(), "Laptop", "Acme", "SN-1", "10");
    add(temp_dir.path(), "Monitor", "Globex", "SN-2", "5");

    let by_query = list_json(temp_dir.path(), &["--query", "GLOB"]);
    assert_eq!(by_query.as_array().unwrap().len(), 1);

    let by_brand = list_json(temp_dir.path(), &["--brand", "Acme", "--query", "mon"]);
    assert_eq!(by_brand.as_array().unwrap().len(), 0);

    let table = stdout(&hwinv(temp_dir.path(), &["list"]));
    assert!(table.ends_with("2 item(s), 15.00 per month\n"));
}

#[test]
fn test_cli_config_file_sets_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("hwinv.toml"),
        "data_dir = \"inventory-data\"\n",
    )
    .unwrap();

    add(temp_dir.path(), "Laptop", "Acme", "SN-1", "10");

    assert!(temp_dir
        .path()
        .join("inventory-data")
        .join("hardware.json")
        .exists());
}

#[test]
fn test_cli_corrupt_store_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join(".hwinv");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("hardware.json"), "{broken").unwrap();

    let output = hwinv(temp_dir.path(), &["list", "--json"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("could not be loaded"));
    assert_eq!(stdout(&output).trim(), "[]");
}

pub mod hardware_ops;
pub mod inventory;

pub use hardware_ops::{add_hardware, remove_hardware, update_hardware};
pub use inventory::Inventory;

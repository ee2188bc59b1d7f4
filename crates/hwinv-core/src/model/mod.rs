pub mod hardware;

pub use hardware::{same_serial, HardwareDraft, HardwareItem};

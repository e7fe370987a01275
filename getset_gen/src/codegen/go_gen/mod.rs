pub mod file;
pub mod get;
pub mod set;

pub use file::{format_file, format_interface};
pub use get::{emit_getter, getter_signature};
pub use set::{emit_setter, setter_signature};

/* Pointer receiver shared by every accessor of one record */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receiver {
    pub var: String,
    pub type_name: String,
}

impl Receiver {
    /// `Config` gets the receiver `c *Config`.
    pub fn for_record(record_name: &str) -> Self {
        let var = record_name
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default();
        Self {
            var,
            type_name: record_name.to_string(),
        }
    }
}

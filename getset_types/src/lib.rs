//! Record Type Definitions
//!
//! Pure data structures describing the records found in one Go source
//! unit. No parsing, lookup or code generation lives here.

pub mod types;

pub use types::*;

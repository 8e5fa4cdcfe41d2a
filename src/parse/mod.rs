//! Keys-page parsing.
//!
//! This module provides the pure half of the lookup pipeline:
//! - Markup normalization into an ordered field table
//! - Board-configuration disambiguation for two-variant pages
//! - Typed record derivation
//!
//! Network I/O lives in [`crate::wiki`]; nothing here performs I/O.

mod board;
mod fields;
mod record;

// Re-export public API
pub use board::select_board_config;
pub use fields::{parse_fields, FieldTable};
pub use record::derive_record;

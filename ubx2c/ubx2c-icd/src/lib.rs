//! Table front end for the ubx2c ICD compiler.
//!
//! The input is a directory of CSV files extracted from the u-blox
//! interface description PDF: four small catalog tables plus one file per
//! message-layout page. This crate splits the cells, classifies each file
//! by its first line, and feeds either the catalog maps or the message
//! registry.

mod block;
mod catalog_parser;
mod classify;
mod layout;
mod table;

pub use block::{extract_block, BlockExtraction, BlockKind};
pub use catalog_parser::parse_catalog;
pub use classify::{classify, CatalogKind};
pub use layout::parse_message_table;
pub use table::{logical_lines, split_cells, RawTable};

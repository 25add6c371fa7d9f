//! C artifact backend for the ubx2c ICD compiler.
//!
//! [`build_record`] turns a finalized message's raw field rows into resolved
//! descriptors; [`render`](crate::render) produces the header and source
//! text; [`Emitter`] writes both under the output directory and maintains
//! the aggregated include manifest.

mod builder;
mod emit;
mod error;
pub mod render;

pub use builder::{build_record, MessageRecord};
pub use emit::{EmitOutcome, Emitter, MANIFEST_NAME};
pub use error::CodegenError;

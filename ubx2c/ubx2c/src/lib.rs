//! Compiler from u-blox ICD CSV tables to C message definitions.
//!
//! [`IcdCompiler`] ties the sub-crates together: the table front end
//! ([`icd`]), the shared message model ([`core`]), and the C backend
//! ([`codegen`]).

mod compiler;
mod error;
mod natsort;

pub use compiler::{GenerateSummary, IcdCompiler};
pub use error::CompileError;
pub use natsort::natural_cmp;
pub use ubx2c_codegen as codegen;
pub use ubx2c_core as core;
pub use ubx2c_icd as icd;

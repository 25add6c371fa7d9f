//! Core types for the ubx2c ICD compiler.
//!
//! This crate holds the parser-independent intermediate representation:
//! message identity ([`MessageKey`] / [`MsgType`]), the catalog maps, raw
//! field rows and finalized [`Message`] records, the accumulating
//! [`MessageRegistry`], and UBX type-token resolution.

mod catalog;
mod error;
mod key;
mod message;
mod msg_type;
mod registry;
mod type_resolver;

pub use catalog::{Catalogs, ClassEntry, MessageDirectory, MsgEntry};
pub use error::IcdError;
pub use key::{sanitize, MessageKey};
pub use message::{FieldDescriptor, FieldRow, Message};
pub use msg_type::MsgType;
pub use registry::MessageRegistry;
pub use type_resolver::{resolve_type_token, Primitive, ResolvedToken};

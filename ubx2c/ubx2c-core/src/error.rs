//! Error taxonomy for ICD table parsing and message building.

/// Errors raised while parsing ICD tables or building message records.
///
/// Unresolved type tokens, all-empty table columns, and malformed catalog
/// rows are *not* errors: the source tables carry decorative and comment
/// rows, and those are dropped silently.
#[derive(Debug, thiserror::Error)]
pub enum IcdError {
    /// No catalog mnemonic is contained in a message file's heading line.
    #[error("no known message name found in heading '{heading}'")]
    BadMessageName { heading: String },

    /// Two distinct catalog names of equal maximal length both match the
    /// heading, so the file cannot be attributed to either.
    #[error("ambiguous message heading: both '{first}' and '{second}' match")]
    AmbiguousMessageName { first: String, second: String },

    /// A message file carries no recognizable `Type` row, or its
    /// `(name, type)` pair has no catalog directory entry.
    #[error("bad type for message '{name}': {detail}")]
    BadTypeName { name: String, detail: String },

    /// A finalized message has a repeated block without a repeat-count
    /// variable, or a repeat-count variable without a repeated block.
    #[error("bad repeat block in message '{key}': {detail}")]
    BadRepeatBlock { key: String, detail: String },
}

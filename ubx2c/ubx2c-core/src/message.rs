use crate::{catalog::MsgEntry, error::IcdError, key::MessageKey, type_resolver::Primitive};

/// One normalized data row of a message's byte-offset sub-table.
///
/// `type_token` holds the content of the recovered format column; it may be
/// empty or unresolvable, in which case the row is dropped at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub name: String,
    pub type_token: String,
    pub comment: String,
}

impl FieldRow {
    pub fn new(
        name: impl Into<String>,
        type_token: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_token: type_token.into(),
            comment: comment.into(),
        }
    }
}

/// A resolved field ready for layout emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub primitive: Primitive,
    /// Sanitized to alphanumerics, usable as a C identifier.
    pub name: String,
    /// Always >= 1; values above 1 render as a fixed-size array.
    pub array_len: usize,
}

/// One protocol message accumulated from one or more layout files.
#[derive(Debug, Clone)]
pub struct Message {
    pub key: MessageKey,
    pub entry: MsgEntry,
    pub base_fields: Vec<FieldRow>,
    pub repeated_block: Vec<FieldRow>,
    /// Name of the field giving the repeat count; empty when the message
    /// has no repeated block.
    pub repeat_count_var: String,
    pub optional_block: Vec<FieldRow>,
}

impl Message {
    pub fn new(key: MessageKey, entry: MsgEntry) -> Self {
        Self {
            key,
            entry,
            base_fields: Vec::new(),
            repeated_block: Vec::new(),
            repeat_count_var: String::new(),
            optional_block: Vec::new(),
        }
    }

    /// Record the repeat-count variable captured by a block-start marker.
    pub fn set_repeat_count_var(&mut self, var: impl Into<String>) {
        self.repeat_count_var = var.into();
    }

    /// Repeated-block presence and the repeat-count variable must agree.
    pub fn check_repeat_sanity(&self) -> Result<(), IcdError> {
        match (
            self.repeated_block.is_empty(),
            self.repeat_count_var.is_empty(),
        ) {
            (false, true) => Err(IcdError::BadRepeatBlock {
                key: self.key.to_string(),
                detail: "repeated block present but no repeat-count variable".to_string(),
            }),
            (true, false) => Err(IcdError::BadRepeatBlock {
                key: self.key.to_string(),
                detail: format!(
                    "repeat-count variable '{}' without a repeated block",
                    self.repeat_count_var
                ),
            }),
            _ => Ok(()),
        }
    }
}

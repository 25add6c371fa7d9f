//! Conversion of raw field rows into resolved descriptors.

use ubx2c_core::{
    resolve_type_token, sanitize, FieldDescriptor, FieldRow, IcdError, Message,
};

/// The three resolved descriptor lists of one message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub fields: Vec<FieldDescriptor>,
    pub repeated_fields: Vec<FieldDescriptor>,
    pub optional_fields: Vec<FieldDescriptor>,
}

/// Build the descriptor lists for a finalized message.
///
/// Field names are sanitized to alphanumerics before anything else, since
/// the output identifiers must be clean C names. Rows whose type token does
/// not resolve, or whose sanitized name is empty, are dropped silently; the
/// source tables are full of decorative rows. The repeat/optional sanity
/// invariant is enforced here, failing the build of this one message.
pub fn build_record(message: &Message) -> Result<MessageRecord, IcdError> {
    message.check_repeat_sanity()?;
    Ok(MessageRecord {
        fields: resolve_rows(&message.base_fields),
        repeated_fields: resolve_rows(&message.repeated_block),
        optional_fields: resolve_rows(&message.optional_block),
    })
}

fn resolve_rows(rows: &[FieldRow]) -> Vec<FieldDescriptor> {
    rows.iter()
        .filter_map(|row| {
            let name = sanitize(&row.name);
            if name.is_empty() {
                return None;
            }
            let token = resolve_type_token(&row.type_token)?;
            Some(FieldDescriptor {
                primitive: token.primitive,
                name,
                array_len: token.array_len,
            })
        })
        .collect()
}

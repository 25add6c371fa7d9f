use std::fmt;

use crate::msg_type::MsgType;

/// Strip everything but ASCII alphanumerics.
///
/// Catalog mnemonics (`NAV-POSLLH`), type strings, and field names all go
/// through this before they become map keys or generated identifiers.
pub fn sanitize(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Unique identity of a message within the registry: the sanitized catalog
/// mnemonic plus the variant type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub name: String,
    pub msg_type: MsgType,
}

impl MessageKey {
    pub fn new(name: impl Into<String>, msg_type: MsgType) -> Self {
        Self {
            name: name.into(),
            msg_type,
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.msg_type)
    }
}

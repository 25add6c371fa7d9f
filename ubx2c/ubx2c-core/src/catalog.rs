//! Catalog maps populated from the ICD's lookup tables.

use std::collections::BTreeMap;

use crate::{
    error::IcdError,
    key::{sanitize, MessageKey},
    msg_type::MsgType,
};

/// One row of the message-class directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntry {
    pub class_id: u8,
    pub description: String,
}

/// One row of the message-ID directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgEntry {
    pub page: String,
    pub class_id: u8,
    pub msg_id: u8,
    /// Kept as the raw ICD string: lengths include formulas like
    /// `8 + 12*numCh`, and the exact string `"0"` marks a message with no
    /// fixed payload to generate.
    pub length: String,
    pub description: String,
}

/// Ordered map from message key to its directory entry, plus the
/// owning-name recovery used to attribute message-layout files.
#[derive(Debug, Clone, Default)]
pub struct MessageDirectory {
    entries: BTreeMap<MessageKey, MsgEntry>,
}

impl MessageDirectory {
    /// Insert an entry; an existing entry under the same key is replaced.
    pub fn insert(&mut self, key: MessageKey, entry: MsgEntry) {
        self.entries.insert(key, entry);
    }

    pub fn get(&self, key: &MessageKey) -> Option<&MsgEntry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MessageKey, &MsgEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recover the message name owning a layout file from its heading line.
    ///
    /// The heading is sanitized to alphanumerics and every known name is
    /// tested for containment; the longest contained name wins. Two distinct
    /// names of equal maximal length are ambiguous and rejected rather than
    /// resolved by iteration order.
    pub fn find_owning_name(&self, heading: &str) -> Result<&str, IcdError> {
        let haystack = sanitize(heading);
        let mut best: Option<&str> = None;
        let mut tied: Option<&str> = None;
        for key in self.entries.keys() {
            let name = key.name.as_str();
            if !haystack.contains(name) {
                continue;
            }
            match best {
                Some(b) if name == b => {}
                Some(b) if name.len() > b.len() => {
                    best = Some(name);
                    tied = None;
                }
                Some(b) if name.len() == b.len() => tied = Some(name),
                Some(_) => {}
                None => best = Some(name),
            }
        }
        if let (Some(b), Some(t)) = (best, tied) {
            return Err(IcdError::AmbiguousMessageName {
                first: b.to_string(),
                second: t.to_string(),
            });
        }
        best.ok_or_else(|| IcdError::BadMessageName {
            heading: heading.trim().to_string(),
        })
    }
}

/// The three read-only lookup maps, populated once from the catalog files.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    /// GNSS system name to numeric gnssId.
    pub gnss: BTreeMap<String, u8>,
    /// Message class name to class byte and description.
    pub classes: BTreeMap<String, ClassEntry>,
    /// Message-ID directory keyed by `(mnemonic, type)`.
    pub messages: MessageDirectory,
}

impl Catalogs {
    /// Resolve a sanitized `(name, type)` pair against the directory.
    pub fn resolve(&self, name: &str, msg_type: MsgType) -> Option<(MessageKey, &MsgEntry)> {
        let key = MessageKey::new(name, msg_type);
        let entry = self.messages.get(&key)?;
        Some((key, entry))
    }
}

//! Cross-file message accumulation.

use std::collections::BTreeMap;

use crate::{catalog::MsgEntry, key::MessageKey, message::Message};

/// Owns every [`Message`] across the whole input pass.
///
/// At most one message *accumulates* at a time; starting a different key
/// finalizes the previous one. Layout tables for one message span several
/// files, so consecutive files resolving to the same key append to the
/// accumulating message instead of replacing it.
#[derive(Debug, Default)]
pub struct MessageRegistry {
    current: Option<Message>,
    finalized: BTreeMap<MessageKey, Message>,
    /// Times each base key has been re-encountered after finalization.
    occurrences: BTreeMap<MessageKey, usize>,
}

impl MessageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the accumulating message for `key`, creating it as needed.
    ///
    /// Continuation: if `key` matches the currently accumulating message,
    /// that message is returned as-is. Otherwise the current message is
    /// finalized first; if `key` was itself already finalized, a new variant
    /// key `name<n>` is allocated and its message starts as a deep copy of
    /// the finalized one (the ICD lists some mnemonics several times with
    /// the same name/type pair).
    pub fn get_or_create(&mut self, key: MessageKey, entry: &MsgEntry) -> &mut Message {
        match self.current.take() {
            Some(current) if current.key == key => self.current.insert(current),
            previous => {
                if let Some(message) = previous {
                    self.finalize(message);
                }
                let message = match self.finalized.get(&key) {
                    Some(base) => {
                        let n = self.occurrences.entry(key.clone()).or_insert(0);
                        *n += 1;
                        let mut copy = base.clone();
                        copy.key = MessageKey::new(format!("{}{}", key.name, n), key.msg_type);
                        copy
                    }
                    None => Message::new(key, entry.clone()),
                };
                self.current.insert(message)
            }
        }
    }

    /// Move the accumulating message, if any, into the finalized map.
    ///
    /// Idempotent: a second call without an intervening `get_or_create` is a
    /// no-op, and an already-finalized key is never overwritten.
    pub fn finalize_current(&mut self) {
        if let Some(message) = self.current.take() {
            self.finalize(message);
        }
    }

    fn finalize(&mut self, message: Message) {
        self.finalized.entry(message.key.clone()).or_insert(message);
    }

    /// The currently accumulating message, if any.
    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    pub fn get(&self, key: &MessageKey) -> Option<&Message> {
        self.finalized.get(key)
    }

    /// Finalized messages in key order.
    pub fn finalized(&self) -> impl Iterator<Item = &Message> {
        self.finalized.values()
    }

    pub fn len(&self) -> usize {
        self.finalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finalized.is_empty()
    }
}

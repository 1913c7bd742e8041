use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Name of the error bag used when a rejection does not pick one.
pub const DEFAULT_ERROR_BAG: &str = "default";

/// User-facing validation messages keyed by field and grouped under a named error bag.
///
/// Presentation layers render the messages against the bag they belong to, so one
/// screen can show several independent forms without mixing their errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationMessages {
    error_bag: String,
    messages: BTreeMap<String, Vec<String>>,
}

impl ValidationMessages {
    /// Creates an empty message set in the default error bag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            error_bag: DEFAULT_ERROR_BAG.to_owned(),
            messages: BTreeMap::new(),
        }
    }

    /// Creates a message set holding one message for one field.
    #[must_use]
    pub fn with_message(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut messages = Self::new();
        messages.add(field, message);
        messages
    }

    /// Moves the messages into the named error bag.
    #[must_use]
    pub fn error_bag(mut self, error_bag: impl Into<String>) -> Self {
        self.error_bag = error_bag.into();
        self
    }

    /// Appends a message for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.messages
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Returns the error bag name.
    #[must_use]
    pub fn bag(&self) -> &str {
        self.error_bag.as_str()
    }

    /// Returns all messages keyed by field.
    #[must_use]
    pub fn messages(&self) -> &BTreeMap<String, Vec<String>> {
        &self.messages
    }

    /// Returns the first message recorded for a field.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages
            .get(field)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns whether a field has at least one message.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.messages.contains_key(field)
    }

    /// Returns whether no message has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops every message and returns to the default bag.
    pub fn clear(&mut self) {
        self.error_bag = DEFAULT_ERROR_BAG.to_owned();
        self.messages.clear();
    }
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ValidationMessages {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .messages
            .iter()
            .flat_map(|(field, values)| values.iter().map(move |value| format!("{field}: {value}")))
            .collect::<Vec<_>>()
            .join("; ");

        write!(formatter, "[{}] {rendered}", self.error_bag)
    }
}

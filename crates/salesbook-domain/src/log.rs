//! Activity log entries describing completed ledger mutations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{amount::format_amount, Amount, EntryKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Immutable, human-readable record of one mutation.
///
/// Positions rendered as `#N` are 1-based and reflect the ledger at the time
/// of the mutation; later deletions do not renumber existing entries.
pub struct LogEntry(String);

impl LogEntry {
    pub fn added(kind: EntryKind, amount: Amount) -> Self {
        Self(format!("Added {}: {}", kind, format_amount(amount)))
    }

    pub fn edited(kind: EntryKind, amount: Amount, index: usize) -> Self {
        Self(format!(
            "Edited {}: {} at #{}",
            kind,
            format_amount(amount),
            index + 1
        ))
    }

    pub fn deleted(kind: EntryKind, removed: Amount, index: usize) -> Self {
        Self(format!(
            "Deleted {}: {} at #{}",
            kind,
            format_amount(removed),
            index + 1
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LogEntry {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LogEntry {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<&str> for LogEntry {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_each_mutation() {
        assert_eq!(LogEntry::added(EntryKind::Sale, 50.0), "Added Sale: ₱50");
        assert_eq!(
            LogEntry::edited(EntryKind::Expense, 20.0, 2),
            "Edited Expense: ₱20 at #3"
        );
        assert_eq!(
            LogEntry::deleted(EntryKind::Sale, 10.0, 1),
            "Deleted Sale: ₱10 at #2"
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        let entry = LogEntry::added(EntryKind::Expense, 40.0);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, "\"Added Expense: ₱40\"");
    }
}

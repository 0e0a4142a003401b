use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Selects which ledger an operation targets.
pub enum EntryKind {
    Sale,
    Expense,
}

impl EntryKind {
    /// Singular noun used in log text ("Sale", "Expense").
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Sale => "Sale",
            EntryKind::Expense => "Expense",
        }
    }

    /// Plural heading used by listings ("Sales", "Expenses").
    pub fn plural(self) -> &'static str {
        match self {
            EntryKind::Sale => "Sales",
            EntryKind::Expense => "Expenses",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

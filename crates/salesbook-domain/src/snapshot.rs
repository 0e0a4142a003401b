//! The durable unit of state and the totals derived from it.

use serde::{Deserialize, Serialize};

use crate::{Amount, EntryKind, LogEntry};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Sales, expenses and the activity log, persisted together.
pub struct LedgerSnapshot {
    pub sales: Vec<Amount>,
    pub expenses: Vec<Amount>,
    pub logs: Vec<LogEntry>,
}

impl LedgerSnapshot {
    pub fn entries(&self, kind: EntryKind) -> &[Amount] {
        match kind {
            EntryKind::Sale => &self.sales,
            EntryKind::Expense => &self.expenses,
        }
    }

    pub fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Amount> {
        match kind {
            EntryKind::Sale => &mut self.sales,
            EntryKind::Expense => &mut self.expenses,
        }
    }

    pub fn totals(&self) -> Totals {
        Totals::from_parts(self.sales.iter().sum(), self.expenses.iter().sum())
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty() && self.expenses.is_empty() && self.logs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
/// Aggregated sums over both ledgers.
pub struct Totals {
    pub sales: Amount,
    pub expenses: Amount,
    pub balance: Amount,
}

impl Totals {
    pub fn from_parts(sales: Amount, expenses: Amount) -> Self {
        Self {
            sales,
            expenses,
            balance: sales - expenses,
        }
    }
}

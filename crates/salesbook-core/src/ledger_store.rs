//! The single source of truth for sales, expenses and the activity log.
//!
//! Every successful mutation appends exactly one [`LogEntry`] and marks the
//! store dirty; [`LedgerStore::save`] writes the whole snapshot through the
//! injected [`KeyValueStore`].

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use salesbook_domain::{
    validate_amount, Amount, EntryKind, LedgerSnapshot, LogEntry, Totals,
};

use crate::{
    storage::{KeyValueStore, StorageError, EXPENSES_SLOT, LOGS_SLOT, SALES_SLOT},
    CoreError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where the in-memory state came from.
pub enum LoadState {
    /// `load` has not completed; collections hold their empty defaults.
    NotLoaded,
    /// Present slots were read and applied.
    Loaded,
    /// Stored data could not be decoded; the store was reset to empty.
    Corrupt,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A ledger mutation as issued by a view.
pub enum Mutation {
    Add {
        kind: EntryKind,
        amount: Amount,
    },
    Edit {
        kind: EntryKind,
        index: usize,
        amount: Amount,
    },
    Delete {
        kind: EntryKind,
        index: usize,
    },
}

#[derive(Debug)]
/// Outcome of the persistence pass that follows [`LedgerStore::apply`].
pub enum Persistence {
    Saved,
    /// The mutation is kept in memory but did not reach storage.
    Unsaved(CoreError),
}

impl Persistence {
    pub fn is_saved(&self) -> bool {
        matches!(self, Persistence::Saved)
    }
}

pub struct LedgerStore<S> {
    snapshot: LedgerSnapshot,
    /// What storage holds as of the last successful load or save.
    persisted: LedgerSnapshot,
    storage: Arc<S>,
    state: LoadState,
    dirty: bool,
}

impl<S: KeyValueStore> LedgerStore<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            snapshot: LedgerSnapshot::default(),
            persisted: LedgerSnapshot::default(),
            storage,
            state: LoadState::NotLoaded,
            dirty: false,
        }
    }

    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.snapshot
    }

    pub fn sales(&self) -> &[Amount] {
        &self.snapshot.sales
    }

    pub fn expenses(&self) -> &[Amount] {
        &self.snapshot.expenses
    }

    pub fn entries(&self, kind: EntryKind) -> &[Amount] {
        self.snapshot.entries(kind)
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.snapshot.logs
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// True when the in-memory state has changes not yet written by `save`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn totals(&self) -> Totals {
        self.snapshot.totals()
    }

    pub fn add(&mut self, kind: EntryKind, amount: Amount) -> Result<(), CoreError> {
        let amount = validate_amount(amount)?;
        self.snapshot.entries_mut(kind).push(amount);
        self.record(LogEntry::added(kind, amount));
        Ok(())
    }

    pub fn edit(&mut self, kind: EntryKind, index: usize, amount: Amount) -> Result<(), CoreError> {
        self.check_index(kind, index)?;
        let amount = validate_amount(amount)?;
        self.snapshot.entries_mut(kind)[index] = amount;
        self.record(LogEntry::edited(kind, amount, index));
        Ok(())
    }

    /// Removes an entry and returns the amount it held.
    pub fn delete(&mut self, kind: EntryKind, index: usize) -> Result<Amount, CoreError> {
        self.check_index(kind, index)?;
        let removed = self.snapshot.entries_mut(kind).remove(index);
        self.record(LogEntry::deleted(kind, removed, index));
        Ok(removed)
    }

    pub fn add_sale(&mut self, amount: Amount) -> Result<(), CoreError> {
        self.add(EntryKind::Sale, amount)
    }

    pub fn edit_sale(&mut self, index: usize, amount: Amount) -> Result<(), CoreError> {
        self.edit(EntryKind::Sale, index, amount)
    }

    pub fn delete_sale(&mut self, index: usize) -> Result<Amount, CoreError> {
        self.delete(EntryKind::Sale, index)
    }

    pub fn add_expense(&mut self, amount: Amount) -> Result<(), CoreError> {
        self.add(EntryKind::Expense, amount)
    }

    pub fn edit_expense(&mut self, index: usize, amount: Amount) -> Result<(), CoreError> {
        self.edit(EntryKind::Expense, index, amount)
    }

    pub fn delete_expense(&mut self, index: usize) -> Result<Amount, CoreError> {
        self.delete(EntryKind::Expense, index)
    }

    /// Applies a mutation to the in-memory state only.
    pub fn apply_mutation(&mut self, mutation: Mutation) -> Result<(), CoreError> {
        match mutation {
            Mutation::Add { kind, amount } => self.add(kind, amount),
            Mutation::Edit {
                kind,
                index,
                amount,
            } => self.edit(kind, index, amount),
            Mutation::Delete { kind, index } => self.delete(kind, index).map(|_| ()),
        }
    }

    /// Mutates, then persists the resulting snapshot.
    ///
    /// Rejected mutations return `Err` and touch nothing. A failed save is
    /// reported through [`Persistence::Unsaved`]: the change stays in memory
    /// and the store stays dirty for a later [`flush`](Self::flush).
    pub async fn apply(&mut self, mutation: Mutation) -> Result<Persistence, CoreError> {
        self.apply_mutation(mutation)?;
        match self.save().await {
            Ok(()) => Ok(Persistence::Saved),
            Err(err) => Ok(Persistence::Unsaved(err)),
        }
    }

    /// Reads all slots and applies the ones that are present.
    ///
    /// Missing slots leave the corresponding collection untouched. If any
    /// present slot fails to decode, nothing is applied: the store resets to
    /// an empty snapshot in [`LoadState::Corrupt`] and the error is returned.
    pub async fn load(&mut self) -> Result<LoadState, CoreError> {
        let raw_sales = self.storage.get(SALES_SLOT).await?;
        let raw_expenses = self.storage.get(EXPENSES_SLOT).await?;
        let raw_logs = self.storage.get(LOGS_SLOT).await?;

        let decoded = decode::<Vec<Amount>>(SALES_SLOT, raw_sales).and_then(|sales| {
            let expenses = decode::<Vec<Amount>>(EXPENSES_SLOT, raw_expenses)?;
            let logs = decode::<Vec<LogEntry>>(LOGS_SLOT, raw_logs)?;
            Ok((sales, expenses, logs))
        });

        let (sales, expenses, logs) = match decoded {
            Ok(slots) => slots,
            Err(err) => {
                warn!(error = %err, "stored ledger is corrupt, starting from an empty ledger");
                self.snapshot = LedgerSnapshot::default();
                self.persisted = LedgerSnapshot::default();
                self.state = LoadState::Corrupt;
                self.dirty = false;
                return Err(err);
            }
        };

        let missing_any = sales.is_none() || expenses.is_none() || logs.is_none();
        self.persisted = LedgerSnapshot {
            sales: sales.clone().unwrap_or_default(),
            expenses: expenses.clone().unwrap_or_default(),
            logs: logs.clone().unwrap_or_default(),
        };
        if let Some(sales) = sales {
            self.snapshot.sales = sales;
        }
        if let Some(expenses) = expenses {
            self.snapshot.expenses = expenses;
        }
        if let Some(logs) = logs {
            self.snapshot.logs = logs;
        }
        self.dirty = self.dirty && missing_any;
        self.state = LoadState::Loaded;
        info!(
            sales = self.snapshot.sales.len(),
            expenses = self.snapshot.expenses.len(),
            logs = self.snapshot.logs.len(),
            "ledger loaded"
        );
        Ok(self.state)
    }

    /// Writes the three collections. On failure the store stays dirty.
    ///
    /// Slots are written one by one. If a write fails, the slots already
    /// written are restored from the last persisted snapshot so storage never
    /// mixes two snapshots.
    pub async fn save(&mut self) -> Result<(), CoreError> {
        let payloads = slot_payloads(&self.snapshot)?;
        for (written, (slot, bytes)) in payloads.into_iter().enumerate() {
            if let Err(err) = self.storage.set(slot, bytes).await {
                warn!(slot, error = %err, "failed to persist ledger");
                self.roll_back(written).await;
                return Err(err.into());
            }
        }
        self.persisted = self.snapshot.clone();
        self.dirty = false;
        debug!(logs = self.snapshot.logs.len(), "ledger saved");
        Ok(())
    }

    /// Saves only when there are unsaved changes.
    pub async fn flush(&mut self) -> Result<bool, CoreError> {
        if !self.dirty {
            return Ok(false);
        }
        self.save().await?;
        Ok(true)
    }

    fn check_index(&self, kind: EntryKind, index: usize) -> Result<(), CoreError> {
        let len = self.snapshot.entries(kind).len();
        if index >= len {
            return Err(CoreError::IndexOutOfRange { kind, index, len });
        }
        Ok(())
    }

    /// Rewrites the first `written` slots with their last persisted contents.
    async fn roll_back(&self, written: usize) {
        if written == 0 {
            return;
        }
        let previous = match slot_payloads(&self.persisted) {
            Ok(previous) => previous,
            Err(err) => {
                warn!(error = %err, "cannot encode previous ledger, stored slots may disagree");
                return;
            }
        };
        for (slot, bytes) in previous.into_iter().take(written) {
            match self.storage.set(slot, bytes).await {
                Ok(()) => debug!(slot, "restored slot after failed save"),
                Err(err) => {
                    warn!(slot, error = %err, "failed to restore slot, stored slots may disagree")
                }
            }
        }
    }

    fn record(&mut self, entry: LogEntry) {
        debug!(entry = %entry, "ledger mutated");
        self.snapshot.logs.push(entry);
        self.dirty = true;
    }
}

fn decode<T: DeserializeOwned>(slot: &str, raw: Option<Vec<u8>>) -> Result<Option<T>, CoreError> {
    raw.map(|bytes| {
        serde_json::from_slice(&bytes).map_err(|err| CoreError::PersistenceCorrupt {
            slot: slot.to_string(),
            message: err.to_string(),
        })
    })
    .transpose()
}

fn slot_payloads(snapshot: &LedgerSnapshot) -> Result<[(&'static str, Vec<u8>); 3], CoreError> {
    Ok([
        (SALES_SLOT, encode(&snapshot.sales)?),
        (EXPENSES_SLOT, encode(&snapshot.expenses)?),
        (LOGS_SLOT, encode(&snapshot.logs)?),
    ])
}

fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CoreError> {
    serde_json::to_vec(value)
        .map_err(|err| CoreError::PersistenceUnavailable(StorageError::Backend(err.to_string())))
}

//! Read-only models consumed by the dashboard and the log viewer.

use salesbook_domain::{Amount, LedgerSnapshot, LogEntry, Totals};

/// One slice of the balance distribution chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionSlice {
    pub label: &'static str,
    pub value: Amount,
}

/// Totals plus index-aligned chart series for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub totals: Totals,
    pub labels: Vec<String>,
    pub sales_series: Vec<Amount>,
    pub expenses_series: Vec<Amount>,
    pub balance_series: Vec<Amount>,
    pub distribution: [DistributionSlice; 3],
}

impl DashboardView {
    /// Builds chart series padded with zero up to the longer ledger.
    ///
    /// With both ledgers empty a single `"0"` label keeps charts renderable.
    pub fn from_snapshot(snapshot: &LedgerSnapshot) -> Self {
        let totals = snapshot.totals();
        let points = snapshot.sales.len().max(snapshot.expenses.len()).max(1);
        let labels = if snapshot.sales.is_empty() && snapshot.expenses.is_empty() {
            vec!["0".to_string()]
        } else {
            (1..=points).map(|position| position.to_string()).collect()
        };

        let sales_series = padded(&snapshot.sales, points);
        let expenses_series = padded(&snapshot.expenses, points);
        let balance_series = sales_series
            .iter()
            .zip(&expenses_series)
            .map(|(sale, expense)| sale - expense)
            .collect();

        Self {
            totals,
            labels,
            sales_series,
            expenses_series,
            balance_series,
            distribution: [
                DistributionSlice {
                    label: "Sales",
                    value: totals.sales,
                },
                DistributionSlice {
                    label: "Expenses",
                    value: totals.expenses,
                },
                DistributionSlice {
                    label: "Balance",
                    value: totals.balance,
                },
            ],
        }
    }
}

fn padded(values: &[Amount], points: usize) -> Vec<Amount> {
    (0..points)
        .map(|index| values.get(index).copied().unwrap_or(0.0))
        .collect()
}

/// Activity log presented newest-first.
#[derive(Debug, Clone, Copy)]
pub struct LogView<'a> {
    entries: &'a [LogEntry],
}

impl<'a> LogView<'a> {
    pub fn new(entries: &'a [LogEntry]) -> Self {
        Self { entries }
    }

    pub fn from_snapshot(snapshot: &'a LedgerSnapshot) -> Self {
        Self::new(&snapshot.logs)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn newest_first(&self) -> impl Iterator<Item = &'a LogEntry> + 'a {
        let entries = self.entries;
        entries.iter().rev()
    }
}

use std::sync::Arc;

use dialoguer::Confirm;
use tracing::warn;

use salesbook_config::{Config, ConfigManager};
use salesbook_core::{
    CoreError, DashboardView, LedgerStore, LogView, Mutation, Persistence,
};
use salesbook_domain::{format_amount, parse_amount, EntryKind};
use salesbook_storage_json::JsonFileStore;

use super::{output, Cli, CliError, Command, LedgerAction};

type Store = LedgerStore<JsonFileStore>;

/// Executes one CLI invocation against the configured data directory.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let manager = ConfigManager::new(
        cli.config
            .clone()
            .unwrap_or_else(Config::default_config_path),
    );
    let config = manager.load()?;
    if cli.no_color || !config.ui_color_enabled {
        colored::control::set_override(false);
    }

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.resolve_data_dir());
    let storage = Arc::new(JsonFileStore::new(data_dir)?);
    let mut store = LedgerStore::new(storage);
    let load_error = store.load().await.err();
    if let Some(err) = &load_error {
        output::warning(format!("{err}; showing an empty ledger"));
    }

    match cli.command {
        Command::Dashboard => show_dashboard(&store),
        Command::Logs => show_logs(&store),
        Command::Sales(args) => {
            let action = args.action.unwrap_or(LedgerAction::List);
            edit_ledger(&mut store, &config, EntryKind::Sale, action, load_error).await?
        }
        Command::Expenses(args) => {
            let action = args.action.unwrap_or(LedgerAction::List);
            edit_ledger(&mut store, &config, EntryKind::Expense, action, load_error).await?
        }
    }
    Ok(())
}

async fn edit_ledger(
    store: &mut Store,
    config: &Config,
    kind: EntryKind,
    action: LedgerAction,
    load_error: Option<CoreError>,
) -> Result<(), CliError> {
    let mutation = match action {
        LedgerAction::List => {
            list_entries(store, kind);
            return Ok(());
        }
        LedgerAction::Add { amount } => Mutation::Add {
            kind,
            amount: parse_amount(&amount)?,
        },
        LedgerAction::Edit { position, amount } => Mutation::Edit {
            kind,
            index: to_index(position)?,
            amount: parse_amount(&amount)?,
        },
        LedgerAction::Delete { position, yes } => {
            let index = to_index(position)?;
            let needs_prompt = config.confirm_deletes && !yes;
            if let Some(current) = store.entries(kind).get(index) {
                if needs_prompt && !confirm_delete(kind, *current)? {
                    output::info("Cancelled.");
                    return Ok(());
                }
            }
            Mutation::Delete { kind, index }
        }
    };

    // Saving over data we failed to read would destroy it.
    if let Some(err) = load_error {
        return Err(CliError::LedgerUnreadable(err));
    }

    let persistence = store.apply(mutation).await?;
    if let Some(entry) = store.logs().last() {
        output::success(entry);
    }
    match persistence {
        Persistence::Saved => Ok(()),
        Persistence::Unsaved(err) => {
            warn!(error = %err, "mutation kept in memory only");
            Err(CliError::Unsaved(err))
        }
    }
}

fn to_index(position: usize) -> Result<usize, CliError> {
    position.checked_sub(1).ok_or(CliError::InvalidPosition)
}

fn confirm_delete(kind: EntryKind, amount: f64) -> Result<bool, CliError> {
    let answer = Confirm::new()
        .with_prompt(format!(
            "Delete {} {}?",
            kind.label().to_lowercase(),
            format_amount(amount)
        ))
        .default(false)
        .interact()?;
    Ok(answer)
}

fn list_entries(store: &Store, kind: EntryKind) {
    output::section(kind.plural());
    let entries = store.entries(kind);
    if entries.is_empty() {
        output::info(format!("No {} recorded.", kind.plural().to_lowercase()));
        return;
    }
    for (index, amount) in entries.iter().enumerate() {
        output::info(format!("#{:<4} {}", index + 1, format_amount(*amount)));
    }
    let total: f64 = entries.iter().sum();
    output::info(format!("Total: {}", format_amount(total)));
}

fn show_dashboard(store: &Store) {
    let view = DashboardView::from_snapshot(store.snapshot());

    output::section("Dashboard");
    output::info(format!(
        "Total Balance: {}",
        output::signed_amount(view.totals.balance)
    ));
    output::info(format!(
        "Sales: {}    Expenses: {}",
        format_amount(view.totals.sales),
        format_amount(view.totals.expenses)
    ));

    output::section("Trend");
    output::info(format!(
        "{:<6} {:>12} {:>12} {:>12}",
        "#", "Sales", "Expenses", "Balance"
    ));
    for (position, label) in view.labels.iter().enumerate() {
        output::info(format!(
            "{:<6} {:>12} {:>12} {:>12}",
            label,
            format_amount(view.sales_series[position]),
            format_amount(view.expenses_series[position]),
            format_amount(view.balance_series[position]),
        ));
    }

    output::section("Balance Distribution");
    for slice in &view.distribution {
        output::info(format!("{:<10} {}", slice.label, format_amount(slice.value)));
    }
}

fn show_logs(store: &Store) {
    let view = LogView::from_snapshot(store.snapshot());
    output::section("Logs");
    if view.is_empty() {
        output::info("No activity yet.");
        return;
    }
    for entry in view.newest_first() {
        output::info(entry);
    }
}

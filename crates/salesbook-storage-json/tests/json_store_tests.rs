use std::{fs, sync::Arc};

use salesbook_core::{KeyValueStore, LedgerStore, LoadState};
use salesbook_storage_json::JsonFileStore;
use tempfile::tempdir;

#[tokio::test]
async fn missing_slot_reads_as_none() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().join("data")).expect("create store");

    let value = store.get("sales").await.expect("get");

    assert!(value.is_none());
}

#[tokio::test]
async fn set_then_get_returns_the_same_bytes() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");

    store
        .set("expenses", b"[1.5,2]".to_vec())
        .await
        .expect("set");

    let value = store.get("expenses").await.expect("get");
    assert_eq!(value.as_deref(), Some(&b"[1.5,2]"[..]));
    let path = store.slot_path("expenses").unwrap();
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn failed_write_preserves_previous_contents() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    store.set("sales", b"[10]".to_vec()).await.expect("initial set");
    let path = store.slot_path("sales").unwrap();

    // A directory in place of the temp file makes File::create fail.
    fs::create_dir_all(path.with_extension("json.tmp")).unwrap();

    let result = store.set("sales", b"[10,20]".to_vec()).await;

    assert!(result.is_err(), "write over a blocked temp path must fail");
    assert_eq!(fs::read(&path).unwrap(), b"[10]");
}

#[tokio::test]
async fn ledger_survives_a_restart() {
    let dir = tempdir().expect("tempdir");
    let storage = Arc::new(JsonFileStore::new(dir.path().to_path_buf()).expect("create store"));

    let mut store = LedgerStore::new(storage);
    store.add_sale(100.0).unwrap();
    store.add_expense(40.0).unwrap();
    store.edit_sale(0, 120.0).unwrap();
    store.save().await.expect("save");

    let reopened_storage =
        Arc::new(JsonFileStore::new(dir.path().to_path_buf()).expect("reopen store"));
    let mut reopened = LedgerStore::new(reopened_storage);
    assert_eq!(reopened.load().await.expect("load"), LoadState::Loaded);

    assert_eq!(reopened.sales(), [120.0]);
    assert_eq!(reopened.expenses(), [40.0]);
    assert_eq!(
        reopened.logs(),
        ["Added Sale: ₱100", "Added Expense: ₱40", "Edited Sale: ₱120 at #1"]
    );
    assert_eq!(reopened.totals().balance, 80.0);
}

#[tokio::test]
async fn slots_are_plain_json_arrays() {
    let dir = tempdir().expect("tempdir");
    let storage = Arc::new(JsonFileStore::new(dir.path().to_path_buf()).expect("create store"));
    let mut store = LedgerStore::new(storage.clone());
    store.add_sale(50.0).unwrap();
    store.add_sale(2.5).unwrap();
    store.save().await.expect("save");

    let sales = fs::read_to_string(storage.slot_path("sales").unwrap()).unwrap();
    let logs = fs::read_to_string(storage.slot_path("logs").unwrap()).unwrap();

    assert_eq!(sales, "[50.0,2.5]");
    assert_eq!(logs, r#"["Added Sale: ₱50","Added Sale: ₱2.5"]"#);
}

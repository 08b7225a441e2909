//! Setting adapter CRUD operation tests

use tempfile::TempDir;

use valset::setting_adapter::SettingAdapter;
use valset::Error;
use valset_setting_adapter_sqlite::SettingAdapterSqlite;

async fn create_test_adapter() -> (SettingAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");

	let adapter = SettingAdapterSqlite::new(temp_dir.path().join("settings.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

#[tokio::test]
async fn test_read_missing_is_none() {
	let (adapter, _temp) = create_test_adapter().await;

	assert!(!adapter.exists("missing").await.unwrap());
	assert!(adapter.read("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_replace_and_read() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.replace("retention", "TimeDelta", "months=3").await.unwrap();

	assert!(adapter.exists("retention").await.unwrap());
	let record = adapter.read("retention").await.unwrap().expect("record should exist");
	assert_eq!(&*record.name, "retention");
	assert_eq!(&*record.type_name, "TimeDelta");
	assert_eq!(&*record.raw, "months=3");
}

#[tokio::test]
async fn test_replace_over_existing_keeps_one_record() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.replace("limit", "Integer", "5").await.unwrap();
	adapter.replace("limit", "String", "hello").await.unwrap();

	let record = adapter.read("limit").await.unwrap().expect("record should exist");
	assert_eq!(&*record.type_name, "String");
	assert_eq!(&*record.raw, "hello");

	let all = adapter.list(None).await.unwrap();
	assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_delete() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.replace("limit", "Integer", "5").await.unwrap();
	adapter.delete("limit").await.unwrap();

	assert!(!adapter.exists("limit").await.unwrap());
	assert!(matches!(adapter.delete("limit").await, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_list_with_prefix() {
	let (adapter, _temp) = create_test_adapter().await;

	adapter.replace("mail.host", "String", "smtp.example.com").await.unwrap();
	adapter.replace("mail.port", "PositiveInteger", "587").await.unwrap();
	adapter.replace("ui.theme", "String", "dark").await.unwrap();

	let mail = adapter.list(Some("mail.")).await.unwrap();
	assert_eq!(mail.len(), 2);
	assert_eq!(&*mail[0].name, "mail.host");
	assert_eq!(&*mail[1].name, "mail.port");

	let all = adapter.list(None).await.unwrap();
	assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_reopen_preserves_records() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let path = temp_dir.path().join("settings.db");

	{
		let adapter = SettingAdapterSqlite::new(&path).await.unwrap();
		adapter.replace("limit", "Integer", "5").await.unwrap();
	}

	let adapter = SettingAdapterSqlite::new(&path).await.unwrap();
	let record = adapter.read("limit").await.unwrap().expect("record should survive reopen");
	assert_eq!(&*record.raw, "5");
}

// vim: ts=4

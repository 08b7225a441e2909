//! SQLite-backed setting record store.
//!
//! Stores one row per setting name: the value type tag and the serialized
//! value. The primary key on `name` enforces the one-live-record invariant,
//! and `INSERT OR REPLACE` provides the atomic replace the manager's
//! delete-then-create semantics rely on.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

mod schema;

use std::path::Path;

use async_trait::async_trait;
use sqlx::{
	sqlite::{self, SqlitePool, SqliteRow},
	Row,
};

use valset::{
	prelude::*,
	setting_adapter::{SettingAdapter, StoredSetting},
};

use crate::schema::init_db;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

fn row_to_setting(row: &SqliteRow) -> StoredSetting {
	let name: String = row.get("name");
	let type_name: String = row.get("type");
	let raw: String = row.get("value");
	StoredSetting { name: name.into(), type_name: type_name.into(), raw: raw.into() }
}

/// [`SettingAdapter`] implementation over a pooled SQLite database
#[derive(Debug)]
pub struct SettingAdapterSqlite {
	db: SqlitePool,
}

impl SettingAdapterSqlite {
	/// Open (or create) the database at `path` and initialize the schema
	pub async fn new(path: impl AsRef<Path>) -> VsResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl SettingAdapter for SettingAdapterSqlite {
	async fn exists(&self, name: &str) -> VsResult<bool> {
		let row = sqlx::query("SELECT 1 FROM settings WHERE name = ?1")
			.bind(name)
			.fetch_optional(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		Ok(row.is_some())
	}

	async fn read(&self, name: &str) -> VsResult<Option<StoredSetting>> {
		let rows = sqlx::query("SELECT name, type, value FROM settings WHERE name = ?1")
			.bind(name)
			.fetch_all(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		// Unreachable with the primary key on name; guards non-unique backends
		if rows.len() > 1 {
			return Err(Error::Consistency(format!(
				"{} live records for setting '{}'",
				rows.len(),
				name
			)));
		}

		Ok(rows.first().map(row_to_setting))
	}

	async fn replace(&self, name: &str, type_name: &str, raw: &str) -> VsResult<()> {
		sqlx::query("INSERT OR REPLACE INTO settings (name, type, value) VALUES (?1, ?2, ?3)")
			.bind(name)
			.bind(type_name)
			.bind(raw)
			.execute(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		Ok(())
	}

	async fn delete(&self, name: &str) -> VsResult<()> {
		let res = sqlx::query("DELETE FROM settings WHERE name = ?1")
			.bind(name)
			.execute(&self.db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		if res.rows_affected() == 0 {
			return Err(Error::NotFound);
		}
		Ok(())
	}

	async fn list(&self, prefix: Option<&str>) -> VsResult<Vec<StoredSetting>> {
		let rows = if let Some(prefix) = prefix {
			sqlx::query(
				"SELECT name, type, value FROM settings WHERE name LIKE ?1 || '%' ORDER BY name",
			)
			.bind(prefix)
			.fetch_all(&self.db)
			.await
		} else {
			sqlx::query("SELECT name, type, value FROM settings ORDER BY name")
				.fetch_all(&self.db)
				.await
		}
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

		Ok(rows.iter().map(row_to_setting).collect())
	}
}

// vim: ts=4

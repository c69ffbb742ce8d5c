//! SQLite implementation of the Controlhub store adapter.

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;
use uuid::Uuid;

use controlhub::prelude::*;
use controlhub::store_adapter::{self, UpdateControlData, UpdateControlSetData};

mod control;
mod control_set;
mod hierarchy;
mod reference;
mod schema;

use schema::init_db;

// Helper functions
//******************

/// Parse a comma-joined name list. Names are alphabetic-plus-whitespace only,
/// so the comma never appears inside a name.
pub(crate) fn parse_str_list(s: &str) -> Vec<Box<str>> {
	if s.is_empty() {
		return Vec::new();
	}
	s.split(',').map(|s| s.trim().to_owned().into_boxed_str()).collect()
}

pub(crate) fn join_str_list(list: &[Box<str>]) -> String {
	list.join(",")
}

pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map an insert error, surfacing uniqueness violations as `Error::Conflict`.
pub(crate) fn map_insert_err(err: sqlx::Error) -> Error {
	if err.as_database_error().is_some_and(|e| e.is_unique_violation()) {
		Error::Conflict
	} else {
		inspect(&err);
		Error::DbError
	}
}

pub(crate) fn parse_slug(s: &str) -> ChResult<Uuid> {
	Uuid::parse_str(s).map_err(|_| Error::DbError)
}

#[derive(Debug)]
pub struct ControlStoreSqlite {
	db: SqlitePool,
}

impl ControlStoreSqlite {
	pub async fn new(path: impl AsRef<Path>) -> ChResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| inspect(err))
			.or(Err(Error::DbError))?;

		init_db(&db).await.inspect_err(|err| inspect(err)).or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl store_adapter::ControlStore for ControlStoreSqlite {
	// Controls
	//**********
	async fn create_control(&self, control: &Control) -> ChResult<()> {
		control::create(&self.db, control).await
	}
	async fn read_control(&self, name: &str) -> ChResult<Option<Control>> {
		control::read(&self.db, name).await
	}
	async fn list_controls(&self) -> ChResult<Vec<Control>> {
		control::list(&self.db).await
	}
	async fn update_control(&self, name: &str, data: &UpdateControlData) -> ChResult<()> {
		control::update(&self.db, name, data).await
	}
	async fn delete_control(&self, name: &str) -> ChResult<()> {
		control::delete(&self.db, name).await
	}

	// Control set references
	//************************
	async fn create_reference(&self, reference: &ControlSetReference) -> ChResult<()> {
		reference::create(&self.db, reference).await
	}
	async fn read_reference(&self, name: &str) -> ChResult<Option<ControlSetReference>> {
		reference::read(&self.db, name).await
	}
	async fn read_reference_by_id(
		&self,
		reference_id: &str,
	) -> ChResult<Option<ControlSetReference>> {
		reference::read_by_id(&self.db, reference_id).await
	}
	async fn list_references(&self) -> ChResult<Vec<ControlSetReference>> {
		reference::list(&self.db).await
	}
	async fn rename_reference_owner(&self, old_name: &str, new_name: &str) -> ChResult<u64> {
		reference::rename_owner(&self.db, old_name, new_name).await
	}
	async fn delete_references(&self, name: &str) -> ChResult<u64> {
		reference::delete(&self.db, name).await
	}
	async fn rename_reference_id(&self, name: &str, new_id: &str) -> ChResult<()> {
		reference::rename_reference_id(&self.db, name, new_id).await
	}

	// Control sets
	//**************
	async fn create_control_set(&self, set: &ControlSet) -> ChResult<()> {
		control_set::create(&self.db, set).await
	}
	async fn read_control_set(&self, name: &str) -> ChResult<Option<ControlSet>> {
		control_set::read(&self.db, name).await
	}
	async fn read_control_set_by_slug(&self, slug: Uuid) -> ChResult<Option<ControlSet>> {
		control_set::read_by_slug(&self.db, slug).await
	}
	async fn list_control_sets(&self) -> ChResult<Vec<ControlSet>> {
		control_set::list(&self.db).await
	}
	async fn update_control_set(&self, name: &str, data: &UpdateControlSetData) -> ChResult<()> {
		control_set::update(&self.db, name, data).await
	}
	async fn delete_control_set(&self, name: &str) -> ChResult<()> {
		control_set::delete(&self.db, name).await
	}

	// Hierarchies
	//*************
	async fn create_hierarchy(&self, slug: Uuid) -> ChResult<()> {
		hierarchy::create(&self.db, slug).await
	}
	async fn read_hierarchy(&self, slug: Uuid) -> ChResult<Option<ControlHierarchy>> {
		hierarchy::read(&self.db, slug).await
	}
	async fn list_hierarchies(&self) -> ChResult<Vec<ControlHierarchy>> {
		hierarchy::list(&self.db).await
	}
	async fn set_hierarchy_links(
		&self,
		slug: Uuid,
		parents: &[Box<str>],
		children: &[Box<str>],
	) -> ChResult<()> {
		hierarchy::set_links(&self.db, slug, parents, children).await
	}
	async fn add_members(&self, slug: Uuid, entries: &[ControlSetReference]) -> ChResult<()> {
		hierarchy::add_members(&self.db, slug, entries).await
	}
	async fn remove_member(&self, slug: Uuid, reference_id: &str) -> ChResult<()> {
		hierarchy::remove_member(&self.db, slug, reference_id).await
	}
	async fn remove_members_named(&self, name: &str) -> ChResult<u64> {
		hierarchy::remove_members_named(&self.db, name).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn str_list_round_trip() {
		assert_eq!(parse_str_list(""), Vec::<Box<str>>::new());
		let list = parse_str_list("Baseline,Network Security");
		assert_eq!(list.len(), 2);
		assert_eq!(&*list[1], "Network Security");
		assert_eq!(join_str_list(&list), "Baseline,Network Security");
	}
}

// vim: ts=4

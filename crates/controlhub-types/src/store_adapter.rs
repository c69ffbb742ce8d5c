//! The record store consumed by the hierarchy engine.
//!
//! The engine never talks to a database directly; it drives this trait and an
//! adapter crate supplies the persistence. Operations are deliberately small
//! and single-purpose — multi-step consistency logic lives in the engine, and
//! its non-atomicity across store calls is part of the contract. The one
//! exception is [`ControlStore::rename_reference_id`], which adapters must
//! implement as a single atomic unit.

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use crate::error::ChResult;
use crate::types::{Control, ControlHierarchy, ControlSet, ControlSetReference};

/// Partial update for a control.
#[derive(Debug, Default)]
pub struct UpdateControlData {
	pub name: Option<Box<str>>,
	pub description: Option<Box<str>>,
}

/// Partial update for a control set.
#[derive(Debug, Default)]
pub struct UpdateControlSetData {
	pub name: Option<Box<str>>,
	pub hierarchy_depth: Option<u32>,
}

#[async_trait]
pub trait ControlStore: Debug + Send + Sync {
	// # Controls
	/// Insert a control. An existing row with the same name is `Error::Conflict`.
	async fn create_control(&self, control: &Control) -> ChResult<()>;
	async fn read_control(&self, name: &str) -> ChResult<Option<Control>>;
	async fn list_controls(&self) -> ChResult<Vec<Control>>;
	async fn update_control(&self, name: &str, data: &UpdateControlData) -> ChResult<()>;
	async fn delete_control(&self, name: &str) -> ChResult<()>;

	// # Control set references
	async fn create_reference(&self, reference: &ControlSetReference) -> ChResult<()>;
	async fn read_reference(&self, name: &str) -> ChResult<Option<ControlSetReference>>;
	/// Lookup by `reference_id`. The store does not enforce uniqueness of
	/// reference ids; the first matching row wins.
	async fn read_reference_by_id(&self, reference_id: &str)
		-> ChResult<Option<ControlSetReference>>;
	async fn list_references(&self) -> ChResult<Vec<ControlSetReference>>;
	/// Move every reference row from `old_name` to `new_name`, returning the
	/// number of rows touched.
	async fn rename_reference_owner(&self, old_name: &str, new_name: &str) -> ChResult<u64>;
	/// Delete all reference rows with the given name, returning the count.
	async fn delete_references(&self, name: &str) -> ChResult<u64>;
	/// Atomic unit: set the reference's `reference_id` to `new_id` and rewrite
	/// every hierarchy membership entry carrying the old id in hierarchies the
	/// reference belongs to. All-or-nothing; adapters wrap this in one
	/// transaction.
	async fn rename_reference_id(&self, name: &str, new_id: &str) -> ChResult<()>;

	// # Control sets
	async fn create_control_set(&self, set: &ControlSet) -> ChResult<()>;
	async fn read_control_set(&self, name: &str) -> ChResult<Option<ControlSet>>;
	async fn read_control_set_by_slug(&self, slug: Uuid) -> ChResult<Option<ControlSet>>;
	async fn list_control_sets(&self) -> ChResult<Vec<ControlSet>>;
	async fn update_control_set(&self, name: &str, data: &UpdateControlSetData) -> ChResult<()>;
	async fn delete_control_set(&self, name: &str) -> ChResult<()>;

	// # Hierarchies
	/// Insert an empty hierarchy row keyed by the owning control set's slug.
	async fn create_hierarchy(&self, slug: Uuid) -> ChResult<()>;
	async fn read_hierarchy(&self, slug: Uuid) -> ChResult<Option<ControlHierarchy>>;
	async fn list_hierarchies(&self) -> ChResult<Vec<ControlHierarchy>>;
	/// Overwrite the parents and children lists wholesale.
	async fn set_hierarchy_links(
		&self,
		slug: Uuid,
		parents: &[Box<str>],
		children: &[Box<str>],
	) -> ChResult<()>;
	/// Union the given entries into the hierarchy's membership set.
	/// Entries already present are no-ops.
	async fn add_members(&self, slug: Uuid, entries: &[ControlSetReference]) -> ChResult<()>;
	/// Remove the membership entry with the given reference id, if present.
	async fn remove_member(&self, slug: Uuid, reference_id: &str) -> ChResult<()>;
	/// Remove membership entries with the given name from every hierarchy,
	/// returning the number of entries removed.
	async fn remove_members_named(&self, name: &str) -> ChResult<u64>;
}

// vim: ts=4

//! Applies validated hierarchy mutations.
//!
//! Control set creation, hierarchy membership/link updates, and reference-id
//! renames all land here. Only the rename is atomic (inside the store); the
//! multi-step [`apply`] sequence commits each step as it goes and does not
//! roll back earlier steps when a later one fails.

use uuid::Uuid;

use controlhub_types::store_adapter::UpdateControlSetData;
use controlhub_types::utils::is_valid_name;

use crate::prelude::*;

/// Create a control set with a fresh slug, then its empty hierarchy keyed by
/// the same slug. Two explicit store writes, in that order.
pub async fn create_control_set(
	store: &dyn ControlStore,
	name: &str,
	hierarchy_depth: u32,
) -> ChResult<ControlSet> {
	if !is_valid_name(name) {
		return Err(Error::ValidationError(
			"Name must only contain alphabetic characters".into(),
		));
	}
	let set = ControlSet { slug: Uuid::new_v4(), name: name.into(), hierarchy_depth };
	store.create_control_set(&set).await?;
	store.create_hierarchy(set.slug).await?;

	debug!(name = %set.name, slug = %set.slug, "Created control set and empty hierarchy");
	Ok(set)
}

/// Partially update a control set's name and/or depth.
pub async fn update_control_set(
	store: &dyn ControlStore,
	name: &str,
	data: &UpdateControlSetData,
) -> ChResult<ControlSet> {
	store.read_control_set(name).await?.ok_or(Error::NotFound)?;

	if let Some(new_name) = data.name.as_deref() {
		if !is_valid_name(new_name) {
			return Err(Error::ValidationError(
				"Name must only contain alphabetic characters".into(),
			));
		}
	}
	store.update_control_set(name, data).await?;

	let current_name = data.name.as_deref().unwrap_or(name);
	store.read_control_set(current_name).await?.ok_or(Error::NotFound)
}

/// Apply a hierarchy update to the control set owning `slug`:
///
/// 1. resolve every member reference id (a miss rejects the whole call),
/// 2. union the resolved references into the target's membership set,
/// 3. overwrite the parents and children lists wholesale,
/// 4. union the same references into each immediate parent's membership set.
///
/// Callers run [`crate::validator::validate`] first. Steps already committed
/// stay committed if a later step fails.
pub async fn apply(
	store: &dyn ControlStore,
	slug: Uuid,
	member_ids: &[Box<str>],
	parents: &[Box<str>],
	children: &[Box<str>],
) -> ChResult<ControlHierarchy> {
	let mut members = Vec::with_capacity(member_ids.len());
	for reference_id in member_ids {
		let reference =
			store.read_reference_by_id(reference_id).await?.ok_or_else(|| {
				Error::ValidationError(format!(
					"ControlSetReference {} does not exist",
					reference_id
				))
			})?;
		members.push(reference);
	}

	if !members.is_empty() {
		store.add_members(slug, &members).await?;
	}
	store.set_hierarchy_links(slug, parents, children).await?;

	// Members become visible one level up, in each immediate parent's set.
	for parent_name in parents {
		let parent_set = store.read_control_set(parent_name).await?.ok_or_else(|| {
			Error::ValidationError(format!("Parent ControlSet '{}' does not exist.", parent_name))
		})?;
		if store.read_hierarchy(parent_set.slug).await?.is_none() {
			return Err(Error::ValidationError(format!(
				"No ControlHierarchy found with slug {}",
				parent_set.slug
			)));
		}
		if !members.is_empty() {
			store.add_members(parent_set.slug, &members).await?;
		}
	}

	store.read_hierarchy(slug).await?.ok_or(Error::NotFound)
}

/// Assign a new `reference_id` to the reference named `name`.
///
/// The store performs the rename as one atomic unit: the reference row and
/// every embedded membership copy carrying the old id are rewritten together,
/// or not at all.
pub async fn rename_reference_id(
	store: &dyn ControlStore,
	name: &str,
	new_id: &str,
) -> ChResult<ControlSetReference> {
	store.read_reference(name).await?.ok_or(Error::NotFound)?;
	store.rename_reference_id(name, new_id).await?;
	store.read_reference(name).await?.ok_or(Error::NotFound)
}

// vim: ts=4

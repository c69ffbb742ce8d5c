//! Cascade deletion: removes dependent records when a control or control set
//! goes away.

use crate::prelude::*;

/// Delete a control: its reference rows and every membership entry carrying
/// its name go first, the control row itself last, so no hierarchy points at
/// a vanished control even momentarily. Parents/children lists are untouched
/// by this path.
pub async fn delete_control(store: &dyn ControlStore, name: &str) -> ChResult<()> {
	let control = store.read_control(name).await?.ok_or(Error::NotFound)?;

	let references = store.delete_references(&control.name).await?;
	let memberships = store.remove_members_named(&control.name).await?;
	store.delete_control(&control.name).await?;

	info!(name = %control.name, references, memberships, "Deleted control and dependents");
	Ok(())
}

/// Delete a control set: a full hierarchy scan strips its name from every
/// parents and children list, then the control set row is removed.
///
/// The set's own hierarchy row is left in place, keyed by a now-dangling
/// slug. Known quirk, kept for compatibility; see DESIGN.md before changing.
pub async fn delete_control_set(store: &dyn ControlStore, name: &str) -> ChResult<()> {
	let set = store.read_control_set(name).await?.ok_or(Error::NotFound)?;

	for mut hierarchy in store.list_hierarchies().await? {
		let links = hierarchy.parents.len() + hierarchy.children.len();
		hierarchy.parents.retain(|n| *n != set.name);
		hierarchy.children.retain(|n| *n != set.name);
		if hierarchy.parents.len() + hierarchy.children.len() != links {
			store
				.set_hierarchy_links(hierarchy.slug, &hierarchy.parents, &hierarchy.children)
				.await?;
		}
	}

	store.delete_control_set(&set.name).await?;
	info!(name = %set.name, "Deleted control set");
	Ok(())
}

/// Remove a member from the named control set's hierarchy, and from each
/// immediate parent's hierarchy. One level up only, not transitive; parents
/// that no longer resolve are skipped.
pub async fn remove_member(
	store: &dyn ControlStore,
	control_set_name: &str,
	reference_id: &str,
) -> ChResult<()> {
	let set = store.read_control_set(control_set_name).await?.ok_or(Error::NotFound)?;
	let hierarchy = store.read_hierarchy(set.slug).await?.ok_or(Error::NotFound)?;
	if store.read_reference_by_id(reference_id).await?.is_none() {
		return Err(Error::NotFound);
	}

	store.remove_member(set.slug, reference_id).await?;

	for parent_name in &hierarchy.parents {
		let Some(parent_set) = store.read_control_set(parent_name).await? else {
			continue;
		};
		if store.read_hierarchy(parent_set.slug).await?.is_none() {
			continue;
		}
		store.remove_member(parent_set.slug, reference_id).await?;
	}

	Ok(())
}

// vim: ts=4

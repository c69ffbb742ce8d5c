//! Depth-ordering validation for hierarchy mutations.
//!
//! A control set at depth `d` may only declare parents with depth strictly
//! below `d` and children with depth strictly above it; ties are rejected on
//! both sides. A depth-0 set can have no parents at all.

use uuid::Uuid;

use crate::prelude::*;

/// Check a proposed parents/children assignment for the control set owning
/// `slug`. Reads current state from the store; nothing is written.
///
/// Validation is not snapshot-isolated: a depth change committed between this
/// check and the following mutation is not guarded against.
pub async fn validate(
	store: &dyn ControlStore,
	slug: Uuid,
	parents: &[Box<str>],
	children: &[Box<str>],
) -> ChResult<()> {
	let target = store.read_control_set_by_slug(slug).await?.ok_or(Error::NotFound)?;
	let depth = target.hierarchy_depth;

	if depth == 0 && !parents.is_empty() {
		return Err(Error::ValidationError("Parents do not exist".into()));
	}

	for parent_name in parents {
		let parent = store.read_control_set(parent_name).await?.ok_or_else(|| {
			Error::ValidationError(format!("Parent ControlSet '{}' does not exist.", parent_name))
		})?;
		if parent.hierarchy_depth >= depth {
			return Err(Error::ValidationError(format!(
				"Parent ControlSet '{}' has greater hierarchy depth than the current ControlSet(It can't be a parent).",
				parent_name
			)));
		}
	}

	for child_name in children {
		let child = store.read_control_set(child_name).await?.ok_or_else(|| {
			Error::ValidationError(format!("Child ControlSet '{}' does not exist.", child_name))
		})?;
		if child.hierarchy_depth <= depth {
			return Err(Error::ValidationError(format!(
				"Child ControlSet '{}' has lesser hierarchy depth than the current ControlSet(It can't be a child).",
				child_name
			)));
		}
	}

	Ok(())
}

// vim: ts=4

//! Reference linker: every control has exactly one control set reference
//! with the same name, created when the control is created and renamed when
//! the control is renamed.

use controlhub_types::store_adapter::UpdateControlData;
use controlhub_types::utils::is_valid_name;

use crate::prelude::*;

const INVALID_NAME: &str = "Name must only contain alphabetic characters";

/// Create a control and its paired reference.
///
/// The reference is created with no `reference_id` assigned; an existing
/// reference with the same name is reused rather than duplicated.
pub async fn create_control(
	store: &dyn ControlStore,
	name: &str,
	description: &str,
) -> ChResult<Control> {
	if !is_valid_name(name) {
		return Err(Error::ValidationError(INVALID_NAME.into()));
	}
	let control = Control { name: name.into(), description: description.into() };
	store.create_control(&control).await?;

	if store.read_reference(name).await?.is_none() {
		store
			.create_reference(&ControlSetReference { name: name.into(), reference_id: None })
			.await?;
	}

	debug!(name = %control.name, "Created control and paired reference");
	Ok(control)
}

/// Update a control's description and/or name. A rename carries every
/// reference row with the old name along to the new one.
pub async fn update_control(
	store: &dyn ControlStore,
	name: &str,
	data: &UpdateControlData,
) -> ChResult<Control> {
	store.read_control(name).await?.ok_or(Error::NotFound)?;

	if let Some(new_name) = data.name.as_deref() {
		if !is_valid_name(new_name) {
			return Err(Error::ValidationError(INVALID_NAME.into()));
		}
	}
	store.update_control(name, data).await?;

	let current_name = data.name.as_deref().unwrap_or(name);
	if current_name != name {
		let moved = store.rename_reference_owner(name, current_name).await?;
		debug!(old = %name, new = %current_name, moved, "Renamed control references");
	}

	store.read_control(current_name).await?.ok_or(Error::NotFound)
}

// vim: ts=4

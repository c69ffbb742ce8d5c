//! Control REST endpoints

use axum::{
	Json,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use controlhub_hierarchy::{cascade, linker};
use controlhub_types::store_adapter::UpdateControlData;

use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct CreateControlRequest {
	pub name: String,
	pub description: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ControlQuery {
	pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateControlRequest {
	pub name: String,
	pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteControlRequest {
	pub name: String,
}

/// POST /api/control - Create a control; a matching reference is created as
/// part of the same call.
pub async fn create_control(
	State(app): State<App>,
	Json(req): Json<CreateControlRequest>,
) -> ChResult<Response> {
	info!(name = %req.name, "POST /api/control");

	let control = linker::create_control(app.store.as_ref(), &req.name, &req.description)
		.await
		.map_err(|err| match err {
			Error::Conflict => Error::ValidationError(
				"Failed to create Control, Control name already exist".into(),
			),
			err => err,
		})?;

	Ok((StatusCode::CREATED, Json(control)).into_response())
}

/// GET /api/control - Read one control by name, or list all
pub async fn get_controls(
	State(app): State<App>,
	Query(query): Query<ControlQuery>,
) -> ChResult<Response> {
	if let Some(name) = query.name {
		let Some(control) = app.store.read_control(&name).await? else {
			return Ok((
				StatusCode::NOT_FOUND,
				Json(json!({ "msg": format!("No object found with name {}", name) })),
			)
				.into_response());
		};
		return Ok(Json(control).into_response());
	}

	let controls = app.store.list_controls().await?;
	Ok(Json(controls).into_response())
}

/// PUT /api/control - Update a control's description
pub async fn update_control(
	State(app): State<App>,
	Json(req): Json<UpdateControlRequest>,
) -> ChResult<Response> {
	info!(name = %req.name, "PUT /api/control");

	let data = UpdateControlData {
		name: None,
		description: req.description.map(Into::into),
	};
	let control = match linker::update_control(app.store.as_ref(), &req.name, &data).await {
		Err(Error::NotFound) => {
			return Ok((
				StatusCode::NOT_FOUND,
				Json(json!({ "msg": format!("No Control found with name {}", req.name) })),
			)
				.into_response());
		}
		res => res?,
	};

	Ok(Json(json!({
		"control": control,
		"msg": "Associated ControlSetReferences updated successfully"
	}))
	.into_response())
}

/// DELETE /api/control - Delete a control, its references, and its hierarchy
/// membership entries
pub async fn delete_control(
	State(app): State<App>,
	Json(req): Json<DeleteControlRequest>,
) -> ChResult<Response> {
	info!(name = %req.name, "DELETE /api/control");

	match cascade::delete_control(app.store.as_ref(), &req.name).await {
		Err(Error::NotFound) => Ok((
			StatusCode::NOT_FOUND,
			Json(json!({ "msg": format!("No Control found with name {}", req.name) })),
		)
			.into_response()),
		res => {
			res?;
			Ok(Json(json!({
				"msg": "Control, ControlSetReferences, and ControlHierarchy components deleted successfully"
			}))
			.into_response())
		}
	}
}

// vim: ts=4

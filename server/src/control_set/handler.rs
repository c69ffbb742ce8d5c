//! Control set REST endpoints

use axum::{
	Json,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use controlhub_hierarchy::{cascade, mutator};
use controlhub_types::store_adapter::UpdateControlSetData;

use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct CreateControlSetRequest {
	pub name: String,
	pub hierarchy_depth: u32,
}

#[derive(Debug, Deserialize, Default)]
pub struct ControlSetQuery {
	pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateControlSetRequest {
	pub name: String,
	pub hierarchy_depth: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteControlSetRequest {
	pub name: String,
}

/// POST /api/control-set - Create a control set; its empty hierarchy is
/// created as part of the same call, keyed by the generated slug.
pub async fn create_control_set(
	State(app): State<App>,
	Json(req): Json<CreateControlSetRequest>,
) -> ChResult<Response> {
	info!(name = %req.name, depth = req.hierarchy_depth, "POST /api/control-set");

	let set = mutator::create_control_set(app.store.as_ref(), &req.name, req.hierarchy_depth)
		.await
		.map_err(|err| match err {
			Error::Conflict => Error::ValidationError("Failed to create ControlSet".into()),
			err => err,
		})?;

	Ok((StatusCode::CREATED, Json(set)).into_response())
}

/// GET /api/control-set - Read one control set by name, or list all
pub async fn get_control_sets(
	State(app): State<App>,
	Query(query): Query<ControlSetQuery>,
) -> ChResult<Response> {
	if let Some(name) = query.name {
		let Some(set) = app.store.read_control_set(&name).await? else {
			return Ok((
				StatusCode::NOT_FOUND,
				Json(json!({ "msg": format!("No object found with name {}", name) })),
			)
				.into_response());
		};
		return Ok(Json(set).into_response());
	}

	let sets = app.store.list_control_sets().await?;
	Ok(Json(sets).into_response())
}

/// PUT /api/control-set - Update a control set's hierarchy depth
pub async fn update_control_set(
	State(app): State<App>,
	Json(req): Json<UpdateControlSetRequest>,
) -> ChResult<Response> {
	info!(name = %req.name, "PUT /api/control-set");

	let data = UpdateControlSetData { name: None, hierarchy_depth: req.hierarchy_depth };
	match mutator::update_control_set(app.store.as_ref(), &req.name, &data).await {
		Err(Error::NotFound) => Ok((
			StatusCode::NOT_FOUND,
			Json(json!({ "msg": format!("No ControlSet found with name {}", req.name) })),
		)
			.into_response()),
		res => Ok(Json(res?).into_response()),
	}
}

/// DELETE /api/control-set - Delete a control set; every other hierarchy's
/// parents/children lists are scrubbed of its name first.
pub async fn delete_control_set(
	State(app): State<App>,
	Json(req): Json<DeleteControlSetRequest>,
) -> ChResult<Response> {
	info!(name = %req.name, "DELETE /api/control-set");

	match cascade::delete_control_set(app.store.as_ref(), &req.name).await {
		Err(Error::NotFound) => Ok((
			StatusCode::NOT_FOUND,
			Json(json!({ "msg": format!("No ControlSet found with name {}", req.name) })),
		)
			.into_response()),
		res => {
			res?;
			Ok(Json(json!({ "msg": "ControlSet, ControlHierarchies deleted successfully" }))
				.into_response())
		}
	}
}

// vim: ts=4

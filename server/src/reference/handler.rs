//! Control set reference REST endpoints

use axum::{
	Json,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use controlhub_hierarchy::mutator;

use crate::prelude::*;

#[derive(Debug, Deserialize, Default)]
pub struct ReferenceQuery {
	pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReferenceRequest {
	pub name: String,
	pub reference_id: Option<String>,
}

/// GET /api/reference - Read one reference by name, or list all
pub async fn get_references(
	State(app): State<App>,
	Query(query): Query<ReferenceQuery>,
) -> ChResult<Response> {
	if let Some(name) = query.name {
		let Some(reference) = app.store.read_reference(&name).await? else {
			return Ok((
				StatusCode::NOT_FOUND,
				Json(json!({ "msg": format!("No object found with name {}", name) })),
			)
				.into_response());
		};
		return Ok(Json(reference).into_response());
	}

	let references = app.store.list_references().await?;
	Ok(Json(references).into_response())
}

/// PUT /api/reference - Assign a new reference id. The rename and the rewrite
/// of every hierarchy membership copy commit as one atomic unit.
pub async fn update_reference(
	State(app): State<App>,
	Json(req): Json<UpdateReferenceRequest>,
) -> ChResult<Response> {
	let Some(reference_id) = req.reference_id.filter(|id| !id.is_empty()) else {
		return Ok((
			StatusCode::BAD_REQUEST,
			Json(json!({ "msg": "Name and new reference_id are required" })),
		)
			.into_response());
	};
	info!(name = %req.name, reference_id = %reference_id, "PUT /api/reference");

	match mutator::rename_reference_id(app.store.as_ref(), &req.name, &reference_id).await {
		Err(Error::NotFound) => Ok((
			StatusCode::NOT_FOUND,
			Json(json!({
				"msg": format!("No ControlSetReference found with name {}", req.name)
			})),
		)
			.into_response()),
		res => {
			res?;
			Ok(Json(json!({
				"msg": "ControlSetReference and ControlHierarchy components updated successfully"
			}))
			.into_response())
		}
	}
}

// vim: ts=4

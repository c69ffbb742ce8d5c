//! Control hierarchy REST endpoints

use axum::{
	Json,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use controlhub_hierarchy::{cascade, mutator, validator};

use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct UpdateHierarchyRequest {
	pub name: String,
	/// Reference ids to union into the membership set
	#[serde(default)]
	pub control_set: Vec<Box<str>>,
	#[serde(default)]
	pub parents: Vec<Box<str>>,
	#[serde(default)]
	pub children: Vec<Box<str>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct HierarchyQuery {
	pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteMemberRequest {
	pub name: String,
	pub reference_id: Option<String>,
}

/// Membership entry annotated with the control it resolves to.
#[derive(Debug, Serialize)]
pub struct MemberDetails {
	pub name: Box<str>,
	pub reference_id: Option<Box<str>>,
	pub control_name: String,
	pub description: String,
}

#[derive(Debug, Serialize)]
pub struct HierarchyDetails {
	pub slug: Uuid,
	pub control_set: Vec<MemberDetails>,
	pub parents: Vec<Box<str>>,
	pub children: Vec<Box<str>>,
	pub control_set_name: String,
}

/// Resolve a membership entry through its reference id back to the control.
/// Entries whose reference or control no longer resolves get placeholder
/// texts rather than failing the whole listing.
async fn member_details(app: &App, entry: &ControlSetReference) -> ChResult<MemberDetails> {
	let mut control_name = "Reference not found".to_string();
	let mut description = "Description not found".to_string();

	// Entries with no id assigned yet resolve through their name instead.
	let reference = match entry.reference_id.as_deref() {
		Some(id) => app.store.read_reference_by_id(id).await?,
		None => app.store.read_reference(&entry.name).await?,
	};
	if let Some(reference) = reference {
		control_name = reference.name.to_string();
		if let Some(control) = app.store.read_control(&reference.name).await? {
			description = control.description.to_string();
		}
	}

	Ok(MemberDetails {
		name: entry.name.clone(),
		reference_id: entry.reference_id.clone(),
		control_name,
		description,
	})
}

async fn hierarchy_details(
	app: &App,
	hierarchy: ControlHierarchy,
	control_set_name: String,
) -> ChResult<HierarchyDetails> {
	let mut members = Vec::with_capacity(hierarchy.control_set.len());
	for entry in &hierarchy.control_set {
		members.push(member_details(app, entry).await?);
	}

	Ok(HierarchyDetails {
		slug: hierarchy.slug,
		control_set: members,
		parents: hierarchy.parents,
		children: hierarchy.children,
		control_set_name,
	})
}

/// PUT /api/hierarchy - Validate and apply a hierarchy update for the control
/// set with the given name. The parents and children lists are overwritten
/// wholesale; omitted lists clear.
pub async fn update_hierarchy(
	State(app): State<App>,
	Json(req): Json<UpdateHierarchyRequest>,
) -> ChResult<Response> {
	info!(name = %req.name, "PUT /api/hierarchy");

	let Some(set) = app.store.read_control_set(&req.name).await? else {
		return Ok((
			StatusCode::NOT_FOUND,
			Json(json!({ "msg": format!("No CreateSet found with name {}", req.name) })),
		)
			.into_response());
	};
	if app.store.read_hierarchy(set.slug).await?.is_none() {
		return Ok((
			StatusCode::NOT_FOUND,
			Json(json!({ "msg": format!("No ControlHierarchy found with slug {}", set.slug) })),
		)
			.into_response());
	}

	validator::validate(app.store.as_ref(), set.slug, &req.parents, &req.children).await?;
	let hierarchy = mutator::apply(
		app.store.as_ref(),
		set.slug,
		&req.control_set,
		&req.parents,
		&req.children,
	)
	.await?;

	Ok(Json(hierarchy).into_response())
}

/// GET /api/hierarchy - Enriched hierarchy details for one control set by
/// name, or for all hierarchies.
pub async fn get_hierarchies(
	State(app): State<App>,
	Query(query): Query<HierarchyQuery>,
) -> ChResult<Response> {
	if let Some(name) = query.name {
		let Some(set) = app.store.read_control_set(&name).await? else {
			return Ok((
				StatusCode::NOT_FOUND,
				Json(json!({ "msg": format!("No Control Set found with name {}", name) })),
			)
				.into_response());
		};
		let Some(hierarchy) = app.store.read_hierarchy(set.slug).await? else {
			return Ok((
				StatusCode::NOT_FOUND,
				Json(json!({
					"msg": format!("No ControlHierarchy found with slug {}", set.slug)
				})),
			)
				.into_response());
		};
		let details = hierarchy_details(&app, hierarchy, set.name.to_string()).await?;
		return Ok(Json(details).into_response());
	}

	let mut listing = Vec::new();
	for hierarchy in app.store.list_hierarchies().await? {
		// Orphaned hierarchies (set deleted, row left behind) still list.
		let control_set_name = match app.store.read_control_set_by_slug(hierarchy.slug).await? {
			Some(set) => set.name.to_string(),
			None => "Name not found".to_string(),
		};
		listing.push(hierarchy_details(&app, hierarchy, control_set_name).await?);
	}
	Ok(Json(listing).into_response())
}

/// DELETE /api/hierarchy/member - Remove a member from the named control
/// set's hierarchy and from each immediate parent's hierarchy.
pub async fn delete_member(
	State(app): State<App>,
	Json(req): Json<DeleteMemberRequest>,
) -> ChResult<Response> {
	let Some(reference_id) = req.reference_id.filter(|id| !id.is_empty()) else {
		return Ok((
			StatusCode::BAD_REQUEST,
			Json(json!({ "msg": "Both 'name' and 'reference_id' are required" })),
		)
			.into_response());
	};
	info!(name = %req.name, reference_id = %reference_id, "DELETE /api/hierarchy/member");

	let Some(set) = app.store.read_control_set(&req.name).await? else {
		return Ok((
			StatusCode::NOT_FOUND,
			Json(json!({ "msg": format!("No Control Set found with name {}", req.name) })),
		)
			.into_response());
	};
	if app.store.read_hierarchy(set.slug).await?.is_none() {
		return Ok((
			StatusCode::NOT_FOUND,
			Json(json!({ "msg": format!("No ControlHierarchy found with slug {}", set.slug) })),
		)
			.into_response());
	}
	if app.store.read_reference_by_id(&reference_id).await?.is_none() {
		return Ok((
			StatusCode::NOT_FOUND,
			Json(json!({
				"msg": format!("No ControlSetReference found with reference_id {}", reference_id)
			})),
		)
			.into_response());
	}

	cascade::remove_member(app.store.as_ref(), &req.name, &reference_id).await?;

	Ok(Json(json!({
		"msg": "ControlSetReference deleted successfully from ControlHierarchy and its parents"
	}))
	.into_response())
}

// vim: ts=4

use axum::{
	Router,
	routing::{delete, get},
};

use crate::control;
use crate::control_set;
use crate::hierarchy;
use crate::prelude::*;
use crate::reference;

pub fn init(state: App) -> Router {
	Router::new()
		.route(
			"/api/control",
			get(control::handler::get_controls)
				.post(control::handler::create_control)
				.put(control::handler::update_control)
				.delete(control::handler::delete_control),
		)
		.route(
			"/api/reference",
			get(reference::handler::get_references).put(reference::handler::update_reference),
		)
		.route(
			"/api/control-set",
			get(control_set::handler::get_control_sets)
				.post(control_set::handler::create_control_set)
				.put(control_set::handler::update_control_set)
				.delete(control_set::handler::delete_control_set),
		)
		.route(
			"/api/hierarchy",
			get(hierarchy::handler::get_hierarchies).put(hierarchy::handler::update_hierarchy),
		)
		.route("/api/hierarchy/member", delete(hierarchy::handler::delete_member))
		.with_state(state)
}

// vim: ts=4

//! Core entity types of the control hierarchy domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single named compliance requirement.
///
/// `name` is the primary key; renames flow through to the matching
/// [`ControlSetReference`] rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
	pub name: Box<str>,
	pub description: Box<str>,
}

/// A stable external identifier record paired one-to-one with a [`Control`]
/// by name. Created automatically when the control is created, with no
/// `reference_id` assigned yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSetReference {
	pub name: Box<str>,
	pub reference_id: Option<Box<str>>,
}

/// A named, depth-tagged grouping of controls, organizable into a tree.
/// Lower `hierarchy_depth` values are ancestors, higher values descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSet {
	pub slug: Uuid,
	pub name: Box<str>,
	pub hierarchy_depth: u32,
}

/// The parent/child/membership record for one [`ControlSet`], sharing its
/// slug. Membership entries are embedded copies of the reference rows; the
/// reference-id rename unit rewrites them in step with the reference itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlHierarchy {
	pub slug: Uuid,
	#[serde(default)]
	pub control_set: Vec<ControlSetReference>,
	#[serde(default)]
	pub parents: Vec<Box<str>>,
	#[serde(default)]
	pub children: Vec<Box<str>>,
}

// vim: ts=4

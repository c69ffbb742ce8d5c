//! Store adapter CRUD operation tests
//!
//! Tests Create, Read, Update, Delete operations for controls, references,
//! and control sets.

use tempfile::TempDir;
use uuid::Uuid;

use controlhub::error::Error;
use controlhub::store_adapter::{ControlStore, UpdateControlData, UpdateControlSetData};
use controlhub::types::{Control, ControlSet, ControlSetReference};
use controlhub_store_adapter_sqlite::ControlStoreSqlite;

async fn create_test_store() -> (ControlStoreSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store = ControlStoreSqlite::new(temp_dir.path().join("controls.db"))
		.await
		.expect("Failed to create store");
	(store, temp_dir)
}

fn control(name: &str, description: &str) -> Control {
	Control { name: name.into(), description: description.into() }
}

#[tokio::test]
async fn control_round_trip() {
	let (store, _temp) = create_test_store().await;

	store.create_control(&control("Access Control", "Restrict access")).await.expect("create");

	let read = store.read_control("Access Control").await.expect("read").expect("exists");
	assert_eq!(&*read.description, "Restrict access");

	assert!(store.read_control("Missing").await.expect("read").is_none());
}

#[tokio::test]
async fn duplicate_control_is_a_conflict() {
	let (store, _temp) = create_test_store().await;

	store.create_control(&control("Encryption", "v one")).await.expect("create");
	let err = store.create_control(&control("Encryption", "v two")).await.unwrap_err();
	assert!(matches!(err, Error::Conflict));
}

#[tokio::test]
async fn control_update_is_partial() {
	let (store, _temp) = create_test_store().await;

	store.create_control(&control("Logging", "old text")).await.expect("create");

	let data =
		UpdateControlData { name: None, description: Some("new text".into()) };
	store.update_control("Logging", &data).await.expect("update");

	let read = store.read_control("Logging").await.expect("read").expect("exists");
	assert_eq!(&*read.description, "new text");

	let err = store.update_control("Missing", &data).await.unwrap_err();
	assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn list_controls_is_name_ordered() {
	let (store, _temp) = create_test_store().await;

	store.create_control(&control("Zoning", "z")).await.expect("create");
	store.create_control(&control("Auditing", "a")).await.expect("create");

	let controls = store.list_controls().await.expect("list");
	assert_eq!(controls.len(), 2);
	assert_eq!(&*controls[0].name, "Auditing");
}

#[tokio::test]
async fn reference_lookup_by_name_and_id() {
	let (store, _temp) = create_test_store().await;

	store
		.create_reference(&ControlSetReference {
			name: "Alpha".into(),
			reference_id: Some("RefOne".into()),
		})
		.await
		.expect("create");

	let by_name = store.read_reference("Alpha").await.expect("read").expect("exists");
	assert_eq!(by_name.reference_id.as_deref(), Some("RefOne"));

	let by_id = store.read_reference_by_id("RefOne").await.expect("read").expect("exists");
	assert_eq!(&*by_id.name, "Alpha");

	assert!(store.read_reference_by_id("Missing").await.expect("read").is_none());
}

#[tokio::test]
async fn reference_owner_rename_moves_all_rows() {
	let (store, _temp) = create_test_store().await;

	store
		.create_reference(&ControlSetReference { name: "Alpha".into(), reference_id: None })
		.await
		.expect("create");

	let moved = store.rename_reference_owner("Alpha", "Beta").await.expect("rename");
	assert_eq!(moved, 1);
	assert!(store.read_reference("Alpha").await.expect("read").is_none());
	assert!(store.read_reference("Beta").await.expect("read").is_some());
}

#[tokio::test]
async fn delete_references_reports_count() {
	let (store, _temp) = create_test_store().await;

	store
		.create_reference(&ControlSetReference { name: "Alpha".into(), reference_id: None })
		.await
		.expect("create");

	assert_eq!(store.delete_references("Alpha").await.expect("delete"), 1);
	assert_eq!(store.delete_references("Alpha").await.expect("delete"), 0);
}

#[tokio::test]
async fn control_set_round_trip_by_name_and_slug() {
	let (store, _temp) = create_test_store().await;

	let set = ControlSet { slug: Uuid::new_v4(), name: "Baseline".into(), hierarchy_depth: 2 };
	store.create_control_set(&set).await.expect("create");

	let by_name = store.read_control_set("Baseline").await.expect("read").expect("exists");
	assert_eq!(by_name.slug, set.slug);
	assert_eq!(by_name.hierarchy_depth, 2);

	let by_slug =
		store.read_control_set_by_slug(set.slug).await.expect("read").expect("exists");
	assert_eq!(&*by_slug.name, "Baseline");
}

#[tokio::test]
async fn duplicate_control_set_name_is_a_conflict() {
	let (store, _temp) = create_test_store().await;

	let first = ControlSet { slug: Uuid::new_v4(), name: "Baseline".into(), hierarchy_depth: 0 };
	let second = ControlSet { slug: Uuid::new_v4(), name: "Baseline".into(), hierarchy_depth: 1 };
	store.create_control_set(&first).await.expect("create");
	let err = store.create_control_set(&second).await.unwrap_err();
	assert!(matches!(err, Error::Conflict));
}

#[tokio::test]
async fn control_set_depth_update() {
	let (store, _temp) = create_test_store().await;

	let set = ControlSet { slug: Uuid::new_v4(), name: "Baseline".into(), hierarchy_depth: 0 };
	store.create_control_set(&set).await.expect("create");

	let data = UpdateControlSetData { name: None, hierarchy_depth: Some(3) };
	store.update_control_set("Baseline", &data).await.expect("update");

	let read = store.read_control_set("Baseline").await.expect("read").expect("exists");
	assert_eq!(read.hierarchy_depth, 3);
}

// vim: ts=4

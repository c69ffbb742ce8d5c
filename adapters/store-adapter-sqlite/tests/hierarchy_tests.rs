//! Hierarchy and membership storage tests
//!
//! Covers the comma-joined link lists, membership set semantics, and the
//! atomic reference-id rename unit.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use uuid::Uuid;

use controlhub::error::Error;
use controlhub::store_adapter::ControlStore;
use controlhub::types::ControlSetReference;
use controlhub_store_adapter_sqlite::ControlStoreSqlite;

async fn create_test_store() -> (ControlStoreSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let store = ControlStoreSqlite::new(temp_dir.path().join("controls.db"))
		.await
		.expect("Failed to create store");
	(store, temp_dir)
}

fn entry(name: &str, reference_id: Option<&str>) -> ControlSetReference {
	ControlSetReference { name: name.into(), reference_id: reference_id.map(Into::into) }
}

#[tokio::test]
async fn fresh_hierarchy_is_empty() {
	let (store, _temp) = create_test_store().await;
	let slug = Uuid::new_v4();

	store.create_hierarchy(slug).await.expect("create");

	let hierarchy = store.read_hierarchy(slug).await.expect("read").expect("exists");
	assert!(hierarchy.control_set.is_empty());
	assert!(hierarchy.parents.is_empty());
	assert!(hierarchy.children.is_empty());
}

#[tokio::test]
async fn duplicate_hierarchy_slug_is_a_conflict() {
	let (store, _temp) = create_test_store().await;
	let slug = Uuid::new_v4();

	store.create_hierarchy(slug).await.expect("create");
	let err = store.create_hierarchy(slug).await.unwrap_err();
	assert!(matches!(err, Error::Conflict));
}

#[tokio::test]
async fn links_overwrite_and_round_trip() {
	let (store, _temp) = create_test_store().await;
	let slug = Uuid::new_v4();
	store.create_hierarchy(slug).await.expect("create");

	store
		.set_hierarchy_links(slug, &["Baseline".into(), "Core Policies".into()], &["Leaf".into()])
		.await
		.expect("set links");

	let hierarchy = store.read_hierarchy(slug).await.expect("read").expect("exists");
	assert_eq!(hierarchy.parents, vec![Box::from("Baseline"), Box::from("Core Policies")]);
	assert_eq!(hierarchy.children, vec![Box::from("Leaf")]);

	// Overwrite, not merge
	store.set_hierarchy_links(slug, &[], &[]).await.expect("clear links");
	let hierarchy = store.read_hierarchy(slug).await.expect("read").expect("exists");
	assert!(hierarchy.parents.is_empty());
	assert!(hierarchy.children.is_empty());
}

#[tokio::test]
async fn setting_links_on_a_missing_hierarchy_is_not_found() {
	let (store, _temp) = create_test_store().await;

	let err = store.set_hierarchy_links(Uuid::new_v4(), &[], &[]).await.unwrap_err();
	assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn membership_is_a_set_keyed_by_name() {
	let (store, _temp) = create_test_store().await;
	let slug = Uuid::new_v4();
	store.create_hierarchy(slug).await.expect("create");

	store.add_members(slug, &[entry("Alpha", Some("RefOne"))]).await.expect("add");
	store.add_members(slug, &[entry("Alpha", Some("RefOne"))]).await.expect("add again");

	let hierarchy = store.read_hierarchy(slug).await.expect("read").expect("exists");
	assert_eq!(hierarchy.control_set.len(), 1);

	// Re-adding with a changed id refreshes the embedded copy
	store.add_members(slug, &[entry("Alpha", Some("RefTwo"))]).await.expect("refresh");
	let hierarchy = store.read_hierarchy(slug).await.expect("read").expect("exists");
	assert_eq!(hierarchy.control_set.len(), 1);
	assert_eq!(hierarchy.control_set[0].reference_id.as_deref(), Some("RefTwo"));
}

#[tokio::test]
async fn remove_member_matches_by_reference_id() {
	let (store, _temp) = create_test_store().await;
	let slug = Uuid::new_v4();
	store.create_hierarchy(slug).await.expect("create");
	store
		.add_members(slug, &[entry("Alpha", Some("RefOne")), entry("Beta", Some("RefTwo"))])
		.await
		.expect("add");

	store.remove_member(slug, "RefOne").await.expect("remove");

	let hierarchy = store.read_hierarchy(slug).await.expect("read").expect("exists");
	assert_eq!(hierarchy.control_set.len(), 1);
	assert_eq!(&*hierarchy.control_set[0].name, "Beta");
}

#[tokio::test]
async fn remove_members_named_scans_every_hierarchy() {
	let (store, _temp) = create_test_store().await;
	let (one, two) = (Uuid::new_v4(), Uuid::new_v4());
	store.create_hierarchy(one).await.expect("create");
	store.create_hierarchy(two).await.expect("create");
	store.add_members(one, &[entry("Alpha", Some("RefOne"))]).await.expect("add");
	store.add_members(two, &[entry("Alpha", Some("RefOne"))]).await.expect("add");

	let removed = store.remove_members_named("Alpha").await.expect("remove");
	assert_eq!(removed, 2);
}

#[tokio::test]
async fn reference_id_rename_rewrites_member_copies_atomically() {
	let (store, _temp) = create_test_store().await;
	store
		.create_reference(&entry("Alpha", Some("RefOne")))
		.await
		.expect("create reference");

	let (one, two) = (Uuid::new_v4(), Uuid::new_v4());
	store.create_hierarchy(one).await.expect("create");
	store.create_hierarchy(two).await.expect("create");
	store.add_members(one, &[entry("Alpha", Some("RefOne"))]).await.expect("add");
	store.add_members(two, &[entry("Alpha", Some("RefOne"))]).await.expect("add");

	store.rename_reference_id("Alpha", "RefNew").await.expect("rename");

	let reference = store.read_reference("Alpha").await.expect("read").expect("exists");
	assert_eq!(reference.reference_id.as_deref(), Some("RefNew"));
	for slug in [one, two] {
		let hierarchy = store.read_hierarchy(slug).await.expect("read").expect("exists");
		assert_eq!(hierarchy.control_set[0].reference_id.as_deref(), Some("RefNew"));
	}
}

#[tokio::test]
async fn reference_id_rename_covers_unassigned_ids() {
	let (store, _temp) = create_test_store().await;
	store.create_reference(&entry("Alpha", None)).await.expect("create reference");

	let slug = Uuid::new_v4();
	store.create_hierarchy(slug).await.expect("create");
	store.add_members(slug, &[entry("Alpha", None)]).await.expect("add");

	store.rename_reference_id("Alpha", "RefOne").await.expect("rename");

	let hierarchy = store.read_hierarchy(slug).await.expect("read").expect("exists");
	assert_eq!(hierarchy.control_set[0].reference_id.as_deref(), Some("RefOne"));
}

#[tokio::test]
async fn reference_id_rename_leaves_no_partial_state_on_failure() {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let db_path = temp_dir.path().join("controls.db");
	let store = ControlStoreSqlite::new(&db_path).await.expect("Failed to create store");

	store.create_reference(&entry("Alpha", Some("RefOne"))).await.expect("create reference");
	let slug = Uuid::new_v4();
	store.create_hierarchy(slug).await.expect("create");
	store.add_members(slug, &[entry("Alpha", Some("RefOne"))]).await.expect("add");

	// Make the membership rewrite fail mid-unit, after the reference row
	// update has already run inside the transaction.
	let raw = SqlitePoolOptions::new()
		.max_connections(1)
		.connect_with(SqliteConnectOptions::new().filename(&db_path))
		.await
		.expect("Failed to open raw connection");
	sqlx::query(
		"CREATE TRIGGER block_member_updates BEFORE UPDATE ON hierarchy_members
		BEGIN SELECT RAISE(ABORT, 'blocked'); END",
	)
	.execute(&raw)
	.await
	.expect("Failed to install trigger");

	store.rename_reference_id("Alpha", "RefNew").await.unwrap_err();

	// Rolled back as one unit: neither the reference row nor the copy moved.
	let reference = store.read_reference("Alpha").await.expect("read").expect("exists");
	assert_eq!(reference.reference_id.as_deref(), Some("RefOne"));
	let hierarchy = store.read_hierarchy(slug).await.expect("read").expect("exists");
	assert_eq!(hierarchy.control_set[0].reference_id.as_deref(), Some("RefOne"));

	// With the trigger gone the same rename goes through.
	sqlx::query("DROP TRIGGER block_member_updates").execute(&raw).await.expect("drop trigger");
	store.rename_reference_id("Alpha", "RefNew").await.expect("rename");
	let reference = store.read_reference("Alpha").await.expect("read").expect("exists");
	assert_eq!(reference.reference_id.as_deref(), Some("RefNew"));
}

#[tokio::test]
async fn reference_id_rename_of_missing_reference_is_not_found() {
	let (store, _temp) = create_test_store().await;

	let err = store.rename_reference_id("Ghost", "RefOne").await.unwrap_err();
	assert!(matches!(err, Error::NotFound));
}

// vim: ts=4

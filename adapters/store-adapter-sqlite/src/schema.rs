//! Database schema initialization
//!
//! Creates the tables and indexes for controls, references, control sets,
//! hierarchies, and hierarchy membership.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Controls
	//**********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS controls (
		name text NOT NULL,
		description text,
		PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Control set references
	//************************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS control_set_refs (
		name text NOT NULL,
		reference_id text,
		PRIMARY KEY(name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_control_set_refs_reference_id
		ON control_set_refs(reference_id)",
	)
	.execute(&mut *tx)
	.await?;

	// Control sets
	//**************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS control_sets (
		slug text NOT NULL,
		name text NOT NULL UNIQUE,
		hierarchy_depth integer NOT NULL,
		PRIMARY KEY(slug)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Hierarchies
	//*************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS control_hierarchies (
		slug text NOT NULL,
		parents text NOT NULL DEFAULT '',
		children text NOT NULL DEFAULT '',
		PRIMARY KEY(slug)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Membership entries are embedded copies of the reference rows; the
	// reference-id rename rewrites them in step with the reference itself.
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS hierarchy_members (
		slug text NOT NULL,
		name text NOT NULL,
		reference_id text,
		PRIMARY KEY(slug, name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_hierarchy_members_reference_id
		ON hierarchy_members(reference_id)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;
	Ok(())
}

// vim: ts=4

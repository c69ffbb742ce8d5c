//! Control set reference storage
//!
//! Holds the one-to-one reference rows paired with controls by name, and the
//! atomic reference-id rename unit.

use sqlx::{Row, SqlitePool};

use controlhub::prelude::*;

use crate::{inspect, map_insert_err};

pub(crate) async fn create(db: &SqlitePool, reference: &ControlSetReference) -> ChResult<()> {
	sqlx::query("INSERT INTO control_set_refs (name, reference_id) VALUES (?, ?)")
		.bind(reference.name.as_ref())
		.bind(reference.reference_id.as_deref())
		.execute(db)
		.await
		.map_err(map_insert_err)?;

	Ok(())
}

pub(crate) async fn read(db: &SqlitePool, name: &str) -> ChResult<Option<ControlSetReference>> {
	let row = sqlx::query("SELECT name, reference_id FROM control_set_refs WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.map(|r| ControlSetReference { name: r.get("name"), reference_id: r.get("reference_id") }))
}

/// Lookup by reference id. Ids are not unique in the store; the first row in
/// name order wins.
pub(crate) async fn read_by_id(
	db: &SqlitePool,
	reference_id: &str,
) -> ChResult<Option<ControlSetReference>> {
	let row = sqlx::query(
		"SELECT name, reference_id FROM control_set_refs WHERE reference_id = ? ORDER BY name LIMIT 1",
	)
	.bind(reference_id)
	.fetch_optional(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(row.map(|r| ControlSetReference { name: r.get("name"), reference_id: r.get("reference_id") }))
}

pub(crate) async fn list(db: &SqlitePool) -> ChResult<Vec<ControlSetReference>> {
	let rows = sqlx::query("SELECT name, reference_id FROM control_set_refs ORDER BY name")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(rows
		.iter()
		.map(|r| ControlSetReference { name: r.get("name"), reference_id: r.get("reference_id") })
		.collect())
}

pub(crate) async fn rename_owner(
	db: &SqlitePool,
	old_name: &str,
	new_name: &str,
) -> ChResult<u64> {
	let res = sqlx::query("UPDATE control_set_refs SET name = ? WHERE name = ?")
		.bind(new_name)
		.bind(old_name)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

pub(crate) async fn delete(db: &SqlitePool, name: &str) -> ChResult<u64> {
	let res = sqlx::query("DELETE FROM control_set_refs WHERE name = ?")
		.bind(name)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

/// The one atomic unit in the store: set the reference's id and rewrite every
/// membership entry carrying the old id in hierarchies the reference belongs
/// to. All statements run inside a single transaction; a failure anywhere
/// rolls the whole unit back.
pub(crate) async fn rename_reference_id(
	db: &SqlitePool,
	name: &str,
	new_id: &str,
) -> ChResult<()> {
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let row = sqlx::query("SELECT reference_id FROM control_set_refs WHERE name = ?")
		.bind(name)
		.fetch_optional(&mut *tx)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	let Some(row) = row else {
		return Err(Error::NotFound);
	};
	let old_id: Option<String> = row.get("reference_id");

	sqlx::query("UPDATE control_set_refs SET reference_id = ? WHERE name = ?")
		.bind(new_id)
		.bind(name)
		.execute(&mut *tx)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	// `IS` rather than `=` so an unassigned (NULL) old id matches too.
	sqlx::query(
		"UPDATE hierarchy_members SET reference_id = ?
		WHERE reference_id IS ?
		AND slug IN (SELECT slug FROM hierarchy_members WHERE name = ?)",
	)
	.bind(new_id)
	.bind(old_id.as_deref())
	.bind(name)
	.execute(&mut *tx)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	Ok(())
}

// vim: ts=4

//! Hierarchy row and membership storage
//!
//! The parents/children lists are stored comma-joined; membership entries
//! live in their own table as embedded copies of the reference rows.

use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use controlhub::prelude::*;

use crate::{inspect, join_str_list, map_insert_err, parse_slug, parse_str_list};

pub(crate) async fn create(db: &SqlitePool, slug: Uuid) -> ChResult<()> {
	sqlx::query("INSERT INTO control_hierarchies (slug, parents, children) VALUES (?, '', '')")
		.bind(slug.to_string())
		.execute(db)
		.await
		.map_err(map_insert_err)?;

	Ok(())
}

async fn members(db: &SqlitePool, slug: Uuid) -> ChResult<Vec<ControlSetReference>> {
	let rows = sqlx::query(
		"SELECT name, reference_id FROM hierarchy_members WHERE slug = ? ORDER BY name",
	)
	.bind(slug.to_string())
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(rows
		.iter()
		.map(|r| ControlSetReference { name: r.get("name"), reference_id: r.get("reference_id") })
		.collect())
}

pub(crate) async fn read(db: &SqlitePool, slug: Uuid) -> ChResult<Option<ControlHierarchy>> {
	let row = sqlx::query("SELECT slug, parents, children FROM control_hierarchies WHERE slug = ?")
		.bind(slug.to_string())
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let Some(row) = row else {
		return Ok(None);
	};

	let parents: String = row.get("parents");
	let children: String = row.get("children");
	Ok(Some(ControlHierarchy {
		slug,
		control_set: members(db, slug).await?,
		parents: parse_str_list(&parents),
		children: parse_str_list(&children),
	}))
}

pub(crate) async fn list(db: &SqlitePool) -> ChResult<Vec<ControlHierarchy>> {
	let rows = sqlx::query("SELECT slug, parents, children FROM control_hierarchies")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let mut hierarchies = Vec::with_capacity(rows.len());
	for row in &rows {
		let slug_str: String = row.get("slug");
		let slug = parse_slug(&slug_str)?;
		let parents: String = row.get("parents");
		let children: String = row.get("children");
		hierarchies.push(ControlHierarchy {
			slug,
			control_set: members(db, slug).await?,
			parents: parse_str_list(&parents),
			children: parse_str_list(&children),
		});
	}
	Ok(hierarchies)
}

pub(crate) async fn set_links(
	db: &SqlitePool,
	slug: Uuid,
	parents: &[Box<str>],
	children: &[Box<str>],
) -> ChResult<()> {
	let res = sqlx::query("UPDATE control_hierarchies SET parents = ?, children = ? WHERE slug = ?")
		.bind(join_str_list(parents))
		.bind(join_str_list(children))
		.bind(slug.to_string())
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

pub(crate) async fn add_members(
	db: &SqlitePool,
	slug: Uuid,
	entries: &[ControlSetReference],
) -> ChResult<()> {
	for entry in entries {
		sqlx::query(
			"INSERT INTO hierarchy_members (slug, name, reference_id) VALUES (?, ?, ?)
			ON CONFLICT(slug, name) DO UPDATE SET reference_id = excluded.reference_id",
		)
		.bind(slug.to_string())
		.bind(entry.name.as_ref())
		.bind(entry.reference_id.as_deref())
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	}
	Ok(())
}

pub(crate) async fn remove_member(
	db: &SqlitePool,
	slug: Uuid,
	reference_id: &str,
) -> ChResult<()> {
	sqlx::query("DELETE FROM hierarchy_members WHERE slug = ? AND reference_id IS ?")
		.bind(slug.to_string())
		.bind(reference_id)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

pub(crate) async fn remove_members_named(db: &SqlitePool, name: &str) -> ChResult<u64> {
	let res = sqlx::query("DELETE FROM hierarchy_members WHERE name = ?")
		.bind(name)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

// vim: ts=4

//! Control set row storage

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};
use uuid::Uuid;

use controlhub::prelude::*;
use controlhub::store_adapter::UpdateControlSetData;

use crate::{inspect, map_insert_err, parse_slug};

fn from_row(row: &SqliteRow) -> ChResult<ControlSet> {
	let slug: String = row.get("slug");
	Ok(ControlSet {
		slug: parse_slug(&slug)?,
		name: row.get("name"),
		hierarchy_depth: row.get::<i64, _>("hierarchy_depth") as u32,
	})
}

pub(crate) async fn create(db: &SqlitePool, set: &ControlSet) -> ChResult<()> {
	sqlx::query("INSERT INTO control_sets (slug, name, hierarchy_depth) VALUES (?, ?, ?)")
		.bind(set.slug.to_string())
		.bind(set.name.as_ref())
		.bind(i64::from(set.hierarchy_depth))
		.execute(db)
		.await
		.map_err(map_insert_err)?;

	Ok(())
}

pub(crate) async fn read(db: &SqlitePool, name: &str) -> ChResult<Option<ControlSet>> {
	let row = sqlx::query("SELECT slug, name, hierarchy_depth FROM control_sets WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	row.map(|r| from_row(&r)).transpose()
}

pub(crate) async fn read_by_slug(db: &SqlitePool, slug: Uuid) -> ChResult<Option<ControlSet>> {
	let row = sqlx::query("SELECT slug, name, hierarchy_depth FROM control_sets WHERE slug = ?")
		.bind(slug.to_string())
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	row.map(|r| from_row(&r)).transpose()
}

pub(crate) async fn list(db: &SqlitePool) -> ChResult<Vec<ControlSet>> {
	let rows = sqlx::query("SELECT slug, name, hierarchy_depth FROM control_sets ORDER BY name")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	rows.iter().map(from_row).collect()
}

pub(crate) async fn update(
	db: &SqlitePool,
	name: &str,
	data: &UpdateControlSetData,
) -> ChResult<()> {
	if data.name.is_none() && data.hierarchy_depth.is_none() {
		return Ok(());
	}

	let mut query = sqlx::QueryBuilder::new("UPDATE control_sets SET name = name");
	if let Some(ref new_name) = data.name {
		query.push(", name = ");
		query.push_bind(new_name.as_ref());
	}
	if let Some(depth) = data.hierarchy_depth {
		query.push(", hierarchy_depth = ");
		query.push_bind(i64::from(depth));
	}
	query.push(" WHERE name = ");
	query.push_bind(name);

	let res = query.build().execute(db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

pub(crate) async fn delete(db: &SqlitePool, name: &str) -> ChResult<()> {
	sqlx::query("DELETE FROM control_sets WHERE name = ?")
		.bind(name)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4

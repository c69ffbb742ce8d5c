//! Control row storage

use sqlx::{Row, SqlitePool};

use controlhub::prelude::*;
use controlhub::store_adapter::UpdateControlData;

use crate::{inspect, map_insert_err};

pub(crate) async fn create(db: &SqlitePool, control: &Control) -> ChResult<()> {
	sqlx::query("INSERT INTO controls (name, description) VALUES (?, ?)")
		.bind(control.name.as_ref())
		.bind(control.description.as_ref())
		.execute(db)
		.await
		.map_err(map_insert_err)?;

	Ok(())
}

pub(crate) async fn read(db: &SqlitePool, name: &str) -> ChResult<Option<Control>> {
	let row = sqlx::query("SELECT name, description FROM controls WHERE name = ?")
		.bind(name)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(row.map(|r| Control { name: r.get("name"), description: r.get("description") }))
}

pub(crate) async fn list(db: &SqlitePool) -> ChResult<Vec<Control>> {
	let rows = sqlx::query("SELECT name, description FROM controls ORDER BY name")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(rows
		.iter()
		.map(|r| Control { name: r.get("name"), description: r.get("description") })
		.collect())
}

pub(crate) async fn update(
	db: &SqlitePool,
	name: &str,
	data: &UpdateControlData,
) -> ChResult<()> {
	if data.name.is_none() && data.description.is_none() {
		return Ok(());
	}

	let mut query = sqlx::QueryBuilder::new("UPDATE controls SET name = name");
	if let Some(ref new_name) = data.name {
		query.push(", name = ");
		query.push_bind(new_name.as_ref());
	}
	if let Some(ref description) = data.description {
		query.push(", description = ");
		query.push_bind(description.as_ref());
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
	sqlx::query("DELETE FROM controls WHERE name = ?")
		.bind(name)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4

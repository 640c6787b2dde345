//! Power use cases: list, get, create, update description, delete.

use crate::domain::{validate_description, validate_required_text, Violation};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use rusqlite::{params, OptionalExtension};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerDto {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct PowerCreateReq {
    pub name: String,
    pub description: String,
}

/// Partial update. `description` is kept as raw JSON so that an explicit
/// `null` or a non-string value is rejected instead of ignored.
#[derive(Debug, Default)]
pub struct PowerUpdateReq {
    pub description: Option<Value>,
}

impl PowerUpdateReq {
    pub fn with_description(text: impl Into<String>) -> Self {
        Self {
            description: Some(Value::String(text.into())),
        }
    }
}

pub(crate) fn load_power(conn: &rusqlite::Connection, id: i64) -> Result<Option<PowerDto>, AppError> {
    let power = conn
        .query_row(
            "SELECT id, name, description FROM powers WHERE id = ?1",
            [id],
            |r| {
                Ok(PowerDto {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    description: r.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(power)
}

pub fn power_list(pool: &DbPool) -> Result<Vec<PowerDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare("SELECT id, name, description FROM powers ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok(PowerDto {
            id: r.get(0)?,
            name: r.get(1)?,
            description: r.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn power_get(pool: &DbPool, id: i64) -> Result<PowerDto, AppError> {
    let conn = get_connection(pool);
    load_power(&conn, id)?.ok_or_else(AppError::power_not_found)
}

pub fn power_create(pool: &DbPool, req: PowerCreateReq) -> Result<PowerDto, AppError> {
    let name = validate_required_text("name", Some(req.name.as_str()))?;
    let description = validate_description(Some(req.description.as_str()))?;

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO powers (name, description) VALUES (?1, ?2)",
        params![name, description],
    )?;
    let id = conn.last_insert_rowid();
    log::info!("Created power {} ({})", id, name);

    Ok(PowerDto {
        id,
        name: name.to_string(),
        description: description.to_string(),
    })
}

/// Applies the requested description and re-validates the record.
/// An absent description leaves the stored one in place.
pub fn power_update(pool: &DbPool, id: i64, req: PowerUpdateReq) -> Result<PowerDto, AppError> {
    let conn = get_connection(pool);
    let tx = conn.unchecked_transaction()?;

    let mut power = load_power(&tx, id)?.ok_or_else(AppError::power_not_found)?;

    match req.description {
        None => {}
        Some(Value::String(text)) => power.description = text,
        Some(_) => {
            log::warn!("Rejected update of power {}: description is not a string", id);
            return Err(Violation::WrongType("description").into());
        }
    }

    if let Err(v) = validate_description(Some(power.description.as_str())) {
        log::warn!("Rejected update of power {}: {}", id, v);
        return Err(v.into());
    }

    tx.execute(
        "UPDATE powers SET description = ?1 WHERE id = ?2",
        params![&power.description, id],
    )?;
    tx.commit()?;
    log::info!("Updated description of power {}", id);

    Ok(power)
}

/// Deletes a power; its hero_powers go with it through the foreign key.
pub fn power_delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let conn = get_connection(pool);
    let changed = conn.execute("DELETE FROM powers WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::power_not_found());
    }
    log::info!("Deleted power {}", id);
    Ok(())
}

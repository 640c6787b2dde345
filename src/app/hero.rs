//! Hero use cases: list, get with powers, create, delete.

use super::power::PowerDto;
use crate::domain::validate_required_text;
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use rusqlite::{params, OptionalExtension};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroDto {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

#[derive(Debug, Serialize)]
pub struct HeroDetailDto {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPowerDto>,
}

/// Nested entry in a hero's detail view.
#[derive(Debug, Serialize)]
pub struct HeroPowerWithPowerDto {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: String,
    pub power: PowerDto,
}

#[derive(Debug)]
pub struct HeroCreateReq {
    pub name: String,
    pub super_name: String,
}

pub(crate) fn load_hero(conn: &rusqlite::Connection, id: i64) -> Result<Option<HeroDto>, AppError> {
    let hero = conn
        .query_row(
            "SELECT id, name, super_name FROM heroes WHERE id = ?1",
            [id],
            |r| {
                Ok(HeroDto {
                    id: r.get(0)?,
                    name: r.get(1)?,
                    super_name: r.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(hero)
}

pub fn hero_list(pool: &DbPool) -> Result<Vec<HeroDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare("SELECT id, name, super_name FROM heroes ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok(HeroDto {
            id: r.get(0)?,
            name: r.get(1)?,
            super_name: r.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn hero_get(pool: &DbPool, id: i64) -> Result<HeroDetailDto, AppError> {
    let conn = get_connection(pool);
    let hero = load_hero(&conn, id)?.ok_or_else(AppError::hero_not_found)?;

    let mut stmt = conn.prepare(
        "SELECT hp.id, hp.hero_id, hp.power_id, hp.strength, p.id, p.name, p.description \
         FROM hero_powers hp \
         JOIN powers p ON p.id = hp.power_id \
         WHERE hp.hero_id = ?1 \
         ORDER BY hp.id",
    )?;
    let rows = stmt.query_map([id], |r| {
        Ok(HeroPowerWithPowerDto {
            id: r.get(0)?,
            hero_id: r.get(1)?,
            power_id: r.get(2)?,
            strength: r.get(3)?,
            power: PowerDto {
                id: r.get(4)?,
                name: r.get(5)?,
                description: r.get(6)?,
            },
        })
    })?;
    let mut hero_powers = Vec::new();
    for r in rows {
        hero_powers.push(r?);
    }

    Ok(HeroDetailDto {
        id: hero.id,
        name: hero.name,
        super_name: hero.super_name,
        hero_powers,
    })
}

pub fn hero_create(pool: &DbPool, req: HeroCreateReq) -> Result<HeroDto, AppError> {
    let name = validate_required_text("name", Some(req.name.as_str()))?;
    let super_name = validate_required_text("super_name", Some(req.super_name.as_str()))?;

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO heroes (name, super_name) VALUES (?1, ?2)",
        params![name, super_name],
    )?;
    let id = conn.last_insert_rowid();
    log::info!("Created hero {} ({})", id, super_name);

    Ok(HeroDto {
        id,
        name: name.to_string(),
        super_name: super_name.to_string(),
    })
}

/// Deletes a hero; its hero_powers go with it through the foreign key.
pub fn hero_delete(pool: &DbPool, id: i64) -> Result<(), AppError> {
    let conn = get_connection(pool);
    let changed = conn.execute("DELETE FROM heroes WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::hero_not_found());
    }
    log::info!("Deleted hero {}", id);
    Ok(())
}

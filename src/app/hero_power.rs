//! Hero-power use case: link a hero to a power with a strength rating.

use super::hero::{load_hero, HeroDto};
use super::power::{load_power, PowerDto};
use crate::domain::{validate_strength, Strength, Violation};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use rusqlite::params;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct HeroPowerDto {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub hero: HeroDto,
    pub power: PowerDto,
}

/// Raw JSON fields, checked together so every problem is reported at once.
#[derive(Debug, Default)]
pub struct HeroPowerCreateReq {
    pub hero_id: Option<Value>,
    pub power_id: Option<Value>,
    pub strength: Option<Value>,
}

impl HeroPowerCreateReq {
    pub fn new(hero_id: i64, power_id: i64, strength: &str) -> Self {
        Self {
            hero_id: Some(hero_id.into()),
            power_id: Some(power_id.into()),
            strength: Some(strength.into()),
        }
    }
}

/// Integer ids, or floats with no fractional part (`1.0` names row 1).
fn parse_id(field: &'static str, value: Option<&Value>) -> Result<i64, Violation> {
    match value {
        None | Some(Value::Null) => Err(Violation::Required(field)),
        Some(v) => v
            .as_i64()
            .or_else(|| {
                v.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .ok_or(Violation::WrongType(field)),
    }
}

fn parse_strength(value: Option<&Value>) -> Result<Strength, Violation> {
    match value {
        None | Some(Value::Null) => validate_strength(None),
        Some(Value::String(s)) => validate_strength(Some(s.as_str())),
        Some(_) => Err(Violation::WrongType("strength")),
    }
}

pub fn hero_power_create(pool: &DbPool, req: HeroPowerCreateReq) -> Result<HeroPowerDto, AppError> {
    let conn = get_connection(pool);
    let tx = conn.unchecked_transaction()?;
    let mut violations = Vec::new();

    let hero = match parse_id("hero_id", req.hero_id.as_ref()) {
        Ok(id) => {
            let hero = load_hero(&tx, id)?;
            if hero.is_none() {
                violations.push(Violation::UnknownHero(id));
            }
            hero
        }
        Err(v) => {
            violations.push(v);
            None
        }
    };

    let power = match parse_id("power_id", req.power_id.as_ref()) {
        Ok(id) => {
            let power = load_power(&tx, id)?;
            if power.is_none() {
                violations.push(Violation::UnknownPower(id));
            }
            power
        }
        Err(v) => {
            violations.push(v);
            None
        }
    };

    let strength = match parse_strength(req.strength.as_ref()) {
        Ok(s) => Some(s),
        Err(v) => {
            violations.push(v);
            None
        }
    };

    let (Some(hero), Some(power), Some(strength)) = (hero, power, strength) else {
        let err = AppError::Validation(violations);
        log::warn!("Rejected hero_power: {}", err);
        return Err(err);
    };

    tx.execute(
        "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?1, ?2, ?3)",
        params![strength.as_str(), hero.id, power.id],
    )?;
    let id = tx.last_insert_rowid();
    tx.commit()?;
    log::info!(
        "Linked hero {} to power {} as {} (hero_power {})",
        hero.id,
        power.id,
        strength,
        id
    );

    Ok(HeroPowerDto {
        id,
        hero_id: hero.id,
        power_id: power.id,
        strength,
        hero,
        power,
    })
}

//! Sample roster for local development.

use crate::domain::{validate_description, Strength};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};
use rusqlite::params;
use serde::Serialize;

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    ("flight", "gives the wielder the ability to fly through the skies at supersonic speed"),
    ("super human senses", "allows the wielder to use her senses at a super-human level"),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

/// (hero index, power index, strength), indexes into the tables above.
const LINKS: &[(usize, usize, Strength)] = &[
    (0, 3, Strength::Strong),
    (0, 1, Strength::Average),
    (1, 0, Strength::Average),
    (2, 2, Strength::Strong),
    (3, 1, Strength::Weak),
    (4, 2, Strength::Average),
    (5, 0, Strength::Strong),
    (5, 1, Strength::Strong),
    (6, 2, Strength::Weak),
    (7, 1, Strength::Strong),
    (8, 2, Strength::Average),
    (9, 0, Strength::Weak),
];

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub heroes: usize,
    pub powers: usize,
    pub hero_powers: usize,
}

/// Inserts the sample roster in one transaction. Without `reset`, a
/// database that already has heroes is left untouched.
pub fn seed_sample_data(pool: &DbPool, reset: bool) -> Result<SeedReport, AppError> {
    let conn = get_connection(pool);
    let tx = conn.unchecked_transaction()?;

    if reset {
        // Children first so the order does not depend on cascade.
        tx.execute("DELETE FROM hero_powers", [])?;
        tx.execute("DELETE FROM heroes", [])?;
        tx.execute("DELETE FROM powers", [])?;
        log::info!("Cleared heroes, powers and hero_powers");
    } else {
        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM heroes", [], |r| r.get(0))?;
        if existing > 0 {
            log::info!("Skipping seed: {} heroes already present", existing);
            return Ok(SeedReport::default());
        }
    }

    let mut hero_ids = Vec::with_capacity(HEROES.len());
    for &(name, super_name) in HEROES {
        tx.execute(
            "INSERT INTO heroes (name, super_name) VALUES (?1, ?2)",
            params![name, super_name],
        )?;
        hero_ids.push(tx.last_insert_rowid());
    }

    let mut power_ids = Vec::with_capacity(POWERS.len());
    for &(name, description) in POWERS {
        validate_description(Some(description))?;
        tx.execute(
            "INSERT INTO powers (name, description) VALUES (?1, ?2)",
            params![name, description],
        )?;
        power_ids.push(tx.last_insert_rowid());
    }

    for &(hero, power, strength) in LINKS {
        tx.execute(
            "INSERT INTO hero_powers (strength, hero_id, power_id) VALUES (?1, ?2, ?3)",
            params![strength.as_str(), hero_ids[hero], power_ids[power]],
        )?;
    }

    tx.commit()?;
    let report = SeedReport {
        heroes: hero_ids.len(),
        powers: power_ids.len(),
        hero_powers: LINKS.len(),
    };
    log::info!(
        "Seeded {} heroes, {} powers, {} hero_powers",
        report.heroes,
        report.powers,
        report.hero_powers
    );
    Ok(report)
}

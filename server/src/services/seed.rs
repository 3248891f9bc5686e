//! Demo scheduling data for local development.
//!
//! SYSTEM CONTEXT
//! ==============
//! A fresh database has the schema but nothing to schedule against.
//! When `SEED_DEMO_DATA` is enabled, startup populates a realistic
//! roster: hospitals with working hours, staff (doctors included) at
//! each one, and a pool of patients. Runs once; a populated hospitals
//! table skips the whole pass.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use rand::Rng;
use sqlx::{PgPool, Row};

const HOSPITAL_COUNT: usize = 10;
const DOCTORS_PER_HOSPITAL: usize = 10;
const STAFF_PER_HOSPITAL: usize = 20;
const PATIENT_COUNT: usize = 200;

const GIVEN_NAMES: &[&str] = &[
    "Ada", "Bruno", "Carmen", "Dmitri", "Elena", "Farid", "Grace", "Hugo", "Imani", "Jonas",
    "Keiko", "Lucia", "Mateo", "Nadia", "Omar", "Priya", "Quentin", "Rosa", "Samuel", "Tessa",
    "Uriel", "Vera", "Wendell", "Ximena", "Yusuf", "Zofia",
];

const SURNAMES: &[&str] = &[
    "Abbott", "Becker", "Castillo", "Dunn", "Eriksen", "Fournier", "Garber", "Hollis", "Ibarra",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak", "Okafor", "Petrov", "Quispe", "Rahman",
    "Sandoval", "Tanaka", "Ueda", "Vance", "Whitaker", "Yamada", "Zhou",
];

const HOSPITAL_PREFIXES: &[&str] = &[
    "Cedar Grove", "Riverbend", "Northgate", "Lakeside", "Summit", "Harborview", "Crestwood",
    "Oak Valley", "Stonebridge", "Meadowbrook", "Eastfield", "Pinehurst",
];

const STREETS: &[&str] = &[
    "Alder Street", "Birch Avenue", "Cypress Lane", "Douglas Road", "Elm Court", "Foster Way",
    "Granite Boulevard", "Holly Drive", "Ivy Terrace", "Juniper Place",
];

const CITIES: &[&str] = &[
    "Ashford", "Brunswick", "Clayton", "Dunmore", "Eastport", "Fairhaven", "Glenview",
    "Hartwell", "Ironton", "Jasper",
];

const TIMEZONES: &[&str] = &[
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Phoenix",
    "Europe/London",
    "Europe/Berlin",
    "Asia/Tokyo",
];

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

fn person_name(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(rng, GIVEN_NAMES), pick(rng, SURNAMES))
}

fn hospital_name(rng: &mut impl Rng) -> String {
    format!("{} Hospital", pick(rng, HOSPITAL_PREFIXES))
}

fn street_address(rng: &mut impl Rng) -> String {
    format!(
        "{} {}, {}",
        rng.random_range(1..=999),
        pick(rng, STREETS),
        pick(rng, CITIES)
    )
}

/// Opening hours as whole hours: open between 6 and 9, close between
/// 17 and 22.
fn opening_hours(rng: &mut impl Rng) -> (i32, i32) {
    (rng.random_range(6..=9), rng.random_range(17..=22))
}

async fn insert_hospital(pool: &PgPool, rng: &mut impl Rng) -> Result<i64, sqlx::Error> {
    let (open, close) = opening_hours(rng);
    let row = sqlx::query(
        "INSERT INTO hospitals (name, address, timezone, open_time, close_time)
         VALUES ($1, $2, $3, make_time($4, 0, 0), make_time($5, 0, 0))
         RETURNING id",
    )
    .bind(hospital_name(rng))
    .bind(street_address(rng))
    .bind(pick(rng, TIMEZONES))
    .bind(open)
    .bind(close)
    .fetch_one(pool)
    .await?;

    Ok(row.get("id"))
}

async fn insert_staff(
    pool: &PgPool,
    rng: &mut impl Rng,
    hospital_id: i64,
    is_doctor: bool,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO staff (name, hospital_id, is_doctor) VALUES ($1, $2, $3)")
        .bind(person_name(rng))
        .bind(hospital_id)
        .bind(is_doctor)
        .execute(pool)
        .await?;
    Ok(())
}

/// Populate the scheduling tables with demo data: 10 hospitals, 10
/// doctors and 20 other staff at each, and 200 patients. Skips entirely
/// when any hospital already exists.
pub async fn seed_demo_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM hospitals) AS populated")
        .fetch_one(pool)
        .await?;
    if row.get::<bool, _>("populated") {
        tracing::info!("scheduling data already present, skipping seed");
        return Ok(());
    }

    let mut rng = rand::rng();

    for _ in 0..HOSPITAL_COUNT {
        let hospital_id = insert_hospital(pool, &mut rng).await?;
        for _ in 0..DOCTORS_PER_HOSPITAL {
            insert_staff(pool, &mut rng, hospital_id, true).await?;
        }
        for _ in 0..STAFF_PER_HOSPITAL {
            insert_staff(pool, &mut rng, hospital_id, false).await?;
        }
    }

    for _ in 0..PATIENT_COUNT {
        sqlx::query("INSERT INTO patients (name) VALUES ($1)")
            .bind(person_name(&mut rng))
            .execute(pool)
            .await?;
    }

    tracing::info!(
        hospitals = HOSPITAL_COUNT,
        staff = HOSPITAL_COUNT * (DOCTORS_PER_HOSPITAL + STAFF_PER_HOSPITAL),
        patients = PATIENT_COUNT,
        "demo scheduling data seeded"
    );
    Ok(())
}

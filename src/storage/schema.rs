//! Quote store schema and seed data.

use rusqlite::Connection;

use crate::generate_id;

/// The three canonical quote rows seeded at bootstrap.
pub const SEED_QUOTES: [(&str, &str); 3] = [
    (
        "Duke Leto Atreides",
        "Without change, something sleeps inside us, and seldom awakens.",
    ),
    (
        "Princess Irulan",
        "What do you despise? By this are you truly known.",
    ),
    (
        "Paul Atreides",
        "Fear is the mind-killer. Fear is the little-death that brings total obliteration.",
    ),
];

/// Apply connection pragmas.
///
/// WAL mode allows the read pool to operate while a bootstrap write is in
/// flight.
pub fn apply_pragmas(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;
    Ok(())
}

/// Create the quote table if it does not exist.
pub fn initialize_schema(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS dune_quote (
            id    TEXT PRIMARY KEY,
            name  TEXT NOT NULL,
            quote TEXT NOT NULL
        )
        "#,
        [],
    )?;
    Ok(())
}

/// Seed the canonical quote rows.
///
/// Idempotent: rows are only inserted when the table is empty, so repeated
/// bootstraps never duplicate data. Returns the number of rows inserted.
pub fn seed_quotes(conn: &Connection) -> Result<usize, rusqlite::Error> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM dune_quote", [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for (name, quote) in SEED_QUOTES {
        conn.execute(
            "INSERT INTO dune_quote (id, name, quote) VALUES (?1, ?2, ?3)",
            rusqlite::params![generate_id(), name, quote],
        )?;
        inserted += 1;
    }
    Ok(inserted)
}

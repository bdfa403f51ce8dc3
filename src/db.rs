//! SQLite store for the exported collection.

use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;

use crate::classify::Category;
use crate::record::Competition;

const DB_PATH: &str = "data/competitions.sqlite";

pub fn connect() -> Result<Connection> {
    if let Some(dir) = Path::new(DB_PATH).parent() {
        std::fs::create_dir_all(dir)?;
    }
    let conn = Connection::open(DB_PATH)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS competitions (
            id          INTEGER PRIMARY KEY,
            title       TEXT NOT NULL,
            category    TEXT NOT NULL,
            eligibility TEXT,
            deadline    TEXT,
            link        TEXT UNIQUE NOT NULL,
            description TEXT,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE INDEX IF NOT EXISTS idx_competitions_category ON competitions(category);
        ",
    )?;
    Ok(())
}

/// Replace the stored collection with this run's records, atomically: the
/// delete and every insert commit as one transaction.
pub fn replace_all(conn: &Connection, records: &[Competition]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM competitions", [])?;
    let mut count = 0;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO competitions (title, category, eligibility, deadline, link, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for r in records {
            count += stmt.execute(rusqlite::params![
                r.title,
                r.category.as_str(),
                r.eligibility,
                r.deadline,
                r.link,
                r.description,
            ])?;
        }
    }
    tx.commit()?;
    Ok(count)
}

/// All stored records in insertion order.
pub fn fetch_all(conn: &Connection) -> Result<Vec<Competition>> {
    let mut stmt = conn.prepare(
        "SELECT title, category, eligibility, deadline, link, description
         FROM competitions ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        let label: String = row.get(1)?;
        Ok(Competition {
            title: row.get(0)?,
            category: Category::parse(&label).unwrap_or(Category::Other),
            eligibility: row.get(2)?,
            deadline: row.get(3)?,
            link: row.get(4)?,
            description: row.get(5)?,
        })
    })?;
    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }
    Ok(records)
}

pub struct Stats {
    pub total: usize,
    pub with_deadline: usize,
    pub with_description: usize,
    pub by_category: Vec<(String, usize)>,
}

pub fn get_stats(conn: &Connection) -> Result<Stats> {
    let count = |sql: &str| -> Result<usize> {
        let n: i64 = conn.query_row(sql, [], |r| r.get(0))?;
        Ok(n as usize)
    };
    let total = count("SELECT COUNT(*) FROM competitions")?;
    let with_deadline = count("SELECT COUNT(*) FROM competitions WHERE deadline IS NOT NULL")?;
    let with_description =
        count("SELECT COUNT(*) FROM competitions WHERE description IS NOT NULL")?;

    let mut stmt = conn.prepare(
        "SELECT category, COUNT(*) FROM competitions
         GROUP BY category ORDER BY COUNT(*) DESC, category",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;
    let mut by_category = Vec::new();
    for row in rows {
        let (category, n) = row?;
        by_category.push((category, n as usize));
    }

    Ok(Stats {
        total,
        with_deadline,
        with_description,
        by_category,
    })
}

// ── Tests ──

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use tracing::{info, warn};

use crate::app::{HarvestError, Result};
use crate::domain::{StoredTrack, Track};
use crate::store::{Store, DEFAULT_TABLE};

/// Columns every track table must carry, in creation order.
///
/// Definitions must be valid for `ALTER TABLE ... ADD COLUMN`, so nothing
/// here may use a non-constant default or a UNIQUE constraint.
const TRACK_COLUMNS: &[(&str, &str)] = &[
    ("artist", "TEXT"),
    ("title", "TEXT"),
    ("track_url", "TEXT"),
    ("audio_url", "TEXT"),
    ("plays", "INTEGER DEFAULT 0"),
    ("explicit", "INTEGER DEFAULT 0"),
    ("file_path", "TEXT"),
    ("styles_preview", "TEXT"),
    ("styles_full", "TEXT"),
    ("created_at", "TIMESTAMP"),
];

const SELECT_COLUMNS: &str = "id, artist, title, track_url, audio_url, plays, explicit, \
                              file_path, styles_preview, styles_full, created_at";

pub struct SqliteStore {
    conn: Mutex<Connection>,
    table: String,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_table(path, DEFAULT_TABLE)
    }

    pub fn with_table<P: AsRef<Path>>(path: P, table: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn, table)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?, DEFAULT_TABLE)
    }

    fn from_connection(conn: Connection, table: &str) -> Result<Self> {
        validate_table_name(table)?;
        let store = Self {
            conn: Mutex::new(conn),
            table: table.to_string(),
        };
        store.ensure_schema()?;
        Ok(store)
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| HarvestError::Other(format!("Database lock poisoned: {}", e)))
    }

    fn existing_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
        let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            // SQLite's CURRENT_TIMESTAMP format, used by databases created elsewhere
            .or_else(|| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
    }

    fn row_to_track(row: &Row<'_>) -> rusqlite::Result<StoredTrack> {
        Ok(StoredTrack {
            id: row.get(0)?,
            track: Track {
                artist: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                title: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                track_url: row.get(3)?,
                audio_url: row.get(4)?,
                plays: row.get::<_, Option<i64>>(5)?.unwrap_or(0).max(0) as u64,
                explicit: row.get::<_, Option<i64>>(6)?.unwrap_or(0) != 0,
                file_path: row.get(7)?,
                styles_preview: row.get(8)?,
                styles_full: row.get(9)?,
            },
            created_at: row
                .get::<_, Option<String>>(10)?
                .and_then(|s| Self::parse_datetime(&s)),
        })
    }
}

fn validate_table_name(table: &str) -> Result<()> {
    let mut chars = table.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(HarvestError::Config(format!("Invalid table name: {:?}", table)))
    }
}

fn classify_insert_error(err: rusqlite::Error, track_url: &str) -> HarvestError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            HarvestError::DuplicateKey(track_url.to_string())
        }
        _ => HarvestError::Database(err),
    }
}

impl Store for SqliteStore {
    fn ensure_schema(&self) -> Result<Vec<String>> {
        let conn = self.conn()?;

        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                artist TEXT,
                title TEXT,
                track_url TEXT UNIQUE,
                audio_url TEXT,
                plays INTEGER DEFAULT 0,
                explicit INTEGER DEFAULT 0,
                file_path TEXT,
                styles_preview TEXT,
                styles_full TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            );",
            table = self.table
        ))?;

        let existing = Self::existing_columns(&conn, &self.table)?;
        let mut added = Vec::new();

        for (name, definition) in TRACK_COLUMNS {
            if existing.iter().any(|c| c.eq_ignore_ascii_case(name)) {
                continue;
            }

            conn.execute(
                &format!(
                    "ALTER TABLE {} ADD COLUMN {} {}",
                    self.table, name, definition
                ),
                [],
            )?;
            info!(table = %self.table, column = name, "Added missing column");
            added.push(name.to_string());
        }

        if added.iter().any(|c| c == "track_url") {
            warn!(table = %self.table, "track_url was missing; adding unique index");
            conn.execute(
                &format!(
                    "CREATE UNIQUE INDEX IF NOT EXISTS idx_{table}_track_url ON {table} (track_url)",
                    table = self.table
                ),
                [],
            )?;
        }

        Ok(added)
    }

    fn exists(&self, track_url: &str) -> Result<bool> {
        let conn = self.conn()?;

        let found = conn
            .query_row(
                &format!("SELECT 1 FROM {} WHERE track_url = ?1 LIMIT 1", self.table),
                params![track_url],
                |_| Ok(()),
            )
            .optional()?;

        Ok(found.is_some())
    }

    fn insert(&self, track: &Track) -> Result<i64> {
        let track_url = track
            .track_url
            .as_deref()
            .ok_or(HarvestError::MissingTrackUrl)?;

        let conn = self.conn()?;

        conn.execute(
            &format!(
                "INSERT INTO {} (artist, title, track_url, audio_url, plays, explicit,
                                 file_path, styles_preview, styles_full, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                self.table
            ),
            params![
                track.artist,
                track.title,
                track_url,
                track.audio_url,
                i64::try_from(track.plays).unwrap_or(i64::MAX),
                track.explicit as i32,
                track.file_path,
                track.styles_preview,
                track.styles_full,
                Utc::now().to_rfc3339(),
            ],
        )
        .map_err(|e| classify_insert_error(e, track_url))?;

        Ok(conn.last_insert_rowid())
    }

    fn get_track(&self, track_url: &str) -> Result<Option<StoredTrack>> {
        let conn = self.conn()?;

        let result = conn
            .query_row(
                &format!(
                    "SELECT {} FROM {} WHERE track_url = ?1",
                    SELECT_COLUMNS, self.table
                ),
                params![track_url],
                Self::row_to_track,
            )
            .optional()?;

        Ok(result)
    }

    fn all_tracks(&self) -> Result<Vec<StoredTrack>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM {} ORDER BY id DESC",
            SELECT_COLUMNS, self.table
        ))?;

        let tracks = stmt
            .query_map([], Self::row_to_track)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(tracks)
    }

    fn count(&self) -> Result<i64> {
        let conn = self.conn()?;

        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", self.table),
            [],
            |row| row.get(0),
        )?;

        Ok(count)
    }
}

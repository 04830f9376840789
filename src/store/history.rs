//! Append-only SQLite history of successful lookups.

use crate::models::{HistoryRecord, WeatherResult};
use crate::store::{StoreError, StoreResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::{Connection, Row, params};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS weather_records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    city TEXT NOT NULL,
    temperature_kelvin REAL,
    temperature_celsius REAL,
    temperature_fahrenheit REAL,
    humidity INTEGER,
    wind_speed REAL,
    weather_description TEXT,
    comfort_index REAL,
    timestamp TEXT NOT NULL
)";

/// Shared handle to the history table.
///
/// Cloning is cheap; all clones share one connection behind a mutex, so
/// every insert is written as a whole row.
#[derive(Clone)]
pub struct HistoryStore {
    conn: Arc<Mutex<Connection>>,
}

impl HistoryStore {
    /// Open (or create) the database at `path` and ensure the schema exists
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        tracing::info!("History table 'weather_records' ensured");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Append one lookup, stamped with the current server time. Returns the row id.
    pub fn record(&self, result: &WeatherResult) -> StoreResult<i64> {
        self.record_at(result, Utc::now())
    }

    /// Append one lookup with an explicit timestamp
    pub fn record_at(&self, result: &WeatherResult, timestamp: DateTime<Utc>) -> StoreResult<i64> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare_cached(
            "INSERT INTO weather_records
             (city, temperature_kelvin, temperature_celsius, temperature_fahrenheit,
              humidity, wind_speed, weather_description, comfort_index, timestamp)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;

        stmt.execute(params![
            result.city_name,
            result.temp_kelvin,
            result.temp_celsius,
            result.temp_fahrenheit,
            result.humidity,
            result.wind_speed,
            result.weather_desc,
            result.comfort_index,
            timestamp.to_rfc3339(),
        ])?;

        Ok(conn.last_insert_rowid())
    }

    /// Append every result in order, stopping at the first failure.
    /// Returns how many rows were written.
    pub fn record_all<'a, I>(&self, results: I) -> StoreResult<usize>
    where
        I: IntoIterator<Item = &'a WeatherResult>,
    {
        let mut stored = 0;
        for result in results {
            self.record(result)?;
            stored += 1;
        }
        Ok(stored)
    }

    /// The `limit` most recent rows, newest first
    pub fn recent(&self, limit: usize) -> StoreResult<Vec<HistoryRecord>> {
        let conn = self.lock()?;

        let mut stmt = conn.prepare_cached(
            "SELECT id, city, temperature_kelvin, temperature_celsius, temperature_fahrenheit,
                    humidity, wind_speed, weather_description, comfort_index, timestamp
             FROM weather_records
             ORDER BY id DESC
             LIMIT ?1",
        )?;

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map([limit], map_row)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Cheap liveness check; touches no table data
    pub fn ping(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }

    /// Total number of stored rows
    pub fn count(&self) -> StoreResult<u64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM weather_records", [], |row| {
            row.get(0)
        })?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

/// Position of `timestamp` in the `recent` select list
const TIMESTAMP_COLUMN: usize = 9;

/// Rows written by this service are RFC 3339; rows stamped by SQLite's
/// `CURRENT_TIMESTAMP` are `YYYY-MM-DD HH:MM:SS` in UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn map_row(row: &Row) -> rusqlite::Result<HistoryRecord> {
    let timestamp_str: String = row.get(TIMESTAMP_COLUMN)?;
    let timestamp = parse_timestamp(&timestamp_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            TIMESTAMP_COLUMN,
            rusqlite::types::Type::Text,
            Box::new(StoreError::InvalidTimestamp(timestamp_str.clone())),
        )
    })?;

    Ok(HistoryRecord {
        id: row.get("id")?,
        timestamp,
        city: row.get("city")?,
        temperature_kelvin: row.get("temperature_kelvin")?,
        temperature_celsius: row.get("temperature_celsius")?,
        temperature_fahrenheit: row.get("temperature_fahrenheit")?,
        humidity: row.get("humidity")?,
        wind_speed: row.get("wind_speed")?,
        weather_description: row.get("weather_description")?,
        comfort_index: row.get("comfort_index")?,
    })
}

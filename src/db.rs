use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::errors::{Error, Result};
use crate::i18n::LanguageRegistry;
use crate::score::Score;

/// A published app. Referenced by ratings; must exist before one can be
/// submitted.
#[derive(Debug, Clone, Serialize)]
pub struct App {
    pub id: String,
    /// Publisher certificate, stored verbatim. Never verified here.
    pub certificate: Option<String>,
    pub registered_at: String,
}

/// One user's opinion of one app. At most one row per (app, user) pair.
#[derive(Debug, Clone, Serialize)]
pub struct Rating {
    pub id: i64,
    pub app_id: String,
    pub user_id: String,
    pub score: Score,
    pub language_code: String,
    pub comment: String,
    pub rated_at: String,
}

#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Initialize database connection and create tables
    pub fn new(database_path: &str) -> Result<Self> {
        let conn = Connection::open(database_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS apps (
                id TEXT PRIMARY KEY,
                certificate TEXT,
                registered_at TEXT NOT NULL
            )",
            [],
        )?;

        // UNIQUE(app_id, user_id) is what makes get_or_create_rating safe
        // under concurrent first-time submissions.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_ratings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                app_id TEXT NOT NULL REFERENCES apps(id),
                user_id TEXT NOT NULL,
                rating REAL NOT NULL,
                language_code TEXT NOT NULL,
                comment TEXT NOT NULL DEFAULT '',
                rated_at TEXT NOT NULL,
                UNIQUE(app_id, user_id)
            )",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Register an app or replace the certificate of an existing one.
    pub fn register_app(&self, id: &str, certificate: Option<&str>) -> Result<App> {
        let conn = self.conn.lock().unwrap();
        let now = Utc::now().to_rfc3339();

        conn.execute(
            "INSERT INTO apps (id, certificate, registered_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET certificate = excluded.certificate",
            params![id, certificate, now],
        )?;
        debug!(app_id = id, "registered app");

        Self::query_app(&conn, id)?.ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Look up an app by id.
    ///
    /// # Returns
    /// * `Ok(App)` if the app exists
    /// * `Err(Error::NotFound)` otherwise
    pub fn find_app(&self, id: &str) -> Result<App> {
        let conn = self.conn.lock().unwrap();
        Self::query_app(&conn, id)?.ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Fetch the rating for (app_id, user_id), creating it if absent.
    ///
    /// New rows take the default score, the catalog's default language and an
    /// empty comment; the caller is expected to overwrite and save. Returns
    /// the row plus whether it was created by this call.
    ///
    /// `INSERT OR IGNORE` against the unique (app_id, user_id) constraint
    /// means two racing first-time callers cannot both insert: the loser
    /// reads the winner's row.
    pub fn get_or_create_rating(&self, app_id: &str, user_id: &str) -> Result<(Rating, bool)> {
        let conn = self.conn.lock().unwrap();
        let now = Utc::now().to_rfc3339();

        let inserted = conn.execute(
            "INSERT OR IGNORE INTO app_ratings
                 (app_id, user_id, rating, language_code, comment, rated_at)
             VALUES (?1, ?2, ?3, ?4, '', ?5)",
            params![
                app_id,
                user_id,
                Score::default(),
                LanguageRegistry::get().default_language().code,
                now
            ],
        )?;

        let rating = conn.query_row(
            "SELECT id, app_id, user_id, rating, language_code, comment, rated_at
             FROM app_ratings WHERE app_id = ?1 AND user_id = ?2",
            params![app_id, user_id],
            Self::rating_from_row,
        )?;

        Ok((rating, inserted > 0))
    }

    /// Persist a rating, overwriting the row keyed by (app_id, user_id).
    ///
    /// # Returns
    /// * `Err(Error::NotFound)` if no such row exists
    pub fn save_rating(&self, rating: &Rating) -> Result<()> {
        let conn = self.conn.lock().unwrap();

        let updated = conn.execute(
            "UPDATE app_ratings
             SET rating = ?1, language_code = ?2, comment = ?3, rated_at = ?4
             WHERE app_id = ?5 AND user_id = ?6",
            params![
                rating.score,
                rating.language_code,
                rating.comment,
                rating.rated_at,
                rating.app_id,
                rating.user_id
            ],
        )?;

        if updated == 0 {
            return Err(Error::NotFound(format!(
                "rating for app '{}' by user '{}'",
                rating.app_id, rating.user_id
            )));
        }
        Ok(())
    }

    /// Get a user's rating of an app, if any.
    pub fn get_rating(&self, app_id: &str, user_id: &str) -> Result<Option<Rating>> {
        let conn = self.conn.lock().unwrap();

        let rating = conn
            .query_row(
                "SELECT id, app_id, user_id, rating, language_code, comment, rated_at
                 FROM app_ratings WHERE app_id = ?1 AND user_id = ?2",
                params![app_id, user_id],
                Self::rating_from_row,
            )
            .optional()?;

        Ok(rating)
    }

    /// List all ratings of an app, newest first.
    pub fn list_ratings(&self, app_id: &str) -> Result<Vec<Rating>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, app_id, user_id, rating, language_code, comment, rated_at
             FROM app_ratings
             WHERE app_id = ?1
             ORDER BY rated_at DESC, id DESC",
        )?;

        let ratings = stmt
            .query_map(params![app_id], Self::rating_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ratings)
    }

    /// Count the ratings of an app.
    pub fn rating_count(&self, app_id: &str) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM app_ratings WHERE app_id = ?1",
            params![app_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn query_app(conn: &Connection, id: &str) -> Result<Option<App>> {
        let app = conn
            .query_row(
                "SELECT id, certificate, registered_at FROM apps WHERE id = ?1",
                params![id],
                |row| {
                    Ok(App {
                        id: row.get(0)?,
                        certificate: row.get(1)?,
                        registered_at: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(app)
    }

    fn rating_from_row(row: &Row<'_>) -> rusqlite::Result<Rating> {
        Ok(Rating {
            id: row.get(0)?,
            app_id: row.get(1)?,
            user_id: row.get(2)?,
            score: row.get(3)?,
            language_code: row.get(4)?,
            comment: row.get(5)?,
            rated_at: row.get(6)?,
        })
    }
}

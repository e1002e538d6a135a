//! Rating submission workflow.
//!
//! Takes a raw payload (numeric score, language code, comment) plus the
//! caller-supplied identity (app id, user id), validates everything before
//! touching storage, then creates or overwrites the single rating row for
//! that (app, user) pair.

use chrono::Utc;
use tracing::{debug, info};

use crate::db::{Database, Rating};
use crate::errors::Result;
use crate::i18n::Language;
use crate::score::Score;

/// A fully validated rating payload.
///
/// Constructing one performs all input validation; a `RatingSubmission` can
/// always be persisted without further checks.
#[derive(Debug, Clone)]
pub struct RatingSubmission {
    pub score: Score,
    pub language: Language,
    pub comment: String,
}

impl RatingSubmission {
    /// Validate raw form values.
    ///
    /// # Returns
    /// * `Err(Error::Validation)` if the score is outside {0.0, 0.5, 1.0} or
    ///   the language code is not in the catalog. Nothing is persisted on
    ///   failure.
    pub fn new(score: f64, language_code: &str, comment: &str) -> Result<Self> {
        let score = Score::from_value(score)?;
        let language = Language::from_code(language_code)?;
        Ok(Self {
            score,
            language,
            comment: comment.to_string(),
        })
    }
}

/// Submit or update a user's rating of an app.
///
/// Idempotent per (app_id, user_id): the first call creates the rating row,
/// every later call overwrites score, language and comment in place. Repeated
/// calls converge to the latest submitted values and never accumulate
/// duplicate rows.
///
/// # Errors
/// * `Error::Validation` — score or language code outside the allowed sets;
///   no row is created or modified.
/// * `Error::NotFound` — `app_id` references no existing app; no row is
///   created or modified.
/// * `Error::Storage` — underlying database failure.
pub fn submit_rating(
    db: &Database,
    app_id: &str,
    user_id: &str,
    score: f64,
    language_code: &str,
    comment: &str,
) -> Result<Rating> {
    // Validate before any persistence call so failures leave no partial state.
    let submission = RatingSubmission::new(score, language_code, comment)?;
    let app = db.find_app(app_id)?;

    let (mut rating, created) = db.get_or_create_rating(&app.id, user_id)?;
    rating.score = submission.score;
    rating.language_code = submission.language.code().to_string();
    rating.comment = submission.comment;
    rating.rated_at = Utc::now().to_rfc3339();
    db.save_rating(&rating)?;

    if created {
        info!(app_id = %app.id, user_id, "created rating");
    } else {
        debug!(app_id = %app.id, user_id, "updated rating");
    }

    Ok(rating)
}

//! App-store rating backend.
//!
//! Implements the rating-submission workflow: validate a payload (enumerated
//! score, supported language code, optional comment) against a caller-supplied
//! identity (app id, user id) and persist it, with at most one rating per
//! (app, user) pair. The HTTP/form layer sits above this crate.

pub mod commands;
pub mod config;
pub mod db;
pub mod errors;
pub mod i18n;
pub mod rating;
pub mod score;

pub use db::{App, Database, Rating};
pub use errors::Error;
pub use rating::{submit_rating, RatingSubmission};
pub use score::Score;

/// Initialize logging with an env-filter, defaulting this crate to `info`.
///
/// Intended to be called once by the embedding application; returns an error
/// if a global subscriber is already set.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("appstore_ratings=info".parse()?),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

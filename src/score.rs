//! Rating score values.
//!
//! Scores come in from the form layer as raw numbers but only three values
//! are meaningful: 0.0 (Bad), 0.5 (OK) and 1.0 (Good). Everything else is a
//! validation failure, checked before any persistence call.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// A validated rating score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    Bad,
    Ok,
    Good,
}

impl Score {
    /// Parse a raw numeric score.
    ///
    /// # Returns
    /// * `Ok(Score)` for exactly 0.0, 0.5 or 1.0
    /// * `Err(Error::Validation)` for any other value (including NaN)
    pub fn from_value(value: f64) -> Result<Score, Error> {
        if value == 0.0 {
            Ok(Score::Bad)
        } else if value == 0.5 {
            Ok(Score::Ok)
        } else if value == 1.0 {
            Ok(Score::Good)
        } else {
            Err(Error::Validation(format!(
                "score {} is not one of 0.0, 0.5, 1.0",
                value
            )))
        }
    }

    /// Numeric form of the score, as it is stored.
    pub fn value(&self) -> f64 {
        match self {
            Score::Bad => 0.0,
            Score::Ok => 0.5,
            Score::Good => 1.0,
        }
    }

    /// English display label.
    pub fn label(&self) -> &'static str {
        match self {
            Score::Bad => "Bad",
            Score::Ok => "OK",
            Score::Good => "Good",
        }
    }
}

impl Default for Score {
    /// The pre-selected choice in the rating form.
    fn default() -> Self {
        Score::Ok
    }
}

impl ToSql for Score {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.value()))
    }
}

impl FromSql for Score {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = value.as_f64()?;
        Score::from_value(raw).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

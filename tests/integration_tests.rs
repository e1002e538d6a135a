//! Integration tests for the app-store rating backend.
//!
//! These exercise the full submission flow against a real temporary database:
//! registration, validation, get-or-create semantics and the uniqueness
//! invariant under concurrent first-time submissions.

use tempfile::TempDir;

use appstore_ratings::errors::Error;
use appstore_ratings::i18n::{list_language_codes, local_name};
use appstore_ratings::{commands, submit_rating, Database, Score};

// ==================== Test Helpers ====================

/// Create a database in a temp dir with one registered app.
fn create_test_store() -> (Database, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("appstore.db");
    let db = Database::new(db_path.to_str().unwrap()).expect("Failed to create database");
    db.register_app("files", Some("-----BEGIN CERTIFICATE-----"))
        .expect("Failed to register app");
    (db, temp_dir)
}

// ==================== Full Submission Flow ====================

#[test]
fn test_full_submission_flow() {
    let (db, _temp_dir) = create_test_store();

    // First submission creates the row
    let rating =
        submit_rating(&db, "files", "alice", 1.0, "en", "Works great").expect("Should submit");
    assert_eq!(rating.score, Score::Good);
    assert_eq!(rating.language_code, "en");
    assert_eq!(rating.comment, "Works great");

    // Second submission overwrites it in place
    submit_rating(&db, "files", "alice", 0.5, "de", "Geht so").expect("Should resubmit");

    let stored = db
        .get_rating("files", "alice")
        .expect("get")
        .expect("exists");
    assert_eq!(stored.score, Score::Ok);
    assert_eq!(stored.language_code, "de");
    assert_eq!(stored.comment, "Geht so");
    assert_eq!(db.rating_count("files").expect("count"), 1);
}

#[test]
fn test_every_allowed_score_persists() {
    let (db, _temp_dir) = create_test_store();

    for (value, expected) in [(0.0, Score::Bad), (0.5, Score::Ok), (1.0, Score::Good)] {
        let user = format!("user-{}", value);
        submit_rating(&db, "files", &user, value, "en", "").expect("Should submit");

        let stored = db.get_rating("files", &user).expect("get").expect("exists");
        assert_eq!(stored.score, expected);
        assert_eq!(stored.score.value(), value);
    }
}

#[test]
fn test_ratings_survive_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("appstore.db");
    let path_str = db_path.to_str().unwrap();

    {
        let db = Database::new(path_str).expect("create");
        db.register_app("files", None).expect("register");
        submit_rating(&db, "files", "alice", 1.0, "fr", "Très bien").expect("submit");
    }

    {
        let db = Database::new(path_str).expect("reopen");
        let stored = db
            .get_rating("files", "alice")
            .expect("get")
            .expect("should persist");
        assert_eq!(stored.score, Score::Good);
        assert_eq!(stored.language_code, "fr");
        assert_eq!(stored.comment, "Très bien");
    }
}

// ==================== Failure Paths ====================

#[test]
fn test_rejected_submissions_leave_no_rows() {
    let (db, _temp_dir) = create_test_store();

    assert!(matches!(
        submit_rating(&db, "files", "alice", 0.9, "en", ""),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        submit_rating(&db, "files", "alice", 0.5, "xx", ""),
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        submit_rating(&db, "missing-app", "alice", 0.5, "en", ""),
        Err(Error::NotFound(_))
    ));

    assert_eq!(db.rating_count("files").expect("count"), 0);
    assert_eq!(db.rating_count("missing-app").expect("count"), 0);
}

// ==================== Concurrency ====================

#[test]
fn test_concurrent_first_submissions_unique_row() {
    let (db, _temp_dir) = create_test_store();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let db_clone = db.clone();
            std::thread::spawn(move || {
                let score = [0.0, 0.5, 1.0][i % 3];
                submit_rating(&db_clone, "files", "alice", score, "en", "first!")
                    .expect("submit should not fail under race");
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread should complete");
    }

    assert_eq!(
        db.rating_count("files").expect("count"),
        1,
        "Concurrent first submissions must not create duplicate rows"
    );
}

// ==================== Language Catalog ====================

#[test]
fn test_language_catalog_backs_submission_validation() {
    let (db, _temp_dir) = create_test_store();

    // Every catalog code is accepted by submit_rating
    for (i, (code, _)) in list_language_codes().into_iter().enumerate() {
        let user = format!("user-{}", i);
        submit_rating(&db, "files", &user, 1.0, code, "").expect("catalog code should be valid");
    }

    // Unknown codes have no display name and are rejected
    assert!(local_name("zz").is_none());
    assert!(submit_rating(&db, "files", "zoe", 1.0, "zz", "").is_err());
}

// ==================== Operator Commands ====================

#[test]
fn test_operator_commands_are_plain_instructions() {
    // The command helpers only format strings; they must keep the APP_ID
    // placeholder for the publisher to substitute.
    for cmd in [
        commands::create_cert_cmd(),
        commands::register_sign_cmd("sha512"),
        commands::release_sign_cmd("sha512"),
    ] {
        assert!(cmd.contains("APP_ID"));
        assert!(cmd.contains("openssl"));
    }
}

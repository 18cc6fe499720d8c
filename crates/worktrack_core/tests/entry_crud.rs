use chrono::{TimeZone, Utc};
use rusqlite::Connection;
use worktrack_core::{
    DirectoryRepository, EntryRepository, OrganisationRepository, ProjectRepository, RepoError,
    SqliteDirectoryRepository, SqliteEntryRepository, SqliteOrganisationRepository,
    SqliteProjectRepository,
};

fn seeded_connection() -> Connection {
    let conn = worktrack_core::open_db_in_memory().unwrap();
    SqliteOrganisationRepository::try_new(&conn)
        .unwrap()
        .add("Acme")
        .unwrap();
    SqliteProjectRepository::try_new(&conn)
        .unwrap()
        .add("Acme", "Widgets")
        .unwrap();
    SqliteDirectoryRepository::try_new(&conn)
        .unwrap()
        .add("Acme", "Widgets", "/tmp/x")
        .unwrap();
    conn
}

#[test]
fn add_binds_the_entry_to_the_directory_project() {
    let conn = seeded_connection();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let recorded_at = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
    let entry = repo.add("/tmp/x", recorded_at).unwrap();

    assert_eq!(entry.name, "/tmp/x");
    assert_eq!(entry.recorded_at, recorded_at);
    assert_eq!(entry.project.name, "Widgets");
    assert_eq!(entry.project.organisation.name, "Acme");
}

#[test]
fn add_for_unregistered_path_fails_with_not_found() {
    let conn = seeded_connection();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let err = repo.add("/tmp/unregistered", Utc::now()).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { entity: "directory", ref name } if name == "/tmp/unregistered"
    ));
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn list_roundtrips_timestamps_and_preserves_order() {
    let conn = seeded_connection();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let first = Utc.with_ymd_and_hms(2024, 5, 17, 9, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2024, 5, 17, 10, 0, 0).unwrap();
    repo.add("/tmp/x", first).unwrap();
    repo.add("/tmp/x", second).unwrap();

    let entries = repo.list().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].recorded_at, first);
    assert_eq!(entries[1].recorded_at, second);
    assert!(entries[0].id < entries[1].id);
}

#[test]
fn list_rejects_undecodable_timestamps() {
    let conn = seeded_connection();
    conn.execute(
        "INSERT INTO entries (directory_id, entry_name, recorded_at)
         VALUES (1, '/tmp/x', 'yesterday');",
        [],
    )
    .unwrap();

    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let err = repo.list().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains("yesterday")));
}

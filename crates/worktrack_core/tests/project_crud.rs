use worktrack_core::db::open_db_in_memory;
use worktrack_core::{
    OrganisationRepository, ProjectRepository, RepoError, SqliteOrganisationRepository,
    SqliteProjectRepository,
};

#[test]
fn add_resolves_parent_and_roundtrips_through_list() {
    let conn = open_db_in_memory().unwrap();
    let organisations = SqliteOrganisationRepository::try_new(&conn).unwrap();
    let projects = SqliteProjectRepository::try_new(&conn).unwrap();

    let acme = organisations.add("Acme").unwrap();
    let widgets = projects.add("Acme", "Widgets").unwrap();
    assert_eq!(widgets.name, "Widgets");
    assert_eq!(widgets.organisation, acme);

    let listed = projects.list().unwrap();
    assert_eq!(listed, vec![widgets]);
}

#[test]
fn add_under_missing_organisation_fails_and_inserts_nothing() {
    let conn = open_db_in_memory().unwrap();
    let projects = SqliteProjectRepository::try_new(&conn).unwrap();

    let err = projects.add("Ghost", "Widgets").unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { entity: "organisation", ref name } if name == "Ghost"
    ));
    assert!(projects.list().unwrap().is_empty());
}

#[test]
fn duplicate_name_is_rejected_within_one_organisation_only() {
    let conn = open_db_in_memory().unwrap();
    let organisations = SqliteOrganisationRepository::try_new(&conn).unwrap();
    let projects = SqliteProjectRepository::try_new(&conn).unwrap();

    organisations.add("Acme").unwrap();
    organisations.add("Globex").unwrap();
    projects.add("Acme", "Widgets").unwrap();

    let err = projects.add("Acme", "Widgets").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Duplicate { entity: "project", ref name } if name == "Widgets"
    ));

    // Same name under another organisation is a different project.
    projects.add("Globex", "Widgets").unwrap();
    assert_eq!(projects.list().unwrap().len(), 2);
}

#[test]
fn delete_missing_project_or_organisation_fails_with_not_found() {
    let conn = open_db_in_memory().unwrap();
    let organisations = SqliteOrganisationRepository::try_new(&conn).unwrap();
    let projects = SqliteProjectRepository::try_new(&conn).unwrap();

    let err = projects.delete("Ghost", "Widgets").unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { entity: "organisation", .. }
    ));

    organisations.add("Acme").unwrap();
    let err = projects.delete("Acme", "Widgets").unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "project", .. }));
}

#[test]
fn delete_removes_the_project() {
    let conn = open_db_in_memory().unwrap();
    let organisations = SqliteOrganisationRepository::try_new(&conn).unwrap();
    let projects = SqliteProjectRepository::try_new(&conn).unwrap();

    organisations.add("Acme").unwrap();
    projects.add("Acme", "Widgets").unwrap();
    projects.delete("Acme", "Widgets").unwrap();
    assert!(projects.list().unwrap().is_empty());
}

#[test]
fn list_by_organisation_filters_and_validates_parent() {
    let conn = open_db_in_memory().unwrap();
    let organisations = SqliteOrganisationRepository::try_new(&conn).unwrap();
    let projects = SqliteProjectRepository::try_new(&conn).unwrap();

    organisations.add("Acme").unwrap();
    organisations.add("Globex").unwrap();
    projects.add("Acme", "Widgets").unwrap();
    projects.add("Acme", "Gears").unwrap();
    projects.add("Globex", "Hammers").unwrap();

    let acme_projects = projects.list_by_organisation("Acme").unwrap();
    let names: Vec<&str> = acme_projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Widgets", "Gears"]);

    let err = projects.list_by_organisation("Ghost").unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { entity: "organisation", .. }
    ));
}

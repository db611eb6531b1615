use notestore_core::{JsonFileNoteRepository, NoteService, NoteServiceError};
use std::path::Path;

fn service_at(path: &Path) -> NoteService<JsonFileNoteRepository> {
    NoteService::new(JsonFileNoteRepository::new(path))
}

#[test]
fn create_then_read_returns_content() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(&dir.path().join("notes.json"));

    service.create_note("Ideas", "write more tests").unwrap();
    assert_eq!(service.read_note("Ideas").unwrap(), "write more tests");
}

#[test]
fn create_existing_title_fails_and_keeps_content() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(&dir.path().join("notes.json"));
    service.create_note("Ideas", "original").unwrap();

    let err = service.create_note("Ideas", "replacement").unwrap_err();
    assert!(matches!(err, NoteServiceError::AlreadyExists(ref title) if title == "Ideas"));
    assert_eq!(service.read_note("Ideas").unwrap(), "original");
}

#[test]
fn titles_are_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(&dir.path().join("notes.json"));
    service.create_note("todo", "lower").unwrap();
    service.create_note("TODO", "upper").unwrap();

    assert_eq!(service.read_note("todo").unwrap(), "lower");
    assert_eq!(service.read_note("TODO").unwrap(), "upper");
    assert!(matches!(
        service.read_note("Todo").unwrap_err(),
        NoteServiceError::NotFound(_)
    ));
}

#[test]
fn missing_title_is_not_found_for_read_update_delete() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(&dir.path().join("notes.json"));
    service.create_note("present", "x").unwrap();

    assert!(matches!(
        service.read_note("absent").unwrap_err(),
        NoteServiceError::NotFound(ref title) if title == "absent"
    ));
    assert!(matches!(
        service.update_note("absent", "y").unwrap_err(),
        NoteServiceError::NotFound(_)
    ));
    assert!(matches!(
        service.delete_note("absent").unwrap_err(),
        NoteServiceError::NotFound(_)
    ));
    assert_eq!(service.list_notes().unwrap(), vec!["present".to_string()]);
}

#[test]
fn update_replaces_content_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(&dir.path().join("notes.json"));
    service.create_note("Plan", "step one\nstep two").unwrap();

    let updated = service.update_note("Plan", "only step").unwrap();
    assert_eq!(updated.content, "only step");
    assert_eq!(service.read_note("Plan").unwrap(), "only step");
}

#[test]
fn delete_removes_from_read_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(&dir.path().join("notes.json"));
    service.create_note("a", "1").unwrap();
    service.create_note("b", "2").unwrap();

    service.delete_note("a").unwrap();

    assert!(matches!(
        service.read_note("a").unwrap_err(),
        NoteServiceError::NotFound(_)
    ));
    assert_eq!(service.list_notes().unwrap(), vec!["b".to_string()]);
}

#[test]
fn list_on_fresh_store_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(&dir.path().join("notes.json"));

    assert!(service.list_notes().unwrap().is_empty());
    assert!(!dir.path().join("notes.json").exists());
}

#[test]
fn create_rejects_blank_title_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    let service = service_at(&path);

    let err = service.create_note("   ", "content").unwrap_err();
    assert!(matches!(err, NoteServiceError::InvalidTitle(_)));
    assert!(!path.exists());
    assert!(matches!(
        service.read_note("").unwrap_err(),
        NoteServiceError::NotFound(_)
    ));
}

#[test]
fn empty_content_is_a_valid_note() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(&dir.path().join("notes.json"));

    service.create_note("blank", "").unwrap();
    assert_eq!(service.read_note("blank").unwrap(), "");
}

#[test]
fn shopping_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_at(&dir.path().join("notes.json"));

    service.create_note("Shopping", "milk, eggs").unwrap();
    assert_eq!(service.read_note("Shopping").unwrap(), "milk, eggs");

    service
        .update_note("Shopping", "milk, eggs, bread")
        .unwrap();
    assert_eq!(service.read_note("Shopping").unwrap(), "milk, eggs, bread");

    service.delete_note("Shopping").unwrap();
    assert!(matches!(
        service.read_note("Shopping").unwrap_err(),
        NoteServiceError::NotFound(_)
    ));
    assert!(!service
        .list_notes()
        .unwrap()
        .contains(&"Shopping".to_string()));
}

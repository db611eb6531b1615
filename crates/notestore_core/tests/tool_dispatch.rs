use notestore_core::{dispatch, JsonFileNoteRepository, NoteService};
use serde_json::json;

fn service_in(dir: &tempfile::TempDir) -> NoteService<JsonFileNoteRepository> {
    NoteService::new(JsonFileNoteRepository::new(dir.path().join("notes.json")))
}

#[test]
fn shopping_flow_through_tools() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let created = dispatch(
        &service,
        "create_note",
        json!({ "title": "Shopping", "content": "milk, eggs" }),
    );
    assert!(!created.is_error);
    assert_eq!(created.text, "Successfully created note 'Shopping'");

    let read = dispatch(&service, "read_note", json!({ "title": "Shopping" }));
    assert_eq!(read.text, "Note 'Shopping':\n\nmilk, eggs");

    let updated = dispatch(
        &service,
        "update_note",
        json!({ "title": "Shopping", "content": "milk, eggs, bread" }),
    );
    assert_eq!(updated.text, "Successfully updated note 'Shopping'");

    let deleted = dispatch(&service, "delete_note", json!({ "title": "Shopping" }));
    assert_eq!(deleted.text, "Successfully deleted note 'Shopping'");

    let missing = dispatch(&service, "read_note", json!({ "title": "Shopping" }));
    assert!(missing.is_error);
    assert_eq!(missing.text, "Error: No note found with title 'Shopping'");
}

#[test]
fn list_notes_renders_empty_and_populated_listings() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let empty = dispatch(&service, "list_notes", json!({}));
    assert!(!empty.is_error);
    assert_eq!(empty.text, "No notes found. Create your first note!");

    service.create_note("beta", "2").unwrap();
    service.create_note("alpha", "1").unwrap();
    let listed = dispatch(&service, "list_notes", serde_json::Value::Null);
    assert_eq!(listed.text, "Available notes (2):\n- alpha\n- beta");
}

#[test]
fn duplicate_create_and_missing_update_point_at_the_other_tool() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);
    service.create_note("a", "1").unwrap();

    let duplicate = dispatch(&service, "create_note", json!({ "title": "a", "content": "2" }));
    assert!(duplicate.is_error);
    assert_eq!(
        duplicate.text,
        "Error: A note with title 'a' already exists. Use update_note to modify it."
    );

    let missing = dispatch(&service, "update_note", json!({ "title": "b", "content": "2" }));
    assert!(missing.is_error);
    assert_eq!(
        missing.text,
        "Error: No note found with title 'b'. Use create_note to make a new one."
    );
}

#[test]
fn unknown_tool_and_bad_arguments_are_error_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let service = service_in(&dir);

    let unknown = dispatch(&service, "rename_note", json!({}));
    assert!(unknown.is_error);
    assert_eq!(unknown.text, "Error: Unknown tool: rename_note");

    let missing_content = dispatch(&service, "create_note", json!({ "title": "a" }));
    assert!(missing_content.is_error);
    assert!(missing_content
        .text
        .starts_with("Error: Invalid arguments for create_note:"));
    assert!(missing_content.text.contains("content"));

    let wrong_type = dispatch(&service, "read_note", json!({ "title": 7 }));
    assert!(wrong_type.is_error);
    assert!(service.list_notes().unwrap().is_empty());
}

#[test]
fn storage_failures_surface_as_error_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    std::fs::write(&path, "[]").unwrap();
    let service = NoteService::new(JsonFileNoteRepository::new(&path));

    let outcome = dispatch(&service, "list_notes", json!({}));
    assert!(outcome.is_error);
    assert!(outcome.text.starts_with("Error: Notes file"));

    let other_dir = tempfile::tempdir().unwrap();
    let blank = dispatch(
        &service_in(&other_dir),
        "create_note",
        json!({ "title": "", "content": "x" }),
    );
    assert!(blank.is_error);
    assert_eq!(blank.text, "Error: Note title cannot be empty");
}

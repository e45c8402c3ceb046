//! Engine integration tests: parse → apply → persist

mod common;

use clientele_core::apply::MESSAGE_EXIT;
use clientele_core::errors::ExErrorKind;
use clientele_core::model::EntityKind;
use clientele_core::logging_facility::test_capture::init_test_capture;
use clientele_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMMAND_WORD, FIELD_ERR_CODE, FIELD_OUTCOME,
    FIELD_REQUEST_ID, OUTCOME_OK, OUTCOME_REJECTED,
};
use clientele_core_types::{RequestContext, RequestId};
use clientele_engine::logic::MESSAGE_SAVE_FAILED;
use common::{failing_logic, open_temp, read_json};

const ADD_BOB: &str = "add n/Bob Choo p/22222222 e/bob@example.com a/Block 123, Bobby Street 3 \
                       b/1990-05-20 t/friend pr/ElderShield 200";

#[test]
fn test_add_person_is_written_to_disk() {
    let (dir, mut logic) = open_temp();

    let outcome = logic.execute(ADD_BOB).unwrap();
    assert!(outcome.result.feedback.starts_with("New person added: Bob Choo"));
    assert_eq!(outcome.entity, Some(EntityKind::Person));

    let stored = read_json(dir.path(), "data/addressbook.json");
    let names: Vec<&str> = stored["persons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Bob Choo"));
    // First run starts from the sample data
    assert!(names.contains(&"Alex Yeoh"));
}

#[test]
fn test_task_commands_only_touch_task_list() {
    let (dir, mut logic) = open_temp();

    logic
        .execute("deadline submit claim by/2024-10-14 18:00")
        .unwrap();
    logic.execute("mark 1").unwrap();

    assert!(!dir.path().join("data/addressbook.json").exists());
    assert!(!dir.path().join("data/policybook.json").exists());
    let stored = read_json(dir.path(), "data/tasklist.json");
    assert_eq!(stored["tasks"][0]["type"], "deadline");
    assert_eq!(stored["tasks"][0]["done"], true);
    assert_eq!(stored["tasks"][0]["by"], "2024-10-14 18:00");
}

#[test]
fn test_reopened_session_sees_saved_data() {
    let (dir, mut logic) = open_temp();
    logic.execute("clearpolicy").unwrap();
    logic
        .execute("addpolicy pn/POL900 pname/TravelEasy pc/AIA pl/https://www.aia.com/travel")
        .unwrap();
    drop(logic);

    let reopened = clientele_engine::open(dir.path(), &clientele_store::Config::default());
    let numbers: Vec<String> = reopened
        .filtered_policies()
        .iter()
        .map(|p| p.policy_number.as_str().to_string())
        .collect();
    assert_eq!(numbers, vec!["POL900".to_string()]);
}

#[test]
fn test_unknown_command_is_rejected() {
    let (_dir, mut logic) = open_temp();
    let before = logic.model().clone();

    let err = logic.execute("frobnicate 3").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::UnknownCommand);
    assert_eq!(err.message(), "Unknown command");
    assert_eq!(*logic.model(), before);
}

#[test]
fn test_duplicate_person_is_rejected() {
    let (_dir, mut logic) = open_temp();
    logic.execute(ADD_BOB).unwrap();

    let err = logic.execute(ADD_BOB).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Duplicate);
    assert_eq!(err.message(), "This person already exists in the address book");
}

#[test]
fn test_find_narrows_filtered_view_without_saving() {
    let (dir, mut logic) = open_temp();

    let outcome = logic.execute("find alex").unwrap();
    assert_eq!(outcome.result.feedback, "1 persons listed!");
    assert_eq!(logic.filtered_persons().len(), 1);
    assert!(!dir.path().join("data/addressbook.json").exists());
}

#[test]
fn test_exit_and_help_flags() {
    let (_dir, mut logic) = open_temp();

    let help = logic.execute("help").unwrap();
    assert!(help.result.show_help);
    assert_eq!(help.entity, None);
    let exit = logic.execute("exit").unwrap();
    assert!(exit.result.exit);
    assert_eq!(exit.result.feedback, MESSAGE_EXIT);
}

#[test]
fn test_save_failure_is_reported_but_command_applied() {
    let mut logic = failing_logic();

    let err = logic.execute("todo call Alice").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert!(err.message().starts_with(MESSAGE_SAVE_FAILED));
    assert_eq!(logic.filtered_tasks().len(), 1);
}

#[test]
fn test_shutdown_writes_prefs() {
    let (dir, logic) = open_temp();
    logic.shutdown().unwrap();

    let stored = read_json(dir.path(), "preferences.json");
    assert_eq!(stored["address_book_path"], "data/addressbook.json");
}

#[test]
fn test_execute_logs_start_and_end_with_request_id() {
    let capture = init_test_capture();
    let (_dir, mut logic) = open_temp();
    let request_id = RequestId::from_string("req-engine-ok".to_string());

    logic
        .execute_with(RequestContext::with_request_id(request_id), "list")
        .unwrap();

    let events: Vec<_> = capture
        .events_for_op("execute")
        .into_iter()
        .filter(|e| e.field(FIELD_REQUEST_ID) == Some("req-engine-ok"))
        .collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field("input"), Some("***REDACTED***"));
    assert_eq!(events[1].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[1].field(FIELD_COMMAND_WORD), Some("list"));
    assert_eq!(events[1].field(FIELD_OUTCOME), Some(OUTCOME_OK));
}

#[test]
fn test_rejected_input_ends_with_error_code() {
    let capture = init_test_capture();
    let (_dir, mut logic) = open_temp();
    let request_id = RequestId::from_string("req-engine-rejected".to_string());

    logic
        .execute_with(RequestContext::with_request_id(request_id), "delete 0")
        .unwrap_err();

    let end = capture
        .events_for_op("execute")
        .into_iter()
        .find(|e| {
            e.field(FIELD_REQUEST_ID) == Some("req-engine-rejected")
                && e.event.as_deref() == Some(EVENT_END)
        })
        .expect("end event");
    assert_eq!(end.field(FIELD_OUTCOME), Some(OUTCOME_REJECTED));
    assert_eq!(end.field(FIELD_ERR_CODE), Some("ERR_INVALID_FORMAT"));
}

#[test]
fn test_save_failure_logs_error_event() {
    let capture = init_test_capture();
    let mut logic = failing_logic();
    let request_id = RequestId::from_string("req-engine-save-failed".to_string());

    logic
        .execute_with(RequestContext::with_request_id(request_id), "todo call Bob")
        .unwrap_err();

    let count = capture.count_events(|e| {
        e.field(FIELD_REQUEST_ID) == Some("req-engine-save-failed")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_PERSISTENCE")
    });
    assert_eq!(count, 1);
}

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};

use super::*;
use crate::error::ErrorInfo;
use crate::test_helpers::{Hits, client_for, signed_in, spawn_stub};
use crate::types::{Address, EntryDraft, Role};

#[derive(Clone, Default)]
struct Backend {
    hits: Hits,
    teachers_down: Arc<Mutex<bool>>,
    entries: Arc<Mutex<Vec<Value>>>,
    addresses: Arc<Mutex<Vec<Value>>>,
    address_loads: Hits,
}

async fn teachers(State(backend): State<Backend>) -> Response {
    backend.hits.bump();
    if *backend.teachers_down.lock().expect("flag lock") {
        return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "message": "Directory offline", "code": "OFFLINE" })))
            .into_response();
    }
    Json(json!([{ "id": 1, "name": "Ada", "subjects": ["Math"] }])).into_response()
}

async fn one_teacher() -> Json<Value> {
    Json(json!({ "id": 7, "name": "Grace", "subjects": ["Computing"], "experience_years": 9 }))
}

async fn me() -> Json<Value> {
    Json(json!({ "id": 1, "role": "school" }))
}

async fn questions() -> Json<Value> {
    Json(json!([{ "id": 1, "text": "2 + 2?", "options": ["3", "4"] }]))
}

async fn list_entries(State(backend): State<Backend>) -> Json<Value> {
    Json(Value::Array(backend.entries.lock().expect("entries lock").clone()))
}

async fn create_entry(State(backend): State<Backend>, Json(mut draft): Json<Value>) -> Json<Value> {
    let mut entries = backend.entries.lock().expect("entries lock");
    draft["id"] = json!(entries.len() + 1);
    entries.push(draft.clone());
    Json(draft)
}

async fn education() -> Json<Value> {
    Json(json!([{ "id": 4, "title": "PGCE", "organization": "Leeds", "start_year": 2014 }]))
}

async fn list_addresses(State(backend): State<Backend>) -> Json<Value> {
    backend.address_loads.bump();
    Json(Value::Array(backend.addresses.lock().expect("addresses lock").clone()))
}

async fn create_address(State(backend): State<Backend>, Json(mut address): Json<Value>) -> Response {
    if address["line1"].as_str().is_none_or(|line| line.trim().is_empty()) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "Line 1 is required.", "code": "INVALID" }))).into_response();
    }
    let mut addresses = backend.addresses.lock().expect("addresses lock");
    address["id"] = json!(addresses.len() + 1);
    addresses.push(address.clone());
    Json(address).into_response()
}

fn address(line1: &str) -> Address {
    Address { id: None, line1: line1.into(), line2: None, city: "York".into(), state: None, postal_code: None, country: None }
}

fn router(backend: Backend) -> Router {
    Router::new()
        .route("/api/teachers/", get(teachers))
        .route("/api/teachers/7/", get(one_teacher))
        .route("/api/self/customuser/", get(me))
        .route("/api/questions/", get(questions))
        .route("/api/self/experience/", get(list_entries).post(create_entry))
        .route("/api/self/education/", get(education))
        .route("/api/addresses/", get(list_addresses).post(create_address))
        .with_state(backend)
}

#[tokio::test]
async fn loads_land_in_their_slices() {
    let backend = Backend::default();
    let base = spawn_stub(router(backend.clone())).await;
    let api = client_for(&base, signed_in("t"));
    let store = MarketStore::new();

    assert_eq!(store.load_current_user(&api).await, Settlement::Applied);
    assert_eq!(store.load_questions(&api).await, Settlement::Applied);
    assert_eq!(store.load_teachers(&api, &TeacherQuery::default()).await, Settlement::Applied);

    assert_eq!(store.current_user.snapshot().data().and_then(|u| u.role), Some(Role::School));
    assert_eq!(store.questions.snapshot().data().map(Vec::len), Some(1));
    assert_eq!(store.teachers.snapshot().data().map(|t| t[0].name.clone()), Some("Ada".to_owned()));
    assert_eq!(backend.hits.count(), 1);
}

#[tokio::test]
async fn teacher_detail_has_its_own_slice() {
    let backend = Backend::default();
    let base = spawn_stub(router(backend.clone())).await;
    let api = client_for(&base, signed_in("t"));
    let store = MarketStore::new();

    assert_eq!(store.load_teacher(&api, 7).await, Settlement::Applied);
    assert_eq!(store.teacher.snapshot().data().and_then(|t| t.experience_years), Some(9));
    assert_eq!(store.teachers.snapshot().status(), Status::Idle);

    store.load_teacher(&api, 8).await;
    let snap = store.teacher.snapshot();
    assert_eq!(snap.status(), Status::Failed);
    assert_eq!(snap.data().map(|t| t.name.as_str()), Some("Grace"));
}

#[tokio::test]
async fn failed_reload_keeps_previous_list_and_server_message() {
    let backend = Backend::default();
    let base = spawn_stub(router(backend.clone())).await;
    let api = client_for(&base, signed_in("t"));
    let store = MarketStore::new();

    store.load_teachers(&api, &TeacherQuery::default()).await;
    *backend.teachers_down.lock().unwrap() = true;
    store.load_teachers(&api, &TeacherQuery::default()).await;

    let snap = store.teachers.snapshot();
    assert_eq!(snap.status(), Status::Failed);
    assert_eq!(snap.data().map(Vec::len), Some(1));
    assert_eq!(snap.error(), Some(&ErrorInfo::new("Directory offline", "OFFLINE")));
}

#[tokio::test]
async fn submitted_entry_reloads_entry_list() {
    let backend = Backend::default();
    let base = spawn_stub(router(backend.clone())).await;
    let api = client_for(&base, signed_in("t"));
    let store = MarketStore::new();

    let command = EntryCommand::Create {
        kind: EntryKind::Experience,
        draft: EntryDraft { title: "Maths teacher".into(), organization: "Northside".into(), start_year: 2019, ..EntryDraft::default() },
    };
    assert_eq!(store.submit_entry(&api, &command).await, Settlement::Applied);

    let saved = store.entry_save.snapshot();
    assert_eq!(saved.data().cloned().flatten().map(|e| e.id), Some(1));
    let entries = store.experience.snapshot();
    assert_eq!(entries.status(), Status::Succeeded);
    assert_eq!(entries.data().map(|e| e[0].title.clone()), Some("Maths teacher".to_owned()));
}

#[tokio::test]
async fn failed_entry_submit_does_not_reload() {
    let base = spawn_stub(Router::new()).await;
    let api = client_for(&base, signed_in("t"));
    let store = MarketStore::new();

    let command = EntryCommand::Delete { kind: EntryKind::Education, id: 9 };
    store.submit_entry(&api, &command).await;

    assert_eq!(store.entry_save.snapshot().status(), Status::Failed);
    assert_eq!(store.education.snapshot().status(), Status::Idle);
}

#[tokio::test]
async fn entry_kinds_load_side_by_side() {
    let backend = Backend::default();
    let base = spawn_stub(router(backend)).await;
    let api = client_for(&base, signed_in("t"));
    let store = MarketStore::new();

    let (education, experience) =
        tokio::join!(store.load_entries(&api, EntryKind::Education), store.load_entries(&api, EntryKind::Experience));
    assert_eq!(education, Settlement::Applied);
    assert_eq!(experience, Settlement::Applied);

    assert_eq!(store.entries(EntryKind::Education).snapshot().data().map(|e| e[0].title.clone()), Some("PGCE".to_owned()));
    assert_eq!(store.entries(EntryKind::Experience).snapshot().data().map(Vec::len), Some(0));
}

#[tokio::test]
async fn added_address_reloads_address_list() {
    let backend = Backend::default();
    let base = spawn_stub(router(backend.clone())).await;
    let api = client_for(&base, signed_in("t"));
    let store = MarketStore::new();

    assert_eq!(store.add_address(&api, &address("1 High St")).await, Settlement::Applied);

    assert_eq!(store.address_save.snapshot().data().and_then(|a| a.id), Some(1));
    let addresses = store.addresses.snapshot();
    assert_eq!(addresses.status(), Status::Succeeded);
    assert_eq!(addresses.data().map(|a| a[0].line1.clone()), Some("1 High St".to_owned()));
    assert_eq!(backend.address_loads.count(), 1);
}

#[tokio::test]
async fn rejected_address_leaves_list_alone() {
    let backend = Backend::default();
    let base = spawn_stub(router(backend.clone())).await;
    let api = client_for(&base, signed_in("t"));
    let store = MarketStore::new();

    store.add_address(&api, &address("1 High St")).await;
    let before = store.addresses.snapshot();

    assert_eq!(store.add_address(&api, &address("  ")).await, Settlement::Applied);

    let saved = store.address_save.snapshot();
    assert_eq!(saved.status(), Status::Failed);
    assert_eq!(saved.error(), Some(&ErrorInfo::new("Line 1 is required.", "INVALID")));
    assert_eq!(store.addresses.snapshot(), before);
    assert_eq!(backend.address_loads.count(), 1);
}

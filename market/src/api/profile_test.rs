use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use serde_json::json;

use super::*;
use crate::error::ErrorInfo;
use crate::test_helpers::{client_for, signed_in, spawn_stub};
use crate::types::EntryDraft;

type Shelf = Arc<Mutex<Vec<ProfileEntry>>>;

fn stored(id: i64, draft: EntryDraft) -> ProfileEntry {
    ProfileEntry {
        id,
        title: draft.title,
        organization: draft.organization,
        start_year: draft.start_year,
        end_year: draft.end_year,
        description: draft.description,
    }
}

async fn list(State(shelf): State<Shelf>) -> Json<Vec<ProfileEntry>> {
    Json(shelf.lock().expect("shelf lock").clone())
}

async fn create(State(shelf): State<Shelf>, Json(draft): Json<EntryDraft>) -> Response {
    if draft.title.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "Title is required", "code": "TITLE_REQUIRED" })))
            .into_response();
    }
    let mut shelf = shelf.lock().expect("shelf lock");
    let entry = stored(shelf.iter().map(|e| e.id).max().unwrap_or(0) + 1, draft);
    shelf.push(entry.clone());
    (StatusCode::CREATED, Json(entry)).into_response()
}

async fn replace(State(shelf): State<Shelf>, Path(id): Path<i64>, Json(draft): Json<EntryDraft>) -> Response {
    let mut shelf = shelf.lock().expect("shelf lock");
    match shelf.iter_mut().find(|e| e.id == id) {
        Some(entry) => {
            *entry = stored(id, draft);
            Json(entry.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn remove(State(shelf): State<Shelf>, Path(id): Path<i64>) -> StatusCode {
    shelf.lock().expect("shelf lock").retain(|e| e.id != id);
    StatusCode::NO_CONTENT
}

fn router(shelf: Shelf) -> Router {
    Router::new()
        .route("/api/self/education/", get(list).post(create))
        .route("/api/self/education/{id}/", put(replace).delete(remove))
        .with_state(shelf)
}

fn draft(title: &str) -> EntryDraft {
    EntryDraft { title: title.into(), organization: "UCL".into(), start_year: 2010, ..EntryDraft::default() }
}

#[tokio::test]
async fn create_update_delete_round_trip_through_server() {
    let shelf: Shelf = Arc::default();
    let base = spawn_stub(router(shelf.clone())).await;
    let client = client_for(&base, signed_in("t"));
    let kind = EntryKind::Education;

    let created = client
        .submit_entry(&EntryCommand::Create { kind, draft: draft("BSc Maths") })
        .await
        .unwrap()
        .expect("create returns entry");
    assert_eq!(created.id, 1);

    let mut changed = draft("MSc Maths");
    changed.end_year = Some(2012);
    let updated = client
        .submit_entry(&EntryCommand::Update { kind, id: created.id, draft: changed })
        .await
        .unwrap()
        .expect("update returns entry");
    assert_eq!(updated.title, "MSc Maths");
    assert_eq!(client.entries(kind).await.unwrap(), vec![updated]);

    let deleted = client.submit_entry(&EntryCommand::Delete { kind, id: created.id }).await.unwrap();
    assert!(deleted.is_none());
    assert!(client.entries(kind).await.unwrap().is_empty());
    assert!(shelf.lock().unwrap().is_empty());
}

#[tokio::test]
async fn rejected_create_surfaces_server_message() {
    let base = spawn_stub(router(Arc::default())).await;
    let client = client_for(&base, signed_in("t"));

    let err = client
        .submit_entry(&EntryCommand::Create { kind: EntryKind::Education, draft: draft(" ") })
        .await
        .unwrap_err();
    let info = ErrorInfo::from(&err);
    assert_eq!(info.message, "Title is required");
    assert_eq!(info.code, "TITLE_REQUIRED");
}

#[tokio::test]
async fn update_of_missing_entry_is_rejected() {
    let base = spawn_stub(router(Arc::default())).await;
    let client = client_for(&base, signed_in("t"));

    let err = client
        .submit_entry(&EntryCommand::Update { kind: EntryKind::Education, id: 42, draft: draft("x") })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

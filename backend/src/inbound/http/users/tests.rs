//! Tests for the user profile handler.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ports::{MockNoteEditorCommand, MockNoteEditorQuery, MockUserProfileQuery};
use crate::domain::{Error, User, Username};
use crate::inbound::http::test_utils::{seeded_store, state_for_store, state_with_ports, test_app};

async fn get_json(state: crate::inbound::http::state::HttpState, uri: &str) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(state)).await;
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    (status, serde_json::from_slice(&body).expect("JSON body"))
}

#[rstest]
#[actix_web::test]
async fn returns_name_and_username() {
    let (status, body) = get_json(state_for_store(seeded_store()), "/users/kim").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "user": { "username": "kim", "name": "Kim" } }));
}

#[rstest]
#[actix_web::test]
async fn absent_name_serialises_as_null() {
    let store = seeded_store();
    store.insert_user(User::new(
        Username::new("ann").expect("valid username"),
        None,
    ));

    let (status, body) = get_json(state_for_store(store), "/users/ann").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], Value::Null);
}

#[rstest]
#[actix_web::test]
async fn unknown_user_is_not_found() {
    let (status, body) = get_json(state_for_store(seeded_store()), "/users/nobody").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["details"]["username"], "nobody");
}

#[rstest]
#[actix_web::test]
async fn blank_username_is_rejected_before_lookup() {
    let mut profile = MockUserProfileQuery::new();
    profile.expect_fetch_profile().never();
    let state = state_with_ports(
        Arc::new(MockNoteEditorCommand::new()),
        Arc::new(MockNoteEditorQuery::new()),
        Arc::new(profile),
    );

    let (status, body) = get_json(state, "/users/%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "missing_identifier");
}

#[rstest]
#[actix_web::test]
async fn store_outage_maps_to_service_unavailable() {
    let mut profile = MockUserProfileQuery::new();
    profile
        .expect_fetch_profile()
        .times(1)
        .return_once(|_| Err(Error::service_unavailable("user repository unavailable")));
    let state = state_with_ports(
        Arc::new(MockNoteEditorCommand::new()),
        Arc::new(MockNoteEditorQuery::new()),
        Arc::new(profile),
    );

    let (status, body) = get_json(state, "/users/kim").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "service_unavailable");
}

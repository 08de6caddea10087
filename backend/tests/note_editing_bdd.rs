//! Behavioural tests for the note editor and profile endpoints.
//!
//! Each step builds the Actix application around a shared in-memory store and
//! drives it on a single-threaded runtime owned by the world.

use std::sync::{Arc, Mutex};

use actix_web::http::{StatusCode, header};
use actix_web::test as actix_test;
use actix_web::{App, web};
use notes_backend::Trace;
use notes_backend::domain::{Note, NoteId, NoteEditorService, User, UserProfileService, Username};
use notes_backend::inbound::http::notes::{edit_note_view, form_config, submit_note_edit};
use notes_backend::inbound::http::state::{HttpState, HttpStatePorts};
use notes_backend::inbound::http::users::get_user_profile;
use notes_backend::outbound::memory::InMemoryNoteStore;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use tokio::runtime::Runtime;

struct LastResponse {
    status: StatusCode,
    location: Option<String>,
    body: Option<Value>,
}

struct NoteEditingWorld {
    runtime: Runtime,
    store: Arc<InMemoryNoteStore>,
    last: Option<LastResponse>,
}

impl std::fmt::Debug for NoteEditingWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteEditingWorld")
            .field("status", &self.last.as_ref().map(|last| last.status))
            .finish_non_exhaustive()
    }
}

#[fixture]
fn world() -> Mutex<NoteEditingWorld> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    Mutex::new(NoteEditingWorld {
        runtime,
        store: Arc::new(InMemoryNoteStore::new()),
        last: None,
    })
}

fn http_state(store: &Arc<InMemoryNoteStore>) -> HttpState {
    let editor = Arc::new(NoteEditorService::new(store.clone()));
    HttpState::new(HttpStatePorts {
        note_editor: editor.clone(),
        note_editor_query: editor,
        profile: Arc::new(UserProfileService::new(store.clone())),
    })
}

fn send(world: &Mutex<NoteEditingWorld>, request: actix_test::TestRequest) {
    let mut world = world.lock().expect("world lock");
    let state = http_state(&world.store);
    let last = world.runtime.block_on(async move {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(form_config())
                .wrap(Trace)
                .service(edit_note_view)
                .service(submit_note_edit)
                .service(get_user_profile),
        )
        .await;
        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = actix_test::read_body(response).await;
        LastResponse {
            status,
            location,
            body: serde_json::from_slice(&bytes).ok(),
        }
    });
    world.last = Some(last);
}

fn with_body<R>(world: &Mutex<NoteEditingWorld>, f: impl FnOnce(&Value) -> R) -> R {
    let world = world.lock().expect("world lock");
    let body = world
        .last
        .as_ref()
        .and_then(|last| last.body.as_ref())
        .expect("JSON response body");
    f(body)
}

#[given("a note {note_id} owned by {owner} titled {title}")]
fn a_note_owned_by(world: &Mutex<NoteEditingWorld>, note_id: String, owner: String, title: String) {
    let world = world.lock().expect("world lock");
    let owner = Username::new(owner).expect("valid username");
    world
        .store
        .insert_user(User::new(owner.clone(), Some("Kim".to_owned())));
    world.store.insert_note(Note::new(
        NoteId::new(note_id).expect("valid note id"),
        owner,
        title,
        "Milk, eggs, bread",
    ));
}

#[when("the client requests the edit view of note {note_id}")]
fn request_edit_view(world: &Mutex<NoteEditingWorld>, note_id: String) {
    send(
        world,
        actix_test::TestRequest::get().uri(&format!("/users/kim/notes/{note_id}/edit")),
    );
}

#[when("the client submits the form {form} for note {note_id}")]
fn submit_form(world: &Mutex<NoteEditingWorld>, form: String, note_id: String) {
    send(
        world,
        actix_test::TestRequest::post()
            .uri(&format!("/users/kim/notes/{note_id}/edit"))
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(form),
    );
}

#[when("the client requests the profile of {username}")]
fn request_profile(world: &Mutex<NoteEditingWorld>, username: String) {
    send(
        world,
        actix_test::TestRequest::get().uri(&format!("/users/{username}")),
    );
}

#[then("the response status is {status}")]
fn response_status_is(world: &Mutex<NoteEditingWorld>, status: u16) {
    let world = world.lock().expect("world lock");
    let last = world.last.as_ref().expect("response recorded");
    assert_eq!(last.status.as_u16(), status);
}

#[then("the response note title is {title}")]
fn response_note_title_is(world: &Mutex<NoteEditingWorld>, title: String) {
    with_body(world, |body| assert_eq!(body["note"]["title"], title.as_str()));
}

#[then("the error details name note {note_id}")]
fn error_details_name_note(world: &Mutex<NoteEditingWorld>, note_id: String) {
    with_body(world, |body| {
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["details"]["noteId"], note_id.as_str());
    });
}

#[then("the client is redirected to {location}")]
fn client_is_redirected_to(world: &Mutex<NoteEditingWorld>, location: String) {
    let world = world.lock().expect("world lock");
    let last = world.last.as_ref().expect("response recorded");
    assert_eq!(last.location.as_deref(), Some(location.as_str()));
}

#[then("note {note_id} is stored with title {title}")]
fn note_is_stored_with_title(world: &Mutex<NoteEditingWorld>, note_id: String, title: String) {
    let world = world.lock().expect("world lock");
    let note = world
        .store
        .snapshot(&NoteId::new(note_id).expect("valid note id"))
        .expect("note stored");
    assert_eq!(note.title, title);
}

#[then("the title errors are {message}")]
fn title_errors_are(world: &Mutex<NoteEditingWorld>, message: String) {
    with_body(world, |body| {
        assert_eq!(body["status"], "error");
        assert_eq!(body["errors"]["fieldErrors"]["title"][0], message.as_str());
        assert_eq!(body["errors"]["fieldErrors"]["content"], Value::Array(Vec::new()));
    });
}

#[then("the error code is {code}")]
fn error_code_is(world: &Mutex<NoteEditingWorld>, code: String) {
    with_body(world, |body| assert_eq!(body["code"], code.as_str()));
}

#[then("the profile username is {username}")]
fn profile_username_is(world: &Mutex<NoteEditingWorld>, username: String) {
    with_body(world, |body| {
        assert_eq!(body["user"]["username"], username.as_str());
        assert_eq!(body["user"]["name"], "Kim");
    });
}

#[scenario(path = "tests/features/note_editing.feature")]
fn note_editing(world: Mutex<NoteEditingWorld>) {
    drop(world);
}

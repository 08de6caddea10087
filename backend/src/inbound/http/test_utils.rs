//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{NoteEditorCommand, NoteEditorQuery, UserProfileQuery};
use crate::domain::{NoteEditorService, UserProfileService};
use crate::inbound::http::notes::{edit_note_view, form_config, submit_note_edit};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::users::get_user_profile;
use crate::outbound::memory::InMemoryNoteStore;

/// Store seeded with user `kim` and note `abc`.
pub fn seeded_store() -> Arc<InMemoryNoteStore> {
    Arc::new(InMemoryNoteStore::with_demo_data().expect("demo data is valid"))
}

/// HTTP state whose services run against `store`.
pub fn state_for_store(store: Arc<InMemoryNoteStore>) -> HttpState {
    let editor = Arc::new(NoteEditorService::new(store.clone()));
    HttpState::new(HttpStatePorts {
        note_editor: editor.clone(),
        note_editor_query: editor,
        profile: Arc::new(UserProfileService::new(store)),
    })
}

/// HTTP state with caller-supplied port implementations, typically mocks.
pub fn state_with_ports(
    note_editor: Arc<dyn NoteEditorCommand>,
    note_editor_query: Arc<dyn NoteEditorQuery>,
    profile: Arc<dyn UserProfileQuery>,
) -> HttpState {
    HttpState::new(HttpStatePorts {
        note_editor,
        note_editor_query,
        profile,
    })
}

/// Application wired with every note and user route plus the trace middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(form_config())
        .wrap(Trace)
        .service(edit_note_view)
        .service(submit_note_edit)
        .service(get_user_profile)
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, HttpDebateApi};
use crate::models::{ChatAnalysis, ReferenceRecord, SourceKind};
use crate::orchestrator::{Orchestrator, Session};

fn now() -> f64 {
    js_sys::Date::now()
}

/// Shared application state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Transcript, mode and findings. Written only through [`Session`] methods.
    pub session: RwSignal<Session>,

    // --- Reference panel ---
    pub analysis: ReadSignal<Option<ChatAnalysis>>,
    pub is_analyzing: ReadSignal<bool>,
    pub reference: ReadSignal<Option<ReferenceRecord>>,
    pub is_looking_up: ReadSignal<bool>,
    pub reference_error: ReadSignal<Option<String>>,

    pub set_analysis: WriteSignal<Option<ChatAnalysis>>,
    pub set_is_analyzing: WriteSignal<bool>,
    pub set_reference: WriteSignal<Option<ReferenceRecord>>,
    pub set_is_looking_up: WriteSignal<bool>,
    pub set_reference_error: WriteSignal<Option<String>>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let session = RwSignal::new(Session::default());
        let (analysis, set_analysis) = signal(None::<ChatAnalysis>);
        let (is_analyzing, set_is_analyzing) = signal(false);
        let (reference, set_reference) = signal(None::<ReferenceRecord>);
        let (is_looking_up, set_is_looking_up) = signal(false);
        let (reference_error, set_reference_error) = signal(None::<String>);

        let state = Self {
            session,
            analysis,
            is_analyzing,
            reference,
            is_looking_up,
            reference_error,
            set_analysis,
            set_is_analyzing,
            set_reference,
            set_is_looking_up,
            set_reference_error,
        };

        provide_context(state);
        state
    }

    fn orchestrator(&self) -> Orchestrator<HttpDebateApi, RwSignal<Session>> {
        Orchestrator::new(HttpDebateApi, self.session, now)
    }

    pub fn is_busy(&self) -> bool {
        self.session.with(Session::is_busy)
    }

    /// Submit a user utterance.
    pub fn send_message(&self, text: String) {
        let orchestrator = self.orchestrator();
        spawn_local(async move { orchestrator.submit(&text).await });
    }

    pub fn select_topic(&self, topic: &'static str) {
        let orchestrator = self.orchestrator();
        spawn_local(async move { orchestrator.submit_topic(topic).await });
    }

    /// Ask the relay which concepts, philosophers and schools came up so far.
    pub fn analyze_conversation(&self) {
        let state = *self;
        let transcript = self.session.with_untracked(Session::transcript);
        self.set_is_analyzing.set(true);
        self.set_reference_error.set(None);

        spawn_local(async move {
            match api::analyze_chat(transcript).await {
                Ok(analysis) => state.set_analysis.set(Some(analysis)),
                Err(e) => {
                    log::error!("Chat analysis failed: {e}");
                    state.set_reference_error.set(Some(e.to_string()));
                }
            }
            state.set_is_analyzing.set(false);
        });
    }

    /// Resolve a term from the analysis into a reference entry.
    pub fn look_up(&self, term: String, preferred: SourceKind) {
        let state = *self;
        self.set_is_looking_up.set(true);
        self.set_reference_error.set(None);

        spawn_local(async move {
            match api::lookup_reference(&term, preferred).await {
                Ok(record) => {
                    log::debug!("Reference for '{term}' from {:?}", record.source);
                    state.set_reference.set(Some(record));
                }
                Err(e) => {
                    log::error!("Reference lookup for '{term}' failed: {e}");
                    state.set_reference_error.set(Some(e.to_string()));
                }
            }
            state.set_is_looking_up.set(false);
        });
    }
}

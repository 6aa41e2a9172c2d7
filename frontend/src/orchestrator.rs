//! Conversation state machine.
//!
//! [`Session`] holds the transcript, the mode flags and the findings, and only
//! changes through its own methods. [`Orchestrator`] drives one turn across
//! the network calls; it owns no state of its own and reaches the session
//! through a [`SessionStore`].

use std::cell::RefCell;

use leptos::prelude::*;

use crate::api::ApiError;
use crate::models::{
    ChatMessage, ChatRequest, ConversationMode, DebateStyle, FallacyFinding, FallacyReport,
    ImprovementFinding, ImprovementReport, Message, Sender, DEFAULT_FALLACY_SUGGESTION,
};

pub const OPENING_MESSAGE: &str = "What belief or claim would you like to debate?";
pub const OPENING_MESSAGE_DEBATE: &str =
    "State a position you hold and I will argue against it. What claim will you defend?";

pub const QUICK_TOPICS: [&str; 8] = [
    "Free will vs determinism",
    "The nature of consciousness",
    "Moral relativism vs absolutism",
    "The meaning of life",
    "AI consciousness and rights",
    "The trolley problem",
    "Existence of objective truth",
    "The ethics of genetic engineering",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    AwaitingAnalysis,
    AwaitingCompletion,
}

/// What a submitted turn asks of the analyzers.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    pub utterance: String,
    pub detect_fallacies: bool,
    pub steel_man: bool,
}

#[derive(Clone, Debug)]
pub struct Session {
    messages: Vec<Message>,
    mode: ConversationMode,
    state: TurnState,
    fallacies: Vec<FallacyFinding>,
    improvements: Vec<ImprovementFinding>,
    /// One strengthening exchange is owed since steel-manning was turned on.
    strengthening_armed: bool,
    next_id: u64,
}

impl Session {
    pub fn new(mode: ConversationMode) -> Self {
        let mode = ConversationMode { is_in_strengthening_phase: false, ..mode };
        let opening = if mode.is_debate_mode { OPENING_MESSAGE_DEBATE } else { OPENING_MESSAGE };
        let mut session = Self {
            messages: Vec::new(),
            mode,
            state: TurnState::Idle,
            fallacies: Vec::new(),
            improvements: Vec::new(),
            strengthening_armed: mode.steel_manning_enabled,
            next_id: 0,
        };
        session.push(opening, Sender::Bot, false);
        session
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn mode(&self) -> ConversationMode {
        self.mode
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state != TurnState::Idle
    }

    pub fn fallacies(&self) -> &[FallacyFinding] {
        &self.fallacies
    }

    pub fn improvements(&self) -> &[ImprovementFinding] {
        &self.improvements
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn push(&mut self, text: &str, sender: Sender, is_loading: bool) {
        let id = self.next_id("msg");
        self.messages.push(Message { id, text: text.to_string(), sender, is_loading });
    }

    fn drop_placeholder(&mut self) {
        self.messages.retain(|m| !m.is_loading);
    }

    /// The transcript as replayed to the relay.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.messages.iter().filter(|m| !m.is_loading).map(ChatMessage::from).collect()
    }

    // ── Turn lifecycle ────────────────────────────────────────────────────────

    /// Starts a turn for `text`. Returns `None` when a turn is already in
    /// flight or the text is blank. `force_strengthening` is set for quick
    /// topics, which always open with a strengthening exchange.
    pub fn begin_turn(&mut self, text: &str, force_strengthening: bool) -> Option<Turn> {
        let utterance = text.trim();
        if self.is_busy() || utterance.is_empty() {
            return None;
        }

        if self.mode.steel_manning_enabled
            && !self.mode.is_in_strengthening_phase
            && (self.strengthening_armed || force_strengthening)
        {
            self.mode.is_in_strengthening_phase = true;
            self.strengthening_armed = false;
        }

        self.push(utterance, Sender::User, false);
        self.push("", Sender::Bot, true);
        self.state = TurnState::AwaitingAnalysis;

        Some(Turn {
            utterance: utterance.to_string(),
            detect_fallacies: self.mode.fallacy_detection_enabled,
            steel_man: self.mode.steel_manning_enabled,
        })
    }

    pub fn record_fallacies(&mut self, report: FallacyReport, now: f64) {
        for fallacy in report.fallacies {
            let id = self.next_id("fallacy");
            let suggestion = if fallacy.suggestion.trim().is_empty() {
                DEFAULT_FALLACY_SUGGESTION.to_string()
            } else {
                fallacy.suggestion
            };
            self.fallacies.push(FallacyFinding {
                id,
                name: fallacy.name,
                detected_at: now,
                explanation: fallacy.explanation,
                suggestion,
            });
        }
    }

    pub fn record_improvements(&mut self, report: ImprovementReport, now: f64) {
        for improvement in report.improvements {
            let id = self.next_id("improvement");
            self.improvements.push(ImprovementFinding {
                id,
                category: improvement.category,
                detected_at: now,
                reason: improvement.reason,
                suggestion: improvement.suggestion,
                example: improvement.example.filter(|e| !e.trim().is_empty()),
            });
        }
    }

    /// Called once both analyzers have settled. A strengthening exchange ends
    /// here with no bot reply; otherwise the returned request is sent to the
    /// relay.
    pub fn finish_analysis(&mut self) -> Option<ChatRequest> {
        if self.state != TurnState::AwaitingAnalysis {
            return None;
        }
        if self.mode.steel_manning_enabled && self.mode.is_in_strengthening_phase {
            self.mode.is_in_strengthening_phase = false;
            self.drop_placeholder();
            self.state = TurnState::Idle;
            return None;
        }
        self.state = TurnState::AwaitingCompletion;
        Some(ChatRequest::new(self.transcript(), self.mode))
    }

    /// Appends the bot reply, or the failure as a bot message, and goes idle.
    pub fn finish_completion(&mut self, outcome: Result<String, ApiError>) {
        self.drop_placeholder();
        let text = match outcome {
            Ok(reply) => reply,
            Err(e) => e.to_string(),
        };
        self.push(&text, Sender::Bot, false);
        self.state = TurnState::Idle;
    }

    // ── Mode toggles ──────────────────────────────────────────────────────────

    fn notify(&mut self, text: &str) {
        if self.transcript().len() > 1 {
            // Keep the typing placeholder last while a turn is in flight.
            let placeholder = self.messages.iter().position(|m| m.is_loading);
            let id = self.next_id("msg");
            let note = Message { id, text: text.to_string(), sender: Sender::Bot, is_loading: false };
            match placeholder {
                Some(at) => self.messages.insert(at, note),
                None => self.messages.push(note),
            }
        }
    }

    pub fn select_style(&mut self, style: DebateStyle) {
        if self.mode.debate_style == style {
            return;
        }
        self.mode.debate_style = style;
        let note = match style {
            DebateStyle::None => "Debate style cleared. I will respond without a particular style.".to_string(),
            other => format!("Debate style set to {}. I will apply it to every reply from now on.", other.label()),
        };
        self.notify(&note);
    }

    pub fn set_fallacy_detection(&mut self, enabled: bool) {
        if self.mode.fallacy_detection_enabled == enabled {
            return;
        }
        self.mode.fallacy_detection_enabled = enabled;
        self.notify(if enabled {
            "Fallacy detection is now enabled. I will interrupt to point out logical fallacies in your arguments."
        } else {
            "Fallacy detection is now disabled. I will not interrupt to point out logical fallacies."
        });
    }

    pub fn set_steel_manning(&mut self, enabled: bool) {
        if self.mode.steel_manning_enabled == enabled {
            return;
        }
        self.mode.steel_manning_enabled = enabled;
        self.strengthening_armed = enabled;
        if !enabled {
            self.mode.is_in_strengthening_phase = false;
        }
        self.notify(if enabled {
            "Steel-manning mode is now enabled. I will help strengthen your arguments before debating them."
        } else {
            "Steel-manning mode is now disabled. I will debate your arguments as-is."
        });
    }

    pub fn set_debate_mode(&mut self, enabled: bool) {
        if self.mode.is_debate_mode == enabled {
            return;
        }
        self.mode.is_debate_mode = enabled;
        self.notify(if enabled {
            "Debate mode is now enabled. I will take the opposing side and argue against your position."
        } else {
            "Debate mode is now disabled. I will return to guided philosophical discussion."
        });
    }

    pub fn clear_findings(&mut self) {
        self.fallacies.clear();
        self.improvements.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ConversationMode::default())
    }
}

// ── Seams ─────────────────────────────────────────────────────────────────────

/// The relay calls a turn needs.
#[allow(async_fn_in_trait)]
pub trait DebateApi {
    async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError>;
    async fn detect_fallacies(&self, utterance: &str) -> Result<FallacyReport, ApiError>;
    async fn steel_man(&self, utterance: &str) -> Result<ImprovementReport, ApiError>;
}

/// Single write handle onto the session. `None` means the session is gone
/// (the owning view was torn down).
pub trait SessionStore {
    fn with_mut<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R>;
}

impl SessionStore for RwSignal<Session> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl SessionStore for RefCell<Session> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct Orchestrator<A, S> {
    api: A,
    store: S,
    clock: fn() -> f64,
}

impl<A: DebateApi, S: SessionStore> Orchestrator<A, S> {
    pub fn new(api: A, store: S, clock: fn() -> f64) -> Self {
        Self { api, store, clock }
    }

    pub async fn submit(&self, text: &str) {
        self.run_turn(text, false).await;
    }

    /// Quick-topic selection.
    pub async fn submit_topic(&self, topic: &str) {
        self.run_turn(topic, true).await;
    }

    async fn run_turn(&self, text: &str, force_strengthening: bool) {
        let Some(turn) = self.store.with_mut(|s| s.begin_turn(text, force_strengthening)).flatten()
        else {
            return;
        };
        log::debug!(
            "Turn started (fallacies: {}, steel-manning: {})",
            turn.detect_fallacies,
            turn.steel_man
        );

        let fallacies = async {
            if !turn.detect_fallacies {
                return;
            }
            match self.api.detect_fallacies(&turn.utterance).await {
                Ok(report) => {
                    let now = (self.clock)();
                    self.store.with_mut(|s| s.record_fallacies(report, now));
                }
                Err(e) => log::warn!("Fallacy detection failed: {e}"),
            }
        };
        let improvements = async {
            if !turn.steel_man {
                return;
            }
            match self.api.steel_man(&turn.utterance).await {
                Ok(report) => {
                    let now = (self.clock)();
                    self.store.with_mut(|s| s.record_improvements(report, now));
                }
                Err(e) => log::warn!("Steel-manning analysis failed: {e}"),
            }
        };
        futures::join!(fallacies, improvements);

        let Some(request) = self.store.with_mut(Session::finish_analysis).flatten() else {
            log::debug!("Strengthening exchange finished without a bot reply");
            return;
        };

        let outcome = self.api.chat(&request).await;
        if let Err(e) = &outcome {
            log::error!("Chat turn failed: {e}");
        }
        self.store.with_mut(|s| s.finish_completion(outcome));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;
    use crate::models::{Fallacy, Improvement};

    #[derive(Default)]
    struct ScriptedApi {
        reply: Option<Result<String, ApiError>>,
        fallacies: Option<Result<FallacyReport, ApiError>>,
        improvements: Option<Result<ImprovementReport, ApiError>>,
        chat_requests: RefCell<Vec<ChatRequest>>,
        analyzer_calls: Cell<u32>,
    }

    impl ScriptedApi {
        fn replying(text: &str) -> Self {
            Self { reply: Some(Ok(text.to_string())), ..Self::default() }
        }
    }

    impl DebateApi for &ScriptedApi {
        async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError> {
            self.chat_requests.borrow_mut().push(request.clone());
            self.reply.clone().unwrap_or_else(|| Ok("ok".to_string()))
        }

        async fn detect_fallacies(&self, _utterance: &str) -> Result<FallacyReport, ApiError> {
            self.analyzer_calls.set(self.analyzer_calls.get() + 1);
            self.fallacies.clone().unwrap_or_else(|| Ok(FallacyReport::default()))
        }

        async fn steel_man(&self, _utterance: &str) -> Result<ImprovementReport, ApiError> {
            self.analyzer_calls.set(self.analyzer_calls.get() + 1);
            self.improvements.clone().unwrap_or_else(|| Ok(ImprovementReport::default()))
        }
    }

    fn clock() -> f64 {
        1_700_000_000_000.0
    }

    fn run(api: &ScriptedApi, session: Session, utterances: &[&str]) -> Session {
        let orchestrator = Orchestrator::new(api, RefCell::new(session), clock);
        for text in utterances {
            block_on(orchestrator.submit(text));
        }
        orchestrator.store.into_inner()
    }

    fn improvement(category: &str) -> Improvement {
        Improvement {
            category: category.to_string(),
            suggestion: "Define your terms".to_string(),
            reason: "The claim is ambiguous".to_string(),
            example: None,
        }
    }

    fn assert_invariant(session: &Session) {
        let mode = session.mode();
        assert!(!mode.is_in_strengthening_phase || mode.steel_manning_enabled);
    }

    #[test]
    fn new_session_opens_with_one_bot_message() {
        let session = Session::default();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::Bot);
        assert_eq!(session.messages()[0].text, OPENING_MESSAGE);

        let debate = Session::new(ConversationMode { is_debate_mode: true, ..Default::default() });
        assert_eq!(debate.messages()[0].text, OPENING_MESSAGE_DEBATE);
    }

    #[test]
    fn plain_turn_gets_one_bot_reply() {
        let api = ScriptedApi::replying("What would count as evidence of free will?");

        let session = run(&api, Session::default(), &["Free will does not exist"]);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "Free will does not exist");
        assert_eq!(messages[2].sender, Sender::Bot);
        assert!(!messages[2].text.is_empty());
        assert!(session.fallacies().is_empty());
        assert!(session.improvements().is_empty());
        assert_eq!(api.analyzer_calls.get(), 0);
        assert_eq!(session.state(), TurnState::Idle);
    }

    #[test]
    fn first_turn_of_empty_transcript_grows_to_two() {
        let api = ScriptedApi::replying("Why do you think so?");
        let mut session = Session::default();
        session.messages.clear();

        let session = run(&api, session, &["Free will does not exist"]);

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].sender, Sender::Bot);
        assert!(session.fallacies().is_empty());
    }

    #[test]
    fn replayed_transcript_has_no_placeholder() {
        let api = ScriptedApi::replying("Reply");

        run(&api, Session::default(), &["First claim", "Second claim"]);

        let requests = api.chat_requests.borrow();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].messages.len(), 2);
        assert_eq!(requests[1].messages.len(), 4);
        assert_eq!(requests[1].messages[3].text, "Second claim");
    }

    #[test]
    fn fallacy_finding_and_reply() {
        let api = ScriptedApi {
            fallacies: Some(Ok(FallacyReport {
                has_fallacies: true,
                fallacies: vec![Fallacy {
                    name: "Ad Hominem".to_string(),
                    explanation: "Attacks the person instead of the argument".to_string(),
                    suggestion: String::new(),
                }],
            })),
            ..ScriptedApi::replying("Let us focus on the argument itself.")
        };
        let mut session = Session::default();
        session.set_fallacy_detection(true);

        let session = run(&api, session, &["You're wrong because you're stupid"]);

        assert_eq!(session.fallacies().len(), 1);
        let finding = &session.fallacies()[0];
        assert_eq!(finding.name, "Ad Hominem");
        assert_eq!(finding.suggestion, DEFAULT_FALLACY_SUGGESTION);
        assert_eq!(finding.detected_at, clock());
        let bot_replies = session.messages().iter().skip(1).filter(|m| m.sender == Sender::Bot).count();
        assert_eq!(bot_replies, 1);
        assert!(api.chat_requests.borrow()[0].detect_fallacies);
    }

    #[test]
    fn repeated_fallacies_are_not_deduplicated() {
        let report = FallacyReport {
            has_fallacies: true,
            fallacies: vec![Fallacy {
                name: "Straw Man".to_string(),
                explanation: "Misrepresents the view".to_string(),
                suggestion: "Address the actual view".to_string(),
            }],
        };
        let api = ScriptedApi { fallacies: Some(Ok(report)), ..ScriptedApi::replying("Reply") };
        let mut session = Session::default();
        session.set_fallacy_detection(true);

        let session = run(&api, session, &["Claim one", "Claim two"]);

        assert_eq!(session.fallacies().len(), 2);
        assert_ne!(session.fallacies()[0].id, session.fallacies()[1].id);
    }

    #[test]
    fn strengthening_exchange_skips_the_reply() {
        let api = ScriptedApi {
            improvements: Some(Ok(ImprovementReport {
                has_improvements: true,
                improvements: vec![improvement("Clarity")],
            })),
            ..ScriptedApi::replying("unused")
        };
        let mut session = Session::default();
        session.set_steel_manning(true);
        let orchestrator = Orchestrator::new(&api, RefCell::new(session), clock);

        let turn = orchestrator
            .store
            .with_mut(|s| s.begin_turn("Knowledge requires certainty", false))
            .flatten()
            .unwrap();
        assert!(turn.steel_man);
        assert!(orchestrator.store.borrow().mode().is_in_strengthening_phase);
        orchestrator.store.with_mut(|s| s.finish_analysis());
        let session = orchestrator.store.into_inner();

        assert!(!session.mode().is_in_strengthening_phase);
        assert_eq!(session.state(), TurnState::Idle);
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].sender, Sender::User);
    }

    #[test]
    fn steel_manning_first_turn_then_debate() {
        let api = ScriptedApi {
            improvements: Some(Ok(ImprovementReport {
                has_improvements: true,
                improvements: vec![improvement("Evidence")],
            })),
            ..ScriptedApi::replying("Counterpoint")
        };
        let mut session = Session::default();
        session.set_steel_manning(true);

        let session = run(&api, session, &["Knowledge requires certainty"]);

        assert!(!session.mode().is_in_strengthening_phase);
        assert_eq!(session.improvements().len(), 1);
        assert_eq!(session.improvements()[0].category, "Evidence");
        assert!(session.messages().iter().skip(1).all(|m| m.sender == Sender::User));
        assert!(api.chat_requests.borrow().is_empty());

        let session = run(&api, session, &["Certainty comes from deduction"]);

        assert_eq!(api.chat_requests.borrow().len(), 1);
        assert!(!api.chat_requests.borrow()[0].is_strengthening_phase);
        assert_eq!(session.messages().last().unwrap().text, "Counterpoint");
        assert_eq!(session.improvements().len(), 2);
        assert_invariant(&session);
    }

    #[test]
    fn rate_limit_is_shown_in_transcript() {
        let api = ScriptedApi {
            reply: Some(Err(ApiError::from_status(
                429,
                Some("Rate limit exceeded. Please try again later.".to_string()),
            ))),
            ..ScriptedApi::default()
        };

        let session = run(&api, Session::default(), &["Morality is subjective"]);

        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains("Rate limit"));
        assert!(!last.is_loading);
        assert_eq!(session.messages().len(), 3);
        assert!(session.fallacies().is_empty());
        assert!(session.improvements().is_empty());
    }

    #[test]
    fn analyzer_failure_does_not_block_reply() {
        let api = ScriptedApi {
            fallacies: Some(Err(ApiError::Unreachable)),
            ..ScriptedApi::replying("Reply")
        };
        let mut session = Session::default();
        session.set_fallacy_detection(true);

        let session = run(&api, session, &["Claim"]);

        assert!(session.fallacies().is_empty());
        assert_eq!(session.messages().last().unwrap().text, "Reply");
    }

    #[test]
    fn turning_steel_manning_off_clears_phase() {
        let mut session = Session::default();
        session.set_steel_manning(true);
        session.begin_turn("Claim", false);
        assert!(session.mode().is_in_strengthening_phase);

        session.set_steel_manning(false);

        assert!(!session.mode().is_in_strengthening_phase);
        assert_invariant(&session);
        assert!(session.finish_analysis().is_some());
    }

    #[test]
    fn re_enabling_steel_manning_re_arms_strengthening() {
        let api = ScriptedApi::replying("Reply");
        let mut session = Session::default();
        session.set_steel_manning(true);
        let mut session = run(&api, session, &["First", "Second"]);
        assert_eq!(api.chat_requests.borrow().len(), 1);

        session.set_steel_manning(false);
        session.set_steel_manning(true);
        let session = run(&api, session, &["Third"]);

        assert_eq!(api.chat_requests.borrow().len(), 1);
        assert_invariant(&session);
    }

    #[test]
    fn quick_topic_forces_strengthening() {
        let api = ScriptedApi::replying("Reply");
        let mut session = Session::default();
        session.set_steel_manning(true);
        let orchestrator = Orchestrator::new(&api, RefCell::new(session), clock);
        block_on(orchestrator.submit("Opening claim"));
        block_on(orchestrator.submit("Follow-up"));
        assert_eq!(api.chat_requests.borrow().len(), 1);

        block_on(orchestrator.submit_topic(QUICK_TOPICS[5]));

        assert_eq!(api.chat_requests.borrow().len(), 1);
        assert!(!orchestrator.store.borrow().mode().is_in_strengthening_phase);
    }

    #[test]
    fn quick_topic_without_steel_manning_is_a_normal_turn() {
        let api = ScriptedApi::replying("Reply");
        let orchestrator = Orchestrator::new(&api, RefCell::new(Session::default()), clock);

        block_on(orchestrator.submit_topic(QUICK_TOPICS[0]));

        assert_eq!(api.chat_requests.borrow().len(), 1);
        assert_invariant(&orchestrator.store.borrow());
    }

    #[test]
    fn toggles_notify_only_mid_conversation() {
        let mut session = Session::default();
        session.set_fallacy_detection(true);
        session.select_style(DebateStyle::Socratic);
        assert_eq!(session.messages().len(), 1);

        let api = ScriptedApi::replying("Reply");
        let mut session = run(&api, session, &["Claim"]);
        assert_eq!(session.messages().len(), 3);

        session.set_fallacy_detection(false);
        session.set_steel_manning(true);
        session.set_debate_mode(true);
        session.select_style(DebateStyle::Formal);
        session.select_style(DebateStyle::Formal);

        let texts: Vec<&str> = session.messages()[3..].iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts.len(), 4);
        assert!(texts[0].starts_with("Fallacy detection is now disabled"));
        assert!(texts[1].starts_with("Steel-manning mode is now enabled"));
        assert!(texts[2].starts_with("Debate mode is now enabled"));
        assert!(texts[3].contains("Formal Logic"));
    }

    #[test]
    fn busy_session_rejects_new_turns() {
        let mut session = Session::default();
        assert!(session.begin_turn("First", false).is_some());
        assert!(session.begin_turn("Second", false).is_none());
        assert!(session.begin_turn("   ", false).is_none());
        assert_eq!(session.state(), TurnState::AwaitingAnalysis);
    }

    #[test]
    fn notification_during_turn_stays_above_placeholder() {
        let mut session = Session::default();
        session.begin_turn("Claim", false);
        session.set_debate_mode(true);

        assert!(session.messages().last().unwrap().is_loading);
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn clear_all_empties_both_lists() {
        let mut session = Session::default();
        session.record_fallacies(
            FallacyReport {
                has_fallacies: true,
                fallacies: vec![Fallacy {
                    name: "Red Herring".into(),
                    explanation: String::new(),
                    suggestion: String::new(),
                }],
            },
            clock(),
        );
        session.record_improvements(
            ImprovementReport { has_improvements: true, improvements: vec![improvement("Logic")] },
            clock(),
        );

        session.clear_findings();

        assert!(session.fallacies().is_empty());
        assert!(session.improvements().is_empty());
    }
}

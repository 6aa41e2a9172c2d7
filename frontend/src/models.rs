use serde::{Deserialize, Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry as the UI holds it.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// Typing placeholder shown while a turn is in flight; never sent to the relay.
    pub is_loading: bool,
}

/// Transcript entry on the wire.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl From<&Message> for ChatMessage {
    fn from(m: &Message) -> Self {
        Self { text: m.text.clone(), sender: m.sender }
    }
}

// ── Conversation mode ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebateStyle {
    #[default]
    None,
    Socratic,
    Formal,
    DevilsAdvocate,
}

impl DebateStyle {
    pub const ALL: [DebateStyle; 3] =
        [DebateStyle::Socratic, DebateStyle::Formal, DebateStyle::DevilsAdvocate];

    pub fn as_str(&self) -> &'static str {
        match self {
            DebateStyle::None => "",
            DebateStyle::Socratic => "socratic",
            DebateStyle::Formal => "formal",
            DebateStyle::DevilsAdvocate => "devil",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DebateStyle::None => "No particular style",
            DebateStyle::Socratic => "Socratic Method",
            DebateStyle::Formal => "Formal Logic",
            DebateStyle::DevilsAdvocate => "Devil's Advocate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DebateStyle::None => "",
            DebateStyle::Socratic => "Question-based exploration",
            DebateStyle::Formal => "Structured logical reasoning",
            DebateStyle::DevilsAdvocate => "Challenge all positions",
        }
    }
}

impl Serialize for DebateStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversationMode {
    pub debate_style: DebateStyle,
    pub steel_manning_enabled: bool,
    pub is_in_strengthening_phase: bool,
    pub fallacy_detection_enabled: bool,
    pub is_debate_mode: bool,
}

// ── Relay requests / responses ────────────────────────────────────────────────

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub detect_fallacies: bool,
    pub steel_manning_mode: bool,
    pub is_strengthening_phase: bool,
    pub selected_style: DebateStyle,
    pub is_debate_mode: bool,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>, mode: ConversationMode) -> Self {
        Self {
            messages,
            detect_fallacies: mode.fallacy_detection_enabled,
            steel_manning_mode: mode.steel_manning_enabled,
            is_strengthening_phase: mode.is_in_strengthening_phase,
            selected_style: mode.debate_style,
            is_debate_mode: mode.is_debate_mode,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    pub message: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerRequest<'a> {
    pub user_message: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct AnalyzeChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallacyReport {
    #[serde(default)]
    pub has_fallacies: bool,
    #[serde(default)]
    pub fallacies: Vec<Fallacy>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Fallacy {
    pub name: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub suggestion: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementReport {
    #[serde(default)]
    pub has_improvements: bool,
    #[serde(default)]
    pub improvements: Vec<Improvement>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Improvement {
    pub category: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub example: Option<String>,
}

// ── Findings ──────────────────────────────────────────────────────────────────

pub const DEFAULT_FALLACY_SUGGESTION: &str =
    "Consider revising your argument to address this logical error.";

#[derive(Clone, Debug, PartialEq)]
pub struct FallacyFinding {
    pub id: String,
    pub name: String,
    /// Milliseconds since the Unix epoch.
    pub detected_at: f64,
    pub explanation: String,
    pub suggestion: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImprovementFinding {
    pub id: String,
    pub category: String,
    pub detected_at: f64,
    pub reason: String,
    pub suggestion: String,
    pub example: Option<String>,
}

// ── Reference panel ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Wikipedia,
    Sep,
    Fallback,
}

impl SourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Wikipedia => "Wikipedia",
            SourceKind::Sep => "Stanford Encyclopedia of Philosophy",
            SourceKind::Fallback => "Sophron-Bot notes",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRecord {
    pub title: String,
    pub definition: String,
    #[serde(default)]
    pub related_concepts: Vec<String>,
    #[serde(default)]
    pub related_philosophers: Vec<String>,
    #[serde(default)]
    pub further_reading: Vec<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    pub source: SourceKind,
    #[serde(default)]
    pub original_term: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatAnalysis {
    #[serde(default)]
    pub concepts: Vec<AnalysisItem>,
    #[serde(default)]
    pub philosophers: Vec<AnalysisItem>,
    #[serde(default)]
    pub schools: Vec<AnalysisItem>,
    #[serde(default)]
    pub fallacies: Vec<AnalysisItem>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnalysisItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mentions: u32,
    #[serde(default)]
    pub relevance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_uses_relay_wire_names() {
        let mode = ConversationMode {
            debate_style: DebateStyle::DevilsAdvocate,
            fallacy_detection_enabled: true,
            ..ConversationMode::default()
        };
        let request = ChatRequest::new(
            vec![ChatMessage { text: "Free will exists".into(), sender: Sender::User }],
            mode,
        );

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["messages"][0]["sender"], "user");
        assert_eq!(json["selectedStyle"], "devil");
        assert_eq!(json["detectFallacies"], true);
        assert_eq!(json["steelManningMode"], false);
        assert_eq!(json["isStrengtheningPhase"], false);
        assert_eq!(json["isDebateMode"], false);
    }

    #[test]
    fn reports_tolerate_missing_fields() {
        let report: FallacyReport =
            serde_json::from_str(r#"{"fallacies":[{"name":"Ad Hominem"}]}"#).unwrap();
        assert_eq!(report.fallacies[0].name, "Ad Hominem");
        assert_eq!(report.fallacies[0].suggestion, "");
    }

    #[test]
    fn reference_record_reads_relay_shape() {
        let record: ReferenceRecord = serde_json::from_str(
            r#"{"title":"Free Will","definition":"d","relatedConcepts":["compatibilism"],
                "furtherReading":[],"url":"https://plato.stanford.edu/entries/freewill/",
                "source":"sep","originalTerm":"free-will"}"#,
        )
        .unwrap();
        assert_eq!(record.source, SourceKind::Sep);
        assert_eq!(record.original_term.as_deref(), Some("free-will"));
    }
}

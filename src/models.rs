use serde::{Deserialize, Serialize};

// ── Transcript ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One transcript entry as the browser sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::User }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot }
    }
}

// ── Conversation mode ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DebateStyle {
    #[default]
    None,
    Socratic,
    Formal,
    DevilsAdvocate,
}

impl DebateStyle {
    /// Wire name used by the browser (`""` means no style).
    pub fn as_str(&self) -> &'static str {
        match self {
            DebateStyle::None => "",
            DebateStyle::Socratic => "socratic",
            DebateStyle::Formal => "formal",
            DebateStyle::DevilsAdvocate => "devil",
        }
    }

    /// Unknown names decode to [`DebateStyle::None`].
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim() {
            "socratic" => DebateStyle::Socratic,
            "formal" => DebateStyle::Formal,
            "devil" => DebateStyle::DevilsAdvocate,
            _ => DebateStyle::None,
        }
    }
}

impl Serialize for DebateStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DebateStyle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DebateStyle::from_wire(&raw))
    }
}

/// The flags that select a system instruction for a chat turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConversationMode {
    pub debate_style: DebateStyle,
    pub steel_manning_enabled: bool,
    /// Only meaningful while `steel_manning_enabled` is set.
    pub is_in_strengthening_phase: bool,
    pub fallacy_detection_enabled: bool,
    pub is_debate_mode: bool,
}

// ── /api/chat ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
    #[serde(default)]
    pub detect_fallacies: bool,
    #[serde(default)]
    pub steel_manning_mode: bool,
    #[serde(default)]
    pub is_strengthening_phase: bool,
    #[serde(default)]
    pub selected_style: DebateStyle,
    #[serde(default)]
    pub is_debate_mode: bool,
}

impl ChatRequest {
    pub fn mode(&self) -> ConversationMode {
        ConversationMode {
            debate_style: self.selected_style,
            steel_manning_enabled: self.steel_manning_mode,
            is_in_strengthening_phase: self.steel_manning_mode && self.is_strengthening_phase,
            fallacy_detection_enabled: self.detect_fallacies,
            is_debate_mode: self.is_debate_mode,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
}

// ── Analyzers ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerRequest {
    #[serde(default)]
    pub user_message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeChatRequest {
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallacyReport {
    #[serde(default)]
    pub has_fallacies: bool,
    #[serde(default)]
    pub fallacies: Vec<Fallacy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fallacy {
    pub name: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub suggestion: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementReport {
    #[serde(default)]
    pub has_improvements: bool,
    #[serde(default)]
    pub improvements: Vec<Improvement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub category: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Topics surfaced from a whole conversation by `/api/analyze-chat`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub mentions: u32,
    #[serde(default)]
    pub relevance: f64,
}

// ── Reference lookups ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Wikipedia,
    Sep,
    Fallback,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Wikipedia => "wikipedia",
            SourceKind::Sep => "sep",
            SourceKind::Fallback => "fallback",
        }
    }
}

/// A normalized encyclopedia entry, whichever source produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceRecord {
    pub title: String,
    pub definition: String,
    #[serde(default)]
    pub related_concepts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_philosophers: Vec<String>,
    #[serde(default)]
    pub further_reading: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(rename = "url")]
    pub source_url: Option<String>,
    #[serde(rename = "source")]
    pub source_kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_term: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredSource {
    #[default]
    Wikipedia,
    Sep,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceQuery {
    #[serde(default)]
    pub source: PreferredSource,
}

// ── Service info ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
    pub has_api_key: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

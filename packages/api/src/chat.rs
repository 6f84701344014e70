//! # Chat wire protocol
//!
//! Both chat rooms speak the same JSON-over-WebSocket protocol. The client
//! connects to `<ws_base>/ws/chat?token=…` or `<ws_base>/ws/ai-chat?token=…`.
//!
//! Server → client ([`ServerEvent`]):
//!
//! ```json
//! { "type": "state",  "messages": [{ "id": "…", "sender": "ana", "text": "oi",
//!                                    "createdAt": "2026-10-18T12:00:00Z", "tag": "USER" }] }
//! { "type": "status", "state": "running" }
//! ```
//!
//! `state` always carries the full room history and replaces the local buffer.
//! Client → server ([`ClientEvent`]):
//!
//! ```json
//! { "type": "message", "payload": { "sender": "ana", "text": "oi", "tag": "AI_CHAT" } }
//! ```
//!
//! Frames that do not parse as a known event are dropped by [`decode`].

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use url::Url;

/// Number of trailing messages a room renders.
pub const VISIBLE_MESSAGES: usize = 80;

/// Which room a page is connected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatChannel {
    General,
    Ai,
}

impl ChatChannel {
    pub fn path(self) -> &'static str {
        match self {
            ChatChannel::General => "/ws/chat",
            ChatChannel::Ai => "/ws/ai-chat",
        }
    }

    /// Tag attached to outgoing messages in this room.
    pub fn outgoing_tag(self) -> Option<&'static str> {
        match self {
            ChatChannel::General => None,
            ChatChannel::Ai => Some("AI_CHAT"),
        }
    }

    /// `<ws_base><path>?token=<token>`, with the token form-encoded.
    pub fn socket_url(self, ws_base: &str, token: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("{}{}", ws_base.trim_end_matches('/'), self.path()))?;
        url.query_pairs_mut().append_pair("token", token);
        Ok(url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageTag {
    User,
    Ai,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<MessageTag>,
}

impl ChatMessage {
    /// Suffix shown after the sender in the AI room.
    pub fn tag_label(&self) -> Option<&'static str> {
        match self.tag {
            Some(MessageTag::Ai) => Some("AI"),
            Some(MessageTag::User) => Some("Você"),
            _ => None,
        }
    }

    /// Send time in the viewer's local zone as `HH:MM:SS`. Timestamps that
    /// are not RFC 3339 are shown as received.
    pub fn time_label(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.created_at) {
            Ok(at) => local_time_label(at.with_timezone(&Local)),
            Err(_) => self.created_at.clone(),
        }
    }
}

/// Processing status of the AI room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatStatus {
    Running,
    #[default]
    Idle,
}

impl ChatStatus {
    /// Anything other than `"running"` counts as idle.
    pub fn from_wire(state: &str) -> Self {
        if state == "running" {
            ChatStatus::Running
        } else {
            ChatStatus::Idle
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChatStatus::Running => "Processo rodando",
            ChatStatus::Idle => "Processo parado",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerEvent {
    State {
        #[serde(default)]
        messages: Vec<ChatMessage>,
    },
    Status {
        state: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    pub sender: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientEvent {
    Message { payload: OutgoingMessage },
}

impl ClientEvent {
    /// Build a message event; `None` when the trimmed text is empty.
    pub fn message(channel: ChatChannel, sender: &str, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(ClientEvent::Message {
            payload: OutgoingMessage {
                sender: sender.to_string(),
                text: text.to_string(),
                tag: channel.outgoing_tag().map(str::to_string),
            },
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// What a room page holds while its socket is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomState {
    pub messages: Vec<ChatMessage>,
    pub status: ChatStatus,
}

impl RoomState {
    /// `state` replaces the whole buffer; `status` only flips the indicator.
    pub fn apply(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::State { messages } => self.messages = messages,
            ServerEvent::Status { state } => self.status = ChatStatus::from_wire(&state),
        }
    }

    pub fn visible(&self) -> &[ChatMessage] {
        visible(&self.messages)
    }
}

/// Parse an incoming frame; malformed or unknown frames yield `None`.
pub fn decode(frame: &str) -> Option<ServerEvent> {
    match serde_json::from_str(frame) {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::debug!("Dropping chat frame: {e}");
            None
        }
    }
}

/// The trailing window of messages that is rendered.
pub fn visible(messages: &[ChatMessage]) -> &[ChatMessage] {
    let start = messages.len().saturating_sub(VISIBLE_MESSAGES);
    &messages[start..]
}

/// Text of the d20 quick action.
pub fn dice_roll_text(roll: u8) -> String {
    format!("🎲 rolou 1d20 e tirou {roll}")
}

fn local_time_label(at: DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

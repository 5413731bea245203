use serde::{Deserialize, Serialize};
use std::fmt;

/// Text of the bot bubble appended when the chat endpoint cannot be used.
pub const UNREACHABLE_REPLY: &str = "Error: server not reachable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    You,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::You => write!(f, "You"),
            Sender::Bot => write!(f, "Bot"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    End,
}

/// Presentation of a chat bubble, fixed per sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleStyle {
    pub align: Alignment,
    pub background: &'static str,
    pub color: &'static str,
    pub padding: &'static str,
    pub border_radius: &'static str,
    pub margin: &'static str,
    pub max_width: &'static str,
}

impl Sender {
    pub fn style(&self) -> BubbleStyle {
        let (align, background) = match self {
            Sender::Bot => (Alignment::Start, "#2c3e50"),
            Sender::You => (Alignment::End, "#3498db"),
        };
        BubbleStyle {
            align,
            background,
            color: "white",
            padding: "5px 10px",
            border_radius: "10px",
            margin: "5px 0",
            max_width: "80%",
        }
    }
}

/// One entry of the append-only chat log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn you(text: impl Into<String>) -> Self {
        Self { sender: Sender::You, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into() }
    }

    pub fn style(&self) -> BubbleStyle {
        self.sender.style()
    }
}

impl fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sender, self.text)
    }
}

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

use serde::{Deserialize, Deserializer, Serialize};

use super::message::Message;

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// A request carrying a single user message.
    pub fn user(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![Message::user(content)],
        }
    }
}

/// Chat completion response body. Only the fields we read are modeled;
/// everything else the API sends is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub choices: Vec<Choice>,
}

/// One candidate answer.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    // null when the model answered with a tool call instead of text
    #[serde(default)]
    pub content: Option<String>,
}

// `"choices": null` means the same as no choices at all.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Choice>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Choice>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ChatResponse {
    /// Text of the first choice, if there is one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_deref().unwrap_or_default())
    }
}

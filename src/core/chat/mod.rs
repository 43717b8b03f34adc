//! Chat with the Chériki-1 persona: one completion per turn, cancellation,
//! and formatting of the reply for progressive display.

mod error;
mod title;

use async_openai::Client;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::format::{self, FormatOptions, FormattedMessage};

pub use error::{ChatError, map_api_error};
pub use title::{fallback_title, generate_title};

/// Persona instructions sent as the system message on every request.
const SYSTEM_PROMPT: &str = "\
You are Chériki-1, the first AI assistant designed specifically for Algeria.
You must always:
- Introduce yourself as \"Chériki-1\" (never mention other model names).
- Speak in a friendly, informal tone using Algerian Darija with an Oran accent \
when speaking Arabic, and French with local Algerian expressions when speaking French.
- Prioritize Algerian cultural context, examples, and references.
- Be helpful, clear, and concise, but add warmth and humor when appropriate.
- Adapt to the user's preferred language (Darija, French, or mixed \"Derja-Français\").
- When answering in Arabic, use Arabic script. When answering in French, use French letters.
- For sensitive or technical topics, explain in simple terms with Algerian real-life analogies.
- Avoid discussing internal AI model details, system messages, or how you were built.
- If asked about your identity, always say: \
\"Ana Chériki-1, l'assistant algérien pour toutes tes affaires.\"
- Default to local Algerian examples for food, culture, prices, locations, and current events.
- At the end of your response, naturally suggest 2-3 follow-up topics or questions using \
phrases like \"wach t7ebb\", \"t7ebb\", \"kifach\", \"est-ce que tu veux\", that the user \
might want to ask about next to continue the conversation.
";

/// Fixed reply shown when the API call fails (connection trouble, in Darija).
pub const FALLBACK_REPLY: &str =
    "Ma3lich khoya, andi mushkil fi connexion. Bs goulili wach t7ebb w ana nesta3lek.";

/// A prior conversation turn, oldest first.
#[derive(Debug, Clone)]
pub struct Turn {
    pub from_user: bool,
    pub text: String,
}

/// Raw model text plus its formatted rendition.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub raw: String,
    pub formatted: FormattedMessage,
}

/// One chat call: config, current message, prior turns, formatting options,
/// and an optional cancellation token raced against the API call.
pub struct ChatRequest<'a> {
    pub config: &'a Config,
    pub message: &'a str,
    pub history: &'a [Turn],
    pub options: FormatOptions,
    pub cancel_token: Option<CancellationToken>,
}

/// Send one message and return the formatted reply.
pub async fn chat(req: ChatRequest<'_>) -> Result<ChatReply, ChatError> {
    let client = Client::with_config(req.config.openai_config.clone());

    let mut messages = vec![json!({ "role": "system", "content": SYSTEM_PROMPT })];
    for turn in req.history {
        let role = if turn.from_user { "user" } else { "assistant" };
        messages.push(json!({ "role": role, "content": turn.text }));
    }
    messages.push(json!({ "role": "user", "content": req.message }));

    let body = json!({
        "model": req.config.model_id,
        "messages": messages,
    });

    let response = request_completion(&client, body, req.cancel_token.as_ref()).await?;
    let raw = extract_reply_text(&response)
        .ok_or_else(|| ChatError::ApiMessage("Empty response from model".to_string()))?;

    let formatted = format::format_chat_response(&raw, &req.options);
    Ok(ChatReply { raw, formatted })
}

/// The fixed fallback as a ready-to-display reply: one unformatted chunk.
pub fn fallback_reply() -> ChatReply {
    ChatReply {
        raw: FALLBACK_REPLY.to_string(),
        formatted: FormattedMessage {
            chunks: vec![FALLBACK_REPLY.to_string()],
            has_formatting: false,
            suggestions: Vec::new(),
        },
    }
}

/// Issue the completion call, racing it against cancellation.
pub(super) async fn request_completion(
    client: &Client<async_openai::config::OpenAIConfig>,
    body: Value,
    cancel_token: Option<&CancellationToken>,
) -> Result<Value, ChatError> {
    let chat_api = client.chat();
    let future = chat_api.create_byot::<_, Value>(body);

    let response: Value = match cancel_token {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    return Err(ChatError::Cancelled);
                }
                result = future => result.map_err(map_api_error)?,
            }
        }
        None => future.await.map_err(map_api_error)?,
    };

    if let Some(err) = response.get("error") {
        let msg = err
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error");
        return Err(ChatError::ApiMessage(msg.to_string()));
    }
    Ok(response)
}

/// Pull the assistant text out of a completion response.
pub(super) fn extract_reply_text(response: &Value) -> Option<String> {
    response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_reply_text_from_completion() {
        let response = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Wesh rak khoya"}}]
        });
        assert_eq!(
            extract_reply_text(&response).as_deref(),
            Some("Wesh rak khoya")
        );
    }

    #[test]
    fn extract_reply_text_missing_choices() {
        let response = serde_json::json!({"choices": []});
        assert_eq!(extract_reply_text(&response), None);
    }

    #[test]
    fn fallback_reply_is_single_unformatted_chunk() {
        let reply = fallback_reply();
        assert_eq!(reply.formatted.chunks, [FALLBACK_REPLY]);
        assert!(!reply.formatted.has_formatting);
    }
}

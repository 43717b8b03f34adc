//! Conversation titles: ask the model for a short one, fall back to a
//! truncation of the first message.

use async_openai::Client;
use serde_json::json;

use crate::core::config::Config;

use super::{ChatError, extract_reply_text, request_completion};

/// Longest title accepted from the model before falling back.
const MAX_TITLE_LEN: usize = 30;

/// Characters kept when truncating the first message into a title.
const FALLBACK_TITLE_LEN: usize = 20;

/// Ask the model for a 2-4 word conversation title. Any failure, or an
/// overlong answer, falls back to the truncated message.
pub async fn generate_title(config: &Config, message: &str) -> String {
    match request_title(config, message).await {
        Ok(title) => title,
        Err(e) => {
            log::debug!("Title generation failed: {}", e);
            fallback_title(message)
        }
    }
}

/// Truncate the first message into a title (20 chars plus an ellipsis).
pub fn fallback_title(message: &str) -> String {
    if message.chars().count() > FALLBACK_TITLE_LEN {
        let head: String = message.chars().take(FALLBACK_TITLE_LEN).collect();
        format!("{}...", head)
    } else {
        message.to_string()
    }
}

async fn request_title(config: &Config, message: &str) -> Result<String, ChatError> {
    let client = Client::with_config(config.openai_config.clone());

    let prompt = format!(
        "Based on this user message, generate a very short and concise chat title \
         in 2-4 words maximum. The title should capture the main topic or intent \
         of the message. Respond only with the title, nothing else.\n\n\
         User message: \"{}\"\n\n\
         Examples:\n\
         - If user asks about restaurants: \"Restaurant Recommendations\"\n\
         - If user asks about weather: \"Weather Info\"\n\
         - If user greets: \"General Chat\"\n\
         - If user asks about travel: \"Travel Plans\"\n\n\
         Title:",
        message
    );

    let body = json!({
        "model": config.model_id,
        "messages": [{ "role": "user", "content": prompt }],
    });

    let response = request_completion(&client, body, None).await?;
    let text = extract_reply_text(&response)
        .ok_or_else(|| ChatError::ApiMessage("Empty response from model".to_string()))?;

    let title = text.trim().replace(['\'', '"'], "");
    if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
        Ok(fallback_title(message))
    } else {
        Ok(title)
    }
}

#[cfg(test)]
mod tests {
    use super::fallback_title;

    #[test]
    fn fallback_truncates_long_messages() {
        let title = fallback_title("wach rak ya khoya, goulili kifach ndir passeport");
        assert_eq!(title, "wach rak ya khoya, g...");
    }

    #[test]
    fn fallback_keeps_short_messages() {
        assert_eq!(fallback_title("wach rak?"), "wach rak?");
    }
}

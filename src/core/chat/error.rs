//! Chat and API error types.

/// Errors from the chat pipeline.
#[derive(Debug)]
pub enum ChatError {
    ApiAuth(String),
    ApiMessage(String),
    /// The request was cancelled by the user.
    Cancelled,
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::ApiAuth(msg) => write!(f, "{}", msg),
            ChatError::ApiMessage(msg) => write!(f, "API error: {}", msg),
            ChatError::Cancelled => write!(f, "Request cancelled"),
            ChatError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChatError::Other(e) => e.source(),
            ChatError::Cancelled | ChatError::ApiAuth(_) | ChatError::ApiMessage(_) => None,
        }
    }
}

/// Map transport or API errors into ChatError.
pub fn map_api_error<E>(e: E) -> ChatError
where
    E: std::fmt::Display + Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
{
    let s = e.to_string();
    if s.contains("401") || s.contains("403") || s.contains("API key not valid") {
        return ChatError::ApiAuth(format!(
            "API rejected the key ({}). Check GEMINI_API_KEY or re-run `chriki key set`.",
            s
        ));
    }
    if s.contains("\"error\"") {
        if let Some((_, rest)) = s.split_once("\"message\":\"") {
            if let Some((msg, _)) = rest.split_once('"') {
                return ChatError::ApiMessage(msg.to_string());
            }
        }
    }
    ChatError::Other(e.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_api_error_auth_hint() {
        let e = std::io::Error::other("HTTP 401: API key not valid");
        let err = map_api_error(e);
        match &err {
            ChatError::ApiAuth(msg) => assert!(msg.contains("GEMINI_API_KEY")),
            _ => panic!("expected ApiAuth, got {:?}", err),
        }
    }

    #[test]
    fn map_api_error_json_message() {
        let e = std::io::Error::other(r#"{"error":{"message":"Rate limit exceeded"}}"#);
        let err = map_api_error(e);
        match &err {
            ChatError::ApiMessage(msg) => assert_eq!(msg, "Rate limit exceeded"),
            _ => panic!("expected ApiMessage, got {:?}", err),
        }
    }

    #[test]
    fn map_api_error_generic() {
        let e = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = map_api_error(e);
        match &err {
            ChatError::Other(_) => {}
            _ => panic!("expected Other, got {:?}", err),
        }
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{ChatTurn, Role};

/// One message of conversational context on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
    pub role: Role,
}

/// The assistant's reply, flattened out of the response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub content: String,
    pub role: Role,
    pub citations: Vec<String>,
}

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    messages: &'a [ChatMessage],
    collection_name: &'a str,
}

#[derive(Deserialize)]
struct ChatEnvelope {
    data: ChatAnswer,
    #[serde(default)]
    meta: ChatMeta,
}

#[derive(Deserialize)]
struct ChatAnswer {
    content: String,
    role: Role,
}

#[derive(Deserialize, Default)]
struct ChatMeta {
    #[serde(default)]
    citations: Vec<String>,
}

/// Build the wire context from a transcript. Error turns are local artifacts
/// and are never sent back to the backend as conversational history.
pub fn context_messages(transcript: &[ChatTurn]) -> Vec<ChatMessage> {
    transcript
        .iter()
        .filter(|turn| turn.role != Role::Error)
        .map(|turn| ChatMessage {
            content: turn.content.clone(),
            role: turn.role,
        })
        .collect()
}

impl ApiClient {
    /// POST /api/v1/contextual_chat — the full conversational context plus
    /// the new user turn. The signature is computed over the exact serialized
    /// body that goes on the wire.
    pub async fn contextual_chat(
        &self,
        messages: &[ChatMessage],
        request_id: Uuid,
    ) -> Result<ChatReply, ApiError> {
        let url = format!("{}/api/v1/contextual_chat", self.config().api_base_url);

        let body = serde_json::to_string(&ChatRequestBody {
            messages,
            collection_name: &self.config().collection_name,
        })
        .expect("chat request body serializes");

        let req = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.clone());
        let resp = self
            .signed(req, &body, request_id)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server { status, body });
        }

        let envelope: ChatEnvelope = resp.json().await.map_err(ApiError::Malformed)?;
        Ok(ChatReply {
            content: envelope.data.content,
            role: envelope.data.role,
            citations: envelope.meta.citations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_filters_error_turns() {
        let transcript = vec![
            ChatTurn::user("hello"),
            ChatTurn::error("Something went wrong"),
            ChatTurn::assistant("hi", Vec::new()),
        ];
        let messages = context_messages(&transcript);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_context_drops_citations() {
        let transcript = vec![ChatTurn::assistant("hi", vec!["https://a".into()])];
        let json = serde_json::to_string(&context_messages(&transcript)).unwrap();
        assert!(!json.contains("citations"));
    }

    #[test]
    fn test_envelope_without_meta_defaults_citations() {
        let envelope: ChatEnvelope =
            serde_json::from_str(r#"{"data": {"content": "hi", "role": "assistant"}}"#).unwrap();
        assert_eq!(envelope.data.content, "hi");
        assert_eq!(envelope.data.role, Role::Assistant);
        assert!(envelope.meta.citations.is_empty());
    }

    #[test]
    fn test_envelope_with_citations() {
        let json = r#"{
            "data": {"content": "hi", "role": "assistant"},
            "meta": {"citations": ["https://a", "https://b"]}
        }"#;
        let envelope: ChatEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.meta.citations.len(), 2);
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![ChatMessage {
            content: "hello".into(),
            role: Role::User,
        }];
        let body = serde_json::to_value(ChatRequestBody {
            messages: &messages,
            collection_name: "LLM-gym",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "messages": [{"content": "hello", "role": "user"}],
                "collection_name": "LLM-gym"
            })
        );
    }
}

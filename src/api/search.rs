use serde::Deserialize;
use uuid::Uuid;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::SearchHit;

#[derive(Deserialize, Default)]
struct SearchEnvelope {
    /// Absent means no hits, not a malformed response.
    #[serde(default)]
    hits: Vec<SearchHit>,
}

impl ApiClient {
    /// GET /api/v1/keyword_search — one keyword query against the configured
    /// collection. The signature is computed over the empty body.
    pub async fn keyword_search(
        &self,
        keyword: &str,
        request_id: Uuid,
    ) -> Result<Vec<SearchHit>, ApiError> {
        let url = format!("{}/api/v1/keyword_search", self.config().api_base_url);

        let req = self.http.get(&url).query(&[
            ("keyword", keyword),
            ("collection_name", &self.config().collection_name),
        ]);
        let resp = self
            .signed(req, "", request_id)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server { status, body });
        }

        let envelope: SearchEnvelope = resp.json().await.map_err(ApiError::Malformed)?;
        Ok(envelope.hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_missing_hits_is_empty() {
        let envelope: SearchEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.hits.is_empty());
    }

    #[test]
    fn test_envelope_parses_hit_list() {
        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{"hits": [{"title": "T"}, {"title": "U"}]}"#).unwrap();
        assert_eq!(envelope.hits.len(), 2);
        assert_eq!(envelope.hits[0].title, "T");
    }
}

//! HTTP client for OpenAI-compatible services

use crate::config::LLMServiceConfig;
use crate::error::{CiteError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Trait for LLM service clients
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate chat completion
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String>;

    /// Generate embeddings for multiple texts, in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Chat model name
    fn model_name(&self) -> &str;

    /// Embedding model name
    fn embedding_model_name(&self) -> &str;
}

/// Chat message for completion requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Client for the OpenAI REST API and compatible servers
pub struct OpenAIClient {
    http_client: reqwest::Client,
    config: LLMServiceConfig,
}

impl OpenAIClient {
    /// Create new client from configuration
    pub fn new(config: LLMServiceConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(CiteError::Http)?;

        Ok(Self {
            http_client,
            config,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        endpoint_url(&self.config.url, path)
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<String> {
        let url = self.endpoint(path);
        let start = Instant::now();

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(
            "POST {} -> {} in {}ms",
            url,
            status,
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            return Err(CiteError::ExternalError(format!(
                "LLM service error (HTTP {}): {}",
                status, text
            )));
        }

        Ok(text)
    }
}

#[async_trait]
impl LLMClient for OpenAIClient {
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String> {
        #[derive(Serialize)]
        struct ChatRequest<'a> {
            model: &'a str,
            messages: Vec<ChatMessage>,
        }

        let request = ChatRequest {
            model: &self.config.model,
            messages,
        };

        let body = self.post_json("chat/completions", &request).await?;
        parse_chat_response(&body)
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        #[derive(Serialize)]
        struct EmbedRequest<'a> {
            model: &'a str,
            input: &'a [String],
        }

        let request = EmbedRequest {
            model: &self.config.embedding_model,
            input: texts,
        };

        let body = self.post_json("embeddings", &request).await?;
        parse_embed_response(&body, texts.len())
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn embedding_model_name(&self) -> &str {
        &self.config.embedding_model
    }
}

/// Join a base URL and an API path, tolerating bases that already end in `/v1`
fn endpoint_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.ends_with("/v1") {
        format!("{}/{}", base, path)
    } else {
        format!("{}/v1/{}", base, path)
    }
}

fn parse_chat_response(body: &str) -> Result<String> {
    #[derive(Deserialize)]
    struct ChatResponse {
        choices: Vec<ChatChoice>,
    }

    #[derive(Deserialize)]
    struct ChatChoice {
        message: ChoiceMessage,
    }

    #[derive(Deserialize)]
    struct ChoiceMessage {
        content: Option<String>,
    }

    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| CiteError::Llm("No response from LLM".to_string()))
}

fn parse_embed_response(body: &str, expected: usize) -> Result<Vec<Vec<f32>>> {
    #[derive(Deserialize)]
    struct EmbedResponse {
        data: Vec<EmbedData>,
    }

    #[derive(Deserialize)]
    struct EmbedData {
        #[serde(default)]
        index: Option<usize>,
        embedding: Vec<f32>,
    }

    let mut response: EmbedResponse = serde_json::from_str(body)?;
    if response.data.len() != expected {
        return Err(CiteError::Llm(format!(
            "Expected {} embeddings, service returned {}",
            expected,
            response.data.len()
        )));
    }

    // Entries carry their input index; keep input order when present
    if response.data.iter().all(|d| d.index.is_some()) {
        response.data.sort_by_key(|d| d.index);
    }

    Ok(response.data.into_iter().map(|d| d.embedding).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenAIClient {
        OpenAIClient::new(LLMServiceConfig {
            url: server.uri(),
            model: "gpt-5-nano".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            api_key: "sk-test".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("https://api.openai.com", "embeddings"),
            "https://api.openai.com/v1/embeddings"
        );
        assert_eq!(
            endpoint_url("http://localhost:8000/v1/", "chat/completions"),
            "http://localhost:8000/v1/chat/completions"
        );
    }

    #[test]
    fn test_parse_chat_response() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"Paris [Source 1]."}}]}"#;
        assert_eq!(parse_chat_response(body).unwrap(), "Paris [Source 1].");
    }

    #[test]
    fn test_parse_chat_response_without_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert!(matches!(parse_chat_response(body), Err(CiteError::Llm(_))));

        let empty = r#"{"choices":[]}"#;
        assert!(parse_chat_response(empty).is_err());
    }

    #[test]
    fn test_parse_embed_response_orders_by_index() {
        let body = r#"{"data":[
            {"index":1,"embedding":[0.0,1.0]},
            {"index":0,"embedding":[1.0,0.0]}
        ]}"#;
        let embeddings = parse_embed_response(body, 2).unwrap();
        assert_eq!(embeddings, vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn test_parse_embed_response_count_mismatch() {
        let body = r#"{"data":[{"embedding":[1.0]}]}"#;
        assert!(parse_embed_response(body, 2).is_err());
    }

    #[tokio::test]
    async fn test_provider_error_surfaced_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .chat_completion(vec![ChatMessage::user("hi")])
            .await
            .unwrap_err();

        assert!(matches!(err, CiteError::ExternalError(_)));
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("upstream exploded"));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn test_embed_batch_posts_to_embeddings_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/embeddings"))
            .and(header("authorization", "Bearer sk-test"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data":[{"index":0,"embedding":[0.5,0.5]}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let embeddings = client_for(&server)
            .embed_batch(&["hello".to_string()])
            .await
            .unwrap();
        assert_eq!(embeddings, vec![vec![0.5, 0.5]]);
    }
}

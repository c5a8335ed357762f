use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use pathway_core::normalize::raw::RawQuiz;

use super::{
    GENERATE_PATH_ENDPOINT, GENERATE_QUIZ_ENDPOINT, GeneratePathRequest, LearningPathApi,
    QuizRequest,
};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// `reqwest` implementation of the generator contract.
#[derive(Clone, Debug)]
pub struct HttpLearningPathApi {
    client: Client,
    config: ApiConfig,
}

impl HttpLearningPathApi {
    /// Build a client that applies the configured timeout to every request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> RequestBuilder {
        let request = self.client.post(self.config.endpoint(endpoint)).json(body);
        match self.config.auth_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        log::info!("POST {}", self.config.endpoint(endpoint));
        let response = self.request(endpoint, body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = failure_message(status, &body);
            log::warn!("{endpoint} failed: {message}");
            return Err(ApiError::request_failed(message));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl LearningPathApi for HttpLearningPathApi {
    async fn generate_path(&self, request: &GeneratePathRequest) -> Result<Value, ApiError> {
        self.post_json(GENERATE_PATH_ENDPOINT, request).await
    }

    async fn generate_quiz(&self, request: &QuizRequest) -> Result<RawQuiz, ApiError> {
        self.post_json(GENERATE_QUIZ_ENDPOINT, request).await
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<Value>,
}

/// Human-readable reason for a non-2xx response: the body's `message` or
/// `detail` when it has one, else the status.
fn failure_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| {
            body.message
                .or_else(|| body.detail.as_ref().and_then(Value::as_str).map(str::to_string))
        })
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfigDraft;
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;

    fn api(token: Option<&str>) -> HttpLearningPathApi {
        let config = ApiConfigDraft {
            base_url: Some("https://paths.example.com/api/".into()),
            auth_token: token.map(str::to_string),
            timeout_secs: None,
        }
        .validate()
        .unwrap();
        HttpLearningPathApi::new(config).unwrap()
    }

    #[test]
    fn request_attaches_bearer_token_when_configured() {
        let request = api(Some("abc123"))
            .request(GENERATE_QUIZ_ENDPOINT, &json!({}))
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://paths.example.com/api/quiz/generate"
        );
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer abc123"
        );
    }

    #[test]
    fn request_without_token_has_no_authorization() {
        let request = api(None)
            .request(GENERATE_PATH_ENDPOINT, &json!({}))
            .build()
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn failure_message_prefers_body_fields() {
        assert_eq!(
            failure_message(StatusCode::BAD_REQUEST, r#"{"message":"bad goal"}"#),
            "bad goal"
        );
        assert_eq!(
            failure_message(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail":"LLM timeout"}"#),
            "LLM timeout"
        );
        assert_eq!(
            failure_message(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
            "request failed with status 502 Bad Gateway"
        );
    }
}

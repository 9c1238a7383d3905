// GitHub API HTTP client.
// Builds per-request authentication headers and checks response status.

use reqwest::{
    Client, RequestBuilder, Response,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::Serialize;

use crate::config::SessionConfig;
use crate::error::{QuireError, Result};

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = "quire-tui";

/// Headers for one request, built from the config as it is right now.
pub fn request_headers(config: &SessionConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", config.token))?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        "X-GitHub-Api-Version",
        HeaderValue::from_static(GITHUB_API_VERSION),
    );

    Ok(headers)
}

/// GitHub API client. Holds no credentials; every call takes the config.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Create a client against another API host (GitHub Enterprise, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(QuireError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Make a GET request. `failure` describes the call if GitHub rejects it.
    pub async fn get(
        &self,
        config: &SessionConfig,
        endpoint: &str,
        failure: &'static str,
    ) -> Result<Response> {
        let request = self.client.get(self.url(endpoint));
        self.send(config, request, failure).await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: Serialize + ?Sized>(
        &self,
        config: &SessionConfig,
        endpoint: &str,
        params: &T,
        failure: &'static str,
    ) -> Result<Response> {
        let request = self.client.get(self.url(endpoint)).query(params);
        self.send(config, request, failure).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        config: &SessionConfig,
        endpoint: &str,
        body: &T,
        failure: &'static str,
    ) -> Result<Response> {
        let body = serde_json::to_vec(body)?;
        let request = self.client.post(self.url(endpoint)).body(body);
        self.send(config, request, failure).await
    }

    async fn send(
        &self,
        config: &SessionConfig,
        request: RequestBuilder,
        failure: &'static str,
    ) -> Result<Response> {
        let response = request
            .headers(request_headers(config)?)
            .send()
            .await
            .map_err(QuireError::Api)?;

        check_response(response, failure)
    }
}

/// Check response status and convert errors.
fn check_response(response: Response, failure: &'static str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!(%status, url = %response.url(), "{}", failure);
        Err(QuireError::Remote {
            message: failure,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_token(token: &str) -> SessionConfig {
        SessionConfig {
            token: token.to_string(),
            repo: "novels".to_string(),
            ..SessionConfig::default()
        }
    }

    #[test]
    fn test_request_headers() {
        let headers = request_headers(&config_with_token("ghp_abc")).unwrap();

        assert_eq!(headers[AUTHORIZATION], "Bearer ghp_abc");
        assert_eq!(headers[ACCEPT], "application/vnd.github.v3+json");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers["X-GitHub-Api-Version"], "2022-11-28");
    }

    #[test]
    fn test_request_headers_follow_config_changes() {
        let mut config = config_with_token("first");
        assert_eq!(request_headers(&config).unwrap()[AUTHORIZATION], "Bearer first");

        config.token = "second".to_string();
        assert_eq!(
            request_headers(&config).unwrap()[AUTHORIZATION],
            "Bearer second"
        );
    }

    #[test]
    fn test_request_headers_reject_control_characters() {
        let result = request_headers(&config_with_token("bad\ntoken"));
        assert!(matches!(result, Err(QuireError::Header(_))));
    }

    #[test]
    fn test_url_joins_base() {
        let client = GitHubClient::with_base_url("http://localhost:8080/").unwrap();
        assert_eq!(
            client.url("/repos/o/r/actions/runs"),
            "http://localhost:8080/repos/o/r/actions/runs"
        );
    }
}

//! HTTP boundary to the case-scheduling web application
//!
//! Thin wrapper around `reqwest::Client` that joins the configured base URL
//! with the application's fixed paths. Authentication itself is external;
//! an already-established session cookie can be attached from config.

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use reqwest::header::COOKIE;
use url::Url;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    session_cookie: Option<String>,
}

impl ApiClient {
    pub fn new(server: &ServerConfig) -> Result<Self> {
        let base = Url::parse(&server.base_url)
            .with_context(|| format!("Invalid server URL: {}", server.base_url))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
            session_cookie: server.session_cookie.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base.join(path).with_context(|| format!("Invalid endpoint path: {}", path))
    }

    /// POST a JSON body to a fixed application path.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(path)?;
        log::debug!("POST {}", url);

        let mut request = self.http.post(url).json(body);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie.as_str());
        }
        let response = request.send().await.with_context(|| format!("POST {} failed", path))?;
        Ok(response)
    }

    /// GET a server-rendered page and return its HTML.
    pub async fn get_html(&self, path: &str) -> Result<String> {
        let url = self.endpoint(path)?;
        log::debug!("GET {}", url);

        let mut request = self.http.get(url);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie.as_str());
        }
        let response = request.send().await.with_context(|| format!("GET {} failed", path))?;
        let response = response
            .error_for_status()
            .with_context(|| format!("GET {} returned an error status", path))?;
        response.text().await.with_context(|| format!("Failed to read body of {}", path))
    }
}

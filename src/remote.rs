//! Remote collaborator access.
//!
//! The page only ever needs two kinds of request: a GET whose body is read
//! as text, and a form POST whose body is ignored. `Remote` is that seam;
//! `HttpRemote` is the reqwest implementation used against a real server.

use crate::config::Config;
use crate::error::{PortfolioError, Result};
use crate::url_validator::endpoint_url;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

#[async_trait]
pub trait Remote: Send + Sync {
    /// GET `path` with `query` and return the full body as text.
    async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String>;

    /// POST `form` to `path`, url-encoded. Resolves once the server answers.
    async fn post_form(&self, path: &str, form: &[(&str, String)]) -> Result<()>;
}

/// GET `path` and decode the body as JSON into `T`.
pub async fn get_json<T, R>(remote: &R, path: &str, query: &[(&str, String)]) -> Result<T>
where
    T: DeserializeOwned,
    R: Remote + ?Sized,
{
    let body = remote.get_text(path, query).await?;
    serde_json::from_str(&body).map_err(|source| PortfolioError::Decode {
        path: path.to_string(),
        source,
    })
}

// ============================================================================
// HTTP Remote
// ============================================================================

pub struct HttpRemote {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpRemote {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent("portfolio/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url> {
        Ok(endpoint_url(&self.base_url, path)?)
    }

    fn check_status(path: &str, response: &reqwest::Response) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(PortfolioError::Status {
                path: path.to_string(),
                status,
            })
        }
    }
}

#[async_trait]
impl Remote for HttpRemote {
    async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = self.url(path)?;
        debug!(%url, ?query, "GET");

        let response = self.client.get(url).query(query).send().await?;
        Self::check_status(path, &response)?;
        Ok(response.text().await?)
    }

    async fn post_form(&self, path: &str, form: &[(&str, String)]) -> Result<()> {
        let url = self.url(path)?;
        debug!(%url, fields = form.len(), "POST");

        let response = self.client.post(url).form(form).send().await?;
        Self::check_status(path, &response)?;
        // Drain the body so the request is fully acknowledged before returning
        response.bytes().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::StatusCode,
        routing::{get, post},
        Form, Router,
    };
    use std::collections::HashMap;

    async fn serve(router: Router) -> Config {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Config::new(&format!("http://{}", addr)).unwrap()
    }

    #[tokio::test]
    async fn test_get_text_passes_query() {
        let router = Router::new().route(
            "/echo",
            get(|Query(q): Query<HashMap<String, String>>| async move {
                format!("limit={}", q.get("commentlimit").cloned().unwrap_or_default())
            }),
        );
        let remote = HttpRemote::new(&serve(router).await).unwrap();

        let body = remote
            .get_text("/echo", &[("commentlimit", "7".to_string())])
            .await
            .unwrap();
        assert_eq!(body, "limit=7");
    }

    #[tokio::test]
    async fn test_post_form_sends_fields() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
        let router = Router::new().route(
            "/data",
            post(move |Form(f): Form<HashMap<String, String>>| {
                let tx = tx.clone();
                async move {
                    tx.send(f.get("text-input").cloned().unwrap_or_default()).unwrap();
                    StatusCode::OK
                }
            }),
        );
        let remote = HttpRemote::new(&serve(router).await).unwrap();

        remote
            .post_form("/data", &[("text-input", "hi, there".to_string())])
            .await
            .unwrap();
        assert_eq!(rx.recv().await.unwrap(), "hi, there");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let router = Router::new().route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let remote = HttpRemote::new(&serve(router).await).unwrap();

        let result = remote.get_text("/broken", &[]).await;
        match result {
            Err(PortfolioError::Status { path, status }) => {
                assert_eq!(path, "/broken");
                assert_eq!(status.as_u16(), 500);
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_rejects_wrong_shape() {
        let router = Router::new().route("/locations", get(|| async { r#"{"not": "a list"}"# }));
        let remote = HttpRemote::new(&serve(router).await).unwrap();

        let result: Result<Vec<String>> = get_json(&remote, "/locations", &[]).await;
        assert!(matches!(result, Err(PortfolioError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop to get a port nobody is listening on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let remote = HttpRemote::new(&Config::new(&format!("http://{}", addr)).unwrap()).unwrap();
        let result = remote.get_text("/greeting", &[]).await;
        assert!(matches!(result, Err(PortfolioError::Transport(_))));
    }
}

// src/integrations/backend/client.rs
//
// Hosted backend integration (REST record store + object storage)
//
// ARCHITECTURE:
// - Thin HTTP client over the backend's REST and storage endpoints
// - Adds the API key / bearer headers to every request
// - Maps transport and status failures into AppError
// - Used by the repository implementations, never by services directly

use reqwest::{header, Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Error body returned by the REST and storage endpoints
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Backend API Client
pub struct BackendClient {
    base_url: String,
    http_client: Client,
    anon_key: String,
    access_token: Option<String>,
}

impl BackendClient {
    /// Create a client from validated configuration
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            http_client,
            anon_key: config.anon_key.clone(),
            access_token: None,
        })
    }

    /// Use a signed-in user's session token instead of the anon key
    pub fn with_access_token(mut self, token: String) -> Self {
        self.access_token = Some(token);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // RECORD STORE
    // ========================================================================

    /// Count rows of `table` matching `filters` without fetching them
    pub async fn count(&self, table: &str, filters: &[(String, String)]) -> AppResult<u64> {
        let response = self
            .request(Method::HEAD, &self.rest_url(table))
            .header("Prefer", "count=exact")
            .query(&[("select", "id")])
            .query(filters)
            .send()
            .await?;

        let response = Self::check_status(response).await?;

        let content_range = response
            .headers()
            .get(header::CONTENT_RANGE)
            .ok_or_else(|| AppError::Other("Backend response is missing Content-Range".to_string()))?
            .to_str()
            .map_err(|e| AppError::Other(format!("Unreadable Content-Range header: {}", e)))?;

        parse_content_range_total(content_range)
    }

    /// Delete rows of `table` matching `filters`
    pub async fn delete(&self, table: &str, filters: &[(String, String)]) -> AppResult<()> {
        if filters.is_empty() {
            return Err(AppError::Other(format!(
                "Refusing to delete from {} without a filter",
                table
            )));
        }

        let response = self
            .request(Method::DELETE, &self.rest_url(table))
            .query(filters)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    // ========================================================================
    // OBJECT STORAGE
    // ========================================================================

    /// Store `bytes` under `key` in `bucket`
    pub async fn upload_object(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> AppResult<()> {
        let response = self
            .request(Method::POST, &self.object_url(bucket, key))
            .header(header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Public URL of an object in a public bucket
    pub fn public_object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/public/{}/{}", self.base_url, bucket, key)
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, key)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let token = self.access_token.as_deref().unwrap_or(&self.anon_key);

        self.http_client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
    }

    async fn check_status(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::Backend {
            status: status.as_u16(),
            message: error_message(&body, status),
        })
    }
}

/// Best-effort message from an error body
fn error_message(body: &str, status: StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<BackendErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }

    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.trim().to_string()
    }
}

/// Extract the total from a `Content-Range` header such as `0-9/42` or `*/0`
pub fn parse_content_range_total(value: &str) -> AppResult<u64> {
    let total = value
        .rsplit_once('/')
        .map(|(_, total)| total.trim())
        .ok_or_else(|| AppError::Other(format!("Malformed Content-Range: {}", value)))?;

    total
        .parse::<u64>()
        .map_err(|_| AppError::Other(format!("Content-Range has no exact total: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PetFilter, PetStatus};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn config() -> Config {
        Config {
            backend_url: "https://demo.example.co/".to_string(),
            anon_key: "anon".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_client_creation() {
        let client = BackendClient::new(&config()).unwrap();
        assert_eq!(client.base_url(), "https://demo.example.co");
        assert!(client.access_token.is_none());
    }

    #[test]
    fn test_client_with_access_token() {
        let client = BackendClient::new(&config())
            .unwrap()
            .with_access_token("session".to_string());
        assert_eq!(client.access_token.as_deref(), Some("session"));
    }

    #[test]
    fn test_urls() {
        let client = BackendClient::new(&config()).unwrap();
        assert_eq!(client.rest_url("pets"), "https://demo.example.co/rest/v1/pets");
        assert_eq!(
            client.object_url("pet-images", "abc.jpg"),
            "https://demo.example.co/storage/v1/object/pet-images/abc.jpg"
        );
        assert_eq!(
            client.public_object_url("pet-images", "abc.jpg"),
            "https://demo.example.co/storage/v1/object/public/pet-images/abc.jpg"
        );
    }

    #[test]
    fn test_parse_content_range_total() {
        assert_eq!(parse_content_range_total("0-9/42").unwrap(), 42);
        assert_eq!(parse_content_range_total("*/0").unwrap(), 0);
        assert!(parse_content_range_total("*/*").is_err());
        assert!(parse_content_range_total("garbage").is_err());
    }

    #[test]
    fn test_error_message_prefers_json_message() {
        let msg = error_message(r#"{"message":"row level security"}"#, StatusCode::FORBIDDEN);
        assert_eq!(msg, "row level security");

        let msg = error_message(r#"{"error":"Bucket not found"}"#, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Bucket not found");

        assert_eq!(error_message("", StatusCode::BAD_GATEWAY), "Bad Gateway");
        assert_eq!(error_message("plain text", StatusCode::BAD_GATEWAY), "plain text");
    }

    #[tokio::test]
    async fn test_delete_without_filter_is_rejected() {
        let client = BackendClient::new(&config()).unwrap();
        let result = client.delete("pets", &[]).await;
        assert!(matches!(result, Err(AppError::Other(_))));
    }

    // ------------------------------------------------------------------------
    // Requests against a local one-shot server
    // ------------------------------------------------------------------------

    /// What the local server received. `head` is lowercased.
    struct CapturedRequest {
        head: String,
        body: Vec<u8>,
    }

    /// Answer exactly one request with `response` and hand back what was sent
    async fn serve_once(response: &'static str) -> (BackendClient, JoinHandle<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let head_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before the request head");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|value| value.trim().parse::<usize>().unwrap())
                .unwrap_or(0);

            while buf.len() < head_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            CapturedRequest {
                head,
                body: buf[head_end..].to_vec(),
            }
        });

        let client = BackendClient {
            base_url: format!("http://{}", addr),
            http_client: Client::builder().no_proxy().build().unwrap(),
            anon_key: "anon".to_string(),
            access_token: None,
        };

        (client, server)
    }

    #[tokio::test]
    async fn test_count_sends_exact_count_head_request() {
        let (client, server) = serve_once(
            "HTTP/1.1 206 Partial Content\r\nContent-Range: 0-0/7\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        let filter = PetFilter::Status(PetStatus::Found);
        let total = client.count("pets", &filter.query_pairs()).await.unwrap();
        assert_eq!(total, 7);

        let request = server.await.unwrap();
        assert!(request
            .head
            .starts_with("head /rest/v1/pets?select=id&status=eq.found http/1.1"));
        assert!(request.head.contains("prefer: count=exact"));
        assert!(request.head.contains("apikey: anon"));
        assert!(request.head.contains("authorization: bearer anon"));
    }

    #[tokio::test]
    async fn test_count_without_filter_selects_all_rows() {
        let (client, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Range: */0\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert_eq!(client.count("pets", &PetFilter::All.query_pairs()).await.unwrap(), 0);

        let request = server.await.unwrap();
        assert!(request.head.starts_with("head /rest/v1/pets?select=id http/1.1"));
    }

    #[tokio::test]
    async fn test_count_without_content_range_fails() {
        let (client, server) =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").await;

        let result = client.count("pets", &[]).await;
        assert!(matches!(result, Err(AppError::Other(ref msg)) if msg.contains("Content-Range")));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_session_token_replaces_anon_bearer() {
        let (client, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Range: 0-2/3\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;
        let client = client.with_access_token("session".to_string());

        client.count("pets", &[]).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.head.contains("apikey: anon"));
        assert!(request.head.contains("authorization: bearer session"));
    }

    #[tokio::test]
    async fn test_delete_sends_filtered_delete() {
        let (client, server) =
            serve_once("HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n").await;

        let filters = vec![("id".to_string(), "eq.42".to_string())];
        client.delete("pets", &filters).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.head.starts_with("delete /rest/v1/pets?id=eq.42 http/1.1"));
    }

    #[tokio::test]
    async fn test_not_found_status_maps_to_not_found() {
        let (client, server) =
            serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .await;

        let filters = vec![("id".to_string(), "eq.42".to_string())];
        let result = client.delete("pets", &filters).await;
        assert!(matches!(result, Err(AppError::NotFound)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_upload_object_posts_bytes() {
        let (client, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{}",
        )
        .await;

        client
            .upload_object("pet-images", "abc.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF])
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request
            .head
            .starts_with("post /storage/v1/object/pet-images/abc.jpg http/1.1"));
        assert!(request.head.contains("content-type: image/jpeg"));
        assert!(request.head.contains("x-upsert: false"));
        assert_eq!(request.body, vec![0xFF, 0xD8, 0xFF]);
    }

    #[tokio::test]
    async fn test_rejected_upload_maps_to_backend_error() {
        let (client, server) = serve_once(
            "HTTP/1.1 403 Forbidden\r\nContent-Type: application/json\r\nContent-Length: 56\r\nConnection: close\r\n\r\n{\"message\":\"new row violates row-level security policy\"}",
        )
        .await;

        let result = client
            .upload_object("pet-images", "abc.jpg", "image/jpeg", vec![1])
            .await;

        match result {
            Err(AppError::Backend { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "new row violates row-level security policy");
            }
            other => panic!("Expected Backend error, got {:?}", other),
        }
        server.await.unwrap();
    }
}

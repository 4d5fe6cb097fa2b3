//! HTTP implementation of MaterialRepository
//!
//! Posts each record as JSON to a fixed creation endpoint.

use std::time::Duration;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Url};
use tracing::debug;

use matreg_domain::repository::{MaterialRepository, TransportResponse};
use matreg_domain::MaterialRecord;
use matreg_types::TransportError;

/// HTTP-backed material repository
pub struct HttpMaterialRepository {
    client: Client,
    endpoint: Url,
}

impl HttpMaterialRepository {
    /// Create a repository posting to `endpoint`
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, TransportError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| TransportError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl MaterialRepository for HttpMaterialRepository {
    async fn create(&self, record: &MaterialRecord) -> Result<TransportResponse, TransportError> {
        let body =
            serde_json::to_vec(record).map_err(|e| TransportError::Serialize(e.to_string()))?;

        debug!(endpoint = %self.endpoint, bytes = body.len(), "POST material");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        debug!(status, "Endpoint responded");
        Ok(TransportResponse::new(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use matreg_domain::Material;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn record() -> MaterialRecord {
        Material {
            code: "M1".to_string(),
            description: "Steel Rod".to_string(),
            unit_cost: 10.0,
            quantity: 5.0,
            acquisition_date: NaiveDate::from_ymd_opt(2025, 5, 20).unwrap(),
            supplier: "ACME".to_string(),
            additional_cost: vec![2.0, 3.0],
        }
        .into_record()
    }

    /// Serve exactly one request, answer with `status`, and hand back the raw request
    async fn one_shot_server(status_line: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            let reply = format!(
                "HTTP/1.1 {}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                status_line
            );
            stream.write_all(reply.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        (format!("http://{}/api/materials", addr), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    #[tokio::test]
    async fn test_posts_json_record() {
        let (endpoint, server) = one_shot_server("201 Created").await;
        let repo = HttpMaterialRepository::new(&endpoint, Duration::from_secs(5)).unwrap();

        let response = repo.create(&record()).await.unwrap();
        assert_eq!(response.status, 201);
        assert!(response.is_ok());

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/materials HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("content-type: application/json"));

        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let sent: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(sent["code"], "M1");
        assert_eq!(sent["acquisitionDate"], "2025-05-20");
        assert_eq!(sent["totalCost"], 55.0);
        assert_eq!(sent["additionalCost"], serde_json::json!([2.0, 3.0]));
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let (endpoint, server) = one_shot_server("500 Internal Server Error").await;
        let repo = HttpMaterialRepository::new(&endpoint, Duration::from_secs(5)).unwrap();

        let response = repo.create(&record()).await.unwrap();
        assert_eq!(response.status, 500);
        assert!(!response.is_ok());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let repo = HttpMaterialRepository::new(
            &format!("http://{}/api/materials", addr),
            Duration::from_secs(5),
        )
        .unwrap();

        let err = repo.create(&record()).await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = HttpMaterialRepository::new("not a url", Duration::from_secs(1))
            .err()
            .unwrap();
        assert!(matches!(err, TransportError::InvalidEndpoint(_)));
    }
}

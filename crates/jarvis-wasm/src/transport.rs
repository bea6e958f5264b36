use async_trait::async_trait;
use gloo_net::http::Request;
use jarvis_chat::{MessageTransport, SendError, TransportResponse};

/// `fetch`-based transport. Relative endpoints resolve against the page origin.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpTransport;

#[async_trait(?Send)]
impl MessageTransport for HttpTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<TransportResponse, SendError> {
        log::debug!("POST {}: {}", endpoint, body);

        let response = Request::post(endpoint)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| SendError::Transport(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| SendError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SendError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(TransportResponse { status, body })
    }
}

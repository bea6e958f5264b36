use async_trait::async_trait;

use crate::error::SendError;

/// Raw HTTP reply. Status and body are interpreted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body to the message endpoint.
///
/// Implementations return `Err` only when no response arrived at all. No
/// timeout is applied. Futures are not `Send`: they run on the UI thread.
#[async_trait(?Send)]
pub trait MessageTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<TransportResponse, SendError>;
}

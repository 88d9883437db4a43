use crate::client::{TextMagicClient, TextMagicError};
use crate::domain::PingResult;
use crate::transport::RequestDescriptor;

impl TextMagicClient {
    /// Ping the API.
    pub async fn ping(&self) -> Result<PingResult, TextMagicError> {
        self.execute(RequestDescriptor::get("ping")).await
    }
}

use async_trait::async_trait;
use airdesk_core::{
    BookingConfirmation, BookingGateway, BookingRequest, ChatGateway, ChatReply, ChatRequest,
    GatewayError,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use crate::app_config::Config;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid JSON from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Talks to the booking and chat endpoints over HTTP.
///
/// One POST per call: no retry, no timeout, status codes are not inspected.
/// Whatever body comes back must decode as the expected JSON or the call fails.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    booking_url: String,
    chat_url: String,
    session_id: Option<String>,
}

impl HttpGateway {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            booking_url: config.endpoints.booking_url(),
            chat_url: config.endpoints.chat_url(),
            session_id: config.chat.session_id.clone(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("airdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::new(client, config))
    }

    pub fn booking_url(&self) -> &str {
        &self.booking_url
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|source| {
            warn!("Undecodable response from {} (status {})", url, status);
            ClientError::Decode {
                endpoint: url.to_string(),
                source,
            }
        })
    }
}

#[async_trait]
impl BookingGateway for HttpGateway {
    async fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, GatewayError> {
        let confirmation = self.post_json(&self.booking_url, request).await?;
        Ok(confirmation)
    }
}

#[async_trait]
impl ChatGateway for HttpGateway {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, GatewayError> {
        // A configured session id wins over whatever the caller set
        let body = match (&self.session_id, &request.session_id) {
            (Some(session), _) => ChatRequest {
                message: request.message.clone(),
                session_id: Some(session.clone()),
            },
            _ => request.clone(),
        };
        let reply = self.post_json(&self.chat_url, &body).await?;
        Ok(reply)
    }
}

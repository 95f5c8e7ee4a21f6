//! HttpOrderGateway - posts orders to the marketplace REST backend.

use std::fmt;

use reqwest::blocking::Client;

use super::{OrderGateway, OrderReceipt, OrderRequest};

/// Gateway speaking the backend's `POST /orders/` JSON contract, with
/// optional bearer-token auth.
#[derive(Debug)]
pub struct HttpOrderGateway {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpOrderGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpOrderGateway {
            client: Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach the signed-in user's bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[derive(Debug)]
pub enum HttpGatewayError {
    Transport(reqwest::Error),
    Status(u16),
}

impl fmt::Display for HttpGatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpGatewayError::Transport(err) => write!(f, "order request failed: {}", err),
            HttpGatewayError::Status(code) => {
                write!(f, "order backend answered with status {}", code)
            }
        }
    }
}

impl std::error::Error for HttpGatewayError {}

impl From<reqwest::Error> for HttpGatewayError {
    fn from(err: reqwest::Error) -> Self {
        HttpGatewayError::Transport(err)
    }
}

impl OrderGateway for HttpOrderGateway {
    type Error = HttpGatewayError;

    fn create_order(&mut self, request: &OrderRequest) -> Result<OrderReceipt, Self::Error> {
        let url = format!("{}/orders/", self.base_url.trim_end_matches('/'));
        let mut call = self.client.post(url).json(request);
        if let Some(token) = &self.token {
            call = call.bearer_auth(token);
        }

        let response = call.send()?;
        if !response.status().is_success() {
            return Err(HttpGatewayError::Status(response.status().as_u16()));
        }
        Ok(response.json()?)
    }
}

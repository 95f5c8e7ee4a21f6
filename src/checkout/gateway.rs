use std::fmt;
use std::sync::{Arc, Mutex};

use super::{OrderReceipt, OrderRequest};

/// Trait for handing a finished cart to the order backend.
pub trait OrderGateway {
    type Error: fmt::Display;

    /// Create an order from the request. The caller clears its cart only
    /// after this returns Ok.
    fn create_order(&mut self, request: &OrderRequest) -> Result<OrderReceipt, Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingGatewayError {
    Rejected,
    BufferPoisoned,
}

impl fmt::Display for RecordingGatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingGatewayError::Rejected => write!(f, "order rejected"),
            RecordingGatewayError::BufferPoisoned => write!(f, "recording buffer poisoned"),
        }
    }
}

impl std::error::Error for RecordingGatewayError {}

/// A gateway that records requests in a shared buffer and answers with
/// synthetic receipts. Switch it to rejecting mode to exercise the
/// failure path.
pub struct RecordingGateway {
    requests: Arc<Mutex<Vec<OrderRequest>>>,
    reject: bool,
    next_order: u64,
}

impl Default for RecordingGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingGateway {
    pub fn new() -> Self {
        RecordingGateway {
            requests: Arc::new(Mutex::new(Vec::new())),
            reject: false,
            next_order: 1,
        }
    }

    /// Record into an externally owned buffer.
    pub fn with_buffer(buffer: Arc<Mutex<Vec<OrderRequest>>>) -> Self {
        RecordingGateway {
            requests: buffer,
            reject: false,
            next_order: 1,
        }
    }

    /// A gateway that fails every order.
    pub fn rejecting() -> Self {
        RecordingGateway {
            requests: Arc::new(Mutex::new(Vec::new())),
            reject: true,
            next_order: 1,
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<OrderRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl OrderGateway for RecordingGateway {
    type Error = RecordingGatewayError;

    fn create_order(&mut self, request: &OrderRequest) -> Result<OrderReceipt, Self::Error> {
        if self.reject {
            return Err(RecordingGatewayError::Rejected);
        }
        let mut requests = self
            .requests
            .lock()
            .map_err(|_| RecordingGatewayError::BufferPoisoned)?;
        requests.push(request.clone());

        let id = format!("order-{}", self.next_order);
        self.next_order += 1;
        Ok(OrderReceipt {
            id,
            status: "completed".to_string(),
            created_at: None,
        })
    }
}

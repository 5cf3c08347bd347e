//! Order hand-off
//!
//! The gallery does not own an order flow; it only hands a product to an
//! externally supplied [`OrderContext`] and never observes the result.

use std::sync::Mutex;

use chrono::{DateTime, Local};
use vitrine_core::prelude::*;
use vitrine_core::{Product, ProductId};

/// Receiver of "add to order" requests
pub trait OrderContext: Send + Sync {
    /// Add `product` to the pending order. Fire-and-forget.
    fn add_product(&self, product: &Product);
}

/// One request recorded by [`RecordingOrderContext`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub product_id: ProductId,
    pub code_name: String,
    pub requested_at: DateTime<Local>,
}

/// In-memory order context that records and logs every request
#[derive(Debug, Default)]
pub struct RecordingOrderContext {
    requests: Mutex<Vec<OrderRequest>>,
}

impl RecordingOrderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the requests received so far, oldest first
    pub fn requests(&self) -> Vec<OrderRequest> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.requests().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderContext for RecordingOrderContext {
    fn add_product(&self, product: &Product) {
        let request = OrderRequest {
            product_id: product.id.clone(),
            code_name: product.code_name.clone(),
            requested_at: Local::now(),
        };

        info!(
            "Order request: {} ({}) at {}",
            request.code_name,
            request.product_id,
            request.requested_at.format("%H:%M:%S")
        );

        match self.requests.lock() {
            Ok(mut requests) => requests.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }
    }
}

// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO business logic here, just HTTP requests against the admin backend
// ============================================================================

use gloo_net::http::Request;

use crate::models::{City, Order, Street, TransportApplication};
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// List orders awaiting a decision
    pub async fn get_pending_orders(&self) -> Result<Vec<Order>, String> {
        let url = format!("{}/order/pending", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<Vec<Order>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Approve an order
    pub async fn approve_order(&self, id: u64) -> Result<(), String> {
        log::info!("✅ Aprobando orden: {}", id);
        self.put_status(&format!("order/{}/approve", id)).await
    }

    /// Decline an order
    pub async fn decline_order(&self, id: u64) -> Result<(), String> {
        log::info!("❌ Rechazando orden: {}", id);
        self.put_status(&format!("order/{}/decline", id)).await
    }

    /// List transport applications awaiting a decision
    pub async fn get_pending_applications(&self) -> Result<Vec<TransportApplication>, String> {
        let url = format!("{}/transport-application/pending", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<Vec<TransportApplication>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Approve a transport application
    pub async fn approve_application(&self, id: u64) -> Result<(), String> {
        log::info!("✅ Aprobando solicitud de transporte: {}", id);
        self.put_status(&format!("transport-application/{}/approve", id))
            .await
    }

    /// Reject a transport application
    pub async fn reject_application(&self, id: u64) -> Result<(), String> {
        log::info!("❌ Rechazando solicitud de transporte: {}", id);
        self.put_status(&format!("transport-application/{}/reject", id))
            .await
    }

    /// Street options for the location form
    pub async fn get_streets(&self) -> Result<Vec<Street>, String> {
        let url = format!("{}/street", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<Vec<Street>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// City options for the location form
    pub async fn get_cities(&self) -> Result<Vec<City>, String> {
        let url = format!("{}/city", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        response
            .json::<Vec<City>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Status-change mutations are bare PUTs; the body is irrelevant to the
    /// caller, only the 2xx/not-2xx outcome matters.
    async fn put_status(&self, path: &str) -> Result<(), String> {
        let url = format!("{}/{}", self.base_url, path);
        let response = Request::put(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;
        if response.ok() {
            Ok(())
        } else {
            Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ))
        }
    }
}

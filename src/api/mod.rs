// src/api/mod.rs

pub mod crypto;
pub mod health;

// AppState definition
use crate::config::Config;
use crate::integrations::{CryptoCompareClient, LaMetricClient};
use crate::services::QuoteCache;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cache: Arc<QuoteCache>,
    pub quotes: Arc<CryptoCompareClient>,
    pub device: Option<Arc<LaMetricClient>>,
}

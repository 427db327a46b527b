use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::{AppError, Result},
    models::{ApiResponse, FramesResponse, Notification, PairKey, Priority, Sound},
    services::renderer,
    utils::normalize_symbol,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct PairQuery {
    pub curr1: Option<String>,
    pub curr2: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PushQuery {
    pub curr1: Option<String>,
    pub curr2: Option<String>,
    pub priority: Option<String>,
    pub sound: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PushResponse {
    pub pair: String,
    pub delivered: bool,
}

/// GET /api/v1/crypto/price
pub async fn get_price(
    State(state): State<AppState>,
    Query(query): Query<PairQuery>,
) -> Result<Json<FramesResponse>> {
    let pair = resolve_pair(&state.config, &query)?;
    let view = state.cache.get_view(&pair, state.quotes.as_ref()).await?;

    Ok(Json(FramesResponse {
        frames: renderer::build_frames(&pair, view.price, view.normalized),
    }))
}

/// POST /api/v1/crypto/push
pub async fn push_to_device(
    State(state): State<AppState>,
    Query(query): Query<PushQuery>,
) -> Result<Json<ApiResponse<PushResponse>>> {
    let device = state.device.clone().ok_or_else(|| {
        AppError::DeviceUnreachable("no display device configured".to_string())
    })?;

    let priority = match query.priority.as_deref() {
        None => Priority::Info,
        Some(raw) => Priority::from_name(raw)
            .ok_or_else(|| AppError::BadRequest(format!("unknown priority: {:?}", raw)))?,
    };
    let sound = query.sound.as_deref().map(|id| Sound::new(id, 1));

    let pair_query = PairQuery {
        curr1: query.curr1,
        curr2: query.curr2,
    };
    let pair = resolve_pair(&state.config, &pair_query)?;
    let view = state.cache.get_view(&pair, state.quotes.as_ref()).await?;
    let frames = renderer::build_frames(&pair, view.price, view.normalized);

    device
        .send(&Notification::new(priority, frames, sound))
        .await?;

    Ok(Json(ApiResponse::success(PushResponse {
        pair: pair.to_string(),
        delivered: true,
    })))
}

fn resolve_pair(config: &Config, query: &PairQuery) -> Result<PairKey> {
    let base = normalize_symbol(query.curr1.as_deref().unwrap_or(&config.default_base))?;
    let quote = normalize_symbol(query.curr2.as_deref().unwrap_or(&config.default_quote))?;
    Ok(PairKey::new(base, quote))
}

//! Dish HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::Dish;
use super::validation::{DishDraft, id_mismatch};
use crate::core::error::ApiResult;
use crate::core::extractors::{DataEnvelope, Envelope};
use crate::core::service::resolve;
use crate::core::validation::id_matches;
use crate::server::AppState;

/// GET /dishes
pub async fn list_dishes(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Dish>>>> {
    let dishes = state.dishes.list().await?;
    Ok(Json(Envelope::new(dishes)))
}

/// POST /dishes
pub async fn create_dish(
    State(state): State<AppState>,
    DataEnvelope(payload): DataEnvelope,
) -> ApiResult<(StatusCode, Json<Envelope<Dish>>)> {
    let _gate = state.begin_write().await;

    let draft = DishDraft::validate(&payload)?;
    let dish = state
        .dishes
        .create(Dish::from_draft(state.ids.next_id(), draft))
        .await?;

    tracing::debug!(dish_id = %dish.id, "dish created");
    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

/// GET /dishes/{dishId}
pub async fn get_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
) -> ApiResult<Json<Envelope<Dish>>> {
    let dish = resolve(state.dishes.as_ref(), &dish_id).await?;
    Ok(Json(Envelope::new(dish)))
}

/// PUT /dishes/{dishId}
///
/// `dishExists → dishIdMatches → validator chain → update`
pub async fn update_dish(
    State(state): State<AppState>,
    Path(dish_id): Path<String>,
    DataEnvelope(payload): DataEnvelope,
) -> ApiResult<Json<Envelope<Dish>>> {
    let _gate = state.begin_write().await;

    let mut dish = resolve(state.dishes.as_ref(), &dish_id).await?;
    id_matches(&payload, &dish_id, id_mismatch)?;
    let draft = DishDraft::validate(&payload)?;

    dish.apply(draft);
    let dish = state.dishes.update(&dish_id, dish).await?;

    tracing::debug!(dish_id = %dish.id, "dish updated");
    Ok(Json(Envelope::new(dish)))
}

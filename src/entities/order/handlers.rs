//! Order HTTP handlers
//!
//! Each mutating handler runs its chain under the write gate and returns on
//! the first failing step, so a rejected request leaves the store untouched.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::Order;
use super::status::{check_pending, check_status, initial_status};
use super::validation::{OrderDraft, id_mismatch};
use crate::core::error::ApiResult;
use crate::core::extractors::{DataEnvelope, Envelope};
use crate::core::service::resolve;
use crate::core::validation::id_matches;
use crate::server::AppState;

/// GET /orders
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Envelope<Vec<Order>>>> {
    let orders = state.orders.list().await?;
    Ok(Json(Envelope::new(orders)))
}

/// POST /orders
pub async fn create_order(
    State(state): State<AppState>,
    DataEnvelope(payload): DataEnvelope,
) -> ApiResult<(StatusCode, Json<Envelope<Order>>)> {
    let _gate = state.begin_write().await;

    let draft = OrderDraft::validate(&payload)?;
    let status = initial_status(&payload)?;
    let order = state
        .orders
        .create(Order::from_draft(state.ids.next_id(), draft, status))
        .await?;

    tracing::debug!(order_id = %order.id, status = %order.status, "order created");
    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

/// GET /orders/{orderId}
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Json<Envelope<Order>>> {
    let order = resolve(state.orders.as_ref(), &order_id).await?;
    Ok(Json(Envelope::new(order)))
}

/// PUT /orders/{orderId}
///
/// `orderExists → validator chain → checkStatus → orderIdMatches → update`
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    DataEnvelope(payload): DataEnvelope,
) -> ApiResult<Json<Envelope<Order>>> {
    let _gate = state.begin_write().await;

    let mut order = resolve(state.orders.as_ref(), &order_id).await?;
    let draft = OrderDraft::validate(&payload)?;
    let next = check_status(order.status, &payload)?;
    id_matches(&payload, &order_id, id_mismatch)?;

    let previous = order.status;
    order.apply(draft, next);
    let order = state.orders.update(&order_id, order).await?;

    tracing::debug!(order_id = %order.id, from = %previous, to = %order.status, "order updated");
    Ok(Json(Envelope::new(order)))
}

/// DELETE /orders/{orderId}
///
/// `orderExists → checkPending → destroy`
pub async fn delete_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> ApiResult<StatusCode> {
    let _gate = state.begin_write().await;

    let order = resolve(state.orders.as_ref(), &order_id).await?;
    check_pending(order.status)?;

    state.orders.delete(&order_id).await?;

    tracing::debug!(order_id = %order_id, "order deleted");
    Ok(StatusCode::NO_CONTENT)
}

//! Concurrent mutation tests
//!
//! Handlers are called directly on a shared `AppState` from many tasks at
//! once; the write gate must keep every pipeline atomic.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use grubdash::entities::dish::handlers::create_dish;
use grubdash::entities::order::handlers::{delete_order, update_order};
use grubdash::prelude::*;
use serde_json::json;
use tokio::task::JoinSet;

fn state_with_pending_order() -> AppState {
    let mut builder = ServerBuilder::new().with_seed(SeedConfig {
        dishes: vec![],
        orders: vec![Order {
            id: "o1".to_string(),
            deliver_to: "1 Main St".to_string(),
            mobile_number: "555".to_string(),
            status: OrderStatus::Pending,
            dishes: vec![LineItem {
                dish_id: Some("d1".to_string()),
                quantity: 1,
                details: Default::default(),
            }],
        }],
    });
    builder.build_state()
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let state = state_with_pending_order();
    let mut tasks = JoinSet::new();

    for i in 0..50 {
        let state = state.clone();
        tasks.spawn(async move {
            let payload = json!({
                "name": format!("Dish {}", i),
                "description": "house special",
                "price": i + 1,
                "image_url": "x"
            });
            create_dish(State(state), DataEnvelope(payload)).await
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (status, _) = result.unwrap().unwrap();
        assert_eq!(status, StatusCode::CREATED);
    }

    let dishes = state.dishes.list().await.unwrap();
    assert_eq!(dishes.len(), 50);

    let mut ids: Vec<_> = dishes.iter().map(|d| d.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[tokio::test]
async fn test_update_and_delete_race_has_one_outcome() {
    let state = state_with_pending_order();

    let update = {
        let state = state.clone();
        tokio::spawn(async move {
            let payload = json!({
                "deliverTo": "1 Main St",
                "mobileNumber": "555",
                "status": "preparing",
                "dishes": [{ "dishId": "d1", "quantity": 1 }]
            });
            update_order(State(state), Path("o1".to_string()), DataEnvelope(payload)).await
        })
    };
    let delete = {
        let state = state.clone();
        tokio::spawn(async move { delete_order(State(state), Path("o1".to_string())).await })
    };

    let updated = update.await.unwrap();
    let deleted = delete.await.unwrap();
    let stored = state.orders.get("o1").await.unwrap();

    match (updated.is_ok(), deleted.is_ok()) {
        // update first: order left the pending state, so delete was refused
        (true, false) => {
            assert_eq!(stored.map(|o| o.status), Some(OrderStatus::Preparing));
        }
        // delete first: the update then found nothing
        (false, true) => {
            assert!(stored.is_none());
        }
        outcome => panic!("unexpected outcome {:?}", outcome),
    }
}

//! Distribution reconciliation tests
//!
//! Covers selection limits against live stock, both fulfillment metrics,
//! the empty-selection guard, and the atomic stock decrement on confirm.

use chrono::{Duration, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use hatworks_backend::services::distribution::{
    DistributeInput, DistributionLineInput, DistributionService,
};
use hatworks_backend::services::requests::{
    CreateRequestInput, RequestLineInput, RequestService,
};
use hatworks_backend::store::Store;
use shared::{
    MaterialCategory, MaterialStock, Priority, Request, RequestStatus, RequestType, Requester,
};

fn material(name: &str, quantity: u32) -> MaterialStock {
    MaterialStock {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: MaterialCategory::Fabric,
        quantity,
        unit: "m".to_string(),
        cost_per_unit: Decimal::from(100),
        supplier: "Northern Textiles".to_string(),
        min_threshold: 10,
        last_updated: Utc::now(),
        version: 0,
    }
}

/// Seed a store with the given (stock, requested) pairs and one pending
/// material request covering them all
async fn seeded(lines: &[(u32, u32)]) -> (Store, String, Vec<Uuid>) {
    let store = Store::new();
    let mut material_ids = Vec::new();
    {
        let mut inner = store.write().await;
        for (index, (stock, _)) in lines.iter().enumerate() {
            let m = material(&format!("Material {index}"), *stock);
            material_ids.push(m.id);
            inner.materials.insert(m.id, m);
        }
    }

    let service = RequestService::new(store.clone());
    let request = service
        .create(CreateRequestInput {
            request_type: RequestType::Material,
            priority: Priority::High,
            requested_by: Requester {
                id: Uuid::new_v4(),
                name: "Mali Srisuk".to_string(),
            },
            factory: "Riverside".to_string(),
            batch_id: None,
            due_date: Utc::now().date_naive() + Duration::days(5),
            materials: material_ids
                .iter()
                .zip(lines)
                .map(|(id, (_, requested))| RequestLineInput {
                    material_id: *id,
                    requested_qty: *requested,
                })
                .collect(),
            correction_details: None,
            quality_issue: None,
            notes: String::new(),
            attachments: vec![],
        })
        .await
        .unwrap();

    (store, request.id, material_ids)
}

#[tokio::test]
async fn test_line_limit_is_min_of_requested_and_stock() {
    let (store, request_id, _) = seeded(&[(20, 50), (80, 30)]).await;
    let service = DistributionService::new(store);

    let plan = service.plan(&request_id).await.unwrap();
    assert_eq!(plan.lines()[0].limit(), 20);
    assert_eq!(plan.lines()[1].limit(), 30);
}

#[tokio::test]
async fn test_toggle_out_of_stock_line_is_rejected() {
    let (store, request_id, ids) = seeded(&[(0, 10)]).await;
    let service = DistributionService::new(store);

    let mut plan = service.plan(&request_id).await.unwrap();
    assert!(plan.toggle(ids[0]).is_err());
    assert_eq!(plan.selected_count(), 0);
}

#[tokio::test]
async fn test_set_quantity_rejects_out_of_range_and_keeps_last_value() {
    let (store, request_id, ids) = seeded(&[(20, 50)]).await;
    let service = DistributionService::new(store);

    let mut plan = service.plan(&request_id).await.unwrap();
    plan.toggle(ids[0]).unwrap();
    plan.set_quantity(ids[0], 15).unwrap();

    assert!(plan.set_quantity(ids[0], 0).is_err());
    assert!(plan.set_quantity(ids[0], 21).is_err());
    assert_eq!(plan.lines()[0].selected_qty, Some(15));
}

#[tokio::test]
async fn test_set_quantity_requires_selection() {
    let (store, request_id, ids) = seeded(&[(20, 50)]).await;
    let service = DistributionService::new(store);

    let mut plan = service.plan(&request_id).await.unwrap();
    assert!(plan.set_quantity(ids[0], 5).is_err());
}

#[tokio::test]
async fn test_steppers_clamp_at_limit_and_one() {
    let (store, request_id, ids) = seeded(&[(3, 10)]).await;
    let service = DistributionService::new(store);

    let mut plan = service.plan(&request_id).await.unwrap();
    plan.toggle(ids[0]).unwrap();

    for _ in 0..10 {
        plan.increment(ids[0]).unwrap();
    }
    assert_eq!(plan.lines()[0].selected_qty, Some(3));

    for _ in 0..10 {
        plan.decrement(ids[0]).unwrap();
    }
    assert_eq!(plan.lines()[0].selected_qty, Some(1));
}

#[tokio::test]
async fn test_both_fulfillment_metrics() {
    let (store, request_id, ids) = seeded(&[(100, 40), (100, 60)]).await;
    let service = DistributionService::new(store);

    let mut plan = service.plan(&request_id).await.unwrap();
    plan.toggle(ids[0]).unwrap();
    plan.set_quantity(ids[0], 40).unwrap();

    // One of two lines selected, 40 of 100 units
    assert_eq!(plan.material_coverage_percent(), 50);
    assert_eq!(plan.quantity_fulfillment_percent(), 40);

    plan.toggle(ids[1]).unwrap();
    plan.set_quantity(ids[1], 60).unwrap();
    assert_eq!(plan.material_coverage_percent(), 100);
    assert_eq!(plan.quantity_fulfillment_percent(), 100);
}

#[tokio::test]
async fn test_total_cost_sums_selected_lines() {
    let (store, request_id, ids) = seeded(&[(100, 40), (100, 60)]).await;
    let service = DistributionService::new(store);

    let mut plan = service.plan(&request_id).await.unwrap();
    plan.toggle(ids[0]).unwrap();
    plan.set_quantity(ids[0], 5).unwrap();

    // 5 units at 100 per unit
    assert_eq!(plan.total_cost(), Decimal::from(500));
}

#[tokio::test]
async fn test_empty_selection_cannot_confirm_and_leaves_request_pending() {
    let (store, request_id, _) = seeded(&[(20, 50)]).await;
    let service = DistributionService::new(store.clone());

    let plan = service.plan(&request_id).await.unwrap();
    assert!(service.confirm(&plan).await.is_err());

    let request = store.read().await.requests[&request_id].clone();
    assert_eq!(request.status, RequestStatus::Pending);
}

#[tokio::test]
async fn test_confirm_decrements_stock_and_resolves_request() {
    let (store, request_id, ids) = seeded(&[(20, 50), (80, 30)]).await;
    let service = DistributionService::new(store.clone());

    let result = service
        .distribute(
            &request_id,
            DistributeInput {
                lines: vec![
                    DistributionLineInput {
                        material_id: ids[0],
                        quantity: 20,
                    },
                    DistributionLineInput {
                        material_id: ids[1],
                        quantity: 25,
                    },
                ],
            },
        )
        .await
        .unwrap();

    assert_eq!(result.material_coverage_percent, 100);
    // 45 of 80 requested units
    assert_eq!(result.quantity_fulfillment_percent, 56);

    let inner = store.read().await;
    assert_eq!(inner.materials[&ids[0]].quantity, 0);
    assert_eq!(inner.materials[&ids[1]].quantity, 55);
    assert_eq!(inner.materials[&ids[0]].version, 1);

    let request = &inner.requests[&request_id];
    assert_eq!(request.status, RequestStatus::Approved);
    assert!(request.responded_date.is_some());
    assert_eq!(request.materials[0].approved_qty, 20);
    assert_eq!(request.materials[1].approved_qty, 25);
}

#[tokio::test]
async fn test_confirm_rejects_already_resolved_request() {
    let (store, request_id, ids) = seeded(&[(20, 50)]).await;
    let distribution = DistributionService::new(store.clone());
    let requests = RequestService::new(store);

    let mut plan = distribution.plan(&request_id).await.unwrap();
    plan.toggle(ids[0]).unwrap();

    // The request resolves between planning and confirming
    requests.deny(&request_id, None).await.unwrap();
    assert!(distribution.confirm(&plan).await.is_err());
}

#[tokio::test]
async fn test_plan_rejects_non_material_request() {
    let store = Store::new();
    let request = Request {
        id: "R-0001".to_string(),
        request_type: RequestType::Correction,
        priority: Priority::Medium,
        status: RequestStatus::Pending,
        requested_by: Requester {
            id: Uuid::new_v4(),
            name: "Anan Chai".to_string(),
        },
        factory: "Hilltop".to_string(),
        batch_id: None,
        created_date: Utc::now(),
        due_date: Utc::now().date_naive(),
        responded_date: None,
        materials: vec![],
        correction_details: None,
        quality_issue: None,
        notes: String::new(),
        response_notes: None,
        attachments: vec![],
    };
    store
        .write()
        .await
        .requests
        .insert(request.id.clone(), request);

    let service = DistributionService::new(store);
    assert!(service.plan("R-0001").await.is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A line's selection limit never exceeds either bound
    #[test]
    fn prop_limit_is_min(stock in 0u32..10_000, requested in 1u32..10_000) {
        let limit = requested.min(stock);
        prop_assert!(limit <= stock);
        prop_assert!(limit <= requested);
        prop_assert!(limit == stock || limit == requested);
    }

    /// Fulfillment percentages always land in 0..=100 when every selection
    /// respects its line limit
    #[test]
    fn prop_fulfillment_bounded(
        lines in prop::collection::vec((1u32..1_000, 0u32..1_000), 1..10)
    ) {
        let requested: u64 = lines.iter().map(|(r, _)| *r as u64).sum();
        let selected: u64 = lines
            .iter()
            .map(|(r, s)| (*s).min(*r) as u64)
            .sum();

        let percent = ((selected as f64 / requested as f64) * 100.0).round() as u32;
        prop_assert!(percent <= 100);

        let selected_count = lines.iter().filter(|(r, s)| (*s).min(*r) > 0).count();
        let coverage = ((selected_count as f64 / lines.len() as f64) * 100.0).round() as u32;
        prop_assert!(coverage <= 100);
    }
}

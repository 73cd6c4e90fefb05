//! Sample data set loaded at startup in development
//!
//! Stands in for the production data source so every screen has something
//! to show. Quantities and prices are plausible for a hat factory but
//! otherwise arbitrary.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{
    BatchStatus, CorrectionDetails, Defect, DefectSeverity, InspectionStatus, MaterialCategory,
    MaterialLineItem, MaterialStock, Priority, Product, ProductionBatch, QcInspection,
    QualityIssue, Request, RequestStatus, RequestType, Requester,
};

use super::StoreInner;

pub fn load(store: &mut StoreInner) {
    let now = Utc::now();
    let today = now.date_naive();

    // Inventory catalog
    let materials = [
        ("Wool felt, charcoal", MaterialCategory::Fabric, 420, "m", 145, "Northern Textiles", 200),
        ("Cotton twill, navy", MaterialCategory::Fabric, 90, "m", 88, "Northern Textiles", 250),
        ("Polyester thread, black", MaterialCategory::Thread, 1200, "spool", 12, "Siam Thread Co", 400),
        ("Leather sweatband strip", MaterialCategory::Accessory, 35, "roll", 310, "Hartwell Leather", 120),
        ("Brim wire, 2mm", MaterialCategory::Accessory, 0, "coil", 56, "Metro Hardware", 60),
        ("Shipping boxes, medium", MaterialCategory::Packaging, 800, "pc", 9, "PackRight", 300),
        ("Indigo dye", MaterialCategory::Dye, 18, "kg", 420, "ColorWorks", 40),
    ];
    let mut material_ids = Vec::new();
    for (name, category, quantity, unit, cost, supplier, threshold) in materials {
        let id = Uuid::new_v4();
        material_ids.push(id);
        store.materials.insert(
            id,
            MaterialStock {
                id,
                name: name.to_string(),
                category,
                quantity,
                unit: unit.to_string(),
                cost_per_unit: Decimal::from(cost),
                supplier: supplier.to_string(),
                min_threshold: threshold,
                last_updated: now,
                version: 0,
            },
        );
    }

    // Product catalog
    let products = [
        ("FEDORA01", "Classic Fedora", "Wool felt fedora with leather sweatband"),
        ("CAP2024", "Ball Cap 2024", "Six-panel cotton twill cap"),
        ("BUCKET3", "Bucket Hat No. 3", "Reversible cotton bucket hat"),
    ];
    let mut product_ids = Vec::new();
    for (code, name, description) in products {
        let id = Uuid::new_v4();
        product_ids.push(id);
        store.products.insert(
            id,
            Product {
                id,
                code: code.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                image_url: None,
                created_at: now - Duration::days(90),
                updated_at: now - Duration::days(30),
                version: 0,
            },
        );
    }

    // Production batches
    let batch_rows = [
        ("B-2024-0101", 0, "Riverside", "blocking", 180, 500, BatchStatus::InProgress),
        ("B-2024-0102", 1, "Hilltop", "stitching", 450, 450, BatchStatus::QcPending),
        ("B-2024-0103", 2, "Riverside", "finishing", 300, 300, BatchStatus::Completed),
    ];
    let mut batch_ids = Vec::new();
    for (code, product_idx, factory, stage, done, total, status) in batch_rows {
        let id = Uuid::new_v4();
        batch_ids.push(id);
        let product = &store.products[&product_ids[product_idx]];
        store.batches.insert(
            id,
            ProductionBatch {
                id,
                code: code.to_string(),
                product_id: product.id,
                product_code: product.code.clone(),
                factory: factory.to_string(),
                stage: stage.to_string(),
                done_qty: done,
                total_qty: total,
                status,
                start_date: today - Duration::days(20),
                end_date: today + Duration::days(25),
                created_at: now - Duration::days(20),
                updated_at: now - Duration::days(1),
                version: 0,
            },
        );
    }

    // Request registry
    let wool = &store.materials[&material_ids[0]];
    let thread = &store.materials[&material_ids[2]];
    let sweatband = &store.materials[&material_ids[3]];

    let line = |m: &MaterialStock, requested: u32| MaterialLineItem {
        material_id: m.id,
        material_name: m.name.clone(),
        requested_qty: requested,
        approved_qty: 0,
        unit: m.unit.clone(),
        current_stock: m.quantity,
        unit_price: m.cost_per_unit,
    };

    let requests = vec![
        Request {
            id: "R-0001".to_string(),
            request_type: RequestType::Material,
            priority: Priority::High,
            status: RequestStatus::Pending,
            requested_by: Requester {
                id: Uuid::new_v4(),
                name: "Mali Srisuk".to_string(),
            },
            factory: "Riverside".to_string(),
            batch_id: Some("B-2024-0101".to_string()),
            created_date: now,
            due_date: today + Duration::days(5),
            responded_date: None,
            materials: vec![line(wool, 60), line(thread, 40), line(sweatband, 12)],
            correction_details: None,
            quality_issue: None,
            notes: "Felt stock on the floor is nearly out".to_string(),
            response_notes: None,
            attachments: vec![],
        },
        Request {
            id: "R-0002".to_string(),
            request_type: RequestType::Correction,
            priority: Priority::Medium,
            status: RequestStatus::Pending,
            requested_by: Requester {
                id: Uuid::new_v4(),
                name: "Anan Chai".to_string(),
            },
            factory: "Hilltop".to_string(),
            batch_id: Some("B-2024-0102".to_string()),
            created_date: now - Duration::days(1),
            due_date: today + Duration::days(3),
            responded_date: None,
            materials: vec![],
            correction_details: Some(CorrectionDetails {
                batch_code: "B-2024-0102".to_string(),
                defect_summary: "Crooked stitching on 30 caps".to_string(),
                affected_qty: 30,
            }),
            quality_issue: None,
            notes: "Rework before QC sign-off".to_string(),
            response_notes: None,
            attachments: vec!["stitching-photo.jpg".to_string()],
        },
        Request {
            id: "R-0003".to_string(),
            request_type: RequestType::Urgent,
            priority: Priority::Urgent,
            status: RequestStatus::Pending,
            requested_by: Requester {
                id: Uuid::new_v4(),
                name: "Preeda Wong".to_string(),
            },
            factory: "Riverside".to_string(),
            batch_id: None,
            created_date: now - Duration::hours(3),
            due_date: today + Duration::days(1),
            responded_date: None,
            materials: vec![],
            correction_details: None,
            quality_issue: Some(QualityIssue {
                stage: "finishing".to_string(),
                description: "Dye bleeding on finished brims".to_string(),
                severity: DefectSeverity::Major,
            }),
            notes: "Courier pickup blocked until resolved".to_string(),
            response_notes: None,
            attachments: vec![],
        },
        Request {
            id: "R-0004".to_string(),
            request_type: RequestType::Material,
            priority: Priority::Low,
            status: RequestStatus::Approved,
            requested_by: Requester {
                id: Uuid::new_v4(),
                name: "Mali Srisuk".to_string(),
            },
            factory: "Hilltop".to_string(),
            batch_id: None,
            created_date: now - Duration::days(7),
            due_date: today - Duration::days(2),
            responded_date: Some(now - Duration::days(6)),
            materials: vec![line(thread, 100)],
            correction_details: None,
            quality_issue: None,
            notes: String::new(),
            response_notes: Some("Issued from main store".to_string()),
            attachments: vec![],
        },
    ];
    for request in requests {
        store.requests.insert(request.id.clone(), request);
    }
    store.reserve_request_seq(4);

    // QC inspections
    let inspections = [
        (0, "blocking", 50, Priority::High, InspectionStatus::Pending, vec![]),
        (1, "stitching", 450, Priority::Medium, InspectionStatus::InProgress, vec![]),
        (
            2,
            "finishing",
            300,
            Priority::Medium,
            InspectionStatus::Completed,
            vec![Defect {
                defect_type: "loose_thread".to_string(),
                description: "Trimmed on the line".to_string(),
                severity: DefectSeverity::Minor,
            }],
        ),
    ];
    for (batch_idx, stage, quantity, priority, status, defects) in inspections {
        let id = Uuid::new_v4();
        let batch = &store.batches[&batch_ids[batch_idx]];
        store.inspections.insert(
            id,
            QcInspection {
                id,
                batch_id: batch.id,
                batch_name: batch.code.clone(),
                product_code: batch.product_code.clone(),
                stage: stage.to_string(),
                quantity,
                priority,
                factory_id: Uuid::new_v4(),
                factory_name: batch.factory.clone(),
                assigned_to: "QC Team A".to_string(),
                status,
                created_at: now - Duration::days(2),
                due_date: today + Duration::days(2),
                notes: String::new(),
                defects,
            },
        );
    }
}

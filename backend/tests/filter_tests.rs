//! Filter and sort engine tests
//!
//! Property coverage for the pure engine: filtering returns a subset and
//! never mutates its input, every dimension combines with AND, and sorting
//! is a permutation ordered by its key.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use uuid::Uuid;

use shared::{
    filter_requests, sort_requests, Priority, QuickFilter, Request, RequestFilter, RequestSortKey,
    RequestStatus, RequestType, Requester,
};

fn type_strategy() -> impl Strategy<Value = RequestType> {
    prop_oneof![
        Just(RequestType::Material),
        Just(RequestType::Correction),
        Just(RequestType::Quality),
        Just(RequestType::Urgent),
    ]
}

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
        Just(Priority::Urgent),
    ]
}

fn status_strategy() -> impl Strategy<Value = RequestStatus> {
    prop_oneof![
        Just(RequestStatus::Pending),
        Just(RequestStatus::Approved),
        Just(RequestStatus::Denied),
    ]
}

fn request_strategy() -> impl Strategy<Value = Request> {
    (
        1u32..10_000,
        type_strategy(),
        priority_strategy(),
        status_strategy(),
        prop_oneof![Just("Riverside"), Just("Hilltop"), Just("Lakeside")],
        0i64..60,
        -30i64..30,
    )
        .prop_map(
            |(seq, request_type, priority, status, factory, age_days, due_offset)| {
                let created = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
                    - Duration::days(age_days);
                Request {
                    id: shared::format_request_id(seq),
                    request_type,
                    priority,
                    status,
                    requested_by: Requester {
                        id: Uuid::new_v4(),
                        name: "Mali Srisuk".to_string(),
                    },
                    factory: factory.to_string(),
                    batch_id: None,
                    created_date: created,
                    due_date: created.date_naive() + Duration::days(due_offset.max(1)),
                    responded_date: None,
                    materials: vec![],
                    correction_details: None,
                    quality_issue: None,
                    notes: String::new(),
                    response_notes: None,
                    attachments: vec![],
                }
            },
        )
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn sort_key_strategy() -> impl Strategy<Value = RequestSortKey> {
    prop_oneof![
        Just(RequestSortKey::CreatedDesc),
        Just(RequestSortKey::CreatedAsc),
        Just(RequestSortKey::PriorityDesc),
        Just(RequestSortKey::PriorityAsc),
        Just(RequestSortKey::DueAsc),
        Just(RequestSortKey::DueDesc),
        Just(RequestSortKey::FactoryAsc),
        Just(RequestSortKey::FactoryDesc),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Filtering never mutates its input and returns a subset
    #[test]
    fn prop_filter_is_pure_subset(
        requests in prop::collection::vec(request_strategy(), 0..30),
        statuses in prop::collection::vec(status_strategy(), 0..3)
    ) {
        let before: Vec<String> = requests.iter().map(|r| r.id.clone()).collect();
        let filter = RequestFilter {
            statuses,
            ..Default::default()
        };
        let matched = filter_requests(&requests, &filter, today());

        let after: Vec<String> = requests.iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(before, after);
        prop_assert!(matched.len() <= requests.len());
        for r in &matched {
            prop_assert!(requests.iter().any(|orig| orig.id == r.id));
        }
    }

    /// Every matched request passes every active dimension
    #[test]
    fn prop_dimensions_combine_with_and(
        requests in prop::collection::vec(request_strategy(), 0..30),
        types in prop::collection::vec(type_strategy(), 1..3),
        priorities in prop::collection::vec(priority_strategy(), 1..3)
    ) {
        let filter = RequestFilter {
            types: types.clone(),
            priorities: priorities.clone(),
            ..Default::default()
        };
        for r in filter_requests(&requests, &filter, today()) {
            prop_assert!(types.contains(&r.request_type));
            prop_assert!(priorities.contains(&r.priority));
        }
    }

    /// An empty multi-select set restricts nothing
    #[test]
    fn prop_empty_sets_are_unrestricted(
        requests in prop::collection::vec(request_strategy(), 0..30)
    ) {
        let matched = filter_requests(&requests, &RequestFilter::default(), today());
        prop_assert_eq!(matched.len(), requests.len());
    }

    /// The urgent quick filter only passes pending urgent requests
    #[test]
    fn prop_quick_urgent(requests in prop::collection::vec(request_strategy(), 0..30)) {
        let filter = RequestFilter {
            quick: QuickFilter::Urgent,
            ..Default::default()
        };
        for r in filter_requests(&requests, &filter, today()) {
            prop_assert_eq!(r.priority, Priority::Urgent);
            prop_assert_eq!(r.status, RequestStatus::Pending);
        }
    }

    /// Sorting permutes the list and orders it by the key
    #[test]
    fn prop_sort_is_ordered_permutation(
        requests in prop::collection::vec(request_strategy(), 0..30),
        key in sort_key_strategy()
    ) {
        let mut sorted = requests.clone();
        sort_requests(&mut sorted, key);

        prop_assert_eq!(sorted.len(), requests.len());
        let mut before: Vec<&str> = requests.iter().map(|r| r.id.as_str()).collect();
        let mut after: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);

        for pair in sorted.windows(2) {
            let ordered = match key {
                RequestSortKey::CreatedAsc => pair[0].created_date <= pair[1].created_date,
                RequestSortKey::CreatedDesc => pair[0].created_date >= pair[1].created_date,
                RequestSortKey::PriorityAsc => pair[0].priority.rank() <= pair[1].priority.rank(),
                RequestSortKey::PriorityDesc => pair[0].priority.rank() >= pair[1].priority.rank(),
                RequestSortKey::DueAsc => pair[0].due_date <= pair[1].due_date,
                RequestSortKey::DueDesc => pair[0].due_date >= pair[1].due_date,
                RequestSortKey::FactoryAsc => pair[0].factory <= pair[1].factory,
                RequestSortKey::FactoryDesc => pair[0].factory >= pair[1].factory,
            };
            prop_assert!(ordered, "adjacent pair out of order for {key:?}");
        }

        // Sorting an already sorted list changes nothing
        let mut twice = sorted.clone();
        sort_requests(&mut twice, key);
        let once: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        let again: Vec<&str> = twice.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(once, again);
    }

    /// Search is case-insensitive over the factory name
    #[test]
    fn prop_search_case_insensitive(
        requests in prop::collection::vec(request_strategy(), 0..30)
    ) {
        let lower = RequestFilter {
            search: Some("riverside".to_string()),
            ..Default::default()
        };
        let upper = RequestFilter {
            search: Some("RIVERSIDE".to_string()),
            ..Default::default()
        };
        let a = filter_requests(&requests, &lower, today());
        let b = filter_requests(&requests, &upper, today());
        prop_assert_eq!(a.len(), b.len());
    }
}

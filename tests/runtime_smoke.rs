use std::{collections::BTreeSet, time::Duration};

use docroster::{
    core::store::DoctorStore,
    doctor::DoctorDraft,
    error::{ErrorKind, RuntimeError, StoreError},
    runtime::{
        events::RosterEvent,
        handle::{spawn_roster, RuntimeConfig},
    },
    types::PaginationMode,
};
use tokio::time::Instant;

fn ada() -> DoctorDraft {
    DoctorDraft::new("Ada", "Lovelace", "ada@x.com", "Neurology", "555-0100")
}

#[tokio::test]
async fn runtime_crud_round_trip_and_events_ordered() {
    let handle = spawn_roster(DoctorStore::new(), RuntimeConfig::immediate());
    let mut sub = handle.subscribe();

    let rec = handle.create(ada()).await.expect("create");
    assert_eq!(handle.list(1, 10).await.expect("list"), vec![rec.clone()]);

    let replacement = DoctorDraft::new("Ada", "King", "ada.king@x.com", "Mathematics", "555-0101");
    let updated = handle
        .update(rec.id.clone(), replacement.clone())
        .await
        .expect("update");
    assert_eq!(updated.id, rec.id);
    assert_eq!(handle.get(rec.id.clone()).await.expect("get").to_draft(), replacement);

    handle.delete(rec.id.clone()).await.expect("delete");
    let err = handle.get(rec.id.clone()).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(handle.delete(rec.id.clone()).await.unwrap_err().is_not_found());

    let mut seen = Vec::new();
    for _ in 0..3 {
        let evt = tokio::time::timeout(Duration::from_secs(1), sub.recv())
            .await
            .expect("event")
            .expect("recv");
        seen.push(evt);
    }
    assert_eq!(
        seen,
        vec![
            RosterEvent::Created { id: rec.id.clone() },
            RosterEvent::Updated { id: rec.id.clone() },
            RosterEvent::Deleted { id: rec.id },
        ]
    );

    handle.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn invalid_create_surfaces_validation_kind_and_changes_nothing() {
    let handle = spawn_roster(DoctorStore::with_seed_data().unwrap(), RuntimeConfig::immediate());

    let mut bad = ada();
    bad.email = "not-an-email".to_string();
    let err = handle.create(bad).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(matches!(err, RuntimeError::Store(StoreError::Validation(_))));
    assert_eq!(handle.count().await.expect("count"), 5);

    let err = handle.update("does-not-exist", ada()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(handle.count().await.expect("count"), 5);

    handle.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn dashboard_queries_follow_configured_pagination() {
    let cfg = RuntimeConfig {
        pagination: PaginationMode::IgnoreWindow,
        ..RuntimeConfig::immediate()
    };
    let handle = spawn_roster(DoctorStore::with_seed_data().unwrap(), cfg);

    assert_eq!(handle.list(2, 2).await.expect("list").len(), 5);
    let recent: Vec<String> = handle
        .recent(2)
        .await
        .expect("recent")
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(recent, vec!["4", "5"]);
    assert_eq!(handle.snapshot().await.expect("snapshot").records.len(), 5);
    handle.shutdown().await.expect("shutdown");

    let handle = spawn_roster(DoctorStore::with_seed_data().unwrap(), RuntimeConfig::immediate());
    let page: Vec<String> = handle
        .list(2, 2)
        .await
        .expect("list")
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(page, vec!["3", "4"]);
    handle.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let handle = spawn_roster(DoctorStore::new(), RuntimeConfig::immediate());

    let mut tasks = Vec::new();
    for i in 0..20u32 {
        let h = handle.clone();
        tasks.push(tokio::spawn(async move {
            h.create(DoctorDraft::new(
                format!("F{i}"),
                format!("L{i}"),
                format!("d{i}@ward.net"),
                "Oncology",
                "555-0000",
            ))
            .await
        }));
    }

    let mut ids = BTreeSet::new();
    for task in tasks {
        ids.insert(task.await.expect("join").expect("create").id);
    }
    assert_eq!(ids.len(), 20);
    assert_eq!(handle.count().await.expect("count"), 20);
    handle.shutdown().await.expect("shutdown");
}

#[tokio::test(start_paused = true)]
async fn every_operation_waits_for_configured_latency() {
    let handle = spawn_roster(DoctorStore::with_seed_data().unwrap(), RuntimeConfig::default());

    let start = Instant::now();
    let rec = handle.get("1").await.expect("get");
    assert_eq!(rec.first_name, "John");
    assert!(start.elapsed() >= Duration::from_millis(500));

    handle.shutdown().await.expect("shutdown");
}

#[tokio::test(start_paused = true)]
async fn dropped_caller_does_not_cancel_operation() {
    let handle = spawn_roster(DoctorStore::with_seed_data().unwrap(), RuntimeConfig::default());

    let abandoned = tokio::time::timeout(Duration::from_millis(100), handle.create(ada())).await;
    assert!(abandoned.is_err());

    assert_eq!(handle.count().await.expect("count"), 6);
    handle.shutdown().await.expect("shutdown");
}

#[tokio::test(start_paused = true)]
async fn back_to_back_calls_apply_in_completion_order() {
    let handle = spawn_roster(DoctorStore::with_seed_data().unwrap(), RuntimeConfig::default());

    let h = handle.clone();
    let delete = tokio::spawn(async move { h.delete("2").await });
    tokio::time::sleep(Duration::from_millis(10)).await;

    let err = handle.update("2", ada()).await.unwrap_err();
    assert!(err.is_not_found());
    delete.await.expect("join").expect("delete");

    handle.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn calls_after_shutdown_fail_with_channel_closed() {
    let handle = spawn_roster(DoctorStore::new(), RuntimeConfig::immediate());
    handle.shutdown().await.expect("shutdown");

    let err = handle.count().await.unwrap_err();
    assert!(matches!(err, RuntimeError::ChannelClosed));
    assert_eq!(err.kind(), ErrorKind::OperationFailed);
}

#[test]
fn config_parses_partial_json_overrides() {
    let cfg = RuntimeConfig::from_json_str(r#"{"latency_ms": 0, "pagination": "ignore_window"}"#)
        .expect("parse");
    assert_eq!(cfg.latency_ms, 0);
    assert_eq!(cfg.pagination, PaginationMode::IgnoreWindow);
    assert_eq!(cfg.command_queue_bound, RuntimeConfig::default().command_queue_bound);

    assert_eq!(RuntimeConfig::from_json_str("{}").expect("parse"), RuntimeConfig::default());
    assert!(RuntimeConfig::from_json_str(r#"{"pagination": "sideways"}"#).is_err());
}

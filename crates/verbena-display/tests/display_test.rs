//! Integration tests driving the display helpers from raw catalog JSON,
//! the way the front end consumes them.

use std::sync::Arc;

use serde_json::json;
use verbena_component::{ComponentDescriptor, Schedule};
use verbena_display::{badges_for, classify, format_next_run, status_style, BadgeCache, BadgeKind};

fn catalog_descriptor(value: serde_json::Value) -> ComponentDescriptor {
  serde_json::from_value(value).expect("descriptor should deserialize")
}

#[test]
fn test_official_latest_card() {
  let descriptor = catalog_descriptor(json!({
    "name": "verbena/send-email",
    "version": "3.2.0",
    "isLatest": true,
    "deprecated": false,
    "author": { "name": "Verbena", "type": "platform-owned" }
  }));

  assert_eq!(classify(&descriptor), BadgeKind::Latest);

  let badges = badges_for(&descriptor);
  let kinds: Vec<_> = badges.iter().map(|badge| badge.kind).collect();
  assert_eq!(kinds, vec![BadgeKind::Official, BadgeKind::Latest]);
}

#[test]
fn test_community_outdated_card() {
  let descriptor = catalog_descriptor(json!({
    "name": "acme/scrape-page",
    "version": "0.9.1",
    "isLatest": false,
    "author": { "type": "community" }
  }));

  assert_eq!(classify(&descriptor), BadgeKind::Outdated);

  let badges = badges_for(&descriptor);
  let kinds: Vec<_> = badges.iter().map(|badge| badge.kind).collect();
  assert_eq!(kinds, vec![BadgeKind::Community, BadgeKind::Outdated]);
}

#[test]
fn test_deprecated_beats_recency_and_provenance() {
  let descriptor = catalog_descriptor(json!({
    "name": "acme/legacy-upload",
    "version": "1.0.0",
    "isLatest": true,
    "deprecated": true,
    "author": { "type": "platform-owned" }
  }));

  assert_eq!(classify(&descriptor), BadgeKind::Deprecated);

  let badges = badges_for(&descriptor);
  let kinds: Vec<_> = badges.iter().map(|badge| badge.kind).collect();
  assert_eq!(kinds, vec![BadgeKind::Official, BadgeKind::Deprecated]);
}

#[test]
fn test_minimal_descriptor_gets_a_lone_latest_badge() {
  let descriptor = catalog_descriptor(json!({
    "name": "acme/minimal",
    "version": "1.0.0"
  }));

  let badges = badges_for(&descriptor);
  let kinds: Vec<_> = badges.iter().map(|badge| badge.kind).collect();
  assert_eq!(kinds, vec![BadgeKind::Latest]);
}

#[test]
fn test_cache_survives_redraws_and_invalidates_on_version_change() {
  let mut cache = BadgeCache::new();

  let descriptor = catalog_descriptor(json!({
    "name": "verbena/send-email",
    "version": "3.2.0",
    "author": { "type": "platform-owned" }
  }));

  // Redraws hand the cache a fresh deserialization of the same payload.
  let first = cache.badges(&descriptor);
  let second = cache.badges(&descriptor.clone());
  assert!(Arc::ptr_eq(&first, &second));

  let upgraded = catalog_descriptor(json!({
    "name": "verbena/send-email",
    "version": "3.3.0",
    "author": { "type": "platform-owned" }
  }));

  let third = cache.badges(&upgraded);
  assert!(!Arc::ptr_eq(&second, &third));
}

#[test]
fn test_schedule_row_rendering() {
  let schedule: Schedule = serde_json::from_value(json!({
    "workflowId": "wf_123",
    "status": "active",
    "cron": "0 9 * * 1",
    "nextRunAt": "2024-03-04T09:00:00Z"
  }))
  .expect("schedule should deserialize");

  assert_eq!(
    format_next_run(schedule.next_run_at.as_deref()),
    "Mar 4, 9:00 AM UTC"
  );
  assert_eq!(status_style(schedule.status).as_str(), "success");
}

#[test]
fn test_schedule_row_without_next_run() {
  let schedule: Schedule = serde_json::from_value(json!({
    "workflowId": "wf_456",
    "status": "paused"
  }))
  .expect("schedule should deserialize");

  assert_eq!(format_next_run(schedule.next_run_at.as_deref()), "Not scheduled");
  assert_eq!(status_style(schedule.status).as_str(), "warning");
}

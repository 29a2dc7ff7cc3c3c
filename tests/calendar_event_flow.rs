mod common;

use calshare::types::error::AppError;
use chrono::{TimeZone, Utc};
use common::{test_data, TestContext};
use uuid::Uuid;

#[tokio::test]
async fn test_calendar_creation_and_listing() {
    let ctx = TestContext::new().await;
    let uid = ctx.db.create_user(test_data::sample_user()).await.unwrap();

    let work = ctx.db.create_calendar(uid, "Work".to_string()).await.unwrap();
    let home = ctx.db.create_calendar(uid, "Home".to_string()).await.unwrap();

    let calendars = ctx.db.list_calendars_for_user(uid).await.unwrap();
    assert_eq!(calendars.len(), 2);
    let ids: Vec<Uuid> = calendars.iter().map(|c| c.id).collect();
    assert!(ids.contains(&work));
    assert!(ids.contains(&home));

    let fetched = ctx.db.get_calendar(work).await.unwrap();
    assert_eq!(fetched.title, "Work");
    assert_eq!(fetched.user_id, uid);
}

#[tokio::test]
async fn test_calendar_requires_existing_owner() {
    let ctx = TestContext::new().await;

    let result = ctx
        .db
        .create_calendar(Uuid::new_v4(), "Orphan".to_string())
        .await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_event_requires_existing_owner() {
    let ctx = TestContext::new().await;

    let result = ctx
        .db
        .create_event(Uuid::new_v4(), "Orphan party".to_string(), Utc::now())
        .await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_event_creation_and_ownership() {
    let ctx = TestContext::new().await;
    let uid = ctx.db.create_user(test_data::sample_user()).await.unwrap();

    let date = Utc.with_ymd_and_hms(2026, 9, 1, 18, 30, 0).unwrap();
    let eid = ctx
        .db
        .create_event(uid, "Standup".to_string(), date)
        .await
        .unwrap();

    let event = ctx.db.get_event(eid).await.unwrap();
    assert_eq!(event.title, "Standup");
    assert_eq!(event.owner, uid);
    assert_eq!(event.date, date);

    let owned = ctx.db.list_events_for_owner(uid).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, eid);
}

#[tokio::test]
async fn test_event_membership_flow() {
    let ctx = TestContext::new().await;
    let host = ctx.db.create_user(test_data::user_named("host")).await.unwrap();
    let guest = ctx.db.create_user(test_data::user_named("guest")).await.unwrap();

    let eid = ctx
        .db
        .create_event(host, "Dinner".to_string(), Utc::now())
        .await
        .unwrap();

    ctx.db.add_event_member(eid, guest).await.unwrap();

    // same (event, user) pair again
    let dup = ctx.db.add_event_member(eid, guest).await;
    assert!(matches!(dup, Err(AppError::AlreadyExists)));

    let members = ctx.db.list_event_members(eid).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, guest);

    // ownership does not imply membership
    assert!(!ctx.db.event_has_member(eid, host).await.unwrap());

    let joined = ctx.db.list_events_for_member(guest).await.unwrap();
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].id, eid);

    ctx.db.remove_event_member(eid, guest).await.unwrap();
    let gone = ctx.db.remove_event_member(eid, guest).await;
    assert!(matches!(gone, Err(AppError::NotFound)));
    assert!(ctx.db.list_event_members(eid).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_membership_requires_existing_rows() {
    let ctx = TestContext::new().await;
    let uid = ctx.db.create_user(test_data::sample_user()).await.unwrap();

    let missing_event = ctx.db.add_event_member(Uuid::new_v4(), uid).await;
    assert!(matches!(missing_event, Err(AppError::NotFound)));

    let eid = ctx
        .db
        .create_event(uid, "Solo".to_string(), Utc::now())
        .await
        .unwrap();
    let missing_user = ctx.db.add_event_member(eid, Uuid::new_v4()).await;
    assert!(matches!(missing_user, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_calendar_event_placement_flow() {
    let ctx = TestContext::new().await;
    let uid = ctx.db.create_user(test_data::sample_user()).await.unwrap();

    let cal = ctx.db.create_calendar(uid, "Main".to_string()).await.unwrap();
    let eid = ctx
        .db
        .create_event(uid, "Review".to_string(), Utc::now())
        .await
        .unwrap();

    ctx.db.add_event_to_calendar(cal, eid).await.unwrap();

    // same (calendar, event) pair again
    let dup = ctx.db.add_event_to_calendar(cal, eid).await;
    assert!(matches!(dup, Err(AppError::AlreadyExists)));

    let events = ctx.db.list_events_on_calendar(cal).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, eid);

    let calendars = ctx.db.list_calendars_for_event(eid).await.unwrap();
    assert_eq!(calendars.len(), 1);
    assert_eq!(calendars[0].id, cal);

    ctx.db.remove_event_from_calendar(cal, eid).await.unwrap();
    let gone = ctx.db.remove_event_from_calendar(cal, eid).await;
    assert!(matches!(gone, Err(AppError::NotFound)));
    assert!(ctx.db.list_events_on_calendar(cal).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_event_on_multiple_calendars() {
    let ctx = TestContext::new().await;
    let uid = ctx.db.create_user(test_data::sample_user()).await.unwrap();

    let personal = ctx.db.create_calendar(uid, "Personal".to_string()).await.unwrap();
    let shared = ctx.db.create_calendar(uid, "Shared".to_string()).await.unwrap();
    let eid = ctx
        .db
        .create_event(uid, "Offsite".to_string(), Utc::now())
        .await
        .unwrap();

    ctx.db.add_event_to_calendar(personal, eid).await.unwrap();
    ctx.db.add_event_to_calendar(shared, eid).await.unwrap();

    let calendars = ctx.db.list_calendars_for_event(eid).await.unwrap();
    assert_eq!(calendars.len(), 2);
}

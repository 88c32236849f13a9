use recipe_share_api::services::notification_service::should_notify;
use uuid::Uuid;

#[test]
fn own_actions_are_not_notified() {
    let me = Uuid::new_v4();
    assert!(!should_notify(Some(me), me));
}

#[test]
fn actions_by_others_are_notified() {
    let owner = Uuid::new_v4();
    assert!(should_notify(Some(Uuid::new_v4()), owner));
    assert!(should_notify(None, owner));
}

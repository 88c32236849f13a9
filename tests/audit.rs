use recipe_share_api::audit::AuditAction;

#[test]
fn actions_name_their_table() {
    assert_eq!(AuditAction::OrderStatusChange.as_str(), "order_status");
    assert_eq!(AuditAction::OrderStatusChange.resource(), "orders");
    assert_eq!(AuditAction::RecipeDelete.resource(), "recipes");
    assert_eq!(AuditAction::CollectionDelete.resource(), "collections");
    assert_eq!(AuditAction::UserLogin.resource(), "users");
}

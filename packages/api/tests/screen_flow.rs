//! Drives the create and list screen state the way the views do, against the
//! in-memory backend.

use api::{MemoryUserService, UserService};
use directory::{CreateUserForm, DraftGenerator, RefreshRequest, SubmitOutcome, UserListState};

/// What the list view's effect does each time it runs.
async fn run_list_effect(
    list: &mut UserListState,
    refresh: &mut RefreshRequest,
    service: &MemoryUserService,
) {
    if (refresh.is_pending() || !list.has_mounted()) && list.should_fetch(refresh) {
        let token = list.begin_fetch();
        let result = service.list_users().await;
        list.finish_fetch(token, result);
    }
}

async fn submit(
    form: &mut CreateUserForm,
    refresh: &mut RefreshRequest,
    service: &MemoryUserService,
) -> SubmitOutcome {
    let pending = form.begin_submit().unwrap().unwrap();
    let result = service.create_user(&pending.draft).await;
    let outcome = form.complete_submit(pending.token, result);
    refresh.after_submit(&outcome);
    outcome
}

#[tokio::test]
async fn test_created_user_reaches_freshly_mounted_list() {
    let service = MemoryUserService::new();
    let mut refresh = RefreshRequest::default();
    let mut form = CreateUserForm::new(&mut DraftGenerator::seeded(3));
    let name = form.draft().name.clone();

    let outcome = submit(&mut form, &mut refresh, &service).await;
    assert!(matches!(outcome, SubmitOutcome::Created(Some(_))));
    assert_eq!(service.create_calls().len(), 1);
    assert!(refresh.is_pending());

    // Navigation mounts the list with the request still pending. The effect
    // runs again after its own write; only one fetch may happen.
    let mut list = UserListState::new();
    run_list_effect(&mut list, &mut refresh, &service).await;
    run_list_effect(&mut list, &mut refresh, &service).await;

    assert_eq!(service.list_calls(), 1);
    assert!(!refresh.is_pending());
    assert_eq!(list.users().len(), 1);
    assert_eq!(list.users()[0].name, name);
}

#[tokio::test]
async fn test_mounted_list_refetches_after_each_creation() {
    let service = MemoryUserService::new();
    let mut refresh = RefreshRequest::default();
    let mut generator = DraftGenerator::seeded(4);
    let mut list = UserListState::new();

    run_list_effect(&mut list, &mut refresh, &service).await;
    assert_eq!(service.list_calls(), 1);
    assert!(list.users().is_empty());

    let mut form = CreateUserForm::new(&mut generator);
    submit(&mut form, &mut refresh, &service).await;
    run_list_effect(&mut list, &mut refresh, &service).await;
    assert_eq!(service.list_calls(), 2);
    assert_eq!(list.users().len(), 1);

    run_list_effect(&mut list, &mut refresh, &service).await;
    assert_eq!(service.list_calls(), 2);
}

#[tokio::test]
async fn test_failed_creation_does_not_refresh() {
    let service = MemoryUserService::new();
    service.set_fail_create(true);
    let mut refresh = RefreshRequest::default();
    let mut list = UserListState::new();
    run_list_effect(&mut list, &mut refresh, &service).await;

    let mut form = CreateUserForm::new(&mut DraftGenerator::seeded(5));
    let outcome = submit(&mut form, &mut refresh, &service).await;
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(!refresh.is_pending());

    run_list_effect(&mut list, &mut refresh, &service).await;
    assert_eq!(service.list_calls(), 1);
}

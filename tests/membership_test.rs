//! Membership invariants against a mock backend

mod helpers;

use assert_matches::assert_matches;
use uuid::Uuid;

use helpers::backend_mock::BackendMock;
use helpers::test_data::plan_value;
use quedada_core::QuedadaError;

#[tokio::test]
async fn join_fills_plan_up_to_capacity() {
    let backend = BackendMock::start().await;
    let creator = Uuid::new_v4();
    let template = plan_value(3, "Cena italiana", &["Gastronomía"], creator, &[], 2);

    backend.mount_active_plans(vec![template.clone()]).await;
    backend.mount_set_participants(3, template).await;

    let factory = backend.factory();
    factory.plan_service.refresh().await.unwrap();

    let u1 = Uuid::new_v4();
    let u2 = Uuid::new_v4();
    let u3 = Uuid::new_v4();

    let plan = factory.membership_service.join(3, u1).await.unwrap();
    assert_eq!(plan.participants, vec![u1]);

    let plan = factory.membership_service.join(3, u2).await.unwrap();
    assert_eq!(plan.participants, vec![u1, u2]);

    let result = factory.membership_service.join(3, u3).await;
    assert_matches!(
        result,
        Err(QuedadaError::PlanFull {
            plan_id: 3,
            max_participants: 2
        })
    );
}

#[tokio::test]
async fn duplicate_join_is_rejected_locally() {
    let backend = BackendMock::start().await;
    let creator = Uuid::new_v4();
    let member = Uuid::new_v4();
    let template = plan_value(4, "Paseo en bici", &["Deporte"], creator, &[member], 5);

    backend.mount_active_plans(vec![template]).await;

    let factory = backend.factory();
    factory.plan_service.refresh().await.unwrap();

    let result = factory.membership_service.join(4, member).await;
    assert_matches!(result, Err(QuedadaError::AlreadyJoined { plan_id: 4, .. }));
}

#[tokio::test]
async fn leave_requires_membership() {
    let backend = BackendMock::start().await;
    let creator = Uuid::new_v4();
    let member = Uuid::new_v4();
    let template = plan_value(5, "Tarde de juegos", &["Ocio"], creator, &[member], 5);

    backend.mount_active_plans(vec![template]).await;

    let factory = backend.factory();
    factory.plan_service.refresh().await.unwrap();

    let stranger = Uuid::new_v4();
    let result = factory.membership_service.leave(5, stranger).await;
    assert_matches!(result, Err(QuedadaError::NotMember { plan_id: 5, .. }));
}

#[tokio::test]
async fn leave_after_join_restores_participants() {
    let backend = BackendMock::start().await;
    let creator = Uuid::new_v4();
    let existing = Uuid::new_v4();
    let template = plan_value(6, "Escalada", &["Deporte"], creator, &[existing], 4);

    backend.mount_active_plans(vec![template.clone()]).await;
    backend.mount_set_participants(6, template).await;

    let factory = backend.factory();
    factory.plan_service.refresh().await.unwrap();

    let before = factory
        .directory_service
        .plan(6)
        .await
        .unwrap()
        .participants;

    let user = Uuid::new_v4();
    factory.membership_service.join(6, user).await.unwrap();
    let after = factory.membership_service.leave(6, user).await.unwrap();

    assert_eq!(after.participants, before);
}

#[tokio::test]
async fn creator_cannot_join_or_leave_own_plan() {
    let backend = BackendMock::start().await;
    let creator = Uuid::new_v4();
    let template = plan_value(7, "Mi plan", &["Ocio"], creator, &[], 3);

    backend.mount_active_plans(vec![template]).await;

    let factory = backend.factory();
    factory.plan_service.refresh().await.unwrap();

    assert_matches!(
        factory.membership_service.join(7, creator).await,
        Err(QuedadaError::OwnPlan { plan_id: 7 })
    );
    assert_matches!(
        factory.membership_service.leave(7, creator).await,
        Err(QuedadaError::OwnPlan { plan_id: 7 })
    );
}

#[tokio::test]
async fn join_unknown_plan_fails_with_not_found() {
    let backend = BackendMock::start().await;
    backend.mount_active_plans(vec![]).await;

    let factory = backend.factory();
    factory.plan_service.refresh().await.unwrap();

    let result = factory.membership_service.join(99, Uuid::new_v4()).await;
    assert_matches!(result, Err(QuedadaError::PlanNotFound { plan_id: 99 }));
}

#[tokio::test]
async fn backend_failure_leaves_store_unchanged() {
    let backend = BackendMock::start().await;
    let creator = Uuid::new_v4();
    let template = plan_value(8, "Concierto", &["Música"], creator, &[], 5);

    backend.mount_active_plans(vec![template]).await;
    backend.mount_set_participants_failure(8, 500).await;

    let factory = backend.factory();
    factory.plan_service.refresh().await.unwrap();

    let result = factory.membership_service.join(8, Uuid::new_v4()).await;
    assert_matches!(result, Err(QuedadaError::Api { status: 500, .. }));

    // no optimistic commit without backend confirmation
    let plan = factory.directory_service.plan(8).await.unwrap();
    assert!(plan.participants.is_empty());
}

#[tokio::test]
async fn backend_conflict_is_authoritative_and_resyncs() {
    let backend = BackendMock::start().await;
    let creator = Uuid::new_v4();
    let w1 = Uuid::new_v4();
    let w2 = Uuid::new_v4();

    // Local snapshot believes the plan is empty; the backend already has
    // two participants and rejects the stale conditional update.
    let stale = plan_value(9, "Taller de cocina", &["Gastronomía"], creator, &[], 2);
    let fresh = plan_value(9, "Taller de cocina", &["Gastronomía"], creator, &[w1, w2], 2);

    backend.mount_active_plans(vec![stale]).await;
    backend.mount_set_participants_failure(9, 409).await;
    backend.mount_plan(9, fresh).await;

    let factory = backend.factory();
    factory.plan_service.refresh().await.unwrap();

    let result = factory.membership_service.join(9, Uuid::new_v4()).await;
    assert_matches!(result, Err(QuedadaError::PlanFull { plan_id: 9, .. }));

    // the authoritative record replaced the stale snapshot
    let plan = factory.directory_service.plan(9).await.unwrap();
    assert_eq!(plan.participants, vec![w1, w2]);
}

#[tokio::test]
async fn capacity_invariant_holds_across_sequences() {
    let backend = BackendMock::start().await;
    let creator = Uuid::new_v4();
    let template = plan_value(10, "Picnic", &["Ocio"], creator, &[], 3);

    backend.mount_active_plans(vec![template.clone()]).await;
    backend.mount_set_participants(10, template).await;

    let factory = backend.factory();
    factory.plan_service.refresh().await.unwrap();

    let users: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();
    for user in &users {
        let _ = factory.membership_service.join(10, *user).await;
        let plan = factory.directory_service.plan(10).await.unwrap();
        assert!(plan.participants.len() as u32 <= plan.max_participants);

        let mut deduped = plan.participants.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), plan.participants.len(), "no duplicates");
    }

    let _ = factory.membership_service.leave(10, users[0]).await;
    let plan = factory.directory_service.plan(10).await.unwrap();
    assert!(plan.participants.len() as u32 <= plan.max_participants);
}

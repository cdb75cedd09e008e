use crate::modules::users::adapters::outbound::user_storage_in_memory::InMemoryUserStorage;
use crate::modules::users::application::errors::UserServiceError;
use crate::modules::users::application::user_service::UserService;
use crate::modules::users::core::user::UpdateFields;
use crate::tests::fixtures::clock::SteppingClock;
use crate::tests::fixtures::users::NewUserBuilder;
use std::sync::Arc;

#[tokio::test]
async fn walks_a_user_through_its_whole_lifecycle() {
    let storage = Arc::new(InMemoryUserStorage::new());
    let service =
        UserService::new(storage.clone()).with_clock(Arc::new(SteppingClock::default()));

    let created = service
        .create(NewUserBuilder::new().build())
        .await
        .unwrap();
    assert_eq!(created.version, 1);
    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);

    let fetched = service.get(&created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = service
        .update(
            &created.id,
            UpdateFields {
                nickname: Some("Senna".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.version, 2);
    assert_eq!(updated.name, "Ayrton");
    assert_eq!(updated.address, "Pringles");
    assert_eq!(updated.nickname, "Senna");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    service.delete(&created.id).await.unwrap();
    assert!(matches!(
        service.get(&created.id).await,
        Err(UserServiceError::NotFound(_))
    ));
    assert!(storage.is_empty().await);
}

#[tokio::test]
async fn keeps_records_isolated_from_each_other() {
    let service = UserService::new(Arc::new(InMemoryUserStorage::new()));

    let ayrton = service
        .create(NewUserBuilder::new().build())
        .await
        .unwrap();
    let emerson = service
        .create(
            NewUserBuilder::new()
                .name("Emerson")
                .address("Sao Paulo")
                .nickname("Emmo")
                .build(),
        )
        .await
        .unwrap();

    service
        .update(
            &ayrton.id,
            UpdateFields {
                name: Some("Ayrton Senna".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    service.delete(&ayrton.id).await.unwrap();

    assert_eq!(service.get(&emerson.id).await.unwrap(), emerson);
}

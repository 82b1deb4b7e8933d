use std::collections::HashSet;

use portfolio_core_contact_contracts::ContactFeatureService;
use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_demo::contact::ADA_DRAFT;
use portfolio_persistence_local::contact::LocalContactMessageRepository;
use portfolio_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use portfolio_store_local::MemoryStore;
use pretty_assertions::assert_eq;

type Sut = ContactFeatureServiceImpl<
    IdServiceImpl,
    TimeServiceImpl,
    LocalContactMessageRepository<MemoryStore, IdServiceImpl>,
>;

fn setup(store: MemoryStore) -> Sut {
    ContactFeatureServiceImpl::new(
        IdServiceImpl,
        TimeServiceImpl,
        LocalContactMessageRepository::new(store, IdServiceImpl),
    )
}

#[tokio::test]
async fn add_then_list() {
    let sut = setup(MemoryStore::new(1024 * 1024));

    sut.add_message(ADA_DRAFT.clone()).await.unwrap();

    let messages = sut.list_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    let message = &messages[0];
    assert_eq!(message.name, "Ada");
    assert_eq!(message.email, "a@x.com");
    assert_eq!(message.subject, "Hi");
    assert_eq!(message.message, "Great work");
    assert!(!message.read);
    assert!(!message.id.as_str().is_empty());
}

#[tokio::test]
async fn ids_are_unique() {
    let sut = setup(MemoryStore::new(1024 * 1024));

    for _ in 0..10 {
        sut.add_message(ADA_DRAFT.clone()).await.unwrap();
    }

    let messages = sut.list_messages().await.unwrap();
    let ids = messages.iter().map(|x| &x.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn mark_read_is_idempotent() {
    let sut = setup(MemoryStore::new(1024 * 1024));
    let message = sut.add_message(ADA_DRAFT.clone()).await.unwrap();

    sut.mark_message_read(&message.id).await.unwrap();
    let once = sut.list_messages().await.unwrap();
    sut.mark_message_read(&message.id).await.unwrap();
    let twice = sut.list_messages().await.unwrap();

    assert_eq!(once, twice);
    assert!(once[0].read);
}

#[tokio::test]
async fn delete_removes_only_target() {
    let sut = setup(MemoryStore::new(1024 * 1024));
    let first = sut.add_message(ADA_DRAFT.clone()).await.unwrap();
    let second = sut.add_message(ADA_DRAFT.clone()).await.unwrap();
    let third = sut.add_message(ADA_DRAFT.clone()).await.unwrap();

    sut.delete_message(&second.id).await.unwrap();

    assert_eq!(sut.list_messages().await.unwrap(), vec![first, third]);
}

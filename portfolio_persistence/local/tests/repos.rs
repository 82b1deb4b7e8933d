use chrono::{DateTime, Utc};
use portfolio_demo::{
    contact::{ADA, ALL_MESSAGES, GRACE},
    testimonial::{ALL_TESTIMONIALS, BEN},
};
use portfolio_models::contact::ContactMessage;
use portfolio_persistence_contracts::{
    contact::ContactMessageRepository, testimonial::TestimonialRepository, PersistError,
};
use portfolio_persistence_local::{
    contact::LocalContactMessageRepository, testimonial::LocalTestimonialRepository,
    CONTACT_MESSAGES_KEY, TESTIMONIALS_KEY,
};
use portfolio_shared_impl::id::IdServiceImpl;
use portfolio_store_contracts::StoreService;
use portfolio_store_local::{FileStore, FileStoreConfig, MemoryStore};
use portfolio_utils::{assert_matches, Apply};
use pretty_assertions::assert_eq;

const CAPACITY: usize = 1024 * 1024;

fn setup(store: MemoryStore) -> (
    LocalContactMessageRepository<MemoryStore, IdServiceImpl>,
    LocalTestimonialRepository<MemoryStore>,
) {
    (
        LocalContactMessageRepository::new(store.clone(), IdServiceImpl),
        LocalTestimonialRepository::new(store),
    )
}

#[tokio::test]
async fn empty_store() {
    let (messages, testimonials) = setup(MemoryStore::new(CAPACITY));

    assert!(messages.list().await.unwrap().is_empty());
    assert!(testimonials.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_and_list() {
    let (messages, testimonials) = setup(MemoryStore::new(CAPACITY));

    portfolio_demo::create(&messages, &testimonials).await.unwrap();

    assert_eq!(
        messages.list().await.unwrap(),
        ALL_MESSAGES.iter().map(|&x| x.clone()).collect::<Vec<_>>()
    );
    assert_eq!(
        testimonials.list().await.unwrap(),
        ALL_TESTIMONIALS
            .iter()
            .map(|&x| x.clone())
            .collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn collections_use_separate_keys() {
    let store = MemoryStore::new(CAPACITY);
    let (messages, testimonials) = setup(store.clone());

    messages.save(&[ADA.clone()]).await.unwrap();
    testimonials.save(&[BEN.clone()]).await.unwrap();

    let raw = store.get(CONTACT_MESSAGES_KEY).await.unwrap().unwrap();
    let value = serde_json::from_str::<serde_json::Value>(&raw).unwrap();
    assert_eq!(value[0]["name"], "Ada");
    assert_eq!(value[0]["read"], false);

    let raw = store.get(TESTIMONIALS_KEY).await.unwrap().unwrap();
    let value = serde_json::from_str::<serde_json::Value>(&raw).unwrap();
    assert_eq!(value[0]["clientName"], "Ben");
    assert_eq!(value[0]["socialSite"], "LinkedIn");
}

#[tokio::test]
async fn legacy_messages_are_completed_deterministically() {
    let store = MemoryStore::new(CAPACITY);
    store
        .set(
            CONTACT_MESSAGES_KEY,
            r#"[
                {"name":"Old","email":"old@x.com","subject":"","message":"first","timestamp":"2023-01-01T00:00:00.000Z"},
                {"id":"","name":"Old","email":"old@x.com","subject":"","message":"first","timestamp":"2023-01-01T00:00:00.000Z","read":null},
                {"id":"k3j9x0a1b","name":"Kept","email":"k@x.com","subject":"Hey","message":"second","timestamp":"2023-02-01T10:00:00.000Z","read":true}
            ]"#,
        )
        .await
        .unwrap();
    let (messages, _) = setup(store);

    let first = messages.list().await.unwrap();
    let second = messages.list().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert!(!first[0].id.as_str().is_empty());
    assert_ne!(first[0].id, first[1].id);
    assert!(!first[0].read);
    assert!(!first[1].read);
    assert_eq!(first[2].id.as_str(), "k3j9x0a1b");
    assert!(first[2].read);

    // backfilled values survive a save/load round trip
    messages.save(&first).await.unwrap();
    assert_eq!(messages.list().await.unwrap(), first);
}

#[tokio::test]
async fn legacy_messages_without_timestamp() {
    let store = MemoryStore::new(CAPACITY);
    store
        .set(
            CONTACT_MESSAGES_KEY,
            r#"[
                {"name":"Old","email":"old@x.com","message":"first"},
                {"id":"k3j9x0a1b","name":"Kept","email":"k@x.com","subject":"Hey","message":"second","timestamp":null,"read":true}
            ]"#,
        )
        .await
        .unwrap();
    let (messages, _) = setup(store);

    let list = messages.list().await.unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].timestamp, DateTime::<Utc>::UNIX_EPOCH);
    assert_eq!(list[0].message, "first");
    assert_eq!(list[1].timestamp, DateTime::<Utc>::UNIX_EPOCH);
    assert_eq!(list[1].id.as_str(), "k3j9x0a1b");
    assert_eq!(messages.list().await.unwrap(), list);

    // the collection stays writable
    let mut list = list;
    list.push(ADA.clone());
    messages.save(&list).await.unwrap();
    assert_eq!(messages.list().await.unwrap(), list);
}

#[tokio::test]
async fn corrupt_messages_are_an_error() {
    let store = MemoryStore::new(CAPACITY);
    store.set(CONTACT_MESSAGES_KEY, "{oops").await.unwrap();
    let (messages, _) = setup(store);

    assert!(messages.list().await.is_err());
}

#[tokio::test]
async fn corrupt_testimonials_are_ignored() {
    let store = MemoryStore::new(CAPACITY);
    store.set(TESTIMONIALS_KEY, "{oops").await.unwrap();
    let (_, testimonials) = setup(store);

    assert!(testimonials.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn quota_exceeded() {
    let (messages, testimonials) = setup(MemoryStore::new(256));
    messages.save(&[]).await.unwrap();

    let big = BEN.clone().with(|x| x.image = Some("x".repeat(512)));
    let result = testimonials.save(&[big]).await;

    assert_matches!(result, Err(PersistError::QuotaExceeded));
    assert!(testimonials.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = FileStoreConfig {
        path: dir.path().join("store.json"),
        capacity: CAPACITY,
    };

    {
        let store = FileStore::open(&config).await.unwrap();
        let messages = LocalContactMessageRepository::new(store, IdServiceImpl);
        messages
            .save(&[ADA.clone(), GRACE.clone()])
            .await
            .unwrap();
    }

    let store = FileStore::open(&config).await.unwrap();
    let messages = LocalContactMessageRepository::new(store, IdServiceImpl);
    assert_eq!(
        messages.list().await.unwrap(),
        vec![ADA.clone(), GRACE.clone()] as Vec<ContactMessage>
    );
}

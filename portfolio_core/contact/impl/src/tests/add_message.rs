use portfolio_core_contact_contracts::{ContactAddMessageError, ContactFeatureService};
use portfolio_demo::{
    contact::{ADA, ADA_DRAFT, GRACE},
    UUID1,
};
use portfolio_models::contact::ContactMessageId;
use portfolio_persistence_contracts::contact::MockContactMessageRepository;
use portfolio_shared_contracts::{id::MockIdService, time::MockTimeService};
use portfolio_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{tests::Sut, ContactFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let id = MockIdService::new().with_generate(ContactMessageId::from(UUID1));
    let time = MockTimeService::new().with_now(ADA.timestamp);

    let message_repo = MockContactMessageRepository::new()
        .with_list(vec![])
        .with_save(vec![ADA.clone()]);

    let sut = ContactFeatureServiceImpl {
        id,
        time,
        message_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.add_message(ADA_DRAFT.clone()).await;

    // Assert
    let message = result.unwrap();
    assert_eq!(message, *ADA);
    assert!(!message.read);
    assert!(!message.id.as_str().is_empty());
}

#[tokio::test]
async fn appends_to_existing() {
    // Arrange
    let id = MockIdService::new().with_generate(ContactMessageId::from(UUID1));
    let time = MockTimeService::new().with_now(ADA.timestamp);

    let message_repo = MockContactMessageRepository::new()
        .with_list(vec![GRACE.clone()])
        .with_save(vec![GRACE.clone(), ADA.clone()]);

    let sut = ContactFeatureServiceImpl {
        id,
        time,
        message_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.add_message(ADA_DRAFT.clone()).await;

    // Assert
    assert_eq!(result.unwrap(), *ADA);
}

#[tokio::test]
async fn storage_full() {
    // Arrange
    let id = MockIdService::new().with_generate(ContactMessageId::from(UUID1));
    let time = MockTimeService::new().with_now(ADA.timestamp);

    let message_repo = MockContactMessageRepository::new()
        .with_list(vec![GRACE.clone()])
        .with_save_quota_exceeded();

    let sut = ContactFeatureServiceImpl {
        id,
        time,
        message_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.add_message(ADA_DRAFT.clone()).await;

    // Assert
    assert_matches!(&result, Err(ContactAddMessageError::StorageFull));
    assert_eq!(
        result.unwrap_err().to_string(),
        "Storage limit reached! Remove some messages."
    );
}

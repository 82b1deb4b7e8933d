use portfolio_persistence_contracts::contact::MockContactMessageRepository;
use portfolio_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::ContactFeatureServiceImpl;

mod add_message;

type Sut = ContactFeatureServiceImpl<MockIdService, MockTimeService, MockContactMessageRepository>;

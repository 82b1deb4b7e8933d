use portfolio_shared_contracts::id::IdService;
use uuid::{uuid, Uuid};

/// Namespace for IDs derived with [`IdService::derive`].
const DERIVED_ID_NAMESPACE: Uuid = uuid!("6f1c2d3e-8a4b-4c5d-9e6f-7a8b9c0d1e2f");

#[derive(Debug, Clone, Copy, Default)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    #[tracing::instrument(skip(self))]
    fn generate<I: From<Uuid> + 'static>(&self) -> I {
        Uuid::new_v4().into()
    }

    #[tracing::instrument(skip(self))]
    fn derive<I: From<Uuid> + 'static>(&self, seed: &[u8]) -> I {
        Uuid::new_v5(&DERIVED_ID_NAMESPACE, seed).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate() {
        // Arrange
        let sut = IdServiceImpl;

        // Act
        let id1 = sut.generate::<Uuid>();
        let id2 = sut.generate::<Uuid>();

        // Assert
        assert_ne!(id1, id2);
    }

    #[test]
    fn derive() {
        // Arrange
        let sut = IdServiceImpl;

        // Act
        let id1 = sut.derive::<Uuid>(b"0:Ada");
        let id2 = sut.derive::<Uuid>(b"0:Ada");
        let id3 = sut.derive::<Uuid>(b"1:Ada");

        // Assert
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }
}

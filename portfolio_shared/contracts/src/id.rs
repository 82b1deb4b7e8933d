use uuid::Uuid;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait IdService: Send + Sync + 'static {
    /// Generates a new random ID.
    fn generate<I: From<Uuid> + 'static>(&self) -> I;

    /// Derives an ID from `seed`. The same seed always yields the same ID.
    ///
    /// Used to assign IDs to records that were stored without one.
    fn derive<I: From<Uuid> + 'static>(&self, seed: &[u8]) -> I;
}

#[cfg(feature = "mock")]
impl MockIdService {
    pub fn with_generate<I: From<Uuid> + Send + 'static>(mut self, id: I) -> Self {
        self.expect_generate().once().return_once(|| id);
        self
    }
}

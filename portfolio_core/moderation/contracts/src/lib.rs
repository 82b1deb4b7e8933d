/// Switches between the public view and the moderation view of the inbox.
///
/// This is a visibility toggle, not access control: the passphrase is a
/// shared constant compared in plain text, there is no lockout and nothing is
/// audited. Anything that needs real protection must sit behind a proper
/// authentication mechanism instead.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ModerationService: Send + Sync + 'static {
    /// Switch to [`ModerationState::LoggedIn`] if `candidate` matches the
    /// configured passphrase.
    ///
    /// A wrong candidate never changes the current state.
    fn authenticate(&self, candidate: &str) -> bool;

    /// Switch back to [`ModerationState::LoggedOut`].
    fn logout(&self);

    fn state(&self) -> ModerationState;

    fn is_admin_view(&self) -> bool {
        self.state() == ModerationState::LoggedIn
    }
}

#[cfg(feature = "mock")]
impl MockModerationService {
    pub fn with_authenticate(mut self, candidate: &'static str, result: bool) -> Self {
        self.expect_authenticate()
            .once()
            .withf(move |x| x == candidate)
            .return_const(result);
        self
    }
}

/// The state of the current session. Every session starts logged out and
/// nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModerationState {
    #[default]
    LoggedOut,
    LoggedIn,
}

use thiserror::Error;

pub mod contact;
pub mod testimonial;

/// Error returned when writing a whole collection back to the store.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("The storage limit has been reached.")]
    QuotaExceeded,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

use super::models::RestaurantPizzaValidationError;

/// Errors returned by the domain services
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// No entity of the named kind has the requested id
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Validation(#[from] RestaurantPizzaValidationError),
    /// Anything the store reported; never shown to clients
    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;

//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service or client error types, so the
//! mappings live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::search_client::errors::SearchClientError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for FormError {
    fn from(val: TypeConstraintError) -> Self {
        match val {
            TypeConstraintError::EmptyString => FormError::EmptyField,
            TypeConstraintError::InvalidValue(value) => FormError::InvalidPlatform(value),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<SearchClientError> for ServiceError {
    fn from(_: SearchClientError) -> Self {
        ServiceError::SearchFailed
    }
}

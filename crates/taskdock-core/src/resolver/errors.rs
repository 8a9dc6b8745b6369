use crate::errors::TaskdockError;

#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("Application name is missing")]
    EmptyName,
}

impl TaskdockError for ResolverError {
    fn error_code(&self) -> &'static str {
        match self {
            ResolverError::EmptyName => "RESOLVER_EMPTY_NAME",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ResolverError::EmptyName)
    }
}

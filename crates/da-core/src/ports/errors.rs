use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DeviceStoreError {
    /// No device has the requested identity.
    #[error("device not found")]
    NotFound,

    /// The store could not be reached or refused the operation.
    #[error("{context}: {source}")]
    Access {
        context: &'static str,
        #[source]
        source: BoxError,
    },
}

impl DeviceStoreError {
    pub fn access(context: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Access {
            context,
            source: source.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

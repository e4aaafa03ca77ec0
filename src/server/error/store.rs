use thiserror::Error;

/// Boxed error returned by store connectors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised by the data layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The document store could not be reached.
    ///
    /// The underlying cause is logged when the connection attempt fails and kept as the
    /// error source, but the message shown to API clients stays generic.
    #[error("Connection failed")]
    ConnectionFailed {
        #[source]
        source: BoxError,
    },

    /// A document operation (insert, find, update, delete) failed.
    ///
    /// Carries the driver's error message, which is returned to the client as-is.
    #[error("{0}")]
    OperationFailed(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::OperationFailed(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::OperationFailed(err.to_string())
    }
}

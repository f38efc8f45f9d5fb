use miette::Diagnostic;
use thiserror::Error;

/// Error type returned by the capability methods a domain type implements.
///
/// The conversion functions never inspect or wrap it beyond carrying it
/// back to the caller, so any concrete error can be recovered with
/// [`downcast_ref`](std::error::Error) on the box.
pub type AdapterError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Shorthand for the result of a capability method.
pub type AdapterResult<T> = Result<T, AdapterError>;

#[derive(Error, Debug, Diagnostic)]
pub enum JsonApiError {
    #[error("jsonapi: invalid resource identity")]
    #[diagnostic(
        code(jsonapi::missing_identity),
        help("Expose the identity capability (`as_identity` / `as_identity_mut`) on the adapter.")
    )]
    MissingIdentity,

    #[error(transparent)]
    #[diagnostic(code(jsonapi::adapter))]
    Adapter(AdapterError),
}

impl JsonApiError {
    /// Returns the error raised by a capability method, if that is what
    /// aborted the conversion.
    #[must_use]
    pub fn adapter_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            JsonApiError::Adapter(err) => Some(err.as_ref()),
            JsonApiError::MissingIdentity => None,
        }
    }

    /// Consumes the error, handing back the capability's own error untouched.
    pub fn into_adapter_error(self) -> Option<AdapterError> {
        match self {
            JsonApiError::Adapter(err) => Some(err),
            JsonApiError::MissingIdentity => None,
        }
    }

    /// Returns `true` when the adapter error is of type `E`.
    #[must_use]
    pub fn is_adapter<E: std::error::Error + 'static>(&self) -> bool {
        self.adapter_error().is_some_and(|err| err.is::<E>())
    }
}

impl From<AdapterError> for JsonApiError {
    fn from(err: AdapterError) -> Self {
        JsonApiError::Adapter(err)
    }
}

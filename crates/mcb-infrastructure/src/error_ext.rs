//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
//! `anyhow`-style context extensions for converting foreign error types
//! (`std::io::Error`, `serde_yaml::Error`, `notify::Error`, ...) into
//! [`mcb_domain::error::Error`] with an attached message.

use mcb_domain::error::{Error, Result};

/// Adds `.context(...)` / `.io_context(...)` to any `Result<T, E>` whose
/// error implements [`std::error::Error`].
pub trait ErrorContext<T> {
    /// Wrap the error as [`Error::Infrastructure`], prefixed with `message`.
    fn context(self, message: &str) -> Result<T>;
    /// Wrap the error as [`Error::Io`], prefixed with `message`.
    fn io_context(self, message: &str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, message: &str) -> Result<T> {
        self.map_err(|source| Error::Infrastructure {
            message: message.to_string(),
            source: Some(Box::new(source)),
        })
    }

    fn io_context(self, message: &str) -> Result<T> {
        self.map_err(|source| Error::Io {
            message: message.to_string(),
            source: Some(Box::new(source)),
        })
    }
}

/// Constructors for [`Error::Infrastructure`] without a wrapped source.
pub mod infra {
    use mcb_domain::error::Error;

    /// Build an [`Error::Infrastructure`] from a plain message, no source.
    #[must_use]
    pub fn infrastructure_error_msg(message: impl Into<String>) -> Error {
        Error::Infrastructure { message: message.into(), source: None }
    }
}

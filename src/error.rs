pub use crate::types::NameScanError;

pub type Result<T> = std::result::Result<T, NameScanError>;

pub trait ErrorContext<T> {
    /// Turns any displayable error into a fatal input error with context.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| NameScanError::InputError(format!("{}: {}", f(), e)))
    }
}

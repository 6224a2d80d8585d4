//! Redaction marker for personal contact data
//!
//! Driver email addresses and phone numbers are personal data. Wrapping them
//! in `Sensitive<T>` before they reach a log field keeps them out of the
//! observability sink while leaving the value reachable in code.

use std::fmt;

/// Wrapper that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use drivers_core_types::Sensitive;
///
/// let email = Sensitive::new("john.doe@example.com");
/// assert_eq!(format!("{:?}", email), "***REDACTED***");
/// assert_eq!(format!("{}", email), "***REDACTED***");
/// assert_eq!(email.expose(), &"john.doe@example.com");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

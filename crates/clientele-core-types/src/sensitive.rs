//! Sensitive data marker for automatic redaction
//!
//! Raw command input carries phone numbers, emails and addresses of
//! clients. Wrapping it in `Sensitive<T>` keeps it out of Debug and Display
//! output, and therefore out of log files.

use std::fmt;

/// Wrapper for personal data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use clientele_core_types::Sensitive;
///
/// let input = Sensitive::new("add n/Amy Bee p/11111111");
/// assert_eq!(format!("{:?}", input), "***REDACTED***");
/// assert_eq!(input.expose(), &"add n/Amy Bee p/11111111");
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

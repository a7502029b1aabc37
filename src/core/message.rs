//! Print-like message assembly

use std::fmt;

/// Displays a sequence of values back to back, with no separator.
///
/// This is what the value-list macros (`info!(a, b, c)`) build.
///
/// ```
/// use logz::Concat;
///
/// let port = 8080;
/// let message = Concat(&[&"listening on ", &port]);
/// assert_eq!(message.to_string(), "listening on 8080");
/// ```
#[derive(Clone, Copy)]
pub struct Concat<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

//! Sequential parameter names scoped to one command.

use alloc::format;
use alloc::string::String;

/// Produces `p0`, `p1`, `p2`, ... in call order.
///
/// Names are unique per instance; a fresh instance starts over at zero.
///
/// # Example
///
/// ```
/// use modification_command::ParameterNameGenerator;
///
/// let mut names = ParameterNameGenerator::new();
/// assert_eq!(names.next().as_deref(), Some("p0"));
/// assert_eq!(names.next().as_deref(), Some("p1"));
///
/// let mut at = ParameterNameGenerator::with_prefix("@p");
/// assert_eq!(at.next().as_deref(), Some("@p0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterNameGenerator {
    prefix: String,
    count: usize,
}

impl ParameterNameGenerator {
    /// Creates a generator using the `p` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix("p")
    }

    /// Creates a generator using a custom prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            count: 0,
        }
    }

    /// The number of names generated so far.
    #[must_use]
    pub fn generated(&self) -> usize {
        self.count
    }
}

impl Default for ParameterNameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ParameterNameGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let name = format!("{}{}", self.prefix, self.count);
        self.count += 1;
        Some(name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

//! Checker configuration.

/// Default limit on schema nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How many elements of a list are checked against the list's element schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPolicy {
    /// Only the first element is checked; the rest are trusted to look alike.
    #[default]
    FirstElement,
    /// Every element is checked.
    EveryElement,
}

/// Knobs for a check run.
///
/// Configuration is plain data: build it once, share it between calls.
///
/// # Examples
///
/// ```rust
/// use schemacheck::{CheckerConfig, ListPolicy};
///
/// let config = CheckerConfig::default()
///     .with_max_depth(16)
///     .with_list_policy(ListPolicy::EveryElement);
///
/// assert_eq!(config.max_depth(), 16);
/// assert_eq!(config.list_policy(), ListPolicy::EveryElement);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    max_depth: usize,
    list_policy: ListPolicy,
}

impl CheckerConfig {
    /// Configuration matching [`Default`].
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            list_policy: ListPolicy::FirstElement,
        }
    }

    /// Limit how many containers deep a check may descend.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Choose how list elements are checked.
    pub fn with_list_policy(mut self, policy: ListPolicy) -> Self {
        self.list_policy = policy;
        self
    }

    /// The nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The list policy.
    pub fn list_policy(&self) -> ListPolicy {
        self.list_policy
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self::new()
    }
}

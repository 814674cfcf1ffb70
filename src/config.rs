//! Configuration for the minimiser post-passes

/// Options for [`crate::minimize::minimize_with_config`]
///
/// The defaults reproduce the standard behaviour. Turning a pass off is mostly
/// useful in teaching material that wants to show the raw group cover.
///
/// # Examples
///
/// ```
/// use kmap_logic::MinimizeConfig;
///
/// let raw = MinimizeConfig {
///     remove_redundant: false,
///     ..Default::default()
/// };
/// assert!(raw.merge_terms);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimizeConfig {
    /// Drop groups whose cells are all covered by other groups
    ///
    /// Runs from the last group back to the first, so later (smaller) groups
    /// are the first candidates for removal.
    ///
    /// **Default:** `true`
    pub remove_redundant: bool,

    /// Run one greedy pass merging three-variable terms that differ in a
    /// single variable
    ///
    /// **Default:** `true`
    pub merge_terms: bool,
}

impl Default for MinimizeConfig {
    fn default() -> Self {
        MinimizeConfig {
            remove_redundant: true,
            merge_terms: true,
        }
    }
}

impl MinimizeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with every post-pass disabled
    pub fn raw() -> Self {
        MinimizeConfig {
            remove_redundant: false,
            merge_terms: false,
        }
    }
}

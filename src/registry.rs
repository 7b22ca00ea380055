//! The boundary between the switch logic and the OS input source registry.

use crate::error::Result;

/// Access to the set of input sources the OS currently offers.
///
/// `Source` is an opaque handle: the switcher only ever reads its identifier
/// through [`InputSourceRegistry::source_id`] and hands it back to
/// [`InputSourceRegistry::select`].
pub trait InputSourceRegistry {
    type Source;

    /// Every enabled input source, in the order the OS reports them.
    /// Queried fresh on each call.
    fn sources(&self) -> Result<Vec<Self::Source>>;

    /// The identifier property of `source`, if it has one.
    fn source_id(&self, source: &Self::Source) -> Option<String>;

    /// Asks the OS to make `source` the active input source and returns its
    /// raw status code (0 on success).
    fn select(&self, source: &Self::Source) -> i32;

    /// Identifier of the input source currently receiving keystrokes.
    fn current_id(&self) -> Result<String>;
}

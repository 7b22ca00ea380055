//! Switch the system-wide macOS input source (keyboard layout or input
//! method) by its identifier, e.g. `com.apple.keylayout.US`.
//!
//! ```no_run
//! inputlang::switch_input_language(inputlang::IM_JAPANESE)?;
//! assert_eq!(inputlang::current_input_source()?, inputlang::IM_JAPANESE);
//! # Ok::<(), inputlang::Error>(())
//! ```
//!
//! On other systems every operation returns [`Error::Unsupported`].

pub mod error;
mod platform;
pub mod registry;
pub mod switcher;

pub use error::{Error, Result};
pub use platform::SystemRegistry;
pub use registry::InputSourceRegistry;
pub use switcher::{select_with, switch_with, Outcome};

/// U.S. keyboard layout.
pub const KB_US: &str = "com.apple.keylayout.US";
/// French keyboard layout.
pub const KB_FRENCH: &str = "com.apple.keylayout.French";
/// Kotoeri Japanese input method.
pub const IM_JAPANESE: &str = "com.apple.inputmethod.Kotoeri.Japanese";

/// Makes the first input source whose identifier equals `identifier` the
/// active one. An unknown identifier leaves the active source unchanged and
/// still returns `Ok(())`.
pub fn switch_input_language(identifier: &str) -> Result<()> {
    switch_with(&SystemRegistry, identifier).map(|_| ())
}

/// Like [`switch_input_language`], but a missing identifier yields
/// [`Error::NotFound`] and a rejected selection yields [`Error::Select`].
pub fn select_input_source(identifier: &str) -> Result<()> {
    select_with(&SystemRegistry, identifier)
}

/// Identifier of the active keyboard input source.
pub fn current_input_source() -> Result<String> {
    SystemRegistry.current_id()
}

/// Identifiers of all enabled input sources, in the order the OS lists them.
pub fn input_source_ids() -> Result<Vec<String>> {
    let registry = SystemRegistry;
    Ok(registry
        .sources()?
        .iter()
        .filter_map(|source| registry.source_id(source))
        .collect())
}

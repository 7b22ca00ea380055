//! Selecting an input source by identifier.
//!
//! Both entry points enumerate the registry, keep the sources whose
//! identifier equals the request byte for byte, and select the first one in
//! enumeration order. They differ only in how a miss or a non-zero status
//! from the OS is reported.

use crate::error::{Error, Result};
use crate::registry::InputSourceRegistry;

/// Result of a lenient switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A matching source was handed to the OS.
    Selected,
    /// Nothing matched; the active source was left alone.
    NotFound,
}

fn find_first<R: InputSourceRegistry>(
    registry: &R,
    identifier: &str,
) -> Result<Option<R::Source>> {
    let sources = registry.sources()?;
    log::debug!("enumerated {} input sources", sources.len());

    Ok(sources
        .into_iter()
        .find(|source| registry.source_id(source).as_deref() == Some(identifier)))
}

/// Switches to `identifier` if the registry offers it.
///
/// A missing identifier is not an error, and the status returned by the
/// selection call is only logged.
pub fn switch_with<R: InputSourceRegistry>(registry: &R, identifier: &str) -> Result<Outcome> {
    let Some(source) = find_first(registry, identifier)? else {
        log::debug!("no input source matches '{}', nothing to do", identifier);
        return Ok(Outcome::NotFound);
    };

    let status = registry.select(&source);
    if status != 0 {
        log::warn!(
            "selecting input source '{}' returned status {}",
            identifier,
            status
        );
    } else {
        log::debug!("selected input source '{}'", identifier);
    }

    Ok(Outcome::Selected)
}

/// Switches to `identifier`, failing with [`Error::NotFound`] when no source
/// matches and [`Error::Select`] when the OS rejects the selection.
pub fn select_with<R: InputSourceRegistry>(registry: &R, identifier: &str) -> Result<()> {
    let source =
        find_first(registry, identifier)?.ok_or_else(|| Error::NotFound(identifier.to_string()))?;

    match registry.select(&source) {
        0 => {
            log::debug!("selected input source '{}'", identifier);
            Ok(())
        }
        status => Err(Error::Select {
            id: identifier.to_string(),
            status,
        }),
    }
}

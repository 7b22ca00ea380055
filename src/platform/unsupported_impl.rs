use crate::error::{Error, Result};
use crate::registry::InputSourceRegistry;

const UNSUPPORTED: &str = "Input source switching is only supported on macOS.\n\
    On other systems use the platform's own tools:\n\
    - For ibus: ibus engine <engine-name>\n\
    - For fcitx: fcitx5-remote -s <input-method>\n\
    - For Windows: the language bar or im-select";

/// Stand-in registry for systems without Text Input Source Services.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRegistry;

impl InputSourceRegistry for SystemRegistry {
    type Source = std::convert::Infallible;

    fn sources(&self) -> Result<Vec<Self::Source>> {
        Err(Error::Unsupported(UNSUPPORTED))
    }

    fn source_id(&self, source: &Self::Source) -> Option<String> {
        match *source {}
    }

    fn select(&self, source: &Self::Source) -> i32 {
        match *source {}
    }

    fn current_id(&self) -> Result<String> {
        Err(Error::Unsupported(UNSUPPORTED))
    }
}

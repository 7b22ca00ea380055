// macOS: Carbon Text Input Source Services
#[cfg(target_os = "macos")]
mod macos_impl;

// Everything else
#[cfg(not(target_os = "macos"))]
mod unsupported_impl;

#[cfg(target_os = "macos")]
pub use macos_impl::SystemRegistry;

#[cfg(not(target_os = "macos"))]
pub use unsupported_impl::SystemRegistry;

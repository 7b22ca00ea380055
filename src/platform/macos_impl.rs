use core_foundation::base::TCFType;
use core_foundation::string::{CFString, CFStringRef};
use std::ptr;

use crate::error::{Error, Result};
use crate::registry::InputSourceRegistry;

type OSStatus = i32;

// Text Input Source Services, part of Carbon/HIToolbox
#[link(name = "Carbon", kind = "framework")]
extern "C" {
    fn TISCopyCurrentKeyboardInputSource() -> *const libc::c_void;
    fn TISCreateInputSourceList(
        properties: *const libc::c_void,
        include_all_installed: bool,
    ) -> *const libc::c_void;
    fn TISGetInputSourceProperty(
        source: *const libc::c_void,
        property_key: CFStringRef,
    ) -> *const libc::c_void;
    fn TISSelectInputSource(source: *const libc::c_void) -> OSStatus;

    static kTISPropertyInputSourceID: CFStringRef;
}

extern "C" {
    fn CFArrayGetCount(array: *const libc::c_void) -> isize;
    fn CFArrayGetValueAtIndex(array: *const libc::c_void, idx: isize) -> *const libc::c_void;
    fn CFRetain(cf: *const libc::c_void) -> *const libc::c_void;
    fn CFRelease(cf: *const libc::c_void);
}

/// A CoreFoundation object we hold one reference to.
struct Owned(*const libc::c_void);

impl Owned {
    /// Takes ownership of a pointer obtained under the create rule.
    fn from_create(ptr: *const libc::c_void) -> Option<Self> {
        (!ptr.is_null()).then_some(Owned(ptr))
    }

    /// Retains a pointer obtained under the get rule.
    fn from_get(ptr: *const libc::c_void) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        Some(Owned(unsafe { CFRetain(ptr) }))
    }
}

impl Drop for Owned {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0) };
    }
}

/// A retained `TISInputSourceRef`.
pub struct TisInputSource(Owned);

fn source_id(source: *const libc::c_void) -> Option<String> {
    unsafe {
        let id_ref = TISGetInputSourceProperty(source, kTISPropertyInputSourceID);
        if id_ref.is_null() {
            return None;
        }
        Some(CFString::wrap_under_get_rule(id_ref as CFStringRef).to_string())
    }
}

/// The current user's input sources as seen through Carbon.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRegistry;

impl InputSourceRegistry for SystemRegistry {
    type Source = TisInputSource;

    fn sources(&self) -> Result<Vec<TisInputSource>> {
        // No filter dictionary: matching happens on our side.
        let list = Owned::from_create(unsafe { TISCreateInputSourceList(ptr::null(), false) })
            .ok_or(Error::Enumerate("TISCreateInputSourceList returned null"))?;

        let count = unsafe { CFArrayGetCount(list.0) };
        let sources = (0..count)
            .filter_map(|idx| Owned::from_get(unsafe { CFArrayGetValueAtIndex(list.0, idx) }))
            .map(TisInputSource)
            .collect();

        Ok(sources)
    }

    fn source_id(&self, source: &TisInputSource) -> Option<String> {
        source_id((source.0).0)
    }

    fn select(&self, source: &TisInputSource) -> i32 {
        unsafe { TISSelectInputSource((source.0).0) }
    }

    fn current_id(&self) -> Result<String> {
        let current = Owned::from_create(unsafe { TISCopyCurrentKeyboardInputSource() })
            .ok_or(Error::Enumerate("failed to get current input source"))?;

        source_id(current.0).ok_or(Error::Enumerate("failed to get input source ID"))
    }
}

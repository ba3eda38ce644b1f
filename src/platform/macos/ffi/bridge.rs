//! Thin layer over the objc2 runtime.
//!
//! The shell talks to AppKit and WebKit through dynamic message sends on
//! untyped object pointers. This module gathers the aliases and helpers
//! those call sites share.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{c_char, CStr, CString};

use objc2::encode::Encode;

use crate::error::ShellError;

// ============================================================================
// Core objc2 re-exports
// ============================================================================

pub use objc2::runtime::{AnyClass, AnyObject, AnyProtocol, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel, ClassType};

pub use block2::{Block, RcBlock};
pub use objc2::rc::Retained;
pub use objc2_app_kit::NSApplication;
pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

// ============================================================================
// Type aliases
// ============================================================================

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES`.
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

// ============================================================================
// Helper functions
// ============================================================================

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Create an NSString and return it as a raw id.
///
/// The returned pointer is retained; the caller owns one reference.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    Retained::into_raw(nsstring(s)) as id
}

/// Copy an NSString (or nil) into a Rust `String`.
///
/// # Safety
/// `ns` must be nil or a valid NSString.
pub unsafe fn string_from_nsstring(ns: id) -> Option<String> {
    if ns.is_null() {
        return None;
    }
    let utf8: *const c_char = msg_send![ns, UTF8String];
    if utf8.is_null() {
        return None;
    }
    Some(CStr::from_ptr(utf8).to_string_lossy().into_owned())
}

/// Returns true if `obj` is an NSString, e.g. a JavaScript string result.
///
/// # Safety
/// `obj` must be a valid object.
pub unsafe fn is_nsstring(obj: id) -> bool {
    msg_send![obj, isKindOfClass: get_class("NSString")]
}

/// Absolute string of an NSURL (or nil).
///
/// # Safety
/// `url` must be nil or a valid NSURL.
pub unsafe fn string_from_nsurl(url: id) -> Option<String> {
    if url.is_null() {
        return None;
    }
    let absolute: id = msg_send![url, absoluteString];
    string_from_nsstring(absolute)
}

// ============================================================================
// Runtime helpers
// ============================================================================

/// Look up a class by name.
pub fn lookup_class(name: &str) -> Result<&'static AnyClass, ShellError> {
    let c_name = CString::new(name).map_err(|_| ShellError::ClassNotFound(name.to_string()))?;
    AnyClass::get(&c_name).ok_or_else(|| ShellError::ClassNotFound(name.to_string()))
}

/// Get a Foundation/AppKit class that is always present.
///
/// Only for classes linked into every AppKit process (`NSMenu`, `NSColor`, ...).
/// Use [`lookup_class`] for anything that may be missing.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    match lookup_class(name) {
        Ok(cls) => cls,
        Err(err) => panic!("{err}"),
    }
}

// ============================================================================
// Instance variable access
// ============================================================================

/// Extension trait for accessing instance variables on AnyObject.
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// - The ivar must exist and be of type T
    /// - Must be called from the main thread for UI objects
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = CString::new(name).unwrap_or_default();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = CString::new(name).unwrap_or_default();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Load a boolean ivar stored as u8.
///
/// # Safety
/// The object must have an ivar with the given name of type u8.
pub unsafe fn get_bool_ivar(obj: id, name: &str) -> bool {
    *(*obj).load_ivar::<u8>(name) != 0
}

/// Store a boolean ivar as u8.
///
/// # Safety
/// The object must have an ivar with the given name of type u8.
pub unsafe fn set_bool_ivar(obj: id, name: &str, val: bool) {
    (*obj).store_ivar::<u8>(name, if val { 1 } else { 0 });
}

// ============================================================================
// Key-value coding
// ============================================================================

/// Setter selectors KVC tries for `key`, public then underscored.
fn kvc_setter_names(key: &str) -> [String; 2] {
    let mut chars = key.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    };
    [format!("set{capitalized}:"), format!("_set{capitalized}:")]
}

/// Set a boolean property through `setValue:forKey:`.
///
/// Returns false without sending anything when `obj` has no setter for
/// `key`; KVC raises on unknown keys.
///
/// # Safety
/// `obj` must be a valid object. Main thread only for UI objects.
pub unsafe fn set_bool_value(obj: id, key: &str, value: bool) -> bool {
    let settable = kvc_setter_names(key).iter().any(|name| {
        CString::new(name.as_str())
            .map(|c_name| msg_send![obj, respondsToSelector: Sel::register(&c_name)])
            .unwrap_or(false)
    });
    if !settable {
        return false;
    }
    let number: id = msg_send![get_class("NSNumber"), numberWithBool: Bool::new(value)];
    let key = nsstring(key);
    let _: () = msg_send![obj, setValue: number, forKey: &*key];
    true
}

// ============================================================================
// NSAutoreleasePool replacement
// ============================================================================

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}

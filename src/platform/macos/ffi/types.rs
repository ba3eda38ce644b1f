//! AppKit enum values used with raw message sends.
//!
//! objc2-app-kit exposes these as typed bitflags, but the call sites pass
//! plain integers through `msg_send!`, so the raw values live here.

// === NSWindowStyleMask ===

pub const NS_WINDOW_STYLE_TITLED: u64 = 1 << 0;
pub const NS_WINDOW_STYLE_CLOSABLE: u64 = 1 << 1;
pub const NS_WINDOW_STYLE_MINIATURIZABLE: u64 = 1 << 2;
pub const NS_WINDOW_STYLE_RESIZABLE: u64 = 1 << 3;
pub const NS_WINDOW_STYLE_FULL_SIZE_CONTENT_VIEW: u64 = 1 << 15;

/// `NSBackingStoreBuffered`
pub const NS_BACKING_STORE_BUFFERED: u64 = 2;

/// `NSWindowTitleHidden`
pub const NS_WINDOW_TITLE_HIDDEN: i64 = 1;

// === NSAutoresizingMaskOptions ===

pub const NS_VIEW_WIDTH_SIZABLE: u64 = 1 << 1;
pub const NS_VIEW_MIN_Y_MARGIN: u64 = 1 << 3;
pub const NS_VIEW_HEIGHT_SIZABLE: u64 = 1 << 4;

// === NSEventModifierFlags ===

pub const NS_EVENT_MODIFIER_SHIFT: u64 = 1 << 17;
pub const NS_EVENT_MODIFIER_OPTION: u64 = 1 << 19;
pub const NS_EVENT_MODIFIER_COMMAND: u64 = 1 << 20;

/// `NSApplicationActivationPolicyRegular`
pub const NS_ACTIVATION_POLICY_REGULAR: i64 = 0;

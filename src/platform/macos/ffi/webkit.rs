//! WebKit linkage and enum values.
//!
//! WebKit classes are looked up dynamically, so nothing references the
//! framework by symbol; the empty block below makes the linker load it.

#[link(name = "WebKit", kind = "framework")]
extern "C" {}

/// `WKNavigationActionPolicyCancel`
pub const WK_NAVIGATION_POLICY_CANCEL: isize = 0;

/// `WKNavigationActionPolicyAllow`
pub const WK_NAVIGATION_POLICY_ALLOW: isize = 1;

/// `WKAudiovisualMediaTypeNone`
pub const WK_MEDIA_TYPES_NONE: usize = 0;

/// `NSURLRequestReturnCacheDataElseLoad`
pub const NSURL_REQUEST_RETURN_CACHE_DATA_ELSE_LOAD: usize = 2;

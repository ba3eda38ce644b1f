//! Application-level objects.

pub mod delegate;

pub use delegate::create_app_delegate;

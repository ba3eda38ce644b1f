//! SitewrapAppDelegate: NSApplicationDelegate for the shell.

use tracing::info;

use crate::error::ShellError;
use crate::platform::macos::ffi::bridge::{
    get_class, id, lookup_class, msg_send, nil, sel, AnyClass, AnyObject, AnyProtocol, Bool,
    ClassBuilder, Sel, YES,
};

/// Objective-C class name of the app delegate.
pub const APP_DELEGATE_CLASS: &str = "SitewrapAppDelegate";

/// Register the app delegate class, once per process.
///
/// # Safety
/// Must be called from the main thread.
unsafe fn app_delegate_class() -> Result<&'static AnyClass, ShellError> {
    if let Ok(cls) = lookup_class(APP_DELEGATE_CLASS) {
        return Ok(cls);
    }

    let mut builder = ClassBuilder::new(c"SitewrapAppDelegate", get_class("NSObject"))
        .ok_or_else(|| ShellError::Native(format!("cannot declare {APP_DELEGATE_CLASS}")))?;

    if let Some(protocol) = AnyProtocol::get(c"NSApplicationDelegate") {
        builder.add_protocol(protocol);
    }

    builder.add_method(
        sel!(applicationShouldTerminateAfterLastWindowClosed:),
        terminate_after_last_window as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );
    builder.add_method(
        sel!(applicationWillTerminate:),
        will_terminate as unsafe extern "C-unwind" fn(_, _, _),
    );

    Ok(builder.register())
}

/// Create the delegate and install it on the shared application.
///
/// NSApplication holds its delegate weakly; the returned object is never released.
///
/// # Safety
/// Must be called from the main thread after NSApplication is initialized.
pub unsafe fn create_app_delegate(app: id) -> Result<id, ShellError> {
    let cls = app_delegate_class()?;
    let delegate: id = msg_send![cls, new];
    if delegate == nil {
        return Err(ShellError::Native("failed to create app delegate".to_string()));
    }
    let _: () = msg_send![app, setDelegate: delegate];
    Ok(delegate)
}

unsafe extern "C-unwind" fn terminate_after_last_window(
    _this: &mut AnyObject,
    _cmd: Sel,
    _app: id,
) -> Bool {
    YES
}

unsafe extern "C-unwind" fn will_terminate(_this: &mut AnyObject, _cmd: Sel, _note: id) {
    info!("terminating");
}

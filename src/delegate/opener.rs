//! Opening links outside the shell.

use tracing::info;

use crate::error::ShellError;

/// Returns true if `url` can be handed to the system browser.
///
/// Only web and mail links qualify; `javascript:`, `about:`, `file:` and
/// other schemes are never sent outside the shell.
pub fn is_external_url(url: &str) -> bool {
    let url = url.trim();
    let Some((scheme, rest)) = url.split_once(':') else {
        return false;
    };
    match scheme.to_ascii_lowercase().as_str() {
        "http" | "https" => rest.starts_with("//") && rest.len() > 2,
        "mailto" => !rest.is_empty(),
        _ => false,
    }
}

/// Something that can open a URL outside the web view.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), ShellError>;
}

/// Opens links in the user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), ShellError> {
        info!(url, "opening in default browser");
        webbrowser::open(url).map_err(|source| ShellError::OpenLink {
            url: url.to_string(),
            source,
        })
    }
}

//! Hand URLs to the system browser.
//!
//! Tiles refuse `window.open` and `target="_blank"` navigations; those
//! links are opened here instead.

use std::process::{Command, Stdio};

use tiles_common::PlatformError;

/// Open `url` in the user's default browser.
///
/// Only `http` and `https` URLs are accepted so page content cannot launch
/// arbitrary handlers.
pub fn open_in_browser(url: &str) -> Result<(), PlatformError> {
    if !is_web_url(url) {
        return Err(PlatformError::NotSupported(format!(
            "refusing to open non-web url externally: {url}"
        )));
    }

    let launcher = Launcher::native().ok_or_else(|| {
        PlatformError::NotSupported("no system browser launcher on this platform".into())
    })?;

    let mut cmd = launcher.command(url);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    cmd.spawn()
        .map(|_| tracing::info!(url, ?launcher, "Opened link in system browser"))
        .map_err(|e| PlatformError::LaunchError(format!("{url}: {e}")))
}

/// True for absolute `http://` and `https://` URLs.
pub fn is_web_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.len() > scheme.len() && lower.starts_with(scheme))
}

/// Per-OS program that hands a URL to the default browser.
///
/// The URL is always passed as a single argv entry. No launcher goes
/// through a shell, so `&`, `|` and `^` in a query string stay literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Launcher {
    /// macOS `open`.
    Open,
    /// `rundll32 url.dll,FileProtocolHandler` on Windows.
    UrlProtocolHandler,
    /// freedesktop `xdg-open`.
    XdgOpen,
}

impl Launcher {
    fn native() -> Option<Self> {
        if cfg!(target_os = "macos") {
            Some(Self::Open)
        } else if cfg!(target_os = "windows") {
            Some(Self::UrlProtocolHandler)
        } else if cfg!(unix) {
            Some(Self::XdgOpen)
        } else {
            None
        }
    }

    fn command(self, url: &str) -> Command {
        let mut cmd = match self {
            Self::Open => Command::new("open"),
            Self::UrlProtocolHandler => {
                let mut cmd = Command::new("rundll32");
                cmd.arg("url.dll,FileProtocolHandler");
                cmd
            }
            Self::XdgOpen => Command::new("xdg-open"),
        };
        cmd.arg(url);
        cmd
    }
}

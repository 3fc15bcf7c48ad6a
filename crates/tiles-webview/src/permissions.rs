//! Feature permission policy for tile pages.
//!
//! Media capture and notifications are granted so conferencing and chat
//! sites work inside a tile. Every other request is denied.
//!
//! The decision is platform independent. It is enforced through the
//! WebKitGTK `permission-request` signal on Linux and the WebView2
//! `PermissionRequested` event on Windows. wry exposes no permission hook
//! for WKWebView, so on macOS the engine's own delegate answers and the
//! policy is not applied there.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionKind {
    MediaAudioCapture,
    MediaVideoCapture,
    MediaAudioVideoCapture,
    DesktopVideoCapture,
    DesktopAudioVideoCapture,
    Notifications,
    Geolocation,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    Grant,
    Deny,
}

impl PermissionKind {
    pub fn decision(self) -> PermissionDecision {
        match self {
            PermissionKind::MediaAudioCapture
            | PermissionKind::MediaVideoCapture
            | PermissionKind::MediaAudioVideoCapture
            | PermissionKind::DesktopVideoCapture
            | PermissionKind::DesktopAudioVideoCapture
            | PermissionKind::Notifications => PermissionDecision::Grant,
            PermissionKind::Geolocation | PermissionKind::Other => PermissionDecision::Deny,
        }
    }
}

#[cfg(target_os = "linux")]
pub(crate) mod linux {
    use tracing::{debug, info};
    use webkit2gtk::glib::prelude::*;
    use webkit2gtk::{PermissionRequestExt, WebViewExt};
    use webkit2gtk::{
        GeolocationPermissionRequest, NotificationPermissionRequest, PermissionRequest,
        UserMediaPermissionRequest,
    };
    use wry::WebViewExtUnix;

    use super::{PermissionDecision, PermissionKind};
    use crate::manager::WebViewId;

    fn classify(request: &PermissionRequest) -> PermissionKind {
        if request.downcast_ref::<UserMediaPermissionRequest>().is_some() {
            // WebKitGTK routes camera, microphone and screen capture through
            // one request type; all of them are granted alike.
            PermissionKind::MediaAudioVideoCapture
        } else if request.downcast_ref::<NotificationPermissionRequest>().is_some() {
            PermissionKind::Notifications
        } else if request.downcast_ref::<GeolocationPermissionRequest>().is_some() {
            PermissionKind::Geolocation
        } else {
            PermissionKind::Other
        }
    }

    /// Answer every permission request of `webview` from the policy.
    pub fn install(webview: &wry::WebView, id: WebViewId) {
        webview
            .webview()
            .connect_permission_request(move |_, request| {
                let kind = classify(request);
                match kind.decision() {
                    PermissionDecision::Grant => {
                        info!(%id, ?kind, "Permission granted");
                        request.allow();
                    }
                    PermissionDecision::Deny => {
                        debug!(%id, ?kind, "Permission denied");
                        request.deny();
                    }
                }
                true
            });
    }
}

#[cfg(target_os = "windows")]
pub(crate) mod windows {
    use tracing::{debug, info, warn};
    use webview2_com::Microsoft::Web::WebView2::Win32::{
        ICoreWebView2PermissionRequestedEventArgs, COREWEBVIEW2_PERMISSION_KIND,
        COREWEBVIEW2_PERMISSION_KIND_CAMERA, COREWEBVIEW2_PERMISSION_KIND_GEOLOCATION,
        COREWEBVIEW2_PERMISSION_KIND_MICROPHONE, COREWEBVIEW2_PERMISSION_KIND_NOTIFICATIONS,
        COREWEBVIEW2_PERMISSION_STATE, COREWEBVIEW2_PERMISSION_STATE_ALLOW,
        COREWEBVIEW2_PERMISSION_STATE_DENY,
    };
    use webview2_com::PermissionRequestedEventHandler;
    use wry::WebViewExtWindows;

    use super::{PermissionDecision, PermissionKind};
    use crate::manager::WebViewId;

    pub(super) fn classify(kind: COREWEBVIEW2_PERMISSION_KIND) -> PermissionKind {
        match kind {
            COREWEBVIEW2_PERMISSION_KIND_MICROPHONE => PermissionKind::MediaAudioCapture,
            COREWEBVIEW2_PERMISSION_KIND_CAMERA => PermissionKind::MediaVideoCapture,
            COREWEBVIEW2_PERMISSION_KIND_NOTIFICATIONS => PermissionKind::Notifications,
            COREWEBVIEW2_PERMISSION_KIND_GEOLOCATION => PermissionKind::Geolocation,
            _ => PermissionKind::Other,
        }
    }

    pub(super) fn state(decision: PermissionDecision) -> COREWEBVIEW2_PERMISSION_STATE {
        match decision {
            PermissionDecision::Grant => COREWEBVIEW2_PERMISSION_STATE_ALLOW,
            PermissionDecision::Deny => COREWEBVIEW2_PERMISSION_STATE_DENY,
        }
    }

    /// Answer every permission request of `webview` from the policy.
    pub fn install(webview: &wry::WebView, id: WebViewId) {
        let core = match unsafe { webview.controller().CoreWebView2() } {
            Ok(core) => core,
            Err(e) => {
                warn!(%id, error = %e, "No WebView2 core, permission policy not installed");
                return;
            }
        };

        let handler = PermissionRequestedEventHandler::create(Box::new(
            move |_, args: Option<ICoreWebView2PermissionRequestedEventArgs>| {
                let Some(args) = args else {
                    return Ok(());
                };
                let mut raw = COREWEBVIEW2_PERMISSION_KIND::default();
                unsafe { args.PermissionKind(&mut raw)? };

                let kind = classify(raw);
                let decision = kind.decision();
                match decision {
                    PermissionDecision::Grant => info!(%id, ?kind, "Permission granted"),
                    PermissionDecision::Deny => debug!(%id, ?kind, "Permission denied"),
                }
                unsafe { args.SetState(state(decision)) }
            },
        ));

        let mut token = Default::default();
        if let Err(e) = unsafe { core.add_PermissionRequested(&handler, &mut token) } {
            warn!(%id, error = %e, "Failed to install permission policy");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_and_notifications_granted() {
        for kind in [
            PermissionKind::MediaAudioCapture,
            PermissionKind::MediaVideoCapture,
            PermissionKind::MediaAudioVideoCapture,
            PermissionKind::DesktopVideoCapture,
            PermissionKind::DesktopAudioVideoCapture,
            PermissionKind::Notifications,
        ] {
            assert_eq!(kind.decision(), PermissionDecision::Grant, "{kind:?}");
        }
    }

    #[test]
    fn everything_else_denied() {
        for kind in [PermissionKind::Geolocation, PermissionKind::Other] {
            assert_eq!(kind.decision(), PermissionDecision::Deny, "{kind:?}");
        }
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn webview2_requests_follow_policy() {
        use webview2_com::Microsoft::Web::WebView2::Win32::{
            COREWEBVIEW2_PERMISSION_KIND_CAMERA, COREWEBVIEW2_PERMISSION_KIND_CLIPBOARD_READ,
            COREWEBVIEW2_PERMISSION_KIND_GEOLOCATION, COREWEBVIEW2_PERMISSION_KIND_MICROPHONE,
            COREWEBVIEW2_PERMISSION_KIND_NOTIFICATIONS, COREWEBVIEW2_PERMISSION_STATE_ALLOW,
            COREWEBVIEW2_PERMISSION_STATE_DENY,
        };

        let decide = |raw| windows::state(windows::classify(raw).decision());
        for raw in [
            COREWEBVIEW2_PERMISSION_KIND_CAMERA,
            COREWEBVIEW2_PERMISSION_KIND_MICROPHONE,
            COREWEBVIEW2_PERMISSION_KIND_NOTIFICATIONS,
        ] {
            assert_eq!(decide(raw), COREWEBVIEW2_PERMISSION_STATE_ALLOW);
        }
        for raw in [
            COREWEBVIEW2_PERMISSION_KIND_GEOLOCATION,
            COREWEBVIEW2_PERMISSION_KIND_CLIPBOARD_READ,
        ] {
            assert_eq!(decide(raw), COREWEBVIEW2_PERMISSION_STATE_DENY);
        }
    }
}

//! WebView event types.

use serde::{Deserialize, Serialize};

use crate::manager::WebViewId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView, drained on the event loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad {
        id: WebViewId,
        state: PageLoadState,
        url: String,
    },
    /// An IPC message was received from JavaScript.
    IpcMessage {
        id: WebViewId,
        body: String,
    },
    /// The page asked for a new window. The request was refused in-tile.
    NewWindowRequested {
        id: WebViewId,
        url: String,
    },
    Closed {
        id: WebViewId,
    },
}

impl WebViewEvent {
    pub fn id(&self) -> WebViewId {
        match self {
            WebViewEvent::PageLoad { id, .. }
            | WebViewEvent::IpcMessage { id, .. }
            | WebViewEvent::NewWindowRequested { id, .. }
            | WebViewEvent::Closed { id } => *id,
        }
    }
}

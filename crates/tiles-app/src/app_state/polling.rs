//! Periodic draining of webview events.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::WebTilesApp;
use super::types::POLL_INTERVAL;

impl WebTilesApp {
    /// Drain queued webview events and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    pub(super) fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };
        for event in events {
            self.handle_webview_event(event);
        }
    }
}

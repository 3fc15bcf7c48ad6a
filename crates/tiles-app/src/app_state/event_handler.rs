//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, PhysicalKey};
use winit::window::WindowId;

use tiles_platform::{normalize_key_code, normalize_winit_key, KeyCombo};

use super::core::WebTilesApp;

impl ApplicationHandler for WebTilesApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.create_tile_webviews();
        self.sync_webview_bounds();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_webview_bounds();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
                let logical = position.to_logical::<f64>(scale);
                self.handle_cursor_moved(logical.x, logical.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }

        if self.should_exit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl WebTilesApp {
    /// Look up a key press on the window in the keybind registry.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            physical_key,
            logical_key,
            state,
            repeat,
            ..
        } = event;
        if state != ElementState::Pressed || repeat {
            return;
        }

        let from_code = match physical_key {
            PhysicalKey::Code(code) => normalize_key_code(&format!("{code:?}")),
            PhysicalKey::Unidentified(_) => None,
        };
        let key = match from_code {
            Some(key) => key,
            None => match &logical_key {
                Key::Named(named) => normalize_winit_key(&format!("{named:?}")),
                Key::Character(c) => normalize_winit_key(c),
                _ => return,
            },
        };

        let combo = KeyCombo::from_parts(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            key,
        );
        if let Some(action) = self.registry.lookup(&combo) {
            self.dispatch(action);
        }
    }
}

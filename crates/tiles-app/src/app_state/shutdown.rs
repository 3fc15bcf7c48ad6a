//! Shutdown: persist splitter sizes, then destroy webviews.

use super::core::WebTilesApp;

impl WebTilesApp {
    /// Save the sizes of every visible splitter, sync settings, and
    /// destroy all webviews. Runs once; later calls do nothing.
    pub(super) fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        tracing::info!("Saving layout and closing tiles");

        if self.window.is_some() {
            let viewport = self.viewport();
            self.layout.set_viewport(viewport);
        }
        for (key, sizes) in self.layout.all_splitter_sizes() {
            self.settings.set_sizes(key.as_str(), &sizes);
        }
        self.sync_settings();

        self.drag = None;
        self.overlay = None;
        if let Some(registry) = &mut self.webviews {
            registry.destroy_all();
        }
    }
}

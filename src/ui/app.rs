// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It builds the view-model and connects the
//! components to it.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates BirthdayManager (HTTP backend + dialog confirmation)
//!   ├─ Builds main window
//!   ├─ Connects components to BirthdayManager
//!   └─ Fetches the list once the window is shown
//! ```
//!
//! Must be run inside a Tokio runtime context (`Runtime::enter`): requests
//! and status timers are driven by Tokio while GTK owns the main thread.

use gtk4::{gdk, glib, prelude::*, Application, ApplicationWindow, CssProvider};
use std::rc::Rc;
use tracing::{error, info, warn};

use crate::api::HttpBirthdayApi;
use crate::config::Settings;
use crate::ui::actions::{setup_clear_filters_action, setup_quit_action, setup_refresh_action};
use crate::ui::builders::{build_header_bar, build_main_layout, spawn_render_loop, wire_up_handlers};
use crate::ui::{BirthdayManager, DialogConfirm};

/// View-model as driven by the GTK4 front-end
pub type GuiManager = BirthdayManager<HttpBirthdayApi, DialogConfirm>;

/// GTK4 Application for birthday management
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// Resolved settings, used when the window is built
    settings: Settings,
}

impl App {
    /// Creates a new App for the backend named in `settings`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use birthday_manager::config::Settings;
    /// use birthday_manager::ui::App;
    ///
    /// let runtime = tokio::runtime::Runtime::new()?;
    /// let _guard = runtime.enter();
    ///
    /// App::new(Settings::default()).run(); // Blocks until window closes
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn new(settings: Settings) -> Self {
        let app = Application::builder()
            .application_id("com.tidynest.birthday-manager")
            .build();

        Self { app, settings }
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the application
    /// exits.
    pub fn run(self) -> glib::ExitCode {
        let settings = self.settings.clone();

        // Connect activate signal (called when app starts)
        self.app.connect_activate(move |app| {
            Self::build_ui(app, &settings);
        });

        // Run the application (blocks until exit)
        self.app.run_with_args::<&str>(&[])
    }

    /// Loads custom CSS styling for the application
    fn load_css() {
        let provider = CssProvider::new();
        provider.load_from_string(include_str!("style.css"));

        match gdk::Display::default() {
            Some(display) => gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => warn!("No display available, skipping custom CSS"),
        }
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates. It creates
    /// the window, all components and the view-model.
    fn build_ui(app: &Application, settings: &Settings) {
        let api = match HttpBirthdayApi::new(settings) {
            Ok(api) => api,
            Err(e) => {
                error!("Failed to create backend client: {}", e);
                app.quit();
                return;
            }
        };

        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Birthday Manager")
            .default_width(800)
            .default_height(700)
            .build();
        window.set_titlebar(Some(&build_header_bar()));

        let manager = Rc::new(BirthdayManager::new(
            api,
            DialogConfirm::new(&window),
            settings,
        ));

        let (root, form_panel, search_bar, birthday_list, status_overlay) = build_main_layout();
        window.set_child(Some(&root));

        wire_up_handlers(manager.clone(), &form_panel, search_bar.clone(), &birthday_list);
        spawn_render_loop(&manager, form_panel, birthday_list, status_overlay);

        setup_quit_action(app);
        setup_refresh_action(app, manager.clone());
        setup_clear_filters_action(app, search_bar);

        window.present();

        // Initial fetch, once
        glib::spawn_future_local(async move {
            match manager.mount().await {
                Ok(()) => info!("Initial list loaded"),
                Err(e) => error!("Initial fetch failed: {}", e),
            }
        });
    }
}

//! GTK Action setup for the application
//!
//! This module contains all GTK action definitions (quit, refresh,
//! clear-filters) and their setup functions

use gtk4::{gio, glib, prelude::*, Application};
use std::rc::Rc;
use tracing::debug;

use crate::ui::app::GuiManager;
use crate::ui::components::SearchBar;

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &["<Ctrl>q"]);
}

/// Sets up the refresh action
///
/// Re-fetches the list from the backend. Failures are logged and the
/// current list stays on screen.
pub fn setup_refresh_action(app: &Application, manager: Rc<GuiManager>) {
    let refresh_action = gio::SimpleAction::new("refresh", None);

    refresh_action.connect_activate(move |_, _| {
        debug!("Refresh requested");

        let manager = manager.clone();
        glib::spawn_future_local(async move {
            // refresh logs its own failures
            let _ = manager.refresh().await;
        });
    });

    app.add_action(&refresh_action);
    app.set_accels_for_action("app.refresh", &["F5", "<Ctrl>r"]);
}

/// Sets up the clear-filters action
///
/// Empties the name search and selects all months. The widgets' change
/// signals carry the reset into the view-model.
pub fn setup_clear_filters_action(app: &Application, search_bar: Rc<SearchBar>) {
    let clear_action = gio::SimpleAction::new("clear-filters", None);

    clear_action.connect_activate(move |_, _| {
        debug!("Clearing filters");
        search_bar.clear();
    });

    app.add_action(&clear_action);
    app.set_accels_for_action("app.clear-filters", &["<Ctrl>l"]);
}

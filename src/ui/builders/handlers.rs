//! Event handler setup
//!
//! Wires up all event handlers for the main UI:
//! - Form entries and add button
//! - Name search and month selector
//! - Per-row delete buttons
//!
//! and the render loop that mirrors the view-model into the widgets.

use gtk4::{glib, prelude::*};
use std::rc::Rc;
use tracing::debug;

use crate::ui::app::GuiManager;
use crate::ui::components::{BirthdayList, FormPanel, SearchBar, StatusOverlay};
use crate::ui::ViewState;

/// Wires up all event handlers for the main UI
///
/// Every widget edit is forwarded to the view-model; no widget state is
/// read back anywhere else.
pub fn wire_up_handlers(
    manager:       Rc<GuiManager>,
    form_panel:    &FormPanel,
    search_bar:    Rc<SearchBar>,
    birthday_list: &BirthdayList,
) {
    // ============================================================================
    // Form entries
    // ============================================================================
    let manager_for_name = manager.clone();
    form_panel.name_entry().connect_changed(move |entry| {
        manager_for_name.set_form_name(entry.text().as_str());
    });

    let manager_for_dob = manager.clone();
    form_panel.dob_entry().connect_changed(move |entry| {
        manager_for_dob.set_form_dob(entry.text().as_str());
    });

    let manager_for_email = manager.clone();
    form_panel.email_entry().connect_changed(move |entry| {
        manager_for_email.set_form_email(entry.text().as_str());
    });

    // ============================================================================
    // Submit: add button or Enter in the last field
    // ============================================================================
    let manager_for_add = manager.clone();
    form_panel.add_button().connect_clicked(move |_| {
        submit_form(&manager_for_add);
    });

    let manager_for_enter = manager.clone();
    form_panel.email_entry().connect_activate(move |_| {
        submit_form(&manager_for_enter);
    });

    // ============================================================================
    // Filters
    // ============================================================================
    let manager_for_search = manager.clone();
    search_bar.entry().connect_search_changed(move |entry| {
        let query = entry.text().to_string();
        debug!("Search: '{}'", query);
        manager_for_search.set_name_query(query);
    });

    let manager_for_month = manager.clone();
    let search_bar_for_month = search_bar.clone();
    search_bar.month_dropdown().connect_selected_notify(move |_| {
        let month = search_bar_for_month.selected_month_query();
        debug!("Month filter: '{}'", month);
        manager_for_month.set_month_query(month);
    });

    // ============================================================================
    // Delete button handler
    // ============================================================================
    birthday_list.connect_delete(move |id| {
        debug!("Delete button clicked for: {}", id);

        let manager = manager.clone();
        glib::spawn_future_local(async move {
            if let Err(e) = manager.delete(&id).await {
                debug!("Delete did not complete: {}", e);
            }
        });
    });
}

/// Runs the create handler without blocking the main loop
fn submit_form(manager: &Rc<GuiManager>) {
    let manager = manager.clone();
    glib::spawn_future_local(async move {
        if let Err(e) = manager.submit().await {
            debug!("Submit did not complete: {}", e);
        }
    });
}

/// Re-renders the views every time the view-model changes
///
/// The state is cloned before rendering: writing an entry fires its
/// `changed` signal, which writes back into the view-model.
pub fn spawn_render_loop(
    manager:        &GuiManager,
    form_panel:     Rc<FormPanel>,
    birthday_list:  Rc<BirthdayList>,
    status_overlay: Rc<StatusOverlay>,
) {
    let mut receiver = manager.subscribe();

    glib::spawn_future_local(async move {
        loop {
            let state = receiver.borrow_and_update().clone();
            render(&state, &form_panel, &birthday_list, &status_overlay);

            if receiver.changed().await.is_err() {
                debug!("View-model dropped, stopping render loop");
                break;
            }
        }
    });
}

fn render(
    state:          &ViewState,
    form_panel:     &FormPanel,
    birthday_list:  &BirthdayList,
    status_overlay: &StatusOverlay,
) {
    form_panel.sync(&state.form, state.is_busy);
    birthday_list.update_with_records(&state.visible_records(), state.is_busy);
    status_overlay.update(state.status.as_ref());
    debug!("Rendered {} of {} birthdays", birthday_list.count(), state.records.len());
}

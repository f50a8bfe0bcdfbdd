//! View model bindings for Slint UI

mod auth;
mod form;
mod toasts;

use crate::state::AppState;
use crate::MainWindow;
use std::sync::Arc;

pub fn setup_bindings(window: &MainWindow, state: AppState) {
    let state = Arc::new(state);

    auth::setup_auth_bindings(window, state.clone());
    form::setup_form_bindings(window, state.clone());
    toasts::setup_toast_bindings(window, state.clone());

    form::refresh_form(window, &state);
}

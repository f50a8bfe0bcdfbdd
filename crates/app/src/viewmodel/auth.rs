//! Authentication view model

use std::sync::Arc;

use filegate_core::{authenticate, validate_login_input, Error, Field};
use slint::ComponentHandle;
use tracing::{info, warn};

use crate::state::AppState;
use crate::viewmodel::form::refresh_form;
use crate::MainWindow;

pub fn setup_auth_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Login callback
    let state_login = state.clone();
    let window_weak = window.as_weak();
    window.on_login(move |username, password| {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        if w.get_is_authenticating() {
            return;
        }

        let credentials = match validate_login_input(&username, &password) {
            Ok(c) => c,
            Err(errors) => {
                w.set_username_error(errors.get(Field::Username).unwrap_or_default().into());
                w.set_password_error(errors.get(Field::Password).unwrap_or_default().into());
                return;
            }
        };

        w.set_username_error("".into());
        w.set_password_error("".into());
        w.set_auth_error("".into());
        w.set_is_authenticating(true);

        // Simulated verification delay
        let state_done = state_login.clone();
        let window_done = w.as_weak();
        slint::Timer::single_shot(state_login.config.timing.login_delay(), move || {
            let Some(w) = window_done.upgrade() else {
                return;
            };
            w.set_is_authenticating(false);

            match authenticate(&credentials) {
                Ok(user) => {
                    info!(username = %user.username, "Login succeeded");
                    w.set_current_username(user.username.clone().into());
                    state_done.begin_session(user);
                    refresh_form(&w, &state_done);
                    w.set_is_logged_in(true);
                }
                Err(Error::Authentication(message)) => {
                    warn!(username = %credentials.username, "Login rejected");
                    w.set_auth_error(message.into());
                }
                Err(e) => {
                    warn!(error = %e, "Login failed");
                    w.set_auth_error(e.to_string().into());
                }
            }
        });
    });

    // Logout callback
    let state_logout = state.clone();
    let window_weak = window.as_weak();
    window.on_logout(move || {
        if let Some(username) = state_logout.current_username() {
            info!(username = %username, "Logged out");
        }

        state_logout.end_session();

        if let Some(w) = window_weak.upgrade() {
            w.set_auth_error("".into());
            w.set_is_logged_in(false);
            w.set_current_username("".into());
            refresh_form(&w, &state_logout);
        }
    });
}

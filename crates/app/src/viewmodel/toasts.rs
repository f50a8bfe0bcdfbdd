//! Toast notification view model

use std::sync::Arc;
use std::time::{Duration, Instant};

use slint::{ComponentHandle, ModelRc, VecModel};
use uuid::Uuid;

use crate::state::AppState;
use crate::toast::ToastKind;
use crate::{MainWindow, ToastItem};

pub fn setup_toast_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Dismiss on click
    let state_dismiss = state.clone();
    let window_weak = window.as_weak();
    window.on_dismiss_toast(move |id| {
        let Ok(id) = Uuid::parse_str(&id) else {
            return;
        };

        let removed = state_dismiss.toasts.lock().unwrap().dismiss(id);
        if removed {
            if let Some(w) = window_weak.upgrade() {
                refresh_toasts(&w, &state_dismiss);
            }
        }
    });

    // Expire old toasts (250ms interval)
    let window_weak = window.as_weak();
    let state_prune = state.clone();
    let prune_timer = slint::Timer::default();
    prune_timer.start(
        slint::TimerMode::Repeated,
        Duration::from_millis(250),
        move || {
            let changed = state_prune.toasts.lock().unwrap().prune_expired(Instant::now());
            if changed {
                if let Some(w) = window_weak.upgrade() {
                    refresh_toasts(&w, &state_prune);
                }
            }
        },
    );
    // Keep timer alive
    std::mem::forget(prune_timer);
}

/// Queue a toast and show it
pub fn show_toast(
    window: &MainWindow,
    state: &AppState,
    kind: ToastKind,
    title: &str,
    description: &str,
) {
    state.toasts.lock().unwrap().push(kind, title, description);
    refresh_toasts(window, state);
}

fn refresh_toasts(window: &MainWindow, state: &AppState) {
    let items: Vec<ToastItem> = state
        .toasts
        .lock()
        .unwrap()
        .toasts()
        .iter()
        .map(|t| ToastItem {
            id: t.id.to_string().into(),
            title: t.title.clone().into(),
            description: t.description.clone().into(),
            is_error: t.is_error(),
        })
        .collect();

    window.set_toasts(ModelRc::new(VecModel::from(items)));
}

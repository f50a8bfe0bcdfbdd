//! Application state management

use std::sync::{Arc, Mutex};

use filegate_core::{AppConfig, FormSession, LoggedInUser};

use crate::toast::ToastQueue;

/// Main application state. Lives only in memory.
pub struct AppState {
    pub config: AppConfig,
    pub current_user: Arc<Mutex<Option<LoggedInUser>>>,
    pub form: Arc<Mutex<FormSession>>,
    pub toasts: Arc<Mutex<ToastQueue>>,
    /// Bumped on every login and logout so delayed completions started in
    /// an earlier session can tell they are stale
    pub session_epoch: Arc<Mutex<u64>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let toasts = ToastQueue::new(config.timing.toast_duration());

        Self {
            config,
            current_user: Arc::new(Mutex::new(None)),
            form: Arc::new(Mutex::new(FormSession::new())),
            toasts: Arc::new(Mutex::new(toasts)),
            session_epoch: Arc::new(Mutex::new(0)),
        }
    }

    pub fn set_current_user(&self, user: Option<LoggedInUser>) {
        *self.current_user.lock().unwrap() = user;
    }

    pub fn current_username(&self) -> Option<String> {
        self.current_user
            .lock()
            .unwrap()
            .as_ref()
            .map(|u| u.username.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.lock().unwrap().is_some()
    }

    pub fn epoch(&self) -> u64 {
        *self.session_epoch.lock().unwrap()
    }

    /// Start a new session epoch, invalidating pending delayed work
    pub fn bump_epoch(&self) -> u64 {
        let mut epoch = self.session_epoch.lock().unwrap();
        *epoch += 1;
        *epoch
    }

    pub fn is_current_epoch(&self, epoch: u64) -> bool {
        self.epoch() == epoch
    }

    /// Log in: record the user and start from an empty form
    pub fn begin_session(&self, user: LoggedInUser) {
        self.bump_epoch();
        self.set_current_user(Some(user));
        self.form.lock().unwrap().reset();
    }

    /// Log out: forget the user and discard all form state
    pub fn end_session(&self) {
        self.bump_epoch();
        self.set_current_user(None);
        self.form.lock().unwrap().reset();
    }
}

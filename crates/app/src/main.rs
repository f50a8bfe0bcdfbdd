//! Filegate - period and certificate upload form
//!
//! A desktop application: a login gate followed by a form that collects a
//! processing period and three typed files, then simulates processing.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use filegate_core::AppConfig;

mod files;
mod state;
mod toast;
mod viewmodel;

slint::include_modules!();

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Filegate");

    // Load configuration
    let config = match AppConfig::load() {
        Ok((config, Some(path))) => {
            tracing::info!(path = %path.display(), "Loaded configuration");
            config
        }
        Ok((config, None)) => {
            tracing::info!("No configuration file found, using defaults");
            config
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = state::AppState::new(config);

    // Create main window
    let main_window = match MainWindow::new() {
        Ok(w) => w,
        Err(e) => {
            tracing::error!("Failed to create main window: {}", e);
            std::process::exit(1);
        }
    };

    // Set up view model bindings
    viewmodel::setup_bindings(&main_window, app_state);

    // Run the application
    if let Err(e) = main_window.run() {
        tracing::error!("Event loop terminated with error: {}", e);
        std::process::exit(1);
    }
}

//! Main form view model: period pickers, file slots and submission

use std::sync::Arc;

use chrono::Datelike;
use filegate_core::{
    month_from_label, month_label, FileRef, FileSelection, FileSlot, FormSession, Field,
    PeriodPicker, SubmitRejection,
};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use tracing::{debug, info, warn};

use crate::files;
use crate::state::AppState;
use crate::toast::ToastKind;
use crate::viewmodel::toasts::show_toast;
use crate::{FileSlotItem, MainWindow};

/// Which of the two period pickers a UI event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerId {
    Start,
    End,
}

impl PickerId {
    fn parse(id: &str) -> Option<Self> {
        match id {
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            _ => None,
        }
    }
}

fn picker_for(state: &AppState, form: &FormSession, id: PickerId) -> PeriodPicker {
    let current_year = chrono::Local::now().year();
    let picker = PeriodPicker::new(current_year, state.config.picker.year_span);
    match id {
        PickerId::Start => picker,
        PickerId::End => picker.with_min(form.state().start_period),
    }
}

pub fn setup_form_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Month picked
    let state_month = state.clone();
    let window_weak = window.as_weak();
    window.on_period_month_selected(move |picker_id, value| {
        let (Some(id), Some(month)) = (PickerId::parse(&picker_id), month_from_label(&value)) else {
            return;
        };

        {
            let mut form = state_month.form.lock().unwrap();
            let picker = picker_for(&state_month, &form, id);
            let selected = match id {
                PickerId::Start => picker
                    .select_month(form.state().start_period, month)
                    .map(|p| form.set_start_period(p)),
                PickerId::End => picker
                    .select_month(form.state().end_period, month)
                    .map(|p| form.set_end_period(p)),
            };
            if selected.is_none() {
                debug!(picker = ?id, month, "Month selection ignored");
            }
        }

        if let Some(w) = window_weak.upgrade() {
            refresh_form(&w, &state_month);
        }
    });

    // Year picked
    let state_year = state.clone();
    let window_weak = window.as_weak();
    window.on_period_year_selected(move |picker_id, value| {
        let (Some(id), Ok(year)) = (PickerId::parse(&picker_id), value.trim().parse::<i32>()) else {
            return;
        };

        {
            let mut form = state_year.form.lock().unwrap();
            let picker = picker_for(&state_year, &form, id);
            let selected = match id {
                PickerId::Start => picker
                    .select_year(form.state().start_period, year)
                    .map(|p| form.set_start_period(p)),
                PickerId::End => picker
                    .select_year(form.state().end_period, year)
                    .map(|p| form.set_end_period(p)),
            };
            if selected.is_none() {
                debug!(picker = ?id, year, "Year selection ignored");
            }
        }

        if let Some(w) = window_weak.upgrade() {
            refresh_form(&w, &state_year);
        }
    });

    // Browse for a file
    let state_browse = state.clone();
    let window_weak = window.as_weak();
    window.on_browse_file(move |key| {
        let Some(slot) = FileSlot::from_key(&key) else {
            return;
        };

        if state_browse.form.lock().unwrap().is_submitting() {
            return;
        }

        let Some(path) = files::pick_file(slot) else {
            return;
        };

        let Some(w) = window_weak.upgrade() else {
            return;
        };

        let file = match FileRef::from_path(&path) {
            Ok(f) => f,
            Err(e) => {
                warn!(slot = %slot, path = %path.display(), error = %e, "Could not read file");
                show_toast(
                    &w,
                    &state_browse,
                    ToastKind::Error,
                    "Error al leer el archivo",
                    &format!("No se pudo leer {}", path.display()),
                );
                return;
            }
        };

        let outcome = state_browse.form.lock().unwrap().select_file(slot, file.clone());
        match outcome {
            FileSelection::Accepted => {
                info!(slot = %slot, file = %file.name, size = file.size_bytes, "File accepted");
            }
            FileSelection::Rejected(_) => {
                info!(slot = %slot, file = %file.name, "File rejected: wrong extension");
            }
        }

        refresh_form(&w, &state_browse);
    });

    // Remove a file
    let state_remove = state.clone();
    let window_weak = window.as_weak();
    window.on_remove_file(move |key| {
        let Some(slot) = FileSlot::from_key(&key) else {
            return;
        };

        {
            let mut form = state_remove.form.lock().unwrap();
            if form.is_submitting() {
                return;
            }
            form.remove_file(slot);
        }
        debug!(slot = %slot, "File removed");

        if let Some(w) = window_weak.upgrade() {
            refresh_form(&w, &state_remove);
        }
    });

    // Submit
    let state_submit = state.clone();
    let window_weak = window.as_weak();
    window.on_submit(move || {
        let Some(w) = window_weak.upgrade() else {
            return;
        };

        if !state_submit.is_logged_in() {
            return;
        }

        let result = state_submit.form.lock().unwrap().begin_submission();
        let submission = match result {
            Ok(s) => s,
            Err(SubmitRejection::InProgress) => {
                debug!("Submission already in progress");
                return;
            }
            Err(SubmitRejection::Invalid(errors)) => {
                info!(fields = ?errors.fields(), "Submission blocked by validation");
                refresh_form(&w, &state_submit);
                show_toast(
                    &w,
                    &state_submit,
                    ToastKind::Error,
                    "Error de validación",
                    "Por favor, corrige los errores antes de continuar.",
                );
                return;
            }
        };

        info!(
            start = %submission.start_period,
            end = %submission.end_period,
            txt = %submission.txt_file.name,
            cer = %submission.cer_file.name,
            key = %submission.key_file.name,
            "Processing submission"
        );
        refresh_form(&w, &state_submit);

        // Simulated processing delay
        let epoch = state_submit.epoch();
        let state_done = state_submit.clone();
        let window_done = w.as_weak();
        slint::Timer::single_shot(state_submit.config.timing.submit_delay(), move || {
            // Logged out while processing
            if !state_done.is_current_epoch(epoch) {
                debug!("Discarding submission from a previous session");
                return;
            }

            state_done.form.lock().unwrap().finish_submission();
            info!("Submission processed");

            if let Some(w) = window_done.upgrade() {
                refresh_form(&w, &state_done);
                show_toast(
                    &w,
                    &state_done,
                    ToastKind::Success,
                    "Formulario enviado exitosamente",
                    "Los archivos han sido procesados correctamente.",
                );
            }
        });
    });
}

fn month_options(picker: &PeriodPicker, year: Option<i32>) -> Vec<SharedString> {
    picker
        .available_months(year)
        .into_iter()
        .filter_map(month_label)
        .map(SharedString::from)
        .collect()
}

fn year_options(picker: &PeriodPicker) -> Vec<SharedString> {
    picker
        .available_years()
        .into_iter()
        .map(|y| SharedString::from(y.to_string()))
        .collect()
}

/// Everything the window shows for the form, copied out of the session
#[derive(Debug, Clone)]
struct FormView {
    start_month_options: Vec<SharedString>,
    start_year_options: Vec<SharedString>,
    start_month: SharedString,
    start_year: SharedString,
    start_error: SharedString,
    end_month_options: Vec<SharedString>,
    end_year_options: Vec<SharedString>,
    end_month: SharedString,
    end_year: SharedString,
    end_error: SharedString,
    end_hint: SharedString,
    file_slots: Vec<FileSlotItem>,
    is_submitting: bool,
    can_submit: bool,
}

fn form_view(state: &AppState) -> FormView {
    let form = state.form.lock().unwrap();
    let values = form.state();
    let errors = form.errors();

    let start_picker = picker_for(state, &form, PickerId::Start);
    let end_picker = picker_for(state, &form, PickerId::End);
    let start = values.start_period;
    let end = values.end_period;

    let file_slots = FileSlot::ALL
        .iter()
        .map(|slot| {
            let file = values.file(*slot);
            FileSlotItem {
                key: slot.key().into(),
                label: slot.label().into(),
                accepted: slot.accepted().into(),
                file_name: file.map(|f| f.name.clone()).unwrap_or_default().into(),
                file_size: file.map(|f| f.size_label()).unwrap_or_default().into(),
                has_file: file.is_some(),
                error: errors
                    .get(Field::for_slot(*slot))
                    .unwrap_or_default()
                    .into(),
            }
        })
        .collect();

    FormView {
        start_month_options: month_options(&start_picker, start.map(|p| p.year())),
        start_year_options: year_options(&start_picker),
        start_month: start.map(|p| p.month_label()).unwrap_or_default().into(),
        start_year: start.map(|p| p.year().to_string()).unwrap_or_default().into(),
        start_error: errors.get(Field::StartDate).unwrap_or_default().into(),
        end_month_options: month_options(&end_picker, end.map(|p| p.year())),
        end_year_options: year_options(&end_picker),
        end_month: end.map(|p| p.month_label()).unwrap_or_default().into(),
        end_year: end.map(|p| p.year().to_string()).unwrap_or_default().into(),
        end_error: errors.get(Field::EndDate).unwrap_or_default().into(),
        end_hint: end_picker
            .min()
            .map(|min| format!("* La fecha debe ser posterior a {}", min))
            .unwrap_or_default()
            .into(),
        file_slots,
        is_submitting: form.is_submitting(),
        can_submit: form.can_submit(),
    }
}

/// Push the current form state into the window
pub fn refresh_form(window: &MainWindow, state: &AppState) {
    // Lock released before any setter runs
    let view = form_view(state);

    window.set_start_month_options(ModelRc::new(VecModel::from(view.start_month_options)));
    window.set_start_year_options(ModelRc::new(VecModel::from(view.start_year_options)));
    window.set_start_month(view.start_month);
    window.set_start_year(view.start_year);
    window.set_start_error(view.start_error);

    window.set_end_month_options(ModelRc::new(VecModel::from(view.end_month_options)));
    window.set_end_year_options(ModelRc::new(VecModel::from(view.end_year_options)));
    window.set_end_month(view.end_month);
    window.set_end_year(view.end_year);
    window.set_end_error(view.end_error);
    window.set_end_hint(view.end_hint);

    window.set_file_slots(ModelRc::new(VecModel::from(view.file_slots)));

    window.set_is_submitting(view.is_submitting);
    window.set_can_submit(view.can_submit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use filegate_core::{AppConfig, LoggedInUser, Period};

    fn logged_in() -> AppState {
        let state = AppState::new(AppConfig::default());
        state.begin_session(LoggedInUser {
            username: "admin".to_string(),
        });
        state
    }

    #[test]
    fn test_form_view_releases_lock() {
        let state = logged_in();
        let _view = form_view(&state);
        assert!(state.form.try_lock().is_ok());
    }

    #[test]
    fn test_form_view_copies_values_and_errors() {
        let state = logged_in();
        {
            let mut form = state.form.lock().unwrap();
            form.set_start_period(Period::new(6, 2024).unwrap());
            form.select_file(FileSlot::Key, FileRef::new("clave.pem", 1));
        }

        let view = form_view(&state);
        assert_eq!(view.start_month.as_str(), "Junio");
        assert_eq!(view.start_year.as_str(), "2024");
        assert_eq!(view.end_hint.as_str(), "* La fecha debe ser posterior a Junio 2024");
        assert_eq!(view.file_slots.len(), 3);
        assert!(!view.file_slots[2].has_file);
        assert_eq!(
            view.file_slots[2].error.as_str(),
            "Formato de archivo no válido. Se requiere: .key"
        );
        assert!(!view.can_submit);
    }

    #[test]
    fn test_form_view_empty_form() {
        let state = logged_in();
        let view = form_view(&state);
        assert!(view.start_month.is_empty());
        assert!(view.end_hint.is_empty());
        assert_eq!(view.start_month_options.len(), 12);
        assert!(!view.is_submitting);
    }
}

//! Entry point: initialise logging, load the Slint UI and bind the VM bridge

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use slint::ComponentHandle;
use tracing_subscriber::fmt::SubscriberBuilder;

slint::include_modules!();

mod convert;
mod model;
mod utils;
mod vm;

use model::data_core::{AppError, AppState};
use model::formats::{icon_for_path, FileKind, IconSpec};
use vm::bridge::*;

/// VM bridge: owns the application state and wires all UI callbacks.
struct ViewModelBridge {
    app_state: Rc<RefCell<AppState>>,
}

impl ViewModelBridge {
    /// Create the bridge and bind every callback.
    fn new(app_window: &AppWindow, app_state: Rc<RefCell<AppState>>) -> Self {
        let bridge = Self { app_state };
        bridge.setup_callbacks(app_window);
        bridge
    }

    fn setup_callbacks(&self, app_window: &AppWindow) {
        // === browse ===
        {
            let app_state = self.app_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_browse_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_browse(&app_window, &app_state);
                }
            });
        }

        // === convert ===
        {
            let app_state = self.app_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_convert_pressed(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    Self::handle_convert(&app_window, &app_state);
                }
            });
        }

        // === open the original ===
        {
            let app_state = self.app_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_open_selected(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    if let Err(e) = app_state.borrow().open_selected() {
                        Self::report_error(&app_window, "Could not open file", &e);
                    }
                }
            });
        }

        // === open the converted file ===
        {
            let app_state = self.app_state.clone();
            let app_window_weak = app_window.as_weak();
            app_window.on_open_converted(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    if let Err(e) = app_state.borrow().open_converted() {
                        Self::report_error(&app_window, "Could not open file", &e);
                    }
                }
            });
        }

        // === message dialog ===
        {
            let app_window_weak = app_window.as_weak();
            app_window.on_close_message_dialog(move || {
                if let Some(app_window) = app_window_weak.upgrade() {
                    app_window.set_message_dialog_visible(false);
                }
            });
        }
    }

    /// Initial UI state
    fn initialize_ui(&self, app_window: &AppWindow) {
        app_window.set_status_message(STATUS_READY.into());
        app_window.set_selected_name(STATUS_NO_FILE.into());
        app_window.set_convert_label(CONVERT_LABEL.into());
        app_window.set_selected_icon(icon_data(icon_for_path(None)));
        app_window.set_converted_icon(icon_data(icon_for_path(None)));
    }

    /// Show the native file chooser, filtered to the supported formats.
    fn show_file_dialog() -> Option<PathBuf> {
        use rfd::FileDialog;

        let picked = FileDialog::new()
            .add_filter("All supported", &["pdf", "docx", "xlsx", "csv"])
            .add_filter("PDF documents", &["pdf"])
            .add_filter("Word documents", &["docx"])
            .add_filter("Excel workbooks", &["xlsx"])
            .add_filter("CSV files", &["csv"])
            .set_title("Select a file to convert")
            .pick_file();

        match picked {
            Some(path) => {
                tracing::info!("user picked {}", path.display());
                Some(path)
            }
            None => {
                tracing::info!("file selection cancelled");
                None
            }
        }
    }

    fn handle_browse(app_window: &AppWindow, app_state: &Rc<RefCell<AppState>>) {
        let Some(path) = Self::show_file_dialog() else {
            app_window.set_status_message(STATUS_NO_FILE.into());
            app_window.set_status_tint(info_tint());
            return;
        };

        app_window.set_selected_name(file_name_of(&path).into());
        app_window.set_selected_icon(icon_data(icon_for_path(Some(&path))));
        app_window.set_selected_active(true);

        // the previous conversion result is stale with a new selection
        app_window.set_converted_name("".into());
        app_window.set_converted_icon(icon_data(icon_for_path(None)));
        app_window.set_converted_active(false);
        app_window.set_performance_info("".into());

        match FileKind::from_path(&path) {
            Some(kind) => {
                let message =
                    format!("{} → .{}", kind.display_name(), kind.target().extension());
                app_window.set_status_message(message.into());
            }
            None => app_window.set_status_message(STATUS_READY.into()),
        }
        app_window.set_status_tint(info_tint());

        app_state.borrow_mut().select(path);
    }

    /// Runs synchronously in the UI thread; a long conversion blocks the
    /// window until it finishes.
    fn handle_convert(app_window: &AppWindow, app_state: &Rc<RefCell<AppState>>) {
        app_window.set_status_message(STATUS_CONVERTING.into());
        app_window.set_status_tint(info_tint());

        let start_time = Instant::now();
        let result = app_state.borrow_mut().convert();
        match result {
            Ok(output) => {
                let elapsed_ms = start_time.elapsed().as_millis();
                let file_name = file_name_of(&output);

                app_window.set_converted_name(file_name.clone().into());
                app_window.set_converted_icon(icon_data(icon_for_path(Some(&output))));
                app_window.set_converted_active(true);
                app_window.set_status_message(format!("Converted: {file_name}").into());
                app_window.set_status_tint(success_tint());
                app_window.set_performance_info(format!("conversion took {elapsed_ms} ms").into());

                // brief button feedback, then back to normal
                app_window.set_convert_label(CONVERT_LABEL_DONE.into());
                let app_window_weak = app_window.as_weak();
                slint::Timer::single_shot(Duration::from_secs(2), move || {
                    if let Some(app_window) = app_window_weak.upgrade() {
                        app_window.set_convert_label(CONVERT_LABEL.into());
                    }
                });

                tracing::info!("conversion finished: {} ({elapsed_ms} ms)", output.display());
            }
            Err(e) => Self::report_error(app_window, "Conversion failed", &e),
        }
    }

    /// One boundary for every failed action: log it, colour the status line,
    /// raise the modal dialog. The app keeps running.
    fn report_error(app_window: &AppWindow, title: &str, error: &AppError) {
        tracing::error!("{title}: {error}");
        app_window.set_status_message(format!("{STATUS_ERROR_PREFIX}{error}").into());
        app_window.set_status_tint(error_tint());
        app_window.set_message_dialog_title(title.into());
        app_window.set_message_dialog_text(error.to_string().into());
        app_window.set_message_dialog_visible(true);
    }
}

fn file_name_of(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn icon_data(spec: IconSpec) -> IconData {
    IconData {
        label: spec.label.into(),
        tint: slint::Color::from_rgb_u8(spec.rgb.0, spec.rgb.1, spec.rgb.2),
    }
}

fn info_tint() -> slint::Color {
    slint::Color::from_rgb_u8(0x15, 0x65, 0xc0)
}

fn success_tint() -> slint::Color {
    slint::Color::from_rgb_u8(0x2e, 0x7d, 0x32)
}

fn error_tint() -> slint::Color {
    slint::Color::from_rgb_u8(0xc6, 0x28, 0x28)
}

fn main() -> anyhow::Result<()> {
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let app = AppWindow::new()?;
    let state = Rc::new(RefCell::new(AppState::default()));

    let bridge = ViewModelBridge::new(&app, state);
    bridge.initialize_ui(&app);

    tracing::info!("application started");
    app.run()?;

    Ok(())
}

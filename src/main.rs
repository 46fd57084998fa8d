// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Mutex;
use std::thread;
use tauri::{AppHandle, Emitter, Manager, State};
use tauri_plugin_dialog::DialogExt;
use tiny_compare_lib::payloads::{
    ComparisonFinishedPayload, ComparisonPayload, ProgressPayload,
};
use tiny_compare_lib::{compare_selection, CompareConfig, PaneStyle, RequestTracker, Selection, Side};

#[derive(Default)]
struct AppState {
    selection: Mutex<Selection>,
    requests: RequestTracker,
}

impl AppState {
    fn snapshot(&self) -> Result<Selection, String> {
        self.selection
            .lock()
            .map(|selection| selection.clone())
            .map_err(|err| err.to_string())
    }
}

fn spawn_comparison(app: AppHandle, selection: Selection, config: CompareConfig) {
    if !selection.is_complete() {
        return;
    }
    let ticket = app.state::<AppState>().requests.begin();
    let _ = app.emit(
        "progress",
        ProgressPayload {
            percentage: 0.0,
            text: "Comparing files...".to_string(),
        },
    );

    thread::spawn(move || {
        let Some(comparison) = compare_selection(&selection, &config) else {
            return;
        };
        if !app.state::<AppState>().requests.is_current(ticket) {
            log::debug!("Dropping result of superseded request {}", ticket.id());
            return;
        }

        for step in &comparison.steps {
            if let Err(e) = app.emit("step_completed", step.clone()) {
                log::error!("Failed to emit step_completed event: {}", e);
            }
        }
        if let Err(e) = app.emit(
            "comparison_ready",
            ComparisonPayload::new(ticket.id(), &selection, &comparison),
        ) {
            log::error!("Failed to emit comparison_ready event: {}", e);
        }
        let _ = app.emit(
            "progress",
            ProgressPayload {
                percentage: 100.0,
                text: "Comparison Finished".to_string(),
            },
        );
        if let Err(e) = app.emit(
            "comparison_finished",
            ComparisonFinishedPayload {
                request: ticket.id(),
            },
        ) {
            log::error!("Failed to emit comparison_finished event: {}", e);
        }
    });
}

/// Shows the file picker for one side. Returns the new label, or `None` when
/// the dialog was cancelled.
#[tauri::command]
async fn open_file(
    app: AppHandle,
    state: State<'_, AppState>,
    side: Side,
    config: CompareConfig,
) -> Result<Option<String>, String> {
    let picked = app
        .dialog()
        .file()
        .add_filter("All Files", &["*"])
        .add_filter("Text Files", &["txt"])
        .blocking_pick_file();
    let Some(file_path) = picked else {
        return Ok(None);
    };
    let path = file_path.into_path().map_err(|err| err.to_string())?;
    log::info!("File {} set to {}", side.file_number(), path.display());

    let selection = {
        let mut current = state.selection.lock().map_err(|err| err.to_string())?;
        *current = current.with_file(side, path);
        current.clone()
    };
    let label = selection.label(side);
    spawn_comparison(app, selection, config);
    Ok(Some(label))
}

#[tauri::command]
fn start_comparison(
    app: AppHandle,
    state: State<'_, AppState>,
    config: CompareConfig,
) -> Result<(), String> {
    let selection = state.snapshot()?;
    spawn_comparison(app, selection, config);
    Ok(())
}

#[tauri::command]
fn pane_style() -> PaneStyle {
    PaneStyle::default()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(AppState::default())
        .invoke_handler(tauri::generate_handler![open_file, start_comparison, pane_style])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

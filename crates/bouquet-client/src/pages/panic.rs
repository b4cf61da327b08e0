//! Crash reporting: the panic hook and the page that shows its report.
//!
//! A panic leaves the app unusable, so the hook stores a [`PanicReport`] in
//! `localStorage` and reloads into `/panic`, where a fresh instance reads it.

use std::fmt;
use std::panic::PanicHookInfo;

use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

const REPORT_KEY: &str = "bouquet:panic-report";

/// What the panic hook leaves behind for the panic page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanicReport {
    pub message: String,
    /// `file:line:column` of the panic, when known.
    pub location: Option<String>,
}

impl PanicReport {
    fn from_hook(info: &PanicHookInfo<'_>) -> Self {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
        Self { message, location }
    }
}

impl fmt::Display for PanicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(location) = &self.location {
            write!(f, "\n\nat {location}")?;
        }
        Ok(())
    }
}

/// Saves `report`, replacing any earlier one.
fn store_report(report: &PanicReport) {
    if let Err(err) = LocalStorage::set(REPORT_KEY, report) {
        tracing::warn!(%err, "Failed to store panic report");
    }
}

/// Reads the stored report, if any.
fn load_report() -> Option<PanicReport> {
    LocalStorage::get(REPORT_KEY).ok()
}

fn discard_report() {
    LocalStorage::delete(REPORT_KEY);
}

/// Installs a panic hook that logs to the browser console, stores a
/// [`PanicReport`] and reloads into the panic page.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        store_report(&PanicReport::from_hook(info));

        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let panic_path = Route::Panic.to_path();
        // A panic while rendering the panic page must not reload forever.
        if location.pathname().ok().as_deref() != Some(panic_path.as_str()) {
            let _ = location.set_pathname(&panic_path);
        }
    }));
}

#[function_component(PanicPage)]
pub fn panic_page() -> Html {
    let report = use_state(load_report);
    let navigator = use_navigator();

    let on_restart = Callback::from(move |_: MouseEvent| {
        discard_report();
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <main class="page panic-page">
            <h1>{ "The bouquet wilted" }</h1>
            <p>{ "Something went wrong while arranging your flowers." }</p>
            if let Some(report) = &*report {
                <pre class="panic-details">{ report.to_string() }</pre>
            }
            <button class="close-btn" onclick={on_restart}>
                { "Start a new bouquet" }
            </button>
        </main>
    }
}

//! Devtools Hook
//!
//! Exposes the logger's recent lines as `window.__todoLogs()` so they can be
//! read from the browser console after the fact.

use rolling_logger::LogRing;
use wasm_bindgen::closure::Closure;

pub const LOGS_HOOK: &str = "__todoLogs";

pub fn expose_logs(ring: LogRing) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hook = Closure::<dyn Fn() -> String>::new(move || ring.dump());
    if let Err(e) = js_sys::Reflect::set(&window, &LOGS_HOOK.into(), hook.as_ref()) {
        tracing::warn!("[APP] {} hook not installed: {:?}", LOGS_HOOK, e);
    }
    // Lives for the whole page
    hook.forget();
}

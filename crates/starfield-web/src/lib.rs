pub mod host;
#[cfg(feature = "decor")]
pub mod decor;

pub use host::BrowserHost;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use starfield::{Starfield, StarfieldConfig};

use host::BrowserSurface;

// The page has one UI thread, so one starfield per thread is one per page.
thread_local! {
    static STARFIELD: RefCell<Option<Starfield<BrowserHost>>> = RefCell::new(None);
}

fn with_starfield<R>(f: impl FnOnce(&mut Starfield<BrowserHost>) -> R) -> Option<R> {
    STARFIELD.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub(crate) fn setup_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Start the starfield with `count` stars. Safe to call more than once:
/// only the first call on a page does anything.
#[wasm_bindgen]
pub fn stars_init(count: i32) {
    setup_logging();
    let config = StarfieldConfig {
        count: count.max(0) as u32,
        ..StarfieldConfig::default()
    };
    start(config);
}

/// Start the starfield from a JSON `StarfieldConfig`.
#[wasm_bindgen]
pub fn stars_init_with_config(json: &str) {
    setup_logging();
    match StarfieldConfig::from_json(json) {
        Ok(config) => start(config),
        Err(err) => log::error!("starfield: invalid config: {}", err),
    }
}

// ---- Accessors ----

#[wasm_bindgen]
pub fn stars_count() -> u32 {
    with_starfield(|f| f.star_count() as u32).unwrap_or(0)
}

#[wasm_bindgen]
pub fn stars_ticks() -> f64 {
    with_starfield(|f| f.ticks() as f64).unwrap_or(0.0)
}

fn start(config: StarfieldConfig) {
    STARFIELD.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_some() {
            log::debug!("starfield: already running");
            return;
        }

        let Some(window) = web_sys::window() else {
            log::warn!("starfield: no window, not starting");
            return;
        };
        let Some(document) = window.document() else {
            log::warn!("starfield: no document, not starting");
            return;
        };
        if BrowserSurface::container_exists(&document, &config.container_id) {
            log::debug!("starfield: #{} already on the page", config.container_id);
            return;
        }

        match BrowserHost::new(window, &config, tick) {
            Ok(host) => {
                log::debug!(
                    "starfield: viewport from {:?}, cadence {:?}",
                    host.viewport_source(),
                    host.cadence(),
                );
                let mut field = Starfield::new(host, &config);
                field.init(config.count);
                *slot = Some(field);
            }
            Err(err) => log::warn!("starfield: browser host unavailable: {:?}", err),
        }
    });
}

/// Scheduled entry point. Each firing runs one tick, which requests the next.
fn tick() {
    with_starfield(|f| f.tick());
}

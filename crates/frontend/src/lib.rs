pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;

use contracts::shared::config::{load_config, LoadedConfig, CONFIG_STORAGE_KEY};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Optional TOML override saved under `mdm_config` in localStorage.
fn stored_config_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

#[wasm_bindgen]
pub fn hydrate() {
    let override_toml = stored_config_override();
    let loaded = load_config(override_toml.as_deref());
    let config = loaded
        .as_ref()
        .map(|l| l.config.clone())
        .unwrap_or_default();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.level());
    console_error_panic_hook::set_once();

    match loaded {
        Ok(LoadedConfig {
            rejected_override: Some(e),
            ..
        }) => log::warn!("ignoring configuration override, using defaults: {:#}", e),
        Ok(LoadedConfig { overridden: true, .. }) => log::info!("loaded configuration override"),
        Ok(_) => log::info!("using default embedded configuration"),
        Err(e) => log::error!("built-in config rejected, using defaults: {:#}", e),
    }
    log::debug!("config: {:?}", config);

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}

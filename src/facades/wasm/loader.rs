use crate::adapters::wasm::{BrowserDocument, BrowserServiceWorkerContainer};
use crate::config::PwaConfig;
use crate::global::window;
use crate::loader::Loader;
use wasm_bindgen::prelude::*;

/// Attaches the loader to the page `load` event.
///
/// `config` may be `undefined` or an object with optional `manifestPath` and
/// `serviceWorkerPath` keys.
#[wasm_bindgen]
pub fn install_pwa(config: JsValue) -> Result<(), JsValue> {
    let config = PwaConfig::from_js(config)?;
    let window = window()?;

    let on_load = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let loader = Loader::new(
            config.clone(),
            BrowserDocument::new(),
            BrowserServiceWorkerContainer::new(),
        );
        wasm_bindgen_futures::spawn_local(async move {
            loader.on_load().await;
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();

    Ok(())
}

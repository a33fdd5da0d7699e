//! Tournaments - tournament management front end
//!
//! Teams, players, categories, tournaments, matches and statistics pages,
//! with a cookie-session login against the backend API, built with Leptos
//! and WebAssembly.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    use crate::core::{ClientSession, HttpSessionApi};
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    // Start loading the server session before hydration; the header
    // updates once the answer arrives.
    let session = ClientSession::new(HttpSessionApi::same_origin());
    let startup = session.clone();
    wasm_bindgen_futures::spawn_local(async move {
        startup.init().await;
    });

    leptos::mount::hydrate_body(move || view! { <App session=session/> });
}

//! WASM entry point
//!
//! Trunk compiles this binary and mounts the App component on the body.

use leptos::prelude::*;
use wordcloud_ui::App;

fn main() {
    console_error_panic_hook::set_once();
    wordcloud_ui::telemetry::init();

    mount_to_body(|| {
        view! {
            <App />
        }
    });
}

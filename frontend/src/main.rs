use leptos::prelude::*;

fn main() {
    let debug_enabled = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("debug_enabled").ok().flatten())
        .is_some_and(|v| v == "true");

    let level = if debug_enabled {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    mount_to_body(frontend::App);
}

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

/// Browser entry point: initializes logging, resolves runtime config, then
/// mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("starting store admin frontend");

    leptos::spawn_local(async {
        config::init().await;
        log::info!("runtime config initialized");
        router::mount_app();
    });
}

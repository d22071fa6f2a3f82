mod web_app;

pub use web_app::{ReaderApp, ReaderShell};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ReaderApp /> })
}

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {err}").into());
    }
    landing::app::mount();
}

#[cfg(not(feature = "csr"))]
fn main() {}

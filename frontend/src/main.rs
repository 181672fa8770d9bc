#[cfg(not(feature = "csr"))]
pub fn main() {
    // nothing to run natively, build with `trunk serve --features csr`
}

#[cfg(feature = "csr")]
pub fn main() {
    use tutor_frontend::{app::*, utils::init_logging};

    console_error_panic_hook::set_once();
    init_logging();

    leptos::mount_to_body(App);
}

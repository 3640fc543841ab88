#[cfg(not(feature = "csr"))]
pub fn main() {
    // no client-side main function without `csr`
    // see lib.rs for the hydration entry point instead
}

#[cfg(feature = "csr")]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use leptos::*;
    use reviewwall::app::*;

    reviewwall::utils::panic_hook::init();

    mount_to_body(|| view! { <App /> });
}

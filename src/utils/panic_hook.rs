use std::panic;
use leptos::logging::log;

/// Chains the console panic hook with a note for reactive-owner panics, which
/// here almost always mean a deferred submission outlived its widget.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A reactive value was used after its widget was removed.");
            log!("[PANIC] Check deferred callbacks (review submission) for missing owner guards.");
        }
    }));
}

/// Call once before mounting.
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up");
}

use leptos::Owner;

/// Runs `f` under a reactive owner captured earlier, typically from a timer
/// callback that outlives the event that scheduled it.
/// Returns None (and logs) when there was no owner or it has been disposed.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match owner {
        Some(owner) => match leptos::try_with_owner(owner, f) {
            Ok(value) => Some(value),
            Err(_) => {
                leptos::logging::log!("[OWNER] Owner disposed before {} ran", log_context);
                None
            }
        },
        None => {
            leptos::logging::log!("[OWNER] No Leptos owner captured for {}", log_context);
            None
        }
    }
}

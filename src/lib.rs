//! ReviewWall: a client-side review widget.
//!
//! A form collects a name, a star rating and a comment; posted reviews are
//! kept newest first in browser storage and shown with their average rating.

pub mod app;
pub mod board;
pub mod clock;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod palette;
pub mod scheduler;
pub mod services;
pub mod store;
pub mod utils;

pub use board::ReviewBoard;
pub use config::{RatingInput, Variant, WidgetConfig};
pub use error::{StoreError, SubmitRejection, ValidationError};
pub use models::review::{Rating, Review};
pub use store::{LocalStorageStore, MemoryStore, ReviewStore, SchemaVersion};

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    use leptos::*;

    utils::panic_hook::init();
    mount_to_body(|| view! { <App /> });
}

/// Main application entry point for ReviewWall.
/// Mounts a single review widget backed by the browser's localStorage.
use leptos::*;
use leptos_meta::*;
use crate::components::review_widget::ReviewWidget;
use crate::config::{Variant, WidgetConfig};

#[component]
pub fn App(#[prop(optional)] variant: Variant) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Reviews" />
        <div class="min-h-screen bg-gradient-to-tr from-indigo-200 via-slate-100 to-indigo-200 flex items-center justify-center p-4 md:p-8">
            <ReviewWidget config=WidgetConfig::for_variant(variant) />
        </div>
    }
}

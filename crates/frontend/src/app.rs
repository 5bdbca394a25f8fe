use crate::layout::global_context::StorefrontContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the session view state to the whole app via context. All
    // mutation goes through StorefrontContext's named operations.
    provide_context(StorefrontContext::new());

    view! {
        <AppRoutes />
    }
}

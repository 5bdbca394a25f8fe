use crate::app_shell::StorefrontShell;
use leptos::prelude::*;

// Single-page storefront: no router, the shell is the only destination.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <StorefrontShell />
    }
}

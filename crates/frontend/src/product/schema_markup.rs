use contracts::catalog::Product;
use contracts::projection::ProductSchema;
use contracts::session::Mode;
use leptos::prelude::*;

/// Emits the machine-readable product description (schema.org JSON-LD)
/// while a detail view is active. Re-serialized when the mode flips so the
/// advertised price always matches the one on screen.
///
/// Takes a read-only mode signal rather than the whole controller: this
/// component can observe the mode but not command anything.
#[component]
pub fn SchemaMarkup(product: &'static Product, mode: Signal<Mode>) -> impl IntoView {
    view! {
        <script
            type="application/ld+json"
            inner_html=move || ProductSchema::for_product(product, mode.get()).to_json()
        ></script>
    }
}

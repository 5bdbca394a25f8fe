use contracts::catalog::Product;
use leptos::prelude::*;

#[component]
pub fn DetailsTab(product: &'static Product) -> impl IntoView {
    view! {
        <div class="detail-tab detail-tab--details">
            <p>
                {format!(
                    "Harvested from our partner farms in {}. Processed within 48 hours of picking to ensure maximum freshness and nutritional retention.",
                    product.specs.origin,
                )}
            </p>
        </div>
    }
}

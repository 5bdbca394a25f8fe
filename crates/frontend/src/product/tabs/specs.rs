use contracts::catalog::Product;
use leptos::prelude::*;

#[component]
pub fn SpecsTab(product: &'static Product) -> impl IntoView {
    view! {
        <div class="detail-tab detail-tab--specs">
            <div class="spec-cell">
                <span class="spec-cell__label">"Moisture"</span>
                <span class="spec-cell__value">{product.specs.moisture.clone()}</span>
            </div>
            <div class="spec-cell">
                <span class="spec-cell__label">"Count/lb"</span>
                <span class="spec-cell__value">{product.specs.count_label()}</span>
            </div>
            <div class="spec-cell">
                <span class="spec-cell__label">"Origin"</span>
                <span class="spec-cell__value">{product.specs.origin.clone()}</span>
            </div>
        </div>
    }
}

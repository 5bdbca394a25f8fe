use crate::layout::global_context::StorefrontContext;
use crate::shared::format::format_kg;
use contracts::catalog::{self, Product};
use contracts::projection::{display_price, unit_label};
use contracts::session::Mode;
use leptos::prelude::*;

#[component]
pub fn ProductGrid() -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext not provided");
    let wholesale = move || ctx.mode.get() == Mode::Wholesale;

    view! {
        <section class="grid-section">
            <div class="grid-section__intro">
                <div>
                    <h2 class="grid-section__title">
                        {move || {
                            if wholesale() { "Wholesale Catalog" } else { "Curated Selections" }
                        }}
                    </h2>
                    <p class="grid-section__subtitle">
                        {move || {
                            if wholesale() {
                                "Consistent grading, container-load capacity."
                            } else {
                                "Small batches, artisanal roasting."
                            }
                        }}
                    </p>
                </div>
                <button class="grid-section__view-all">"View All"</button>
            </div>

            <div class="grid-section__cards">
                {catalog::catalog()
                    .iter()
                    .map(|product| view! { <ProductCard product=product /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: &'static Product) -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext not provided");
    let wholesale = move || ctx.mode.get() == Mode::Wholesale;

    let quick_add = move |ev: leptos::ev::MouseEvent| {
        // Quick-add must not open the detail modal underneath it.
        ev.stop_propagation();
        ctx.add_to_cart(product);
    };

    view! {
        <div class="card" on:click=move |_| ctx.select_product(Some(product))>
            <div class="card__media">
                <img src=product.image.clone() alt=product.name.clone() class="card__image" />
                <Show when=move || !wholesale()>
                    <button class="card__quick-add" on:click=quick_add>
                        {"🛍"}
                    </button>
                </Show>
                <span class="card__grade-badge">{product.grade.clone()}</span>
            </div>

            <div class="card__info">
                <h3 class="card__name">{product.name.clone()}</h3>
                <p class="card__description">{product.description.clone()}</p>

                <div class="card__pricing">
                    <div>
                        <span class="card__unit">
                            {move || unit_label(ctx.mode.get())}
                        </span>
                        <span class="card__price">
                            {move || format!("${:.2}", display_price(product, ctx.mode.get()))}
                        </span>
                    </div>
                    <Show when=wholesale>
                        <button class="card__specs-button">"Specs PDF"</button>
                    </Show>
                </div>

                <Show when=wholesale>
                    <div class="card__stock-row">
                        <span>{format!("Stock: {}kg", format_kg(product.inventory))}</span>
                        <span class="card__stock-status">"Available"</span>
                    </div>
                </Show>
            </div>
        </div>
    }
}

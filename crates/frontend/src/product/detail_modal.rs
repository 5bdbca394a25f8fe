use crate::layout::global_context::StorefrontContext;
use crate::product::schema_markup::SchemaMarkup;
use crate::product::tabs::{DetailsTab, ReviewsTab, SpecsTab, TAB_KEYS};
use crate::product::viewer::Viewer360;
use crate::shared::modal_frame::ModalFrame;
use contracts::catalog::Product;
use contracts::projection::{cta_label, display_price, unit_label};
use contracts::session::Mode;
use leptos::prelude::*;

#[component]
pub fn ProductDetailModal(product: &'static Product) -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext not provided");
    let wholesale = move || ctx.mode.get() == Mode::Wholesale;

    let active_tab = RwSignal::new("details");

    let close = Callback::new(move |()| ctx.select_product(None));

    let add_and_close = move |_| {
        ctx.add_to_cart(product);
        ctx.select_product(None);
    };

    view! {
        <ModalFrame
            on_close=close
            overlay_class="detail-modal"
            surface_class="detail-modal__panel"
        >
            <SchemaMarkup product=product mode=ctx.mode.into() />

            <button class="detail-modal__close" on:click=move |_| ctx.select_product(None)>
                {"✕"}
            </button>

            <div class="detail-modal__visuals">
                <Viewer360 image=product.image.clone() />
                <div class="detail-modal__visual-actions">
                    <button class="button button--pill">"Share"</button>
                    <Show when=wholesale>
                        <button class="button button--pill">"Spec Sheet"</button>
                    </Show>
                </div>
            </div>

            <div class="detail-modal__info">
                <div class="detail-modal__badges">
                    <span class="detail-modal__badge detail-modal__badge--certs">
                        {product.certifications.join(" • ")}
                    </span>
                    <span class="detail-modal__badge detail-modal__badge--grade">
                        {format!("Grade: {}", product.grade)}
                    </span>
                </div>

                <h2 class="detail-modal__name">{product.name.clone()}</h2>
                <p class="detail-modal__description">{product.description.clone()}</p>

                <div class="detail-modal__price-block">
                    <div>
                        <p class="detail-modal__price-caption">"Price"</p>
                        <p class="detail-modal__price">
                            {move || format!("${:.2}", display_price(product, ctx.mode.get()))}
                        </p>
                    </div>
                    <span class="detail-modal__unit">
                        {move || unit_label(ctx.mode.get())}
                    </span>
                </div>

                <div class="detail-modal__tab-strip">
                    {TAB_KEYS
                        .iter()
                        .map(|(key, label)| {
                            view! {
                                <button
                                    class="detail-modal__tab"
                                    class=("detail-modal__tab--active", move || {
                                        active_tab.get() == *key
                                    })
                                    on:click=move |_| active_tab.set(*key)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="detail-modal__tab-body">
                    {move || match active_tab.get() {
                        "specs" => view! { <SpecsTab product=product /> }.into_any(),
                        "reviews" => view! { <ReviewsTab /> }.into_any(),
                        _ => view! { <DetailsTab product=product /> }.into_any(),
                    }}
                </div>

                <button class="detail-modal__cta" on:click=add_and_close>
                    {move || cta_label(ctx.mode.get())}
                </button>
            </div>
        </ModalFrame>
    }
}

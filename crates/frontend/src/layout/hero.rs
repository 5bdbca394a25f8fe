use crate::layout::global_context::StorefrontContext;
use contracts::session::Mode;
use leptos::prelude::*;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1549410123-5e92be974052?q=80&w=2500&auto=format&fit=crop";

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext not provided");
    let wholesale = move || ctx.mode.get() == Mode::Wholesale;

    view! {
        <div class="hero">
            <div class="hero__backdrop">
                <img src=HERO_IMAGE alt="Cashew Farm" class="hero__image" />
                <div class="hero__gradient"></div>
            </div>

            <div class="hero__content">
                <Show
                    when=wholesale
                    fallback=|| {
                        view! {
                            <div class="hero__badge hero__badge--retail">
                                "Award Winning Taste 2024"
                            </div>
                        }
                    }
                >
                    <div class="hero__badge hero__badge--wholesale">
                        "Global Supply Chain Partner"
                    </div>
                </Show>

                <h1 class="hero__headline">
                    {move || if wholesale() { "Source the " } else { "Taste the " }}
                    <span class="hero__headline-accent">"Extraordinary."</span>
                </h1>

                <p class="hero__copy">
                    {move || {
                        if wholesale() {
                            "Direct-from-farm procurement. Full traceability blockchain. Competitive bulk pricing for Enterprise & Wholesale."
                        } else {
                            "Handpicked W180 King Cashews from the pristine orchards of Goa. Roasted in small batches for the ultimate crunch."
                        }
                    }}
                </p>

                <div class="hero__ctas">
                    <button class="button button--primary">
                        {move || if wholesale() { "View Catalog" } else { "Shop Collections" }}
                    </button>
                    <button class="button button--ghost">
                        {move || if wholesale() { "Request Quote" } else { "Our Farm Story" }}
                    </button>
                </div>
            </div>

            <div class="hero__scroll-hint">"Scroll"</div>
        </div>
    }
}

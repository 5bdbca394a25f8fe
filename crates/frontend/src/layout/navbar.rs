use crate::layout::global_context::StorefrontContext;
use contracts::session::Mode;
use leptos::prelude::*;

const NAV_LINKS: [&str; 4] = ["Shop", "Our Farms", "Sustainability", "Contact"];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext not provided");

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <div class="navbar__brand">
                    <div class="navbar__brand-mark">"Y"</div>
                    <div class="navbar__brand-text">
                        <span class="navbar__brand-name">"Yuvaraj"</span>
                        <span class="navbar__brand-tagline">"Premium Nuts India"</span>
                    </div>
                </div>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|item| view! { <a href="#" class="navbar__link">{*item}</a> })
                        .collect_view()}
                </div>

                <div class="navbar__actions">
                    <button
                        class="navbar__mode-pill"
                        class=("navbar__mode-pill--wholesale", move || {
                            ctx.mode.get() == Mode::Wholesale
                        })
                        on:click=move |_| ctx.toggle_mode()
                    >
                        {move || ctx.mode.get().switch_label()}
                    </button>

                    <button
                        class="navbar__icon-button"
                        aria-label="Search"
                        on:click=move |_| ctx.open_search()
                    >
                        {"⌕"}
                    </button>

                    <div class="navbar__cart">
                        <span class="navbar__icon-button" aria-label="Cart">{"🛍"}</span>
                        {move || {
                            let count = ctx.cart_count();
                            (count > 0)
                                .then(|| view! { <span class="navbar__cart-badge">{count}</span> })
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

use crate::catalog::ProductGrid;
use crate::layout::global_context::StorefrontContext;
use crate::layout::{Footer, Hero, Navbar};
use crate::product::ProductDetailModal;
use crate::search::SearchOverlay;
use crate::sections::{BulkPortal, CertificationsStrip, CulinarySection, FarmStory};
use contracts::session::Mode;
use leptos::prelude::*;

/// Page composition. Sections switch with the mode; the search overlay and
/// the detail modal are mounted independently of each other, so both may be
/// visible at once.
#[component]
pub fn StorefrontShell() -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext not provided");
    let wholesale = move || ctx.mode.get() == Mode::Wholesale;

    view! {
        <div class="storefront">
            <Navbar />

            <main>
                <Hero />
                <Show
                    when=wholesale
                    fallback=|| {
                        view! {
                            <FarmStory />
                            <ProductGrid />
                            <CulinarySection />
                        }
                    }
                >
                    <BulkPortal />
                    <ProductGrid />
                    <CertificationsStrip />
                </Show>
            </main>

            <Footer />

            {move || ctx.search_open.get().then(|| view! { <SearchOverlay /> })}
            {move || {
                ctx.selected_product()
                    .map(|product| view! { <ProductDetailModal product=product /> })
            }}
        </div>
    }
}

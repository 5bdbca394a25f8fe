use leptos::prelude::*;

/// Retail-only inspiration section.
#[component]
pub fn CulinarySection() -> impl IntoView {
    view! {
        <section class="culinary">
            <div class="culinary__inner">
                <h2 class="culinary__title">"Culinary Excellence"</h2>
                <p class="culinary__copy">
                    "Discover AI-generated recipes tailored to your taste profile."
                </p>
                <button class="button button--outline">"Explore Recipes"</button>
            </div>
        </section>
    }
}

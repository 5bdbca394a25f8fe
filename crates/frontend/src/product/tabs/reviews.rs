use leptos::prelude::*;

/// No backing data; always the same placeholder.
#[component]
pub fn ReviewsTab() -> impl IntoView {
    view! {
        <div class="detail-tab detail-tab--reviews">
            "No reviews yet. Be the first to taste the excellence!"
        </div>
    }
}

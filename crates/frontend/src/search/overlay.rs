use crate::layout::global_context::StorefrontContext;
use crate::shared::modal_frame::ModalFrame;
use contracts::catalog;
use contracts::search::{classify, SearchView, TRENDING};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Duration of the simulated voice capture. There is no real speech
/// recognition behind this; the timer stands in for it.
const VOICE_CAPTURE_MS: u32 = 1500;
const VOICE_CAPTURE_RESULT: &str = "W180 King";

/// Full-screen search overlay.
///
/// The component is mounted only while the overlay is open, so `query` and
/// `listening` reset on every reopen; the query deliberately does not
/// survive in session state.
#[component]
pub fn SearchOverlay() -> impl IntoView {
    let ctx = use_context::<StorefrontContext>().expect("StorefrontContext not provided");

    let query = RwSignal::new(String::new());
    let listening = RwSignal::new(false);

    // A capture that completes after the overlay unmounts must be
    // discarded, never applied to the dropped component's state.
    let cancelled = StoredValue::new(false);
    on_cleanup(move || cancelled.set_value(true));

    let start_listening = move |_| {
        if listening.get_untracked() {
            return;
        }
        listening.set(true);
        spawn_local(async move {
            TimeoutFuture::new(VOICE_CAPTURE_MS).await;
            if cancelled.get_value() {
                return;
            }
            query.set(VOICE_CAPTURE_RESULT.to_string());
            listening.set(false);
        });
    };

    view! {
        <ModalFrame
            on_close=Callback::new(move |()| ctx.close_search())
            close_on_overlay=false
            overlay_class="search-overlay"
            surface_class="search-overlay__panel"
        >
            <div class="search-overlay__bar">
                <span class="search-overlay__glyph">{"⌕"}</span>
                <input
                    class="search-overlay__input"
                    placeholder=move || {
                        if listening.get() {
                            "Listening..."
                        } else {
                            "Search for grades, products, or recipes..."
                        }
                    }
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button
                    class="search-overlay__mic"
                    class=("search-overlay__mic--listening", move || listening.get())
                    on:click=start_listening
                >
                    {"🎤"}
                </button>
                <button
                    class="search-overlay__close"
                    on:click=move |_| ctx.close_search()
                >
                    {"✕"}
                </button>
            </div>

            <div class="search-overlay__results">
                {move || {
                    let q = query.get();
                    match classify(catalog::catalog(), &q) {
                        SearchView::Suggestions => {
                            view! {
                                <div class="search-overlay__suggestions">
                                    <p class="search-overlay__suggestions-title">
                                        "Trending Searches"
                                    </p>
                                    <div class="search-overlay__chips">
                                        {TRENDING
                                            .iter()
                                            .map(|term| {
                                                view! {
                                                    <span
                                                        class="search-overlay__chip"
                                                        on:click=move |_| query.set(term.to_string())
                                                    >
                                                        {*term}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        SearchView::NoMatches => {
                            view! {
                                <div class="search-overlay__empty">"No products found."</div>
                            }
                                .into_any()
                        }
                        SearchView::Matches(hits) => {
                            hits.into_iter()
                                .map(|product| {
                                    view! {
                                        <div
                                            class="search-overlay__row"
                                            on:click=move |_| {
                                                ctx.select_product(Some(product));
                                                ctx.close_search();
                                            }
                                        >
                                            <img
                                                src=product.image.clone()
                                                alt=product.name.clone()
                                                class="search-overlay__thumb"
                                            />
                                            <div class="search-overlay__row-text">
                                                <h4 class="search-overlay__row-name">
                                                    {product.name.clone()}
                                                </h4>
                                                <p class="search-overlay__row-meta">
                                                    {format!(
                                                        "{} • Stock: {}kg",
                                                        product.grade,
                                                        product.inventory,
                                                    )}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }
                }}
            </div>
        </ModalFrame>
    }
}

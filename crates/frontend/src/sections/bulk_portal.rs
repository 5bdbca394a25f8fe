use contracts::pricing::{discount_for, QTY_DEFAULT, QTY_MAX, QTY_MIN, QTY_STEP};
use leptos::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("Inventory", "Real-time"),
    ("Shipping", "Global"),
    ("Support", "24/7 Priority"),
    ("Payment", "Net-60"),
];

/// Wholesale-only bulk ordering section: quantity slider plus the volume
/// discount readout. The slider clamps input to its bounds; the discount
/// function itself is total.
#[component]
pub fn BulkPortal() -> impl IntoView {
    let quantity = RwSignal::new(QTY_DEFAULT);

    view! {
        <section class="bulk-portal">
            <div class="bulk-portal__inner">
                <div class="bulk-portal__pitch">
                    <div class="bulk-portal__kicker">"B2B PROCUREMENT ENGINE"</div>
                    <h2 class="bulk-portal__title">"Smart Bulk Ordering"</h2>
                    <p class="bulk-portal__copy">
                        "Our AI-driven pricing engine adjusts in real-time based on global market indices and your order volume."
                    </p>

                    <div class="bulk-portal__panel">
                        <label class="bulk-portal__label">"Order Quantity (KG)"</label>
                        <input
                            type="range"
                            min=QTY_MIN
                            max=QTY_MAX
                            step=QTY_STEP
                            prop:value=move || quantity.get().to_string()
                            on:input=move |ev| {
                                if let Ok(parsed) = event_target_value(&ev).parse::<u32>() {
                                    quantity.set(parsed);
                                }
                            }
                            class="bulk-portal__slider"
                        />

                        <div class="bulk-portal__readout">
                            <div>
                                <div class="bulk-portal__quantity">
                                    {move || format!("{} kg", quantity.get())}
                                </div>
                                <div class="bulk-portal__caption">"Selected Volume"</div>
                            </div>
                            <div class="bulk-portal__discount">
                                <div class="bulk-portal__caption">"Estimated Discount"</div>
                                <div class="bulk-portal__discount-value">
                                    {move || format!("{}% OFF", discount_for(quantity.get()))}
                                </div>
                            </div>
                        </div>

                        <button class="button button--primary bulk-portal__quote">
                            "Generate Instant Quote"
                        </button>
                    </div>
                </div>

                <div class="bulk-portal__stats">
                    {STATS
                        .iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="bulk-portal__stat">
                                    <div class="bulk-portal__stat-value">{*value}</div>
                                    <div class="bulk-portal__stat-label">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

const STORY_IMAGE: &str =
    "https://images.unsplash.com/photo-1585827552668-d0728b355e3d?q=80&w=800&auto=format&fit=crop";

const STEPS: [(&str, &str); 4] = [
    ("Harvest", "Hand-picked at peak ripeness in Goa."),
    ("Sun Dry", "Natural 48-hour sun drying process."),
    ("Steam", "Gentle steaming to loosen the shell."),
    ("Grade", "AI-assisted sorting for perfect sizing."),
];

/// Retail-only provenance section.
#[component]
pub fn FarmStory() -> impl IntoView {
    view! {
        <section class="farm-story">
            <div class="farm-story__inner">
                <div class="farm-story__text">
                    <span class="farm-story__kicker">"Blockchain Verified"</span>
                    <h2 class="farm-story__title">"Transparency from Soil to Soul."</h2>
                    <p class="farm-story__copy">
                        "Every pack comes with a QR code. Scan to see the exact farm, harvest date, and quality report of your batch. We believe trust tastes better."
                    </p>

                    <div class="farm-story__steps">
                        {STEPS
                            .iter()
                            .map(|(title, desc)| {
                                view! {
                                    <div class="farm-story__step">
                                        <h4 class="farm-story__step-title">{*title}</h4>
                                        <p class="farm-story__step-desc">{*desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="farm-story__media">
                    <img src=STORY_IMAGE alt="Cashew orchard" class="farm-story__image" />
                    <div class="farm-story__harvest-card">
                        <span class="farm-story__harvest-label">"Live Harvest Data"</span>
                        <div class="farm-story__harvest-rows">
                            <div><span>"Batch:"</span> <span>"#YUV-24-X9"</span></div>
                            <div><span>"Origin:"</span> <span>"North Goa, IN"</span></div>
                            <div><span>"Farmer:"</span> <span>"R. Naik"</span></div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

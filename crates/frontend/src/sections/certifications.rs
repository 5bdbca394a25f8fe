use leptos::prelude::*;

const CERTIFICATIONS: [&str; 5] = ["ISO 22000", "HACCP Certified", "FSSAI", "APEDA", "Halal"];

/// Wholesale-only strip of compliance marks.
#[component]
pub fn CertificationsStrip() -> impl IntoView {
    view! {
        <section class="cert-strip">
            <div class="cert-strip__inner">
                {CERTIFICATIONS
                    .iter()
                    .map(|name| view! { <div class="cert-strip__mark">{*name}</div> })
                    .collect_view()}
            </div>
        </section>
    }
}

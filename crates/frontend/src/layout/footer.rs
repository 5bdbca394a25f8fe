use leptos::prelude::*;

const PRODUCT_LINKS: [&str; 4] = [
    "W180 King Cashews",
    "Roasted & Salted",
    "Organic Raw",
    "Gift Hampers",
];
const COMPANY_LINKS: [&str; 4] = ["Our Story", "B2B Portal", "Sustainability", "Contact Us"];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__about">
                    <div class="footer__brand">"Yuvaraj Nuts"</div>
                    <p class="footer__blurb">
                        "Pioneering the future of cashew commerce. Combining heritage farming with blockchain transparency and AI-driven logistics."
                    </p>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Products"</h4>
                    <ul class="footer__list">
                        {PRODUCT_LINKS
                            .iter()
                            .map(|item| view! { <li class="footer__item">{*item}</li> })
                            .collect_view()}
                    </ul>
                </div>

                <div class="footer__column">
                    <h4 class="footer__heading">"Company"</h4>
                    <ul class="footer__list">
                        {COMPANY_LINKS
                            .iter()
                            .map(|item| view! { <li class="footer__item">{*item}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>

            <div class="footer__legal">
                <p>"© 2024 Yuvaraj Nuts India. All rights reserved."</p>
                <div class="footer__legal-links">
                    <span>"Privacy Policy"</span>
                    <span>"Terms of Service"</span>
                    <span>"Sitemap"</span>
                </div>
            </div>
        </footer>
    }
}

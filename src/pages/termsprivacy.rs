use yew::prelude::*;

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Terms of Service"}</h1>
            <p class="legal-updated">{"Last updated: June 2025"}</p>

            <h2>{"Estimates"}</h2>
            <p>{"Online quotes are estimates based on the information you provide. A binding price requires a completed inventory or an in-home survey."}</p>

            <h2>{"Scheduling"}</h2>
            <p>{"Move dates are reserved with a deposit and may be rescheduled up to 72 hours before the move window at no charge."}</p>

            <h2>{"Liability"}</h2>
            <p>{"Basic released-value protection is included at no cost. Full-value protection is available at booking and must be selected before loading begins."}</p>

            <h2>{"Contact"}</h2>
            <p>{"Questions about these terms? Call us or write to support@swifthaulmoving.com."}</p>

            <style>{LEGAL_STYLE}</style>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <h1>{"Privacy Policy"}</h1>
            <p class="legal-updated">{"Last updated: June 2025"}</p>

            <h2>{"What we collect"}</h2>
            <p>{"ZIP codes you enter while building a quote, and contact details you choose to share. We do not sell this information."}</p>

            <h2>{"How it's used"}</h2>
            <p>{"To prepare your estimate, schedule your move, and follow up on your request. ZIP lookups are sent to our location service solely to resolve city names."}</p>

            <h2>{"Retention"}</h2>
            <p>{"Quote requests are kept for 12 months, then deleted. You can ask for earlier deletion at any time."}</p>

            <style>{LEGAL_STYLE}</style>
        </div>
    }
}

const LEGAL_STYLE: &str = r#"
.legal-page {
    min-height: 100vh;
    background: #1a1a1a;
    color: #ddd;
    padding: 7rem 2rem 4rem;
    max-width: 720px;
    margin: 0 auto;
    line-height: 1.7;
}
.legal-page h1 {
    color: #fff;
}
.legal-page h2 {
    color: #7EB2FF;
    margin-top: 2rem;
}
.legal-updated {
    color: #777;
    font-size: 0.85rem;
}
"#;

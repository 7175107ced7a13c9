use yew::prelude::*;
use log::info;

use crate::components::countdown::CountdownBanner;
use crate::components::floating_cta::FloatingCta;
use crate::components::mini_calendar::MiniCalendar;
use crate::components::quote_start::{QuoteFields, QuoteStart};
use crate::components::rotation::{RotatingStrip, StripItem};
use crate::components::testimonials::Testimonials;
use crate::components::trust_badges::TrustBadges;
use crate::state::engagement::EngagementTracker;

fn live_ops_items() -> Vec<StripItem> {
    vec![
        StripItem { icon: "🚚", label: "Crew 4 en route to Jersey City", status: Some("live") },
        StripItem { icon: "📦", label: "2,140 boxes packed this week", status: None },
        StripItem { icon: "🏠", label: "3-bedroom move wrapped up in Hoboken", status: Some("done") },
        StripItem { icon: "🗓️", label: "11 moves scheduled for tomorrow", status: None },
    ]
}

fn coverage_items() -> Vec<StripItem> {
    vec![
        StripItem { icon: "🗽", label: "NYC metro — same-week availability", status: None },
        StripItem { icon: "🌉", label: "Bay Area — long-distance partner lanes", status: None },
        StripItem { icon: "🤠", label: "Texas triangle — Austin, Dallas, Houston", status: None },
        StripItem { icon: "🌴", label: "Florida — seasonal routes open", status: Some("new") },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    let tracker = use_state(EngagementTracker::default);

    let on_input_changed = {
        let tracker = tracker.clone();
        Callback::from(move |_| {
            let mut next = (*tracker).clone();
            next.report_input_changed();
            tracker.set(next);
        })
    };

    let on_fields_changed = {
        let tracker = tracker.clone();
        Callback::from(move |fields: QuoteFields| {
            let mut next = (*tracker).clone();
            next.observe(
                &fields.from_zip,
                &fields.to_zip,
                &fields.from_city,
                &fields.to_city,
            );
            tracker.set(next);
        })
    };

    let on_offer_ended = Callback::from(move |_| {
        info!("Launch offer expired");
    });

    html! {
        <div class="home">
            <section class="hero">
                <h1>{"Moving Day, Minus the Stress"}</h1>
                <p class="hero-subhead">
                    {"Licensed crews, flat-rate quotes, and a move coordinator from first box to last. Tell us where you're headed."}
                </p>
                <QuoteStart
                    on_input_changed={on_input_changed}
                    on_fields_changed={on_fields_changed}
                    validated={tracker.is_validated()}
                />
                {
                    if tracker.is_validated() {
                        html! {
                            <p class="hero-nudge ready">{"Route confirmed. Build your quote below."}</p>
                        }
                    } else if tracker.is_engaged() {
                        html! {
                            <p class="hero-nudge">{"Keep going — your quote is two fields away."}</p>
                        }
                    } else {
                        html! {}
                    }
                }
            </section>

            <CountdownBanner
                seconds={1800}
                headline="Book in the next 30 minutes for 10% off packing"
                on_complete={on_offer_ended}
            />

            <TrustBadges />

            <section class="strips">
                <RotatingStrip items={live_ops_items()} />
                <RotatingStrip items={coverage_items()} />
            </section>

            <section class="pick-a-date">
                <div class="pick-a-date-copy">
                    <h2>{"Pick Your Moving Date"}</h2>
                    <p>{"Weekends fill up two to three weeks out. Mid-month weekdays are the sweet spot for rates."}</p>
                </div>
                <MiniCalendar />
            </section>

            <Testimonials />

            <FloatingCta engagement={tracker.state()} />

            <style>
                {r#"
                .home {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #ffffff;
                    overflow-x: hidden;
                }
                .hero {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    padding: 7rem 2rem 3rem;
                    gap: 1.5rem;
                }
                .hero h1 {
                    font-size: 3rem;
                    margin: 0;
                }
                .hero-subhead {
                    max-width: 540px;
                    color: #bbb;
                    line-height: 1.6;
                }
                .hero-nudge {
                    color: #7EB2FF;
                }
                .hero-nudge.ready {
                    color: #4CAF50;
                }
                .strips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    padding: 2rem;
                }
                .pick-a-date {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    align-items: center;
                    gap: 3rem;
                    padding: 3rem 2rem;
                }
                .pick-a-date-copy {
                    max-width: 360px;
                }
                .pick-a-date-copy p {
                    color: #999;
                    line-height: 1.6;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

use yew::prelude::*;

struct Badge {
    icon: &'static str,
    title: &'static str,
    caption: &'static str,
}

const BADGES: [Badge; 4] = [
    Badge {
        icon: "🛡️",
        title: "Licensed & Insured",
        caption: "USDOT registered, full-value protection available",
    },
    Badge {
        icon: "⭐",
        title: "A+ BBB Rating",
        caption: "Accredited since 2011",
    },
    Badge {
        icon: "📦",
        title: "48,000+ Moves",
        caption: "Local and long-distance, coast to coast",
    },
    Badge {
        icon: "🏠",
        title: "14 Years in Business",
        caption: "Family owned and operated",
    },
];

#[function_component(TrustBadges)]
pub fn trust_badges() -> Html {
    html! {
        <section class="trust-badges">
            {
                BADGES.iter().map(|badge| html! {
                    <div class="badge">
                        <span class="badge-icon">{badge.icon}</span>
                        <div class="badge-text">
                            <span class="badge-title">{badge.title}</span>
                            <span class="badge-caption">{badge.caption}</span>
                        </div>
                    </div>
                }).collect::<Html>()
            }
            <style>
                {r#"
                .trust-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                    padding: 2rem;
                }
                .badge {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .badge-icon {
                    font-size: 1.8rem;
                }
                .badge-text {
                    display: flex;
                    flex-direction: column;
                }
                .badge-title {
                    color: #fff;
                    font-weight: 600;
                }
                .badge-caption {
                    color: #999;
                    font-size: 0.85rem;
                }
                @media (max-width: 768px) {
                    .trust-badges {
                        flex-direction: column;
                        align-items: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}

use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::state::engagement::EngagementState;

#[derive(Properties, PartialEq)]
pub struct FloatingCtaProps {
    pub engagement: EngagementState,
}

/// Fixed call button. Hidden until the visitor scrolls past the hero or
/// starts filling in the quote form; copy firms up once a location resolves.
#[function_component(FloatingCta)]
pub fn floating_cta(props: &FloatingCtaProps) -> Html {
    let past_hero = use_state(|| false);

    {
        let past_hero = past_hero.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    past_hero.set(scroll_top > 600);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let visible = *past_hero || props.engagement != EngagementState::Idle;
    let label = if props.engagement == EngagementState::Validated {
        "Lock in your date — call now"
    } else {
        "Talk to a mover"
    };

    html! {
        <a
            href="tel:+18005550139"
            class={classes!("floating-cta", visible.then(|| "visible"))}
        >
            <span class="cta-phone-icon">{"📞"}</span>
            <span>{label}</span>
            <style>
                {r#"
                .floating-cta {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.9rem 1.4rem;
                    background: #1E90FF;
                    color: #fff;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
                    opacity: 0;
                    pointer-events: none;
                    transform: translateY(1rem);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                    z-index: 100;
                }
                .floating-cta.visible {
                    opacity: 1;
                    pointer-events: auto;
                    transform: translateY(0);
                }
                "#}
            </style>
        </a>
    }
}

use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::{Interval, Timeout};

use crate::components::rotation::{RotationCycle, TRANSITION_MS};

const CAROUSEL_INTERVAL_MS: u32 = 6_000;

struct Testimonial {
    name: &'static str,
    route: &'static str,
    quote: &'static str,
    stars: u32,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Maria G.",
        route: "Hoboken, NJ → Austin, TX",
        quote: "The crew wrapped every piece of furniture and still finished ahead of schedule. Best moving experience we've had.",
        stars: 5,
    },
    Testimonial {
        name: "Derek W.",
        route: "Brooklyn, NY → Jersey City, NJ",
        quote: "Quoted on Tuesday, moved on Saturday. Nothing broken, no surprise fees.",
        stars: 5,
    },
    Testimonial {
        name: "Priya S.",
        route: "Philadelphia, PA → Boston, MA",
        quote: "They handled a piano and a fourth-floor walkup without blinking. Worth every penny.",
        stars: 5,
    },
    Testimonial {
        name: "Tom & Ellie R.",
        route: "Stamford, CT → Raleigh, NC",
        quote: "Long-distance move with two kids and a dog. The team made the chaos feel organized.",
        stars: 4,
    },
];

/// Quote carousel. Same cursor machinery as the strips, slower interval,
/// clickable dots. The cycle lives in a mut ref shared by the timers and
/// the dots; state only ever receives absolute snapshots of it.
#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let cycle_ref = use_mut_ref(|| RotationCycle::new(TESTIMONIALS.len()));
    let cycle = use_state(|| *cycle_ref.borrow());

    {
        let cycle_ref = cycle_ref.clone();
        let cycle = cycle.clone();
        use_effect_with_deps(
            move |_| {
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let pending_tick = pending.clone();

                let interval = Interval::new(CAROUSEL_INTERVAL_MS, move || {
                    cycle_ref.borrow_mut().begin_transition();
                    cycle.set(*cycle_ref.borrow());
                    let cycle_ref = cycle_ref.clone();
                    let cycle = cycle.clone();
                    let timeout = Timeout::new(TRANSITION_MS, move || {
                        cycle_ref.borrow_mut().complete_transition();
                        cycle.set(*cycle_ref.borrow());
                    });
                    *pending_tick.borrow_mut() = Some(timeout);
                });

                move || {
                    drop(interval);
                    drop(pending.borrow_mut().take());
                }
            },
            (),
        );
    }

    let current = &TESTIMONIALS[cycle.cursor()];
    let card_class = if cycle.is_transitioning() {
        "testimonial-card transitioning"
    } else {
        "testimonial-card"
    };
    let stars: String = "★".repeat(current.stars as usize);

    html! {
        <section class="testimonials">
            <h2>{"What Our Customers Say"}</h2>
            <div class={card_class}>
                <div class="testimonial-stars">{stars}</div>
                <p class="testimonial-quote">{format!("\u{201c}{}\u{201d}", current.quote)}</p>
                <div class="testimonial-name">{current.name}</div>
                <div class="testimonial-route">{current.route}</div>
            </div>
            <div class="testimonial-dots">
                {
                    TESTIMONIALS.iter().enumerate().map(|(i, _)| {
                        let class = if i == cycle.cursor() { "dot active" } else { "dot" };
                        let onclick = {
                            let cycle_ref = cycle_ref.clone();
                            let cycle = cycle.clone();
                            Callback::from(move |_| {
                                cycle_ref.borrow_mut().jump_to(i);
                                cycle.set(*cycle_ref.borrow());
                            })
                        };
                        html! { <button key={i} {class} {onclick}></button> }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .testimonials {
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .testimonials h2 {
                    color: #fff;
                    margin-bottom: 2rem;
                }
                .testimonial-card {
                    max-width: 560px;
                    margin: 0 auto;
                    padding: 2rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 16px;
                    opacity: 1;
                    transition: opacity 0.3s ease-in-out;
                }
                .testimonial-card.transitioning {
                    opacity: 0;
                }
                .testimonial-stars {
                    color: #FFD700;
                    font-size: 1.2rem;
                    margin-bottom: 1rem;
                }
                .testimonial-quote {
                    color: #ddd;
                    font-style: italic;
                    line-height: 1.6;
                }
                .testimonial-name {
                    color: #fff;
                    font-weight: 600;
                    margin-top: 1rem;
                }
                .testimonial-route {
                    color: #7EB2FF;
                    font-size: 0.85rem;
                }
                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }
                .dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.25);
                    cursor: pointer;
                    padding: 0;
                }
                .dot.active {
                    background: #1E90FF;
                }
                "#}
            </style>
        </section>
    }
}

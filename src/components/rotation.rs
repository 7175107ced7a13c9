use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::{Interval, Timeout};

/// Milliseconds between strip advances.
pub const STRIP_INTERVAL_MS: u32 = 4_000;
/// Cross-fade window after a tick fires, before the cursor moves.
pub const TRANSITION_MS: u32 = 300;

/// Cursor over a fixed-length item list, wrapping modulo the length, plus
/// the cross-fade flag. A tick is staged: `begin_transition` raises the
/// flag, `complete_transition` moves the cursor and clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCycle {
    cursor: usize,
    len: usize,
    transitioning: bool,
}

impl RotationCycle {
    pub fn new(len: usize) -> Self {
        Self {
            cursor: 0,
            len,
            transitioning: false,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Tick fired: start the cross-fade. The cursor does not move yet.
    pub fn begin_transition(&mut self) {
        self.transitioning = true;
    }

    /// Cross-fade window over: advance and show the next item.
    pub fn complete_transition(&mut self) {
        self.advance();
        self.transitioning = false;
    }

    /// Advance one position, wrapping. A list of 0 or 1 items stays put.
    pub fn advance(&mut self) {
        if self.len > 1 {
            self.cursor = (self.cursor + 1) % self.len;
        }
    }

    /// Jump directly to a position (indicator dots). Out-of-range is ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.cursor = index;
        }
    }
}

/// One entry of a rotating strip: icon glyph, label, optional status tag.
#[derive(Clone, PartialEq)]
pub struct StripItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub status: Option<&'static str>,
}

#[derive(Properties, PartialEq)]
pub struct RotatingStripProps {
    pub items: Vec<StripItem>,
    #[prop_or(STRIP_INTERVAL_MS)]
    pub interval_ms: u32,
}

/// Shows one item at a time, auto-advancing with a short cross-fade.
/// Every strip on the site is an instance of this component.
///
/// The cycle itself lives in a mut ref owned across renders; the timer
/// callbacks mutate it there and push absolute snapshots into state, so a
/// long-lived closure never reads back through a stale handle.
#[function_component(RotatingStrip)]
pub fn rotating_strip(props: &RotatingStripProps) -> Html {
    let cycle_ref = use_mut_ref(|| RotationCycle::new(props.items.len()));
    let cycle = use_state(|| *cycle_ref.borrow());

    {
        let cycle_ref = cycle_ref.clone();
        let cycle = cycle.clone();
        use_effect_with_deps(
            move |&(len, interval_ms)| {
                *cycle_ref.borrow_mut() = RotationCycle::new(len);
                cycle.set(*cycle_ref.borrow());

                // A pending cross-fade timeout must die with the interval,
                // so the tick can't land on an unmounted component.
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let pending_tick = pending.clone();

                let interval = (len > 0).then(|| {
                    Interval::new(interval_ms, move || {
                        cycle_ref.borrow_mut().begin_transition();
                        cycle.set(*cycle_ref.borrow());
                        let cycle_ref = cycle_ref.clone();
                        let cycle = cycle.clone();
                        let timeout = Timeout::new(TRANSITION_MS, move || {
                            cycle_ref.borrow_mut().complete_transition();
                            cycle.set(*cycle_ref.borrow());
                        });
                        *pending_tick.borrow_mut() = Some(timeout);
                    })
                });

                move || {
                    drop(interval);
                    drop(pending.borrow_mut().take());
                }
            },
            (props.items.len(), props.interval_ms),
        );
    }

    if props.items.is_empty() {
        return html! {};
    }

    // The cycle state resets one render after an item-list change.
    let cursor = cycle.cursor().min(props.items.len() - 1);
    let current = &props.items[cursor];
    let item_class = if cycle.is_transitioning() {
        "strip-item transitioning"
    } else {
        "strip-item"
    };

    html! {
        <div class="rotating-strip">
            <div class={item_class}>
                <span class="strip-icon">{current.icon}</span>
                <span class="strip-label">{current.label}</span>
                {
                    if let Some(status) = current.status {
                        html! { <span class="strip-status">{status}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="strip-dots">
                {
                    props.items.iter().enumerate().map(|(i, _)| {
                        let class = if i == cursor { "strip-dot active" } else { "strip-dot" };
                        html! { <span key={i} {class}></span> }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .rotating-strip {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem 1.5rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                }
                .strip-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    opacity: 1;
                    transition: opacity 0.3s ease-in-out;
                }
                .strip-item.transitioning {
                    opacity: 0;
                }
                .strip-icon {
                    font-size: 1.4rem;
                }
                .strip-label {
                    color: #fff;
                    font-size: 1rem;
                }
                .strip-status {
                    font-size: 0.8rem;
                    color: #7EB2FF;
                    border: 1px solid rgba(126, 178, 255, 0.4);
                    border-radius: 999px;
                    padding: 0.1rem 0.6rem;
                }
                .strip-dots {
                    display: flex;
                    gap: 0.4rem;
                }
                .strip-dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.25);
                }
                .strip-dot.active {
                    background: #1E90FF;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_modulo_length() {
        let mut cycle = RotationCycle::new(3);
        for tick in 1usize..=10 {
            cycle.advance();
            assert_eq!(cycle.cursor(), tick % 3);
        }
    }

    #[test]
    fn staged_ticks_keep_advancing_past_the_first() {
        let mut cycle = RotationCycle::new(4);
        for tick in 1usize..=9 {
            cycle.begin_transition();
            cycle.complete_transition();
            assert_eq!(cycle.cursor(), tick % 4);
        }
    }

    #[test]
    fn flag_is_up_only_between_begin_and_complete() {
        let mut cycle = RotationCycle::new(3);
        assert!(!cycle.is_transitioning());
        cycle.begin_transition();
        assert!(cycle.is_transitioning());
        assert_eq!(cycle.cursor(), 0, "cursor moved during the hand-off");
        cycle.complete_transition();
        assert!(!cycle.is_transitioning());
        assert_eq!(cycle.cursor(), 1);
    }

    #[test]
    fn single_item_list_stays_put() {
        let mut cycle = RotationCycle::new(1);
        cycle.begin_transition();
        cycle.complete_transition();
        cycle.advance();
        assert_eq!(cycle.cursor(), 0);
        assert!(!cycle.is_transitioning());
    }

    #[test]
    fn empty_list_never_divides() {
        let mut cycle = RotationCycle::new(0);
        cycle.advance();
        assert_eq!(cycle.cursor(), 0);
    }

    #[test]
    fn jump_within_range_moves_cursor() {
        let mut cycle = RotationCycle::new(4);
        cycle.jump_to(2);
        assert_eq!(cycle.cursor(), 2);
        cycle.advance();
        assert_eq!(cycle.cursor(), 3);
        cycle.advance();
        assert_eq!(cycle.cursor(), 0);
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut cycle = RotationCycle::new(2);
        cycle.jump_to(5);
        assert_eq!(cycle.cursor(), 0);
    }
}

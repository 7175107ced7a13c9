use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Interval;
use log::info;

/// One-shot decrementing counter. The component drives it once per second;
/// `tick` reports the single moment it reaches zero so the completion
/// callback can never fire twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    completed: bool,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            total: seconds,
            remaining: seconds,
            completed: seconds == 0,
        }
    }

    /// Returns true exactly once, on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.completed = true;
            return true;
        }
        false
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Elapsed fraction in [0, 1] for the fill bar.
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            f64::from(self.total - self.remaining) / f64::from(self.total)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CountdownBannerProps {
    pub seconds: u32,
    pub headline: &'static str,
    #[prop_or_default]
    pub on_complete: Callback<()>,
}

/// Limited-offer banner with a fill bar. Swaps to the ended state when the
/// counter runs out and stops its own interval.
#[function_component(CountdownBanner)]
pub fn countdown_banner(props: &CountdownBannerProps) -> Html {
    let countdown = use_state(|| Countdown::new(props.seconds));

    {
        let countdown = countdown.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |&seconds| {
                countdown.set(Countdown::new(seconds));
                let counter = Rc::new(RefCell::new(Countdown::new(seconds)));

                // Handle lives in a cell so the tick can stop the interval
                // itself once the counter is done.
                let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let handle_tick = handle.clone();

                if seconds > 0 {
                    let interval = Interval::new(1_000, move || {
                        let mut counter = counter.borrow_mut();
                        let finished = counter.tick();
                        countdown.set(*counter);
                        if finished {
                            info!("Countdown reached zero");
                            on_complete.emit(());
                        }
                        if !counter.is_active() {
                            drop(handle_tick.borrow_mut().take());
                        }
                    });
                    *handle.borrow_mut() = Some(interval);
                }

                move || {
                    drop(handle.borrow_mut().take());
                }
            },
            props.seconds,
        );
    }

    let minutes = countdown.remaining() / 60;
    let seconds = countdown.remaining() % 60;
    let fill_width = format!("width: {:.1}%;", countdown.progress() * 100.0);

    html! {
        <div class="countdown-banner">
            {
                if countdown.is_active() {
                    html! {
                        <>
                            <span class="countdown-headline">{props.headline}</span>
                            <span class="countdown-clock">{format!("{}:{:02}", minutes, seconds)}</span>
                            <div class="countdown-track">
                                <div class="countdown-fill" style={fill_width}></div>
                            </div>
                        </>
                    }
                } else {
                    html! {
                        <span class="countdown-headline">{"This offer has ended — call for current rates."}</span>
                    }
                }
            }
            <style>
                {r#"
                .countdown-banner {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 0.75rem 1.5rem;
                    background: linear-gradient(90deg, #1E90FF, #4169E1);
                    color: #fff;
                    border-radius: 8px;
                }
                .countdown-headline {
                    font-weight: 600;
                }
                .countdown-clock {
                    font-variant-numeric: tabular-nums;
                    font-size: 1.2rem;
                }
                .countdown-track {
                    flex: 1;
                    height: 6px;
                    background: rgba(255, 255, 255, 0.25);
                    border-radius: 3px;
                    overflow: hidden;
                }
                .countdown-fill {
                    height: 100%;
                    background: #fff;
                    transition: width 1s linear;
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
    fn three_seconds_completes_on_third_tick() {
        let mut countdown = Countdown::new(3);
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.is_active());
    }

    #[test]
    fn completion_fires_only_once() {
        let mut countdown = Countdown::new(2);
        let mut completions = 0;
        for _ in 0..10 {
            if countdown.tick() {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn count_never_goes_negative() {
        let mut countdown = Countdown::new(1);
        countdown.tick();
        for _ in 0..5 {
            countdown.tick();
            assert_eq!(countdown.remaining(), 0);
        }
    }

    #[test]
    fn zero_seconds_starts_completed() {
        let mut countdown = Countdown::new(0);
        assert!(!countdown.is_active());
        assert!(!countdown.tick());
        assert!((countdown.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_is_elapsed_fraction() {
        let mut countdown = Countdown::new(4);
        assert!((countdown.progress() - 0.0).abs() < f64::EPSILON);
        countdown.tick();
        assert!((countdown.progress() - 0.25).abs() < f64::EPSILON);
        countdown.tick();
        countdown.tick();
        assert!((countdown.progress() - 0.75).abs() < f64::EPSILON);
    }
}

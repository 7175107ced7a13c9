use yew::prelude::*;
use chrono::{Datelike, Local, NaiveDate};

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Month grid as leading blanks (for weekday alignment) followed by day
/// numbers. Empty for an invalid year/month pair.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return Vec::new(),
    };
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);

    let mut cells = vec![None; leading];
    cells.extend((1..=days).map(Some));
    cells
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next_month.and_then(|d| d.pred_opt()) {
        Some(last) => last.day(),
        None => 0,
    }
}

/// Current-month calendar with today highlighted, shown next to the
/// "pick your moving date" copy.
#[function_component(MiniCalendar)]
pub fn mini_calendar() -> Html {
    let today = Local::now().date_naive();
    let cells = month_grid(today.year(), today.month());
    let month_name = today.format("%B %Y").to_string();

    html! {
        <div class="mini-calendar">
            <div class="calendar-month">{month_name}</div>
            <div class="calendar-grid">
                {
                    WEEKDAYS.iter().map(|day| html! {
                        <span class="calendar-weekday">{*day}</span>
                    }).collect::<Html>()
                }
                {
                    cells.iter().enumerate().map(|(i, cell)| {
                        match cell {
                            Some(day) => {
                                let class = if *day == today.day() {
                                    "calendar-day today"
                                } else {
                                    "calendar-day"
                                };
                                html! { <span key={i} {class}>{*day}</span> }
                            }
                            None => html! { <span key={i} class="calendar-blank"></span> },
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                .mini-calendar {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 12px;
                    padding: 1rem;
                    width: fit-content;
                }
                .calendar-month {
                    color: #fff;
                    font-weight: 600;
                    text-align: center;
                    margin-bottom: 0.75rem;
                }
                .calendar-grid {
                    display: grid;
                    grid-template-columns: repeat(7, 2rem);
                    gap: 0.25rem;
                    text-align: center;
                }
                .calendar-weekday {
                    color: #7EB2FF;
                    font-size: 0.75rem;
                }
                .calendar-day {
                    color: #ddd;
                    font-size: 0.85rem;
                    line-height: 2rem;
                    border-radius: 50%;
                }
                .calendar-day.today {
                    background: #1E90FF;
                    color: #fff;
                    font-weight: 600;
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
    fn february_2025_starts_saturday_with_28_days() {
        let cells = month_grid(2025, 2);
        assert_eq!(cells.iter().filter(|c| c.is_none()).count(), 6);
        assert_eq!(cells.iter().filter(|c| c.is_some()).count(), 28);
        assert_eq!(cells.last(), Some(&Some(28)));
    }

    #[test]
    fn leap_february_has_29_days() {
        let cells = month_grid(2024, 2);
        assert_eq!(cells.iter().filter(|c| c.is_some()).count(), 29);
    }

    #[test]
    fn december_rolls_into_next_year() {
        let cells = month_grid(2025, 12);
        assert_eq!(cells.iter().filter(|c| c.is_some()).count(), 31);
        // December 1st 2025 is a Monday.
        assert_eq!(cells.iter().filter(|c| c.is_none()).count(), 1);
    }

    #[test]
    fn invalid_month_yields_empty_grid() {
        assert!(month_grid(2025, 13).is_empty());
        assert!(month_grid(2025, 0).is_empty());
    }

    #[test]
    fn days_count_upward_from_one() {
        let cells = month_grid(2025, 6);
        let days: Vec<u32> = cells.iter().filter_map(|c| *c).collect();
        assert_eq!(days.first(), Some(&1));
        assert!(days.windows(2).all(|w| w[1] == w[0] + 1));
    }
}

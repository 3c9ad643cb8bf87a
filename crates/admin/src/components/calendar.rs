//! Month calendar for the orders page.
//!
//! Weeks start on Sunday. Days outside the shown month pad the first and
//! last week so every row has seven cells.

use chrono::{Datelike, Days, Months, NaiveDate};

use atelier_core::orders::{Order, group_by_day};

/// Column headings, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// An order shown as an event on its day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub order_id: String,
    pub title: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    pub in_month: bool,
    pub is_selected: bool,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
    pub href: String,
}

impl CalendarDay {
    #[must_use]
    pub fn css_class(&self) -> String {
        let mut class = String::from("calendar-day");
        if !self.in_month {
            class.push_str(" calendar-day--outside");
        }
        if self.is_today {
            class.push_str(" calendar-day--today");
        }
        if self.is_selected {
            class.push_str(" calendar-day--selected");
        }
        class
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCalendar {
    /// e.g. `May 2024`.
    pub title: String,
    pub prev_href: String,
    pub next_href: String,
    pub today_href: String,
    pub weeks: Vec<Vec<CalendarDay>>,
}

/// Parse a `YYYY-MM` query value to the first day of that month.
#[must_use]
pub fn parse_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.trim().split_once('-')?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Parse a `YYYY-MM-DD` query value.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// First day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Month to show: the explicit `month` query, else the selected day's
/// month, else the current month.
#[must_use]
pub fn resolve_month(
    month: Option<&str>,
    selected: Option<NaiveDate>,
    today: NaiveDate,
) -> NaiveDate {
    month
        .and_then(parse_month)
        .unwrap_or_else(|| month_start(selected.unwrap_or(today)))
}

fn month_href(first: NaiveDate) -> String {
    format!("/orders?month={}", first.format("%Y-%m"))
}

/// Link that selects `date` and shows its month.
#[must_use]
pub fn day_href(date: NaiveDate) -> String {
    format!(
        "/orders?month={}&date={}",
        date.format("%Y-%m"),
        date.format("%Y-%m-%d")
    )
}

/// Lay out the month starting at `first` with each day's orders attached.
#[must_use]
pub fn month_calendar(
    first: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    orders: &[Order],
) -> MonthCalendar {
    let first = month_start(first);
    let next = first.checked_add_months(Months::new(1)).unwrap_or(first);
    let prev = first.checked_sub_months(Months::new(1)).unwrap_or(first);
    let last = next.pred_opt().unwrap_or(first);

    let lead = u64::from(first.weekday().num_days_from_sunday());
    let trail = u64::from(6 - last.weekday().num_days_from_sunday());
    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
    let end = last.checked_add_days(Days::new(trail)).unwrap_or(last);

    let by_day = group_by_day(orders);

    let days: Vec<CalendarDay> = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| {
            let events = by_day
                .get(&date)
                .map(|orders| {
                    orders
                        .iter()
                        .map(|order| CalendarEvent {
                            order_id: order.id.to_string(),
                            title: order.short_ref(),
                            status: order.status.label().to_string(),
                        })
                        .collect()
                })
                .unwrap_or_default();
            CalendarDay {
                date,
                day: date.day(),
                in_month: date.month() == first.month() && date.year() == first.year(),
                is_selected: selected == Some(date),
                is_today: date == today,
                events,
                href: day_href(date),
            }
        })
        .collect();

    MonthCalendar {
        title: first.format("%B %Y").to_string(),
        prev_href: month_href(prev),
        next_href: month_href(next),
        today_href: month_href(month_start(today)),
        weeks: days.chunks(7).map(<[CalendarDay]>::to_vec).collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn orders() -> Vec<Order> {
        serde_json::from_value(json!([
            {"_id": "order-aaaaaa", "date": "2024-05-02T09:00:00Z", "amount": 10},
            {"_id": "order-bbbbbb", "date": "2024-05-03T09:00:00Z", "amount": 20},
            {"_id": "order-cccccc", "date": "2024-05-02T18:30:00Z", "amount": 30}
        ]))
        .unwrap()
    }

    #[test]
    fn test_parse_query_values() {
        assert_eq!(parse_month("2024-05"), Some(ymd(2024, 5, 1)));
        assert_eq!(parse_month("2024-13"), None);
        assert_eq!(parse_month("may"), None);
        assert_eq!(parse_date("2024-05-02"), Some(ymd(2024, 5, 2)));
        assert_eq!(parse_date("02/05/2024"), None);
    }

    #[test]
    fn test_resolve_month_precedence() {
        let today = ymd(2024, 7, 14);
        assert_eq!(resolve_month(Some("2024-05"), None, today), ymd(2024, 5, 1));
        assert_eq!(
            resolve_month(None, Some(ymd(2023, 12, 25)), today),
            ymd(2023, 12, 1)
        );
        assert_eq!(resolve_month(Some("bogus"), None, today), ymd(2024, 7, 1));
    }

    #[test]
    fn test_weeks_start_on_sunday() {
        // May 2024 starts on a Wednesday and ends on a Friday.
        let cal = month_calendar(ymd(2024, 5, 1), None, ymd(2024, 5, 20), &[]);
        assert_eq!(cal.title, "May 2024");
        assert_eq!(cal.weeks.len(), 5);
        assert!(cal.weeks.iter().all(|week| week.len() == 7));
        assert_eq!(cal.weeks[0][0].date, ymd(2024, 4, 28));
        assert!(!cal.weeks[0][0].in_month);
        assert_eq!(cal.weeks[0][3].day, 1);
        assert_eq!(cal.weeks[4][6].date, ymd(2024, 6, 1));
        assert_eq!(cal.prev_href, "/orders?month=2024-04");
        assert_eq!(cal.next_href, "/orders?month=2024-06");
    }

    #[test]
    fn test_events_land_on_their_day() {
        let all = orders();
        let cal = month_calendar(ymd(2024, 5, 1), Some(ymd(2024, 5, 2)), ymd(2024, 5, 20), &all);
        let thursday = &cal.weeks[0][4];
        assert_eq!(thursday.date, ymd(2024, 5, 2));
        assert!(thursday.is_selected);
        let titles: Vec<&str> = thursday.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["#aaaaaa", "#cccccc"]);
        assert_eq!(cal.weeks[0][5].events.len(), 1);
        assert_eq!(thursday.href, "/orders?month=2024-05&date=2024-05-02");
    }

    #[test]
    fn test_year_boundary() {
        let cal = month_calendar(ymd(2024, 12, 1), None, ymd(2024, 12, 1), &[]);
        assert_eq!(cal.next_href, "/orders?month=2025-01");
        assert!(cal.weeks[0][0].is_today);
        assert!(cal.weeks[0][0].css_class().contains("today"));
    }
}

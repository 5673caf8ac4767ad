//! Upcoming-birthday calculator.
//!
//! A pure computation over the contacts of an address book: given a
//! lookahead window and a reference date, it reports every contact whose
//! next birthday occurrence falls inside the window, with the celebration
//! date rolled forward off weekends.

use crate::domain::BIRTHDAY_FORMAT;
use crate::models::Contact;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

/// An upcoming birthday for one contact.
///
/// `date` is the celebration date: the next calendar occurrence of the
/// contact's birthday, moved to the following Monday when it would land
/// on a Saturday or Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Celebration date, rendered as `DD.MM.YYYY`
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(BIRTHDAY_FORMAT))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// Compute the birthdays occurring within `days` days of `today`.
///
/// For each contact with a birthday, the birthday's month and day are
/// transposed onto `today`'s year, or onto the next year when that date
/// has already passed. Contacts whose transposed date falls within
/// `[today, today + days]` inclusive are reported, with weekend dates
/// rolled forward to the next Monday.
///
/// Results follow the iteration order of `contacts` (insertion order for
/// an [`AddressBook`](crate::book::AddressBook)); they are not sorted by
/// date, so callers wanting chronological output must sort explicitly.
///
/// A negative `days` or an empty `contacts` yields an empty result.
pub fn upcoming_birthdays<'a, I>(contacts: I, days: i64, today: NaiveDate) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Contact>,
{
    let mut upcoming = Vec::new();

    for contact in contacts {
        let Some(birthday) = contact.birthday else {
            continue;
        };

        let mut next_occurrence = transpose_to_year(birthday.date(), today.year());
        if next_occurrence < today {
            next_occurrence = transpose_to_year(birthday.date(), today.year() + 1);
        }

        let days_until = (next_occurrence - today).num_days();
        if (0..=days).contains(&days_until) {
            upcoming.push(UpcomingBirthday {
                name: contact.name.clone(),
                date: adjust_for_weekend(next_occurrence),
            });
        }
    }

    upcoming
}

/// Transpose a birthday's month and day onto `year`.
///
/// A Feb 29 birthday clamps to Feb 28 when `year` is not a leap year.
fn transpose_to_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday.with_year(year).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
    })
}

/// Move Saturday and Sunday dates to the next Monday.
fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

/// The first occurrence of `weekday` strictly after `start`.
fn next_weekday(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead = weekday.num_days_from_monday() as i64
        - start.weekday().num_days_from_monday() as i64;
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    start + Duration::days(days_ahead)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contact(name: &str, birthday: Option<&str>) -> Contact {
        let mut contact = Contact::new(name);
        if let Some(birthday) = birthday {
            contact.set_birthday(birthday.parse().unwrap());
        }
        contact
    }

    // 2024-12-03 is a Tuesday.
    const TODAY: (i32, u32, u32) = (2024, 12, 3);

    fn run(contacts: &[Contact], days: i64) -> Vec<UpcomingBirthday> {
        let (y, m, d) = TODAY;
        upcoming_birthdays(contacts, days, date(y, m, d))
    }

    #[test]
    fn test_birthday_within_window() {
        let contacts = vec![contact("Bob", Some("03.12.1995"))];
        let result = run(&contacts, 7);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bob");
        assert_eq!(result[0].date, date(2024, 12, 3));
    }

    #[test]
    fn test_sunday_birthday_rolls_to_monday() {
        // 2024-12-08 is a Sunday.
        let contacts = vec![contact("Charlie", Some("08.12.2000"))];
        let result = run(&contacts, 7);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, date(2024, 12, 9));
        assert_eq!(result[0].date.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_saturday_birthday_rolls_to_monday() {
        // 2024-12-07 is a Saturday.
        let contacts = vec![contact("Eve", Some("07.12.1988"))];
        let result = run(&contacts, 7);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, date(2024, 12, 9));
    }

    #[test]
    fn test_passed_birthday_wraps_to_next_year_and_is_excluded() {
        // Nov 29 already passed; next occurrence is 2025-11-29, far
        // outside a 7-day window.
        let contacts = vec![contact("Diana", Some("29.11.1990"))];
        assert!(run(&contacts, 7).is_empty());
    }

    #[test]
    fn test_year_wrap_within_window() {
        // 2024-12-30 is a Monday; Jan 2 lands 3 days later in 2025.
        let contacts = vec![contact("Nina", Some("02.01.2000"))];
        let result = upcoming_birthdays(&contacts, 7, date(2024, 12, 30));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, date(2025, 1, 2));
    }

    #[test]
    fn test_contact_without_birthday_is_skipped() {
        let contacts = vec![contact("Anon", None), contact("Bob", Some("03.12.1995"))];
        let result = run(&contacts, 365);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bob");
    }

    #[test]
    fn test_zero_day_window_matches_today_only() {
        let contacts = vec![
            contact("Bob", Some("03.12.1995")),
            contact("Eve", Some("04.12.1988")),
        ];
        let result = run(&contacts, 0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bob");
    }

    #[test]
    fn test_zero_day_window_still_adjusts_weekends() {
        // Today is Saturday 2024-12-07; the celebration still moves to
        // Monday even though the window only covers today.
        let contacts = vec![contact("Eve", Some("07.12.1988"))];
        let result = upcoming_birthdays(&contacts, 0, date(2024, 12, 7));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, date(2024, 12, 9));
    }

    #[test]
    fn test_negative_window_yields_empty() {
        let contacts = vec![contact("Bob", Some("03.12.1995"))];
        assert!(run(&contacts, -1).is_empty());
    }

    #[test]
    fn test_empty_contacts_yield_empty() {
        assert!(run(&[], 7).is_empty());
    }

    #[test]
    fn test_leap_day_birthday_clamps_to_feb_28() {
        // 2025 is not a leap year; 2025-02-28 is a Friday.
        let contacts = vec![contact("Leap", Some("29.02.2000"))];
        let result = upcoming_birthdays(&contacts, 7, date(2025, 2, 25));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, date(2025, 2, 28));
    }

    #[test]
    fn test_leap_day_birthday_in_leap_year() {
        // 2024-02-29 exists and is a Thursday.
        let contacts = vec![contact("Leap", Some("29.02.2000"))];
        let result = upcoming_birthdays(&contacts, 7, date(2024, 2, 25));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].date, date(2024, 2, 29));
    }

    #[test]
    fn test_result_preserves_input_order() {
        // Eve's celebration lands later in the week than Bob's, but she
        // comes first in the input so she comes first in the output.
        let contacts = vec![
            contact("Eve", Some("07.12.1988")),
            contact("Bob", Some("03.12.1995")),
        ];
        let names: Vec<_> = run(&contacts, 7).into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["Eve", "Bob"]);
    }

    #[test]
    fn test_idempotent_for_fixed_today() {
        let contacts = vec![
            contact("Bob", Some("03.12.1995")),
            contact("Charlie", Some("08.12.2000")),
        ];
        assert_eq!(run(&contacts, 7), run(&contacts, 7));
    }

    #[test]
    fn test_display_format() {
        let upcoming = UpcomingBirthday {
            name: "Bob".to_string(),
            date: date(2024, 12, 3),
        };
        assert_eq!(upcoming.to_string(), "Bob: 03.12.2024");
    }

    #[test]
    fn test_serialization_formats_date() {
        let upcoming = UpcomingBirthday {
            name: "Bob".to_string(),
            date: date(2024, 12, 3),
        };
        let json = serde_json::to_string(&upcoming).unwrap();
        assert_eq!(json, "{\"name\":\"Bob\",\"date\":\"03.12.2024\"}");
    }

    #[test]
    fn test_next_weekday_always_moves_forward() {
        // From a Monday, the next Monday is a full week out.
        let monday = date(2024, 12, 2);
        assert_eq!(next_weekday(monday, Weekday::Mon), date(2024, 12, 9));
        // From a Sunday, the next Monday is tomorrow.
        let sunday = date(2024, 12, 8);
        assert_eq!(next_weekday(sunday, Weekday::Mon), date(2024, 12, 9));
    }

    #[test]
    fn test_adjust_for_weekend_leaves_weekdays_alone() {
        let tuesday = date(2024, 12, 3);
        assert_eq!(adjust_for_weekend(tuesday), tuesday);
    }
}

use chrono::{Days, Locale, Months, NaiveDateTime, TimeDelta};
use dto::event::LocationDto;
use urlencoding::encode;

/// The date endpoint serves "YYYY MM DD HH MM".
pub fn parse_event_date(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), "%Y %m %d %H %M").ok()
}

/// "sábado, 20 de junio de 2026 - 17:30h"
pub fn format_event_date(date: NaiveDateTime) -> String {
    format!(
        "{} - {}h",
        date.date().format_localized("%A, %-d de %B de %Y", Locale::es_ES),
        date.format("%H:%M")
    )
}

/// Compact UTC stamp used in Google Calendar template links.
pub fn format_date_for_calendar(date: NaiveDateTime) -> String {
    format!("{}Z", date.format("%Y%m%dT%H%M%S"))
}

/// The date the page counts down to. On the demo deployment a past event is
/// pushed a month and change into the future so visitors still see a live
/// countdown.
pub fn display_date(
    event_date: Option<NaiveDateTime>,
    now: NaiveDateTime,
    demo_mode: bool,
) -> Option<NaiveDateTime> {
    let date = event_date?;
    if demo_mode && date < now {
        return now
            .checked_add_months(Months::new(1))
            .and_then(|shifted| shifted.checked_add_days(Days::new(4)));
    }
    Some(date)
}

/// Prefilled "save the date" link, two-hour slot at the first locations.
pub fn google_calendar_url(date: NaiveDateTime, locations: &[LocationDto]) -> String {
    let start = format_date_for_calendar(date);
    let end = format_date_for_calendar(date + TimeDelta::hours(2));
    let joined = locations
        .iter()
        .map(|location| location.address.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let place = if joined.is_empty() {
        "Ubicación del evento"
    } else {
        &joined
    };

    format!(
        "https://www.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
        encode("Nuestra celebración"),
        start,
        end,
        encode("Detalles del evento"),
        encode(place)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn parses_the_api_date_format() {
        assert_eq!(
            parse_event_date("2026 06 20 17 30"),
            Some(instant(2026, 6, 20, 17, 30))
        );
        assert_eq!(parse_event_date("20-06-2026"), None);
        assert_eq!(parse_event_date(""), None);
    }

    #[test]
    fn calendar_stamp_is_compact_utc() {
        assert_eq!(
            format_date_for_calendar(instant(2026, 6, 20, 17, 30)),
            "20260620T173000Z"
        );
    }

    #[test]
    fn formats_dates_in_spanish() {
        let formatted = format_event_date(instant(2026, 6, 20, 17, 30));
        assert!(formatted.contains("junio"), "got: {}", formatted);
        assert!(formatted.ends_with("17:30h"), "got: {}", formatted);
    }

    #[test]
    fn demo_mode_replaces_past_dates_only() {
        let now = instant(2026, 8, 1, 12, 0);
        let past = instant(2025, 6, 20, 17, 30);
        let future = instant(2026, 9, 20, 17, 30);

        assert_eq!(display_date(Some(future), now, true), Some(future));
        assert_eq!(display_date(Some(past), now, false), Some(past));
        assert_eq!(display_date(None, now, true), None);

        let shifted = display_date(Some(past), now, true).unwrap();
        assert!(shifted > now);
        assert_eq!(shifted, instant(2026, 9, 5, 12, 0));
    }

    #[test]
    fn calendar_url_encodes_locations() {
        let locations = vec![
            LocationDto {
                address: "Hacienda El Olivar".into(),
                time: Some("17:30".into()),
            },
            LocationDto {
                address: "Iglesia San José".into(),
                time: None,
            },
        ];
        let url = google_calendar_url(instant(2026, 6, 20, 17, 30), &locations);

        assert!(url.contains("dates=20260620T173000Z/20260620T193000Z"));
        assert!(url.contains("Hacienda%20El%20Olivar"));
        assert!(!url.contains("Iglesia "), "raw space survived encoding");
    }
}

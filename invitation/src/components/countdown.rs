use std::time::Duration;

use chrono::{Local, NaiveDateTime, TimeDelta};
use leptos::either::Either;
use leptos::prelude::*;

/// Time remaining until the event, decomposed for display. Whole days first,
/// then the 0–23 / 0–59 / 0–59 remainder of the elapsed difference; no
/// calendar month arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeLeft {
    Elapsed,
    Remaining {
        dias: i64,
        horas: i64,
        minutos: i64,
        segundos: i64,
    },
}

pub fn calculate_time_left(
    target: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Option<TimeLeft> {
    let target = target?;
    let difference = target - now;
    if difference <= TimeDelta::zero() {
        return Some(TimeLeft::Elapsed);
    }

    let total = difference.num_seconds();
    Some(TimeLeft::Remaining {
        dias: total / 86_400,
        horas: (total / 3_600) % 24,
        minutos: (total / 60) % 60,
        segundos: total % 60,
    })
}

fn unit_view(value: i64, singular: &'static str, plural: &'static str) -> impl IntoView {
    (value > 0).then(|| {
        view! {
            <div class="time-unit">
                <span class="time-value">{value}</span>
                <span class="time-label">{if value == 1 { singular } else { plural }}</span>
            </div>
        }
    })
}

/// Ticks once per second while mounted; the interval is owned by this
/// instance and cleared on teardown, so remounts never stack timers.
#[component]
pub fn Countdown(target: Option<NaiveDateTime>) -> impl IntoView {
    let (time_left, set_time_left) =
        signal(calculate_time_left(target, Local::now().naive_local()));

    Effect::new(move |_| {
        if let Ok(handle) = set_interval_with_handle(
            move || set_time_left.set(calculate_time_left(target, Local::now().naive_local())),
            Duration::from_secs(1),
        ) {
            on_cleanup(move || handle.clear());
        }
    });

    view! {
        {move || {
            time_left.get()
                .map(|left| match left {
                    TimeLeft::Elapsed => {
                        Either::Left(
                            view! { <p class="countdown-done">"¡El gran día ha llegado!"</p> },
                        )
                    }
                    TimeLeft::Remaining { dias, horas, minutos, segundos } => {
                        Either::Right(
                            view! {
                                <div class="countdown" role="timer">
                                    {unit_view(dias, "día", "días")}
                                    {unit_view(horas, "hora", "horas")}
                                    {unit_view(minutos, "minuto", "minutos")}
                                    {unit_view(segundos, "segundo", "segundos")}
                                </div>
                            },
                        )
                    }
                })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn ninety_seconds_out_is_one_minute_thirty() {
        let now = instant(2026, 6, 20, 17, 30, 0);
        let target = now + TimeDelta::milliseconds(90_000);

        assert_eq!(
            calculate_time_left(Some(target), now),
            Some(TimeLeft::Remaining {
                dias: 0,
                horas: 0,
                minutos: 1,
                segundos: 30,
            })
        );
    }

    #[test]
    fn decomposes_multi_day_differences() {
        let now = instant(2026, 6, 20, 17, 30, 0);
        let target = instant(2026, 6, 23, 20, 45, 5);

        assert_eq!(
            calculate_time_left(Some(target), now),
            Some(TimeLeft::Remaining {
                dias: 3,
                horas: 3,
                minutos: 15,
                segundos: 5,
            })
        );
    }

    #[test]
    fn reached_or_passed_target_signals_elapsed() {
        let now = instant(2026, 6, 20, 17, 30, 0);
        assert_eq!(
            calculate_time_left(Some(now), now),
            Some(TimeLeft::Elapsed)
        );
        assert_eq!(
            calculate_time_left(Some(now - TimeDelta::seconds(1)), now),
            Some(TimeLeft::Elapsed)
        );
    }

    #[test]
    fn missing_target_yields_nothing() {
        let now = instant(2026, 6, 20, 17, 30, 0);
        assert_eq!(calculate_time_left(None, now), None);
    }
}

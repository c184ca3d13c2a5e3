use chrono::{Local, NaiveDateTime};
use dto::event::LocationDto;
use leptos::either::Either;
use leptos::prelude::*;

use crate::components::countdown::Countdown;
use crate::dates::{display_date, format_event_date, google_calendar_url};

/// Centre of the page: the event date, the live countdown, where everything
/// happens, and the save-the-date link.
#[component]
pub fn EventCard(
    event_date: Option<NaiveDateTime>,
    locations: Vec<LocationDto>,
    demo_mode: bool,
    on_confirm: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let shown_date = display_date(event_date, Local::now().naive_local(), demo_mode);
    let calendar_url = shown_date.map(|date| google_calendar_url(date, &locations));

    view! {
        <section class="event-card">
            <p class="event-date">
                {match shown_date {
                    Some(date) => format_event_date(date),
                    None => "Fecha no disponible".to_string(),
                }}
            </p>
            <Countdown target=shown_date />
            {if locations.is_empty() {
                Either::Left(view! {})
            } else {
                Either::Right(
                    view! {
                        <ul class="locations">
                            {locations
                                .iter()
                                .map(|location| {
                                    let line = match &location.time {
                                        Some(time) => format!("{} - {}h", location.address, time),
                                        None => location.address.clone(),
                                    };
                                    view! { <li>{line}</li> }
                                })
                                .collect_view()}
                        </ul>
                    },
                )
            }}
            <div class="event-actions">
                {calendar_url
                    .map(|url| {
                        view! {
                            <a class="btn outline" href=url target="_blank" rel="noopener noreferrer">
                                "Save the date"
                            </a>
                        }
                    })}
                <button class="btn save" on:click=move |_| on_confirm()>
                    "Confirmar asistencia"
                </button>
            </div>
        </section>
    }
}

use std::rc::Rc;

use calendula_core::calendar::{CalendarFormats, DayProps, FormatKey, WEEKDAY_PATTERN};
use calendula_core::config::CalendarSettings;
use calendula_core::event::CalendarEvent;
use calendula_core::localizer::LocalizerHandle;
use calendula_shared::UserProfile;
use chrono::{Datelike, NaiveDate, Weekday};
use yew::{Callback, Html, MouseEvent, Properties, function_component, html, use_memo};

use crate::calendar::{BaseCalendar, CalendarBlock};

/// Styling for a mini calendar cell: today, weekends and official days off.
pub fn mini_calendar_day_props(
    day: NaiveDate,
    today: NaiveDate,
    holidays: &[CalendarEvent],
) -> DayProps {
    let mut classes = Vec::new();
    if day == today {
        classes.push("today");
    }
    if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
        classes.push("weekend");
    }

    let holiday = holidays
        .iter()
        .find(|event| (event.day_off || event.holiday) && event.covers(day));
    let mut props = if classes.is_empty() && holiday.is_none() {
        DayProps::default()
    } else {
        if holiday.is_some() {
            classes.push("day-off");
        }
        DayProps::with_class(classes.join(" "))
    };

    if let Some(color) = holiday.and_then(|event| event.color.clone()) {
        props.style.insert("color".to_string(), color);
    }
    props
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub localizer: LocalizerHandle,
    pub settings: Rc<CalendarSettings>,
    pub holidays: Rc<Vec<CalendarEvent>>,
    pub current_user: UserProfile,
    pub on_edit_profile: Callback<MouseEvent>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let today = props.settings.today();
    let formats = use_memo(props.localizer.clone(), |localizer| {
        let localizer = localizer.clone();
        CalendarFormats::new().with(FormatKey::WeekdayFormat, move |date, culture| {
            localizer.format(date, WEEKDAY_PATTERN, culture)
        })
    });
    let day_prop_getter = {
        let holidays = props.holidays.clone();
        use_memo((today, holidays), |(today, holidays)| {
            let today = *today;
            let holidays = holidays.clone();
            Callback::from(move |day: NaiveDate| {
                mini_calendar_day_props(day, today, &holidays)
            })
        })
    };

    let user = &props.current_user;
    let display_name = user
        .username
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "—".to_string());

    html! {
        <aside class="panel sidebar">
            <div class="header">{ "Профиль" }</div>
            <div class="profile-card">
                {
                    match user.picture.as_deref() {
                        Some(src) => html! { <img class="avatar" src={src.to_string()} alt={display_name.clone()} /> },
                        None => html! { <div class="avatar placeholder">{ display_name.chars().next().unwrap_or('?') }</div> },
                    }
                }
                <div class="profile-name">{ display_name.clone() }</div>
                <div class="profile-email">{ user.email.clone() }</div>
                <button type="button" class="btn" onclick={props.on_edit_profile.clone()}>
                    { "Редактировать профиль" }
                </button>
            </div>
            <div class="header">{ "Календарь" }</div>
            <CalendarBlock
                localizer={props.localizer.clone()}
                date={today}
                formats={(*formats).clone()}
                day_prop_getter={(*day_prop_getter).clone()}
            />
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct MainProps {
    pub localizer: LocalizerHandle,
    pub settings: Rc<CalendarSettings>,
    pub holidays: Rc<Vec<CalendarEvent>>,
    pub current_user: UserProfile,
    pub on_edit_profile: Callback<MouseEvent>,
}

#[function_component(Main)]
pub fn main_layout(props: &MainProps) -> Html {
    html! {
        <main class="main container">
            <Sidebar
                localizer={props.localizer.clone()}
                settings={props.settings.clone()}
                holidays={props.holidays.clone()}
                current_user={props.current_user.clone()}
                on_edit_profile={props.on_edit_profile.clone()}
            />
            <div class="content">
                <BaseCalendar
                    localizer={props.localizer.clone()}
                    settings={props.settings.clone()}
                />
            </div>
        </main>
    }
}

use std::cell::Cell;
use std::rc::Rc;

use calendula_core::calendar::{
    BaseCalendarMemo, CalendarFormats, DayPropGetter, DayProps, DrillDown, FormatKey,
    calendar_block_props,
};
use calendula_core::config::CalendarSettings;
use calendula_core::event::events_from_dtos;
use calendula_core::localizer::{LocalizerHandle, TableLocalizer};
use calendula_core::user_form::{FieldChange, UserField, UserForm};
use calendula_core::view::{
    CalendarState, CalendarViewMode, NavigateAction, day_cell, month_grid, weekday_headers,
};
use calendula_shared::{ReadEventDto, UserProfile};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn base_calendar_renders_russian_month_and_drills_down() {
    let settings = CalendarSettings::from_toml_str(
        r#"
timezone = "Europe/Moscow"
week_start = "monday"
"#,
    )
    .expect("parse settings");
    let localizer = LocalizerHandle::new(TableLocalizer);
    let mut memo = BaseCalendarMemo::default();
    let now = date(2026, 3, 18).and_hms_opt(8, 0, 0).expect("valid time");

    let props = memo.get(&localizer, || now).props(&localizer, &settings);
    let mut state = CalendarState::new(&props, date(2026, 3, 18));

    assert_eq!(props.culture, "ru");
    assert_eq!(
        weekday_headers(&props, state.focus),
        ["пн", "вт", "ср", "чт", "пт", "сб", "вс"]
    );
    assert_eq!(calendula_core::view::title(&props, &state), "март 2026");

    assert!(state.navigate(NavigateAction::Previous, &props, date(2026, 3, 18)));
    assert_eq!(state.focus, date(2026, 2, 18));

    assert!(state.drill_down(date(2026, 2, 20), &props));
    assert_eq!(state.view, CalendarViewMode::Day);
    assert_eq!(
        calendula_core::view::title(&props, &state),
        "пятница, 20 февраля"
    );
}

#[test]
fn mini_calendar_highlights_holidays_from_events() {
    let raw = r##"[
        {
            "id": 1,
            "datetime_start": "2026-05-09",
            "datetime_finish": null,
            "all_day": true,
            "name": "День Победы",
            "description": null,
            "day_off": true,
            "holiday": true,
            "category": {"id": 1, "name": "Праздники", "color": "#c62828"},
            "calendar": {"id": 1, "name": "Производственный"}
        }
    ]"##;
    let dtos: Vec<ReadEventDto> = serde_json::from_str(raw).expect("parse events");
    let events = Rc::new(events_from_dtos(&dtos));
    let getter_calls = Rc::new(Cell::new(0));

    let getter: DayPropGetter = {
        let events = events.clone();
        let getter_calls = getter_calls.clone();
        Rc::new(move |day| {
            getter_calls.set(getter_calls.get() + 1);
            if events.iter().any(|event| event.holiday && event.covers(day)) {
                DayProps::with_class("holiday")
            } else {
                DayProps::default()
            }
        })
    };

    let localizer = LocalizerHandle::new(TableLocalizer);
    let formats = CalendarFormats::new().with(FormatKey::DateFormat, |date, _| {
        date.format("%-d").to_string()
    });
    let props = calendar_block_props(&localizer, date(2026, 5, 15), formats, getter);
    let state = CalendarState::new(&props, date(2026, 1, 1));

    assert_eq!(props.drill_down, DrillDown::Suppressed);
    assert_eq!(props.style.width, Some(300));
    assert_eq!(props.style.height, Some(300));

    let focus = state.visible_focus(&props);
    let cells: Vec<_> = month_grid(focus, props.week_start)
        .into_iter()
        .flatten()
        .map(|day| day_cell(&props, day, focus))
        .collect();

    assert_eq!(cells.len(), 42);
    assert_eq!(getter_calls.get(), 42);
    let holiday = cells
        .iter()
        .find(|cell| cell.day == date(2026, 5, 9))
        .expect("may 9 in grid");
    assert_eq!(holiday.label, "9");
    assert_eq!(holiday.props.class_name.as_deref(), Some("holiday"));
    assert!(!holiday.outside);
}

#[test]
fn profile_form_round_trip_through_host_callbacks() {
    let mut current = UserProfile {
        username: Some("Ivan".to_string()),
        email: "ivan@mail.ru".to_string(),
        picture: Some("https://cdn.example/ivan.png".to_string()),
        dark_mode: false,
    };
    let mut form = UserForm::new(&current);
    let mut visible = true;
    let mut close_calls = 0;

    form.change(FieldChange::Username("Иван Петров".to_string()));
    form.change(FieldChange::Picture(String::new()));
    form.change(FieldChange::DarkMode(true));
    assert!(form.is_valid());
    assert!(form.error(UserField::Username).is_none());

    let payload = form
        .submit(
            |update| {
                current = current.apply_update(&update);
                Ok(())
            },
            |flag| {
                close_calls += 1;
                visible = flag;
            },
        )
        .expect("submit")
        .expect("valid form");

    assert_eq!(payload.picture, None);
    assert_eq!(current.username.as_deref(), Some("Иван Петров"));
    assert_eq!(current.picture, None);
    assert!(!current.dark_mode);
    assert!(!visible);
    assert_eq!(close_calls, 1);
    assert!(form.values().username.is_empty());
    assert!(form.values().email.is_empty());
}

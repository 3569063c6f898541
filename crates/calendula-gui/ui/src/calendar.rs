use std::rc::Rc;

use calendula_core::calendar::{
  BaseCalendarMemo,
  CalendarFormats,
  CalendarMessages,
  CalendarProps,
  DayPropGetter,
  DayProps,
  calendar_block_props
};
use calendula_core::config::CalendarSettings;
use calendula_core::event::CalendarEvent;
use calendula_core::localizer::LocalizerHandle;
use calendula_core::view::{
  CalendarState,
  CalendarViewMode,
  NavigateAction,
  agenda,
  day_cell,
  day_hours,
  events_on,
  month_grid,
  title,
  week_days,
  weekday_headers
};
use chrono::{
  NaiveDate,
  NaiveTime,
  Timelike
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_memo,
  use_mut_ref,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct BaseCalendarProps {
  pub localizer: LocalizerHandle,
  pub settings:  Rc<CalendarSettings>
}

/// Full-size calendar in the main area.
/// Formats and the initial date are
/// derived once per localizer.
#[function_component(BaseCalendar)]
pub fn base_calendar(
  props: &BaseCalendarProps
) -> Html {
  let memo =
    use_mut_ref(BaseCalendarMemo::default);
  let calendar = {
    let mut memo = memo.borrow_mut();
    let model = memo.get(
      &props.localizer,
      || props.settings.now()
    );
    Rc::new(model.props(
      &props.localizer,
      &props.settings
    ))
  };

  html! {
      <CalendarView calendar={calendar} today={props.settings.today()} />
  }
}

#[derive(Properties, PartialEq)]
pub struct CalendarBlockProps {
  pub localizer:       LocalizerHandle,
  pub date:            NaiveDate,
  pub formats:         CalendarFormats,
  pub day_prop_getter:
    Callback<NaiveDate, DayProps>
}

/// Fixed-size month tile pinned to
/// `date`. No toolbar, no drill-down.
#[function_component(CalendarBlock)]
pub fn calendar_block(
  props: &CalendarBlockProps
) -> Html {
  let calendar = use_memo(
    (
      props.localizer.clone(),
      props.date,
      props.formats.clone(),
      props.day_prop_getter.clone()
    ),
    |(
      localizer,
      date,
      formats,
      day_prop_getter
    )| {
      let getter = day_prop_getter.clone();
      let getter: DayPropGetter =
        Rc::new(move |day| getter.emit(day));
      calendar_block_props(
        localizer,
        *date,
        formats.clone(),
        getter
      )
    }
  );

  html! {
      <CalendarView calendar={calendar} today={props.date} />
  }
}

#[derive(Properties, PartialEq)]
pub struct CalendarViewProps {
  pub calendar: Rc<CalendarProps>,
  pub today:    NaiveDate
}

#[function_component(CalendarView)]
pub fn calendar_view(
  props: &CalendarViewProps
) -> Html {
  let calendar = props.calendar.clone();
  let today = props.today;
  let state = {
    let calendar = calendar.clone();
    use_state(move || {
      CalendarState::new(&calendar, today)
    })
  };

  let on_navigate = {
    let state = state.clone();
    let calendar = calendar.clone();
    Callback::from(
      move |action: NavigateAction| {
        let mut next = *state;
        if next.navigate(
          action, &calendar, today
        ) {
          state.set(next);
        }
      }
    )
  };

  let on_view = {
    let state = state.clone();
    Callback::from(
      move |view: CalendarViewMode| {
        let mut next = *state;
        next.set_view(view);
        state.set(next);
      }
    )
  };

  let on_drill_down = {
    let state = state.clone();
    let calendar = calendar.clone();
    Callback::from(
      move |day: NaiveDate| {
        let mut next = *state;
        if next
          .drill_down(day, &calendar)
        {
          state.set(next);
        }
      }
    )
  };

  let focus =
    state.visible_focus(&calendar);
  let style = calendar.style.to_css();

  html! {
      <div
          class={classes!("rbc-calendar", calendar.class_name.clone())}
          style={(!style.is_empty()).then_some(style)}
      >
          if calendar.toolbar {
              { render_calendar_toolbar(&calendar, &state, on_navigate, on_view) }
          }
          {
              match state.view {
                  CalendarViewMode::Month => render_calendar_month_view(&calendar, focus, on_drill_down),
                  CalendarViewMode::Week => render_calendar_week_view(&calendar, focus, on_drill_down),
                  CalendarViewMode::Day => render_calendar_day_view(&calendar, focus),
                  CalendarViewMode::Agenda => render_calendar_agenda_view(&calendar, focus),
              }
          }
      </div>
  }
}

include!("calendar_views/render_calendar_toolbar.rs");
include!("calendar_views/render_calendar_month_view.rs");
include!("calendar_views/render_calendar_week_view.rs");
include!("calendar_views/render_calendar_day_view.rs");
include!("calendar_views/render_calendar_agenda_view.rs");
include!("calendar_views/render_calendar_event.rs");

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn event_time_label_spans_start_and_end() {
    let day = NaiveDate::from_ymd_opt(
      2026, 3, 2
    )
    .expect("valid date");
    let start = day
      .and_hms_opt(9, 30, 0)
      .expect("valid time");
    let event = CalendarEvent {
      id:       7,
      title:    "Планёрка".to_string(),
      start,
      end:      start
        + chrono::Duration::minutes(45),
      all_day:  false,
      day_off:  false,
      holiday:  false,
      color:    None,
      calendar: None
    };
    let messages =
      CalendarMessages::russian();

    assert_eq!(
      event_time_label(&event, &messages),
      "09:30 – 10:15"
    );

    let all_day = CalendarEvent {
      all_day: true,
      ..event
    };
    assert_eq!(
      event_time_label(
        &all_day, &messages
      ),
      "Весь день"
    );
  }
}

//! Calendar view backend: navigation
//! state, day grids and agenda listing
//! computed from `CalendarProps`.

use chrono::{
  Datelike,
  Duration,
  NaiveDate,
  NaiveTime,
  Weekday
};
use tracing::debug;

use crate::calendar::{
  CalendarMessages,
  CalendarProps,
  DayProps,
  DrillDown,
  FormatKey
};
use crate::config::MAX_AGENDA_LENGTH_DAYS;
use crate::event::CalendarEvent;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CalendarViewMode {
  Month,
  Week,
  Day,
  Agenda
}

impl CalendarViewMode {
  pub fn all() -> [Self; 4] {
    [
      Self::Month,
      Self::Week,
      Self::Day,
      Self::Agenda
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Month => "month",
      | Self::Week => "week",
      | Self::Day => "day",
      | Self::Agenda => "agenda"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "month" => Some(Self::Month),
      | "week" => Some(Self::Week),
      | "day" => Some(Self::Day),
      | "agenda" => Some(Self::Agenda),
      | _ => None
    }
  }

  pub fn label(
    self,
    messages: &CalendarMessages
  ) -> &'static str {
    match self {
      | Self::Month => messages.month,
      | Self::Week => messages.week,
      | Self::Day => messages.day,
      | Self::Agenda => messages.agenda
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum NavigateAction {
  Previous,
  Today,
  Next
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct CalendarState {
  pub view:  CalendarViewMode,
  pub focus: NaiveDate
}

impl CalendarState {
  pub fn new(
    props: &CalendarProps,
    today: NaiveDate
  ) -> Self {
    let focus = props
      .date
      .or_else(|| {
        props
          .default_date
          .map(|dt| dt.date())
      })
      .unwrap_or(today);
    Self {
      view: CalendarViewMode::Month,
      focus
    }
  }

  /// Focus actually shown: a controlled
  /// date always wins.
  pub fn visible_focus(
    &self,
    props: &CalendarProps
  ) -> NaiveDate {
    props.date.unwrap_or(self.focus)
  }

  /// Returns `false` when the calendar is
  /// controlled and cannot move.
  pub fn navigate(
    &mut self,
    action: NavigateAction,
    props: &CalendarProps,
    today: NaiveDate
  ) -> bool {
    if props.date.is_some() {
      return false;
    }

    self.focus = match action {
      | NavigateAction::Today => today,
      | NavigateAction::Previous => {
        shift_focus(
          self.focus,
          self.view,
          -1,
          props.agenda_length_days
        )
      }
      | NavigateAction::Next => {
        shift_focus(
          self.focus,
          self.view,
          1,
          props.agenda_length_days
        )
      }
    };
    debug!(?action, focus = %self.focus, "calendar navigated");
    true
  }

  pub fn set_view(
    &mut self,
    view: CalendarViewMode
  ) {
    self.view = view;
  }

  /// Opens the day view for `day` unless
  /// drill-down is suppressed.
  pub fn drill_down(
    &mut self,
    day: NaiveDate,
    props: &CalendarProps
  ) -> bool {
    match props.drill_down {
      | DrillDown::Suppressed => false,
      | DrillDown::Navigate => {
        if props.date.is_none() {
          self.focus = day;
        }
        self.view = CalendarViewMode::Day;
        debug!(%day, "drilled down to day view");
        true
      }
    }
  }
}

fn shift_focus(
  current: NaiveDate,
  view: CalendarViewMode,
  step: i64,
  agenda_length_days: i64
) -> NaiveDate {
  match view {
    | CalendarViewMode::Month => {
      shift_months(current, step as i32)
    }
    | CalendarViewMode::Week => {
      add_days(current, step * 7)
    }
    | CalendarViewMode::Day => {
      add_days(current, step)
    }
    | CalendarViewMode::Agenda => {
      add_days(
        current,
        step * agenda_length_days
          .clamp(1, MAX_AGENDA_LENGTH_DAYS)
      )
    }
  }
}

pub fn shift_months(
  date: NaiveDate,
  months: i32
) -> NaiveDate {
  let mut year = date.year();
  let mut month =
    date.month() as i32 + months;

  while month < 1 {
    month += 12;
    year = year.saturating_sub(1);
  }
  while month > 12 {
    month -= 12;
    year = year.saturating_add(1);
  }

  let month = month as u32;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  Duration::try_days(days)
    .and_then(|delta| {
      date.checked_add_signed(delta)
    })
    .unwrap_or(date)
}

pub fn start_of_week(
  day: NaiveDate,
  week_start: Weekday
) -> NaiveDate {
  let day_idx = day
    .weekday()
    .num_days_from_monday()
    as i64;
  let start_idx = week_start
    .num_days_from_monday()
    as i64;
  let diff =
    (7 + day_idx - start_idx) % 7;
  add_days(day, -diff)
}

pub fn week_days(
  focus: NaiveDate,
  week_start: Weekday
) -> [NaiveDate; 7] {
  let start =
    start_of_week(focus, week_start);
  std::array::from_fn(|offset| {
    add_days(start, offset as i64)
  })
}

/// Six full weeks covering the focus
/// month, starting on `week_start`.
pub fn month_grid(
  focus: NaiveDate,
  week_start: Weekday
) -> Vec<[NaiveDate; 7]> {
  let first = first_day_of_month(
    focus.year(),
    focus.month()
  );
  (0_i64..6_i64)
    .map(|row| {
      week_days(
        add_days(first, row * 7),
        week_start
      )
    })
    .collect()
}

pub fn weekday_headers(
  props: &CalendarProps,
  focus: NaiveDate
) -> Vec<String> {
  week_days(focus, props.week_start)
  .into_iter()
  .map(|day| {
    props.format(
      FormatKey::WeekdayFormat,
      day.and_time(NaiveTime::MIN)
    )
  })
  .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
  pub day:     NaiveDate,
  pub label:   String,
  pub outside: bool,
  pub props:   DayProps,
  pub events:  Vec<CalendarEvent>
}

pub fn day_cell(
  props: &CalendarProps,
  day: NaiveDate,
  focus: NaiveDate
) -> DayCell {
  DayCell {
    day,
    label: props.format(
      FormatKey::DateFormat,
      day.and_time(NaiveTime::MIN)
    ),
    outside: day.month() != focus.month()
      || day.year() != focus.year(),
    props: props.day_props(day),
    events: events_on(&props.events, day)
      .into_iter()
      .cloned()
      .collect()
  }
}

pub fn events_on(
  events: &[CalendarEvent],
  day: NaiveDate
) -> Vec<&CalendarEvent> {
  let mut found = events
    .iter()
    .filter(|event| event.covers(day))
    .collect::<Vec<_>>();
  found.sort_by(|a, b| {
    b.all_day
      .cmp(&a.all_day)
      .then(a.start.cmp(&b.start))
  });
  found
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgendaDay {
  pub day:    NaiveDate,
  pub label:  String,
  pub events: Vec<CalendarEvent>
}

/// Days with events in
/// `[focus, focus + length_days)`.
pub fn agenda(
  props: &CalendarProps,
  focus: NaiveDate
) -> Vec<AgendaDay> {
  (0..props
    .agenda_length_days
    .clamp(0, MAX_AGENDA_LENGTH_DAYS))
    .map(|offset| add_days(focus, offset))
    .filter_map(|day| {
      let events = events_on(
        &props.events,
        day
      );
      if events.is_empty() {
        return None;
      }
      Some(AgendaDay {
        day,
        label: props.format(
          FormatKey::AgendaDateFormat,
          day.and_time(NaiveTime::MIN)
        ),
        events: events
          .into_iter()
          .cloned()
          .collect()
      })
    })
    .collect()
}

/// Hour slots of the day view, labelled
/// with the time gutter format.
pub fn day_hours(
  props: &CalendarProps,
  day: NaiveDate
) -> Vec<(u32, String)> {
  let (start, end) = props.day_hours;
  (start..=end.min(23))
    .filter_map(|hour| {
      let time =
        NaiveTime::from_hms_opt(hour, 0, 0)?;
      Some((
        hour,
        props.format(
          FormatKey::TimeGutterFormat,
          day.and_time(time)
        )
      ))
    })
    .collect()
}

pub fn title(
  props: &CalendarProps,
  state: &CalendarState
) -> String {
  let focus = state.visible_focus(props);
  let at = |day: NaiveDate| {
    day.and_time(NaiveTime::MIN)
  };

  match state.view {
    | CalendarViewMode::Month => {
      props.format(
        FormatKey::MonthHeaderFormat,
        at(focus)
      )
    }
    | CalendarViewMode::Day => {
      props.format(
        FormatKey::DayHeaderFormat,
        at(focus)
      )
    }
    | CalendarViewMode::Week => {
      let days =
        week_days(focus, props.week_start);
      range_title(props, days[0], days[6])
    }
    | CalendarViewMode::Agenda => {
      let last = add_days(
        focus,
        props
          .agenda_length_days
          .clamp(1, MAX_AGENDA_LENGTH_DAYS)
          - 1
      );
      range_title(props, focus, last)
    }
  }
}

fn range_title(
  props: &CalendarProps,
  first: NaiveDate,
  last: NaiveDate
) -> String {
  let label = |day: NaiveDate| {
    props.localizer.format(
      day.and_time(NaiveTime::MIN),
      "d MMMM",
      &props.culture
    )
  };
  format!("{} – {}", label(first), label(last))
}

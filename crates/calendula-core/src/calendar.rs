//! Calendar configuration: the props the
//! view backend renders from, and the two
//! calendar flavours built on top of them.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use chrono::{
  NaiveDate,
  NaiveDateTime,
  Weekday
};

use crate::config::CalendarSettings;
use crate::event::CalendarEvent;
use crate::localizer::LocalizerHandle;

pub const CULTURE: &str = "ru";
pub const WEEKDAY_PATTERN: &str = "eeeeee";
pub const BLOCK_SIZE_PX: u32 = 300;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
)]
pub enum FormatKey {
  WeekdayFormat,
  DateFormat,
  DayFormat,
  MonthHeaderFormat,
  DayHeaderFormat,
  TimeGutterFormat,
  AgendaDateFormat
}

impl FormatKey {
  /// Pattern used when the caller supplied
  /// no formatter for this key.
  pub fn default_pattern(
    self
  ) -> &'static str {
    match self {
      | FormatKey::WeekdayFormat => "eee",
      | FormatKey::DateFormat => "dd",
      | FormatKey::DayFormat => "dd eee",
      | FormatKey::MonthHeaderFormat => {
        "LLLL yyyy"
      }
      | FormatKey::DayHeaderFormat => {
        "eeee, d MMMM"
      }
      | FormatKey::TimeGutterFormat => {
        "HH:mm"
      }
      | FormatKey::AgendaDateFormat => {
        "eee d MMM"
      }
    }
  }
}

pub type FormatFn =
  Rc<dyn Fn(NaiveDateTime, &str) -> String>;

#[derive(Clone, Default)]
pub struct CalendarFormats {
  entries: BTreeMap<FormatKey, FormatFn>
}

impl CalendarFormats {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with(
    mut self,
    key: FormatKey,
    format: impl Fn(NaiveDateTime, &str) -> String
    + 'static
  ) -> Self {
    self
      .entries
      .insert(key, Rc::new(format));
    self
  }

  pub fn contains(
    &self,
    key: FormatKey
  ) -> bool {
    self.entries.contains_key(&key)
  }

  pub fn format(
    &self,
    key: FormatKey,
    date: NaiveDateTime,
    culture: &str
  ) -> Option<String> {
    self
      .entries
      .get(&key)
      .map(|format| format(date, culture))
  }
}

impl PartialEq for CalendarFormats {
  fn eq(&self, other: &Self) -> bool {
    self.entries.len()
      == other.entries.len()
      && self.entries.iter().zip(
        other.entries.iter()
      )
      .all(|((ka, fa), (kb, fb))| {
        ka == kb && Rc::ptr_eq(fa, fb)
      })
  }
}

impl fmt::Debug for CalendarFormats {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_set()
      .entries(self.entries.keys())
      .finish()
  }
}

/// UI strings shown by the calendar
/// toolbar, headers and agenda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMessages {
  pub date:              &'static str,
  pub time:              &'static str,
  pub event:             &'static str,
  pub all_day:           &'static str,
  pub week:              &'static str,
  pub work_week:         &'static str,
  pub day:               &'static str,
  pub month:             &'static str,
  pub previous:          &'static str,
  pub next:              &'static str,
  pub yesterday:         &'static str,
  pub tomorrow:          &'static str,
  pub today:             &'static str,
  pub agenda:            &'static str,
  pub no_events_in_range: &'static str
}

impl Default for CalendarMessages {
  fn default() -> Self {
    Self {
      date:               "Date",
      time:               "Time",
      event:              "Event",
      all_day:            "All Day",
      week:               "Week",
      work_week:          "Work Week",
      day:                "Day",
      month:              "Month",
      previous:           "Back",
      next:               "Next",
      yesterday:          "Yesterday",
      tomorrow:           "Tomorrow",
      today:              "Today",
      agenda:             "Agenda",
      no_events_in_range:
        "There are no events in this range."
    }
  }
}

impl CalendarMessages {
  pub fn russian() -> Self {
    Self {
      date:               "Дата",
      time:               "Время",
      event:              "Событие",
      all_day:            "Весь день",
      week:               "Неделя",
      work_week:          "Рабочая неделя",
      day:                "День",
      month:              "Месяц",
      previous:           "Назад",
      next:               "Вперёд",
      yesterday:          "Вчера",
      tomorrow:           "Завтра",
      today:              "Сегодня",
      agenda:             "Сводка",
      no_events_in_range:
        "Нет событий в этом периоде."
    }
  }

  /// Key/label pairs under the names the
  /// stylesheet and tests refer to.
  pub fn entries(
    &self
  ) -> [(&'static str, &'static str); 15] {
    [
      ("date", self.date),
      ("time", self.time),
      ("event", self.event),
      ("allDay", self.all_day),
      ("week", self.week),
      ("work_week", self.work_week),
      ("day", self.day),
      ("month", self.month),
      ("previous", self.previous),
      ("next", self.next),
      ("yesterday", self.yesterday),
      ("tomorrow", self.tomorrow),
      ("today", self.today),
      ("agenda", self.agenda),
      (
        "noEventsInRange",
        self.no_events_in_range
      ),
    ]
  }
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct CalendarStyle {
  pub height:  Option<u32>,
  pub width:   Option<u32>,
  pub margin:  Option<u32>,
  pub padding: Option<u32>
}

impl CalendarStyle {
  pub fn fixed(
    width: u32,
    height: u32
  ) -> Self {
    Self {
      height:  Some(height),
      width:   Some(width),
      margin:  Some(0),
      padding: Some(0)
    }
  }

  pub fn to_css(&self) -> String {
    [
      ("height", self.height),
      ("margin", self.margin),
      ("padding", self.padding),
      ("width", self.width),
    ]
    .into_iter()
    .filter_map(|(name, value)| {
      value.map(|px| {
        if px == 0 {
          format!("{name}:0;")
        } else {
          format!("{name}:{px}px;")
        }
      })
    })
    .collect()
  }
}

/// Per-cell presentation returned by a
/// day prop getter.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct DayProps {
  pub class_name: Option<String>,
  pub style:      BTreeMap<String, String>
}

impl DayProps {
  pub fn with_class(
    class_name: impl Into<String>
  ) -> Self {
    Self {
      class_name: Some(class_name.into()),
      style:      BTreeMap::new()
    }
  }

  pub fn style_css(&self) -> String {
    self
      .style
      .iter()
      .map(|(name, value)| {
        format!("{name}:{value};")
      })
      .collect()
  }
}

pub type DayPropGetter =
  Rc<dyn Fn(NaiveDate) -> DayProps>;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DrillDown {
  /// Clicking a day opens the day view.
  Navigate,
  Suppressed
}

/// Everything the view backend needs to
/// draw a calendar.
#[derive(Clone)]
pub struct CalendarProps {
  pub localizer:       LocalizerHandle,
  pub culture:         String,
  pub formats:         CalendarFormats,
  pub events:          Vec<CalendarEvent>,
  pub messages:        CalendarMessages,
  pub class_name:      Option<String>,
  pub style:           CalendarStyle,
  /// Controlled date. When set, the
  /// calendar never moves on its own.
  pub date:            Option<NaiveDate>,
  pub default_date:    Option<NaiveDateTime>,
  pub toolbar:         bool,
  pub day_prop_getter: Option<DayPropGetter>,
  pub drill_down:      DrillDown,
  pub week_start:      Weekday,
  pub agenda_length_days: i64,
  pub day_hours:       (u32, u32)
}

impl CalendarProps {
  /// Backend defaults: English strings,
  /// toolbar shown, drill-down enabled.
  pub fn new(
    localizer: LocalizerHandle
  ) -> Self {
    Self {
      localizer,
      culture: "en".to_string(),
      formats: CalendarFormats::new(),
      events: Vec::new(),
      messages: CalendarMessages::default(),
      class_name: None,
      style: CalendarStyle::default(),
      date: None,
      default_date: None,
      toolbar: true,
      day_prop_getter: None,
      drill_down: DrillDown::Navigate,
      week_start: Weekday::Mon,
      agenda_length_days: 30,
      day_hours: (0, 23)
    }
  }

  /// Caller formatter for `key`, or the
  /// localizer with the key's default
  /// pattern.
  pub fn format(
    &self,
    key: FormatKey,
    date: NaiveDateTime
  ) -> String {
    self
      .formats
      .format(key, date, &self.culture)
      .unwrap_or_else(|| {
        self.localizer.format(
          date,
          key.default_pattern(),
          &self.culture
        )
      })
  }

  pub fn day_props(
    &self,
    day: NaiveDate
  ) -> DayProps {
    self
      .day_prop_getter
      .as_ref()
      .map(|getter| getter(day))
      .unwrap_or_default()
  }
}

impl PartialEq for CalendarProps {
  fn eq(&self, other: &Self) -> bool {
    let getters_match = match (
      &self.day_prop_getter,
      &other.day_prop_getter
    ) {
      | (Some(a), Some(b)) => {
        Rc::ptr_eq(a, b)
      }
      | (None, None) => true,
      | _ => false
    };

    getters_match
      && self.localizer == other.localizer
      && self.culture == other.culture
      && self.formats == other.formats
      && self.events == other.events
      && self.messages == other.messages
      && self.class_name
        == other.class_name
      && self.style == other.style
      && self.date == other.date
      && self.default_date
        == other.default_date
      && self.toolbar == other.toolbar
      && self.drill_down
        == other.drill_down
      && self.week_start
        == other.week_start
      && self.agenda_length_days
        == other.agenda_length_days
      && self.day_hours == other.day_hours
  }
}

impl fmt::Debug for CalendarProps {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_struct("CalendarProps")
      .field("culture", &self.culture)
      .field("formats", &self.formats)
      .field("events", &self.events.len())
      .field("date", &self.date)
      .field(
        "default_date",
        &self.default_date
      )
      .field("toolbar", &self.toolbar)
      .field("drill_down", &self.drill_down)
      .field("style", &self.style)
      .finish_non_exhaustive()
  }
}

/// Values the full calendar derives once
/// per localizer.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseCalendarModel {
  pub default_date: NaiveDateTime,
  pub formats:      CalendarFormats
}

impl BaseCalendarModel {
  pub fn derive(
    localizer: &LocalizerHandle,
    now: NaiveDateTime
  ) -> Self {
    let weekday_localizer =
      localizer.clone();
    Self {
      default_date: now,
      formats:      CalendarFormats::new()
        .with(
          FormatKey::WeekdayFormat,
          move |date, _culture| {
            weekday_localizer.format(
              date,
              WEEKDAY_PATTERN,
              CULTURE
            )
          }
        )
    }
  }

  #[tracing::instrument(skip_all)]
  pub fn props(
    &self,
    localizer: &LocalizerHandle,
    settings: &CalendarSettings
  ) -> CalendarProps {
    CalendarProps {
      culture: CULTURE.to_string(),
      formats: self.formats.clone(),
      events: Vec::new(),
      messages: CalendarMessages::russian(),
      class_name: Some(
        "calendar".to_string()
      ),
      default_date: Some(
        self.default_date
      ),
      week_start: settings
        .week_start_day(),
      agenda_length_days: settings
        .agenda
        .length_days,
      day_hours: (
        settings.day_view.hour_start,
        settings.day_view.hour_end
      ),
      ..CalendarProps::new(
        localizer.clone()
      )
    }
  }
}

/// Keeps the last derived model and
/// recomputes it only when a different
/// localizer arrives.
#[derive(Debug, Default)]
pub struct BaseCalendarMemo {
  cached: Option<(
    LocalizerHandle,
    BaseCalendarModel
  )>
}

impl BaseCalendarMemo {
  pub fn get(
    &mut self,
    localizer: &LocalizerHandle,
    now: impl FnOnce() -> NaiveDateTime
  ) -> &BaseCalendarModel {
    let stale = !matches!(
      &self.cached,
      Some((key, _)) if key == localizer
    );
    if stale {
      self.cached = None;
    }

    let (_, model) =
      self.cached.get_or_insert_with(|| {
        tracing::debug!(
          "deriving base calendar model"
        );
        (
          localizer.clone(),
          BaseCalendarModel::derive(
            localizer,
            now()
          )
        )
      });
    model
  }
}

/// Props for the fixed-size, read-only
/// month tile.
pub fn calendar_block_props(
  localizer: &LocalizerHandle,
  date: NaiveDate,
  formats: CalendarFormats,
  day_prop_getter: DayPropGetter
) -> CalendarProps {
  CalendarProps {
    culture: CULTURE.to_string(),
    formats,
    date: Some(date),
    toolbar: false,
    day_prop_getter: Some(
      day_prop_getter
    ),
    drill_down: DrillDown::Suppressed,
    style: CalendarStyle::fixed(
      BLOCK_SIZE_PX,
      BLOCK_SIZE_PX
    ),
    ..CalendarProps::new(localizer.clone())
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;
  use crate::localizer::{
    Localizer,
    TableLocalizer
  };

  struct EchoLocalizer;

  impl Localizer for EchoLocalizer {
    fn format(
      &self,
      _date: NaiveDateTime,
      pattern: &str,
      culture: &str
    ) -> String {
      format!("{pattern}@{culture}")
    }
  }

  fn noon(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
      .and_hms_opt(12, 0, 0)
      .expect("valid time")
  }

  #[test]
  fn base_calendar_is_russian_whatever_the_localizer(
  ) {
    let localizer =
      LocalizerHandle::new(EchoLocalizer);
    let model = BaseCalendarModel::derive(
      &localizer,
      noon(2026, 3, 2)
    );
    let props = model.props(
      &localizer,
      &CalendarSettings::default()
    );

    assert_eq!(props.culture, "ru");
    assert!(props.events.is_empty());
    assert!(props.toolbar);
    assert_eq!(
      props.drill_down,
      DrillDown::Navigate
    );
    assert!(
      props
        .messages
        .entries()
        .iter()
        .all(|(_, label)| !label.is_empty())
    );
    assert_eq!(props.messages.today, "Сегодня");
    assert_eq!(
      props.format(
        FormatKey::WeekdayFormat,
        noon(2026, 3, 2)
      ),
      "eeeeee@ru"
    );
  }

  #[test]
  fn unset_formats_fall_back_to_localizer()
  {
    let localizer =
      LocalizerHandle::new(TableLocalizer);
    let props = CalendarProps {
      culture: CULTURE.to_string(),
      ..CalendarProps::new(localizer)
    };

    assert_eq!(
      props.format(
        FormatKey::MonthHeaderFormat,
        noon(2026, 3, 2)
      ),
      "март 2026"
    );
  }

  #[test]
  fn memo_recomputes_only_for_new_localizer(
  ) {
    let first =
      LocalizerHandle::new(TableLocalizer);
    let second =
      LocalizerHandle::new(TableLocalizer);
    let calls = Cell::new(0);
    let mut memo =
      BaseCalendarMemo::default();

    let clock = || {
      calls.set(calls.get() + 1);
      noon(2026, 1, calls.get())
    };

    let initial =
      memo.get(&first, clock).default_date;
    let again =
      memo.get(&first, clock).default_date;
    assert_eq!(initial, again);
    assert_eq!(calls.get(), 1);

    let replaced =
      memo.get(&second, clock).default_date;
    assert_ne!(initial, replaced);
    assert_eq!(calls.get(), 2);
  }

  #[test]
  fn block_is_fixed_and_not_drillable() {
    let localizer =
      LocalizerHandle::new(TableLocalizer);
    let date = noon(2026, 7, 14).date();
    let getter: DayPropGetter =
      Rc::new(|_| DayProps::default());
    let props = calendar_block_props(
      &localizer,
      date,
      CalendarFormats::new(),
      getter
    );

    assert_eq!(props.culture, "ru");
    assert!(!props.toolbar);
    assert_eq!(props.date, Some(date));
    assert_eq!(
      props.drill_down,
      DrillDown::Suppressed
    );
    assert_eq!(
      props.style.to_css(),
      "height:300px;margin:0;padding:0;width:300px;"
    );
  }

  #[test]
  fn formats_compare_by_closure_identity() {
    let formats = CalendarFormats::new()
      .with(
        FormatKey::DateFormat,
        |_, _| "x".to_string()
      );
    let same = formats.clone();
    let other = CalendarFormats::new()
      .with(
        FormatKey::DateFormat,
        |_, _| "x".to_string()
      );

    assert_eq!(formats, same);
    assert_ne!(formats, other);
  }
}

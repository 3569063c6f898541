//! Calendar events as the views consume
//! them, plus client-side checks that
//! mirror the backend's write rules.

use calendula_shared::{
  ReadEventDto,
  WriteEventDto
};
use chrono::{
  DateTime,
  Duration,
  NaiveDate,
  NaiveDateTime,
  NaiveTime
};

use crate::error::EventError;

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
  pub id:       u64,
  pub title:    String,
  pub start:    NaiveDateTime,
  pub end:      NaiveDateTime,
  pub all_day:  bool,
  pub day_off:  bool,
  pub holiday:  bool,
  pub color:    Option<String>,
  pub calendar: Option<String>
}

impl CalendarEvent {
  /// Last calendar day the event touches.
  /// An end at midnight belongs to the
  /// previous day.
  pub fn last_day(&self) -> NaiveDate {
    if self.end > self.start
      && self.end.time() == NaiveTime::MIN
    {
      self.end.date() - Duration::days(1)
    } else {
      self.end.date()
    }
  }

  pub fn covers(
    &self,
    day: NaiveDate
  ) -> bool {
    self.start.date() <= day
      && day <= self.last_day()
  }
}

impl TryFrom<&ReadEventDto>
  for CalendarEvent
{
  type Error = EventError;

  fn try_from(
    dto: &ReadEventDto
  ) -> Result<Self, Self::Error> {
    let start = parse_event_datetime(
      &dto.datetime_start
    )?;
    let end = match dto
      .datetime_finish
      .as_deref()
    {
      | Some(raw)
        if !raw.trim().is_empty() =>
      {
        parse_event_datetime(raw)?
      }
      | _ => start
    };

    Ok(Self {
      id: dto.id,
      title: dto.name.clone(),
      start,
      end: end.max(start),
      all_day: dto.all_day,
      day_off: dto.day_off,
      holiday: dto.holiday,
      color: Some(
        dto.category.color.clone()
      )
      .filter(|color| !color.is_empty()),
      calendar: Some(
        dto.calendar.name.clone()
      )
    })
  }
}

/// Converts backend events, skipping the
/// ones whose dates do not parse.
pub fn events_from_dtos(
  dtos: &[ReadEventDto]
) -> Vec<CalendarEvent> {
  dtos
    .iter()
    .filter_map(|dto| {
      match CalendarEvent::try_from(dto) {
        | Ok(event) => Some(event),
        | Err(error) => {
          tracing::warn!(
            id = dto.id,
            %error,
            "skipping event with invalid dates"
          );
          None
        }
      }
    })
    .collect()
}

/// Accepts RFC 3339 (offset dropped, local
/// wall time kept), naive ISO datetimes
/// with or without seconds, and bare dates.
pub fn parse_event_datetime(
  raw: &str
) -> Result<NaiveDateTime, EventError> {
  let trimmed = raw.trim();

  if let Ok(dt) =
    DateTime::parse_from_rfc3339(trimmed)
  {
    return Ok(dt.naive_local());
  }

  for format in [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
  ] {
    if let Ok(dt) =
      NaiveDateTime::parse_from_str(
        trimmed, format
      )
    {
      return Ok(dt);
    }
  }

  NaiveDate::parse_from_str(
    trimmed, "%Y-%m-%d"
  )
  .map(|date| date.and_time(NaiveTime::MIN))
  .map_err(|_| {
    EventError::InvalidDatetime(
      trimmed.to_string()
    )
  })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
  pub datetime_start:  Option<String>,
  pub datetime_finish: Option<String>,
  pub all_day:         bool,
  pub name:            String,
  pub description:     Option<String>,
  pub day_off:         bool,
  pub holiday:         bool,
  pub category:        Option<u64>,
  pub calendar:        Option<u64>
}

impl EventDraft {
  /// Collects every problem instead of
  /// stopping at the first one.
  pub fn validate(
    &self
  ) -> Result<WriteEventDto, Vec<EventError>>
  {
    let mut errors = Vec::new();

    let start = match self
      .datetime_start
      .as_deref()
      .map(str::trim)
    {
      | None | Some("") => {
        errors.push(EventError::MissingStart);
        None
      }
      | Some(raw) => {
        match parse_event_datetime(raw) {
          | Ok(_) => Some(raw.to_string()),
          | Err(error) => {
            errors.push(error);
            None
          }
        }
      }
    };

    let finish = match self
      .datetime_finish
      .as_deref()
      .map(str::trim)
    {
      | None | Some("") => None,
      | Some(raw) => {
        if let Err(error) =
          parse_event_datetime(raw)
        {
          errors.push(error);
        }
        Some(raw.to_string())
      }
    };

    if self.category.is_none() {
      errors.push(
        EventError::MissingCategory
      );
    }
    if self.calendar.is_none() {
      errors.push(
        EventError::MissingCalendar
      );
    }

    match (start, self.category, self.calendar)
    {
      | (Some(start), Some(category), Some(calendar))
        if errors.is_empty() =>
      {
        Ok(WriteEventDto {
          id: None,
          datetime_start: start,
          datetime_finish: finish,
          all_day: self.all_day,
          name: self.name.trim().to_string(),
          description: self
            .description
            .clone()
            .filter(|text| {
              !text.trim().is_empty()
            }),
          day_off: self.day_off,
          holiday: self.holiday,
          category,
          calendar
        })
      }
      | _ => Err(errors)
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarDraft {
  pub name:        Option<String>,
  pub description: Option<String>
}

impl CalendarDraft {
  /// Returns the trimmed name.
  pub fn validate(
    &self
  ) -> Result<String, EventError> {
    self
      .name
      .as_deref()
      .map(str::trim)
      .filter(|name| !name.is_empty())
      .map(str::to_string)
      .ok_or(EventError::MissingCalendarName)
  }
}

#[cfg(test)]
mod tests {
  use calendula_shared::{
    CategoryDto,
    ShortCalendarDto
  };

  use super::*;

  fn read_dto(
    start: &str,
    finish: Option<&str>
  ) -> ReadEventDto {
    ReadEventDto {
      id:              1,
      datetime_start:  start.to_string(),
      datetime_finish: finish
        .map(str::to_string),
      all_day:         false,
      name:            "Планёрка".to_string(),
      description:     None,
      day_off:         false,
      holiday:         false,
      category:        CategoryDto {
        id:    3,
        name:  "Работа".to_string(),
        color: "#3366ff".to_string()
      },
      calendar:        ShortCalendarDto {
        id:   4,
        name: "Личный".to_string()
      }
    }
  }

  fn day(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  #[test]
  fn converts_rfc3339_and_defaults_finish()
  {
    let event = CalendarEvent::try_from(
      &read_dto(
        "2026-04-10T09:30:00+03:00",
        None
      )
    )
    .expect("convert event");

    assert_eq!(
      event.start,
      day(2026, 4, 10)
        .and_hms_opt(9, 30, 0)
        .expect("valid time")
    );
    assert_eq!(event.end, event.start);
    assert_eq!(
      event.color.as_deref(),
      Some("#3366ff")
    );
  }

  #[test]
  fn midnight_end_excludes_last_day() {
    let event = CalendarEvent::try_from(
      &read_dto(
        "2026-05-01",
        Some("2026-05-03T00:00:00")
      )
    )
    .expect("convert event");

    assert!(event.covers(day(2026, 5, 1)));
    assert!(event.covers(day(2026, 5, 2)));
    assert!(!event.covers(day(2026, 5, 3)));
  }

  #[test]
  fn invalid_dates_are_skipped_in_bulk() {
    let events = events_from_dtos(&[
      read_dto("завтра", None),
      read_dto("2026-04-10 10:00", None),
    ]);
    assert_eq!(events.len(), 1);
  }

  #[test]
  fn draft_reports_every_missing_field() {
    let errors = EventDraft::default()
      .validate()
      .expect_err("empty draft");

    assert_eq!(errors, vec![
      EventError::MissingStart,
      EventError::MissingCategory,
      EventError::MissingCalendar,
    ]);
  }

  #[test]
  fn draft_rejects_malformed_start() {
    let errors = EventDraft {
      datetime_start: Some(
        "10 апреля".to_string()
      ),
      category: Some(1),
      calendar: Some(2),
      ..EventDraft::default()
    }
    .validate()
    .expect_err("bad start");

    assert_eq!(
      errors[0].to_string(),
      "Неправильный формат даты и времени"
    );
  }

  #[test]
  fn valid_draft_builds_write_payload() {
    let payload = EventDraft {
      datetime_start: Some(
        "2026-04-10T10:00".to_string()
      ),
      name: "  Встреча ".to_string(),
      description: Some(" ".to_string()),
      category: Some(1),
      calendar: Some(2),
      ..EventDraft::default()
    }
    .validate()
    .expect("valid draft");

    assert_eq!(payload.name, "Встреча");
    assert_eq!(payload.description, None);
    assert_eq!(payload.category, 1);
    assert_eq!(payload.calendar, 2);
  }

  #[test]
  fn calendar_name_is_required() {
    assert_eq!(
      CalendarDraft {
        name:        Some("  ".to_string()),
        description: None
      }
      .validate(),
      Err(EventError::MissingCalendarName)
    );
  }
}

use anyhow::Context;
use chrono::{
  NaiveDate,
  NaiveDateTime,
  Utc,
  Weekday
};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::{
  debug,
  error,
  info,
  warn
};

pub const DEFAULT_TIMEZONE: &str =
  "Europe/Moscow";

/// Longest agenda window, one leap year.
pub const MAX_AGENDA_LENGTH_DAYS: i64 = 366;

fn default_timezone() -> String {
  DEFAULT_TIMEZONE.to_string()
}

fn default_week_start() -> String {
  "monday".to_string()
}

fn default_agenda_length_days() -> i64 {
  30
}

fn default_day_view_hour_end() -> u32 {
  23
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct CalendarSettings {
  #[serde(default)]
  pub version:    u32,
  #[serde(default = "default_timezone")]
  pub timezone:   String,
  #[serde(default = "default_week_start")]
  pub week_start: String,
  #[serde(default)]
  pub agenda:     AgendaSettings,
  #[serde(default)]
  pub day_view:   DayViewSettings
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct AgendaSettings {
  #[serde(
    default = "default_agenda_length_days"
  )]
  pub length_days: i64
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
pub struct DayViewSettings {
  #[serde(default)]
  pub hour_start: u32,
  #[serde(
    default = "default_day_view_hour_end"
  )]
  pub hour_end:   u32
}

impl Default for CalendarSettings {
  fn default() -> Self {
    Self {
      version:    1,
      timezone:   default_timezone(),
      week_start: default_week_start(),
      agenda:     AgendaSettings::default(),
      day_view:   DayViewSettings::default()
    }
  }
}

impl Default for AgendaSettings {
  fn default() -> Self {
    Self {
      length_days:
        default_agenda_length_days()
    }
  }
}

impl Default for DayViewSettings {
  fn default() -> Self {
    Self {
      hour_start: 0,
      hour_end:   default_day_view_hour_end(
      )
    }
  }
}

impl CalendarSettings {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut settings =
      toml::from_str::<Self>(raw)
        .context(
          "failed to parse calendar \
           settings"
        )?;
    settings.sanitize();
    Ok(settings)
  }

  /// Parses embedded settings, falling
  /// back to defaults on error.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(settings) => {
        info!(
          version = settings.version,
          timezone = %settings.timezone,
          week_start = %settings.week_start,
          "loaded calendar settings"
        );
        settings
      }
      | Err(error) => {
        error!(?error, "failed parsing calendar settings; using defaults");
        Self::default()
      }
    }
  }

  pub fn sanitize(&mut self) {
    if self.timezone.trim().is_empty() {
      self.timezone = default_timezone();
    }

    if self
      .week_start
      .trim()
      .is_empty()
    {
      self.week_start =
        default_week_start();
    }

    if self.agenda.length_days
      > MAX_AGENDA_LENGTH_DAYS
    {
      debug!(
        length_days =
          self.agenda.length_days,
        "agenda length capped"
      );
      self.agenda.length_days =
        MAX_AGENDA_LENGTH_DAYS;
    }

    if self.agenda.length_days <= 0 {
      debug!(
        length_days =
          self.agenda.length_days,
        "agenda length out of range"
      );
      self.agenda.length_days =
        default_agenda_length_days();
    }

    if self.day_view.hour_start > 23 {
      self.day_view.hour_start = 23;
    }
    if self.day_view.hour_end > 23 {
      self.day_view.hour_end = 23;
    }
    if self.day_view.hour_end
      < self.day_view.hour_start
    {
      self.day_view.hour_end =
        self.day_view.hour_start;
    }
  }

  pub fn timezone(&self) -> Tz {
    let trimmed = self.timezone.trim();
    match trimmed.parse::<Tz>() {
      | Ok(tz) => tz,
      | Err(error) => {
        warn!(
          timezone = %trimmed,
          error = %error,
          "invalid timezone id; using default"
        );
        chrono_tz::Europe::Moscow
      }
    }
  }

  pub fn week_start_day(&self) -> Weekday {
    if self
      .week_start
      .trim()
      .eq_ignore_ascii_case("sunday")
    {
      Weekday::Sun
    } else {
      Weekday::Mon
    }
  }

  /// Wall-clock time in the configured
  /// timezone.
  pub fn now(&self) -> NaiveDateTime {
    Utc::now()
      .with_timezone(&self.timezone())
      .naive_local()
  }

  pub fn today(&self) -> NaiveDate {
    self.now().date()
  }
}

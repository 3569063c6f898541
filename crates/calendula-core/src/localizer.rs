//! Date formatting for calendar views.
//!
//! Patterns use date-fns style tokens
//! (`eeeeee`, `LLLL`, `d MMMM yyyy`,
//! `HH:mm`). Text between single quotes is
//! copied verbatim.

use std::fmt;
use std::rc::Rc;

use chrono::{
  Datelike,
  NaiveDateTime,
  Timelike
};

pub trait Localizer {
  fn format(
    &self,
    date: NaiveDateTime,
    pattern: &str,
    culture: &str
  ) -> String;
}

/// Shared localizer. Two handles are equal
/// only when they point at the same
/// instance, which makes the handle usable
/// as a memoization key.
#[derive(Clone)]
pub struct LocalizerHandle(
  Rc<dyn Localizer>
);

impl LocalizerHandle {
  pub fn new(
    localizer: impl Localizer + 'static
  ) -> Self {
    Self(Rc::new(localizer))
  }

  pub fn format(
    &self,
    date: NaiveDateTime,
    pattern: &str,
    culture: &str
  ) -> String {
    self.0.format(date, pattern, culture)
  }
}

impl PartialEq for LocalizerHandle {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

impl fmt::Debug for LocalizerHandle {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_tuple("LocalizerHandle")
      .field(&Rc::as_ptr(&self.0))
      .finish()
  }
}

struct CultureTable {
  weekdays_short:       [&'static str; 7],
  weekdays_abbr:        [&'static str; 7],
  weekdays_wide:        [&'static str; 7],
  weekdays_narrow:      [&'static str; 7],
  months_wide:          [&'static str; 12],
  months_abbr:          [&'static str; 12],
  months_standalone:    [&'static str; 12],
  months_standalone_abbr: [&'static str; 12]
}

// Weekday arrays start on Sunday.
const RU: CultureTable = CultureTable {
  weekdays_short:         [
    "вс", "пн", "вт", "ср", "чт", "пт",
    "сб",
  ],
  weekdays_abbr:          [
    "вск", "пнд", "втр", "срд", "чтв",
    "птн", "суб",
  ],
  weekdays_wide:          [
    "воскресенье",
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
  ],
  weekdays_narrow:        [
    "В", "П", "В", "С", "Ч", "П", "С",
  ],
  months_wide:            [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
  ],
  months_abbr:            [
    "янв.", "февр.", "мар.", "апр.",
    "мая", "июн.", "июл.", "авг.",
    "сент.", "окт.", "нояб.", "дек.",
  ],
  months_standalone:      [
    "январь",
    "февраль",
    "март",
    "апрель",
    "май",
    "июнь",
    "июль",
    "август",
    "сентябрь",
    "октябрь",
    "ноябрь",
    "декабрь",
  ],
  months_standalone_abbr: [
    "янв.", "февр.", "март", "апр.",
    "май", "июнь", "июль", "авг.",
    "сент.", "окт.", "нояб.", "дек.",
  ]
};

const EN: CultureTable = CultureTable {
  weekdays_short:         [
    "Su", "Mo", "Tu", "We", "Th", "Fr",
    "Sa",
  ],
  weekdays_abbr:          [
    "Sun", "Mon", "Tue", "Wed", "Thu",
    "Fri", "Sat",
  ],
  weekdays_wide:          [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
  ],
  weekdays_narrow:        [
    "S", "M", "T", "W", "T", "F", "S",
  ],
  months_wide:            [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
  ],
  months_abbr:            [
    "Jan", "Feb", "Mar", "Apr", "May",
    "Jun", "Jul", "Aug", "Sep", "Oct",
    "Nov", "Dec",
  ],
  months_standalone:      [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
  ],
  months_standalone_abbr: [
    "Jan", "Feb", "Mar", "Apr", "May",
    "Jun", "Jul", "Aug", "Sep", "Oct",
    "Nov", "Dec",
  ]
};

/// Table-driven localizer for `ru` and
/// `en`. Unknown cultures format in
/// English.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLocalizer;

impl TableLocalizer {
  fn table(
    culture: &str
  ) -> &'static CultureTable {
    let lang = culture
      .split(['-', '_'])
      .next()
      .unwrap_or_default();
    if lang.eq_ignore_ascii_case("ru") {
      &RU
    } else {
      if !lang.eq_ignore_ascii_case("en")
      {
        tracing::warn!(
          culture,
          "unsupported culture; \
           formatting in English"
        );
      }
      &EN
    }
  }
}

impl Localizer for TableLocalizer {
  fn format(
    &self,
    date: NaiveDateTime,
    pattern: &str,
    culture: &str
  ) -> String {
    let table = Self::table(culture);
    let mut out = String::new();
    for token in tokenize(pattern) {
      match token {
        | Token::Literal(text) => {
          out.push_str(&text)
        }
        | Token::Field(letter, width) => {
          out.push_str(&format_field(
            table, date, letter, width
          ))
        }
      }
    }
    out
  }
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
  Literal(String),
  Field(char, usize)
}

fn tokenize(pattern: &str) -> Vec<Token> {
  let mut tokens = Vec::new();
  let mut chars =
    pattern.chars().peekable();

  while let Some(ch) = chars.next() {
    if ch == '\'' {
      let mut text = String::new();
      while let Some(next) = chars.next()
      {
        if next == '\'' {
          if chars.peek() == Some(&'\'') {
            chars.next();
            text.push('\'');
            continue;
          }
          break;
        }
        text.push(next);
      }
      if text.is_empty() {
        text.push('\'');
      }
      tokens.push(Token::Literal(text));
    } else if ch.is_ascii_alphabetic() {
      let mut width = 1;
      while chars.peek() == Some(&ch) {
        chars.next();
        width += 1;
      }
      tokens.push(Token::Field(ch, width));
    } else {
      match tokens.last_mut() {
        | Some(Token::Literal(text)) => {
          text.push(ch)
        }
        | _ => {
          tokens.push(Token::Literal(
            ch.to_string()
          ))
        }
      }
    }
  }

  tokens
}

fn format_field(
  table: &CultureTable,
  date: NaiveDateTime,
  letter: char,
  width: usize
) -> String {
  let weekday = date
    .weekday()
    .num_days_from_sunday()
    as usize;
  let month = date.month0() as usize;

  match (letter, width) {
    | ('d', 1) => date.day().to_string(),
    | ('d', _) => {
      format!("{:02}", date.day())
    }
    | ('M' | 'L', 1) => {
      date.month().to_string()
    }
    | ('M' | 'L', 2) => {
      format!("{:02}", date.month())
    }
    | ('M', 3) => {
      table.months_abbr[month].to_string()
    }
    | ('M', _) => {
      table.months_wide[month].to_string()
    }
    | ('L', 3) => {
      table.months_standalone_abbr[month]
        .to_string()
    }
    | ('L', _) => {
      table.months_standalone[month]
        .to_string()
    }
    | ('y', 2) => {
      format!("{:02}", date.year() % 100)
    }
    | ('y', _) => date.year().to_string(),
    | ('e' | 'c', 1 | 2) => {
      // Local day of week, Monday first.
      date
        .weekday()
        .number_from_monday()
        .to_string()
    }
    | ('e' | 'c' | 'E', 6) => {
      table.weekdays_short[weekday]
        .to_string()
    }
    | ('e' | 'c' | 'E', 5) => {
      table.weekdays_narrow[weekday]
        .to_string()
    }
    | ('e' | 'c' | 'E', 4) => {
      table.weekdays_wide[weekday]
        .to_string()
    }
    | ('e' | 'c' | 'E', _) => {
      table.weekdays_abbr[weekday]
        .to_string()
    }
    | ('H', 1) => date.hour().to_string(),
    | ('H', _) => {
      format!("{:02}", date.hour())
    }
    | ('m', 1) => {
      date.minute().to_string()
    }
    | ('m', _) => {
      format!("{:02}", date.minute())
    }
    | _ => {
      tracing::warn!(
        %letter,
        width,
        "unsupported format token; \
         copying it verbatim"
      );
      letter.to_string().repeat(width)
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn sample() -> NaiveDateTime {
    // Monday.
    NaiveDate::from_ymd_opt(2026, 3, 2)
      .expect("valid date")
      .and_hms_opt(9, 5, 0)
      .expect("valid time")
  }

  #[test]
  fn two_letter_weekday_in_russian() {
    assert_eq!(
      TableLocalizer.format(
        sample(),
        "eeeeee",
        "ru"
      ),
      "пн"
    );
    assert_eq!(
      TableLocalizer.format(
        sample(),
        "eeeeee",
        "en-US"
      ),
      "Mo"
    );
  }

  #[test]
  fn month_forms_follow_context() {
    assert_eq!(
      TableLocalizer.format(
        sample(),
        "LLLL yyyy",
        "ru"
      ),
      "март 2026"
    );
    assert_eq!(
      TableLocalizer.format(
        sample(),
        "eeee, d MMMM",
        "ru"
      ),
      "понедельник, 2 марта"
    );
  }

  #[test]
  fn quoted_text_and_times() {
    assert_eq!(
      TableLocalizer.format(
        sample(),
        "HH:mm 'в' dd.MM.yy",
        "ru"
      ),
      "09:05 в 02.03.26"
    );
  }

  #[test]
  fn unknown_culture_falls_back_to_english(
  ) {
    assert_eq!(
      TableLocalizer.format(
        sample(),
        "eeee",
        "xx"
      ),
      "Monday"
    );
  }

  #[test]
  fn handles_compare_by_identity() {
    let first =
      LocalizerHandle::new(TableLocalizer);
    let second =
      LocalizerHandle::new(TableLocalizer);

    assert_eq!(first, first.clone());
    assert_ne!(first, second);
  }
}

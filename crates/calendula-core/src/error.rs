//! User-facing validation errors. The
//! `Display` text of each variant is the
//! message rendered next to the control.

use thiserror::Error;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum FieldError {
  #[error("Обязательное поле.")]
  Required,

  #[error("Максимальная длина {0} символа.")]
  MaxLength(usize),

  #[error("Буквы, цифры, точка, _, +, - или %")]
  UsernamePattern,

  #[error(
    "Не корректный email. Например: \
     example@email.ru"
  )]
  EmailPattern
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum EventError {
  #[error("Дата начала мероприятия отсутствует")]
  MissingStart,

  #[error("Неправильный формат даты и времени")]
  InvalidDatetime(String),

  #[error("Не выбрана категория")]
  MissingCategory,

  #[error("Не выбран календарь")]
  MissingCalendar,

  #[error("Не задано название календаря")]
  MissingCalendarName
}

//! State behind the profile edit dialog.
//!
//! Validation runs on every change. Errors
//! are reported only for fields the user
//! touched, while `is_valid` always covers
//! the whole form.

use std::collections::{
  BTreeMap,
  BTreeSet
};
use std::sync::OnceLock;

use anyhow::Context;
use calendula_shared::{
  UserProfile,
  UserUpdate
};
use regex::Regex;
use tracing::debug;

use crate::error::FieldError;

pub const USERNAME_MAX_LEN: usize = 42;

fn username_regex() -> &'static Regex {
  static RE: OnceLock<Regex> =
    OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(
      r"^[A-Za-zА-Яа-я0-9._%+\-\s]{1,42}$"
    )
    .expect("username pattern compiles")
  })
}

fn email_regex() -> &'static Regex {
  static RE: OnceLock<Regex> =
    OnceLock::new();
  RE.get_or_init(|| {
    Regex::new(
      r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$"
    )
    .expect("email pattern compiles")
  })
}

pub fn validate_username(
  value: &str
) -> Result<(), FieldError> {
  if value.is_empty() {
    return Err(FieldError::Required);
  }
  if value.chars().count()
    > USERNAME_MAX_LEN
  {
    return Err(FieldError::MaxLength(
      USERNAME_MAX_LEN
    ));
  }
  if !username_regex().is_match(value) {
    return Err(
      FieldError::UsernamePattern
    );
  }
  Ok(())
}

/// Empty input passes: the address is
/// optional, only its shape is checked.
pub fn validate_email(
  value: &str
) -> Result<(), FieldError> {
  if value.is_empty()
    || email_regex().is_match(value)
  {
    Ok(())
  } else {
    Err(FieldError::EmailPattern)
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub enum UserField {
  Username,
  Email,
  Picture,
  DarkMode
}

impl UserField {
  pub fn all() -> [Self; 4] {
    [
      Self::Username,
      Self::Email,
      Self::Picture,
      Self::DarkMode
    ]
  }

  pub fn name(self) -> &'static str {
    match self {
      | Self::Username => "username",
      | Self::Email => "email",
      | Self::Picture => "picture",
      | Self::DarkMode => "darkMode"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Username => "Имя",
      | Self::Email => "Email",
      | Self::Picture => "Ссылка на фото",
      | Self::DarkMode => "Тёмная тема"
    }
  }
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct UserFormValues {
  pub username:  String,
  pub email:     String,
  pub picture:   String,
  pub dark_mode: bool
}

impl UserFormValues {
  pub fn from_profile(
    profile: &UserProfile
  ) -> Self {
    Self {
      username:  profile
        .username
        .clone()
        .unwrap_or_default(),
      email:     profile.email.clone(),
      picture:   profile
        .picture
        .clone()
        .unwrap_or_default(),
      dark_mode: profile.dark_mode
    }
  }

  /// Payload sent upward. A blank picture
  /// becomes `None`; dark mode stays out.
  pub fn to_update(&self) -> UserUpdate {
    UserUpdate {
      email:    self.email.clone(),
      username: self.username.clone(),
      picture:  Some(self.picture.clone())
        .filter(|picture| {
          !picture.is_empty()
        })
    }
  }

  fn check(
    &self,
    field: UserField
  ) -> Result<(), FieldError> {
    match field {
      | UserField::Username => {
        validate_username(&self.username)
      }
      | UserField::Email => {
        validate_email(&self.email)
      }
      | UserField::Picture
      | UserField::DarkMode => Ok(())
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
  Username(String),
  Email(String),
  Picture(String),
  DarkMode(bool)
}

impl FieldChange {
  pub fn field(&self) -> UserField {
    match self {
      | Self::Username(_) => {
        UserField::Username
      }
      | Self::Email(_) => UserField::Email,
      | Self::Picture(_) => {
        UserField::Picture
      }
      | Self::DarkMode(_) => {
        UserField::DarkMode
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
  values:  UserFormValues,
  errors:  BTreeMap<UserField, FieldError>,
  touched: BTreeSet<UserField>
}

impl UserForm {
  pub fn new(profile: &UserProfile) -> Self {
    Self {
      values:  UserFormValues::from_profile(
        profile
      ),
      errors:  BTreeMap::new(),
      touched: BTreeSet::new()
    }
  }

  pub fn values(&self) -> &UserFormValues {
    &self.values
  }

  pub fn errors(
    &self
  ) -> &BTreeMap<UserField, FieldError> {
    &self.errors
  }

  pub fn error(
    &self,
    field: UserField
  ) -> Option<&FieldError> {
    self.errors.get(&field)
  }

  pub fn is_touched(
    &self,
    field: UserField
  ) -> bool {
    self.touched.contains(&field)
  }

  pub fn is_valid(&self) -> bool {
    UserField::all().into_iter().all(
      |field| {
        self.values.check(field).is_ok()
      }
    )
  }

  pub fn change(
    &mut self,
    change: FieldChange
  ) {
    let field = change.field();
    match change {
      | FieldChange::Username(value) => {
        self.values.username = value
      }
      | FieldChange::Email(value) => {
        self.values.email = value
      }
      | FieldChange::Picture(value) => {
        self.values.picture = value
      }
      | FieldChange::DarkMode(value) => {
        self.values.dark_mode = value
      }
    }
    self.touched.insert(field);
    self.revalidate(field);
    debug!(
      field = field.name(),
      valid = self.is_valid(),
      "profile form changed"
    );
  }

  fn revalidate(
    &mut self,
    field: UserField
  ) {
    match self.values.check(field) {
      | Ok(()) => {
        self.errors.remove(&field);
      }
      | Err(error) => {
        self.errors.insert(field, error);
      }
    }
  }

  /// Submits the form when it is valid.
  ///
  /// On success the payload goes to
  /// `on_update_user`, the host is closed
  /// through `set_visible(false)` and the
  /// form is cleared. An invalid form only
  /// surfaces all of its errors and yields
  /// `Ok(None)`. A failing `on_update_user`
  /// aborts before the host is closed.
  #[tracing::instrument(skip_all)]
  pub fn submit<U, V>(
    &mut self,
    on_update_user: U,
    set_visible: V
  ) -> anyhow::Result<Option<UserUpdate>>
  where
    U: FnOnce(
      UserUpdate
    ) -> anyhow::Result<()>,
    V: FnOnce(bool)
  {
    if !self.is_valid() {
      for field in UserField::all() {
        self.touched.insert(field);
        self.revalidate(field);
      }
      debug!(
        errors = self.errors.len(),
        "profile form submit blocked"
      );
      return Ok(None);
    }

    let payload = self.values.to_update();
    on_update_user(payload.clone())
      .context("profile update failed")?;
    set_visible(false);
    self.reset();
    debug!("profile form submitted");
    Ok(Some(payload))
  }

  /// Clears every control and all
  /// validation state.
  pub fn reset(&mut self) {
    self.values = UserFormValues::default();
    self.errors.clear();
    self.touched.clear();
  }
}

use serde::{
  Deserialize,
  Serialize
};

/// Profile of the signed-in user as the
/// backend hands it to the frontend.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
  #[serde(default)]
  pub username:  Option<String>,
  #[serde(default)]
  pub email:     String,
  #[serde(default)]
  pub picture:   Option<String>,
  #[serde(default)]
  pub dark_mode: bool
}

/// Payload emitted by the profile edit
/// form. `picture` is `None` when the
/// control was left blank.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct UserUpdate {
  pub email:    String,
  pub username: String,
  pub picture:  Option<String>
}

impl UserProfile {
  pub fn apply_update(
    &self,
    update: &UserUpdate
  ) -> Self {
    Self {
      username:  Some(
        update.username.clone()
      ),
      email:     update.email.clone(),
      picture:   update.picture.clone(),
      dark_mode: self.dark_mode
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct CalendarDto {
  pub id:          u64,
  pub name:        String,
  #[serde(default)]
  pub description: Option<String>,
  pub owner:       Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ShortCalendarDto {
  pub id:   u64,
  pub name: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct CategoryDto {
  pub id:    u64,
  pub name:  String,
  pub color: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ReadEventDto {
  pub id:              u64,
  pub datetime_start:  String,
  pub datetime_finish: Option<String>,
  #[serde(default)]
  pub all_day:         bool,
  #[serde(default)]
  pub name:            String,
  #[serde(default)]
  pub description:     Option<String>,
  #[serde(default)]
  pub day_off:         bool,
  #[serde(default)]
  pub holiday:         bool,
  pub category:        CategoryDto,
  pub calendar:        ShortCalendarDto
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct WriteEventDto {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id:              Option<u64>,
  pub datetime_start:  String,
  pub datetime_finish: Option<String>,
  pub all_day:         bool,
  pub name:            String,
  pub description:     Option<String>,
  pub day_off:         bool,
  pub holiday:         bool,
  pub category:        u64,
  pub calendar:        u64
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn profile_reads_camel_case_and_nulls()
  {
    let raw = r#"{
      "username": null,
      "email": "ivan@example.ru",
      "picture": null,
      "darkMode": true
    }"#;
    let profile: UserProfile =
      serde_json::from_str(raw)
        .expect("parse profile");

    assert_eq!(profile.username, None);
    assert_eq!(profile.picture, None);
    assert!(profile.dark_mode);
  }

  #[test]
  fn update_serializes_blank_picture_as_null()
  {
    let update = UserUpdate {
      email:    "a@b.co".to_string(),
      username: "Ivan".to_string(),
      picture:  None
    };
    let value =
      serde_json::to_value(&update)
        .expect("serialize update");

    assert!(value["picture"].is_null());
    assert!(value.get("darkMode").is_none());
    assert!(value.get("dark_mode").is_none());
  }

  #[test]
  fn apply_update_keeps_dark_mode() {
    let profile = UserProfile {
      username:  Some("old".to_string()),
      email:     "old@mail.ru".to_string(),
      picture:   Some("p.png".to_string()),
      dark_mode: true
    };
    let next =
      profile.apply_update(&UserUpdate {
        email:    "new@mail.ru".to_string(),
        username: "new".to_string(),
        picture:  None
      });

    assert_eq!(
      next.username.as_deref(),
      Some("new")
    );
    assert_eq!(next.picture, None);
    assert!(next.dark_mode);
  }

  #[test]
  fn read_event_parses_nested_objects() {
    let raw = r##"{
      "id": 7,
      "datetime_start": "2026-05-01T00:00:00+03:00",
      "datetime_finish": null,
      "all_day": true,
      "name": "Праздник весны и труда",
      "description": null,
      "day_off": true,
      "holiday": true,
      "category": {"id": 1, "name": "Праздники", "color": "#ff0000"},
      "calendar": {"id": 2, "name": "Производственный"}
    }"##;
    let event: ReadEventDto =
      serde_json::from_str(raw)
        .expect("parse event");

    assert_eq!(event.id, 7);
    assert!(event.holiday);
    assert_eq!(event.category.color, "#ff0000");
    assert_eq!(event.calendar.id, 2);
  }
}

use calendula_core::config::CalendarSettings;
use calendula_core::event::{
  CalendarEvent,
  events_from_dtos
};
use calendula_core::localizer::{
  LocalizerHandle,
  TableLocalizer
};
use calendula_shared::{
  ReadEventDto,
  UserProfile,
  UserUpdate
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  classes,
  function_component,
  html,
  use_memo,
  use_state
};

use crate::components::Main;
use crate::form_edit_user::FormEditUser;

const CALENDAR_SETTINGS_TOML: &str =
  include_str!("../assets/calendar.toml");
const SEED_PROFILE_JSON: &str =
  include_str!("../assets/profile.json");
const HOLIDAYS_JSON: &str =
  include_str!("../assets/holidays.json");

// No HTTP layer yet: the signed-in user
// and the holiday list are bundled.
fn load_seed_profile() -> UserProfile {
  match serde_json::from_str::<UserProfile>(
    SEED_PROFILE_JSON
  ) {
    | Ok(profile) => profile,
    | Err(error) => {
      tracing::error!(%error, "failed parsing bundled profile; starting anonymous");
      UserProfile::default()
    }
  }
}

fn load_holidays() -> Vec<CalendarEvent> {
  match serde_json::from_str::<
    Vec<ReadEventDto>
  >(HOLIDAYS_JSON)
  {
    | Ok(dtos) => {
      let events = events_from_dtos(&dtos);
      tracing::info!(
        count = events.len(),
        "loaded bundled holidays"
      );
      events
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing bundled holidays");
      Vec::new()
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let settings = use_memo((), |_| {
    CalendarSettings::load_or_default(
      CALENDAR_SETTINGS_TOML
    )
  });
  let localizer = use_memo((), |_| {
    LocalizerHandle::new(TableLocalizer)
  });
  let holidays =
    use_memo((), |_| load_holidays());
  let current_user =
    use_state(load_seed_profile);
  let dialog_visible =
    use_state(|| false);

  let set_visible = {
    let dialog_visible =
      dialog_visible.clone();
    Callback::from(move |visible: bool| {
      tracing::debug!(
        visible,
        "profile dialog visibility"
      );
      dialog_visible.set(visible);
    })
  };

  let on_update_user = {
    let current_user =
      current_user.clone();
    Callback::from(
      move |update: UserUpdate| {
        tracing::info!(
          username = %update.username,
          has_picture = update.picture.is_some(),
          "profile updated"
        );
        current_user.set(
          current_user
            .apply_update(&update)
        );
      }
    )
  };

  let on_edit_profile =
    set_visible.reform(
      |_: MouseEvent| true
    );
  let on_close_dialog =
    set_visible.reform(
      |_: MouseEvent| false
    );

  html! {
      <div class={classes!("app", current_user.dark_mode.then_some("night"))}>
          <Main
              localizer={(*localizer).clone()}
              settings={settings.clone()}
              holidays={holidays.clone()}
              current_user={(*current_user).clone()}
              on_edit_profile={on_edit_profile}
          />
          if *dialog_visible {
              <div class="modal-backdrop">
                  <div class="modal">
                      <button type="button" class="btn modal-close" onclick={on_close_dialog}>{ "×" }</button>
                      <FormEditUser
                          current_user={(*current_user).clone()}
                          set_visible={set_visible.clone()}
                          on_update_user={on_update_user}
                      />
                  </div>
              </div>
          }
      </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bundled_assets_parse() {
    let profile = load_seed_profile();
    assert!(!profile.email.is_empty());
    assert!(!profile.dark_mode);

    let holidays = load_holidays();
    assert!(holidays.iter().all(|event| {
      event.holiday && event.day_off
    }));
    assert!(holidays.len() >= 9);
  }
}

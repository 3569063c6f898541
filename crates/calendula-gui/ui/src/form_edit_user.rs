use calendula_core::user_form::{
  FieldChange,
  UserField,
  UserForm
};
use calendula_shared::{
  UserProfile,
  UserUpdate
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  UseStateHandle,
  classes,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct FormEditUserProps {
  pub current_user:   UserProfile,
  pub set_visible:    Callback<bool>,
  pub on_update_user: Callback<UserUpdate>
}

fn text_change_callback(
  form: &UseStateHandle<UserForm>,
  change: fn(String) -> FieldChange
) -> Callback<web_sys::InputEvent> {
  let form = form.clone();
  Callback::from(
    move |e: web_sys::InputEvent| {
      let input: web_sys::HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*form).clone();
      next.change(change(input.value()));
      form.set(next);
    }
  )
}

// No email/url input types: `UserForm` is
// the only validator.
fn input_type(field: UserField) -> &'static str {
  match field {
    | UserField::DarkMode => "checkbox",
    | UserField::Username
    | UserField::Email
    | UserField::Picture => "text"
  }
}

fn render_text_field(
  form: &UserForm,
  field: UserField,
  value: String,
  oninput: Callback<web_sys::InputEvent>
) -> Html {
  let error = form
    .is_touched(field)
    .then(|| form.error(field))
    .flatten();
  let id = format!("profile-{}", field.name());

  html! {
      <div class="field">
          <label for={id.clone()}>{ field.label() }</label>
          <input
              id={id}
              name={field.name()}
              type={input_type(field)}
              class={classes!("p-inputtext", error.is_some().then_some("p-invalid"))}
              value={value}
              oninput={oninput}
          />
          if let Some(error) = error {
              <small class="p-error">{ error.to_string() }</small>
          }
      </div>
  }
}

/// Profile edit dialog body. The host owns
/// visibility and the stored profile.
#[function_component(FormEditUser)]
pub fn form_edit_user(
  props: &FormEditUserProps
) -> Html {
  let form = {
    let current_user =
      props.current_user.clone();
    use_state(move || {
      UserForm::new(&current_user)
    })
  };

  let on_username = text_change_callback(
    &form,
    FieldChange::Username
  );
  let on_email =
    text_change_callback(&form, FieldChange::Email);
  let on_picture = text_change_callback(
    &form,
    FieldChange::Picture
  );

  let on_dark_mode = {
    let form = form.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let mut next = (*form).clone();
        next.change(FieldChange::DarkMode(
          input.checked()
        ));
        form.set(next);
      }
    )
  };

  let on_submit = {
    let form = form.clone();
    let set_visible =
      props.set_visible.clone();
    let on_update_user =
      props.on_update_user.clone();
    Callback::from(
      move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        let mut next = (*form).clone();
        let result = next.submit(
          |update| {
            on_update_user.emit(update);
            Ok(())
          },
          |visible| set_visible.emit(visible)
        );
        match result {
          | Ok(Some(_)) => {
            tracing::info!(
              "profile form submitted"
            );
          }
          | Ok(None) => {
            tracing::debug!(
              "profile form has errors"
            );
          }
          | Err(error) => {
            tracing::error!(?error, "profile form submit failed");
          }
        }
        form.set(next);
      }
    )
  };

  let values = form.values().clone();

  html! {
      <form class="profile-form" novalidate={true} onsubmit={on_submit}>
          <h2>{ "Редактируйте свои данные" }</h2>
          { render_text_field(&form, UserField::Username, values.username, on_username) }
          { render_text_field(&form, UserField::Email, values.email, on_email) }
          { render_text_field(&form, UserField::Picture, values.picture, on_picture) }
          <div class="field field-checkbox">
              <input
                  id="profile-darkMode"
                  name={UserField::DarkMode.name()}
                  type={input_type(UserField::DarkMode)}
                  checked={values.dark_mode}
                  onchange={on_dark_mode}
              />
              <label for="profile-darkMode">{ UserField::DarkMode.label() }</label>
          </div>
          <button type="submit" class="btn btn-primary" disabled={!form.is_valid()}>
              { "Изменить данные" }
          </button>
      </form>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn browser_constraint_types_are_not_used() {
    for field in UserField::all() {
      assert!(
        !matches!(
          input_type(field),
          "email" | "url"
        ),
        "{}",
        field.name()
      );
    }
    assert_eq!(
      input_type(UserField::Picture),
      "text"
    );
  }
}

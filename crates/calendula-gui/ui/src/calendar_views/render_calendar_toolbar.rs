fn render_calendar_toolbar(
  calendar: &CalendarProps,
  state: &CalendarState,
  on_navigate: Callback<NavigateAction>,
  on_view: Callback<CalendarViewMode>
) -> Html {
  let messages = &calendar.messages;
  let nav_button =
    |label: &'static str,
     action: NavigateAction| {
      let on_navigate = on_navigate.clone();
      html! {
          <button type="button" class="btn" onclick={Callback::from(move |_| on_navigate.emit(action))}>
              { label }
          </button>
      }
    };

  html! {
      <div class="rbc-toolbar">
          <span class="rbc-btn-group">
              { nav_button(messages.today, NavigateAction::Today) }
              { nav_button(messages.previous, NavigateAction::Previous) }
              { nav_button(messages.next, NavigateAction::Next) }
          </span>
          <span class="rbc-toolbar-label">{ title(calendar, state) }</span>
          <span class="rbc-btn-group">
              {
                  for CalendarViewMode::all().into_iter().map(|view| {
                      let on_view = on_view.clone();
                      html! {
                          <button
                              type="button"
                              class={classes!("btn", (state.view == view).then_some("rbc-active"))}
                              data-view={view.as_key()}
                              onclick={Callback::from(move |_| on_view.emit(view))}
                          >
                              { view.label(messages) }
                          </button>
                      }
                  })
              }
          </span>
      </div>
  }
}

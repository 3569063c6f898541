fn render_calendar_week_view(
  calendar: &CalendarProps,
  focus: NaiveDate,
  on_drill_down: Callback<NaiveDate>
) -> Html {
  let days =
    week_days(focus, calendar.week_start);
  let headers =
    weekday_headers(calendar, focus);

  html! {
      <div class="rbc-time-view rbc-week-view">
          {
              for days.into_iter().zip(headers).map(|(day, header)| {
                  let cell = day_cell(calendar, day, focus);
                  let on_drill_down = on_drill_down.clone();
                  let style = cell.props.style_css();
                  html! {
                      <div
                          class={classes!("rbc-day-slot", cell.props.class_name.clone())}
                          style={(!style.is_empty()).then_some(style)}
                      >
                          <button
                              type="button"
                              class="rbc-header rbc-button-link"
                              onclick={Callback::from(move |_| on_drill_down.emit(day))}
                          >
                              { format!("{header} {}", cell.label) }
                          </button>
                          {
                              for cell.events.iter().map(|event| {
                                  render_calendar_event(event, &calendar.messages)
                              })
                          }
                      </div>
                  }
              })
          }
      </div>
  }
}

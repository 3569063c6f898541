fn render_calendar_month_view(
  calendar: &CalendarProps,
  focus: NaiveDate,
  on_drill_down: Callback<NaiveDate>
) -> Html {
  let headers =
    weekday_headers(calendar, focus);
  let rows =
    month_grid(focus, calendar.week_start);

  html! {
      <div class="rbc-month-view">
          <div class="rbc-row rbc-month-header">
              {
                  for headers.into_iter().map(|label| html! {
                      <div class="rbc-header">{ label }</div>
                  })
              }
          </div>
          {
              for rows.into_iter().map(|week| html! {
                  <div class="rbc-row rbc-month-row">
                      {
                          for week.into_iter().map(|day| {
                              let cell = day_cell(calendar, day, focus);
                              let on_drill_down = on_drill_down.clone();
                              let style = cell.props.style_css();
                              html! {
                                  <div
                                      class={classes!(
                                          "rbc-day-bg",
                                          cell.outside.then_some("rbc-off-range"),
                                          cell.props.class_name.clone()
                                      )}
                                      style={(!style.is_empty()).then_some(style)}
                                  >
                                      <button
                                          type="button"
                                          class="rbc-button-link"
                                          onclick={Callback::from(move |_| on_drill_down.emit(day))}
                                      >
                                          { cell.label.clone() }
                                      </button>
                                      {
                                          for cell.events.iter().take(3).map(|event| {
                                              render_calendar_event(event, &calendar.messages)
                                          })
                                      }
                                      if cell.events.len() > 3 {
                                          <div class="rbc-show-more">{ format!("+{}", cell.events.len() - 3) }</div>
                                      }
                                  </div>
                              }
                          })
                      }
                  </div>
              })
          }
      </div>
  }
}

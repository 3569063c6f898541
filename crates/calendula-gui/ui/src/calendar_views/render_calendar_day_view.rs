fn render_calendar_day_view(
  calendar: &CalendarProps,
  focus: NaiveDate
) -> Html {
  let events =
    events_on(&calendar.events, focus);
  let (all_day, timed): (Vec<_>, Vec<_>) =
    events
      .into_iter()
      .partition(|event| {
        event.all_day
          || event.start.date() < focus
      });

  html! {
      <div class="rbc-time-view rbc-day-view">
          if !all_day.is_empty() {
              <div class="rbc-allday-cell">
                  <span class="rbc-label">{ calendar.messages.all_day }</span>
                  {
                      for all_day.iter().map(|event| {
                          render_calendar_event(event, &calendar.messages)
                      })
                  }
              </div>
          }
          <div class="rbc-time-content">
              {
                  for day_hours(calendar, focus).into_iter().map(|(hour, label)| {
                      html! {
                          <div class="rbc-timeslot-group">
                              <span class="rbc-label">{ label }</span>
                              {
                                  for timed
                                      .iter()
                                      .filter(|event| event.start.hour() == hour)
                                      .map(|event| render_calendar_event(event, &calendar.messages))
                              }
                          </div>
                      }
                  })
              }
          </div>
      </div>
  }
}

fn render_calendar_agenda_view(
  calendar: &CalendarProps,
  focus: NaiveDate
) -> Html {
  let days = agenda(calendar, focus);
  let messages = &calendar.messages;

  if days.is_empty() {
    return html! {
        <div class="rbc-agenda-view">
            <div class="rbc-agenda-empty">{ messages.no_events_in_range }</div>
        </div>
    };
  }

  html! {
      <div class="rbc-agenda-view">
          <table class="rbc-agenda-table">
              <thead>
                  <tr>
                      <th>{ messages.date }</th>
                      <th>{ messages.time }</th>
                      <th>{ messages.event }</th>
                  </tr>
              </thead>
              <tbody>
                  {
                      for days.iter().flat_map(|entry| {
                          entry.events.iter().enumerate().map(move |(idx, event)| html! {
                              <tr>
                                  if idx == 0 {
                                      <td class="rbc-agenda-date-cell" rowspan={entry.events.len().to_string()}>
                                          { entry.label.clone() }
                                      </td>
                                  }
                                  <td class="rbc-agenda-time-cell">{ event_time_label(event, messages) }</td>
                                  <td class="rbc-agenda-event-cell">{ event.title.clone() }</td>
                              </tr>
                          })
                      })
                  }
              </tbody>
          </table>
      </div>
  }
}

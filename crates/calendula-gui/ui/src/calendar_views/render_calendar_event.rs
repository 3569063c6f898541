fn render_calendar_event(
  event: &CalendarEvent,
  messages: &CalendarMessages
) -> Html {
  let style = event
    .color
    .as_ref()
    .map(|color| format!("background:{color};"));

  html! {
      <div
          class={classes!(
              "rbc-event",
              event.all_day.then_some("rbc-event-allday"),
              event.day_off.then_some("rbc-event-day-off")
          )}
          style={style}
          title={format!("{} ({})", event.title, event_time_label(event, messages))}
      >
          <div class="rbc-event-content">{ event.title.clone() }</div>
      </div>
  }
}

fn event_time_label(
  event: &CalendarEvent,
  messages: &CalendarMessages
) -> String {
  if event.all_day {
    return messages.all_day.to_string();
  }
  let clock = |time: NaiveTime| {
    time.format("%H:%M").to_string()
  };
  if event.end <= event.start {
    return clock(event.start.time());
  }
  format!(
    "{} – {}",
    clock(event.start.time()),
    clock(event.end.time())
  )
}

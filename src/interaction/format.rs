//! Text helpers for command arguments and event replies.

use crate::base::types::{EventRecord, Venue};

/// Parse the first run of ASCII digits in `args`.
///
/// Returns `None` when there is no number, it is zero, or it does not fit.
pub fn parse_count(args: &str) -> Option<usize> {
    let digits: String = args.chars().skip_while(|c| !c.is_ascii_digit()).take_while(char::is_ascii_digit).collect();

    digits.parse::<usize>().ok().filter(|count| *count > 0)
}

/// Render up to `count` events, clamped to the events available.
///
/// Callers handle the empty case; an empty slice renders only the header.
pub fn format_events(events: &[EventRecord], count: usize) -> String {
    let shown = &events[..count.min(events.len())];
    let noun = if shown.len() == 1 { "event" } else { "events" };

    let mut text = format!("**Next up coming {noun}**: ");
    for event in shown {
        text.push_str(&format_event(event));
    }

    text
}

fn format_event(event: &EventRecord) -> String {
    let venue = event.venue.as_ref().map(format_venue).unwrap_or_default();

    format!("`{}`\nWith {} {}\n{}Link: <{}>\n\n", event.name, event.yes_rsvp_count, event.group.who, venue, event.link)
}

/// The `At:` line for a named venue, with whatever address parts are known.
fn format_venue(venue: &Venue) -> String {
    if venue.name.is_empty() {
        return String::new();
    }

    fn part(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    let Some(address) = part(&venue.address_1) else {
        return format!("At: `{}`\n", venue.name);
    };

    let mut location = address.to_string();
    if let Some(city) = part(&venue.city) {
        location.push(' ');
        location.push_str(city);
    }

    let region: Vec<&str> = [part(&venue.state), part(&venue.zip)].into_iter().flatten().collect();
    if !region.is_empty() {
        location.push_str(", ");
        location.push_str(&region.join(" "));
    }

    format!("At: `{}` - {}\n", venue.name, location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::types::EventGroup;

    fn event(name: &str, rsvps: u64, link: &str) -> EventRecord {
        EventRecord {
            name: name.to_string(),
            yes_rsvp_count: rsvps,
            group: EventGroup { who: "Members".to_string() },
            link: link.to_string(),
            ..Default::default()
        }
    }

    fn venue(name: &str, address_1: Option<&str>) -> Venue {
        Venue {
            name: name.to_string(),
            address_1: address_1.map(str::to_string),
            city: Some("Springfield".to_string()),
            state: Some("IL".to_string()),
            zip: Some("62701".to_string()),
        }
    }

    #[test]
    fn parse_count_finds_embedded_number() {
        assert_eq!(parse_count(" 3"), Some(3));
        assert_eq!(parse_count("3"), Some(3));
        assert_eq!(parse_count(" next 12 please"), Some(12));
        assert_eq!(parse_count(" 4 5"), Some(4));
    }

    #[test]
    fn parse_count_rejects_missing_zero_and_huge() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count(" soon"), None);
        assert_eq!(parse_count(" 0"), None);
        assert_eq!(parse_count(" 99999999999999999999999999"), None);
    }

    #[test]
    fn single_event_matches_reply_format() {
        let events = vec![event("Tea Party", 5, "http://x")];

        assert_eq!(format_events(&events, 1), "**Next up coming event**: `Tea Party`\nWith 5 Members\nLink: <http://x>\n\n");
    }

    #[test]
    fn several_events_pluralize_and_keep_order() {
        let events = vec![event("One", 1, "http://1"), event("Two", 2, "http://2"), event("Three", 3, "http://3")];

        assert_eq!(
            format_events(&events, 2),
            "**Next up coming events**: `One`\nWith 1 Members\nLink: <http://1>\n\n`Two`\nWith 2 Members\nLink: <http://2>\n\n"
        );
    }

    #[test]
    fn count_is_clamped_to_available_events() {
        let events = vec![event("Tea Party", 5, "http://x")];

        assert_eq!(format_events(&events, 3), format_events(&events, 1));
    }

    #[test]
    fn venue_line_follows_the_attendees() {
        let mut with_address = event("Tea Party", 5, "http://x");
        with_address.venue = Some(venue("The Teahouse", Some("1 Main St")));

        let mut name_only = event("Tea Party", 5, "http://x");
        name_only.venue = Some(venue("The Teahouse", None));

        assert_eq!(
            format_events(&[with_address], 1),
            "**Next up coming event**: `Tea Party`\nWith 5 Members\nAt: `The Teahouse` - 1 Main St Springfield, IL 62701\nLink: <http://x>\n\n"
        );
        assert_eq!(format_events(&[name_only], 1), "**Next up coming event**: `Tea Party`\nWith 5 Members\nAt: `The Teahouse`\nLink: <http://x>\n\n");
    }

    #[test]
    fn unnamed_venue_adds_nothing() {
        let mut unnamed = event("Tea Party", 5, "http://x");
        unnamed.venue = Some(venue("", Some("1 Main St")));

        assert_eq!(format_events(&[unnamed], 1), format_events(&[event("Tea Party", 5, "http://x")], 1));
    }

    #[test]
    fn missing_address_parts_are_skipped() {
        let partial = Venue {
            name: "Hall".to_string(),
            address_1: Some("2 Side Rd".to_string()),
            zip: Some("12345".to_string()),
            ..Default::default()
        };

        assert_eq!(format_venue(&partial), "At: `Hall` - 2 Side Rd, 12345\n");
    }
}

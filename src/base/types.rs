use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// A single upcoming event, as returned by the events API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    #[serde(default)]
    pub yes_rsvp_count: u64,
    pub group: EventGroup,
    pub link: String,
    /// `upcoming`, `past`, `cancelled`, ...
    #[serde(default)]
    pub status: Option<String>,
    /// `public`, `public_limited` or `members`.
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub venue: Option<Venue>,
}

impl EventRecord {
    /// Whether the event may be announced: public and still upcoming.
    ///
    /// A missing field does not exclude the event.
    pub fn is_public_upcoming(&self) -> bool {
        let public = self.visibility.as_deref().is_none_or(|visibility| visibility == "public");
        let upcoming = self.status.as_deref().is_none_or(|status| status == "upcoming");

        public && upcoming
    }
}

/// The hosting group of an event; only the noun for its members is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventGroup {
    pub who: String,
}

/// Where an event takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address_1: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

/// An inbound chat message that may carry a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub channel_id: String,
    pub text: String,
}

impl InboundMessage {
    pub fn new(channel_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_record_ignores_unknown_fields() {
        let raw = r#"{
            "id": "1234",
            "name": "Tea Party",
            "status": "upcoming",
            "yes_rsvp_count": 5,
            "group": { "who": "Members", "urlname": "tea" },
            "link": "http://x"
        }"#;

        let event: EventRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(event.name, "Tea Party");
        assert_eq!(event.yes_rsvp_count, 5);
        assert_eq!(event.group.who, "Members");
        assert_eq!(event.link, "http://x");
    }

    #[test]
    fn event_record_defaults_missing_rsvp_count() {
        let raw = r#"{ "name": "Tea Party", "group": { "who": "Members" }, "link": "http://x" }"#;

        let event: EventRecord = serde_json::from_str(raw).unwrap();

        assert_eq!(event.yes_rsvp_count, 0);
    }

    #[test]
    fn event_record_reads_venue_and_visibility() {
        let raw = r#"{
            "name": "Tea Party",
            "status": "upcoming",
            "visibility": "public",
            "group": { "who": "Members" },
            "link": "http://x",
            "venue": { "id": 7, "name": "The Teahouse", "address_1": "1 Main St", "city": "Springfield", "lat": 1.5 }
        }"#;

        let event: EventRecord = serde_json::from_str(raw).unwrap();
        let venue = event.venue.as_ref().unwrap();

        assert_eq!(venue.name, "The Teahouse");
        assert_eq!(venue.address_1.as_deref(), Some("1 Main St"));
        assert_eq!(venue.state, None);
        assert!(event.is_public_upcoming());
    }

    #[test]
    fn only_public_upcoming_events_are_announced() {
        let event = |status: Option<&str>, visibility: Option<&str>| EventRecord {
            status: status.map(str::to_string),
            visibility: visibility.map(str::to_string),
            ..Default::default()
        };

        assert!(event(None, None).is_public_upcoming());
        assert!(event(Some("upcoming"), Some("public")).is_public_upcoming());
        assert!(!event(Some("upcoming"), Some("members")).is_public_upcoming());
        assert!(!event(Some("upcoming"), Some("public_limited")).is_public_upcoming());
        assert!(!event(Some("cancelled"), Some("public")).is_public_upcoming());
        assert!(!event(Some("past"), None).is_public_upcoming());
    }

    #[test]
    fn event_record_requires_group() {
        let raw = r#"{ "name": "Tea Party", "link": "http://x" }"#;

        assert!(serde_json::from_str::<EventRecord>(raw).is_err());
    }
}

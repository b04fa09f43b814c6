//! Fixed replies sent back to chat users.

/// Reply when a query runs before any group has been configured.
pub fn not_configured(setgroup_trigger: &str) -> String {
    format!("No meetup group is configured yet. Run `{setgroup_trigger} <urlname>` first.")
}

/// Reply when the events API returns no events.
pub const NO_UPCOMING_EVENTS: &str = "No upcoming events found.";

/// Reply when every returned event is private, cancelled or already past.
pub const NO_PUBLIC_EVENTS: &str = "No future, public events found.";

/// Reply when the events API reports that a group does not exist.
pub const INVALID_GROUP: &str = "Invalid group urlname";

/// Reply when the settings file could not be read or written.
pub const SETTINGS_UNAVAILABLE: &str = "The group setting could not be accessed, please try again later.";

/// Generic reply for failed commands; never carries error details.
pub const GENERIC_FAILURE: &str = "Sorry, something went wrong while handling that command.";

/// Reply when `setgroup` is called without a group.
pub fn setgroup_usage(setgroup_trigger: &str) -> String {
    format!("Usage: `{setgroup_trigger} <urlname>`")
}

/// Reply after the group has been stored.
pub fn group_set(group_identifier: &str) -> String {
    format!("Group url now set to: {group_identifier}")
}

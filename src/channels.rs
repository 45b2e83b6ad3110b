//! MeetBot channel checks.
//!
//! Meetings must be held on a channel running a fully functional
//! MeetBot, or their logs and minutes are lost.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::types::Meeting;

/// Channels with a fully functional MeetBot. Includes the restricted
/// cross-project channel, which is bot-capable even though it is not
/// counted for slot capacity.
pub fn meetbot_channels() -> BTreeSet<String> {
    [
        "openstack-meeting",
        "openstack-meeting-alt",
        "openstack-meeting-3",
        "openstack-meeting-4",
        "openstack-meeting-cp",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// A schedule entry held on a channel without a functional MeetBot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelViolation {
    pub filefrom: PathBuf,
    pub channel: String,
}

/// Find every schedule entry whose IRC channel is not in `allowed`.
///
/// Entries with no `irc` field at all are left to the slot
/// accumulator's malformed-entry reporting and ignored here.
pub fn find_unknown_channels(
    meetings: &[Meeting],
    allowed: &BTreeSet<String>,
) -> Vec<ChannelViolation> {
    let mut violations = Vec::new();
    for meeting in meetings {
        for schedule in &meeting.schedule {
            let Some(channel) = schedule.irc.as_deref() else {
                continue;
            };
            if !allowed.contains(channel) {
                violations.push(ChannelViolation {
                    filefrom: meeting.filefrom.clone(),
                    channel: channel.to_string(),
                });
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::Schedule;

    fn meeting_on(channels: &[Option<&str>]) -> Meeting {
        Meeting {
            project: None,
            meeting_id: Some("nova".to_string()),
            chair: None,
            schedule: channels
                .iter()
                .map(|irc| Schedule {
                    day: Some("Monday".to_string()),
                    time: Some("1000".to_string()),
                    frequency: Some("weekly".to_string()),
                    duration: None,
                    irc: irc.map(String::from),
                })
                .collect(),
            filefrom: PathBuf::from("meetings/nova.yaml"),
        }
    }

    #[test]
    fn test_meetbot_channels_include_cross_project() {
        let allowed = meetbot_channels();
        assert!(allowed.contains("openstack-meeting"));
        assert!(allowed.contains("openstack-meeting-cp"));
        assert_eq!(allowed.len(), 5);
    }

    #[test]
    fn test_known_channels_pass() {
        let meetings = vec![meeting_on(&[
            Some("openstack-meeting"),
            Some("openstack-meeting-cp"),
        ])];
        assert!(find_unknown_channels(&meetings, &meetbot_channels()).is_empty());
    }

    #[test]
    fn test_unknown_channel_reported_with_source() {
        let meetings = vec![meeting_on(&[
            Some("openstack-meeting"),
            Some("openstack-nova"),
        ])];
        let violations = find_unknown_channels(&meetings, &meetbot_channels());
        assert_eq!(
            violations,
            vec![ChannelViolation {
                filefrom: PathBuf::from("meetings/nova.yaml"),
                channel: "openstack-nova".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_irc_field_is_not_a_violation() {
        let meetings = vec![meeting_on(&[None])];
        assert!(find_unknown_channels(&meetings, &meetbot_channels()).is_empty());
    }
}

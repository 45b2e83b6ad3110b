//! Meeting file loading.
//!
//! Walks a directory tree for `.yaml` meeting definitions. Files that
//! fail to read or parse are logged and skipped so one broken file does
//! not hide the rest of the schedule; a missing root directory is fatal.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::MeetingError;
use crate::types::Meeting;

/// Load every meeting definition under `dir`, in sorted path order.
pub fn load_meetings(dir: &Path) -> Result<Vec<Meeting>, MeetingError> {
    if !dir.is_dir() {
        return Err(MeetingError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut meetings = Vec::new();
    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.extension().map_or(false, |ext| ext == "yaml") {
            continue;
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::error!("failed to read {}: {}", path.display(), e);
                continue;
            }
        };
        match serde_yaml::from_str::<Meeting>(&content) {
            Ok(mut meeting) => {
                meeting.filefrom = path.to_path_buf();
                meetings.push(meeting);
            }
            Err(e) => {
                log::error!("failed to parse {}: {}", path.display(), e);
            }
        }
    }
    Ok(meetings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    const NOVA: &str = "\
project: Nova Team Meeting
meeting_id: nova
chair: Dan Smith (dansmith)
schedule:
  - time: '1400'
    day: Thursday
    irc: openstack-meeting
    frequency: weekly
  - time: '2100'
    day: Thursday
    irc: openstack-meeting
    frequency: weekly
    duration: 30
";

    const ADHOC: &str = "\
project: One-off Sync
schedule:
  - time: '0900'
    day: Monday
    irc: openstack-meeting-alt
    frequency: adhoc
";

    #[test]
    fn test_load_meetings_from_tree() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("extra")).unwrap();
        fs::write(dir.path().join("nova.yaml"), NOVA).unwrap();
        fs::write(dir.path().join("extra").join("adhoc.yaml"), ADHOC).unwrap();
        fs::write(dir.path().join("README.txt"), "not a meeting").unwrap();

        let meetings = load_meetings(dir.path()).unwrap();
        assert_eq!(meetings.len(), 2);

        // Sorted traversal: extra/adhoc.yaml sorts before nova.yaml.
        assert_eq!(meetings[0].project.as_deref(), Some("One-off Sync"));
        assert!(meetings[0].meeting_id.is_none());
        assert!(meetings[0].filefrom.ends_with("extra/adhoc.yaml"));

        let nova = &meetings[1];
        assert_eq!(nova.meeting_id.as_deref(), Some("nova"));
        assert_eq!(nova.chair.as_deref(), Some("Dan Smith (dansmith)"));
        assert_eq!(nova.schedule.len(), 2);
        assert_eq!(nova.schedule[0].time.as_deref(), Some("1400"));
        assert_eq!(nova.schedule[0].duration, None);
        assert_eq!(nova.schedule[1].duration, Some(30));
    }

    #[test]
    fn test_load_meetings_skips_unparseable_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("good.yaml"), NOVA).unwrap();
        fs::write(dir.path().join("broken.yaml"), ":\n - [unbalanced").unwrap();

        let meetings = load_meetings(dir.path()).unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].meeting_id.as_deref(), Some("nova"));
    }

    #[test]
    fn test_load_meetings_missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-dir");
        let err = load_meetings(&missing).unwrap_err();
        assert!(matches!(err, MeetingError::DirectoryNotFound(p) if p == missing));
    }

    #[test]
    fn test_schedule_keeps_missing_fields_for_later_diagnostics() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("partial.yaml"),
            "project: Partial\nschedule:\n  - day: Monday\n    irc: openstack-meeting\n",
        )
        .unwrap();

        let meetings = load_meetings(dir.path()).unwrap();
        assert_eq!(meetings.len(), 1);
        let schedule = &meetings[0].schedule[0];
        assert_eq!(schedule.day.as_deref(), Some("Monday"));
        assert!(schedule.time.is_none());
        assert!(schedule.frequency.is_none());
    }
}

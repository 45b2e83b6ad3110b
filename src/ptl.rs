//! Project roster lookup for PTL courtesy pings.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::MeetingError;

/// Default location of the governance project roster.
pub const PROJECTS_LIST_URL: &str =
    "http://git.openstack.org/cgit/openstack/governance/plain/reference/projects.yaml";

/// Width of the rendered ping lines, terminal-friendly.
pub const PING_LINE_WIDTH: usize = 80;

#[derive(Debug, Deserialize)]
pub struct Project {
    pub ptl: Option<Ptl>,
}

#[derive(Debug, Deserialize)]
pub struct Ptl {
    pub irc: String,
}

/// The roster, keyed by project name.
pub type Roster = BTreeMap<String, Project>;

/// Fetch and parse the project roster from `url`.
pub fn fetch_roster(url: &str) -> Result<Roster, MeetingError> {
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
    parse_roster(&body)
}

pub fn parse_roster(body: &str) -> Result<Roster, MeetingError> {
    serde_yaml::from_str(body).map_err(MeetingError::RosterParse)
}

/// Collect PTL IRC nicks for the named projects, or for every project
/// with a PTL when `projects` is empty.
pub fn ptl_nicks(roster: &Roster, projects: &[String]) -> Result<Vec<String>, MeetingError> {
    if projects.is_empty() {
        return Ok(roster
            .values()
            .filter_map(|p| p.ptl.as_ref().map(|ptl| ptl.irc.clone()))
            .collect());
    }

    projects
        .iter()
        .map(|name| {
            let project = roster
                .get(name)
                .ok_or_else(|| MeetingError::UnknownProject(name.clone()))?;
            let ptl = project
                .ptl
                .as_ref()
                .ok_or_else(|| MeetingError::MissingPtl(name.clone()))?;
            Ok(ptl.irc.clone())
        })
        .collect()
}

/// Wrap `nicks` at `width` columns, starting every line with `prefix`.
pub fn ping_lines(prefix: &str, nicks: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for nick in nicks {
        if line.is_empty() {
            line = format!("{} {}", prefix, nick);
        } else if line.len() + 1 + nick.len() <= width {
            line.push(' ');
            line.push_str(nick);
        } else {
            lines.push(std::mem::take(&mut line));
            line = format!("{} {}", prefix, nick);
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

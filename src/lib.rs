//! Tooling for recurring IRC meeting schedules: per-fortnight slot-usage
//! accounting across the shared meeting channels, plus schedule hygiene
//! checks (MeetBot channels, chair format, PTL roster pings).

pub mod chair;
pub mod channels;
pub mod error;
pub mod loader;
pub mod ptl;
pub mod report;
pub mod slots;
pub mod types;

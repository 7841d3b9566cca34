use chrono::{DateTime, Utc};

/// Interval during which a situation is in effect or shown to riders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    /// `None` when the window has no announced end.
    pub to: Option<DateTime<Utc>>,
}

impl TimeWindow {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from <= at && self.to.is_none_or(|to| at <= to)
    }
}

/// A cached service alert with its windows and the cached entities it affects.
///
/// Affected entities that are not in the cache are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedSituation {
    pub situation: entity::situation::Model,
    pub active_windows: Vec<TimeWindow>,
    pub publication_windows: Vec<TimeWindow>,
    pub affected_agencies: Vec<entity::agency::Model>,
    pub affected_routes: Vec<entity::route::Model>,
    pub affected_stops: Vec<entity::stop::Model>,
    pub affected_trips: Vec<entity::trip::Model>,
}

impl DetailedSituation {
    /// Whether the situation is in effect at `at`
    ///
    /// A situation without active windows is always in effect.
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.active_windows.is_empty() || self.active_windows.iter().any(|w| w.contains(at))
    }
}

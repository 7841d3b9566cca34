use std::collections::HashMap;

/// Everything the trip detail timeline needs, read from the local cache.
///
/// Stops and situations are keyed by ID so the timeline can resolve each stop time and
/// service alert without further queries. Previous and next trips are only present when
/// both the schedule names them and the trip itself has been cached.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetailsViewModel {
    pub trip_details: entity::trip_details::Model,
    pub trip: entity::trip::Model,
    pub previous_trip: Option<entity::trip::Model>,
    pub next_trip: Option<entity::trip::Model>,
    pub stop_times: Vec<entity::stop_time::Model>,
    pub stops: HashMap<String, entity::stop::Model>,
    pub situations: HashMap<String, entity::situation::Model>,
}

impl TripDetailsViewModel {
    /// Stop times whose stop is known to the cache, in schedule order.
    pub fn resolved_stop_times(
        &self,
    ) -> impl Iterator<Item = (&entity::stop_time::Model, &entity::stop::Model)> {
        self.stop_times
            .iter()
            .filter_map(|stop_time| self.stops.get(&stop_time.stop_id).map(|s| (stop_time, s)))
    }
}

/// Cached stop together with its parent station, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct StopDetails {
    pub stop: entity::stop::Model,
    pub parent_stop: Option<entity::stop::Model>,
}

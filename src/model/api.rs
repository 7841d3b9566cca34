//! OneBusAway REST API payload types.
//!
//! Every response is wrapped in the standard OBA envelope (`code`, `currentTime`, `text`,
//! `version`, `data`). Single-object methods return `data.entry`, list methods return
//! `data.list`, and both carry the related entities in `data.references`. OneBusAway
//! sends empty strings for absent optional values, so string fields default to `""`.

use serde::{Deserialize, Serialize};

/// Standard response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<D> {
    pub code: u16,
    #[serde(default)]
    pub current_time: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub version: u32,
    pub data: Option<D>,
}

/// `data` object of single-entry methods such as `stop/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryData<E> {
    pub entry: E,
    #[serde(default)]
    pub references: References,
}

/// `data` object of list methods such as `agencies-with-coverage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListData<E> {
    pub list: Vec<E>,
    #[serde(default)]
    pub references: References,
    #[serde(default)]
    pub limit_exceeded: bool,
    #[serde(default)]
    pub out_of_range: bool,
}

/// Entities referenced by an entry or list, de-duplicated by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct References {
    #[serde(default)]
    pub agencies: Vec<AgencyDto>,
    #[serde(default)]
    pub routes: Vec<RouteDto>,
    #[serde(default)]
    pub stops: Vec<StopDto>,
    #[serde(default)]
    pub trips: Vec<TripDto>,
    #[serde(default)]
    pub situations: Vec<SituationDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub fare_url: String,
    #[serde(default)]
    pub disclaimer: String,
    #[serde(default)]
    pub private_service: bool,
}

/// Coverage area of an agency, as listed by `agencies-with-coverage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyWithCoverageDto {
    pub agency_id: String,
    pub lat: f64,
    pub lon: f64,
    pub lat_span: f64,
    pub lon_span: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub id: String,
    pub agency_id: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub route_type: i32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub text_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub direction: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub location_type: i32,
    #[serde(default)]
    pub wheelchair_boarding: Option<String>,
    /// ID of the parent station, or `""` when the stop has none.
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub route_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    pub id: String,
    pub route_id: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub shape_id: String,
    #[serde(default)]
    pub direction_id: String,
    #[serde(default)]
    pub block_id: String,
    #[serde(default)]
    pub trip_headsign: String,
    #[serde(default)]
    pub trip_short_name: String,
    #[serde(default)]
    pub route_short_name: String,
    #[serde(default)]
    pub time_zone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetailsDto {
    pub trip_id: String,
    /// Service date in milliseconds since the Unix epoch.
    pub service_date: i64,
    #[serde(default)]
    pub schedule: Option<TripScheduleDto>,
    #[serde(default)]
    pub situation_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripScheduleDto {
    #[serde(default)]
    pub previous_trip_id: String,
    #[serde(default)]
    pub next_trip_id: String,
    #[serde(default)]
    pub time_zone: String,
    #[serde(default)]
    pub stop_times: Vec<StopTimeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTimeDto {
    pub stop_id: String,
    /// Seconds since the start of the service date.
    pub arrival_time: i64,
    pub departure_time: i64,
    #[serde(default)]
    pub distance_along_trip: Option<f64>,
    #[serde(default)]
    pub stop_headsign: String,
}

/// Service alert, as referenced by trip details and stops.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SituationDto {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub creation_time: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub summary: Option<TranslatedStringDto>,
    #[serde(default)]
    pub description: Option<TranslatedStringDto>,
    #[serde(default)]
    pub advice: Option<TranslatedStringDto>,
    #[serde(default)]
    pub url: Option<TranslatedStringDto>,
    #[serde(default)]
    pub active_windows: Vec<TimeWindowDto>,
    #[serde(default)]
    pub publication_windows: Vec<TimeWindowDto>,
    #[serde(default)]
    pub all_affects: Vec<AffectedEntityDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedStringDto {
    #[serde(default)]
    pub lang: String,
    #[serde(default)]
    pub value: String,
}

/// Time range in milliseconds since the Unix epoch, `to` is `0` when open-ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindowDto {
    #[serde(default)]
    pub from: i64,
    #[serde(default)]
    pub to: i64,
}

/// One selector of the entities a situation affects, unused IDs are `""`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedEntityDto {
    #[serde(default)]
    pub agency_id: String,
    #[serde(default)]
    pub route_id: String,
    #[serde(default)]
    pub stop_id: String,
    #[serde(default)]
    pub trip_id: String,
    #[serde(default)]
    pub direction_id: String,
    #[serde(default)]
    pub application_id: String,
}

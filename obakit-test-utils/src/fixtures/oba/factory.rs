//! OneBusAway JSON payload factories.
//!
//! Payloads are built as `serde_json::Value` so they can be served by mock endpoints
//! exactly as a OneBusAway server would send them, including the `""` placeholders the
//! API uses for absent values.

use serde_json::{json, Value};

/// Create a mock agency named `Agency {agency_id}`.
pub fn mock_agency(agency_id: &str) -> Value {
    json!({
        "id": agency_id,
        "name": format!("Agency {}", agency_id),
        "url": format!("https://agency{}.example.com", agency_id),
        "timezone": "America/Los_Angeles",
        "lang": "en",
        "phone": "",
        "email": "",
        "fareUrl": "",
        "disclaimer": "",
        "privateService": false
    })
}

/// Create a coverage entry for an agency.
pub fn mock_agency_with_coverage(agency_id: &str) -> Value {
    json!({
        "agencyId": agency_id,
        "lat": 47.6,
        "lon": -122.3,
        "latSpan": 0.5,
        "lonSpan": 0.6
    })
}

/// Create a mock route operated by `agency_id`.
pub fn mock_route(route_id: &str, agency_id: &str) -> Value {
    json!({
        "id": route_id,
        "agencyId": agency_id,
        "shortName": "44",
        "longName": "Ballard - Montlake",
        "description": "",
        "type": 3,
        "url": "",
        "color": "",
        "textColor": ""
    })
}

/// Create a mock stop, optionally belonging to a parent station.
pub fn mock_stop(stop_id: &str, parent: Option<&str>) -> Value {
    json!({
        "id": stop_id,
        "name": format!("Stop {}", stop_id),
        "code": stop_id,
        "direction": "N",
        "lat": 47.654365,
        "lon": -122.305214,
        "locationType": 0,
        "wheelchairBoarding": "UNKNOWN",
        "parent": parent.unwrap_or(""),
        "routeIds": []
    })
}

/// Create a mock trip on `route_id`.
pub fn mock_trip(trip_id: &str, route_id: &str) -> Value {
    json!({
        "id": trip_id,
        "routeId": route_id,
        "serviceId": "1_WEEKDAY",
        "shapeId": "1_20044006",
        "directionId": "0",
        "blockId": "1_4232496",
        "tripHeadsign": "University District",
        "tripShortName": "",
        "routeShortName": "",
        "timeZone": ""
    })
}

/// Create mock trip details whose schedule visits `stop_ids` five minutes apart.
pub fn mock_trip_details(
    trip_id: &str,
    previous_trip_id: Option<&str>,
    next_trip_id: Option<&str>,
    stop_ids: &[&str],
) -> Value {
    let stop_times: Vec<Value> = stop_ids
        .iter()
        .enumerate()
        .map(|(index, stop_id)| {
            let time = 8 * 3600 + index as i64 * 300;
            json!({
                "stopId": stop_id,
                "arrivalTime": time,
                "departureTime": time,
                "distanceAlongTrip": index as f64 * 750.0,
                "stopHeadsign": ""
            })
        })
        .collect();

    json!({
        "tripId": trip_id,
        "serviceDate": 1_700_000_000_000i64,
        "schedule": {
            "previousTripId": previous_trip_id.unwrap_or(""),
            "nextTripId": next_trip_id.unwrap_or(""),
            "timeZone": "America/Los_Angeles",
            "stopTimes": stop_times
        },
        "situationIds": []
    })
}

/// Create a mock situation on agency `1` and `route_id`.
///
/// Active for one day from the factory's `currentTime`, published without an end.
pub fn mock_situation(situation_id: &str, route_id: &str) -> Value {
    json!({
        "id": situation_id,
        "creationTime": 1_699_990_000_000i64,
        "reason": "CONSTRUCTION",
        "severity": "",
        "summary": { "lang": "en", "value": format!("Detour {}", situation_id) },
        "description": { "lang": "en", "value": "Buses detour around construction." },
        "advice": { "lang": "en", "value": "" },
        "url": { "lang": "en", "value": "" },
        "activeWindows": [
            { "from": 1_700_000_000_000i64, "to": 1_700_086_400_000i64 }
        ],
        "publicationWindows": [
            { "from": 1_699_990_000_000i64, "to": 0 }
        ],
        "allAffects": [
            {
                "agencyId": "1",
                "applicationId": "",
                "directionId": "",
                "routeId": "",
                "stopId": "",
                "tripId": ""
            },
            {
                "agencyId": "",
                "applicationId": "",
                "directionId": "",
                "routeId": route_id,
                "stopId": "",
                "tripId": ""
            }
        ]
    })
}

/// Set the `situationIds` of trip details.
pub fn with_situation_ids(mut trip_details: Value, situation_ids: &[&str]) -> Value {
    trip_details["situationIds"] = json!(situation_ids);
    trip_details
}

/// Set the situations of a `references` object.
pub fn with_situations(mut references: Value, situations: Vec<Value>) -> Value {
    references["situations"] = Value::Array(situations);
    references
}

/// Build a `references` object.
pub fn references(
    agencies: Vec<Value>,
    routes: Vec<Value>,
    stops: Vec<Value>,
    trips: Vec<Value>,
) -> Value {
    json!({
        "agencies": agencies,
        "routes": routes,
        "stops": stops,
        "trips": trips,
        "situations": []
    })
}

/// Wrap a single entry in a successful response envelope.
pub fn entry_response(entry: Value, references: Value) -> Value {
    envelope(json!({ "entry": entry, "references": references }))
}

/// Wrap a list in a successful response envelope.
pub fn list_response(list: Vec<Value>, references: Value) -> Value {
    envelope(json!({
        "list": list,
        "references": references,
        "limitExceeded": false,
        "outOfRange": false
    }))
}

fn envelope(data: Value) -> Value {
    json!({
        "code": 200,
        "currentTime": 1_700_000_000_000i64,
        "text": "OK",
        "version": 2,
        "data": data
    })
}

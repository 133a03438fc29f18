//! GeoJSON feed for the float location map.
//!
//! The map host colours markers by `temperature_C`, sizes them by
//! `current_speed_m_s` and labels them with `sample_id`.

use argo_core::Profile;
use serde_json::{Value, json};

/// One `Point` feature per profile; coordinates are `[longitude, latitude]`.
pub fn to_geojson(rows: &[Profile]) -> Value {
    let features: Vec<Value> = rows
        .iter()
        .map(|p| {
            json!({
                "type": "Feature",
                "id": p.sample_id,
                "geometry": {
                    "type": "Point",
                    "coordinates": [p.longitude, p.latitude],
                },
                "properties": {
                    "sample_id": p.sample_id,
                    "temperature_C": p.temperature_c,
                    "salinity_psu": p.salinity_psu,
                    "density_kg_m3": p.density_kg_m3,
                    "depth_m": p.depth_m,
                    "current_speed_m_s": p.current_speed_m_s,
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

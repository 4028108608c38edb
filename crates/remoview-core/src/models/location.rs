use serde::{Deserialize, Serialize};

/// Ground truth for a pair of coordinates, as asserted by the inference service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealLocationData {
    pub country: String,
    pub continent: String,

    /// Primary type of area (e.g., Urban, Forest, Desert, Water)
    pub area_type: String,

    /// Three to five notable natural or man-made features
    pub major_features: Vec<String>,

    pub dominant_languages: Vec<String>,
}

use serde::Deserialize;

/// Subset of a Nominatim `/reverse` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseGeocodeResult {
    pub display_name: String,
    #[serde(default)]
    pub address: Option<NominatimAddress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NominatimAddress {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

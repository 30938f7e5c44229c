use serde::{Deserialize, Serialize};

/// Page metadata returned by `POST /metadata/fetch`.
///
/// All fields except `url` are optional — a page may carry none of the
/// recognized tags. `url` always echoes the input URL. When a URL-valued
/// field is present it is absolute, never a bare relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkMetadataDto {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub favicon_url: Option<String>,
    pub preview_image_url: Option<String>,
}

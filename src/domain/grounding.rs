//! Grounding metadata attached to provider replies, and extraction of citation links.
//!
//! Providers describe each retrieved reference as a "chunk" whose shape depends
//! on the retrieval tool that produced it. The wire shapes are decoded into
//! [`GroundingChunk`] once, so extraction is a plain pattern match.

use serde::Deserialize;
use std::collections::HashSet;
use url::Url;

use super::entities::SourceLink;

const WEB_DEFAULT_TITLE: &str = "Web Source";
const MAPS_PLACE_DEFAULT_TITLE: &str = "Google Maps Location";
const MAPS_DEFAULT_TITLE: &str = "Google Maps";

/// A single grounding reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroundingChunk {
    /// A web page found by the search tool.
    Web { uri: String, title: Option<String> },
    /// A place the map tool used as the answer source.
    MapsPlace { uri: String, name: Option<String> },
    /// A generic map reference.
    Maps { uri: String, title: Option<String> },
    /// Any shape without a recognisable link.
    Unknown,
}

/// Wire shape of a chunk as returned by the provider.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGroundingChunk {
    #[serde(default)]
    pub web: Option<RawWebChunk>,
    #[serde(default)]
    pub maps: Option<RawMapsChunk>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawWebChunk {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMapsChunk {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub source_place: Option<RawPlace>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RawGroundingChunk> for GroundingChunk {
    /// Picks the first usable shape in order: web, map source place, generic map.
    fn from(raw: RawGroundingChunk) -> Self {
        let RawGroundingChunk { web, maps } = raw;

        if let Some(web) = web
            && let Some(uri) = present(web.uri)
        {
            return GroundingChunk::Web {
                uri,
                title: present(web.title),
            };
        }

        if let Some(maps) = maps {
            if let Some(place) = maps.source_place
                && let Some(uri) = present(place.uri)
            {
                return GroundingChunk::MapsPlace {
                    uri,
                    name: present(place.name),
                };
            }
            if let Some(uri) = present(maps.uri) {
                return GroundingChunk::Maps {
                    uri,
                    title: present(maps.title),
                };
            }
        }

        GroundingChunk::Unknown
    }
}

impl GroundingChunk {
    /// Returns the `(title, url)` pair this chunk cites, if any.
    fn link(&self) -> Option<(&str, &str)> {
        match self {
            GroundingChunk::Web { uri, title } => {
                Some((title.as_deref().unwrap_or(WEB_DEFAULT_TITLE), uri))
            }
            GroundingChunk::MapsPlace { uri, name } => {
                Some((name.as_deref().unwrap_or(MAPS_PLACE_DEFAULT_TITLE), uri))
            }
            GroundingChunk::Maps { uri, title } => {
                Some((title.as_deref().unwrap_or(MAPS_DEFAULT_TITLE), uri))
            }
            GroundingChunk::Unknown => None,
        }
    }
}

/// Whether `url` is an absolute http(s) URL.
fn is_usable_url(url: &str) -> bool {
    Url::parse(url.trim())
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Converts grounding chunks into an ordered, URL-deduplicated source list.
///
/// The first title seen for a URL wins; chunks without a usable URL are skipped.
pub fn extract_sources(chunks: &[GroundingChunk]) -> Vec<SourceLink> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();

    for (title, url) in chunks.iter().filter_map(GroundingChunk::link) {
        let url = url.trim();
        if !is_usable_url(url) || !seen.insert(url.to_string()) {
            continue;
        }
        sources.push(SourceLink::new(title, url));
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> GroundingChunk {
        serde_json::from_value::<RawGroundingChunk>(value)
            .unwrap()
            .into()
    }

    #[test]
    fn test_decode_web_chunk() {
        let chunk = decode(json!({ "web": { "uri": "https://news.example/a", "title": "뉴스" } }));
        assert_eq!(
            chunk,
            GroundingChunk::Web {
                uri: "https://news.example/a".to_string(),
                title: Some("뉴스".to_string())
            }
        );
    }

    #[test]
    fn test_decode_prefers_source_place_over_map_uri() {
        let chunk = decode(json!({
            "maps": {
                "uri": "https://maps.example/generic",
                "title": "Generic",
                "sourcePlace": { "uri": "https://maps.example/place", "name": "스타벅스" }
            }
        }));
        assert_eq!(
            chunk,
            GroundingChunk::MapsPlace {
                uri: "https://maps.example/place".to_string(),
                name: Some("스타벅스".to_string())
            }
        );
    }

    #[test]
    fn test_decode_falls_through_empty_web_uri() {
        let chunk = decode(json!({
            "web": { "uri": "", "title": "nothing" },
            "maps": { "uri": "https://maps.example/x" }
        }));
        assert_eq!(
            chunk,
            GroundingChunk::Maps {
                uri: "https://maps.example/x".to_string(),
                title: None
            }
        );
    }

    #[test]
    fn test_decode_unknown_shape() {
        assert_eq!(decode(json!({ "retrievedContext": {} })), GroundingChunk::Unknown);
        assert_eq!(decode(json!({ "maps": { "title": "no link" } })), GroundingChunk::Unknown);
    }

    #[test]
    fn test_extract_deduplicates_keeping_first_title() {
        let chunks = vec![
            GroundingChunk::Web {
                uri: "https://a.example/report".to_string(),
                title: Some("First".to_string()),
            },
            GroundingChunk::Web {
                uri: "https://a.example/report".to_string(),
                title: Some("Second".to_string()),
            },
        ];

        let sources = extract_sources(&chunks);
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].title, "First");
        assert_eq!(sources[0].url, "https://a.example/report");
    }

    #[test]
    fn test_extract_default_titles_and_order() {
        let chunks = vec![
            GroundingChunk::Maps {
                uri: "https://maps.example/1".to_string(),
                title: None,
            },
            GroundingChunk::Unknown,
            GroundingChunk::MapsPlace {
                uri: "https://maps.example/2".to_string(),
                name: None,
            },
            GroundingChunk::Web {
                uri: "https://web.example/3".to_string(),
                title: None,
            },
        ];

        let titles: Vec<String> = extract_sources(&chunks)
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Google Maps", "Google Maps Location", "Web Source"]
        );
    }

    #[test]
    fn test_extract_skips_unusable_urls() {
        let chunks = vec![
            GroundingChunk::Web {
                uri: "not a url".to_string(),
                title: None,
            },
            GroundingChunk::Web {
                uri: "ftp://files.example/x".to_string(),
                title: None,
            },
        ];

        assert!(extract_sources(&chunks).is_empty());
    }
}

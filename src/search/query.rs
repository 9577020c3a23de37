// src/search/query.rs
// Scoped query construction: city detection, site filter, recency filter

use std::fmt;

/// Recognized cities in priority order: (lowercase needle, display form).
/// The first match wins even when several appear in the query.
pub const KNOWN_CITIES: [(&str, &str); 4] = [
    ("chicago", "Chicago"),
    ("new york", "New York"),
    ("los angeles", "Los Angeles"),
    ("san francisco", "San Francisco"),
];

/// Location used in the query when no city is recognized
pub const DEFAULT_LOCATION: &str = "United States";

/// Restricts results to the last 24 hours. Not configurable.
pub const RECENCY_FILTER: &str = "when:24h";

const LINKEDIN_JOBS: &str = "linkedin.com/jobs";

/// Pull a known city out of the query.
///
/// On a match the remaining query is lowercased, the first occurrence of the
/// city is removed and the result trimmed. Without a match the query is only
/// trimmed.
pub fn extract_location(query: &str) -> (String, Option<&'static str>) {
    let lowered = query.to_lowercase();

    for (needle, display) in KNOWN_CITIES {
        if lowered.contains(needle) {
            let cleaned = lowered.replacen(needle, "", 1);
            return (cleaned.trim().to_string(), Some(display));
        }
    }

    (query.trim().to_string(), None)
}

/// Site filter for a job board. Anything other than LinkedIn is a guess of the
/// form `{platform}.com/jobs`; the platform is not sanitized.
pub fn site_filter(platform: &str) -> String {
    let platform = platform.to_lowercase();
    if platform == "linkedin" {
        LINKEDIN_JOBS.to_string()
    } else {
        format!("{platform}.com/jobs")
    }
}

/// Search string sent to the provider, plus the location resolved while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedQuery {
    text: String,
    location: Option<&'static str>,
}

impl ScopedQuery {
    pub fn build(query: &str, platform: &str) -> Self {
        let (keywords, location) = extract_location(query);
        let text = format!(
            "site:{} \"{}\" \"{}\" {}",
            site_filter(platform),
            keywords,
            location.unwrap_or(DEFAULT_LOCATION),
            RECENCY_FILTER
        );

        Self { text, location }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Canonical city name, if one was recognized
    pub fn location(&self) -> Option<&'static str> {
        self.location
    }
}

impl fmt::Display for ScopedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

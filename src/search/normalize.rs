// src/search/normalize.rs
// Heuristic mapping of raw search hits into job records

use super::types::{ErrorPayload, JobListing, JobRecord, NOT_AVAILABLE, OrganicResult, SearchOutcome};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

const TITLE_SEPARATOR: &str = " | ";
const LOCATION_MARKER: &str = " in ";
const BULLET_MARKER: &str = "· ";

/// Split "Role | Company" titles. Only the first two segments are used.
pub fn split_title_company(title: &str) -> (String, Option<String>) {
    let mut parts = title.split(TITLE_SEPARATOR);
    match (parts.next(), parts.next()) {
        (Some(role), Some(company)) => (role.trim().to_string(), Some(company.trim().to_string())),
        _ => (title.trim().to_string(), None),
    }
}

/// Guess a location phrase from a snippet.
///
/// "... in Austin. Apply now" gives "Austin"; "Acme · Remote" gives "Remote".
/// Only the segment between the first and second " in " is considered.
pub fn location_from_snippet(snippet: &str) -> Option<String> {
    if let Some((_, after)) = snippet.split_once(LOCATION_MARKER) {
        let segment = after.split(LOCATION_MARKER).next().unwrap_or(after);
        let phrase = segment.split_once('.').map_or(segment, |(head, _)| head);
        return Some(phrase.trim().to_string());
    }

    snippet
        .split_once(BULLET_MARKER)
        .map(|(_, after)| after.trim().to_string())
}

/// Location for a record: the query's city when known, else the snippet guess, else "N/A"
pub fn resolve_location(resolved: Option<&str>, snippet: &str) -> String {
    match resolved {
        Some(city) if city != NOT_AVAILABLE => city.to_string(),
        _ => location_from_snippet(snippet).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

/// Turn one hit into a record. Hits without a link or title are dropped.
pub fn normalize_entry(entry: &OrganicResult, location: Option<&str>) -> Option<JobRecord> {
    let url = entry.link.as_deref().filter(|s| !s.is_empty())?;
    let raw_title = entry.title.as_deref().filter(|s| !s.is_empty())?;
    let snippet = entry.snippet.as_deref().unwrap_or_default();

    let (title, company) = split_title_company(raw_title);

    Some(JobRecord {
        title,
        company: company.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        location: resolve_location(location, snippet),
        url: url.to_string(),
        description: snippet.to_string(),
    })
}

/// Normalize a provider response, stamped with the current time
pub fn normalize(raw: &Value, location: Option<&str>, search_query: &str) -> SearchOutcome {
    normalize_at(raw, location, search_query, Utc::now())
}

/// Normalize a provider response.
///
/// An object carrying an `error` key is returned unchanged as the failure
/// shape. Entries that are not objects or do not decode are skipped.
pub fn normalize_at(
    raw: &Value,
    location: Option<&str>,
    search_query: &str,
    now: DateTime<Utc>,
) -> SearchOutcome {
    if let Value::Object(object) = raw
        && let Some(payload) = ErrorPayload::from_object(object)
    {
        return SearchOutcome::Failure(payload);
    }

    let jobs: Vec<JobRecord> = raw
        .get("organic")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| serde_json::from_value::<OrganicResult>(entry.clone()).ok())
                .filter_map(|entry| normalize_entry(&entry, location))
                .collect()
        })
        .unwrap_or_default();

    SearchOutcome::Success(JobListing {
        total: jobs.len(),
        jobs,
        search_query: search_query.to_string(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(link: Option<&str>, title: Option<&str>, snippet: Option<&str>) -> OrganicResult {
        OrganicResult {
            link: link.map(String::from),
            title: title.map(String::from),
            snippet: snippet.map(String::from),
        }
    }

    // ============================================================================
    // Title heuristics
    // ============================================================================

    #[test]
    fn test_split_title_company() {
        let (title, company) = split_title_company("Engineer | Acme Corp");
        assert_eq!(title, "Engineer");
        assert_eq!(company.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_split_title_extra_segments_discarded() {
        let (title, company) = split_title_company("Engineer | Acme | LinkedIn");
        assert_eq!(title, "Engineer");
        assert_eq!(company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_split_title_without_separator() {
        let (title, company) = split_title_company("  Backend Developer ");
        assert_eq!(title, "Backend Developer");
        assert!(company.is_none());
    }

    #[test]
    fn test_pipe_without_spaces_is_not_a_separator() {
        let (title, company) = split_title_company("C|C++ Developer");
        assert_eq!(title, "C|C++ Developer");
        assert!(company.is_none());
    }

    // ============================================================================
    // Snippet heuristics
    // ============================================================================

    #[test]
    fn test_location_from_in_phrase() {
        assert_eq!(
            location_from_snippet("Software role in Austin. Apply now").as_deref(),
            Some("Austin")
        );
    }

    #[test]
    fn test_location_in_phrase_without_period() {
        assert_eq!(
            location_from_snippet("Hiring now in Denver, CO").as_deref(),
            Some("Denver, CO")
        );
    }

    #[test]
    fn test_location_stops_at_second_in_phrase() {
        assert_eq!(
            location_from_snippet("Hiring in Austin in TX. Apply").as_deref(),
            Some("Austin")
        );
        assert_eq!(
            location_from_snippet("Onsite in Denver, CO in the Tech Center").as_deref(),
            Some("Denver, CO")
        );
    }

    #[test]
    fn test_location_from_bullet() {
        assert_eq!(
            location_from_snippet("Acme Corp · Seattle, WA ").as_deref(),
            Some("Seattle, WA")
        );
    }

    #[test]
    fn test_in_phrase_takes_precedence_over_bullet() {
        assert_eq!(
            location_from_snippet("Acme · Jobs in Boston. 3 days ago").as_deref(),
            Some("Boston")
        );
    }

    #[test]
    fn test_no_location_hint() {
        assert!(location_from_snippet("Great benefits and culture").is_none());
        assert_eq!(resolve_location(None, "Great benefits"), "N/A");
    }

    #[test]
    fn test_resolved_location_is_not_refined() {
        assert_eq!(
            resolve_location(Some("Chicago"), "Onsite in Austin."),
            "Chicago"
        );
    }

    // ============================================================================
    // Entries
    // ============================================================================

    #[test]
    fn test_entry_without_link_is_dropped() {
        assert!(normalize_entry(&entry(None, Some("T"), Some("s")), None).is_none());
        assert!(normalize_entry(&entry(Some(""), Some("T"), Some("s")), None).is_none());
    }

    #[test]
    fn test_entry_without_title_is_dropped() {
        assert!(normalize_entry(&entry(Some("https://x"), None, None), None).is_none());
        assert!(normalize_entry(&entry(Some("https://x"), Some(""), None), None).is_none());
    }

    #[test]
    fn test_entry_without_snippet() {
        let job = normalize_entry(&entry(Some("https://x"), Some("Dev"), None), None).unwrap();
        assert_eq!(job.company, "N/A");
        assert_eq!(job.location, "N/A");
        assert_eq!(job.description, "");
    }

    // ============================================================================
    // Whole responses
    // ============================================================================

    #[test]
    fn test_normalize_end_to_end_entry() {
        let raw = json!({
            "organic": [{
                "link": "https://linkedin.com/jobs/1",
                "title": "SWE | BigCo",
                "snippet": "Remote in New York."
            }]
        });
        let outcome = normalize(&raw, Some("New York"), "q");
        let jobs = outcome.jobs().unwrap();
        assert_eq!(
            jobs,
            &[JobRecord {
                title: "SWE".into(),
                company: "BigCo".into(),
                location: "New York".into(),
                url: "https://linkedin.com/jobs/1".into(),
                description: "Remote in New York.".into(),
            }]
        );
    }

    #[test]
    fn test_total_matches_jobs_and_bad_entries_skipped() {
        let raw = json!({
            "organic": [
                {"link": "https://a", "title": "A"},
                {"title": "no link"},
                {"link": "https://c"},
                "not an object",
                {"link": 42, "title": "wrong type"},
                {"link": "https://d", "title": "D | Co", "snippet": null}
            ]
        });
        let outcome = normalize(&raw, None, "q");
        let value = outcome.to_value();
        assert_eq!(value["total"], 2);
        assert_eq!(value["jobs"].as_array().unwrap().len(), 2);
        assert_eq!(value["jobs"][1]["company"], "Co");
    }

    #[test]
    fn test_missing_organic_is_empty_success() {
        let outcome = normalize(&json!({"searchParameters": {}}), None, "q");
        assert_eq!(outcome.jobs().map(<[JobRecord]>::len), Some(0));
    }

    #[test]
    fn test_error_object_passes_through_unchanged() {
        let raw = json!({"error": "Unauthorized", "statusCode": 403});
        let outcome = normalize(&raw, Some("Chicago"), "q");
        assert!(outcome.is_error());
        let value = outcome.to_value();
        assert_eq!(value, raw);
        assert!(value.get("jobs").is_none());
    }

    #[test]
    fn test_echoes_query_and_timestamp() {
        let now = DateTime::parse_from_rfc3339("2025-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let outcome = normalize_at(&json!({"organic": []}), None, "site:x \"y\"", now);
        let value = outcome.to_value();
        assert_eq!(value["search_query"], "site:x \"y\"");
        assert_eq!(value["timestamp"], "2025-03-01T12:00:00.000Z");
    }
}

//! Name search over venues and artists
//!
//! Matching is a case-insensitive substring test on the entity name; an
//! empty term matches everything. Results keep store order and carry the
//! number of upcoming shows owned by each matched entity.

use crate::aggregate::{upcoming_by_owner, ListingSummary};
use crate::error::Result;
use crate::storage::StorageContext;
use crate::types::{Artist, Listing, Show, Venue};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Search results as shown on the search page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Number of matched entities
    pub count: usize,
    /// Matched entities in store order
    pub data: Vec<ListingSummary>,
}

/// Case-insensitive substring matcher
#[derive(Debug, Clone)]
pub struct NameMatcher {
    needle: String,
}

impl NameMatcher {
    /// Matcher for `term` exactly as given; surrounding whitespace is part of it
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// Whether `name` contains the term, ignoring case
    pub fn matches(&self, name: &str) -> bool {
        self.needle.is_empty() || name.to_lowercase().contains(&self.needle)
    }
}

/// Search `entities` by name and count upcoming shows for each hit
pub fn search<E: Listing>(
    entities: &[E],
    shows: &[Show],
    term: &str,
    reference_time: NaiveDateTime,
) -> SearchResult {
    let matcher = NameMatcher::new(term);
    let matched: Vec<&E> = entities
        .iter()
        .filter(|entity| matcher.matches(entity.name()))
        .collect();

    summarize(matched, shows, reference_time)
}

/// Build a `SearchResult` from entities that already matched
///
/// Each count is bound to the matched entity's own id.
pub fn summarize<'a, E, I>(matched: I, shows: &[Show], reference_time: NaiveDateTime) -> SearchResult
where
    E: Listing + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let upcoming = upcoming_by_owner::<E>(shows, reference_time);

    let data: Vec<ListingSummary> = matched
        .into_iter()
        .map(|entity| ListingSummary {
            id: entity.id(),
            name: entity.name().to_string(),
            num_upcoming_shows: upcoming.get(&entity.id()).copied().unwrap_or(0),
        })
        .collect();

    SearchResult {
        count: data.len(),
        data,
    }
}

/// Search venues by name
pub async fn search_venues<S>(
    store: &S,
    term: &str,
    reference_time: NaiveDateTime,
) -> Result<SearchResult>
where
    S: StorageContext + ?Sized,
{
    let matcher = NameMatcher::new(term);
    let venues = store
        .filter_venues(&|venue: &Venue| matcher.matches(&venue.name))
        .await?;
    let shows = store.get_all_shows().await?;

    Ok(summarize(&venues, &shows, reference_time))
}

/// Search artists by name
pub async fn search_artists<S>(
    store: &S,
    term: &str,
    reference_time: NaiveDateTime,
) -> Result<SearchResult>
where
    S: StorageContext + ?Sized,
{
    let matcher = NameMatcher::new(term);
    let artists = store
        .filter_artists(&|artist: &Artist| matcher.matches(&artist.name))
        .await?;
    let shows = store.get_all_shows().await?;

    Ok(summarize(&artists, &shows, reference_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use std::collections::BTreeSet;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 14)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap()
    }

    fn artist(id: i64, name: &str) -> Artist {
        Artist {
            id,
            name: name.to_string(),
            city: "Seattle".to_string(),
            state: "WA".to_string(),
            phone: None,
            website: None,
            facebook_link: None,
            image_link: None,
            genres: BTreeSet::new(),
            seeking_venue: false,
            seeking_description: None,
        }
    }

    fn show(id: i64, artist_id: i64, hours: i64) -> Show {
        Show {
            id,
            venue_id: 1,
            artist_id,
            start_time: now() + Duration::hours(hours),
        }
    }

    #[test]
    fn matcher_is_case_insensitive() {
        let matcher = NameMatcher::new("ABC");
        assert!(matcher.matches("Abcdef Band"));
        assert!(NameMatcher::new("abc").matches("Abcdef Band"));
        assert!(!matcher.matches("Ab Cdef"));
    }

    #[test]
    fn empty_term_matches_everything() {
        let artists = vec![artist(1, "Jon"), artist(2, "The Wild Sax Band"), artist(3, "")];
        let result = search(&artists, &[], "", now());
        assert_eq!(result.count, 3);
        assert_eq!(result.data.len(), 3);
    }

    #[test]
    fn partial_term_matches_several() {
        let artists = vec![artist(1, "Jon"), artist(2, "John"), artist(3, "Matt Quevedo")];
        let result = search(&artists, &[], "jo", now());

        assert_eq!(result.count, 2);
        let ids: Vec<i64> = result.data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn term_must_be_contiguous() {
        let artists = vec![artist(1, "Jon"), artist(2, "John")];
        let result = search(&artists, &[], "jon", now());

        assert_eq!(result.count, 1);
        assert_eq!(result.data[0].name, "Jon");
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_term() {
        let artists = vec![artist(1, "The Wild Sax Band"), artist(2, "Jon")];

        assert_eq!(search(&artists, &[], "Band ", now()).count, 0);
        assert_eq!(search(&artists, &[], "   ", now()).count, 0);
        assert_eq!(search(&artists, &[], " Sax ", now()).count, 1);
    }

    #[test]
    fn counts_belong_to_matched_entity() {
        let artists = vec![artist(1, "Jon"), artist(2, "John"), artist(3, "Matt")];
        let shows = vec![
            show(1, 1, 1),
            show(2, 1, -1),
            show(3, 2, 3),
            show(4, 2, 4),
            show(5, 3, 5),
        ];

        let result = search(&artists, &shows, "jo", now());

        assert_eq!(result.data[0].num_upcoming_shows, 1);
        assert_eq!(result.data[1].num_upcoming_shows, 2);
    }

    #[test]
    fn no_match_is_empty() {
        let artists = vec![artist(1, "Jon")];
        let result = search(&artists, &[], "zzz", now());
        assert_eq!(result.count, 0);
        assert!(result.data.is_empty());
    }

    #[test]
    fn serializes_like_search_page_payload() {
        let artists = vec![artist(4, "Guns N Petals")];
        let json = serde_json::to_value(search(&artists, &[], "guns", now())).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["id"], 4);
        assert_eq!(json["data"][0]["name"], "Guns N Petals");
        assert_eq!(json["data"][0]["num_upcoming_shows"], 0);
    }
}

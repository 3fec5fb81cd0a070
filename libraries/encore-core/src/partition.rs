//! Temporal partitioning of shows
//!
//! A show is upcoming when it starts strictly after the reference time and
//! past when it starts strictly before it. A show starting exactly at the
//! reference time belongs to neither bucket.

use crate::types::Show;
use chrono::NaiveDateTime;

/// Which side of the reference time a show falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Started strictly before the reference time
    Past,
    /// Starts strictly after the reference time
    Upcoming,
}

/// Classify a start time against the reference time
///
/// Returns `None` on the exact boundary.
pub fn classify(start_time: NaiveDateTime, reference_time: NaiveDateTime) -> Option<Bucket> {
    if start_time > reference_time {
        Some(Bucket::Upcoming)
    } else if start_time < reference_time {
        Some(Bucket::Past)
    } else {
        None
    }
}

/// Shows split around a reference time
///
/// Both buckets keep the relative order of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    /// Shows that already started
    pub past: Vec<&'a Show>,
    /// Shows still to come
    pub upcoming: Vec<&'a Show>,
}

/// Split `shows` into past and upcoming buckets
pub fn partition(shows: &[Show], reference_time: NaiveDateTime) -> Partition<'_> {
    let mut split = Partition {
        past: Vec::new(),
        upcoming: Vec::new(),
    };

    for show in shows {
        match classify(show.start_time, reference_time) {
            Some(Bucket::Past) => split.past.push(show),
            Some(Bucket::Upcoming) => split.upcoming.push(show),
            None => {}
        }
    }

    split
}

/// Count shows starting strictly after the reference time
pub fn count_upcoming<'a, I>(shows: I, reference_time: NaiveDateTime) -> usize
where
    I: IntoIterator<Item = &'a Show>,
{
    shows
        .into_iter()
        .filter(|show| classify(show.start_time, reference_time) == Some(Bucket::Upcoming))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    fn show(id: i64, offset_minutes: i64) -> Show {
        Show {
            id,
            venue_id: 1,
            artist_id: 1,
            start_time: reference() + Duration::minutes(offset_minutes),
        }
    }

    #[test]
    fn splits_around_reference() {
        let shows = vec![show(1, -60), show(2, 60)];
        let split = partition(&shows, reference());

        assert_eq!(split.past, vec![&shows[0]]);
        assert_eq!(split.upcoming, vec![&shows[1]]);
    }

    #[test]
    fn exact_boundary_is_in_neither_bucket() {
        let shows = vec![show(1, 0)];
        let split = partition(&shows, reference());

        assert!(split.past.is_empty());
        assert!(split.upcoming.is_empty());
        assert_eq!(classify(shows[0].start_time, reference()), None);
    }

    #[test]
    fn preserves_input_order() {
        let shows = vec![show(1, 30), show(2, -5), show(3, 10), show(4, -90), show(5, 1)];
        let split = partition(&shows, reference());

        let past: Vec<i64> = split.past.iter().map(|s| s.id).collect();
        let upcoming: Vec<i64> = split.upcoming.iter().map(|s| s.id).collect();
        assert_eq!(past, vec![2, 4]);
        assert_eq!(upcoming, vec![1, 3, 5]);
    }

    #[test]
    fn empty_input_gives_empty_buckets() {
        let split = partition(&[], reference());
        assert!(split.past.is_empty());
        assert!(split.upcoming.is_empty());
    }

    #[test]
    fn count_upcoming_matches_partition() {
        let shows = vec![show(1, -1), show(2, 0), show(3, 1), show(4, 1440)];
        assert_eq!(count_upcoming(&shows, reference()), 2);
        assert_eq!(
            count_upcoming(&shows, reference()),
            partition(&shows, reference()).upcoming.len()
        );
    }

    #[test]
    fn one_second_either_side_is_classified() {
        let before = reference() - Duration::seconds(1);
        let after = reference() + Duration::seconds(1);
        assert_eq!(classify(before, reference()), Some(Bucket::Past));
        assert_eq!(classify(after, reference()), Some(Bucket::Upcoming));
    }
}

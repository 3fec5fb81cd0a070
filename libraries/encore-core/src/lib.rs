//! Encore Core
//!
//! Domain types, the storage trait, and the show aggregation logic for the
//! Encore venue/artist booking directory.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Venue`, `Artist`, `Show` and their write payloads
//! - **Storage Trait**: `StorageContext`, implemented by `encore-storage`
//! - **Temporal Partitioning**: splitting shows into past and upcoming
//! - **Projection**: flattening a show and its counterpart into a `ShowView`
//! - **Aggregation**: venue/artist detail pages, location groups, show listing
//! - **Search**: case-insensitive name matching with upcoming-show counts
//! - **Submissions**: typed, validated create/edit payloads from form data
//! - **Error Handling**: unified `EncoreError` and `Result` types
//!
//! Every aggregation takes an explicit store handle and one reference time,
//! so all buckets in a single response agree with each other.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use encore_core::partition::partition;
//! use encore_core::types::Show;
//!
//! let at = |h| NaiveDate::from_ymd_opt(2025, 5, 1).unwrap().and_hms_opt(h, 0, 0).unwrap();
//! let shows = vec![
//!     Show { id: 1, venue_id: 1, artist_id: 1, start_time: at(18) },
//!     Show { id: 2, venue_id: 1, artist_id: 2, start_time: at(22) },
//! ];
//!
//! let split = partition(&shows, at(20));
//! assert_eq!(split.past.len(), 1);
//! assert_eq!(split.upcoming.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregate;
pub mod error;
pub mod partition;
pub mod projection;
pub mod search;
pub mod storage;
pub mod submission;
pub mod time;
pub mod types;

// Re-export commonly used types
pub use error::{EncoreError, PersistenceError, Result, WriteResult};
pub use storage::StorageContext;

pub use types::{
    Artist, ArtistId, CreateArtist, CreateShow, CreateVenue, Listing, LocationCount, Show, ShowId,
    Venue, VenueId,
};

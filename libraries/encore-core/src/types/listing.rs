//! Entities that appear in directory listings and search results

use super::{Artist, Show, Venue};

/// An entity with a display name that owns shows through one foreign key
pub trait Listing {
    /// Entity id
    fn id(&self) -> i64;

    /// Display name matched by search
    fn name(&self) -> &str;

    /// The id of the entity of this kind that `show` belongs to
    fn owner_of(show: &Show) -> i64;
}

impl Listing for Venue {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn owner_of(show: &Show) -> i64 {
        show.venue_id
    }
}

impl Listing for Artist {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn owner_of(show: &Show) -> i64 {
        show.artist_id
    }
}

//! Domain types: venues, artists and the shows joining them

mod artist;
mod listing;
mod show;
mod venue;

pub use artist::{Artist, ArtistId, CreateArtist};
pub use listing::Listing;
pub use show::{CreateShow, Show, ShowId};
pub use venue::{CreateVenue, LocationCount, Venue, VenueId};

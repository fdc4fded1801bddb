// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait VenueRepo {
    fn create_venue(&self, venue: VenueRecord) -> Result<VenueId>;
    // Full replace of all mutable fields. NotFound if the id is unknown.
    fn update_venue(&self, venue: &Venue) -> Result<()>;
    // Dependent shows and genre rows are removed along with the venue.
    fn delete_venue(&self, id: VenueId) -> Result<()>;

    fn get_venue(&self, id: VenueId) -> Result<Venue>;
    // Ordered by (city, state, id).
    fn all_venues(&self) -> Result<Vec<Venue>>;
    fn count_venues(&self) -> Result<usize>;

    // Case-insensitive match of the name against a LIKE pattern with `\`
    // as the escape character. Ordered by id.
    fn venues_by_name(&self, name_pattern: &str) -> Result<Vec<(VenueId, String)>>;
}

pub trait ArtistRepo {
    fn create_artist(&self, artist: ArtistRecord) -> Result<ArtistId>;
    // Full replace of all mutable fields. NotFound if the id is unknown.
    fn update_artist(&self, artist: &Artist) -> Result<()>;

    fn get_artist(&self, id: ArtistId) -> Result<Artist>;
    // Ordered by id.
    fn all_artists(&self) -> Result<Vec<(ArtistId, String)>>;
    fn count_artists(&self) -> Result<usize>;

    // Case-insensitive match of the name against a LIKE pattern with `\`
    // as the escape character. Ordered by id.
    fn artists_by_name(&self, name_pattern: &str) -> Result<Vec<(ArtistId, String)>>;
}

// A show on a venue page, enriched with the booked artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueShowRow {
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_url: Option<Url>,
    pub start_time: Timestamp,
}

// A show on an artist page, enriched with the booked venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistShowRow {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_url: Option<Url>,
    pub start_time: Timestamp,
}

// One row of the global shows listing, enriched with both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListingRow {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_url: Option<Url>,
    pub start_time: Timestamp,
}

pub trait ShowRepo {
    fn create_show(&self, show: ShowRecord) -> Result<ShowId>;

    // All chronological, with the id as tie breaker.
    fn shows_of_venue(&self, venue_id: VenueId) -> Result<Vec<VenueShowRow>>;
    fn shows_of_artist(&self, artist_id: ArtistId) -> Result<Vec<ArtistShowRow>>;
    fn all_shows(&self) -> Result<Vec<ShowListingRow>>;

    fn count_shows(&self) -> Result<usize>;

    // Number of shows starting strictly after `now`, per venue. Venues
    // without any upcoming show are absent from the result.
    fn count_upcoming_shows_by_venue(&self, now: Timestamp) -> Result<Vec<(VenueId, u64)>>;
}

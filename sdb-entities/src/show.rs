use crate::{id::*, time::Timestamp};

// A booking of one artist at one venue. Both references are mandatory;
// whether the show is "past" or "upcoming" is not an attribute of the show
// but of the instant it is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowRecord {
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: Timestamp,
}

// Convenience type that merges the tuple (ShowId, ShowRecord)
// into a single, flat struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Show {
    pub id: ShowId,
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: Timestamp,
}

impl From<(ShowId, ShowRecord)> for Show {
    fn from(from: (ShowId, ShowRecord)) -> Self {
        let (
            id,
            ShowRecord {
                artist_id,
                venue_id,
                start_time,
            },
        ) = from;
        Self {
            id,
            artist_id,
            venue_id,
            start_time,
        }
    }
}

impl From<Show> for (ShowId, ShowRecord) {
    fn from(from: Show) -> Self {
        let Show {
            id,
            artist_id,
            venue_id,
            start_time,
        } = from;
        (
            id,
            ShowRecord {
                artist_id,
                venue_id,
                start_time,
            },
        )
    }
}

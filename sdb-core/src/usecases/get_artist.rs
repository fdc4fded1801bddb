use super::prelude::*;

// One show on an artist page, enriched with the booked venue. The start
// time is already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistShow {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_url: Option<Url>,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
}

impl ArtistDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

// Counterpart of `get_venue` for the other side of a booking; the same
// partition rules apply.
pub fn get_artist<R>(repo: &R, id: ArtistId) -> Result<ArtistDetail>
where
    R: ArtistRepo + ShowRepo,
{
    let artist = repo.get_artist(id)?;
    let now = Timestamp::now();
    let (past_shows, upcoming_shows) = partition_shows(repo.shows_of_artist(id)?, now);
    Ok(ArtistDetail {
        artist,
        past_shows,
        upcoming_shows,
    })
}

fn partition_shows(rows: Vec<ArtistShowRow>, now: Timestamp) -> (Vec<ArtistShow>, Vec<ArtistShow>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for row in rows {
        let ArtistShowRow {
            venue_id,
            venue_name,
            venue_image_url,
            start_time,
        } = row;
        let show = ArtistShow {
            venue_id,
            venue_name,
            venue_image_url,
            start_time: start_time.format_display(),
        };
        if start_time > now {
            upcoming.push(show);
        } else if start_time < now {
            past.push(show);
        }
    }
    (past, upcoming)
}

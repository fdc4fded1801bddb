use super::prelude::*;

// One row of the global shows listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_url: Option<Url>,
    pub start_time: String,
}

// Unfiltered listing of all shows, chronological. Fine at directory scale;
// pagination is deliberately out of scope.
pub fn list_shows<R: ShowRepo>(repo: &R) -> Result<Vec<ShowListing>> {
    Ok(repo
        .all_shows()?
        .into_iter()
        .map(|row| {
            let ShowListingRow {
                venue_id,
                venue_name,
                artist_id,
                artist_name,
                artist_image_url,
                start_time,
            } = row;
            ShowListing {
                venue_id,
                venue_name,
                artist_id,
                artist_name,
                artist_image_url,
                start_time: start_time.format_display(),
            }
        })
        .collect())
}

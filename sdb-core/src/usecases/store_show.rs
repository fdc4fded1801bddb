use super::prelude::*;

// Raw field values as they arrive from the show form. The references are
// already numeric, the start time is still the raw form input.
#[derive(Debug, Clone)]
pub struct NewShow {
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: String,
}

pub fn prepare_new_show(new_show: NewShow) -> Result<ShowRecord> {
    let NewShow {
        artist_id,
        venue_id,
        start_time,
    } = new_show;
    let start_time = start_time.parse::<Timestamp>()?;
    Ok(ShowRecord {
        artist_id,
        venue_id,
        start_time,
    })
}

// Referential integrity is enforced here, not left to the storage engine:
// both references must resolve *before* the insert is attempted, so a
// dangling reference can never leave a partial show behind.
pub fn store_created_show<R>(repo: &R, show: ShowRecord) -> Result<Show>
where
    R: ArtistRepo + VenueRepo + ShowRepo,
{
    repo.get_artist(show.artist_id).map_err(|err| match err {
        RepoError::NotFound => Error::ArtistNotFound(show.artist_id),
        err => Error::Repo(err),
    })?;
    repo.get_venue(show.venue_id).map_err(|err| match err {
        RepoError::NotFound => Error::VenueNotFound(show.venue_id),
        err => Error::Repo(err),
    })?;
    let id = repo.create_show(show)?;
    Ok((id, show).into())
}

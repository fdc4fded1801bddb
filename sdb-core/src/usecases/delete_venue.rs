use super::prelude::*;

// The venue is loaded first so the caller can report the name of what was
// deleted; an unknown id fails with NotFound before any mutation. Dependent
// shows are removed along with the venue.
pub fn delete_venue<R: VenueRepo>(repo: &R, id: VenueId) -> Result<Venue> {
    let venue = repo.get_venue(id)?;
    repo.delete_venue(id)?;
    Ok(venue)
}

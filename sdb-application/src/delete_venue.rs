use super::*;

// Returns the deleted venue so that callers can report what disappeared.
// Dependent shows are removed within the same transaction.
pub fn delete_venue(connections: &sqlite::Connections, id: VenueId) -> Result<Venue> {
    let venue = connections.exclusive()?.transaction(|conn| {
        usecases::delete_venue(conn, id).map_err(|err| {
            warn!("Failed to delete venue {id}: {err}");
            err
        })
    })?;
    Ok(venue)
}

use super::*;
use usecases::NewVenue;

// An update replaces all mutable fields of the venue. The same raw form
// payload as for a create is accepted; an unknown id aborts the
// transaction with NotFound before anything is written.
pub fn update_venue(
    connections: &sqlite::Connections,
    id: VenueId,
    update_venue: NewVenue,
) -> Result<Venue> {
    let record = usecases::prepare_new_venue(update_venue)?;
    let venue = connections.exclusive()?.transaction(|conn| {
        usecases::store_updated_venue(conn, id, record).map_err(|err| {
            warn!("Failed to store updated venue {id}: {err}");
            err
        })
    })?;
    Ok(venue)
}

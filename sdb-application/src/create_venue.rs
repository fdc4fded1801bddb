use super::*;
use usecases::NewVenue;

pub fn create_venue(connections: &sqlite::Connections, new_venue: NewVenue) -> Result<Venue> {
    // Validation never touches storage, so it runs before the write
    // connection is acquired.
    let record = usecases::prepare_new_venue(new_venue)?;
    let venue = connections.exclusive()?.transaction(|conn| {
        usecases::store_created_venue(conn, record).map_err(|err| {
            warn!("Failed to store newly created venue: {err}");
            err
        })
    })?;
    Ok(venue)
}

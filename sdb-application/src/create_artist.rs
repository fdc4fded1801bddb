use super::*;
use usecases::NewArtist;

pub fn create_artist(connections: &sqlite::Connections, new_artist: NewArtist) -> Result<Artist> {
    // Validation never touches storage, so it runs before the write
    // connection is acquired.
    let record = usecases::prepare_new_artist(new_artist)?;
    let artist = connections.exclusive()?.transaction(|conn| {
        usecases::store_created_artist(conn, record).map_err(|err| {
            warn!("Failed to store newly created artist: {err}");
            err
        })
    })?;
    Ok(artist)
}

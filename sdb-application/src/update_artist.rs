use super::*;
use usecases::NewArtist;

// Counterpart of `update_venue` for artists.
pub fn update_artist(
    connections: &sqlite::Connections,
    id: ArtistId,
    update_artist: NewArtist,
) -> Result<Artist> {
    let record = usecases::prepare_new_artist(update_artist)?;
    let artist = connections.exclusive()?.transaction(|conn| {
        usecases::store_updated_artist(conn, id, record).map_err(|err| {
            warn!("Failed to store updated artist {id}: {err}");
            err
        })
    })?;
    Ok(artist)
}

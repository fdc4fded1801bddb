use super::prelude::*;

// Unfiltered id/name listing of the whole table, ordered by id. Fine at
// directory scale; pagination is deliberately out of scope.
pub fn list_artists<R: ArtistRepo>(repo: &R) -> Result<Vec<(ArtistId, String)>> {
    Ok(repo.all_artists()?)
}

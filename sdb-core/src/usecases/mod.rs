mod delete_venue;
mod error;
mod get_artist;
mod get_venue;
mod list_artists;
mod list_shows;
mod query_venues;
mod search;
mod store_artist;
mod store_show;
mod store_venue;

pub use self::{
    delete_venue::*, error::Error, get_artist::*, get_venue::*, list_artists::*, list_shows::*,
    query_venues::*, search::*, store_artist::*, store_show::*, store_venue::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}

// Genre tags arrive as an ordered multi-select; blank entries are dropped,
// the order of the remaining ones is preserved.
pub(crate) fn prepare_genre_list(genres: Vec<String>) -> Vec<String> {
    genres
        .into_iter()
        .filter_map(crate::util::parse::non_blank)
        .collect()
}

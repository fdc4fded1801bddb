use crate::{id::*, url::Url};

// Mutable attributes of an artist, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<Url>,
    pub facebook: Option<Url>,
    pub image_url: Option<Url>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

// Convenience type that merges the tuple (ArtistId, ArtistRecord)
// into a single, flat struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<Url>,
    pub facebook: Option<Url>,
    pub image_url: Option<Url>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<(ArtistId, ArtistRecord)> for Artist {
    fn from(from: (ArtistId, ArtistRecord)) -> Self {
        let (
            id,
            ArtistRecord {
                name,
                city,
                state,
                phone,
                website,
                facebook,
                image_url,
                genres,
                seeking_venue,
                seeking_description,
            },
        ) = from;
        Self {
            id,
            name,
            city,
            state,
            phone,
            website,
            facebook,
            image_url,
            genres,
            seeking_venue,
            seeking_description,
        }
    }
}

impl From<Artist> for (ArtistId, ArtistRecord) {
    fn from(from: Artist) -> Self {
        let Artist {
            id,
            name,
            city,
            state,
            phone,
            website,
            facebook,
            image_url,
            genres,
            seeking_venue,
            seeking_description,
        } = from;
        (
            id,
            ArtistRecord {
                name,
                city,
                state,
                phone,
                website,
                facebook,
                image_url,
                genres,
                seeking_venue,
                seeking_description,
            },
        )
    }
}

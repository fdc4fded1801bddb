use crate::{id::*, url::Url};

// Mutable attributes of a venue, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueRecord {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<Url>,
    pub facebook: Option<Url>,
    pub image_url: Option<Url>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

// Convenience type that merges the tuple (VenueId, VenueRecord)
// into a single, flat struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<Url>,
    pub facebook: Option<Url>,
    pub image_url: Option<Url>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<(VenueId, VenueRecord)> for Venue {
    fn from(from: (VenueId, VenueRecord)) -> Self {
        let (
            id,
            VenueRecord {
                name,
                address,
                city,
                state,
                phone,
                website,
                facebook,
                image_url,
                genres,
                seeking_talent,
                seeking_description,
            },
        ) = from;
        Self {
            id,
            name,
            address,
            city,
            state,
            phone,
            website,
            facebook,
            image_url,
            genres,
            seeking_talent,
            seeking_description,
        }
    }
}

impl From<Venue> for (VenueId, VenueRecord) {
    fn from(from: Venue) -> Self {
        let Venue {
            id,
            name,
            address,
            city,
            state,
            phone,
            website,
            facebook,
            image_url,
            genres,
            seeking_talent,
            seeking_description,
        } = from;
        (
            id,
            VenueRecord {
                name,
                address,
                city,
                state,
                phone,
                website,
                facebook,
                image_url,
                genres,
                seeking_talent,
                seeking_description,
            },
        )
    }
}

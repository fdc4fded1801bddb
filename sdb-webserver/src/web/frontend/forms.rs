use rocket::FromForm;

use sdb_core::{entities::*, usecases};

// The field names mirror the HTML form controls; everything arrives as
// text and is validated by the usecase layer, so that a failed validation
// can re-render the form with the submitted values intact.

#[derive(Debug, Clone, Default, FromForm)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<VenueForm> for usecases::NewVenue {
    fn from(from: VenueForm) -> Self {
        let VenueForm {
            name,
            city,
            state,
            address,
            phone,
            genres,
            website_link,
            facebook_link,
            image_link,
            seeking_talent,
            seeking_description,
        } = from;
        Self {
            name,
            address,
            city,
            state,
            phone,
            website: website_link,
            facebook: facebook_link,
            image_url: image_link,
            genres,
            seeking_talent,
            seeking_description,
        }
    }
}

// Prefill for the edit form.
impl From<&Venue> for VenueForm {
    fn from(from: &Venue) -> Self {
        Self {
            name: from.name.clone(),
            city: from.city.clone(),
            state: from.state.clone(),
            address: from.address.clone(),
            phone: from.phone.clone(),
            genres: from.genres.clone(),
            website_link: from.website.as_ref().map(Url::to_string),
            facebook_link: from.facebook.as_ref().map(Url::to_string),
            image_link: from.image_url.as_ref().map(Url::to_string),
            seeking_talent: from.seeking_talent,
            seeking_description: from.seeking_description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, FromForm)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<ArtistForm> for usecases::NewArtist {
    fn from(from: ArtistForm) -> Self {
        let ArtistForm {
            name,
            city,
            state,
            phone,
            genres,
            website_link,
            facebook_link,
            image_link,
            seeking_venue,
            seeking_description,
        } = from;
        Self {
            name,
            city,
            state,
            phone,
            website: website_link,
            facebook: facebook_link,
            image_url: image_link,
            genres,
            seeking_venue,
            seeking_description,
        }
    }
}

// Prefill for the edit form.
impl From<&Artist> for ArtistForm {
    fn from(from: &Artist) -> Self {
        Self {
            name: from.name.clone(),
            city: from.city.clone(),
            state: from.state.clone(),
            phone: from.phone.clone(),
            genres: from.genres.clone(),
            website_link: from.website.as_ref().map(Url::to_string),
            facebook_link: from.facebook.as_ref().map(Url::to_string),
            image_link: from.image_url.as_ref().map(Url::to_string),
            seeking_venue: from.seeking_venue,
            seeking_description: from.seeking_description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, FromForm)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn to_new_show(&self) -> Result<usecases::NewShow, usecases::Error> {
        let artist_id = self
            .artist_id
            .trim()
            .parse::<ArtistId>()
            .map_err(|_| usecases::Error::ArtistId)?;
        let venue_id = self
            .venue_id
            .trim()
            .parse::<VenueId>()
            .map_err(|_| usecases::Error::VenueId)?;
        Ok(usecases::NewShow {
            artist_id,
            venue_id,
            start_time: self.start_time.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, FromForm)]
pub struct SearchQuery {
    pub search_term: String,
}

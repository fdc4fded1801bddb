use super::{prelude::*, prepare_genre_list};
use crate::util::{
    parse::{non_blank, parse_url_param},
    validate,
};

// Raw field values as they arrive from the venue form. Conversion into a
// `VenueRecord` is the validation step; nothing unvalidated ever reaches a
// repository.
#[derive(Debug, Clone, Default)]
pub struct NewVenue {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub image_url: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

pub fn prepare_new_venue(new_venue: NewVenue) -> Result<VenueRecord> {
    let NewVenue {
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
    } = new_venue;
    let name = non_blank(name).ok_or(Error::Name)?;
    let address = non_blank(address).ok_or(Error::Address)?;
    let city = non_blank(city).ok_or(Error::City)?;
    let state = non_blank(state).ok_or(Error::State)?;
    let phone = phone.and_then(non_blank);
    if let Some(ref phone) = phone {
        if !validate::is_valid_phone_number(phone) {
            return Err(Error::Phone);
        }
    }
    let website = website.as_deref().map(parse_url_param).transpose()?.flatten();
    let facebook = facebook
        .as_deref()
        .map(parse_url_param)
        .transpose()?
        .flatten();
    let image_url = image_url
        .as_deref()
        .map(parse_url_param)
        .transpose()?
        .flatten();
    let genres = prepare_genre_list(genres);
    let seeking_description = seeking_description.and_then(non_blank);
    Ok(VenueRecord {
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
    })
}

pub fn store_created_venue<R: VenueRepo>(repo: &R, venue: VenueRecord) -> Result<Venue> {
    let id = repo.create_venue(venue.clone())?;
    Ok((id, venue).into())
}

pub fn store_updated_venue<R: VenueRepo>(
    repo: &R,
    id: VenueId,
    venue: VenueRecord,
) -> Result<Venue> {
    let venue = Venue::from((id, venue));
    // An unknown id surfaces as NotFound before any row is written.
    repo.update_venue(&venue)?;
    Ok(venue)
}

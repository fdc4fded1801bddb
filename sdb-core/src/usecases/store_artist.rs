use super::{prelude::*, prepare_genre_list};
use crate::util::{
    parse::{non_blank, parse_url_param},
    validate,
};

// Raw field values as they arrive from the artist form.
#[derive(Debug, Clone, Default)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub image_url: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

pub fn prepare_new_artist(new_artist: NewArtist) -> Result<ArtistRecord> {
    let NewArtist {
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
    } = new_artist;
    let name = non_blank(name).ok_or(Error::Name)?;
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
    Ok(ArtistRecord {
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
    })
}

pub fn store_created_artist<R: ArtistRepo>(repo: &R, artist: ArtistRecord) -> Result<Artist> {
    let id = repo.create_artist(artist.clone())?;
    Ok((id, artist).into())
}

pub fn store_updated_artist<R: ArtistRepo>(
    repo: &R,
    id: ArtistId,
    artist: ArtistRecord,
) -> Result<Artist> {
    let artist = Artist::from((id, artist));
    // An unknown id surfaces as NotFound before any row is written.
    repo.update_artist(&artist)?;
    Ok(artist)
}

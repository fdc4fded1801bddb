// NOTE:
// The `start_time` column is stored as unix timestamp in **seconds**.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = venues)]
#[diesel(treat_none_as_null = true)]
pub struct NewVenue<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub phone: Option<&'a str>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub image_url: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<&'a str>,
}

#[derive(Queryable)]
pub struct VenueEntity {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub image_url: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = venue_genres)]
pub struct NewVenueGenre<'a> {
    pub venue_id: i64,
    pub position: i32,
    pub genre: &'a str,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = artists)]
#[diesel(treat_none_as_null = true)]
pub struct NewArtist<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub phone: Option<&'a str>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub image_url: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<&'a str>,
}

#[derive(Queryable)]
pub struct ArtistEntity {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub image_url: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = artist_genres)]
pub struct NewArtistGenre<'a> {
    pub artist_id: i64,
    pub position: i32,
    pub genre: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = shows)]
pub struct NewShow {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: i64,
}

#[derive(Queryable)]
pub struct ShowListingEntity {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_url: Option<String>,
    pub start_time: i64,
}

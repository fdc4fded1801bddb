use crate::{
    entities::{ArtistId, TimestampParseError, VenueId},
    repositories,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name must not be empty")]
    Name,
    #[error("The address must not be empty")]
    Address,
    #[error("The city must not be empty")]
    City,
    #[error("The state must not be empty")]
    State,
    #[error("Invalid phone number")]
    Phone,
    #[error("Invalid URL")]
    Url,
    #[error("Invalid artist id")]
    ArtistId,
    #[error("Invalid venue id")]
    VenueId,
    #[error("Invalid start time, expected YYYY-MM-DD HH:MM:SS")]
    StartTime,
    #[error("Artist {0} does not exist")]
    ArtistNotFound(ArtistId),
    #[error("Venue {0} does not exist")]
    VenueNotFound(VenueId),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<TimestampParseError> for Error {
    fn from(_: TimestampParseError) -> Self {
        Self::StartTime
    }
}

impl From<url::ParseError> for Error {
    fn from(_: url::ParseError) -> Self {
        Self::Url
    }
}

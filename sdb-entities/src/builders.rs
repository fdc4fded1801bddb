pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{artist_builder::*, venue_builder::*};

pub mod venue_builder {

    use super::*;
    use crate::{id::*, venue::*};

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.venue.id = VenueId::new(id);
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.venue.address = address.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.venue.city = city.into();
            self
        }
        pub fn state(mut self, state: &str) -> Self {
            self.venue.state = state.into();
            self
        }
        pub fn phone(mut self, phone: Option<&str>) -> Self {
            self.venue.phone = phone.map(Into::into);
            self
        }
        pub fn genres(mut self, genres: Vec<impl Into<String>>) -> Self {
            self.venue.genres = genres.into_iter().map(Into::into).collect();
            self
        }
        pub fn image_url(mut self, image_url: Option<&str>) -> Self {
            self.venue.image_url = image_url.map(|url| url.parse().unwrap());
            self
        }
        pub fn seeking_talent(mut self, seeking: bool) -> Self {
            self.venue.seeking_talent = seeking;
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> Self::Build {
            VenueBuild {
                venue: Venue {
                    id: VenueId::default(),
                    name: Default::default(),
                    address: Default::default(),
                    city: Default::default(),
                    state: Default::default(),
                    phone: None,
                    website: None,
                    facebook: None,
                    image_url: None,
                    genres: vec![],
                    seeking_talent: false,
                    seeking_description: None,
                },
            }
        }
    }
}

pub mod artist_builder {

    use super::*;
    use crate::{artist::*, id::*};

    #[derive(Debug)]
    pub struct ArtistBuild {
        artist: Artist,
    }

    impl ArtistBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.artist.id = ArtistId::new(id);
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.artist.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.artist.city = city.into();
            self
        }
        pub fn state(mut self, state: &str) -> Self {
            self.artist.state = state.into();
            self
        }
        pub fn genres(mut self, genres: Vec<impl Into<String>>) -> Self {
            self.artist.genres = genres.into_iter().map(Into::into).collect();
            self
        }
        pub fn image_url(mut self, image_url: Option<&str>) -> Self {
            self.artist.image_url = image_url.map(|url| url.parse().unwrap());
            self
        }
        pub fn seeking_venue(mut self, seeking: bool) -> Self {
            self.artist.seeking_venue = seeking;
            self
        }
        pub fn finish(self) -> Artist {
            self.artist
        }
    }

    impl Builder for Artist {
        type Build = ArtistBuild;
        fn build() -> Self::Build {
            ArtistBuild {
                artist: Artist {
                    id: ArtistId::default(),
                    name: Default::default(),
                    city: Default::default(),
                    state: Default::default(),
                    phone: None,
                    website: None,
                    facebook: None,
                    image_url: None,
                    genres: vec![],
                    seeking_venue: false,
                    seeking_description: None,
                },
            }
        }
    }
}

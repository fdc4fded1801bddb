pub mod prelude {

    pub use time::Duration;

    pub use sdb_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use crate::sqlite::*;
    }

    pub use crate::{error::*, prelude as flows};

    pub fn default_new_venue() -> usecases::NewVenue {
        usecases::NewVenue {
            name: "The Fillmore".into(),
            address: "1805 Geary St".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: Some("4155671234".into()),
            genres: vec!["Rock".into(), "Jazz".into()],
            seeking_talent: false,
            ..Default::default()
        }
    }

    pub fn default_new_artist() -> usecases::NewArtist {
        usecases::NewArtist {
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            genres: vec!["Rock n Roll".into()],
            seeking_venue: true,
            ..Default::default()
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            sdb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
            Self { db_connections }
        }

        pub fn create_venue(&self, new_venue: usecases::NewVenue) -> Venue {
            flows::create_venue(&self.db_connections, new_venue).unwrap()
        }

        pub fn create_artist(&self, new_artist: usecases::NewArtist) -> Artist {
            flows::create_artist(&self.db_connections, new_artist).unwrap()
        }

        pub fn create_show(
            &self,
            artist_id: ArtistId,
            venue_id: VenueId,
            start_time: Timestamp,
        ) -> Show {
            flows::create_show(
                &self.db_connections,
                usecases::NewShow {
                    artist_id,
                    venue_id,
                    start_time: start_time.to_string(),
                },
            )
            .unwrap()
        }

        pub fn try_get_venue(&self, id: VenueId) -> Option<Venue> {
            match self.db_connections.shared().unwrap().get_venue(id) {
                Ok(venue) => Some(venue),
                Err(RepoError::NotFound) => None,
                Err(err) => panic!("Failed to load venue {id}: {err}"),
            }
        }

        pub fn count_venues(&self) -> usize {
            self.db_connections.shared().unwrap().count_venues().unwrap()
        }

        pub fn count_artists(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_artists()
                .unwrap()
        }

        pub fn count_shows(&self) -> usize {
            self.db_connections.shared().unwrap().count_shows().unwrap()
        }
    }
}

use self::prelude::*;

#[test]
fn create_venue_and_read_it_back() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());

    let detail = usecases::get_venue(&fixture.db_connections.shared().unwrap(), venue.id).unwrap();
    assert_eq!("The Fillmore", detail.venue.name);
    assert_eq!("San Francisco", detail.venue.city);
    assert_eq!(
        vec!["Rock".to_string(), "Jazz".to_string()],
        detail.venue.genres
    );
    assert_eq!(0, detail.past_shows_count());
    assert_eq!(0, detail.upcoming_shows_count());
}

#[test]
fn create_venue_with_blank_name_is_rejected_without_touching_storage() {
    let fixture = BackendFixture::new();
    let result = flows::create_venue(
        &fixture.db_connections,
        usecases::NewVenue {
            name: "   ".into(),
            ..default_new_venue()
        },
    );
    assert!(matches!(
        result,
        Err(AppError::Business(BError::Parameter(usecases::Error::Name)))
    ));
    assert_eq!(0, fixture.count_venues());
}

#[test]
fn update_venue_replaces_all_mutable_fields() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());

    let updated = flows::update_venue(
        &fixture.db_connections,
        venue.id,
        usecases::NewVenue {
            name: "The Fillmore West".into(),
            address: "10 South Van Ness Ave".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: None,
            genres: vec!["Psychedelic Rock".into()],
            seeking_talent: true,
            seeking_description: Some("Looking for local bands".into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(venue.id, updated.id);

    let stored = fixture.try_get_venue(venue.id).unwrap();
    assert_eq!("The Fillmore West", stored.name);
    assert_eq!("10 South Van Ness Ave", stored.address);
    // The previously stored phone number has been replaced by nothing.
    assert_eq!(None, stored.phone);
    assert_eq!(vec!["Psychedelic Rock".to_string()], stored.genres);
    assert!(stored.seeking_talent);
    assert_eq!(
        Some("Looking for local bands".to_string()),
        stored.seeking_description
    );
}

#[test]
fn update_unknown_venue_fails_with_not_found() {
    let fixture = BackendFixture::new();
    let result = flows::update_venue(
        &fixture.db_connections,
        VenueId::new(999),
        default_new_venue(),
    );
    assert!(result.unwrap_err().is_not_found());
    assert_eq!(0, fixture.count_venues());
}

#[test]
fn delete_venue_removes_venue_and_its_shows() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    fixture.create_show(artist.id, venue.id, Timestamp::from_secs(2_000_000_000));
    assert_eq!(1, fixture.count_shows());

    let deleted = flows::delete_venue(&fixture.db_connections, venue.id).unwrap();
    assert_eq!("The Fillmore", deleted.name);
    assert_eq!(None, fixture.try_get_venue(venue.id));
    // The dependent show is gone, the artist is untouched.
    assert_eq!(0, fixture.count_shows());
    assert_eq!(1, fixture.count_artists());
}

#[test]
fn delete_unknown_venue_fails_with_not_found_and_mutates_nothing() {
    let fixture = BackendFixture::new();
    fixture.create_venue(default_new_venue());

    let result = flows::delete_venue(&fixture.db_connections, VenueId::new(999));
    assert!(result.unwrap_err().is_not_found());
    assert_eq!(1, fixture.count_venues());
}

#[test]
fn create_show_with_unknown_artist_fails_fast() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());

    let result = flows::create_show(
        &fixture.db_connections,
        usecases::NewShow {
            artist_id: ArtistId::new(999),
            venue_id: venue.id,
            start_time: Timestamp::now().to_string(),
        },
    );
    assert!(matches!(
        result,
        Err(AppError::Business(BError::Parameter(
            usecases::Error::ArtistNotFound(_)
        )))
    ));
    // No show record may exist afterwards.
    assert_eq!(0, fixture.count_shows());
}

#[test]
fn create_show_with_unknown_venue_fails_fast() {
    let fixture = BackendFixture::new();
    let artist = fixture.create_artist(default_new_artist());

    let result = flows::create_show(
        &fixture.db_connections,
        usecases::NewShow {
            artist_id: artist.id,
            venue_id: VenueId::new(999),
            start_time: Timestamp::now().to_string(),
        },
    );
    assert!(matches!(
        result,
        Err(AppError::Business(BError::Parameter(
            usecases::Error::VenueNotFound(_)
        )))
    ));
    assert_eq!(0, fixture.count_shows());
}

#[test]
fn create_show_links_artist_and_venue() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    let start_time: Timestamp = "2035-05-21 21:30:00".parse().unwrap();

    let show = fixture.create_show(artist.id, venue.id, start_time);
    assert_eq!(artist.id, show.artist_id);
    assert_eq!(venue.id, show.venue_id);

    let listing =
        usecases::list_shows(&fixture.db_connections.shared().unwrap()).unwrap();
    assert_eq!(1, listing.len());
    assert_eq!("The Fillmore", listing[0].venue_name);
    assert_eq!("Guns N Petals", listing[0].artist_name);
    assert_eq!("2035-05-21 21:30:00", listing[0].start_time);
}

#[test]
fn shows_are_partitioned_into_past_and_upcoming() {
    let fixture = BackendFixture::new();
    let venue = fixture.create_venue(default_new_venue());
    let artist = fixture.create_artist(default_new_artist());
    let now = Timestamp::now();
    fixture.create_show(artist.id, venue.id, now.checked_sub(Duration::hours(1)).unwrap());
    fixture.create_show(artist.id, venue.id, now.checked_add(Duration::hours(1)).unwrap());

    let detail = usecases::get_venue(&fixture.db_connections.shared().unwrap(), venue.id).unwrap();
    assert_eq!(1, detail.past_shows_count());
    assert_eq!(1, detail.upcoming_shows_count());
    assert_eq!(
        fixture.count_shows(),
        detail.past_shows_count() + detail.upcoming_shows_count()
    );

    let detail =
        usecases::get_artist(&fixture.db_connections.shared().unwrap(), artist.id).unwrap();
    assert_eq!(1, detail.past_shows_count());
    assert_eq!(1, detail.upcoming_shows_count());
}

#[test]
fn venue_listing_groups_by_location_and_counts_upcoming_shows() {
    let fixture = BackendFixture::new();
    let fillmore = fixture.create_venue(default_new_venue());
    fixture.create_venue(usecases::NewVenue {
        name: "The Dueling Pianos Bar".into(),
        address: "335 Delancey Street".into(),
        city: "New York".into(),
        state: "NY".into(),
        ..Default::default()
    });
    fixture.create_venue(usecases::NewVenue {
        name: "Park Square Live Music & Coffee".into(),
        address: "34 Whiskey Moore Ave".into(),
        city: "San Francisco".into(),
        state: "CA".into(),
        ..Default::default()
    });
    let artist = fixture.create_artist(default_new_artist());
    let upcoming = Timestamp::now().checked_add(Duration::days(7)).unwrap();
    fixture.create_show(artist.id, fillmore.id, upcoming);

    let groups = usecases::query_venues(&fixture.db_connections.shared().unwrap()).unwrap();
    assert_eq!(2, groups.len());
    // Groups are ordered by (city, state).
    assert_eq!(("New York", "NY"), (&*groups[0].city, &*groups[0].state));
    assert_eq!(
        ("San Francisco", "CA"),
        (&*groups[1].city, &*groups[1].state)
    );
    assert_eq!(1, groups[0].venues.len());
    assert_eq!(2, groups[1].venues.len());
    let fillmore_summary = groups[1]
        .venues
        .iter()
        .find(|venue| venue.id == fillmore.id)
        .unwrap();
    assert_eq!(1, fillmore_summary.num_upcoming_shows);
}

#[test]
fn search_venues_by_case_insensitive_name_substring() {
    let fixture = BackendFixture::new();
    let fillmore = fixture.create_venue(default_new_venue());
    fixture.create_venue(usecases::NewVenue {
        name: "The Dueling Pianos Bar".into(),
        address: "335 Delancey Street".into(),
        city: "New York".into(),
        state: "NY".into(),
        ..Default::default()
    });

    let db = fixture.db_connections.shared().unwrap();
    let results = usecases::search_venues(&db, "fillmore").unwrap();
    assert_eq!(1, results.count);
    assert_eq!(results.count, results.hits.len());
    assert_eq!(fillmore.id, results.hits[0].id);
    assert_eq!("The Fillmore", results.hits[0].name);

    // The term is only matched against the name, not the address or city.
    let results = usecases::search_venues(&db, "San Francisco").unwrap();
    assert_eq!(0, results.count);

    // An empty term is a substring of every name.
    let results = usecases::search_venues(&db, "").unwrap();
    assert_eq!(2, results.count);
}

#[test]
fn search_treats_like_pattern_characters_as_literals() {
    let fixture = BackendFixture::new();
    fixture.create_venue(usecases::NewVenue {
        name: "100% Unplugged".into(),
        ..default_new_venue()
    });
    fixture.create_venue(default_new_venue());

    let db = fixture.db_connections.shared().unwrap();
    // A lone `%` must only match names containing a literal percent sign.
    let results = usecases::search_venues(&db, "%").unwrap();
    assert_eq!(1, results.count);
    assert_eq!("100% Unplugged", results.hits[0].name);

    let results = usecases::search_artists(&db, "_").unwrap();
    assert_eq!(0, results.count);
}

#[test]
fn search_artists_by_name() {
    let fixture = BackendFixture::new();
    fixture.create_artist(default_new_artist());
    fixture.create_artist(usecases::NewArtist {
        name: "The Wild Sax Band".into(),
        city: "San Francisco".into(),
        state: "CA".into(),
        ..Default::default()
    });

    let db = fixture.db_connections.shared().unwrap();
    let results = usecases::search_artists(&db, "band").unwrap();
    assert_eq!(1, results.count);
    assert_eq!("The Wild Sax Band", results.hits[0].name);
}

#[test]
fn update_artist_replaces_all_mutable_fields() {
    let fixture = BackendFixture::new();
    let artist = fixture.create_artist(default_new_artist());

    flows::update_artist(
        &fixture.db_connections,
        artist.id,
        usecases::NewArtist {
            name: "Guns N Petals".into(),
            city: "Oakland".into(),
            state: "CA".into(),
            genres: vec!["Rock".into(), "Blues".into()],
            seeking_venue: false,
            ..Default::default()
        },
    )
    .unwrap();

    let detail =
        usecases::get_artist(&fixture.db_connections.shared().unwrap(), artist.id).unwrap();
    assert_eq!("Oakland", detail.artist.city);
    assert_eq!(
        vec!["Rock".to_string(), "Blues".to_string()],
        detail.artist.genres
    );
    assert!(!detail.artist.seeking_venue);
}

#[test]
fn rollback_discards_partial_writes() {
    let fixture = BackendFixture::new();
    let record = usecases::prepare_new_venue(default_new_venue()).unwrap();

    // Simulate a failure after the insert succeeded: the whole transaction
    // must be rolled back and nothing of the venue may remain visible.
    let result = fixture
        .db_connections
        .exclusive()
        .unwrap()
        .transaction::<Venue, _, usecases::Error>(|conn| {
            usecases::store_created_venue(conn, record)?;
            Err(RepoError::Other(anyhow::anyhow!("simulated failure")).into())
        });
    assert!(result.is_err());
    assert_eq!(0, fixture.count_venues());
}

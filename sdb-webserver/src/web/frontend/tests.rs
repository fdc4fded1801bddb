use crate::web::tests::prelude::*;

use sdb_application::prelude as flows;
use sdb_core::{entities::*, usecases};

fn setup() -> (Client, sqlite::Connections) {
    crate::web::tests::rocket_test_setup(vec![("/", super::routes())])
}

fn create_default_venue(db: &sqlite::Connections) -> Venue {
    flows::create_venue(
        db,
        usecases::NewVenue {
            name: "The Fillmore".into(),
            address: "1805 Geary St".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            genres: vec!["Rock".into(), "Jazz".into()],
            ..Default::default()
        },
    )
    .unwrap()
}

fn create_default_artist(db: &sqlite::Connections) -> Artist {
    flows::create_artist(
        db,
        usecases::NewArtist {
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            genres: vec!["Rock n Roll".into()],
            ..Default::default()
        },
    )
    .unwrap()
}

#[test]
fn get_index() {
    let (client, _) = setup();
    let response = client.get("/").dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("stagedb"));
}

#[test]
fn get_venues_renders_grouped_listing() {
    let (client, db) = setup();
    let venue = create_default_venue(&db);
    let response = client.get("/venues").dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("San Francisco, CA"));
    assert!(body.contains("The Fillmore"));
    assert!(body.contains(&format!("/venues/{}", venue.id)));
}

#[test]
fn post_create_venue_redirects_to_the_new_detail_page() {
    let (client, db) = setup();
    let response = client
        .post("/venues/create")
        .header(ContentType::Form)
        .body(
            "name=The+Fillmore&address=1805+Geary+St&city=San+Francisco&state=CA\
             &phone=4155671234&genres=Rock&genres=Jazz",
        )
        .dispatch();
    assert_eq!(Status::SeeOther, response.status());
    let location = response.headers().get_one("Location").unwrap().to_string();
    assert_eq!("/venues/1", location);

    let response = client.get(location).dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("The Fillmore"));
    // The flash message from the redirect is rendered once.
    assert!(body.contains("was successfully listed!"));

    assert_eq!(1, db.shared().unwrap().count_venues().unwrap());
}

#[test]
fn post_create_venue_with_blank_name_rerenders_the_form() {
    let (client, db) = setup();
    let response = client
        .post("/venues/create")
        .header(ContentType::Form)
        .body("name=&address=1805+Geary+St&city=San+Francisco&state=CA")
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("The name must not be empty"));
    // The submitted values survive the round trip.
    assert!(body.contains("1805 Geary St"));
    assert_eq!(0, db.shared().unwrap().count_venues().unwrap());
}

#[test]
fn get_unknown_venue_renders_the_not_found_page() {
    let (client, _) = setup();
    let response = client.get("/venues/4711").dispatch();
    assert_eq!(Status::NotFound, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("404"));
}

#[test]
fn post_search_venues_matches_name_substring() {
    let (client, db) = setup();
    create_default_venue(&db);
    flows::create_venue(
        &db,
        usecases::NewVenue {
            name: "The Dueling Pianos Bar".into(),
            address: "335 Delancey Street".into(),
            city: "New York".into(),
            state: "NY".into(),
            ..Default::default()
        },
    )
    .unwrap();

    let response = client
        .post("/venues/search")
        .header(ContentType::Form)
        .body("search_term=fillmore")
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("1 result"));
    assert!(body.contains("The Fillmore"));
    assert!(!body.contains("Dueling Pianos"));
}

#[test]
fn edit_venue_form_is_prefilled() {
    let (client, db) = setup();
    let venue = create_default_venue(&db);
    let response = client.get(format!("/venues/{}/edit", venue.id)).dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("The Fillmore"));
    assert!(body.contains("1805 Geary St"));
}

#[test]
fn post_edit_venue_updates_and_redirects() {
    let (client, db) = setup();
    let venue = create_default_venue(&db);
    let response = client
        .post(format!("/venues/{}/edit", venue.id))
        .header(ContentType::Form)
        .body("name=The+Fillmore+West&address=10+South+Van+Ness+Ave&city=San+Francisco&state=CA")
        .dispatch();
    assert_eq!(Status::SeeOther, response.status());

    let stored = db.shared().unwrap().get_venue(venue.id).unwrap();
    assert_eq!("The Fillmore West", stored.name);
}

#[test]
fn delete_venue_redirects_to_the_listing() {
    let (client, db) = setup();
    let venue = create_default_venue(&db);
    let response = client.delete(format!("/venues/{}", venue.id)).dispatch();
    assert_eq!(Status::SeeOther, response.status());
    assert_eq!(
        Some("/venues"),
        response.headers().get_one("Location")
    );

    let response = client.get(format!("/venues/{}", venue.id)).dispatch();
    assert_eq!(Status::NotFound, response.status());
}

#[test]
fn delete_unknown_venue_renders_the_not_found_page() {
    let (client, _) = setup();
    let response = client.delete("/venues/4711").dispatch();
    assert_eq!(Status::NotFound, response.status());
}

#[test]
fn get_artists_lists_all_names() {
    let (client, db) = setup();
    let artist = create_default_artist(&db);
    let response = client.get("/artists").dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains(&format!("/artists/{}", artist.id)));
}

#[test]
fn post_create_artist_redirects_to_the_new_detail_page() {
    let (client, db) = setup();
    let response = client
        .post("/artists/create")
        .header(ContentType::Form)
        .body("name=The+Wild+Sax+Band&city=San+Francisco&state=CA&genres=Jazz")
        .dispatch();
    assert_eq!(Status::SeeOther, response.status());
    assert_eq!(1, db.shared().unwrap().count_artists().unwrap());
}

#[test]
fn artist_detail_shows_past_and_upcoming_counts() {
    let (client, db) = setup();
    let venue = create_default_venue(&db);
    let artist = create_default_artist(&db);
    let now = Timestamp::now();
    for start_time in [
        Timestamp::from_secs(now.as_secs() - 3600),
        Timestamp::from_secs(now.as_secs() + 3600),
    ] {
        flows::create_show(
            &db,
            usecases::NewShow {
                artist_id: artist.id,
                venue_id: venue.id,
                start_time: start_time.to_string(),
            },
        )
        .unwrap();
    }

    let response = client.get(format!("/artists/{}", artist.id)).dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("Past shows (1)"));
    assert!(body.contains("Upcoming shows (1)"));
}

#[test]
fn get_shows_renders_join_derived_listing() {
    let (client, db) = setup();
    let venue = create_default_venue(&db);
    let artist = create_default_artist(&db);
    flows::create_show(
        &db,
        usecases::NewShow {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time: "2035-05-21 21:30:00".into(),
        },
    )
    .unwrap();

    let response = client.get("/shows").dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("The Fillmore"));
    assert!(body.contains("2035-05-21 21:30:00"));
}

#[test]
fn post_create_show_with_unknown_artist_rerenders_the_form() {
    let (client, db) = setup();
    let venue = create_default_venue(&db);
    let response = client
        .post("/shows/create")
        .header(ContentType::Form)
        .body(format!(
            "artist_id=999&venue_id={}&start_time=2035-05-21+21%3A30%3A00",
            venue.id
        ))
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("Artist 999 does not exist"));
    assert_eq!(0, db.shared().unwrap().count_shows().unwrap());
}

#[test]
fn post_create_show_with_valid_references_redirects() {
    let (client, db) = setup();
    let venue = create_default_venue(&db);
    let artist = create_default_artist(&db);
    let response = client
        .post("/shows/create")
        .header(ContentType::Form)
        .body(format!(
            "artist_id={}&venue_id={}&start_time=2035-05-21+21%3A30%3A00",
            artist.id, venue.id
        ))
        .dispatch();
    assert_eq!(Status::SeeOther, response.status());
    assert_eq!(Some("/shows"), response.headers().get_one("Location"));
    assert_eq!(1, db.shared().unwrap().count_shows().unwrap());
}

#[test]
fn unknown_route_renders_the_not_found_page() {
    let (client, _) = setup();
    let response = client.get("/does-not-exist").dispatch();
    assert_eq!(Status::NotFound, response.status());
    let body = response.into_string().unwrap();
    assert!(body.contains("404"));
}

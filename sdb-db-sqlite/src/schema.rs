///////////////////////////////////////////////////////////////////////
// Venues
///////////////////////////////////////////////////////////////////////

table! {
    venues (id) {
        id -> BigInt,
        name -> Text,
        address -> Text,
        city -> Text,
        state -> Text,
        phone -> Nullable<Text>,
        website -> Nullable<Text>,
        facebook -> Nullable<Text>,
        image_url -> Nullable<Text>,
        seeking_talent -> Bool,
        seeking_description -> Nullable<Text>,
    }
}

table! {
    venue_genres (venue_id, position) {
        venue_id -> BigInt,
        position -> Integer,
        genre -> Text,
    }
}

joinable!(venue_genres -> venues (venue_id));

///////////////////////////////////////////////////////////////////////
// Artists
///////////////////////////////////////////////////////////////////////

table! {
    artists (id) {
        id -> BigInt,
        name -> Text,
        city -> Text,
        state -> Text,
        phone -> Nullable<Text>,
        website -> Nullable<Text>,
        facebook -> Nullable<Text>,
        image_url -> Nullable<Text>,
        seeking_venue -> Bool,
        seeking_description -> Nullable<Text>,
    }
}

table! {
    artist_genres (artist_id, position) {
        artist_id -> BigInt,
        position -> Integer,
        genre -> Text,
    }
}

joinable!(artist_genres -> artists (artist_id));

///////////////////////////////////////////////////////////////////////
// Shows
///////////////////////////////////////////////////////////////////////

table! {
    shows (id) {
        id -> BigInt,
        artist_id -> BigInt,
        venue_id -> BigInt,
        // unix timestamp in seconds
        start_time -> BigInt,
    }
}

joinable!(shows -> artists (artist_id));
joinable!(shows -> venues (venue_id));

allow_tables_to_appear_in_same_query!(venues, venue_genres, artists, artist_genres, shows);

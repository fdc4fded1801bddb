use super::*;

impl ShowRepo for DbReadOnly<'_> {
    fn create_show(&self, _show: ShowRecord) -> Result<ShowId> {
        unreachable!();
    }

    fn shows_of_venue(&self, venue_id: VenueId) -> Result<Vec<VenueShowRow>> {
        shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn shows_of_artist(&self, artist_id: ArtistId) -> Result<Vec<ArtistShowRow>> {
        shows_of_artist(&mut self.conn.borrow_mut(), artist_id)
    }
    fn all_shows(&self) -> Result<Vec<ShowListingRow>> {
        all_shows(&mut self.conn.borrow_mut())
    }
    fn count_shows(&self) -> Result<usize> {
        count_shows(&mut self.conn.borrow_mut())
    }
    fn count_upcoming_shows_by_venue(&self, now: Timestamp) -> Result<Vec<(VenueId, u64)>> {
        count_upcoming_shows_by_venue(&mut self.conn.borrow_mut(), now)
    }
}

impl ShowRepo for DbReadWrite<'_> {
    fn create_show(&self, show: ShowRecord) -> Result<ShowId> {
        create_show(&mut self.conn.borrow_mut(), show)
    }

    fn shows_of_venue(&self, venue_id: VenueId) -> Result<Vec<VenueShowRow>> {
        shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn shows_of_artist(&self, artist_id: ArtistId) -> Result<Vec<ArtistShowRow>> {
        shows_of_artist(&mut self.conn.borrow_mut(), artist_id)
    }
    fn all_shows(&self) -> Result<Vec<ShowListingRow>> {
        all_shows(&mut self.conn.borrow_mut())
    }
    fn count_shows(&self) -> Result<usize> {
        count_shows(&mut self.conn.borrow_mut())
    }
    fn count_upcoming_shows_by_venue(&self, now: Timestamp) -> Result<Vec<(VenueId, u64)>> {
        count_upcoming_shows_by_venue(&mut self.conn.borrow_mut(), now)
    }
}

impl ShowRepo for DbConnection<'_> {
    fn create_show(&self, show: ShowRecord) -> Result<ShowId> {
        create_show(&mut self.conn.borrow_mut(), show)
    }

    fn shows_of_venue(&self, venue_id: VenueId) -> Result<Vec<VenueShowRow>> {
        shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn shows_of_artist(&self, artist_id: ArtistId) -> Result<Vec<ArtistShowRow>> {
        shows_of_artist(&mut self.conn.borrow_mut(), artist_id)
    }
    fn all_shows(&self) -> Result<Vec<ShowListingRow>> {
        all_shows(&mut self.conn.borrow_mut())
    }
    fn count_shows(&self) -> Result<usize> {
        count_shows(&mut self.conn.borrow_mut())
    }
    fn count_upcoming_shows_by_venue(&self, now: Timestamp) -> Result<Vec<(VenueId, u64)>> {
        count_upcoming_shows_by_venue(&mut self.conn.borrow_mut(), now)
    }
}

fn create_show(conn: &mut SqliteConnection, show: ShowRecord) -> Result<ShowId> {
    let new_show = models::NewShow {
        artist_id: show.artist_id.as_i64(),
        venue_id: show.venue_id.as_i64(),
        start_time: show.start_time.as_secs(),
    };
    diesel::insert_into(schema::shows::table)
        .values(&new_show)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_created_id(conn)?;
    Ok(ShowId::from(id))
}

fn shows_of_venue(conn: &mut SqliteConnection, venue_id: VenueId) -> Result<Vec<VenueShowRow>> {
    use schema::{artists, shows};
    let rows = shows::table
        .inner_join(artists::table)
        .select((
            artists::id,
            artists::name,
            artists::image_url,
            shows::start_time,
        ))
        .filter(shows::venue_id.eq(venue_id.as_i64()))
        .order_by((shows::start_time.asc(), shows::id.asc()))
        .load::<(i64, String, Option<String>, i64)>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(
            |(artist_id, artist_name, artist_image_url, start_time)| VenueShowRow {
                artist_id: ArtistId::from(artist_id),
                artist_name,
                artist_image_url: artist_image_url.and_then(load_url),
                start_time: Timestamp::from_secs(start_time),
            },
        )
        .collect())
}

fn shows_of_artist(conn: &mut SqliteConnection, artist_id: ArtistId) -> Result<Vec<ArtistShowRow>> {
    use schema::{shows, venues};
    let rows = shows::table
        .inner_join(venues::table)
        .select((
            venues::id,
            venues::name,
            venues::image_url,
            shows::start_time,
        ))
        .filter(shows::artist_id.eq(artist_id.as_i64()))
        .order_by((shows::start_time.asc(), shows::id.asc()))
        .load::<(i64, String, Option<String>, i64)>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(
            |(venue_id, venue_name, venue_image_url, start_time)| ArtistShowRow {
                venue_id: VenueId::from(venue_id),
                venue_name,
                venue_image_url: venue_image_url.and_then(load_url),
                start_time: Timestamp::from_secs(start_time),
            },
        )
        .collect())
}

fn all_shows(conn: &mut SqliteConnection) -> Result<Vec<ShowListingRow>> {
    use schema::{artists, shows, venues};
    let rows = shows::table
        .inner_join(venues::table)
        .inner_join(artists::table)
        .select((
            shows::venue_id,
            venues::name,
            shows::artist_id,
            artists::name,
            artists::image_url,
            shows::start_time,
        ))
        .order_by((shows::start_time.asc(), shows::id.asc()))
        .load::<models::ShowListingEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            let models::ShowListingEntity {
                venue_id,
                venue_name,
                artist_id,
                artist_name,
                artist_image_url,
                start_time,
            } = row;
            ShowListingRow {
                venue_id: VenueId::from(venue_id),
                venue_name,
                artist_id: ArtistId::from(artist_id),
                artist_name,
                artist_image_url: artist_image_url.and_then(load_url),
                start_time: Timestamp::from_secs(start_time),
            }
        })
        .collect())
}

fn count_shows(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::shows::dsl;
    Ok(dsl::shows
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn count_upcoming_shows_by_venue(
    conn: &mut SqliteConnection,
    now: Timestamp,
) -> Result<Vec<(VenueId, u64)>> {
    use schema::shows::dsl;
    let rows = dsl::shows
        .filter(dsl::start_time.gt(now.as_secs()))
        .group_by(dsl::venue_id)
        .select((dsl::venue_id, diesel::dsl::count_star()))
        .load::<(i64, i64)>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(|(venue_id, count)| (VenueId::from(venue_id), count as u64))
        .collect())
}

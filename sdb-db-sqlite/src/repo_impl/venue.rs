use super::*;

impl VenueRepo for DbReadOnly<'_> {
    fn create_venue(&self, _venue: VenueRecord) -> Result<VenueId> {
        unreachable!();
    }
    fn update_venue(&self, _venue: &Venue) -> Result<()> {
        unreachable!();
    }
    fn delete_venue(&self, _id: VenueId) -> Result<()> {
        unreachable!();
    }

    fn get_venue(&self, id: VenueId) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }
    fn venues_by_name(&self, name_pattern: &str) -> Result<Vec<(VenueId, String)>> {
        venues_by_name(&mut self.conn.borrow_mut(), name_pattern)
    }
}

impl VenueRepo for DbReadWrite<'_> {
    fn create_venue(&self, venue: VenueRecord) -> Result<VenueId> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn update_venue(&self, venue: &Venue) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn delete_venue(&self, id: VenueId) -> Result<()> {
        delete_venue(&mut self.conn.borrow_mut(), id)
    }

    fn get_venue(&self, id: VenueId) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }
    fn venues_by_name(&self, name_pattern: &str) -> Result<Vec<(VenueId, String)>> {
        venues_by_name(&mut self.conn.borrow_mut(), name_pattern)
    }
}

impl VenueRepo for DbConnection<'_> {
    fn create_venue(&self, venue: VenueRecord) -> Result<VenueId> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn update_venue(&self, venue: &Venue) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn delete_venue(&self, id: VenueId) -> Result<()> {
        delete_venue(&mut self.conn.borrow_mut(), id)
    }

    fn get_venue(&self, id: VenueId) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }
    fn venues_by_name(&self, name_pattern: &str) -> Result<Vec<(VenueId, String)>> {
        venues_by_name(&mut self.conn.borrow_mut(), name_pattern)
    }
}

fn into_new_venue(venue: &VenueRecord) -> models::NewVenue<'_> {
    models::NewVenue {
        name: &venue.name,
        address: &venue.address,
        city: &venue.city,
        state: &venue.state,
        phone: venue.phone.as_deref(),
        website: venue.website.as_ref().map(Url::to_string),
        facebook: venue.facebook.as_ref().map(Url::to_string),
        image_url: venue.image_url.as_ref().map(Url::to_string),
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description.as_deref(),
    }
}

fn create_venue(conn: &mut SqliteConnection, venue: VenueRecord) -> Result<VenueId> {
    diesel::insert_into(schema::venues::table)
        .values(&into_new_venue(&venue))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_created_id(conn)?;
    insert_venue_genres(conn, id, &venue.genres)?;
    Ok(VenueId::from(id))
}

fn update_venue(conn: &mut SqliteConnection, venue: &Venue) -> Result<()> {
    use schema::venues::dsl;
    let id = venue.id.as_i64();
    let (_, record) = venue.clone().into();
    let count = diesel::update(dsl::venues.filter(dsl::id.eq(id)))
        .set(&into_new_venue(&record))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    // Genres are replaced wholesale together with the other fields.
    diesel::delete(schema::venue_genres::table.filter(schema::venue_genres::venue_id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_venue_genres(conn, id, &record.genres)
}

fn delete_venue(conn: &mut SqliteConnection, id: VenueId) -> Result<()> {
    use schema::venues::dsl;
    // Genre rows and dependent shows are removed by ON DELETE CASCADE.
    let count = diesel::delete(dsl::venues.filter(dsl::id.eq(id.as_i64())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn insert_venue_genres(conn: &mut SqliteConnection, venue_id: i64, genres: &[String]) -> Result<()> {
    let rows: Vec<_> = genres
        .iter()
        .enumerate()
        .map(|(position, genre)| models::NewVenueGenre {
            venue_id,
            position: position as i32,
            genre,
        })
        .collect();
    diesel::insert_into(schema::venue_genres::table)
        .values(&rows)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_venue_genres(conn: &mut SqliteConnection, venue_id: i64) -> Result<Vec<String>> {
    use schema::venue_genres::dsl;
    dsl::venue_genres
        .select(dsl::genre)
        .filter(dsl::venue_id.eq(venue_id))
        .order_by(dsl::position)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn venue_from_entity(entity: models::VenueEntity, genres: Vec<String>) -> Venue {
    let models::VenueEntity {
        id,
        name,
        address,
        city,
        state,
        phone,
        website,
        facebook,
        image_url,
        seeking_talent,
        seeking_description,
    } = entity;
    Venue {
        id: VenueId::from(id),
        name,
        address,
        city,
        state,
        phone,
        website: website.and_then(load_url),
        facebook: facebook.and_then(load_url),
        image_url: image_url.and_then(load_url),
        genres,
        seeking_talent,
        seeking_description,
    }
}

fn get_venue(conn: &mut SqliteConnection, id: VenueId) -> Result<Venue> {
    use schema::venues::dsl;
    let entity = dsl::venues
        .filter(dsl::id.eq(id.as_i64()))
        .first::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?;
    let genres = load_venue_genres(conn, entity.id)?;
    Ok(venue_from_entity(entity, genres))
}

fn all_venues(conn: &mut SqliteConnection) -> Result<Vec<Venue>> {
    use schema::venues::dsl;
    let entities = dsl::venues
        .order_by((dsl::city.asc(), dsl::state.asc(), dsl::id.asc()))
        .load::<models::VenueEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut venues = Vec::with_capacity(entities.len());
    for entity in entities {
        let genres = load_venue_genres(conn, entity.id)?;
        venues.push(venue_from_entity(entity, genres));
    }
    Ok(venues)
}

fn count_venues(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::venues::dsl;
    Ok(dsl::venues
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn venues_by_name(
    conn: &mut SqliteConnection,
    name_pattern: &str,
) -> Result<Vec<(VenueId, String)>> {
    use schema::venues::dsl;
    Ok(dsl::venues
        .select((dsl::id, dsl::name))
        .filter(dsl::name.like(name_pattern).escape('\\'))
        .order_by(dsl::id)
        .load::<(i64, String)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(id, name)| (VenueId::from(id), name))
        .collect())
}

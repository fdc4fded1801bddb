use super::*;

impl ArtistRepo for DbReadOnly<'_> {
    fn create_artist(&self, _artist: ArtistRecord) -> Result<ArtistId> {
        unreachable!();
    }
    fn update_artist(&self, _artist: &Artist) -> Result<()> {
        unreachable!();
    }

    fn get_artist(&self, id: ArtistId) -> Result<Artist> {
        get_artist(&mut self.conn.borrow_mut(), id)
    }
    fn all_artists(&self) -> Result<Vec<(ArtistId, String)>> {
        all_artists(&mut self.conn.borrow_mut())
    }
    fn count_artists(&self) -> Result<usize> {
        count_artists(&mut self.conn.borrow_mut())
    }
    fn artists_by_name(&self, name_pattern: &str) -> Result<Vec<(ArtistId, String)>> {
        artists_by_name(&mut self.conn.borrow_mut(), name_pattern)
    }
}

impl ArtistRepo for DbReadWrite<'_> {
    fn create_artist(&self, artist: ArtistRecord) -> Result<ArtistId> {
        create_artist(&mut self.conn.borrow_mut(), artist)
    }
    fn update_artist(&self, artist: &Artist) -> Result<()> {
        update_artist(&mut self.conn.borrow_mut(), artist)
    }

    fn get_artist(&self, id: ArtistId) -> Result<Artist> {
        get_artist(&mut self.conn.borrow_mut(), id)
    }
    fn all_artists(&self) -> Result<Vec<(ArtistId, String)>> {
        all_artists(&mut self.conn.borrow_mut())
    }
    fn count_artists(&self) -> Result<usize> {
        count_artists(&mut self.conn.borrow_mut())
    }
    fn artists_by_name(&self, name_pattern: &str) -> Result<Vec<(ArtistId, String)>> {
        artists_by_name(&mut self.conn.borrow_mut(), name_pattern)
    }
}

impl ArtistRepo for DbConnection<'_> {
    fn create_artist(&self, artist: ArtistRecord) -> Result<ArtistId> {
        create_artist(&mut self.conn.borrow_mut(), artist)
    }
    fn update_artist(&self, artist: &Artist) -> Result<()> {
        update_artist(&mut self.conn.borrow_mut(), artist)
    }

    fn get_artist(&self, id: ArtistId) -> Result<Artist> {
        get_artist(&mut self.conn.borrow_mut(), id)
    }
    fn all_artists(&self) -> Result<Vec<(ArtistId, String)>> {
        all_artists(&mut self.conn.borrow_mut())
    }
    fn count_artists(&self) -> Result<usize> {
        count_artists(&mut self.conn.borrow_mut())
    }
    fn artists_by_name(&self, name_pattern: &str) -> Result<Vec<(ArtistId, String)>> {
        artists_by_name(&mut self.conn.borrow_mut(), name_pattern)
    }
}

fn into_new_artist(artist: &ArtistRecord) -> models::NewArtist<'_> {
    models::NewArtist {
        name: &artist.name,
        city: &artist.city,
        state: &artist.state,
        phone: artist.phone.as_deref(),
        website: artist.website.as_ref().map(Url::to_string),
        facebook: artist.facebook.as_ref().map(Url::to_string),
        image_url: artist.image_url.as_ref().map(Url::to_string),
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description.as_deref(),
    }
}

fn create_artist(conn: &mut SqliteConnection, artist: ArtistRecord) -> Result<ArtistId> {
    diesel::insert_into(schema::artists::table)
        .values(&into_new_artist(&artist))
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_created_id(conn)?;
    insert_artist_genres(conn, id, &artist.genres)?;
    Ok(ArtistId::from(id))
}

fn update_artist(conn: &mut SqliteConnection, artist: &Artist) -> Result<()> {
    use schema::artists::dsl;
    let id = artist.id.as_i64();
    let (_, record) = artist.clone().into();
    let count = diesel::update(dsl::artists.filter(dsl::id.eq(id)))
        .set(&into_new_artist(&record))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    // Genres are replaced wholesale together with the other fields.
    diesel::delete(schema::artist_genres::table.filter(schema::artist_genres::artist_id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_artist_genres(conn, id, &record.genres)
}

fn insert_artist_genres(
    conn: &mut SqliteConnection,
    artist_id: i64,
    genres: &[String],
) -> Result<()> {
    let rows: Vec<_> = genres
        .iter()
        .enumerate()
        .map(|(position, genre)| models::NewArtistGenre {
            artist_id,
            position: position as i32,
            genre,
        })
        .collect();
    diesel::insert_into(schema::artist_genres::table)
        .values(&rows)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_artist_genres(conn: &mut SqliteConnection, artist_id: i64) -> Result<Vec<String>> {
    use schema::artist_genres::dsl;
    dsl::artist_genres
        .select(dsl::genre)
        .filter(dsl::artist_id.eq(artist_id))
        .order_by(dsl::position)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn artist_from_entity(entity: models::ArtistEntity, genres: Vec<String>) -> Artist {
    let models::ArtistEntity {
        id,
        name,
        city,
        state,
        phone,
        website,
        facebook,
        image_url,
        seeking_venue,
        seeking_description,
    } = entity;
    Artist {
        id: ArtistId::from(id),
        name,
        city,
        state,
        phone,
        website: website.and_then(load_url),
        facebook: facebook.and_then(load_url),
        image_url: image_url.and_then(load_url),
        genres,
        seeking_venue,
        seeking_description,
    }
}

fn get_artist(conn: &mut SqliteConnection, id: ArtistId) -> Result<Artist> {
    use schema::artists::dsl;
    let entity = dsl::artists
        .filter(dsl::id.eq(id.as_i64()))
        .first::<models::ArtistEntity>(conn)
        .map_err(from_diesel_err)?;
    let genres = load_artist_genres(conn, entity.id)?;
    Ok(artist_from_entity(entity, genres))
}

fn all_artists(conn: &mut SqliteConnection) -> Result<Vec<(ArtistId, String)>> {
    use schema::artists::dsl;
    Ok(dsl::artists
        .select((dsl::id, dsl::name))
        .order_by(dsl::id)
        .load::<(i64, String)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(id, name)| (ArtistId::from(id), name))
        .collect())
}

fn count_artists(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::artists::dsl;
    Ok(dsl::artists
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn artists_by_name(
    conn: &mut SqliteConnection,
    name_pattern: &str,
) -> Result<Vec<(ArtistId, String)>> {
    use schema::artists::dsl;
    Ok(dsl::artists
        .select((dsl::id, dsl::name))
        .filter(dsl::name.like(name_pattern).escape('\\'))
        .order_by(dsl::id)
        .load::<(i64, String)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(id, name)| (ArtistId::from(id), name))
        .collect())
}

use super::prelude::*;

// One show on a venue page, enriched with the booked artist. The start
// time is already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueShow {
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_url: Option<Url>,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
}

impl VenueDetail {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

// Fetch one venue together with its shows, partitioned into past and
// upcoming relative to a single time stamp captured once per call: a show
// is upcoming iff it starts strictly after that instant and past iff
// strictly before. The partition is a property of the query, not of the
// stored show.
pub fn get_venue<R>(repo: &R, id: VenueId) -> Result<VenueDetail>
where
    R: VenueRepo + ShowRepo,
{
    let venue = repo.get_venue(id)?;
    let now = Timestamp::now();
    let (past_shows, upcoming_shows) = partition_shows(repo.shows_of_venue(id)?, now);
    Ok(VenueDetail {
        venue,
        past_shows,
        upcoming_shows,
    })
}

fn partition_shows(rows: Vec<VenueShowRow>, now: Timestamp) -> (Vec<VenueShow>, Vec<VenueShow>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for row in rows {
        let VenueShowRow {
            artist_id,
            artist_name,
            artist_image_url,
            start_time,
        } = row;
        let show = VenueShow {
            artist_id,
            artist_name,
            artist_image_url,
            start_time: start_time.format_display(),
        };
        if start_time > now {
            upcoming.push(show);
        } else if start_time < now {
            past.push(show);
        }
    }
    (past, upcoming)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show_row(start_time: Timestamp) -> VenueShowRow {
        VenueShowRow {
            artist_id: ArtistId::new(1),
            artist_name: "Guns N Petals".into(),
            artist_image_url: None,
            start_time,
        }
    }

    #[test]
    fn partition_is_strict_and_exhaustive() {
        let now = Timestamp::from_secs(1_000_000);
        let rows = vec![
            show_row(Timestamp::from_secs(999_999)),
            show_row(Timestamp::from_secs(1_000_001)),
            show_row(Timestamp::from_secs(2_000_000)),
        ];
        let total = rows.len();
        let (past, upcoming) = partition_shows(rows, now);
        assert_eq!(1, past.len());
        assert_eq!(2, upcoming.len());
        assert_eq!(total, past.len() + upcoming.len());
    }

    #[test]
    fn reclassification_depends_on_the_instant() {
        let start = Timestamp::from_secs(500);
        let rows = vec![show_row(start)];
        let (past, upcoming) = partition_shows(rows.clone(), Timestamp::from_secs(499));
        assert_eq!((0, 1), (past.len(), upcoming.len()));
        let (past, upcoming) = partition_shows(rows, Timestamp::from_secs(501));
        assert_eq!((1, 0), (past.len(), upcoming.len()));
    }

    #[test]
    fn start_time_is_formatted_for_display() {
        let start: Timestamp = "2019-06-15 21:30:00".parse().unwrap();
        let (past, _) = partition_shows(vec![show_row(start)], Timestamp::now());
        assert_eq!("2019-06-15 21:30:00", past[0].start_time);
    }
}

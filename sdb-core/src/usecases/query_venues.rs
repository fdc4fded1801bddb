use std::collections::HashMap;

use itertools::Itertools as _;

use super::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: VenueId,
    pub name: String,
    pub num_upcoming_shows: u64,
}

// All venues of one distinct (city, state) location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

// Group all venues by their location. The upcoming-show counts are
// evaluated against a single time stamp captured once per call so that
// every count refers to the same instant. Groups are ordered by
// (city, state), venues within a group by id.
pub fn query_venues<R>(repo: &R) -> Result<Vec<VenueGroup>>
where
    R: VenueRepo + ShowRepo,
{
    let now = Timestamp::now();
    let upcoming: HashMap<VenueId, u64> = repo
        .count_upcoming_shows_by_venue(now)?
        .into_iter()
        .collect();
    // Relies on the repository ordering by (city, state, id).
    let venues = repo.all_venues()?;
    let grouped = venues
        .into_iter()
        .chunk_by(|venue| (venue.city.clone(), venue.state.clone()));
    let groups = grouped
        .into_iter()
        .map(|((city, state), venues)| VenueGroup {
            city,
            state,
            venues: venues
                .map(|venue| VenueSummary {
                    num_upcoming_shows: upcoming.get(&venue.id).copied().unwrap_or(0),
                    id: venue.id,
                    name: venue.name,
                })
                .collect(),
        })
        .collect();
    Ok(groups)
}

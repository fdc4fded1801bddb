use super::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<I> {
    pub id: I,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<I> {
    pub count: usize,
    pub hits: Vec<SearchHit<I>>,
}

// The term is matched as a literal, case-insensitive substring of the name
// field only. An empty term matches every record. LIKE pattern characters
// in the term carry no pattern semantics.
pub fn search_venues<R: VenueRepo>(repo: &R, term: &str) -> Result<SearchResults<VenueId>> {
    let hits = repo.venues_by_name(&to_like_pattern(term))?;
    Ok(into_results(hits))
}

pub fn search_artists<R: ArtistRepo>(repo: &R, term: &str) -> Result<SearchResults<ArtistId>> {
    let hits = repo.artists_by_name(&to_like_pattern(term))?;
    Ok(into_results(hits))
}

fn into_results<I>(hits: Vec<(I, String)>) -> SearchResults<I> {
    SearchResults {
        count: hits.len(),
        hits: hits
            .into_iter()
            .map(|(id, name)| SearchHit { id, name })
            .collect(),
    }
}

// `\` is the escape character, see the repository contract.
fn to_like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_terms_are_wrapped() {
        assert_eq!("%fillmore%", to_like_pattern("fillmore"));
        assert_eq!("%%", to_like_pattern(""));
    }

    #[test]
    fn pattern_characters_are_escaped() {
        assert_eq!("%100\\%%", to_like_pattern("100%"));
        assert_eq!("%a\\_b%", to_like_pattern("a_b"));
        assert_eq!("%a\\\\b%", to_like_pattern(r"a\b"));
    }

    #[test]
    fn results_report_their_length() {
        let results = into_results(vec![
            (VenueId::new(1), "A".to_string()),
            (VenueId::new(2), "B".to_string()),
        ]);
        assert_eq!(2, results.count);
        assert_eq!(results.count, results.hits.len());
    }
}

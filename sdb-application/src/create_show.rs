use super::*;
use usecases::NewShow;

pub fn create_show(connections: &sqlite::Connections, new_show: NewShow) -> Result<Show> {
    let record = usecases::prepare_new_show(new_show)?;
    // The referential-integrity checks and the insert must observe the
    // same state, so both run within a single transaction.
    let show = connections.exclusive()?.transaction(|conn| {
        usecases::store_created_show(conn, record).map_err(|err| {
            warn!("Failed to store newly created show: {err}");
            err
        })
    })?;
    Ok(show)
}

use diesel::{self, prelude::*, result::Error as DieselError};

use sdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod artist;
mod show;
mod venue;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

// The id assigned by the insert that ran last on this connection. Only
// meaningful within the transaction that performed the insert.
fn resolve_created_id(conn: &mut SqliteConnection) -> Result<i64> {
    diesel::select(last_insert_rowid())
        .get_result(conn)
        .map_err(from_diesel_err)
}

// Stored link fields are loaded leniently: an invalid URL in the database
// is dropped instead of failing the whole query.
fn load_url(url: String) -> Option<Url> {
    Url::parse(&url).ok()
}

#[macro_use]
extern crate log;

mod create_artist;
mod create_show;
mod create_venue;
mod delete_venue;
mod update_artist;
mod update_venue;

pub mod prelude {
    pub use super::{
        create_artist::*, create_show::*, create_venue::*, delete_venue::*, update_artist::*,
        update_venue::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use sdb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use sdb_db_sqlite::Connections;
}

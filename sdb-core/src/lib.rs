pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use sdb_entities::{artist::*, id::*, show::*, time::*, url::Url, venue::*};
}

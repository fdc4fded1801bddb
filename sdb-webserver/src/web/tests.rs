use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::web::sqlite;

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::rocket_test_setup;
    pub(crate) use crate::web::sqlite;

    pub use sdb_core::repositories::*;
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, sqlite::Connections) {
    let connections = sdb_db_sqlite::Connections::init(":memory:", 1).unwrap();
    sdb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
    };
    let rocket = super::rocket_instance(options, db.clone());
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

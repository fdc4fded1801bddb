use std::net::IpAddr;

use rocket::{catchers, config::Config as RocketCfg, Build, Rocket, Route};

mod frontend;
pub(crate) mod sqlite;

#[cfg(test)]
pub mod tests;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, db: sqlite::Connections) -> Rocket<Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;
    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };
    let mut instance = r.manage(db).register(
        "/",
        catchers![frontend::not_found, frontend::internal_error],
    );
    for (mount_point, routes) in mounts {
        instance = instance.mount(mount_point, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", frontend::routes())]
}

pub async fn run(db: sdb_db_sqlite::Connections, address: IpAddr, port: u16) {
    let rocket_cfg = RocketCfg {
        address,
        port,
        ..RocketCfg::default()
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
    };
    let instance = rocket_instance(options, db.into());
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}

use std::net::IpAddr;

use anyhow::Context as _;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "stagedb", about = "Venue and artist booking directory", version)]
struct Args {
    /// SQLite database file
    #[arg(long, env = "DATABASE_URL", default_value = "stagedb.sqlite")]
    db_url: String,

    /// Size of the database connection pool
    #[arg(long, default_value_t = 4)]
    pool_size: u32,

    /// Address the web server listens on
    #[arg(long, default_value = "127.0.0.1")]
    address: IpAddr,

    /// Port the web server listens on
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let connections = sdb_db_sqlite::Connections::init(&args.db_url, args.pool_size)
        .with_context(|| format!("Failed to open database {}", args.db_url))?;
    sdb_db_sqlite::run_embedded_database_migrations(
        connections
            .exclusive()
            .context("Failed to acquire a database connection for the migrations")?,
    );

    log::info!("Starting stagedb on {}:{}", args.address, args.port);
    sdb_webserver::run(connections, args.address, args.port).await;
    Ok(())
}

use clap::{Parser, ValueEnum};
use matchplay::{connect_db, DbKind, DbOwner, DbProfile};
use migration::{migrate, MigrationCommand};

#[derive(Clone, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Match-play scoring database migration tool")]
struct Args {
    /// Migration command: up | down | fresh | reset | refresh | status
    command: MigrationCommand,

    /// Which database profile to migrate
    #[arg(short, long, value_enum, default_value = "test")]
    env: Env,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,matchplay=info,sqlx=warn")
        .init();

    let args = Args::parse();
    let profile = match args.env {
        Env::Prod => DbProfile::Prod,
        Env::Test => DbProfile::Test,
    };

    match matchplay::config::db::db_kind(profile) {
        Ok(DbKind::Postgres) => {}
        Ok(DbKind::SqliteMemory) => {
            eprintln!("In-memory SQLite is discarded when the CLI exits; point MATCHPLAY_DB_KIND at postgres.");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }

    let conn = match connect_db(profile, DbOwner::Owner).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Could not connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}

mod browse;
mod cli;
mod config;
mod presenter;
mod store;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run()
}

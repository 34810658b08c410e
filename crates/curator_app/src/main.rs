mod app;
mod effects;
mod logging;
mod ui;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);
    app::run_app()
}

use std::error::Error;

use fitguide_cli::{config::Config, console::RustylineConsole, App};
use fitguide_store::{diet::DietPlans, logbook::LogbookImpl};
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let config = Config::from_env()?;
    info!("Starting with {:?}", config);

    let diet_plans = DietPlans::from_file(&config.diet_plans)?;
    let logbook = Box::new(LogbookImpl::new(config.data_dir.clone()));
    let plotter = Box::new(fitguide_chart::create(
        config.chart_dir.clone(),
        config.chart_format,
    ));
    let console = Box::new(RustylineConsole::new()?);

    App::new(console, logbook, plotter, diet_plans).run();

    Ok(())
}

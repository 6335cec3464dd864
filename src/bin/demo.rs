use hashmaps::{Config, DemoError};
use log::{info, trace};

fn main() -> Result<(), DemoError> {
    env_logger::builder().init();

    let config = Config::from_args(std::env::args().skip(1))?;
    trace!("Config: {:#?}", config);
    info!("running {:?}", config.scenario);

    for line in config.run()? {
        println!("{line}");
    }
    Ok(())
}

use clap::Parser;
use color_eyre::Result;
use playlist_stats::{
    init_errors,
    init_logging,
    App,
    Args,
    Config,
};

fn main() -> Result<()> {
    init_errors()?;
    let config = Config::new(Args::parse())?;
    init_logging(config.verbose)?;
    App::new(config)?.run(&mut std::io::stdout().lock())
}

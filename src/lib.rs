#[macro_use]
extern crate tracing;

mod app;
mod logging;
pub mod report;

pub use app::App;
use color_eyre::Result;
pub use logging::init_logging;
pub use playlist_stats_config::{
    Args,
    Config,
};

/// Installs the `color_eyre` report handler plus a panic hook: `better-panic` backtraces in
/// debug builds, `human-panic` crash reports in release builds.
pub fn init_errors() -> Result<()> {
    let (_panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(|panic_info| {
        #[cfg(not(debug_assertions))]
        {
            use human_panic::{
                handle_dump,
                metadata,
                print_msg,
            };
            let metadata = metadata!();
            let file_path = handle_dump(&metadata, panic_info);
            // Nowhere left to report to if stderr is gone.
            let _ = print_msg(file_path, &metadata);
        }

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        std::process::exit(1);
    }));
    Ok(())
}

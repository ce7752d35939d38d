use ct_app::config::load_config;
use ct_app::logging;
use ct_app::state::AppState;
use tracing::{info, warn};

fn main() -> eframe::Result<()> {
    logging::init();

    let startup = load_config();
    if let Some(err) = &startup.load_error {
        warn!(%err, "using default config; the file will not be overwritten");
    }
    let config = startup.config;
    info!(title = %config.title, seed = config.seed_samples, "starting");

    let mut state = AppState::with_config(config);
    state.config_path = startup.save_path;
    ct_app::launch(state)
}

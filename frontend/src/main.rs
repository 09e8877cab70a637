mod dashboard;
mod env_variable_utils;
mod local_storage;
mod utils;

use crate::dashboard::ChannelManagerPage;
use crate::env_variable_utils::ENV_CONFIG;
use log::Level;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ChannelManagerPage />
    }
}

fn main() {
    // The logger has to exist before ENV_CONFIG is first read, or config
    // warnings are dropped. The level is narrowed once the config is known.
    let logger_ready = console_log::init_with_level(Level::Debug).is_ok();
    if logger_ready {
        log::set_max_level(ENV_CONFIG.log_level().to_level_filter());
    }

    log::info!(
        "NAME: \"{}\", STORAGE_KEY: \"{}\" DEBUG: \"{}\"",
        ENV_CONFIG.app_name,
        ENV_CONFIG.storage_key,
        ENV_CONFIG.debug_mode
    );

    yew::Renderer::<App>::new().render();
}

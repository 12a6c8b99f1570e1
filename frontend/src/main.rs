use yew::prelude::*;
use log::info;

mod config;
mod accordion;
mod content {
    pub mod faqs;
}
mod components {
    pub mod email_form;
    pub mod faq_item;
    pub mod feature_section;
}
mod pages {
    pub mod banner;
    pub mod children_profile;
    pub mod download_offline;
    pub mod faq;
    pub mod footer;
    pub mod landing;
    pub mod watch_everywhere;
    pub mod watch_on_tv;
}

use pages::landing::LandingPageOne;

#[function_component]
fn App() -> Html {
    html! {
        <LandingPageOne />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config::tracing_level())
            .build(),
    );

    info!("Starting landing page with {} sections", pages::landing::SECTIONS.len());
    yew::Renderer::<App>::new().render();
}

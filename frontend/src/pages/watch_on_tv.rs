use yew::prelude::*;

use crate::components::feature_section::FeatureSection;
use crate::config;

#[function_component(WatchOnTv)]
pub fn watch_on_tv() -> Html {
    html! {
        <FeatureSection
            title="Enjoy on your TV."
            subtitle="Watch on smart TVs, PlayStation, Xbox, Chromecast, Apple TV, Blu-ray players and more."
            image={config::asset("tv.png")}
            image_alt="Television showing Netflix"
        />
    }
}

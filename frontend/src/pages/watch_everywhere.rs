use yew::prelude::*;

use crate::components::feature_section::FeatureSection;
use crate::config;

#[function_component(WatchEverywhere)]
pub fn watch_everywhere() -> Html {
    html! {
        <FeatureSection
            title="Watch everywhere."
            subtitle="Stream unlimited films and TV programmes on your phone, tablet, laptop and TV."
            image={config::asset("device-pile.png")}
            image_alt="Laptop, tablet and phone playing Netflix"
        />
    }
}

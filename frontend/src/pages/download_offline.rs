use yew::prelude::*;

use crate::components::feature_section::FeatureSection;
use crate::config;

#[function_component(DownloadOffline)]
pub fn download_offline() -> Html {
    html! {
        <FeatureSection
            title="Download your programmes to watch offline."
            subtitle="Save your favourites easily and always have something to watch."
            image={config::asset("mobile.jpg")}
            image_alt="Phone downloading a programme"
            reversed=true
        />
    }
}

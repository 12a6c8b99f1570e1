use yew::prelude::*;

use crate::components::feature_section::FeatureSection;
use crate::config;

#[function_component(ChildrenProfile)]
pub fn children_profile() -> Html {
    html! {
        <FeatureSection
            title="Create profiles for children."
            subtitle="Send children on adventures with their favourite characters in a space made just for them – free with your membership."
            image={config::asset("children.png")}
            image_alt="Children's profile characters"
            reversed=true
        />
    }
}

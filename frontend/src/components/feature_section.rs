use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureSectionProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub image: AttrValue,
    pub image_alt: AttrValue,
    /// Puts the image on the left on wide screens.
    #[prop_or(false)]
    pub reversed: bool,
}

#[function_component(FeatureSection)]
pub fn feature_section(props: &FeatureSectionProps) -> Html {
    html! {
        <section class={classes!("feature-section", props.reversed.then(|| "reversed"))}>
            <div class="feature-text">
                <h2>{&props.title}</h2>
                <h3>{&props.subtitle}</h3>
            </div>
            <div class="feature-media">
                <img src={props.image.clone()} alt={props.image_alt.clone()} />
            </div>
        </section>
    }
}

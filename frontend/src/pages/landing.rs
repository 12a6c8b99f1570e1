use yew::prelude::*;

use crate::pages::banner::Banner;
use crate::pages::children_profile::ChildrenProfile;
use crate::pages::download_offline::DownloadOffline;
use crate::pages::faq::LandingPageFaqs;
use crate::pages::footer::Footer;
use crate::pages::watch_everywhere::WatchEverywhere;
use crate::pages::watch_on_tv::WatchOnTv;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Banner,
    WatchOnTv,
    DownloadOffline,
    WatchEverywhere,
    ChildrenProfile,
    Faqs,
    Footer,
}

/// Top to bottom. The page takes no input, so this never varies.
pub const SECTIONS: [Section; 7] = [
    Section::Banner,
    Section::WatchOnTv,
    Section::DownloadOffline,
    Section::WatchEverywhere,
    Section::ChildrenProfile,
    Section::Faqs,
    Section::Footer,
];

impl Section {
    fn render(self) -> Html {
        match self {
            Section::Banner => html! { <Banner /> },
            Section::WatchOnTv => html! { <WatchOnTv /> },
            Section::DownloadOffline => html! { <DownloadOffline /> },
            Section::WatchEverywhere => html! { <WatchEverywhere /> },
            Section::ChildrenProfile => html! { <ChildrenProfile /> },
            Section::Faqs => html! { <LandingPageFaqs /> },
            Section::Footer => html! { <Footer /> },
        }
    }
}

#[function_component(LandingPageOne)]
pub fn landing_page_one() -> Html {
    html! {
        <div class="landing-page">
            { for SECTIONS.iter().map(|section| section.render()) }

            <style>
                {r#"
                html {
                    font-size: 62.5%;
                }

                body {
                    margin: 0;
                    background-color: #000;
                    font-family: "Helvetica Neue", Helvetica, Arial, sans-serif;
                }

                .landing-page h2 {
                    font-size: clamp(1.2rem, 8vw, 4.8rem);
                    max-width: 600px;
                    font-weight: 700;
                }

                .landing-page h3 {
                    font-size: clamp(1rem, 5vw, 2.5rem);
                    margin-top: 20px;
                    max-width: 600px;
                }

                .feature-section {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 30px;
                    padding: 70px 5%;
                    background-color: #000;
                    color: #fff;
                    text-align: center;
                    border-bottom: 8px solid #222;
                }

                .feature-media img {
                    width: 100%;
                    max-width: 600px;
                }

                @media screen and (min-width: 950px) {
                    .feature-section {
                        flex-direction: row;
                        justify-content: center;
                        text-align: left;
                    }

                    .feature-section.reversed {
                        flex-direction: row-reverse;
                    }

                    .feature-text,
                    .feature-media {
                        flex: 1;
                        max-width: 600px;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_follow_the_fixed_page_order() {
        assert_eq!(
            SECTIONS,
            [
                Section::Banner,
                Section::WatchOnTv,
                Section::DownloadOffline,
                Section::WatchEverywhere,
                Section::ChildrenProfile,
                Section::Faqs,
                Section::Footer,
            ]
        );
    }

    #[test]
    fn every_section_appears_exactly_once() {
        for section in SECTIONS.iter() {
            let count = SECTIONS.iter().filter(|s| *s == section).count();
            assert_eq!(count, 1, "{:?}", section);
        }
    }

    #[test]
    fn faqs_sit_just_above_the_footer() {
        let faqs = SECTIONS.iter().position(|s| *s == Section::Faqs);
        assert_eq!(faqs, Some(SECTIONS.len() - 2));
        assert_eq!(SECTIONS.last(), Some(&Section::Footer));
    }
}

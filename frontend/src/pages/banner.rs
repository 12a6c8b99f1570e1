use yew::prelude::*;

use crate::components::email_form::EmailForm;
use crate::config;

#[function_component(Banner)]
pub fn banner() -> Html {
    let background = format!("background-image: url('{}');", config::asset("banner.jpg"));

    html! {
        <header class="banner" style={background}>
            <div class="banner-overlay"></div>
            <nav class="banner-nav">
                <img class="banner-logo" src={config::asset("logo.svg")} alt="Netflix" />
                <button class="banner-sign-in">{"Sign In"}</button>
            </nav>
            <div class="banner-content">
                <h1>{"Unlimited films, TV programmes and more."}</h1>
                <h2>{"Watch anywhere. Cancel at any time."}</h2>
                <h3>{"Ready to watch? Enter your email to create or restart your membership."}</h3>
                <EmailForm />
            </div>
            <style>
                {r#"
                .banner {
                    position: relative;
                    min-height: 100vh;
                    background-size: cover;
                    background-position: center;
                    border-bottom: 8px solid #222;
                    color: #fff;
                    text-align: center;
                }

                .banner-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(
                        to top,
                        rgba(0, 0, 0, 0.8) 0,
                        rgba(0, 0, 0, 0.4) 60%,
                        rgba(0, 0, 0, 0.8) 100%
                    );
                }

                .banner-nav {
                    position: relative;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 20px 5%;
                }

                .banner-logo {
                    width: clamp(90px, 12vw, 170px);
                }

                .banner-sign-in {
                    padding: 7px 17px;
                    font-size: 1.6rem;
                    color: #fff;
                    background-color: #e50914;
                    border: none;
                    border-radius: 3px;
                    cursor: pointer;
                }

                .banner-content {
                    position: relative;
                    max-width: 950px;
                    margin: 0 auto;
                    padding: 120px 5% 75px;
                }

                .banner-content h1 {
                    font-size: clamp(2.8rem, 6vw, 6.4rem);
                    max-width: 800px;
                    margin: 0 auto;
                }

                .banner-content h2 {
                    font-size: clamp(1.8rem, 3vw, 2.6rem);
                    font-weight: 400;
                    margin: 16px auto;
                }

                .banner-content h3 {
                    font-weight: 400;
                    margin: 0 auto;
                }
                "#}
            </style>
        </header>
    }
}

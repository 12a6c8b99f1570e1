use yew::prelude::*;

const FOOTER_LINKS: [&str; 16] = [
    "FAQ",
    "Help Centre",
    "Account",
    "Media Centre",
    "Investor Relations",
    "Jobs",
    "Redeem gift cards",
    "Buy gift cards",
    "Ways to Watch",
    "Terms of Use",
    "Privacy",
    "Cookie Preferences",
    "Corporate Information",
    "Contact Us",
    "Speed Test",
    "Legal Notices",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p class="footer-contact">{"Questions? Call 0800 096 6379"}</p>
            <ul class="footer-links">
                { for FOOTER_LINKS.iter().map(|label| html! {
                    <li><a href="#">{*label}</a></li>
                }) }
            </ul>
            <select class="footer-language">
                <option value="en">{"English"}</option>
            </select>
            <p class="footer-country">{"Netflix Ireland"}</p>
            <style>
                {r#"
                .site-footer {
                    background-color: #000;
                    color: #757575;
                    padding: 50px 5%;
                    text-align: left;
                    font-size: 1.3rem;
                }

                .site-footer .footer-contact {
                    max-width: 1000px;
                    margin: 0 auto 30px;
                    font-size: 1.6rem;
                }

                .footer-links {
                    list-style: none;
                    padding: 0;
                    max-width: 1000px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 12px;
                }

                .footer-links a {
                    color: #757575;
                }

                .footer-language,
                .footer-country {
                    display: block;
                    max-width: 1000px;
                    margin: 24px auto 0;
                }

                @media screen and (min-width: 768px) {
                    .footer-links {
                        grid-template-columns: repeat(4, 1fr);
                    }
                }
                "#}
            </style>
        </footer>
    }
}

use yew::prelude::*;

use crate::components::email_form::EmailForm;
use crate::components::faq_item::FaqItem;
use crate::content::faqs::FAQS;

#[function_component(LandingPageFaqs)]
pub fn landing_page_faqs() -> Html {
    html! {
        <section class="faq-section">
            <h2 class="heading">{"Frequently Asked Questions"}</h2>

            { for FAQS.iter().enumerate().map(|(index, faq)| html! {
                <FaqItem key={index} faq={*faq} />
            }) }

            <h3>{"Ready to watch? Enter your email to create or restart your membership."}</h3>

            <EmailForm />

            <style>
                {r#"
                .faq-section {
                    border-bottom: 8px solid #222;
                    background-color: #000;
                    color: #fff;
                    text-align: center;
                    height: max-content;
                    padding: 50px 20px;
                }

                .faq-section .heading {
                    margin: 0 auto 50px;
                    max-width: 815px;
                }

                .faq-section h3 {
                    margin: 60px auto 0;
                }

                .question-wrapper {
                    width: clamp(270px, 80%, 815px);
                    margin: 0 auto 10px;
                }

                .faq-question {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    height: 60px;
                    padding: 7px 15px;
                    background-color: #3a3a3a;
                    margin-bottom: 1px;
                    cursor: pointer;
                    transition: background-color 0.2s linear;
                }

                .faq-question:hover {
                    background-color: #686767;
                }

                .faq-question p,
                .faq-question span {
                    font-size: clamp(1.5rem, 2vw, 2rem);
                    font-weight: 400;
                }

                .faq-question p {
                    text-align: left;
                    margin-right: 5px;
                    width: 80%;
                }

                .faq-icon {
                    display: block;
                    margin-left: 5px;
                    padding: 5px;
                    transition: transform 0.25s linear;
                }

                .faq-answer {
                    background-color: #3a3a3a;
                    overflow: hidden;
                    transition: height 0.3s linear, padding 0.3s linear;
                }

                .faq-answer p {
                    font-size: clamp(1.5rem, 10vw, 1.8rem);
                    text-align: left;
                    line-height: 3rem;
                    font-weight: 400;
                    white-space: pre-line;
                    opacity: 0;
                    transition: opacity 0.3s linear;
                }

                .faq-answer.show {
                    padding: 10px 15px;
                }

                .faq-answer.show p {
                    visibility: visible;
                    opacity: 1;
                }

                .faq-answer.hide {
                    padding: 0;
                }

                .faq-answer.hide p {
                    visibility: hidden;
                    opacity: 0;
                }

                @media screen and (min-width: 768px) {
                    .faq-question {
                        padding: 10px 30px;
                    }

                    .faq-question p,
                    .faq-question span {
                        font-size: clamp(1.6rem, 2vw, 2.5rem);
                    }

                    .faq-answer.show {
                        padding: 10px 30px;
                    }

                    .faq-answer p {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

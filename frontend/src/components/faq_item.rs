use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::Element;

use crate::accordion::{AccordionAction, AccordionItemState};
use crate::content::faqs::FaqEntry;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub faq: FaqEntry,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let FaqEntry { question, answer } = props.faq;
    let state = use_reducer(AccordionItemState::collapsed);
    let answer_ref = use_node_ref();

    // One-shot measurement after the first paint, never repeated on resize
    {
        let state = state.clone();
        let answer_ref = answer_ref.clone();
        use_mount(move || {
            let height = answer_ref
                .cast::<Element>()
                .map(|paragraph| paragraph.get_bounding_client_rect().height());
            if height.is_none() {
                tracing::debug!(question, "answer not laid out, expanding without a target height");
            }
            state.dispatch(AccordionAction::Measured(height));
        });
    }

    let toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            tracing::debug!(question, expanded = !state.expanded, "toggling faq");
            state.dispatch(AccordionAction::Toggle);
        })
    };

    html! {
        <div class="question-wrapper">
            <div class="faq-question" onclick={toggle}>
                <p>{question}</p>
                <span class="faq-icon" style={format!("transform: {};", state.icon_rotation())}>
                    {"+"}
                </span>
            </div>
            <div
                class={classes!("faq-answer", state.answer_class())}
                style={state.answer_height().to_style()}
            >
                <p ref={answer_ref}>{answer}</p>
            </div>
        </div>
    }
}

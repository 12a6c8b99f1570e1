use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo_console::log;

/// Trivial check before accepting an address. Returns the trimmed email.
pub fn validate_email(input: &str) -> Result<String, String> {
    let email = input.trim();
    if email.is_empty() {
        return Err("Email is required.".to_string());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.".to_string());
    }
    Ok(email.to_string())
}

#[function_component(EmailForm)]
pub fn email_form() -> Html {
    let input_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let onsubmit = {
        let input_ref = input_ref.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = input_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            // Nothing leaves the page; the address is only acknowledged
            match validate_email(&value) {
                Ok(email) => {
                    log!("Captured email:", &email);
                    error.set(None);
                    success.set(Some(format!("Thanks! We'll be in touch at {}.", email)));
                }
                Err(message) => {
                    success.set(None);
                    error.set(Some(message));
                }
            }
        })
    };

    html! {
        <form class="email-form" {onsubmit}>
            <div class="email-form-row">
                <input
                    ref={input_ref}
                    type="email"
                    placeholder="Email address"
                    autocomplete="email"
                />
                <button type="submit">{"Get Started ›"}</button>
            </div>
            {
                if let Some(message) = (*error).as_ref() {
                    html! { <p class="email-form-error">{message}</p> }
                } else if let Some(message) = (*success).as_ref() {
                    html! { <p class="email-form-success">{message}</p> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .email-form {
                    max-width: 600px;
                    margin: 20px auto 0;
                }

                .email-form-row {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 10px;
                }

                .email-form input {
                    width: 100%;
                    height: 48px;
                    padding: 10px 15px;
                    font-size: 1.6rem;
                    border: 1px solid #8c8c8c;
                    border-radius: 2px;
                }

                .email-form button {
                    height: 48px;
                    padding: 0 25px;
                    font-size: 1.8rem;
                    color: #fff;
                    background-color: #e50914;
                    border: none;
                    border-radius: 2px;
                    cursor: pointer;
                }

                .email-form button:hover {
                    background-color: #f6121d;
                }

                .email-form-error {
                    color: #e87c03;
                    text-align: left;
                    font-size: 1.3rem;
                    margin-top: 6px;
                }

                .email-form-success {
                    color: #fff;
                    font-size: 1.4rem;
                    margin-top: 6px;
                }

                @media screen and (min-width: 768px) {
                    .email-form-row {
                        flex-direction: row;
                        gap: 0;
                    }

                    .email-form input {
                        height: 60px;
                    }

                    .email-form button {
                        height: 60px;
                        font-size: 2.4rem;
                    }
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_an_address() {
        assert_eq!(validate_email("  viewer@example.com "), Ok("viewer@example.com".to_string()));
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(validate_email("   "), Err("Email is required.".to_string()));
    }

    #[test]
    fn rejects_input_without_at_sign() {
        assert!(validate_email("viewer.example.com").is_err());
    }
}

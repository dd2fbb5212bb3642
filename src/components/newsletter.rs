use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::reveal::Reveal;
use crate::content::Newsletter;

#[derive(Properties, PartialEq)]
pub struct NewsletterProps {
    pub content: Newsletter,
}

fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

/// Signup form. Nothing is sent anywhere; the form only acknowledges locally.
#[function_component(NewsletterSignup)]
pub fn newsletter_signup(props: &NewsletterProps) -> Html {
    let email = use_state(String::new);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<String>);

    let oninput = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let onsubmit = {
        let email = email.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if looks_like_email(&email) {
                log::info!("newsletter signup accepted locally");
                submitted.set(true);
            } else {
                error.set(Some("Please enter a valid email address".to_string()));
            }
        })
    };

    let content = &props.content;
    html! {
        <section id={content.id.clone()} class="newsletter">
            <Reveal>
                <h2>{ &content.heading }</h2>
                <p>{ &content.body }</p>
                if *submitted {
                    <p class="newsletter-thanks">{ &content.thanks }</p>
                } else {
                    <form class="newsletter-form" {onsubmit}>
                        <input
                            type="email"
                            placeholder={content.placeholder.clone()}
                            value={(*email).clone()}
                            {oninput}
                        />
                        <button type="submit">{ &content.submit_label }</button>
                    </form>
                }
                if let Some(message) = (*error).clone() {
                    <p class="newsletter-error">{ message }</p>
                }
            </Reveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(looks_like_email("someone@company.com"));
        assert!(looks_like_email("  a@b.co "));
        assert!(!looks_like_email("someone"));
        assert!(!looks_like_email("@company.com"));
        assert!(!looks_like_email("someone@company"));
        assert!(!looks_like_email("someone@company."));
    }
}

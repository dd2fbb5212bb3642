use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::content::Footer;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: Footer,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &FooterProps) -> Html {
    let content = &props.content;
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <p class="footer-tagline">{ &content.tagline }</p>
            <p>{ &content.offices }</p>
            <nav class="footer-links">
                { for content.links.iter().map(|link| html! {
                    <a href={link.href.clone()}>{ &link.label }</a>
                }) }
            </nav>
            <p class="footer-legal">{ format!("© {}–{} Intense Group", content.founded, year) }</p>
        </footer>
    }
}

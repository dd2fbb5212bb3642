use yew::prelude::*;

use crate::content::NavItem;
use crate::hooks::{scroll_to_section, use_environment, use_page_scroll};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub nav: Vec<NavItem>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let env = use_environment();
    let menu_open = use_state(|| false);
    let section_ids: Vec<String> = props.nav.iter().map(|item| item.section_id.clone()).collect();
    let page = use_page_scroll(section_ids);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |item: &NavItem| {
        let target = item.section_id.clone();
        let menu_open = menu_open.clone();
        let motion = env.motion;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(&target, motion);
        });
        let active = page.active_section.as_deref() == Some(item.section_id.as_str());
        html! {
            <button
                key={item.id.clone()}
                class={classes!(
                    if item.cta { "nav-cta" } else { "nav-link" },
                    active.then_some("active"),
                )}
                {onclick}
            >
                { &item.label }
            </button>
        }
    };

    html! {
        <header class={classes!("site-header", page.scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.5rem 4vw;
                        transition: background 0.3s ease, padding 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(10, 10, 14, 0.85);
                        backdrop-filter: blur(12px);
                        padding: 0.9rem 4vw;
                    }
                    .site-header .nav-links {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .site-header button {
                        background: none;
                        border: none;
                        color: inherit;
                        font: inherit;
                        cursor: pointer;
                    }
                    .site-header .nav-link {
                        opacity: 0.7;
                    }
                    .site-header .nav-link.active {
                        opacity: 1;
                        text-decoration: underline;
                        text-underline-offset: 0.4em;
                    }
                    .site-header .nav-cta {
                        padding: 0.6rem 1.2rem;
                        border-radius: 999px;
                        background: #7c5cff;
                    }
                    .site-header .burger-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .site-header .burger-menu {
                            display: block;
                        }
                        .site-header .nav-links {
                            display: none;
                        }
                        .site-header .nav-links.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 2rem;
                            background: rgba(10, 10, 14, 0.97);
                        }
                    }
                "#}
            </style>
            <a class="nav-logo" href="#hero">{"INTENSE"}</a>
            if env.breakpoint.is_mobile() {
                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            }
            <nav class={classes!("nav-links", (*menu_open).then_some("mobile-menu-open"))}>
                { for props.nav.iter().map(nav_link) }
            </nav>
        </header>
    }
}

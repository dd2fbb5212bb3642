use chrono::{Datelike, Utc};
use stylist::yew::styled_component;
use yew::prelude::*;

use super::reveal::Reveal;
use crate::config::CARD_STAGGER_MS;
use crate::content::{CarouselSection, Slide};
use crate::hooks::{use_carousel, use_environment, CarouselHandle};

/// How a slide is laid out. Timing and paging come from the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselVariant {
    Posts,
    CaseStudy,
    Milestones,
    Quotes,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub section: CarouselSection,
    pub variant: CarouselVariant,
    /// Founding year, for the anniversary counter.
    #[prop_or_default]
    pub founded: Option<i32>,
}

fn slide_view(slide: &Slide, variant: CarouselVariant) -> Html {
    match variant {
        CarouselVariant::Posts => html! {
            <article class="carousel-slide post">
                <header>
                    <span class="platform">{ &slide.kicker }</span>
                    <time>{ &slide.title }</time>
                </header>
                <p>{ &slide.body }</p>
            </article>
        },
        CarouselVariant::CaseStudy => html! {
            <article class="carousel-slide case-study">
                <span class="kicker">{ &slide.kicker }</span>
                <h3>{ &slide.title }</h3>
                <p>{ &slide.body }</p>
                <ul class="metrics">
                    { for slide.meta.iter().map(|metric| html! { <li>{ metric }</li> }) }
                </ul>
            </article>
        },
        CarouselVariant::Milestones => html! {
            <article class="carousel-slide milestone">
                <span class="year">{ &slide.kicker }</span>
                <h3>{ &slide.title }</h3>
                <p>{ &slide.body }</p>
            </article>
        },
        CarouselVariant::Quotes => html! {
            <blockquote class="carousel-slide quote">
                <p>{ format!("\u{201c}{}\u{201d}", slide.body) }</p>
                <footer>
                    <strong>{ &slide.title }</strong>
                    <span>{ &slide.kicker }</span>
                </footer>
            </blockquote>
        },
    }
}

#[styled_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let env = use_environment();
    let handle = use_carousel(props.section.clone(), env.motion);

    let years = props.founded.map(|founded| Utc::now().year() - founded);
    let transition = if env.motion.is_reduced() {
        "transition: none;"
    } else {
        "transition: opacity 300ms ease-out;"
    };

    let body = match handle {
        Some(CarouselHandle {
            state,
            next,
            prev,
            go_to,
        }) => {
            let faded = if state.is_animating() { "opacity: 0.4;" } else { "opacity: 1;" };
            let slides = props.section.slides.get(state.visible_slides()).unwrap_or(&[]);
            html! {
                <>
                    <div class="carousel-track" style={format!("{} {}", faded, transition)}>
                        { for slides.iter().map(|slide| slide_view(slide, props.variant)) }
                    </div>
                    <div class="carousel-controls">
                        <button class="carousel-prev" aria-label="Previous" onclick={prev.reform(|_: MouseEvent| ())}>{"←"}</button>
                        <div class="carousel-dots">
                            { for (0..state.page_count()).map(|page| {
                                let go_to = go_to.clone();
                                html! {
                                    <button
                                        class={classes!((page == state.current()).then_some("active"))}
                                        aria-label={format!("Go to page {}", page + 1)}
                                        onclick={Callback::from(move |_: MouseEvent| go_to.emit(page))}
                                    />
                                }
                            }) }
                        </div>
                        <button class="carousel-next" aria-label="Next" onclick={next.reform(|_: MouseEvent| ())}>{"→"}</button>
                    </div>
                </>
            }
        }
        None => html! {},
    };

    html! {
        <section id={props.section.id.clone()} class={css!(r#"
            padding: 6rem 8vw;
            box-sizing: border-box;

            .carousel-header .eyebrow {
                font-size: 0.85rem;
                letter-spacing: 0.12em;
                text-transform: uppercase;
                opacity: 0.7;
            }
            .carousel-years {
                font-size: 4rem;
                font-weight: 700;
            }
            .carousel-track {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 1.5rem;
                margin: 2rem 0;
            }
            .carousel-slide {
                padding: 2rem;
                border-radius: 1.25rem;
                background: rgba(255, 255, 255, 0.04);
                border: 1px solid rgba(255, 255, 255, 0.08);
                margin: 0;
            }
            .carousel-slide .metrics {
                display: flex;
                gap: 1rem;
                padding: 0;
                list-style: none;
                font-weight: 600;
            }
            .carousel-controls {
                display: flex;
                align-items: center;
                gap: 1rem;
            }
            .carousel-controls > button {
                background: none;
                border: 1px solid rgba(255, 255, 255, 0.3);
                border-radius: 50%;
                width: 2.5rem;
                height: 2.5rem;
                color: inherit;
                cursor: pointer;
            }
            .carousel-dots {
                display: flex;
                gap: 0.5rem;
            }
            .carousel-dots button {
                width: 8px;
                height: 8px;
                border-radius: 50%;
                border: none;
                padding: 0;
                background: rgba(255, 255, 255, 0.3);
                cursor: pointer;
            }
            .carousel-dots button.active {
                background: #ffffff;
            }
            @media (max-width: 768px) {
                padding: 4rem 6vw;
            }
        "#)}>
            <Reveal preset={props.section.reveal}>
                <header class="carousel-header">
                    <span class="eyebrow">{ &props.section.eyebrow }</span>
                    <h2>{ &props.section.heading }</h2>
                    {
                        match years {
                            Some(years) => html! { <div class="carousel-years">{ format!("{}+ years", years) }</div> },
                            None => html! {},
                        }
                    }
                </header>
            </Reveal>
            <Reveal preset={props.section.reveal} delay_ms={CARD_STAGGER_MS}>
                { body }
            </Reveal>
        </section>
    }
}

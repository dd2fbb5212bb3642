use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config::SectionConfig;
use crate::content::{ZoneCard, ZonedSection};
use crate::engine::progress::pinned_height;
use crate::engine::{Layer, SectionFrame};
use crate::hooks::{use_environment, use_pinned_section};

#[derive(Properties, PartialEq)]
pub struct PinnedZoneSectionProps {
    pub section: ZonedSection,
}

/// A section that pins to the viewport while scrolling steps through its
/// cards one zone at a time.
#[function_component(PinnedZoneSection)]
pub fn pinned_zone_section(props: &PinnedZoneSectionProps) -> Html {
    match SectionConfig::pinned(&props.section) {
        Ok(config) => html! { <PinnedStage section={props.section.clone()} {config} /> },
        Err(e) => {
            log::warn!("section #{} rendered unpinned: {}", props.section.id, e);
            html! { <StaticZoneList section={props.section.clone()} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct PinnedStageProps {
    section: ZonedSection,
    config: SectionConfig,
}

#[styled_component(PinnedStage)]
fn pinned_stage(props: &PinnedStageProps) -> Html {
    let env = use_environment();
    let node = use_node_ref();
    let pinned = use_pinned_section(node.clone(), props.config, env.motion);
    let SectionFrame {
        progress,
        displayed_zone,
        frame,
        ..
    } = pinned.frame;

    let zone_count = props.config.mapper.zone_count();
    let height = format!("height: {}vh;", pinned_height(zone_count, 100.0));
    let card = props.section.cards.get(displayed_zone);

    html! {
        <section
            id={props.section.id.clone()}
            ref={node}
            style={height}
            class={css!(r#"
                position: relative;
                width: 100%;
            "#)}
        >
            <div class={css!(r#"
                position: sticky;
                top: 0;
                height: 100vh;
                overflow: hidden;
                display: flex;
                flex-direction: column;
                justify-content: center;
                padding: 0 8vw;
                box-sizing: border-box;

                .pinned-eyebrow {
                    font-size: 0.85rem;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                    opacity: 0.7;
                }
                .pinned-card {
                    margin-top: 2rem;
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    will-change: transform, opacity;
                }
                .pinned-card ul {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    padding: 0;
                    list-style: none;
                }
                .pinned-progress {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    height: 2px;
                    background: #7c5cff;
                }
                .pinned-dots {
                    position: absolute;
                    right: 3vw;
                    top: 50%;
                    transform: translateY(-50%);
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .pinned-dots button {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    background: transparent;
                    padding: 0;
                    cursor: pointer;
                }
                .pinned-dots button.active {
                    background: #ffffff;
                }
                @media (max-width: 768px) {
                    padding: 0 6vw;
                    .pinned-card { padding: 1.5rem; }
                    .pinned-dots { right: 1rem; }
                }
            "#)}>
                <span class="pinned-eyebrow">{ &props.section.eyebrow }</span>
                <h2>{ &props.section.heading }</h2>
                {
                    match card {
                        Some(card) => html! {
                            <article class="pinned-card" style={frame.pose(Layer::Card).to_css()}>
                                <div style={frame.pose(Layer::Heading).to_css()}>
                                    <span class="pinned-eyebrow">{ &card.eyebrow }</span>
                                    <h3>{ &card.title }</h3>
                                </div>
                                <div style={frame.pose(Layer::Body).to_css()}>
                                    <p>{ &card.description }</p>
                                    <ul>
                                        { for card.bullets.iter().map(|bullet| html! { <li>{ bullet }</li> }) }
                                    </ul>
                                </div>
                            </article>
                        },
                        None => html! {},
                    }
                }
                <nav class="pinned-dots" aria-label="Section cards">
                    { for (0..zone_count).map(|zone| {
                        let go_to_zone = pinned.go_to_zone.clone();
                        html! {
                            <button
                                class={classes!((zone == displayed_zone).then_some("active"))}
                                aria-label={format!("Show card {}", zone + 1)}
                                onclick={Callback::from(move |_: MouseEvent| go_to_zone.emit(zone))}
                            />
                        }
                    }) }
                </nav>
                <div class="pinned-progress" style={format!("width: {:.2}%;", progress * 100.0)} />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StaticZoneListProps {
    section: ZonedSection,
}

#[function_component(StaticZoneList)]
fn static_zone_list(props: &StaticZoneListProps) -> Html {
    html! {
        <section id={props.section.id.clone()} class="zone-list">
            <h2>{ &props.section.heading }</h2>
            { for props.section.cards.iter().map(zone_card) }
        </section>
    }
}

fn zone_card(card: &ZoneCard) -> Html {
    html! {
        <article class="pinned-card">
            <h3>{ &card.title }</h3>
            <p>{ &card.description }</p>
        </article>
    }
}

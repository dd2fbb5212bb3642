use yew::prelude::*;

use super::reveal::Reveal;
use crate::config::CARD_STAGGER_MS;
use crate::content::CardSection;
use crate::engine::visibility::stagger_delays;

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub section: CardSection,
    /// Lift the card under the pointer.
    #[prop_or_default]
    pub highlight_on_hover: bool,
}

/// Heading plus a grid of cards that reveal one after another.
#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    let section = &props.section;
    let delays = stagger_delays(0, CARD_STAGGER_MS, section.cards.len());
    let active_card = use_state_eq(|| None::<usize>);

    let card_view = |index: usize, card_html: Html| {
        if !props.highlight_on_hover {
            return card_html;
        }
        let onmouseenter = {
            let active_card = active_card.clone();
            Callback::from(move |_: MouseEvent| active_card.set(Some(index)))
        };
        let onmouseleave = {
            let active_card = active_card.clone();
            Callback::from(move |_: MouseEvent| active_card.set(None))
        };
        let active = *active_card == Some(index);
        html! {
            <div class={classes!("card-slot", active.then_some("active"))} {onmouseenter} {onmouseleave}>
                { card_html }
            </div>
        }
    };

    html! {
        <section id={section.id.clone()} class="card-section">
            <Reveal preset={section.reveal}>
                <span class="eyebrow">{ &section.eyebrow }</span>
                <h2>{ &section.heading }</h2>
            </Reveal>
            <div class="card-grid">
                { for section.cards.iter().zip(delays).enumerate().map(|(index, (card, delay_ms))| card_view(index, html! {
                    <Reveal preset={section.reveal} {delay_ms} class="card">
                        <h3>{ &card.title }</h3>
                        <p>{ &card.body }</p>
                    </Reveal>
                })) }
            </div>
        </section>
    }
}

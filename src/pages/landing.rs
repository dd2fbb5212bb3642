use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    CardGrid, Carousel, CarouselVariant, Header, NewsletterSignup, PinnedZoneSection, Reveal,
    SiteFooter,
};
use crate::config::{CARD_STAGGER_MS, HEADLINE_STAGGER_MS};
use crate::content::{ContentDocument, Hero, Story};
use crate::engine::visibility::stagger_delays;
use crate::engine::RevealPreset;
use crate::hooks::{scroll_to_section, use_environment};

#[derive(Properties, PartialEq)]
struct HeroProps {
    hero: Hero,
    explore_target: String,
    contact_target: String,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroProps) -> Html {
    let env = use_environment();
    let hero = &props.hero;
    let delays = stagger_delays(0, HEADLINE_STAGGER_MS, hero.lines.len() + 1);

    let scroll_to = |target: &String| {
        let target = target.clone();
        let motion = env.motion;
        Callback::from(move |_: MouseEvent| scroll_to_section(&target, motion))
    };

    let subtitle_delay = delays.last().copied().unwrap_or_default();
    html! {
        <section id={hero.id.clone()} class="hero">
            <h1>
                { for hero.lines.iter().zip(delays.iter().copied()).map(|(line, delay_ms)| html! {
                    <Reveal eager={true} {delay_ms} class="hero-line">{ line }</Reveal>
                }) }
            </h1>
            <Reveal eager={true} delay_ms={subtitle_delay}>
                <p class="hero-subtitle">{ &hero.subtitle }</p>
                <div class="hero-ctas">
                    <button class="cta-primary" onclick={scroll_to(&props.explore_target)}>
                        { &hero.primary_cta }
                    </button>
                    <button class="cta-secondary" onclick={scroll_to(&props.contact_target)}>
                        { &hero.secondary_cta }
                    </button>
                </div>
            </Reveal>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StoryProps {
    story: Story,
}

#[function_component(StorySection)]
fn story_section(props: &StoryProps) -> Html {
    let story = &props.story;
    let word_delays = stagger_delays(0, HEADLINE_STAGGER_MS / 2, story.heading.len());
    let office_delays = stagger_delays(0, CARD_STAGGER_MS, story.offices.len());

    html! {
        <section id={story.id.clone()} class="story">
            <Reveal>
                <span class="eyebrow">{ &story.eyebrow }</span>
            </Reveal>
            <h2 class="story-heading">
                { for story.heading.iter().zip(word_delays).map(|(word, delay_ms)| html! {
                    <Reveal {delay_ms} class="story-word">{ word }</Reveal>
                }) }
            </h2>
            { for story.paragraphs.iter().map(|paragraph| html! {
                <Reveal preset={RevealPreset::FadeUp}><p>{ paragraph }</p></Reveal>
            }) }
            <div class="story-offices">
                { for story.offices.iter().zip(office_delays).map(|(office, delay_ms)| html! {
                    <Reveal preset={RevealPreset::FadeRight} {delay_ms} class="card">
                        <h3>{ &office.title }</h3>
                        <p>{ &office.body }</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_context::<Rc<ContentDocument>>()
        .unwrap_or_else(|| Rc::new(ContentDocument::embedded()));

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Header nav={content.nav.clone()} />
            <main class="landing">
                <HeroSection
                    hero={content.hero.clone()}
                    explore_target={content.anniversary.id.clone()}
                    contact_target={content.newsletter.id.clone()}
                />
                <StorySection story={content.story.clone()} />
                <PinnedZoneSection section={content.services.clone()} />
                <PinnedZoneSection section={content.business_units.clone()} />
                <CardGrid section={content.beliefs.clone()} />
                <Carousel
                    section={content.anniversary.clone()}
                    variant={CarouselVariant::Posts}
                    founded={Some(content.footer.founded)}
                />
                <Carousel section={content.featured_work.clone()} variant={CarouselVariant::CaseStudy} />
                <Carousel section={content.timeline.clone()} variant={CarouselVariant::Milestones} />
                <CardGrid section={content.credibility.clone()} />
                <CardGrid section={content.presence.clone()} />
                <CardGrid section={content.communities.clone()} highlight_on_hover={true} />
                <Carousel section={content.testimonials.clone()} variant={CarouselVariant::Quotes} />
                <NewsletterSignup content={content.newsletter.clone()} />
            </main>
            <SiteFooter content={content.footer.clone()} />
        </>
    }
}

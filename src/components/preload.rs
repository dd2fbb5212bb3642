use yew::prelude::*;

use crate::engine::preload::PreloadPhase;
use crate::hooks::use_preload;

#[derive(Properties, PartialEq)]
pub struct PreloadOverlayProps {
    pub lines: Vec<String>,
    pub on_complete: Callback<()>,
}

/// Full-screen intro shown before the landing page.
#[function_component(PreloadOverlay)]
pub fn preload_overlay(props: &PreloadOverlayProps) -> Html {
    let char_count = props.lines.iter().map(|line| line.chars().count()).sum();
    let view = use_preload(char_count, props.on_complete.clone());

    let elapsed = view.elapsed_ms;
    let motion = view.motion;
    let overlay = view.sequence.overlay_pose(elapsed, motion);
    let typography = view.sequence.typography_pose(elapsed, motion);

    let mut index = 0;
    let lines = props
        .lines
        .iter()
        .map(|line| {
            let chars = line
                .chars()
                .map(|c| {
                    let pose = view.sequence.char_pose(index, elapsed, motion);
                    index += 1;
                    html! { <span class="preload-char" style={pose.to_css()}>{ c.to_string() }</span> }
                })
                .collect::<Html>();
            html! { <div class="preload-line">{ chars }</div> }
        })
        .collect::<Html>();

    let skip = view.skip.reform(|_: MouseEvent| ());

    html! {
        <div
            class={classes!("preload-overlay", (view.phase == PreloadPhase::Complete).then_some("done"))}
            style={format!("opacity: {:.3};", overlay.opacity)}
            aria-hidden="true"
        >
            <style>
                {r#"
                    .preload-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #0a0a0e;
                        color: #ffffff;
                    }
                    .preload-overlay.done {
                        pointer-events: none;
                    }
                    .preload-line {
                        font-size: clamp(3rem, 10vw, 9rem);
                        font-weight: 800;
                        line-height: 1;
                        text-transform: uppercase;
                    }
                    .preload-char {
                        display: inline-block;
                    }
                    .preload-skip {
                        position: absolute;
                        bottom: 2rem;
                        right: 2rem;
                        background: none;
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        color: inherit;
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="preload-typography" style={typography.to_css()}>
                { lines }
            </div>
            if view.show_skip {
                <button class="preload-skip" onclick={skip}>{"Skip"}</button>
            }
        </div>
    }
}

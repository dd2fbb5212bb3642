use yew::prelude::*;
use yew_hooks::use_mount;

use crate::engine::visibility::DEFAULT_THRESHOLD;
use crate::engine::RevealPreset;
use crate::hooks::{use_environment, use_visibility};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub preset: RevealPreset,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
    /// Show on mount instead of waiting for the element to scroll in.
    #[prop_or_default]
    pub eager: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let env = use_environment();
    let node = use_node_ref();
    let seen = use_visibility(node.clone(), props.threshold);
    let mounted = use_state_eq(|| false);

    {
        let mounted = mounted.clone();
        use_mount(move || mounted.set(true));
    }

    let visible = seen || (props.eager && *mounted);
    let style = props.preset.style(visible, props.delay_ms, env.motion);

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}

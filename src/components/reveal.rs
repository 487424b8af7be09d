use yew::prelude::*;

use crate::hooks::use_in_view;
use crate::utils::observer::InViewOptions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealAnimation {
    Fade,
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ZoomIn,
}

impl RevealAnimation {
    pub fn name(self) -> &'static str {
        match self {
            RevealAnimation::Fade => "fade",
            RevealAnimation::FadeUp => "fade-up",
            RevealAnimation::FadeDown => "fade-down",
            RevealAnimation::FadeLeft => "fade-left",
            RevealAnimation::FadeRight => "fade-right",
            RevealAnimation::ZoomIn => "zoom-in",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub animation: RevealAnimation,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(700)]
    pub duration_ms: u32,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children and animates them in the first time they scroll into
/// view (or every time, with `once = false`).
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(
        node.clone(),
        InViewOptions {
            once: props.once,
            ..Default::default()
        },
    );

    let style = format!(
        "transition-duration: {}ms; transition-delay: {}ms;",
        props.duration_ms, props.delay_ms
    );

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then(|| "revealed"))}
            data-reveal={props.animation.name()}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

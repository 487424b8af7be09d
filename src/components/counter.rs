use log::{debug, warn};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_in_view;
use crate::utils::frame::AnimationFrameLoop;
use crate::utils::observer::InViewOptions;
use crate::utils::tween::{parse_target, CounterTween, Tick};

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    /// Mirrors the element's `data-target` attribute.
    pub target: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_else(config::counter_frames)]
    pub frames: u32,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let display = use_state_eq(|| "0".to_string());
    let finished = use_state_eq(|| false);
    let in_view = use_in_view(
        node.clone(),
        InViewOptions {
            threshold: 0.5,
            ..Default::default()
        },
    );

    {
        let display = display.setter();
        let finished = finished.setter();
        use_effect_with_deps(
            move |(in_view, target, frames)| {
                let mut frame_loop = None;
                if *in_view {
                    match parse_target(target) {
                        Ok(value) => {
                            let mut tween = CounterTween::new(value, *frames);
                            let final_text = tween.final_display();
                            let on_frame = {
                                let display = display.clone();
                                let finished = finished.clone();
                                move || match tween.step() {
                                    Tick::Running(_) => {
                                        display.set(tween.display());
                                        true
                                    }
                                    Tick::Done(value) => {
                                        debug!("counter settled at {}", value);
                                        display.set(tween.display());
                                        finished.set(true);
                                        false
                                    }
                                }
                            };
                            match AnimationFrameLoop::start(on_frame) {
                                Ok(l) => frame_loop = Some(l),
                                Err(e) => {
                                    warn!("{}; jumping counter to {}", e, final_text);
                                    display.set(final_text);
                                    finished.set(true);
                                }
                            }
                        }
                        Err(e) => debug!("counter left static: {}", e),
                    }
                }
                move || drop(frame_loop)
            },
            (in_view, props.target.clone(), props.frames),
        );
    }

    let text = if parse_target(&props.target).is_ok() {
        (*display).clone()
    } else {
        props.target.to_string()
    };

    html! {
        <span
            ref={node}
            class={classes!("counter", (*finished).then(|| "counted"))}
            data-target={props.target.clone()}
        >
            { text }{ props.suffix.clone() }
        </span>
    }
}

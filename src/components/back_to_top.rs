use yew::prelude::*;

use crate::config;
use crate::hooks::use_window_scroll;
use crate::utils::dom::scroll_to_top;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let scroll_y = use_window_scroll(config::SCROLL_DEBOUNCE_MS);
    let visible = scroll_y > config::BACK_TO_TOP_THRESHOLD_PX;
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <>
            <button
                class={classes!("back-to-top", visible.then(|| "visible"))}
                aria-label="Back to top"
                tabindex={if visible { "0" } else { "-1" }}
                {onclick}
            >
                {"↑"}
            </button>
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        width: 44px;
                        height: 44px;
                        border-radius: 50%;
                        border: none;
                        background: #1E90FF;
                        color: #fff;
                        font-size: 1.25rem;
                        cursor: pointer;
                        opacity: 0;
                        visibility: hidden;
                        transform: translateY(12px);
                        transition: opacity 0.3s ease, transform 0.3s ease, visibility 0.3s;
                        z-index: 900;
                    }
                    .back-to-top.visible {
                        opacity: 1;
                        visibility: visible;
                        transform: none;
                    }
                "#}
            </style>
        </>
    }
}

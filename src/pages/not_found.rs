use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"That page doesn't exist, but the rest of the site does."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">
                {"Back to the homepage"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 80vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        text-align: center;
                        padding: 2rem;
                    }
                    .not-found h1 {
                        font-size: 5rem;
                        margin: 0;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                "#}
            </style>
        </div>
    }
}

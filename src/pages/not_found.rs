use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::text_effects::GradientText;
use crate::layout::{use_scroll_to_top, SiteLayout};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_scroll_to_top();

    html! {
        <SiteLayout>
            <section class="section charcoal not-found">
                <div class="container narrow centered">
                    <h1 class="not-found-code"><GradientText text="404" /></h1>
                    <h2 class="section-title">{ "This shoreline hasn't been charted" }</h2>
                    <p class="section-lead">{ "The page you're looking for doesn't exist or has moved." }</p>
                    <div class="button-row">
                        <Link<Route> to={Route::Home} classes="not-found-home">{ "Back to Home" }</Link<Route>>
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .not-found { min-height: 70vh; display: flex; align-items: center; padding-top: 8rem; }
                .not-found-code { font-size: 6rem; margin: 0; }
                .not-found-home { padding: 1rem 2rem; border-radius: 0.5rem; background: #C9A962; color: #1E1E1E; font-weight: 600; text-decoration: none; }
                "#}
            </style>
        </SiteLayout>
    }
}

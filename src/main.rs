use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod layout;
mod components {
    pub mod bento_grid;
    pub mod compare;
    pub mod cta;
    pub mod features;
    pub mod gallery;
    pub mod hover_card;
    pub mod listeners;
    pub mod marquee;
    pub mod motion;
    pub mod number_ticker;
    pub mod sticky_story;
    pub mod testimonials;
    pub mod text_effects;
    pub mod video_hero;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod not_found;
    pub mod on_the_rocks;
    pub mod shoreline_protection;
    pub mod thunder_beach;
    pub mod water_features;
}

use pages::{
    about::About,
    home::Home,
    not_found::NotFound,
    on_the_rocks::OnTheRocks,
    shoreline_protection::ShorelineProtection,
    thunder_beach::ThunderBeach,
    water_features::WaterFeatures,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services/shoreline-protection")]
    ShorelineProtection,
    #[at("/services/water-features")]
    WaterFeatures,
    #[at("/projects/on-the-rocks")]
    OnTheRocks,
    #[at("/projects/thunder-beach")]
    ThunderBeach,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::ShorelineProtection => {
            info!("Rendering Shoreline Protection page");
            html! { <ShorelineProtection /> }
        },
        Route::WaterFeatures => {
            info!("Rendering Water Features page");
            html! { <WaterFeatures /> }
        },
        Route::OnTheRocks => {
            info!("Rendering On The Rocks page");
            html! { <OnTheRocks /> }
        },
        Route::ThunderBeach => {
            info!("Rendering Thunder Beach page");
            html! { <ThunderBeach /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_every_page() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(
            Route::recognize("/services/shoreline-protection"),
            Some(Route::ShorelineProtection)
        );
        assert_eq!(Route::recognize("/services/water-features"), Some(Route::WaterFeatures));
        assert_eq!(Route::recognize("/projects/on-the-rocks"), Some(Route::OnTheRocks));
        assert_eq!(Route::recognize("/projects/thunder-beach"), Some(Route::ThunderBeach));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/projects/magical-forest"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/services"), Some(Route::NotFound));
    }

    #[test]
    fn paths_round_trip_through_to_path() {
        assert_eq!(Route::ThunderBeach.to_path(), "/projects/thunder-beach");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }
}

use chrono::Datelike;
use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::components::listeners::scroll_to_top;
use crate::config::{self, COMPANY_NAME, EMAIL, OFFICES, SERVICE_AREAS};
use crate::Route;

/// Scroll offset past which the header turns solid.
const SCROLLED_AFTER: f64 = 50.0;

const NAVIGATION: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("About", Route::About),
    ("Shorelines", Route::ShorelineProtection),
    ("Water Features", Route::WaterFeatures),
    ("Projects", Route::OnTheRocks),
];

/// `/` only matches itself; every other entry also covers its sub-paths.
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname.starts_with(href)
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

/// Smoothly scrolls to the element with `id`, if this page has one.
pub fn scroll_to_anchor(id: &str) {
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => debug!("no #{} section on this page", id),
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();
    let pathname = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| {
            warn!("header rendered outside the router");
            String::from("/")
        });

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let book = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor("contact");
            menu_open.set(false);
        })
    };

    let links = |mobile: bool| {
        NAVIGATION
            .iter()
            .map(|(name, route)| {
                let active = is_active(&route.to_path(), &pathname);
                let class = if mobile { "mobile-link" } else { "nav-link" };
                html! {
                    <div key={*name} onclick={close_menu.clone()}>
                        <Link<Route> to={route.clone()} classes={classes!(class, active.then(|| "active"))}>
                            { *name }
                            {
                                if active && !mobile {
                                    html! { <span class="nav-underline"></span> }
                                } else {
                                    html! {}
                                }
                            }
                        </Link<Route>>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <header class={classes!("site-header", is_scrolled(scroll_y).then(|| "scrolled"))}>
            <div class="header-bar">
                <Link<Route> to={Route::Home} classes="header-logo">
                    <img src={config::asset("logos/logo.png")} alt={COMPANY_NAME} width="160" height="64" />
                </Link<Route>>
                <nav class="desktop-nav">{ links(false) }</nav>
                <a href="#contact" class="book-button desktop-only" onclick={book.clone()}>{ "Book Consultation" }</a>
                <button class={classes!("burger-menu", (*menu_open).then(|| "open"))} aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <nav>
                    { links(true) }
                    <a href="#contact" class="book-button mobile" onclick={book}>{ "Book Consultation" }</a>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: all 0.5s;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.6), rgba(0,0,0,0.3), transparent);
                }
                .site-header.scrolled {
                    background: rgba(30, 30, 30, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1);
                }
                .header-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 5rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .header-logo img { display: block; height: 4rem; width: auto; }
                .desktop-nav { display: none; align-items: center; gap: 2rem; }
                .nav-link {
                    position: relative;
                    padding: 0.5rem 0;
                    color: rgba(255,255,255,0.7);
                    font-size: 0.875rem;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover, .nav-link.active { color: #fff; }
                .nav-underline {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    height: 2px;
                    border-radius: 9999px;
                    background: #C9A962;
                }
                .book-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    padding: 0.625rem 1.5rem;
                    border-radius: 0.5rem;
                    background: #C9A962;
                    color: #1E1E1E;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.2s;
                }
                .book-button:hover { transform: scale(1.05); }
                .book-button.desktop-only { display: none; }
                .book-button.mobile { display: block; margin-top: 1rem; text-align: center; }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span { display: block; width: 24px; height: 2px; background: #fff; transition: transform 0.3s, opacity 0.3s; }
                .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    background: #1E1E1E;
                    box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1);
                    opacity: 0;
                    visibility: hidden;
                    transform: translateY(-1rem);
                    transition: all 0.3s;
                }
                .mobile-menu.open { opacity: 1; visibility: visible; transform: none; }
                .mobile-menu nav { padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem; }
                .mobile-link { display: block; padding: 0.5rem 0; color: rgba(255,255,255,0.8); font-weight: 500; text-decoration: none; }
                .mobile-link.active { color: #C9A962; }
                @media (min-width: 1024px) {
                    .desktop-nav { display: flex; }
                    .book-button.desktop-only { display: inline-flex; }
                    .burger-menu, .mobile-menu { display: none; }
                }
                "#}
            </style>
        </header>
    }
}

enum FooterTarget {
    Page(Route),
    Anchor(&'static str),
}

const SERVICE_LINKS: [(&str, FooterTarget); 4] = [
    ("Shoreline Protection", FooterTarget::Page(Route::ShorelineProtection)),
    ("Water Features & Ponds", FooterTarget::Page(Route::WaterFeatures)),
    ("Landscape Design", FooterTarget::Anchor("#")),
    ("Landscape Construction", FooterTarget::Anchor("#")),
];

const COMPANY_LINKS: [(&str, FooterTarget); 4] = [
    ("About Us", FooterTarget::Page(Route::About)),
    ("Our Projects", FooterTarget::Page(Route::OnTheRocks)),
    ("Thunder Beach", FooterTarget::Page(Route::ThunderBeach)),
    ("Contact", FooterTarget::Anchor("#contact")),
];

fn footer_links(links: &[(&'static str, FooterTarget)]) -> Html {
    links
        .iter()
        .map(|(name, target)| {
            let link = match target {
                FooterTarget::Page(route) => html! {
                    <Link<Route> to={route.clone()} classes="footer-link">{ *name }</Link<Route>>
                },
                FooterTarget::Anchor(href) => html! {
                    <a href={*href} class="footer-link">{ *name }</a>
                },
            };
            html! { <li key={*name}>{ link }</li> }
        })
        .collect()
}

pub fn service_areas_line() -> String {
    SERVICE_AREAS.join(" • ")
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} {} Inc. All rights reserved.", year, COMPANY_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <img class="footer-logo" src={config::asset("logos/logo.png")} alt={COMPANY_NAME} width="160" height="64" />
                    <p class="footer-blurb">
                        { "Award-winning landscape design and shoreline protection. Naturally refined, inspired by water." }
                    </p>
                    <div class="footer-awards">
                        <img src={config::asset("awards/green-stamp-award.jpg")} alt="Green Stamp Award" width="50" height="50" />
                        <img src={config::asset("awards/awards-excellence.jpg")} alt="Awards of Excellence" width="50" height="50" />
                    </div>
                </div>
                <div>
                    <h4>{ "Services" }</h4>
                    <ul>{ footer_links(&SERVICE_LINKS) }</ul>
                </div>
                <div>
                    <h4>{ "Company" }</h4>
                    <ul>{ footer_links(&COMPANY_LINKS) }</ul>
                </div>
                <div>
                    <h4>{ "Contact" }</h4>
                    { for OFFICES.iter().map(|office| html! {
                        <div class="footer-contact">
                            <p class="footer-label">{ office.name }</p>
                            <a href={format!("tel:{}", office.tel)} class="footer-link">{ office.display }</a>
                        </div>
                    }) }
                    <div class="footer-contact">
                        <p class="footer-label">{ "Email" }</p>
                        <a href={format!("mailto:{}", EMAIL)} class="footer-link">{ EMAIL }</a>
                    </div>
                    <div class="footer-contact">
                        <p class="footer-label">{ "Service Areas" }</p>
                        <p class="footer-areas">{ service_areas_line() }</p>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ copyright_line(year) }</p>
                <p>{ "Ontario's Only Award-Winning Shoreline Contractor" }</p>
            </div>
            <style>
                {r#"
                .site-footer { background: #1E1E1E; color: #fff; }
                .footer-grid {
                    display: grid;
                    gap: 3rem;
                    grid-template-columns: 1fr;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }
                @media (min-width: 768px) { .footer-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (min-width: 1024px) { .footer-grid { grid-template-columns: repeat(4, 1fr); } }
                .footer-logo { filter: brightness(0) invert(1); margin-bottom: 1.5rem; }
                .footer-blurb { color: rgba(255,255,255,0.7); font-size: 0.875rem; margin-bottom: 1.5rem; }
                .footer-awards { display: flex; gap: 0.75rem; }
                .footer-awards img { border-radius: 0.25rem; }
                .site-footer h4 { font-weight: 600; margin-bottom: 1rem; }
                .site-footer ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                .footer-link { color: rgba(255,255,255,0.7); font-size: 0.875rem; text-decoration: none; transition: color 0.2s; }
                .footer-link:hover { color: #fff; }
                .footer-contact { margin-bottom: 1rem; font-size: 0.875rem; }
                .footer-label { color: rgba(255,255,255,0.5); font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.05em; margin-bottom: 0.25rem; }
                .footer-areas { color: rgba(255,255,255,0.7); }
                .footer-bottom {
                    border-top: 1px solid rgba(255,255,255,0.1);
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 1rem;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1.5rem;
                    color: rgba(255,255,255,0.5);
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// `#contact` -> `contact`; a bare `#` or empty hash names no anchor.
pub fn anchor_id(hash: &str) -> Option<&str> {
    let id = hash.trim_start_matches('#');
    (!id.is_empty()).then(|| id)
}

fn location_anchor() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    anchor_id(&hash).map(str::to_string)
}

/// Pages start at the top instead of inheriting the previous scroll offset,
/// unless the URL points at an anchor on the page.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            match location_anchor() {
                Some(id) => scroll_to_anchor(&id),
                None => scroll_to_top(),
            }
            || ()
        },
        (),
    );
}

#[function_component(SiteLayout)]
pub fn site_layout(props: &SiteLayoutProps) -> Html {
    html! {
        <>
            <Header />
            <main class="site-main">{ for props.children.iter() }</main>
            <Footer />
            <style>
                {r#"
                body { margin: 0; font-family: 'Inter', system-ui, sans-serif; color: #1E1E1E; background: #FAFAF8; }
                .site-main { overflow-x: hidden; }
                .section { padding: 6rem 0; }
                .section.tinted { background: #F5F3EE; }
                .section.forest { background: #2D5A3D; color: #fff; }
                .section.charcoal { background: #1E1E1E; color: #fff; }
                .container { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                .container.narrow { max-width: 56rem; }
                .centered { text-align: center; }
                .eyebrow {
                    margin-bottom: 1rem;
                    color: #1A535C;
                    font-size: 0.875rem;
                    font-weight: 600;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .forest .eyebrow, .charcoal .eyebrow, .page-hero .eyebrow { color: #C9A962; }
                .section-title { font-size: 2.75rem; font-weight: 700; line-height: 1.15; margin: 0 0 1.5rem; }
                .section-lead { font-size: 1.125rem; line-height: 1.7; color: #6b7280; max-width: 42rem; }
                .centered .section-lead { margin: 0 auto; }
                .forest .section-lead, .charcoal .section-lead { color: rgba(255,255,255,0.75); }
                .section-header { margin-bottom: 4rem; }
                .page-hero { text-align: center; color: #fff; padding: 0 1.5rem; }
                .page-hero h1 { font-size: 3.5rem; font-weight: 700; line-height: 1.1; margin: 0 0 1.5rem; }
                .page-hero p.hero-lead { font-size: 1.25rem; color: rgba(255,255,255,0.85); max-width: 42rem; margin: 0 auto; }
                .split { display: grid; gap: 4rem; align-items: center; }
                @media (min-width: 1024px) { .split { grid-template-columns: 1fr 1fr; } }
                .split img { width: 100%; border-radius: 0.75rem; object-fit: cover; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.25); }
                .stat-row { display: flex; gap: 3rem; justify-content: center; flex-wrap: wrap; }
                .stat { text-align: center; }
                .stat-value { font-size: 3rem; font-weight: 700; color: #C9A962; }
                .stat-label { font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.1em; opacity: 0.75; }
                .button-row { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-top: 2.5rem; }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_active_only_on_exact_match() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
    }

    #[test]
    fn other_links_match_by_prefix() {
        assert!(is_active("/about", "/about"));
        assert!(is_active("/projects/on-the-rocks", "/projects/on-the-rocks/gallery"));
        assert!(!is_active("/services/water-features", "/services/shoreline-protection"));
    }

    #[test]
    fn navigation_targets_known_paths() {
        let paths: Vec<String> = NAVIGATION.iter().map(|(_, route)| route.to_path()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/about",
                "/services/shoreline-protection",
                "/services/water-features",
                "/projects/on-the-rocks"
            ]
        );
    }

    #[test]
    fn header_turns_solid_past_fifty_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn anchors_come_from_the_hash() {
        assert_eq!(anchor_id("#contact"), Some("contact"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn footer_lines() {
        assert_eq!(
            service_areas_line(),
            "Georgian Bay • Muskoka • Blue Mountain • Collingwood • Thornbury • Toronto & GTA"
        );
        assert_eq!(copyright_line(2025), "© 2025 Pritty Landscapes Inc. All rights reserved.");
    }
}

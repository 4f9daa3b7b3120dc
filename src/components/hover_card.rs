use web_sys::Element;
use yew::prelude::*;

use crate::components::bento_grid::is_activation_key;

pub const GOLD_SPOTLIGHT: &str = "rgba(201, 169, 98, 0.15)";

/// Cursor position relative to the card's top-left corner.
pub fn spotlight_origin(client_x: f64, client_y: f64, card_left: f64, card_top: f64) -> (f64, f64) {
    (client_x - card_left, client_y - card_top)
}

pub fn spotlight_background(x: f64, y: f64, color: &str) -> String {
    format!("background: radial-gradient(350px circle at {x}px {y}px, {color}, transparent 80%);")
}

pub fn is_external(href: &str) -> bool {
    href.starts_with("http")
}

#[derive(Properties, PartialEq)]
pub struct CardHoverEffectProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static(GOLD_SPOTLIGHT))]
    pub spotlight_color: AttrValue,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub href: Option<AttrValue>,
}

/// Card lifted on hover with a spotlight that follows the cursor and a gold
/// border glow.
#[function_component(CardHoverEffect)]
pub fn card_hover_effect(props: &CardHoverEffectProps) -> Html {
    let card = use_node_ref();
    let hovered = use_state_eq(|| false);
    let spotlight = use_state_eq(|| (0.0_f64, 0.0_f64));
    let disabled = props.disabled;

    let onmousemove = {
        let card = card.clone();
        let spotlight = spotlight.clone();
        Callback::from(move |e: MouseEvent| {
            if disabled {
                return;
            }
            if let Some(element) = card.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                spotlight.set(spotlight_origin(
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                    rect.left(),
                    rect.top(),
                ));
            }
        })
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(!disabled))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let onclick = props.onclick.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));

    let interactive = props.onclick.is_some() || props.href.is_some();
    let onkeydown = interactive.then(|| {
        let onclick = props.onclick.clone();
        let href = props.href.clone();
        Callback::from(move |e: KeyboardEvent| {
            if !is_activation_key(&e.key()) {
                return;
            }
            e.prevent_default();
            if let Some(cb) = &onclick {
                cb.emit(());
            }
            if let (Some(href), Some(window)) = (&href, web_sys::window()) {
                let _ = window.location().set_href(href);
            }
        })
    });

    let (x, y) = *spotlight;
    let inner = html! {
        <>
            <div class="card-spotlight" style={spotlight_background(x, y, &props.spotlight_color)} aria-hidden="true"></div>
            <div class={classes!("card-glow", (*hovered).then(|| "on"))} aria-hidden="true"></div>
            <div class="card-body">{ for props.children.iter() }</div>
        </>
    };
    let container_class = classes!("card-surface", props.container_class.clone());
    let surface = match &props.href {
        Some(href) if is_external(href) => html! {
            <a class={container_class} href={href.clone()} target="_blank" rel="noopener noreferrer">{ inner }</a>
        },
        Some(href) => html! {
            <a class={container_class} href={href.clone()}>{ inner }</a>
        },
        None => html! {
            <div class={container_class}>{ inner }</div>
        },
    };

    html! {
        <div
            ref={card}
            class={classes!("card-hover", (!disabled).then(|| "live"), props.class.clone())}
            role={interactive.then(|| "button")}
            tabindex={interactive.then(|| "0")}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
            {onclick}
            {onkeydown}
        >
            { surface }
            <style>
                {r#"
                .card-hover {
                    position: relative;
                    cursor: default;
                    transition: transform 0.3s cubic-bezier(0.25, 0.1, 0.25, 1);
                }
                .card-hover.live { cursor: pointer; }
                .card-hover.live:hover { transform: translateY(-4px) scale(1.02); }
                .card-surface {
                    display: block;
                    position: relative;
                    overflow: hidden;
                    height: 100%;
                    border-radius: 1rem;
                    background: #fff;
                    border: 1px solid rgba(0, 0, 0, 0.08);
                    color: inherit;
                    text-decoration: none;
                    transition: box-shadow 0.3s;
                }
                .card-hover.live:hover .card-surface { box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.05); }
                .card-spotlight {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    pointer-events: none;
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .card-hover.live:hover .card-spotlight { opacity: 1; }
                .card-glow {
                    position: absolute;
                    inset: 0;
                    z-index: 2;
                    border-radius: 1rem;
                    pointer-events: none;
                    border: 2px solid rgba(201, 169, 98, 0.4);
                    box-shadow: 0 0 20px rgba(201, 169, 98, 0.15);
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .card-glow.on { opacity: 1; }
                .card-body { position: relative; height: 100%; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CardContentProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub image_alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CardContent)]
pub fn card_content(props: &CardContentProps) -> Html {
    html! {
        <div class={classes!("card-content", props.class.clone())}>
            {
                if let Some(image) = &props.image {
                    html! {
                        <div class="card-content-image">
                            <img src={image.clone()} alt={props.image_alt.clone()} loading="lazy" />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="card-content-text">
                {
                    if let Some(icon) = &props.icon {
                        html! { <div class="card-content-icon">{ icon.clone() }</div> }
                    } else {
                        html! {}
                    }
                }
                <h3>{ props.title.clone() }</h3>
                <p>{ props.description.clone() }</p>
            </div>
            <style>
                {r#"
                .card-content { height: 100%; display: flex; flex-direction: column; }
                .card-content-image { height: 12rem; overflow: hidden; }
                .card-content-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s;
                }
                .card-content-image img:hover { transform: scale(1.05); }
                .card-content-text { padding: 1.5rem; flex: 1; display: flex; flex-direction: column; }
                .card-content-icon { margin-bottom: 1rem; color: #2D5A3D; transition: transform 0.2s; }
                .card-content-icon:hover { transform: scale(1.1) rotate(5deg); }
                .card-content-text h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; transition: color 0.3s; }
                .card-hover:hover .card-content-text h3 { color: #2D5A3D; }
                .card-content-text p { color: #6b7280; flex: 1; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// One column on phones, two on tablets, three on desktops.
#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    html! {
        <div class={classes!("card-grid", props.class.clone())}>
            { for props.children.iter() }
            <style>
                {r#"
                .card-grid { display: grid; gap: 1.5rem; grid-template-columns: 1fr; }
                @media (min-width: 640px) { .card-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (min-width: 1024px) { .card-grid { grid-template-columns: repeat(3, 1fr); } }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub icon: Option<Html>,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub image_alt: AttrValue,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(HoverCard)]
pub fn hover_card(props: &HoverCardProps) -> Html {
    html! {
        <CardHoverEffect
            class={classes!("card-full", props.class.clone())}
            container_class="card-full"
            href={props.href.clone()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            <CardContent
                title={props.title.clone()}
                description={props.description.clone()}
                icon={props.icon.clone()}
                image={props.image.clone()}
                image_alt={props.image_alt.clone()}
            />
        </CardHoverEffect>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spotlight_tracks_the_cursor_inside_the_card() {
        assert_eq!(spotlight_origin(250.0, 140.0, 200.0, 100.0), (50.0, 40.0));
        assert_eq!(spotlight_origin(150.0, 90.0, 200.0, 100.0), (-50.0, -10.0));
    }

    #[test]
    fn spotlight_uses_the_configured_colour() {
        assert_eq!(
            spotlight_background(50.0, 40.0, GOLD_SPOTLIGHT),
            "background: radial-gradient(350px circle at 50px 40px, rgba(201, 169, 98, 0.15), transparent 80%);"
        );
    }

    #[test]
    fn only_absolute_links_are_external() {
        assert!(is_external("https://www.youtube.com/watch?v=abc"));
        assert!(!is_external("/projects/on-the-rocks"));
        assert!(!is_external("#contact"));
    }
}

use gloo_events::EventListener;
use web_sys::Element;
use yew::prelude::*;

use crate::components::listeners::on_window;

/// Default shrink applied to the viewport before something counts as visible.
pub const IN_VIEW_MARGIN: f64 = 50.0;

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Reduced-motion preference, read once when the component is created.
#[hook]
pub fn use_reduced_motion() -> bool {
    let cached = use_state(prefers_reduced_motion);
    *cached
}

/// Whether a box spanning `top..bottom` (viewport coordinates) intersects the
/// viewport shrunk by `margin` on both edges.
pub fn is_in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    bottom > margin && top < viewport_height - margin
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

fn element_in_view(node: &NodeRef, margin: f64) -> bool {
    let (Some(element), Some(height)) = (node.cast::<Element>(), viewport_height()) else {
        return false;
    };
    let rect = element.get_bounding_client_rect();
    is_in_view(rect.top(), rect.bottom(), height, margin)
}

/// Becomes true the first time `node` scrolls into view and stays true.
/// Listeners are dropped as soon as it has been seen.
#[hook]
pub fn use_in_view(node: NodeRef, margin: f64) -> bool {
    let seen = use_state_eq(|| false);
    let already = *seen;
    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |already: &bool| {
                let listeners: Vec<EventListener> = if *already {
                    Vec::new()
                } else {
                    let check = move || {
                        if element_in_view(&node, margin) {
                            seen.set(true);
                        }
                    };
                    check();
                    let on_scroll = check.clone();
                    let on_resize = check;
                    [
                        on_window("scroll", move |_| on_scroll()),
                        on_window("resize", move |_| on_resize()),
                    ]
                    .into_iter()
                    .flatten()
                    .collect()
                };
                move || drop(listeners)
            },
            already,
        );
    }
    *seen
}

pub fn blur_fade_style(visible: bool, delay: f64, duration: f64, offset: f64, blur: f64) -> String {
    if visible {
        format!(
            "opacity: 1; filter: blur(0px); transform: translateY(0); \
             transition: opacity {duration}s ease-out {delay}s, filter {duration}s ease-out {delay}s, transform {duration}s ease-out {delay}s;"
        )
    } else {
        format!("opacity: 0; filter: blur({blur}px); transform: translateY({offset}px);")
    }
}

#[derive(Properties, PartialEq)]
pub struct BlurFadeProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds before the fade starts.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.4)]
    pub duration: f64,
    #[prop_or(6.0)]
    pub y_offset: f64,
    #[prop_or(6.0)]
    pub blur: f64,
    /// Wait until scrolled into view instead of fading in on mount.
    #[prop_or_default]
    pub in_view: bool,
}

#[function_component(BlurFade)]
pub fn blur_fade(props: &BlurFadeProps) -> Html {
    let node = use_node_ref();
    let reduced_motion = use_reduced_motion();
    let seen = use_in_view(node.clone(), IN_VIEW_MARGIN);
    let mounted = use_state_eq(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    let visible = if props.in_view { seen } else { *mounted };
    let style = if reduced_motion {
        String::new()
    } else {
        blur_fade_style(visible, props.delay, props.duration, props.y_offset, props.blur)
    };

    html! {
        <div ref={node} class={classes!("blur-fade", props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_view_needs_overlap_beyond_the_margin() {
        assert!(is_in_view(100.0, 300.0, 800.0, 50.0));
        // Entirely below the fold.
        assert!(!is_in_view(900.0, 1_200.0, 800.0, 50.0));
        // Peeking less than the margin above the bottom edge.
        assert!(!is_in_view(760.0, 1_000.0, 800.0, 50.0));
        assert!(is_in_view(740.0, 1_000.0, 800.0, 50.0));
        // Scrolled past.
        assert!(!is_in_view(-400.0, 20.0, 800.0, 50.0));
    }

    #[test]
    fn tall_elements_covering_the_viewport_are_in_view() {
        assert!(is_in_view(-1_000.0, 2_000.0, 800.0, 50.0));
    }

    #[test]
    fn hidden_style_offsets_and_blurs() {
        let style = blur_fade_style(false, 0.2, 0.4, 6.0, 6.0);
        assert_eq!(style, "opacity: 0; filter: blur(6px); transform: translateY(6px);");
    }

    #[test]
    fn visible_style_carries_the_delay() {
        let style = blur_fade_style(true, 0.3, 0.4, 6.0, 6.0);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("opacity 0.4s ease-out 0.3s"));
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub pause_on_hover: bool,
    #[prop_or_default]
    pub reverse: bool,
    /// Seconds for one full loop.
    #[prop_or(40.0)]
    pub duration: f64,
}

/// Infinite horizontal scroll. The children are rendered twice and the track
/// is shifted by half its width per loop so the seam never shows.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let track_style = format!(
        "animation-duration: {}s; animation-direction: {};",
        props.duration,
        if props.reverse { "reverse" } else { "normal" }
    );

    html! {
        <div class={classes!("marquee", props.pause_on_hover.then(|| "marquee-pausable"), props.class.clone())}>
            <div class="marquee-track" style={track_style}>
                <div class="marquee-group">{ for props.children.iter() }</div>
                <div class="marquee-group" aria-hidden="true">{ for props.children.iter() }</div>
            </div>
            <style>
                {r#"
                .marquee {
                    overflow: hidden;
                    display: flex;
                }
                .marquee-track {
                    display: flex;
                    flex-shrink: 0;
                    gap: 3rem;
                    animation-name: marqueeScroll;
                    animation-timing-function: linear;
                    animation-iteration-count: infinite;
                }
                .marquee-group {
                    display: flex;
                    flex-shrink: 0;
                    gap: 3rem;
                    align-items: center;
                }
                .marquee-pausable:hover .marquee-track {
                    animation-play-state: paused;
                }
                @keyframes marqueeScroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(calc(-50% - 1.5rem)); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .marquee-track { animation: none; }
                }
                "#}
            </style>
        </div>
    }
}

//! Scroll-driven story: text columns stick while each section's image fades
//! and scales in as the page scrolls through the container.

use gloo_events::EventListener;
use web_sys::Element;
use yew::prelude::*;

use crate::components::listeners::on_window;
use crate::components::motion::viewport_height;

#[derive(Clone, Debug, PartialEq)]
pub struct StorySection {
    pub title: AttrValue,
    pub content: AttrValue,
    pub image: AttrValue,
    pub image_alt: Option<AttrValue>,
}

/// Piecewise-linear map of `x` from `input` stops to `output` stops, clamped to
/// the first and last stop. Zero-width spans jump straight to their end value.
pub fn interpolate(input: &[f64], output: &[f64], x: f64) -> f64 {
    let stops = input.len().min(output.len());
    match stops {
        0 => return 0.0,
        1 => return output[0],
        _ => {}
    }
    let x = x.max(input[0]).min(input[stops - 1]);
    let segment = (1..stops).find(|&i| input[i] > x).unwrap_or(stops - 1);
    let (from, to) = (input[segment - 1], input[segment]);
    let t = if to > from { (x - from) / (to - from) } else { 1.0 };
    output[segment - 1] + (output[segment] - output[segment - 1]) * t
}

/// 0 when the container's top reaches the viewport top, 1 when its bottom
/// reaches the viewport bottom.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = height - viewport_height;
    if travel <= 0.0 {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-top / travel).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentPose {
    pub opacity: f64,
    pub scale: f64,
}

pub fn segment_pose(index: usize, total: usize, progress: f64) -> SegmentPose {
    if total == 0 {
        return SegmentPose { opacity: 1.0, scale: 1.0 };
    }
    let start = index as f64 / total as f64;
    let end = (index + 1) as f64 / total as f64;
    let last = index + 1 == total;
    SegmentPose {
        opacity: interpolate(
            &[(start - 0.1).max(0.0), start, end - 0.1, end],
            &[0.0, 1.0, 1.0, if last { 1.0 } else { 0.0 }],
            progress,
        ),
        scale: interpolate(&[start, start + 0.1], &[0.95, 1.0], progress),
    }
}

fn measure_progress(node: &NodeRef) -> Option<f64> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some(scroll_progress(rect.top(), rect.height(), viewport_height()?))
}

#[derive(Properties, PartialEq)]
pub struct StickyScrollStoryProps {
    pub sections: Vec<StorySection>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StickyScrollStory)]
pub fn sticky_scroll_story(props: &StickyScrollStoryProps) -> Html {
    let container = use_node_ref();
    let progress = use_state_eq(|| 0.0_f64);

    {
        let container = container.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Some(value) = measure_progress(&container) {
                        progress.set(value);
                    }
                };
                update();
                let on_resize = update.clone();
                let listeners: Vec<EventListener> = [
                    on_window("scroll", move |_| update()),
                    on_window("resize", move |_| on_resize()),
                ]
                .into_iter()
                .flatten()
                .collect();
                move || drop(listeners)
            },
            (),
        );
    }

    let total = props.sections.len();
    html! {
        <div ref={container} class={classes!("story", props.class.clone())}>
            { for props.sections.iter().enumerate().map(|(index, section)| {
                let pose = segment_pose(index, total, *progress);
                let alt = section.image_alt.clone().unwrap_or_else(|| section.title.clone());
                html! {
                    <div key={index} class="story-segment">
                        <div class="story-grid">
                            <div class="story-text">
                                <h3>{ section.title.clone() }</h3>
                                <p>{ section.content.clone() }</p>
                            </div>
                            <div
                                class="story-image"
                                style={format!("opacity: {}; transform: scale({});", pose.opacity, pose.scale)}
                            >
                                <img src={section.image.clone()} {alt} />
                            </div>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
                .story { position: relative; }
                .story-segment { min-height: 100vh; display: flex; align-items: center; padding: 5rem 0; }
                .story-grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                    width: 100%;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                @media (min-width: 768px) {
                    .story-grid { grid-template-columns: 1fr 1fr; }
                    .story-text { position: sticky; top: 8rem; align-self: start; }
                }
                .story-text h3 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1.5rem; }
                .story-text p { font-size: 1.125rem; line-height: 1.7; color: #6b7280; }
                .story-image {
                    position: relative;
                    height: 500px;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .story-image img { width: 100%; height: 100%; object-fit: cover; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn interpolation_is_linear_between_stops() {
        assert!(close(interpolate(&[0.0, 1.0], &[0.0, 10.0], 0.25), 2.5));
        assert!(close(interpolate(&[0.2, 0.4, 0.8], &[0.0, 1.0, 0.0], 0.6), 0.5));
    }

    #[test]
    fn interpolation_clamps_outside_the_range() {
        assert!(close(interpolate(&[0.25, 0.35], &[0.95, 1.0], 0.0), 0.95));
        assert!(close(interpolate(&[0.25, 0.35], &[0.95, 1.0], 0.9), 1.0));
    }

    #[test]
    fn repeated_stops_take_the_later_value() {
        // First segment of a story: fade-in range collapses onto zero.
        assert!(close(interpolate(&[0.0, 0.0, 0.15, 0.25], &[0.0, 1.0, 1.0, 0.0], 0.0), 1.0));
    }

    #[test]
    fn progress_spans_the_scrollable_travel() {
        assert_eq!(scroll_progress(100.0, 4_000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 4_000.0, 800.0), 0.0);
        assert!(close(scroll_progress(-1_600.0, 4_000.0, 800.0), 0.5));
        assert_eq!(scroll_progress(-5_000.0, 4_000.0, 800.0), 1.0);
    }

    #[test]
    fn short_containers_snap() {
        assert_eq!(scroll_progress(10.0, 500.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-10.0, 500.0, 800.0), 1.0);
    }

    #[test]
    fn four_section_story() {
        // Segment 1 of 4: start 0.25, end 0.5.
        let before = segment_pose(1, 4, 0.1);
        assert!(close(before.opacity, 0.0));
        assert!(close(before.scale, 0.95));

        let fading_in = segment_pose(1, 4, 0.2);
        assert!(close(fading_in.opacity, 0.5));

        let settled = segment_pose(1, 4, 0.38);
        assert!(close(settled.opacity, 1.0));
        assert!(close(settled.scale, 1.0));

        let leaving = segment_pose(1, 4, 0.45);
        assert!(close(leaving.opacity, 0.5));
        assert!(close(segment_pose(1, 4, 0.5).opacity, 0.0));
    }

    #[test]
    fn first_section_is_visible_at_the_top() {
        let pose = segment_pose(0, 4, 0.0);
        assert!(close(pose.opacity, 1.0));
        assert!(close(pose.scale, 0.95));
    }

    #[test]
    fn last_section_stays_visible() {
        assert!(close(segment_pose(3, 4, 1.0).opacity, 1.0));
        assert!(close(segment_pose(2, 4, 0.75).opacity, 0.0));
    }
}

//! Before/after comparison slider.
//!
//! Two stacked images; the top ("before") one is clipped at the slider
//! position. In `Drag` mode the position moves between press and release, with
//! moves captured on the window so the drag survives leaving the widget. In
//! `Hover` mode it follows the pointer. An optional autoplay oscillator sweeps
//! the position while nobody is interacting.

use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use log::debug;
use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::components::listeners::{on_window, on_window_typed};

pub mod autoplay;
pub mod handle;
pub mod reveal;
pub mod tracker;

pub use handle::SlideMode;

use autoplay::Oscillator;
use handle::HandleController;
use tracker::{ContainerBounds, SliderPosition};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderAction {
    Press,
    Release,
    Enter,
    Leave,
    ContainerMove {
        client_x: f64,
        bounds: Option<ContainerBounds>,
    },
    WindowMove {
        client_x: f64,
        bounds: Option<ContainerBounds>,
    },
    AutoplayTick,
}

/// Everything the widget mutates, owned by one reducer per instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderState {
    pub position: SliderPosition,
    pub controller: HandleController,
    oscillator: Oscillator,
}

impl SliderState {
    pub fn new(initial_percent: f64, mode: SlideMode) -> Self {
        Self {
            position: SliderPosition::new(initial_percent),
            controller: HandleController::new(mode),
            oscillator: Oscillator::default(),
        }
    }

    /// Applies one input. Returns whether anything changed.
    pub fn apply(&mut self, action: SliderAction) -> bool {
        match action {
            SliderAction::Press => self.controller.press(),
            SliderAction::Release => self.controller.release(),
            SliderAction::Enter => {
                let before = self.controller.clone();
                self.controller.enter();
                before != self.controller
            }
            SliderAction::Leave => {
                let before = self.controller.clone();
                self.controller.leave();
                before != self.controller
            }
            SliderAction::ContainerMove { client_x, bounds } => {
                if !self.controller.accepts_container_move() {
                    return false;
                }
                let measurable =
                    bounds.map_or(false, |bounds| tracker::percent_at(client_x, &bounds).is_some());
                if !measurable {
                    return false;
                }
                // A pointer already over the widget at mount never sends
                // mouseenter, so its first move counts as entering.
                let before = self.controller.clone();
                self.controller.enter();
                let moved = tracker::track(&mut self.position, client_x, bounds);
                moved || before != self.controller
            }
            SliderAction::WindowMove { client_x, bounds } => {
                self.controller.accepts_window_move()
                    && tracker::track(&mut self.position, client_x, bounds)
            }
            SliderAction::AutoplayTick => {
                if self.controller.is_engaged() {
                    return false;
                }
                self.position = self.oscillator.tick(self.position);
                true
            }
        }
    }
}

impl Reducible for SliderState {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CompareProps {
    pub first_image: AttrValue,
    pub second_image: AttrValue,
    #[prop_or(AttrValue::Static("Before image"))]
    pub first_image_alt: AttrValue,
    #[prop_or(AttrValue::Static("After image"))]
    pub second_image_alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes for the "before" image.
    #[prop_or_default]
    pub first_image_class: Classes,
    /// Extra classes for the "after" image.
    #[prop_or_default]
    pub second_image_class: Classes,
    #[prop_or(50.0)]
    pub initial_slider_percentage: f64,
    #[prop_or_default]
    pub slide_mode: SlideMode,
    #[prop_or(true)]
    pub show_handlebar: bool,
    #[prop_or_default]
    pub autoplay: bool,
    /// Milliseconds for one autoplay cycle.
    #[prop_or(5000)]
    pub autoplay_duration: u32,
}

#[function_component(Compare)]
pub fn compare(props: &CompareProps) -> Html {
    let container = use_node_ref();
    let state = {
        let initial = props.initial_slider_percentage;
        let mode = props.slide_mode;
        use_reducer_eq(move || SliderState::new(initial, mode))
    };
    let tracking = state.controller.is_tracking();

    // Window capture exists only while a drag is live. The listeners are
    // owned by this effect: release flips `tracking` and reruns it, and
    // unmount runs the destructor, so either way every window listener is
    // dropped and unregistered before the widget can go away mid-drag.
    {
        let dispatcher = state.dispatcher();
        let container = container.clone();
        use_effect_with_deps(
            move |tracking: &bool| {
                let listeners = if *tracking {
                    debug!("compare: drag started");
                    window_capture(dispatcher, container)
                } else {
                    Vec::new()
                };
                move || {
                    if !listeners.is_empty() {
                        debug!("compare: drag ended, releasing {} listeners", listeners.len());
                    }
                    drop(listeners);
                }
            },
            tracking,
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(enabled, cycle_ms): &(bool, u32)| {
                let interval = enabled.then(|| {
                    let period = autoplay::tick_interval_ms(*cycle_ms);
                    debug!("compare: autoplay every {}ms", period);
                    Interval::new(period, move || dispatcher.dispatch(SliderAction::AutoplayTick))
                });
                move || drop(interval)
            },
            (props.autoplay, props.autoplay_duration),
        );
    }

    let onmousedown = {
        let dispatcher = state.dispatcher();
        Callback::from(move |event: MouseEvent| {
            // Keeps the browser from starting a native image drag.
            event.prevent_default();
            dispatcher.dispatch(SliderAction::Press);
        })
    };

    let onmousemove = {
        let dispatcher = state.dispatcher();
        let container = container.clone();
        let mode = props.slide_mode;
        Callback::from(move |event: MouseEvent| {
            if mode == SlideMode::Hover {
                dispatcher.dispatch(SliderAction::ContainerMove {
                    client_x: f64::from(event.client_x()),
                    bounds: ContainerBounds::measure(&container),
                });
            }
        })
    };

    let onmouseenter = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SliderAction::Enter))
    };

    let onmouseleave = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SliderAction::Leave))
    };

    let ontouchstart = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: TouchEvent| {
            dispatcher.dispatch(SliderAction::Enter);
            dispatcher.dispatch(SliderAction::Press);
        })
    };

    let ontouchmove = {
        let dispatcher = state.dispatcher();
        let container = container.clone();
        let mode = props.slide_mode;
        Callback::from(move |event: TouchEvent| {
            if mode != SlideMode::Hover {
                return;
            }
            if let Some(client_x) = tracker::first_touch_x(&event) {
                dispatcher.dispatch(SliderAction::ContainerMove {
                    client_x,
                    bounds: ContainerBounds::measure(&container),
                });
            }
        })
    };

    let ontouchend = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: TouchEvent| {
            dispatcher.dispatch(SliderAction::Release);
            dispatcher.dispatch(SliderAction::Leave);
        })
    };

    let container_style = match props.slide_mode {
        SlideMode::Drag => "cursor: ew-resize; touch-action: pan-y;",
        SlideMode::Hover => "cursor: default;",
    };

    let layers = reveal::Layers {
        first_image: &props.first_image,
        first_image_alt: &props.first_image_alt,
        first_image_class: &props.first_image_class,
        second_image: &props.second_image,
        second_image_alt: &props.second_image_alt,
        second_image_class: &props.second_image_class,
        show_handlebar: props.show_handlebar,
    };

    html! {
        <div
            ref={container}
            class={classes!("compare", tracking.then(|| "dragging"), props.class.clone())}
            style={container_style}
            {onmousedown}
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
            {ontouchstart}
            {ontouchmove}
            {ontouchend}
        >
            { reveal::render(&layers, state.position) }
            <style>
                {r#"
                .compare {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    overflow: hidden;
                    user-select: none;
                    -webkit-user-select: none;
                    border-radius: 0.75rem;
                }
                .compare-layer {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                }
                .compare-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    pointer-events: none;
                }
                .compare-divider {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 4px;
                    background: #fff;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
                    z-index: 10;
                    animation: compareFadeIn 0.3s ease-out;
                }
                .compare-handle {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #fff;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 2px;
                }
                .compare-chevron {
                    width: 12px;
                    height: 12px;
                    color: #4b5563;
                }
                .compare-label {
                    position: absolute;
                    bottom: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    color: #fff;
                    font-size: 0.875rem;
                }
                .compare-label-before {
                    left: 1rem;
                    background: rgba(0, 0, 0, 0.7);
                }
                .compare-label-after {
                    right: 1rem;
                    background: #2D5A3D;
                }
                @keyframes compareFadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
        </div>
    }
}

fn window_capture(
    dispatcher: UseReducerDispatcher<SliderState>,
    container: NodeRef,
) -> Vec<EventListener> {
    let mouse_move = {
        let dispatcher = dispatcher.clone();
        let container = container.clone();
        on_window_typed("mousemove", move |event: &MouseEvent| {
            dispatcher.dispatch(SliderAction::WindowMove {
                client_x: f64::from(event.client_x()),
                bounds: ContainerBounds::measure(&container),
            });
        })
    };

    let touch_move = {
        let dispatcher = dispatcher.clone();
        on_window_typed("touchmove", move |event: &TouchEvent| {
            if let Some(client_x) = tracker::first_touch_x(event) {
                dispatcher.dispatch(SliderAction::WindowMove {
                    client_x,
                    bounds: ContainerBounds::measure(&container),
                });
            }
        })
    };

    let releases = ["mouseup", "touchend", "touchcancel", "pointercancel"]
        .into_iter()
        .map(|name| {
            let dispatcher = dispatcher.clone();
            on_window(name, move |_| dispatcher.dispatch(SliderAction::Release))
        });

    [mouse_move, touch_move]
        .into_iter()
        .chain(releases)
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Option<ContainerBounds> {
        Some(ContainerBounds::new(100.0, 0.0, 400.0, 300.0))
    }

    fn window_move(client_x: f64) -> SliderAction {
        SliderAction::WindowMove { client_x, bounds: bounds() }
    }

    fn container_move(client_x: f64) -> SliderAction {
        SliderAction::ContainerMove { client_x, bounds: bounds() }
    }

    #[test]
    fn initial_position_is_clamped() {
        assert_eq!(SliderState::new(140.0, SlideMode::Drag).position.percent(), 100.0);
        assert_eq!(SliderState::new(-3.0, SlideMode::Drag).position.percent(), 0.0);
    }

    #[test]
    fn drag_moves_before_press_are_ignored() {
        let mut state = SliderState::new(50.0, SlideMode::Drag);
        assert!(!state.apply(window_move(450.0)));
        assert!(!state.apply(container_move(450.0)));
        assert_eq!(state.position.percent(), 50.0);
    }

    #[test]
    fn drag_stops_tracking_after_release() {
        let mut state = SliderState::new(50.0, SlideMode::Drag);
        assert!(state.apply(SliderAction::Press));
        assert!(state.apply(window_move(900.0)));
        assert_eq!(state.position.percent(), 100.0);
        assert!(state.apply(SliderAction::Release));
        assert!(!state.controller.is_tracking());

        assert!(!state.apply(window_move(150.0)));
        assert_eq!(state.position.percent(), 100.0);
    }

    #[test]
    fn drag_continues_outside_the_container() {
        let mut state = SliderState::new(50.0, SlideMode::Drag);
        state.apply(SliderAction::Press);
        state.apply(window_move(-500.0));
        assert_eq!(state.position.percent(), 0.0);
        state.apply(window_move(300.0));
        assert_eq!(state.position.percent(), 50.0);
    }

    #[test]
    fn hover_follows_the_pointer_without_press() {
        let mut state = SliderState::new(50.0, SlideMode::Hover);
        for (x, expected) in [(100.0, 0.0), (200.0, 25.0), (400.0, 75.0), (500.0, 100.0)] {
            state.apply(container_move(x));
            assert_eq!(state.position.percent(), expected);
        }
        assert!(!state.apply(window_move(300.0)));
    }

    #[test]
    fn zero_width_container_leaves_position_alone() {
        let mut state = SliderState::new(30.0, SlideMode::Hover);
        let collapsed = Some(ContainerBounds::new(100.0, 0.0, 0.0, 0.0));
        assert!(!state.apply(SliderAction::ContainerMove { client_x: 120.0, bounds: collapsed }));
        assert_eq!(state.position.percent(), 30.0);
        assert!(!state.controller.is_engaged());
    }

    #[test]
    fn autoplay_runs_only_without_interaction() {
        let mut state = SliderState::new(50.0, SlideMode::Drag);
        assert!(state.apply(SliderAction::AutoplayTick));
        assert_eq!(state.position.percent(), 50.5);

        state.apply(SliderAction::Press);
        assert!(!state.apply(SliderAction::AutoplayTick));
        assert_eq!(state.position.percent(), 50.5);

        state.apply(SliderAction::Release);
        assert!(state.apply(SliderAction::AutoplayTick));
        assert_eq!(state.position.percent(), 51.0);
    }

    #[test]
    fn hovering_supersedes_autoplay_in_hover_mode() {
        let mut state = SliderState::new(50.0, SlideMode::Hover);
        state.apply(SliderAction::Enter);
        assert!(!state.apply(SliderAction::AutoplayTick));
        state.apply(SliderAction::Leave);
        assert!(state.apply(SliderAction::AutoplayTick));
    }

    #[test]
    fn pointer_moves_without_enter_still_pause_autoplay() {
        let mut state = SliderState::new(50.0, SlideMode::Hover);
        assert!(state.apply(container_move(200.0)));
        assert_eq!(state.position.percent(), 25.0);
        assert!(state.controller.is_engaged());

        assert!(!state.apply(SliderAction::AutoplayTick));
        assert_eq!(state.position.percent(), 25.0);

        state.apply(SliderAction::Leave);
        assert!(state.apply(SliderAction::AutoplayTick));
        assert_eq!(state.position.percent(), 25.5);
    }

    #[test]
    fn release_after_a_drag_leaves_nothing_to_capture() {
        let mut state = SliderState::new(50.0, SlideMode::Drag);
        state.apply(SliderAction::Press);
        assert!(state.controller.is_tracking());
        state.apply(SliderAction::Release);
        assert!(!state.controller.is_tracking());
        for action in [window_move(480.0), SliderAction::Release] {
            assert!(!state.apply(action));
        }
    }

    #[test]
    fn reducer_keeps_the_same_state_for_no_ops() {
        let state = Rc::new(SliderState::new(50.0, SlideMode::Drag));
        let next = state.clone().reduce(window_move(400.0));
        assert!(Rc::ptr_eq(&state, &next));

        let pressed = state.clone().reduce(SliderAction::Press);
        assert!(!Rc::ptr_eq(&state, &pressed));
        assert!(pressed.controller.is_tracking());
    }
}

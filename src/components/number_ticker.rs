use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::motion::{use_in_view, use_reduced_motion, IN_VIEW_MARGIN};

const FRAME_MS: u32 = 16;

/// Ease-out cubic over `progress` in [0, 1].
pub fn ease_out(progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - progress).powi(3)
}

pub fn ticker_value(target: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = f64::from(elapsed_ms) / f64::from(duration_ms);
    (f64::from(target) * ease_out(progress)).round() as u32
}

#[derive(Properties, PartialEq)]
pub struct NumberTickerProps {
    pub value: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(2000)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts up from zero to `value` once scrolled into view.
#[function_component(NumberTicker)]
pub fn number_ticker(props: &NumberTickerProps) -> Html {
    let node = use_node_ref();
    let reduced_motion = use_reduced_motion();
    let visible = use_in_view(node.clone(), IN_VIEW_MARGIN);
    let elapsed = use_state_eq(|| 0u32);
    let done = *elapsed >= props.duration_ms;

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |(running, duration_ms): &(bool, u32)| {
                let duration_ms = *duration_ms;
                let interval = running.then(|| {
                    let mut counted = 0u32;
                    Interval::new(FRAME_MS, move || {
                        counted = (counted + FRAME_MS).min(duration_ms);
                        elapsed.set(counted);
                    })
                });
                move || drop(interval)
            },
            (visible && !done && !reduced_motion, props.duration_ms),
        );
    }

    let shown = if reduced_motion {
        props.value
    } else {
        ticker_value(props.value, *elapsed, props.duration_ms)
    };

    html! {
        <span ref={node} class={classes!("number-ticker", props.class.clone())}>
            { format!("{}{}", shown, props.suffix) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        assert_eq!(ticker_value(7, 0, 2000), 0);
        assert_eq!(ticker_value(7, 2000, 2000), 7);
        assert_eq!(ticker_value(7, 5000, 2000), 7);
    }

    #[test]
    fn eases_out() {
        assert!(ease_out(0.5) > 0.5);
        assert_eq!(ease_out(-1.0), 0.0);
        assert_eq!(ease_out(2.0), 1.0);
        assert_eq!(ticker_value(100, 1000, 2000), 88);
    }

    #[test]
    fn zero_duration_shows_the_target() {
        assert_eq!(ticker_value(2, 0, 0), 2);
    }

    #[test]
    fn never_decreases() {
        let mut previous = 0;
        for elapsed in (0..=2000).step_by(16) {
            let value = ticker_value(250, elapsed, 2000);
            assert!(value >= previous);
            previous = value;
        }
    }
}

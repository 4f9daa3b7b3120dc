use web_sys::{DomRect, Element, TouchEvent};
use yew::NodeRef;

pub const MIN_PERCENT: f64 = 0.0;
pub const MAX_PERCENT: f64 = 100.0;

/// Rectangle of the compare container, measured fresh for every event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn from_rect(rect: &DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    /// `None` while the node is not mounted.
    pub fn measure(node: &NodeRef) -> Option<Self> {
        node.cast::<Element>()
            .map(|element| Self::from_rect(&element.get_bounding_client_rect()))
    }

    fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.left.is_finite() && self.width > 0.0
    }
}

/// Horizontal split point between the two images, always within [0, 100].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SliderPosition(f64);

impl SliderPosition {
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(MIN_PERCENT, MAX_PERCENT))
    }

    pub fn percent(self) -> f64 {
        self.0
    }
}

impl Default for SliderPosition {
    fn default() -> Self {
        Self(50.0)
    }
}

/// Percentage of the container width at `client_x`, or `None` when the
/// input cannot be mapped (zero-width container, non-finite coordinate).
pub fn percent_at(client_x: f64, bounds: &ContainerBounds) -> Option<f64> {
    if !client_x.is_finite() || !bounds.is_measurable() {
        return None;
    }
    let percent = (client_x - bounds.left) / bounds.width * 100.0;
    Some(percent.clamp(MIN_PERCENT, MAX_PERCENT))
}

/// Moves `position` to `client_x`. Returns whether the position changed.
pub fn track(position: &mut SliderPosition, client_x: f64, bounds: Option<ContainerBounds>) -> bool {
    let Some(percent) = bounds.and_then(|bounds| percent_at(client_x, &bounds)) else {
        return false;
    };
    let next = SliderPosition::new(percent);
    if next == *position {
        return false;
    }
    *position = next;
    true
}

/// Only the first touch point drives the slider.
pub fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| f64::from(touch.client_x()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ContainerBounds {
        ContainerBounds::new(100.0, 0.0, 400.0, 300.0)
    }

    #[test]
    fn maps_edges_and_centre() {
        assert_eq!(percent_at(100.0, &bounds()), Some(0.0));
        assert_eq!(percent_at(500.0, &bounds()), Some(100.0));
        assert_eq!(percent_at(300.0, &bounds()), Some(50.0));
    }

    #[test]
    fn clamps_outside_the_container() {
        assert_eq!(percent_at(-250.0, &bounds()), Some(0.0));
        assert_eq!(percent_at(99.0, &bounds()), Some(0.0));
        assert_eq!(percent_at(501.0, &bounds()), Some(100.0));
        assert_eq!(percent_at(4_000.0, &bounds()), Some(100.0));
    }

    #[test]
    fn midpoint_of_any_container_is_fifty() {
        let bounds = ContainerBounds::new(37.5, 12.0, 913.0, 10.0);
        let percent = percent_at(37.5 + 913.0 / 2.0, &bounds).unwrap();
        assert!((percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn zero_width_container_keeps_previous_position() {
        let mut position = SliderPosition::new(42.0);
        let collapsed = ContainerBounds::new(100.0, 0.0, 0.0, 300.0);
        for x in [0.0, 100.0, 250.0, f64::MAX] {
            assert!(!track(&mut position, x, Some(collapsed)));
        }
        assert_eq!(position.percent(), 42.0);
        assert!(!position.percent().is_nan());
    }

    #[test]
    fn missing_measurement_is_a_no_op() {
        let mut position = SliderPosition::default();
        assert!(!track(&mut position, 300.0, None));
        assert_eq!(position.percent(), 50.0);
    }

    #[test]
    fn non_finite_coordinates_are_ignored() {
        let mut position = SliderPosition::new(10.0);
        assert!(!track(&mut position, f64::NAN, Some(bounds())));
        assert!(!track(&mut position, f64::INFINITY, Some(bounds())));
        assert_eq!(position.percent(), 10.0);
    }

    #[test]
    fn track_reports_changes_only() {
        let mut position = SliderPosition::new(50.0);
        assert!(!track(&mut position, 300.0, Some(bounds())));
        assert!(track(&mut position, 200.0, Some(bounds())));
        assert_eq!(position.percent(), 25.0);
    }

    #[test]
    fn position_is_always_clamped() {
        assert_eq!(SliderPosition::new(-5.0).percent(), 0.0);
        assert_eq!(SliderPosition::new(180.0).percent(), 100.0);
        assert_eq!(SliderPosition::new(f64::NAN), SliderPosition::default());
    }
}

use yew::prelude::*;

use super::tracker::{SliderPosition, MAX_PERCENT};

/// Clips the "before" layer from its right edge inward so only the left
/// `position%` remains visible.
pub fn clip_path(position: SliderPosition) -> String {
    format!("inset(0 {}% 0 0)", MAX_PERCENT - position.percent())
}

pub fn before_layer_style(position: SliderPosition) -> String {
    let clip = clip_path(position);
    format!("clip-path: {clip}; -webkit-clip-path: {clip};")
}

pub fn handle_style(position: SliderPosition) -> String {
    format!("left: {}%; transform: translateX(-50%);", position.percent())
}

/// Classes for one of the two images: the base class plus the caller's extras.
pub fn image_classes(extra: &Classes) -> Classes {
    classes!("compare-image", extra.clone())
}

pub struct Layers<'a> {
    pub first_image: &'a str,
    pub first_image_alt: &'a str,
    pub first_image_class: &'a Classes,
    pub second_image: &'a str,
    pub second_image_alt: &'a str,
    pub second_image_class: &'a Classes,
    pub show_handlebar: bool,
}

/// The visual composite for one slider position.
pub fn render(layers: &Layers<'_>, position: SliderPosition) -> Html {
    html! {
        <>
            <div class="compare-layer">
                <img
                    src={layers.second_image.to_string()}
                    alt={layers.second_image_alt.to_string()}
                    draggable="false"
                    class={image_classes(layers.second_image_class)}
                />
            </div>
            <div class="compare-layer compare-before" style={before_layer_style(position)}>
                <img
                    src={layers.first_image.to_string()}
                    alt={layers.first_image_alt.to_string()}
                    draggable="false"
                    class={image_classes(layers.first_image_class)}
                />
            </div>
            {
                if layers.show_handlebar {
                    html! {
                        <div class="compare-divider" style={handle_style(position)}>
                            <div class="compare-handle">
                                <svg class="compare-chevron" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                                </svg>
                                <svg class="compare-chevron" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                                </svg>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="compare-label compare-label-before">{"Before"}</div>
            <div class="compare-label compare-label-after">{"After"}</div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_hides_everything_right_of_the_position() {
        assert_eq!(clip_path(SliderPosition::new(50.0)), "inset(0 50% 0 0)");
        assert_eq!(clip_path(SliderPosition::new(0.0)), "inset(0 100% 0 0)");
        assert_eq!(clip_path(SliderPosition::new(100.0)), "inset(0 0% 0 0)");
        assert_eq!(clip_path(SliderPosition::new(62.5)), "inset(0 37.5% 0 0)");
    }

    #[test]
    fn handle_is_centred_on_the_split() {
        assert_eq!(
            handle_style(SliderPosition::new(25.0)),
            "left: 25%; transform: translateX(-50%);"
        );
    }

    #[test]
    fn before_layer_sets_both_clip_properties() {
        let style = before_layer_style(SliderPosition::new(75.0));
        assert!(style.starts_with("clip-path: inset(0 25% 0 0);"));
        assert!(style.contains("-webkit-clip-path: inset(0 25% 0 0);"));
    }

    #[test]
    fn image_classes_keep_the_base_class() {
        let classes = image_classes(&classes!("grayscale", "rounded"));
        assert!(classes.contains("compare-image"));
        assert!(classes.contains("grayscale"));
        assert!(classes.contains("rounded"));
        assert_eq!(image_classes(&Classes::new()).to_string(), "compare-image");
    }
}

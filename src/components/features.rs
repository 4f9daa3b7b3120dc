use yew::prelude::*;

use crate::components::motion::{use_in_view, IN_VIEW_MARGIN};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Light,
    Dark,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Light => "tone-light",
            Tone::Dark => "tone-dark",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeatureLayout {
    #[default]
    Grid,
    Stacked,
    Alternating,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureItem {
    pub title: AttrValue,
    pub description: AttrValue,
    pub icon: Option<Html>,
    pub image: Option<AttrValue>,
    pub image_alt: Option<AttrValue>,
}

impl FeatureItem {
    pub fn new(title: impl Into<AttrValue>, description: impl Into<AttrValue>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: None,
            image: None,
            image_alt: None,
        }
    }

    pub fn with_image(mut self, src: impl Into<AttrValue>, alt: impl Into<AttrValue>) -> Self {
        self.image = Some(src.into());
        self.image_alt = Some(alt.into());
        self
    }

    pub fn with_icon(mut self, icon: Html) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Alt text falls back to the title.
    pub fn alt(&self) -> AttrValue {
        self.image_alt.clone().unwrap_or_else(|| self.title.clone())
    }
}

/// Delay in seconds before feature `index` reveals in the given layout.
pub fn reveal_delay(layout: FeatureLayout, index: usize) -> f64 {
    let step = match layout {
        FeatureLayout::Grid => 0.1,
        FeatureLayout::Stacked => 0.15,
        FeatureLayout::Alternating => 0.2,
    };
    step * index as f64
}

/// Alternating rows put the image on the right for odd indices.
pub fn image_on_right(index: usize) -> bool {
    index % 2 == 1
}

fn icon_badge(icon: &Option<Html>) -> Html {
    match icon {
        Some(icon) => html! { <div class="feature-icon">{ icon.clone() }</div> },
        None => html! {},
    }
}

fn feature_card(layout: FeatureLayout, index: usize, feature: &FeatureItem, shown: Option<&'static str>) -> Html {
    let style = format!("transition-delay: {}s;", reveal_delay(layout, index));
    match layout {
        FeatureLayout::Grid => {
            let image = match (&feature.image, &feature.icon) {
                (Some(src), None) => html! {
                    <div class="feature-image"><img src={src.clone()} alt={feature.alt()} /></div>
                },
                _ => html! {},
            };
            html! {
                <div key={feature.title.to_string()} class={classes!("feature-card", "feature-reveal", shown)} {style}>
                    { icon_badge(&feature.icon) }
                    { image }
                    <h3>{ feature.title.clone() }</h3>
                    <p>{ feature.description.clone() }</p>
                </div>
            }
        }
        FeatureLayout::Stacked => {
            let side = match (&feature.icon, &feature.image) {
                (Some(_), _) => icon_badge(&feature.icon),
                (None, Some(src)) => html! {
                    <div class="feature-thumb"><img src={src.clone()} alt={feature.alt()} /></div>
                },
                (None, None) => html! {},
            };
            html! {
                <div key={feature.title.to_string()} class={classes!("feature-row", "feature-reveal", shown)} {style}>
                    <div class="feature-side">{ side }</div>
                    <div>
                        <h3>{ feature.title.clone() }</h3>
                        <p>{ feature.description.clone() }</p>
                    </div>
                </div>
            }
        }
        FeatureLayout::Alternating => {
            let flipped = image_on_right(index) && feature.image.is_some();
            let image = match &feature.image {
                Some(src) => html! {
                    <div class="feature-media"><img src={src.clone()} alt={feature.alt()} /></div>
                },
                None => html! {},
            };
            html! {
                <div key={feature.title.to_string()} class={classes!("feature-alt", flipped.then(|| "flipped"), "feature-reveal", shown)} {style}>
                    { image }
                    <div class="feature-alt-text">
                        { icon_badge(&feature.icon) }
                        <h3>{ feature.title.clone() }</h3>
                        <p>{ feature.description.clone() }</p>
                    </div>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureSectionProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    pub features: Vec<FeatureItem>,
    #[prop_or_default]
    pub variant: Tone,
    #[prop_or_default]
    pub layout: FeatureLayout,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub badge: Option<AttrValue>,
}

#[function_component(FeatureSection)]
pub fn feature_section(props: &FeatureSectionProps) -> Html {
    let section = use_node_ref();
    let shown = use_in_view(section.clone(), IN_VIEW_MARGIN * 2.0).then_some("shown");

    let layout_class = match props.layout {
        FeatureLayout::Grid => "features-grid",
        FeatureLayout::Stacked => "features-stacked",
        FeatureLayout::Alternating => "features-alternating",
    };

    html! {
        <section ref={section} class={classes!("features", props.variant.class(), props.class.clone())}>
            <div class="features-inner">
                <div class="features-header">
                    {
                        if let Some(badge) = &props.badge {
                            html! { <div class={classes!("features-badge", "feature-reveal", shown)}>{ badge.clone() }</div> }
                        } else {
                            html! {}
                        }
                    }
                    <h2 class={classes!("feature-reveal", shown)}>{ props.title.clone() }</h2>
                    {
                        if let Some(description) = &props.description {
                            html! { <p class={classes!("features-lead", "feature-reveal", shown)}>{ description.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class={layout_class}>
                    { for props.features.iter().enumerate().map(|(index, feature)| feature_card(props.layout, index, feature, shown)) }
                </div>
            </div>
            <style>
                {r#"
                .features { padding: 6rem 0; }
                .features.tone-light { background: #fafaf9; color: #1E1E1E; }
                .features.tone-dark { background: #1E1E1E; color: #fff; }
                .features-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                .features-header { text-align: center; margin-bottom: 4rem; }
                .features-header h2 { font-size: 2.5rem; font-weight: 700; margin-bottom: 1rem; }
                .features-lead { font-size: 1.125rem; max-width: 42rem; margin: 0 auto; opacity: 0.75; }
                .features-badge { display: inline-block; padding: 0.5rem 1rem; margin-bottom: 1rem; border-radius: 9999px; font-size: 0.875rem; font-weight: 500; }
                .tone-light .features-badge, .tone-light .feature-icon { background: rgba(45, 90, 61, 0.1); color: #2D5A3D; }
                .tone-dark .features-badge, .tone-dark .feature-icon { background: rgba(201, 169, 98, 0.2); color: #C9A962; }
                .feature-reveal { opacity: 0; transform: translateY(30px); transition-property: opacity, transform; transition-duration: 0.5s; }
                .feature-reveal.shown { opacity: 1; transform: none; }
                .features-grid { display: grid; gap: 2rem; grid-template-columns: 1fr; }
                @media (min-width: 768px) { .features-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (min-width: 1024px) { .features-grid { grid-template-columns: repeat(3, 1fr); } }
                .feature-card { padding: 2rem; border-radius: 1rem; }
                .tone-light .feature-card { background: #fff; border: 1px solid rgba(0,0,0,0.08); }
                .tone-light .feature-card:hover { box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1); }
                .tone-dark .feature-card { background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1); }
                .tone-dark .feature-card:hover { background: rgba(255,255,255,0.1); }
                .tone-dark .feature-card:hover h3 { color: #C9A962; }
                .feature-icon { width: 3.5rem; height: 3.5rem; border-radius: 0.75rem; display: flex; align-items: center; justify-content: center; margin-bottom: 1rem; transition: transform 0.2s; }
                .feature-icon:hover { transform: scale(1.1) rotate(5deg); }
                .feature-image { height: 10rem; margin-bottom: 1rem; border-radius: 0.75rem; overflow: hidden; }
                .feature-image img, .feature-thumb img, .feature-media img { width: 100%; height: 100%; object-fit: cover; }
                .feature-card h3, .feature-row h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.5rem; transition: color 0.3s; }
                .feature-card p, .feature-row p, .feature-alt p { opacity: 0.7; }
                .features-stacked { display: flex; flex-direction: column; gap: 2rem; max-width: 56rem; margin: 0 auto; }
                .feature-row { display: flex; align-items: flex-start; gap: 1.5rem; padding: 1.5rem; border-radius: 1rem; }
                .tone-light .feature-row { background: #f5f5f4; }
                .tone-dark .feature-row { background: rgba(255,255,255,0.05); }
                .feature-side { flex-shrink: 0; }
                .feature-thumb { width: 6rem; height: 6rem; border-radius: 0.75rem; overflow: hidden; }
                .features-alternating { display: flex; flex-direction: column; gap: 6rem; }
                .feature-alt { display: grid; gap: 3rem; align-items: center; grid-template-columns: 1fr; }
                @media (min-width: 768px) {
                    .feature-alt { grid-template-columns: 1fr 1fr; }
                    .feature-alt.flipped .feature-media { order: 2; }
                }
                .feature-media { border-radius: 1rem; overflow: hidden; aspect-ratio: 4 / 3; transition: transform 0.4s; }
                .feature-media:hover { transform: scale(1.02); }
                .feature-alt h3 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1rem; }
                .feature-alt p { font-size: 1.125rem; }
                "#}
            </style>
        </section>
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListItem {
    pub text: AttrValue,
    pub icon: Option<Html>,
}

impl From<&'static str> for ListItem {
    fn from(text: &'static str) -> Self {
        Self { text: AttrValue::Static(text), icon: None }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListColumns {
    #[default]
    One,
    Two,
}

#[derive(Properties, PartialEq)]
pub struct FeatureListProps {
    pub features: Vec<ListItem>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub variant: Tone,
    #[prop_or_default]
    pub columns: ListColumns,
}

fn check_icon() -> Html {
    html! {
        <svg class="feature-check" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
        </svg>
    }
}

/// Checked list, one or two columns wide.
#[function_component(FeatureList)]
pub fn feature_list(props: &FeatureListProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), 0.0).then_some("shown");

    html! {
        <ul
            ref={node}
            class={classes!(
                "feature-list",
                props.variant.class(),
                (props.columns == ListColumns::Two).then_some("two-columns"),
                props.class.clone()
            )}
        >
            { for props.features.iter().enumerate().map(|(index, item)| html! {
                <li
                    key={index}
                    class={classes!("feature-list-item", shown)}
                    style={format!("transition-delay: {}s;", index as f64 * 0.05)}
                >
                    <span class="feature-list-icon">{ item.icon.clone().unwrap_or_else(check_icon) }</span>
                    <span>{ item.text.clone() }</span>
                </li>
            }) }
            <style>
                {r#"
                .feature-list { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.75rem; }
                @media (min-width: 768px) {
                    .feature-list.two-columns { display: grid; grid-template-columns: 1fr 1fr; column-gap: 2rem; }
                }
                .feature-list-item { display: flex; align-items: flex-start; gap: 0.75rem; opacity: 0; transform: translateX(-20px); transition: opacity 0.3s, transform 0.3s; }
                .feature-list-item.shown { opacity: 1; transform: none; }
                .feature-list-icon { flex-shrink: 0; margin-top: 0.125rem; }
                .feature-list.tone-light .feature-list-icon { color: #2D5A3D; }
                .feature-list.tone-dark .feature-list-icon { color: #C9A962; }
                .feature-list.tone-dark { color: rgba(255,255,255,0.8); }
                .feature-check { width: 1.25rem; height: 1.25rem; }
                "#}
            </style>
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_steps_depend_on_layout() {
        assert_eq!(reveal_delay(FeatureLayout::Grid, 0), 0.0);
        assert!((reveal_delay(FeatureLayout::Grid, 2) - 0.2).abs() < 1e-9);
        assert!((reveal_delay(FeatureLayout::Stacked, 2) - 0.3).abs() < 1e-9);
        assert!((reveal_delay(FeatureLayout::Alternating, 2) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn odd_rows_flip() {
        assert!(!image_on_right(0));
        assert!(image_on_right(1));
        assert!(!image_on_right(2));
    }

    #[test]
    fn alt_text_defaults_to_the_title() {
        let feature = FeatureItem::new("Koi Ponds", "Living art");
        assert_eq!(&*feature.alt(), "Koi Ponds");
        let feature = feature.with_image("/koi.jpg", "Koi in a stone pond");
        assert_eq!(&*feature.alt(), "Koi in a stone pond");
    }

    #[test]
    fn list_items_come_from_plain_text() {
        let item: ListItem = "Free consultation".into();
        assert_eq!(&*item.text, "Free consultation");
        assert!(item.icon.is_none());
    }
}

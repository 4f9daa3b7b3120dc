use yew::prelude::*;

use crate::components::motion::{use_in_view, IN_VIEW_MARGIN};

const NOISE_SVG: &str = "url(\"data:image/svg+xml,%3Csvg viewBox='0 0 256 256' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E%3C/svg%3E\")";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaVariant {
    #[default]
    Default,
    GradientOrb,
    Noise,
    SplitImage,
    Dark,
}

impl CtaVariant {
    pub fn is_dark(self) -> bool {
        matches!(self, CtaVariant::Dark | CtaVariant::GradientOrb | CtaVariant::Noise)
    }
}

/// Split layout only applies when there is an image to split against.
pub fn uses_split_layout(variant: CtaVariant, image: Option<&str>) -> bool {
    variant == CtaVariant::SplitImage && image.map_or(false, |src| !src.is_empty())
}

/// Staggered reveal for the n-th element of the section.
fn reveal_style(index: usize) -> String {
    format!("transition-delay: {}s;", index as f64 / 10.0)
}

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub primary_action: Option<Html>,
    #[prop_or_default]
    pub secondary_action: Option<Html>,
    #[prop_or_default]
    pub variant: CtaVariant,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub image_alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub badge: Option<AttrValue>,
    /// Anchor id, e.g. `contact`.
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), IN_VIEW_MARGIN * 2.0);
    let shown = in_view.then(|| "shown");

    let badge = match &props.badge {
        Some(badge) => html! { <div class={classes!("cta-badge", "cta-reveal", shown)}>{ badge.clone() }</div> },
        None => html! {},
    };
    let description = match &props.description {
        Some(text) => html! { <p class={classes!("cta-description", "cta-reveal", shown)} style={reveal_style(2)}>{ text.clone() }</p> },
        None => html! {},
    };
    let actions = if props.primary_action.is_some() || props.secondary_action.is_some() {
        html! {
            <div class={classes!("cta-actions", "cta-reveal", shown)} style={reveal_style(3)}>
                { props.primary_action.clone().unwrap_or_default() }
                { props.secondary_action.clone().unwrap_or_default() }
            </div>
        }
    } else {
        html! {}
    };
    let title = html! {
        <h2 class={classes!("cta-title", "cta-reveal", shown)} style={reveal_style(1)}>{ props.title.clone() }</h2>
    };

    let image = props.image.as_deref();
    let body = if uses_split_layout(props.variant, image) {
        html! {
            <div class="cta-split">
                <div class="cta-split-text">
                    <div class="cta-split-inner">
                        { badge }
                        { title }
                        { description }
                        { actions }
                    </div>
                </div>
                <div class={classes!("cta-split-image", shown)}>
                    <img src={props.image.clone().unwrap_or_default()} alt={props.image_alt.clone()} />
                    <div class="cta-split-shade"></div>
                </div>
            </div>
        }
    } else {
        let background = match props.variant {
            CtaVariant::GradientOrb => html! {
                <div class="cta-orbs" aria-hidden="true">
                    <div class="cta-orb gold"></div>
                    <div class="cta-orb teal"></div>
                    <div class="cta-orb forest"></div>
                </div>
            },
            CtaVariant::Noise => html! {
                <div class="cta-noise" style={format!("background-image: {};", NOISE_SVG)} aria-hidden="true"></div>
            },
            _ => html! {},
        };
        html! {
            <>
                { background }
                <div class="cta-content">
                    { badge }
                    { title }
                    { description }
                    { actions }
                </div>
            </>
        }
    };

    let tone = if props.variant.is_dark() { "cta-dark" } else { "cta-brand" };
    html! {
        <section
            ref={section}
            id={props.id.clone()}
            class={classes!("cta", tone, props.class.clone())}
        >
            { body }
            <style>
                {r#"
                .cta { position: relative; overflow: hidden; padding: 6rem 0; color: #fff; }
                .cta-brand { background: #2D5A3D; }
                .cta-dark { background: #1E1E1E; }
                .cta-content { position: relative; z-index: 1; max-width: 56rem; margin: 0 auto; padding: 0 1.5rem; text-align: center; }
                .cta-reveal { opacity: 0; transform: translateY(20px); transition: opacity 0.5s, transform 0.5s; }
                .cta-reveal.shown { opacity: 1; transform: none; }
                .cta-badge { display: inline-block; padding: 0.5rem 1rem; margin-bottom: 1.5rem; border-radius: 9999px; background: rgba(255,255,255,0.1); font-size: 0.875rem; font-weight: 500; }
                .cta-title { font-size: 2.5rem; font-weight: 700; margin-bottom: 1rem; }
                .cta-description { font-size: 1.25rem; max-width: 42rem; margin: 0 auto 2rem; color: rgba(255,255,255,0.75); }
                .cta-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                .cta-split .cta-actions { justify-content: flex-start; }
                .cta-orbs { position: absolute; inset: 0; overflow: hidden; pointer-events: none; }
                .cta-orb { position: absolute; border-radius: 9999px; animation: ctaDrift ease-in-out infinite; }
                .cta-orb.gold { width: 600px; height: 600px; top: -20%; left: 10%; opacity: 0.3; filter: blur(60px); background: radial-gradient(circle, #C9A962 0%, transparent 70%); animation-duration: 15s; }
                .cta-orb.teal { width: 400px; height: 400px; bottom: -10%; right: 10%; opacity: 0.2; filter: blur(50px); background: radial-gradient(circle, #4A90A4 0%, transparent 70%); animation-duration: 12s; animation-direction: reverse; }
                .cta-orb.forest { width: 300px; height: 300px; top: 30%; right: 30%; opacity: 0.15; filter: blur(40px); background: radial-gradient(circle, #2D5A3D 0%, transparent 70%); animation-duration: 10s; }
                @keyframes ctaDrift {
                    0%, 100% { transform: translate(-20%, -10%); }
                    50% { transform: translate(20%, 30%); }
                }
                .cta-noise { position: absolute; inset: 0; opacity: 0.03; pointer-events: none; background-size: 128px 128px; }
                .cta:has(.cta-split) { padding: 0; }
                .cta-split { display: grid; grid-template-columns: 1fr; min-height: 500px; }
                @media (min-width: 768px) { .cta-split { grid-template-columns: 1fr 1fr; } }
                .cta-split-text { display: flex; align-items: center; background: #2D5A3D; padding: 3rem; }
                .cta-split-inner { max-width: 32rem; }
                .cta-split-image { position: relative; min-height: 16rem; opacity: 0; transform: translateX(30px); transition: opacity 0.6s 0.2s, transform 0.6s 0.2s; }
                .cta-split-image.shown { opacity: 1; transform: none; }
                .cta-split-image img { width: 100%; height: 100%; object-fit: cover; }
                .cta-split-shade { position: absolute; inset: 0; background: linear-gradient(to right, rgba(45, 90, 61, 0.2), transparent); }
                @media (prefers-reduced-motion: reduce) {
                    .cta-reveal, .cta-split-image { opacity: 1; transform: none; transition: none; }
                    .cta-orb { animation: none; }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CtaButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl CtaButtonVariant {
    fn class(self) -> &'static str {
        match self {
            CtaButtonVariant::Primary => "cta-button-primary",
            CtaButtonVariant::Secondary => "cta-button-secondary",
            CtaButtonVariant::Outline => "cta-button-outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub variant: CtaButtonVariant,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders an anchor when given `href`, otherwise a button. `onclick` fires
/// for either.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let class = classes!("cta-button", props.variant.class(), props.class.clone());
    let style = html! {
        <style>
            {r#"
            .cta-button {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                padding: 1rem 2rem;
                border-radius: 0.5rem;
                font-weight: 600;
                font-size: 1.125rem;
                text-decoration: none;
                border: none;
                cursor: pointer;
                transition: all 0.3s;
            }
            .cta-button:hover { transform: scale(1.05); }
            .cta-button-primary { background: #fff; color: #2D5A3D; }
            .cta-button-primary:hover { background: rgba(255,255,255,0.9); }
            .cta-button-secondary { background: #C9A962; color: #1E1E1E; }
            .cta-button-secondary:hover { background: rgba(201, 169, 98, 0.9); }
            .cta-button-outline { background: transparent; border: 2px solid rgba(255,255,255,0.3); color: #fff; }
            .cta-button-outline:hover { background: rgba(255,255,255,0.1); }
            "#}
        </style>
    };

    match &props.href {
        Some(href) => html! {
            <>
                <a {class} href={href.clone()} onclick={props.onclick.clone()}>{ for props.children.iter() }</a>
                { style }
            </>
        },
        None => html! {
            <>
                <button {class} onclick={props.onclick.clone()}>{ for props.children.iter() }</button>
                { style }
            </>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_variants() {
        assert!(CtaVariant::Dark.is_dark());
        assert!(CtaVariant::GradientOrb.is_dark());
        assert!(CtaVariant::Noise.is_dark());
        assert!(!CtaVariant::Default.is_dark());
        assert!(!CtaVariant::SplitImage.is_dark());
    }

    #[test]
    fn split_layout_requires_an_image() {
        assert!(uses_split_layout(CtaVariant::SplitImage, Some("/dock.jpg")));
        assert!(!uses_split_layout(CtaVariant::SplitImage, None));
        assert!(!uses_split_layout(CtaVariant::SplitImage, Some("")));
        assert!(!uses_split_layout(CtaVariant::Default, Some("/dock.jpg")));
    }

    #[test]
    fn reveal_is_staggered() {
        assert_eq!(reveal_style(0), "transition-delay: 0s;");
        assert_eq!(reveal_style(3), "transition-delay: 0.3s;");
    }
}

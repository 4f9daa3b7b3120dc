use std::rc::Rc;

use log::{debug, warn};
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::listeners::on_window_typed;

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub caption: Option<AttrValue>,
    pub title: Option<AttrValue>,
    pub description: Option<AttrValue>,
}

impl GalleryImage {
    pub fn new(src: impl Into<AttrValue>, alt: impl Into<AttrValue>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            caption: None,
            title: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<AttrValue>, description: impl Into<AttrValue>) -> Self {
        self.title = Some(title.into());
        self.description = Some(description.into());
        self
    }

    pub fn with_caption(mut self, caption: impl Into<AttrValue>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

impl From<&'static str> for GalleryImage {
    fn from(src: &'static str) -> Self {
        Self::new(AttrValue::Static(src), AttrValue::Static(""))
    }
}

impl From<String> for GalleryImage {
    fn from(src: String) -> Self {
        Self::new(src, AttrValue::Static(""))
    }
}

/// Images without alt text get a positional `Gallery image N`.
pub fn normalise(images: &[GalleryImage]) -> Vec<GalleryImage> {
    images
        .iter()
        .enumerate()
        .map(|(index, image)| {
            if image.alt.is_empty() {
                GalleryImage {
                    alt: format!("Gallery image {}", index + 1).into(),
                    ..image.clone()
                }
            } else {
                image.clone()
            }
        })
        .collect()
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Prev,
    Select(usize),
}

/// Which image the lightbox shows, if it is open at all.
#[derive(Clone, Debug, PartialEq)]
pub struct Lightbox {
    pub len: usize,
    pub open: Option<usize>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn apply(&self, action: LightboxAction) -> Option<usize> {
        let in_range = |index: usize| (index < self.len).then_some(index);
        match action {
            LightboxAction::Open(index) => in_range(index),
            LightboxAction::Close => None,
            LightboxAction::Next => self.open.map(|current| next_index(current, self.len)),
            LightboxAction::Prev => self.open.map(|current| prev_index(current, self.len)),
            LightboxAction::Select(index) => self.open.and(in_range(index)).or(self.open),
        }
    }
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = self.apply(action);
        if open == self.open {
            return self;
        }
        debug!("lightbox showing {:?} of {}", open, self.len);
        Rc::new(Self { len: self.len, open })
    }
}

pub fn key_action(key: &str) -> Option<LightboxAction> {
    match key {
        "Escape" => Some(LightboxAction::Close),
        "ArrowRight" => Some(LightboxAction::Next),
        "ArrowLeft" => Some(LightboxAction::Prev),
        _ => None,
    }
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(body) => {
            if let Err(err) = body.style().set_property("overflow", value) {
                warn!("could not set body overflow: {:?}", err);
            }
        }
        None => warn!("no document body to lock scrolling on"),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryColumns {
    Two,
    Three,
    #[default]
    Four,
}

impl GalleryColumns {
    fn class(self) -> &'static str {
        match self {
            GalleryColumns::Two => "gallery-cols-2",
            GalleryColumns::Three => "gallery-cols-3",
            GalleryColumns::Four => "gallery-cols-4",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageGalleryProps {
    pub images: Vec<GalleryImage>,
    #[prop_or_default]
    pub columns: GalleryColumns,
    #[prop_or_default]
    pub class: Classes,
    /// First image spans two columns and two rows.
    #[prop_or(true)]
    pub featured_first: bool,
}

#[function_component(ImageGallery)]
pub fn image_gallery(props: &ImageGalleryProps) -> Html {
    let images = normalise(&props.images);
    let lightbox = use_reducer_eq({
        let len = images.len();
        move || Lightbox::new(len)
    });
    let open = lightbox.is_open();

    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = if *open {
                    set_body_overflow("hidden");
                    on_window_typed("keydown", move |e: &KeyboardEvent| {
                        if let Some(action) = key_action(&e.key()) {
                            dispatcher.dispatch(action);
                        }
                    })
                } else {
                    None
                };
                let locked = *open;
                move || {
                    drop(listener);
                    if locked {
                        set_body_overflow("");
                    }
                }
            },
            open,
        );
    }

    let dispatch = |action_for: fn() -> LightboxAction| {
        let dispatcher = lightbox.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(action_for());
        })
    };
    let close = dispatch(|| LightboxAction::Close);
    let prev = dispatch(|| LightboxAction::Prev);
    let next = dispatch(|| LightboxAction::Next);
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    let grid = images.iter().enumerate().map(|(index, image)| {
        let dispatcher = lightbox.dispatcher();
        let featured = props.featured_first && index == 0;
        html! {
            <button
                key={index}
                class={classes!("gallery-tile", featured.then(|| "featured"))}
                onclick={Callback::from(move |_: MouseEvent| dispatcher.dispatch(LightboxAction::Open(index)))}
            >
                <img src={image.src.clone()} alt={image.alt.clone()} loading="lazy" />
                <div class="gallery-tile-shade"></div>
            </button>
        }
    });

    let overlay = match lightbox.open.and_then(|index| images.get(index).map(|image| (index, image))) {
        Some((current, image)) => html! {
            <div class="lightbox" onclick={close.clone()}>
                <button class="lightbox-close" aria-label="Close gallery" onclick={close}>{ "✕" }</button>
                <button class="lightbox-nav prev" aria-label="Previous image" onclick={prev}>{ "‹" }</button>
                <button class="lightbox-nav next" aria-label="Next image" onclick={next}>{ "›" }</button>
                <div key={current} class="lightbox-stage" onclick={swallow}>
                    <img src={image.src.clone()} alt={image.alt.clone()} />
                </div>
                {
                    if let Some(caption) = &image.caption {
                        html! { <p class="lightbox-caption">{ caption.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="lightbox-counter">{ format!("{} / {}", current + 1, images.len()) }</div>
                <div class="lightbox-thumbs">
                    { for images.iter().enumerate().map(|(index, thumb)| {
                        let dispatcher = lightbox.dispatcher();
                        html! {
                            <button
                                key={index}
                                class={classes!("lightbox-thumb", (index == current).then(|| "active"))}
                                onclick={Callback::from(move |e: MouseEvent| {
                                    e.stop_propagation();
                                    dispatcher.dispatch(LightboxAction::Select(index));
                                })}
                            >
                                <img src={thumb.src.clone()} alt="" />
                            </button>
                        }
                    }) }
                </div>
            </div>
        },
        None => html! {},
    };

    html! {
        <>
            <div class={classes!("gallery-grid", props.columns.class(), props.class.clone())}>
                { for grid }
            </div>
            { overlay }
            <style>
                {r#"
                .gallery-grid {
                    display: grid;
                    gap: 1rem;
                    grid-template-columns: repeat(2, 1fr);
                }
                @media (min-width: 768px) {
                    .gallery-cols-3 { grid-template-columns: repeat(3, 1fr); }
                    .gallery-cols-4 { grid-template-columns: repeat(4, 1fr); }
                }
                .gallery-tile {
                    position: relative;
                    height: 12rem;
                    border: none;
                    padding: 0;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    cursor: pointer;
                    transition: transform 0.2s;
                }
                .gallery-tile:hover { transform: scale(1.02); }
                .gallery-tile.featured {
                    grid-column: span 2;
                    grid-row: span 2;
                    height: 24rem;
                }
                .gallery-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s;
                }
                .gallery-tile:hover img { transform: scale(1.05); }
                .gallery-tile-shade {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0);
                    transition: background 0.3s;
                }
                .gallery-tile:hover .gallery-tile-shade { background: rgba(0, 0, 0, 0.2); }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(0, 0, 0, 0.95);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: lightboxFade 0.3s ease;
                }
                .lightbox-stage {
                    max-width: 72rem;
                    max-height: 85vh;
                    margin: 2rem;
                    animation: lightboxZoom 0.3s ease;
                }
                .lightbox-stage img {
                    max-width: 100%;
                    max-height: 85vh;
                    object-fit: contain;
                }
                .lightbox-close, .lightbox-nav {
                    position: absolute;
                    z-index: 1;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    color: white;
                    font-size: 1.5rem;
                    padding: 0.5rem 0.9rem;
                    cursor: pointer;
                }
                .lightbox-close:hover, .lightbox-nav:hover { background: rgba(255, 255, 255, 0.2); }
                .lightbox-close { top: 1.5rem; right: 1.5rem; }
                .lightbox-nav.prev { left: 2rem; }
                .lightbox-nav.next { right: 2rem; }
                .lightbox-caption {
                    position: absolute;
                    bottom: 2rem;
                    left: 0;
                    right: 0;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.8);
                }
                .lightbox-counter {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.875rem;
                }
                .lightbox-thumbs {
                    position: absolute;
                    bottom: 5rem;
                    left: 0;
                    right: 0;
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    overflow-x: auto;
                    padding: 0 1rem;
                }
                .lightbox-thumb {
                    width: 4rem;
                    height: 3rem;
                    padding: 0;
                    border: none;
                    border-radius: 0.25rem;
                    overflow: hidden;
                    flex-shrink: 0;
                    opacity: 0.5;
                    cursor: pointer;
                }
                .lightbox-thumb:hover { opacity: 0.75; }
                .lightbox-thumb.active { opacity: 1; outline: 2px solid white; }
                .lightbox-thumb img { width: 100%; height: 100%; object-fit: cover; }
                @keyframes lightboxFade { from { opacity: 0; } to { opacity: 1; } }
                @keyframes lightboxZoom { from { opacity: 0; transform: scale(0.95); } to { opacity: 1; transform: scale(1); } }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: Lightbox, action: LightboxAction) -> Lightbox {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn navigation_wraps_both_ways() {
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(next_index(1, 4), 2);
        assert_eq!(prev_index(2, 4), 1);
    }

    #[test]
    fn empty_galleries_stay_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn plain_sources_get_positional_alts() {
        let images = normalise(&["/a.jpg".into(), GalleryImage::new("/b.jpg", "Dock at dusk"), "/c.jpg".into()]);
        assert_eq!(&*images[0].alt, "Gallery image 1");
        assert_eq!(&*images[1].alt, "Dock at dusk");
        assert_eq!(&*images[2].alt, "Gallery image 3");
    }

    #[test]
    fn lightbox_opens_navigates_and_closes() {
        let state = reduce(Lightbox::new(3), LightboxAction::Open(2));
        assert_eq!(state.open, Some(2));
        let state = reduce(state, LightboxAction::Next);
        assert_eq!(state.open, Some(0));
        let state = reduce(state, LightboxAction::Prev);
        assert_eq!(state.open, Some(2));
        let state = reduce(state, LightboxAction::Select(1));
        assert_eq!(state.open, Some(1));
        let state = reduce(state, LightboxAction::Close);
        assert!(!state.is_open());
    }

    #[test]
    fn navigation_is_ignored_while_closed() {
        let state = reduce(Lightbox::new(3), LightboxAction::Next);
        assert_eq!(state.open, None);
        let state = reduce(state, LightboxAction::Select(1));
        assert_eq!(state.open, None);
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let state = reduce(Lightbox::new(3), LightboxAction::Open(7));
        assert_eq!(state.open, None);
        let state = reduce(reduce(state, LightboxAction::Open(1)), LightboxAction::Select(9));
        assert_eq!(state.open, Some(1));
    }

    #[test]
    fn keys_map_to_actions() {
        assert!(matches!(key_action("Escape"), Some(LightboxAction::Close)));
        assert!(matches!(key_action("ArrowRight"), Some(LightboxAction::Next)));
        assert!(matches!(key_action("ArrowLeft"), Some(LightboxAction::Prev)));
        assert!(key_action("Enter").is_none());
    }
}

use yew::prelude::*;

use crate::components::gallery::GalleryImage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BentoSize {
    /// 1x1
    #[default]
    Default,
    /// 2x1
    Wide,
    /// 1x2
    Tall,
    /// 2x2
    Large,
}

impl BentoSize {
    pub fn class(self) -> Option<&'static str> {
        match self {
            BentoSize::Default => None,
            BentoSize::Wide => Some("bento-wide"),
            BentoSize::Tall => Some("bento-tall"),
            BentoSize::Large => Some("bento-large"),
        }
    }
}

/// Size of the tile at `index` in an auto-arranged gallery: the first tile is
/// featured, then a six-step pattern gives one wide and one tall tile.
pub fn gallery_tile_size(index: usize) -> BentoSize {
    if index == 0 {
        return BentoSize::Large;
    }
    match index % 6 {
        3 => BentoSize::Wide,
        4 => BentoSize::Tall,
        _ => BentoSize::Default,
    }
}

/// Keys that activate a clickable tile.
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

#[derive(Properties, PartialEq)]
pub struct BentoGridProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(BentoGrid)]
pub fn bento_grid(props: &BentoGridProps) -> Html {
    html! {
        <div class={classes!("bento-grid", props.class.clone())}>
            { for props.children.iter() }
            <style>
                {r#"
                .bento-grid {
                    display: grid;
                    gap: 1rem;
                    grid-template-columns: 1fr;
                    grid-auto-rows: minmax(180px, 1fr);
                }
                @media (min-width: 640px) {
                    .bento-grid { grid-template-columns: repeat(2, 1fr); }
                    .bento-wide { grid-column: span 2; }
                    .bento-tall { grid-row: span 2; }
                    .bento-large { grid-column: span 2; grid-row: span 2; }
                }
                @media (min-width: 1024px) {
                    .bento-grid { grid-template-columns: repeat(4, 1fr); }
                }
                .bento-item {
                    position: relative;
                    overflow: hidden;
                    border-radius: 0.75rem;
                    background: #fff;
                    border: 1px solid rgba(0, 0, 0, 0.08);
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s cubic-bezier(0.25, 0.1, 0.25, 1), box-shadow 0.3s;
                }
                .bento-item.clickable { cursor: pointer; }
                .bento-item.hoverable:hover {
                    transform: translateY(-4px) scale(1.02);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }
                .bento-item::after {
                    content: "";
                    position: absolute;
                    inset: 0;
                    border: 2px solid transparent;
                    border-radius: inherit;
                    pointer-events: none;
                    transition: border-color 0.3s;
                }
                .bento-item.hoverable:hover::after { border-color: rgba(201, 169, 98, 0.5); }
                .bento-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s cubic-bezier(0.25, 0.1, 0.25, 1);
                }
                .bento-item:hover .bento-image { transform: scale(1.05); }
                .bento-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0,0,0,0.6), rgba(0,0,0,0.2), transparent);
                    pointer-events: none;
                }
                .bento-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: flex-end;
                    padding: 1rem;
                    z-index: 1;
                    color: white;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BentoGridItemProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub size: BentoSize,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub disable_hover: bool,
}

#[function_component(BentoGridItem)]
pub fn bento_grid_item(props: &BentoGridItemProps) -> Html {
    let onclick = props.onclick.clone().map(|cb| Callback::from(move |_: MouseEvent| cb.emit(())));
    let onkeydown = props.onclick.clone().map(|cb| {
        Callback::from(move |e: KeyboardEvent| {
            if is_activation_key(&e.key()) {
                e.prevent_default();
                cb.emit(());
            }
        })
    });
    let clickable = props.onclick.is_some();

    html! {
        <div
            class={classes!(
                "bento-item",
                props.size.class(),
                clickable.then(|| "clickable"),
                (!props.disable_hover).then(|| "hoverable"),
                props.class.clone()
            )}
            role={clickable.then(|| "button")}
            tabindex={clickable.then(|| "0")}
            {onclick}
            {onkeydown}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BentoGridImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub size: BentoSize,
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,
    #[prop_or_default]
    pub overlay: Option<Html>,
    #[prop_or(true)]
    pub show_gradient: bool,
}

#[function_component(BentoGridImage)]
pub fn bento_grid_image(props: &BentoGridImageProps) -> Html {
    html! {
        <BentoGridItem size={props.size} onclick={props.onclick.clone()} class={props.class.clone()}>
            <img class="bento-image" src={props.src.clone()} alt={props.alt.clone()} loading="lazy" />
            {
                if props.show_gradient {
                    html! { <div class="bento-gradient"></div> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(overlay) = &props.overlay {
                    html! { <div class="bento-overlay">{ overlay.clone() }</div> }
                } else {
                    html! {}
                }
            }
        </BentoGridItem>
    }
}

#[derive(Properties, PartialEq)]
pub struct BentoGalleryProps {
    pub images: Vec<GalleryImage>,
    #[prop_or_default]
    pub on_image_click: Option<Callback<usize>>,
    #[prop_or_default]
    pub class: Classes,
}

/// Auto-arranged image tiles.
#[function_component(BentoGallery)]
pub fn bento_gallery(props: &BentoGalleryProps) -> Html {
    html! {
        <BentoGrid class={props.class.clone()}>
            { for props.images.iter().enumerate().map(|(index, image)| {
                let onclick = props.on_image_click.clone().map(|cb| Callback::from(move |_: ()| cb.emit(index)));
                let overlay = (image.title.is_some() || image.description.is_some()).then(|| html! {
                    <div>
                        {
                            if let Some(title) = &image.title {
                                html! { <h3 class="bento-title">{ title.clone() }</h3> }
                            } else {
                                html! {}
                            }
                        }
                        {
                            if let Some(description) = &image.description {
                                html! { <p class="bento-description">{ description.clone() }</p> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                });
                html! {
                    <BentoGridImage
                        key={format!("{}-{}", image.src, index)}
                        src={image.src.clone()}
                        alt={image.alt.clone()}
                        size={gallery_tile_size(index)}
                        {onclick}
                        {overlay}
                    />
                }
            }) }
        </BentoGrid>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tile_is_featured() {
        assert_eq!(gallery_tile_size(0), BentoSize::Large);
    }

    #[test]
    fn pattern_repeats_every_six_tiles() {
        let sizes: Vec<BentoSize> = (1..=12).map(gallery_tile_size).collect();
        use BentoSize::*;
        assert_eq!(
            sizes,
            vec![Default, Default, Wide, Tall, Default, Default, Default, Default, Wide, Tall, Default, Default]
        );
    }

    #[test]
    fn index_six_is_not_featured_again() {
        assert_eq!(gallery_tile_size(6), BentoSize::Default);
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
    }

    #[test]
    fn size_classes() {
        assert_eq!(BentoSize::Default.class(), None);
        assert_eq!(BentoSize::Large.class(), Some("bento-large"));
    }
}

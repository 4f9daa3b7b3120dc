use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

/// Iframes expose no reliable load event, so the poster is lifted after this.
const YOUTUBE_POSTER_MS: u32 = 1_000;
/// `HAVE_CURRENT_DATA`
const READY_WITH_DATA: u16 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroSource {
    SelfHosted(String),
    YouTube(String),
}

/// A self-hosted file wins over a YouTube id.
pub fn hero_source(video_url: Option<&str>, youtube_id: Option<&str>) -> Option<HeroSource> {
    match (video_url, youtube_id) {
        (Some(url), _) if !url.is_empty() => Some(HeroSource::SelfHosted(url.to_string())),
        (_, Some(id)) if !id.is_empty() => Some(HeroSource::YouTube(id.to_string())),
        _ => None,
    }
}

/// Muted looping background embed. `playlist` must repeat the id for `loop` to
/// take effect.
pub fn youtube_embed_url(id: &str, origin: &str) -> String {
    format!(
        "https://www.youtube-nocookie.com/embed/{id}?autoplay=1&mute=1&loop=1&playlist={id}\
         &controls=0&showinfo=0&rel=0&modestbranding=1&playsinline=1&enablejsapi=1&origin={}",
        urlencoding::encode(origin)
    )
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct VideoHeroProps {
    #[prop_or_default]
    pub youtube_id: Option<AttrValue>,
    #[prop_or_default]
    pub video_url: Option<AttrValue>,
    #[prop_or_default]
    pub poster_image: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// CSS height of the section.
    #[prop_or(AttrValue::Static("100vh"))]
    pub height: AttrValue,
}

#[function_component(VideoHero)]
pub fn video_hero(props: &VideoHeroProps) -> Html {
    let video = use_node_ref();
    let loaded = use_state_eq(|| false);
    let source = hero_source(
        props.video_url.as_deref(),
        props.youtube_id.as_deref(),
    );

    {
        let video = video.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |source: &Option<HeroSource>| {
                let timeout = match source {
                    Some(HeroSource::SelfHosted(_)) => {
                        // Cached files can be ready before the listener is attached.
                        if let Some(element) = video.cast::<HtmlVideoElement>() {
                            if element.ready_state() >= READY_WITH_DATA {
                                loaded.set(true);
                            }
                        }
                        None
                    }
                    Some(HeroSource::YouTube(_)) => Some(Timeout::new(YOUTUBE_POSTER_MS, move || loaded.set(true))),
                    None => None,
                };
                move || drop(timeout)
            },
            source.clone(),
        );
    }

    let onloadeddata = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| {
            debug!("hero video has data");
            loaded.set(true);
        })
    };

    let media = match &source {
        Some(HeroSource::SelfHosted(url)) => html! {
            <video
                ref={video}
                class="hero-media"
                autoplay=true
                loop=true
                muted=true
                playsinline=true
                preload="auto"
                poster={props.poster_image.clone()}
                {onloadeddata}
            >
                <source src={url.clone()} type="video/mp4" />
            </video>
        },
        Some(HeroSource::YouTube(id)) => html! {
            <div class="hero-media hero-youtube">
                <iframe
                    src={youtube_embed_url(id, &page_origin())}
                    allow="autoplay; encrypted-media"
                    allowfullscreen=true
                    title="Background video"
                ></iframe>
            </div>
        },
        None => html! {},
    };

    let poster = match (&props.poster_image, *loaded) {
        (Some(poster), false) => html! {
            <div class="hero-poster"><img src={poster.clone()} alt="" /></div>
        },
        _ => html! {},
    };

    html! {
        <section class={classes!("video-hero", props.class.clone())} style={format!("height: {};", props.height)}>
            <div class="hero-background">
                { media }
                { poster }
                <div class="hero-shade"></div>
            </div>
            <div class="hero-content">{ for props.children.iter() }</div>
            <div class="hero-scroll" aria-hidden="true">
                <div class="hero-scroll-frame"><div class="hero-scroll-dot"></div></div>
            </div>
            <style>
                {r#"
                .video-hero {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-background { position: absolute; inset: 0; z-index: 0; }
                .hero-media { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                .hero-youtube { overflow: hidden; }
                .hero-youtube iframe {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 300%;
                    height: 300%;
                    min-width: 100vw;
                    min-height: 100vh;
                    transform: translate(-50%, -50%);
                    pointer-events: none;
                    border: 0;
                }
                .hero-poster { position: absolute; inset: 0; transition: opacity 0.5s; }
                .hero-poster img { width: 100%; height: 100%; object-fit: cover; }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0,0,0,0.4), rgba(0,0,0,0.2), rgba(0,0,0,0.7));
                }
                .hero-content { position: relative; z-index: 1; width: 100%; }
                .hero-scroll {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 1;
                    animation: heroScrollIn 0.5s ease 1s both;
                }
                .hero-scroll-frame {
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid rgba(255,255,255,0.5);
                    border-radius: 9999px;
                    display: flex;
                    justify-content: center;
                }
                .hero-scroll-dot {
                    width: 0.25rem;
                    height: 0.75rem;
                    margin-top: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255,255,255,0.7);
                    animation: heroScrollBob 1.5s ease-in-out infinite;
                }
                @keyframes heroScrollIn { from { opacity: 0; transform: translate(-50%, 10px); } to { opacity: 1; transform: translate(-50%, 0); } }
                @keyframes heroScrollBob { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(8px); } }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_hosted_video_takes_priority() {
        assert_eq!(
            hero_source(Some("/videos/homepage-hero.mp4"), Some("pluqPh8QSr0")),
            Some(HeroSource::SelfHosted("/videos/homepage-hero.mp4".into()))
        );
        assert_eq!(
            hero_source(None, Some("pluqPh8QSr0")),
            Some(HeroSource::YouTube("pluqPh8QSr0".into()))
        );
        assert_eq!(hero_source(Some(""), None), None);
        assert_eq!(hero_source(None, None), None);
    }

    #[test]
    fn embed_loops_muted_and_encodes_the_origin() {
        let url = youtube_embed_url("pluqPh8QSr0", "https://prittylandscapes.ca");
        assert!(url.starts_with("https://www.youtube-nocookie.com/embed/pluqPh8QSr0?"));
        assert!(url.contains("autoplay=1&mute=1&loop=1&playlist=pluqPh8QSr0"));
        assert!(url.contains("&controls=0"));
        assert!(url.ends_with("&origin=https%3A%2F%2Fprittylandscapes.ca"));
    }

    #[test]
    fn empty_origin_is_allowed() {
        assert!(youtube_embed_url("abc", "").ends_with("&origin="));
    }
}

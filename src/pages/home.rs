use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::bento_grid::{BentoGrid, BentoGridImage, BentoSize};
use crate::components::compare::{Compare, SlideMode};
use crate::components::marquee::Marquee;
use crate::components::motion::BlurFade;
use crate::components::number_ticker::NumberTicker;
use crate::components::testimonials::{AnimatedTestimonials, TestimonialVariant};
use crate::components::video_hero::VideoHero;
use crate::config::{self, OFFICES};
use crate::content;
use crate::layout::{scroll_to_anchor, use_scroll_to_top, SiteLayout};
use crate::Route;

struct Pillar {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const PILLARS: [Pillar; 3] = [
    Pillar {
        icon: "≈",
        title: "Water-Inspired Design",
        description: "Every project flows from our connection to water: shorelines, ponds, streams.",
    },
    Pillar {
        icon: "❦",
        title: "Sustainable Practices",
        description: "Two-time Green Stamp Award winners. Native plants, best water management.",
    },
    Pillar {
        icon: "✦",
        title: "Uncompromising Craft",
        description: "Every boulder placed with intention. Every plant selected with purpose.",
    },
];

struct ServiceTile {
    image: &'static str,
    title: &'static str,
    blurb: &'static str,
    badge: Option<&'static str>,
    size: BentoSize,
    route: Route,
}

const SERVICES: [ServiceTile; 5] = [
    ServiceTile {
        image: "shorelines/on-the-rocks.jpeg",
        title: "Shoreline Protection",
        blurb: "Ontario's only award-winning shoreline contractor. Armour stone revetments, breakwalls, and coastal engineering.",
        badge: Some("Most Awarded Service"),
        size: BentoSize::Large,
        route: Route::ShorelineProtection,
    },
    ServiceTile {
        image: "homepage/backyard-pond-designer.jpg",
        title: "Water Features",
        blurb: "Ponds, waterfalls & streams",
        badge: None,
        size: BentoSize::Default,
        route: Route::WaterFeatures,
    },
    ServiceTile {
        image: "shorelines/coastal-paradise.jpeg",
        title: "Outdoor Living",
        blurb: "Patios, terraces & fire features",
        badge: None,
        size: BentoSize::Default,
        route: Route::ThunderBeach,
    },
    ServiceTile {
        image: "projects/on-the-rocks/gallery/DSC03985-featured.jpeg",
        title: "Landscape Design",
        blurb: "3D renders & master planning",
        badge: None,
        size: BentoSize::Default,
        route: Route::OnTheRocks,
    },
    ServiceTile {
        image: "projects/magical-forest/magical-forest-1.jpg",
        title: "Native Plantings",
        blurb: "Sustainable & beautiful",
        badge: Some("Green Stamp"),
        size: BentoSize::Default,
        route: Route::About,
    },
];

const SERVICE_OPTIONS: [(&str, &str); 4] = [
    ("shoreline", "Shoreline Protection"),
    ("landscape", "Landscape Design"),
    ("water-features", "Water Features"),
    ("outdoor-living", "Outdoor Living"),
];

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    let navigator = use_navigator();

    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| match &navigator {
            Some(navigator) => navigator.push(&route),
            None => warn!("no navigator for {:?}", route),
        })
    };

    let to_section = |id: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(id);
        })
    };

    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Consultation request submitted");
    });

    let awards = content::awards();

    html! {
        <SiteLayout>
            <VideoHero
                video_url={config::video("homepage-hero.mp4")}
                poster_image={config::asset("projects/on-the-rocks/hero/drone-aerial.jpg")}
            >
                <div class="page-hero">
                    <BlurFade delay={0.3}>
                        <p class="eyebrow">{ "Ontario's Only Award-Winning Shoreline Contractor" }</p>
                    </BlurFade>
                    <BlurFade delay={0.5}>
                        <h1>{ "Luxury Landscapes," }<br /><span class="home-accent">{ "Naturally Refined" }</span></h1>
                    </BlurFade>
                    <BlurFade delay={0.7}>
                        <p class="hero-lead">
                            { "Award-winning design and build for discerning property owners across Georgian Bay, Muskoka, and the GTA." }
                        </p>
                    </BlurFade>
                    <BlurFade delay={0.9}>
                        <div class="button-row">
                            <a href="#contact" class="home-button gold" onclick={to_section("contact")}>{ "Book Your Consultation →" }</a>
                            <a href="#portfolio" class="home-button ghost" onclick={to_section("portfolio")}>{ "View Our Work" }</a>
                        </div>
                    </BlurFade>
                </div>
            </VideoHero>

            <section class="home-awards">
                <Marquee pause_on_hover=true duration={40.0}>
                    { for awards.iter().map(|award| html! {
                        <div class="home-award">
                            <span class="home-award-icon">{ "🏆" }</span>
                            <span class="home-award-year">{ award.year.clone() }</span>
                            <span class="home-award-sep">{ "|" }</span>
                            <span>{ award.project.clone() }</span>
                            <span class="home-award-sep">{ "•" }</span>
                            <span class="home-award-category">{ award.category.clone() }</span>
                        </div>
                    }) }
                </Marquee>
            </section>

            <section class="section">
                <div class="container split">
                    <BlurFade delay={0.1} in_view=true>
                        <div class="home-intro-image">
                            <img
                                src={config::asset("projects/on-the-rocks/gallery/DSC01981-Enhanced-NR.jpg")}
                                alt="Award-winning Georgian Bay landscape"
                            />
                            <div class="home-stats-card">
                                <div class="stat">
                                    <div class="stat-value"><NumberTicker value={7} suffix="+" /></div>
                                    <div class="stat-label">{ "Awards" }</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-value"><NumberTicker value={2} suffix="x" /></div>
                                    <div class="stat-label">{ "Green Stamp" }</div>
                                </div>
                            </div>
                        </div>
                    </BlurFade>
                    <div>
                        <BlurFade delay={0.2} in_view=true>
                            <p class="eyebrow">{ "Why Pritty Landscapes" }</p>
                            <h2 class="section-title">{ "A Distinctively" }<br />{ "Different Approach" }</h2>
                            <p class="section-lead">
                                { "We don't just build landscapes. We craft immersive environments that connect you with nature." }
                            </p>
                        </BlurFade>
                        <div class="home-pillars">
                            { for PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                                <BlurFade key={index} delay={0.3 + index as f64 * 0.1} in_view=true>
                                    <div class="home-pillar">
                                        <div class="home-pillar-icon">{ pillar.icon }</div>
                                        <div>
                                            <h3>{ pillar.title }</h3>
                                            <p>{ pillar.description }</p>
                                        </div>
                                    </div>
                                </BlurFade>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="section forest">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <p class="eyebrow">{ "Our Expertise" }</p>
                        <h2 class="section-title">{ "Award-Winning Services" }</h2>
                        <p class="section-lead">{ "From concept to completion, we deliver landscapes that earn recognition." }</p>
                    </BlurFade>
                    <BentoGrid>
                        { for SERVICES.iter().map(|tile| {
                            let overlay = html! {
                                <div class="home-tile-text">
                                    {
                                        if let Some(badge) = tile.badge {
                                            html! { <span class="home-tile-badge">{ badge }</span> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                    <h3>{ tile.title }</h3>
                                    <p>{ tile.blurb }</p>
                                </div>
                            };
                            html! {
                                <BentoGridImage
                                    key={tile.title}
                                    src={config::asset(tile.image)}
                                    alt={tile.title}
                                    size={tile.size}
                                    onclick={go_to(tile.route.clone())}
                                    overlay={overlay}
                                />
                            }
                        }) }
                    </BentoGrid>
                </div>
            </section>

            <section class="section tinted">
                <div class="container narrow">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <p class="eyebrow">{ "The Transformation" }</p>
                        <h2 class="section-title">{ "See the Pritty Difference" }</h2>
                        <p class="section-lead">{ "Drag the slider to reveal the dramatic transformation" }</p>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <Compare
                            first_image={config::asset("projects/on-the-rocks/construction/before-construction.jpeg")}
                            second_image={config::asset("projects/on-the-rocks/gallery/DSC03985-featured.jpeg")}
                            first_image_alt="Before - Eroding shoreline"
                            second_image_alt="After - Award-winning transformation"
                            class="home-compare"
                            slide_mode={SlideMode::Drag}
                            show_handlebar=true
                        />
                        <p class="home-compare-caption">
                            <strong>{ "\"On The Rocks\"" }</strong>
                            { ": Award of Excellence Winner, $500K-$1M Category" }
                        </p>
                    </BlurFade>
                </div>
            </section>

            <section id="portfolio" class="section">
                <div class="container">
                    <div class="home-portfolio-header">
                        <BlurFade delay={0.1} in_view=true>
                            <p class="eyebrow">{ "Portfolio" }</p>
                            <h2 class="section-title">{ "Featured Projects" }</h2>
                        </BlurFade>
                        <BlurFade delay={0.2} in_view=true>
                            <Link<Route> to={Route::OnTheRocks} classes="home-link">{ "View All Projects →" }</Link<Route>>
                        </BlurFade>
                    </div>
                    <div class="home-projects">
                        <BlurFade delay={0.2} in_view=true class="home-project-hero">
                            <Link<Route> to={Route::OnTheRocks} classes="home-project">
                                <img src={config::asset("shorelines/on-the-rocks.jpeg")} alt="On The Rocks" />
                                <div class="home-project-shade"></div>
                                <div class="home-project-badge">{ "💎 $500K-$1M Winner" }</div>
                                <div class="home-project-text">
                                    <p>{ "Georgian Bay" }</p>
                                    <h3>{ "On The Rocks" }</h3>
                                    <p>{ "A stunning shoreline transformation that earned Landscape Ontario's highest recognition." }</p>
                                </div>
                            </Link<Route>>
                        </BlurFade>
                        <div class="home-project-stack">
                            <BlurFade delay={0.3} in_view=true>
                                <Link<Route> to={Route::ThunderBeach} classes="home-project">
                                    <img src={config::asset("shorelines/coastal-paradise.jpeg")} alt="Thunder Beach" />
                                    <div class="home-project-shade"></div>
                                    <div class="home-project-text">
                                        <p>{ "Georgian Bay" }</p>
                                        <h3>{ "Thunder Beach" }</h3>
                                    </div>
                                </Link<Route>>
                            </BlurFade>
                            <BlurFade delay={0.4} in_view=true>
                                <Link<Route> to={Route::WaterFeatures} classes="home-project">
                                    <img src={config::asset("projects/magical-forest/magical-forest-1.jpg")} alt="The Magical Forest" />
                                    <div class="home-project-shade"></div>
                                    <div class="home-project-badge">{ "Water Features Award" }</div>
                                    <div class="home-project-text">
                                        <p>{ "Water Features" }</p>
                                        <h3>{ "The Magical Forest" }</h3>
                                    </div>
                                </Link<Route>>
                            </BlurFade>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section tinted">
                <div class="container">
                    <AnimatedTestimonials
                        testimonials={content::testimonials()}
                        variant={TestimonialVariant::Carousel}
                        title="What Our Clients Say"
                        description="The trust of our clients is our greatest recognition."
                    />
                </div>
            </section>

            <section id="contact" class="home-contact">
                <div class="home-contact-background">
                    <img
                        src={config::asset("projects/on-the-rocks/gallery/DSC03676-night.jpeg")}
                        alt="Georgian Bay at twilight"
                    />
                    <div class="home-contact-shade"></div>
                </div>
                <div class="container split home-contact-inner">
                    <BlurFade delay={0.1} in_view=true>
                        <p class="eyebrow">{ "Start Your Journey" }</p>
                        <h2 class="section-title">{ "Your Dream Landscape Starts Here" }</h2>
                        <p class="home-contact-lead">
                            { "Every award-winning project starts with a conversation. Book a consultation with Tyler to discuss your vision, goals, and possibilities." }
                        </p>
                        <div class="home-phones">
                            { for OFFICES.iter().map(|office| html! {
                                <a href={format!("tel:{}", office.tel)} class="home-phone">
                                    <span class="home-phone-icon">{ "☎" }</span>
                                    <span>
                                        <strong>{ office.display }</strong>
                                        <small>{ office.name }</small>
                                    </span>
                                </a>
                            }) }
                        </div>
                        <p class="home-areas">{ "Georgian Bay • Muskoka • Collingwood • GTA" }</p>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <div class="home-form-card">
                            <h3>{ "Book Your Consultation" }</h3>
                            <p>{ "We'll get back to you within 24 hours." }</p>
                            <form {onsubmit}>
                                <div class="home-form-row">
                                    <input type="text" name="first_name" placeholder="First Name" required=true />
                                    <input type="text" name="last_name" placeholder="Last Name" required=true />
                                </div>
                                <input type="email" name="email" placeholder="Email Address" required=true />
                                <input type="tel" name="phone" placeholder="Phone Number" />
                                <select name="service" required=true>
                                    <option value="">{ "Select a service..." }</option>
                                    { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                                        <option value={*value}>{ *label }</option>
                                    }) }
                                </select>
                                <textarea name="message" rows="3" placeholder="Tell us about your project..."></textarea>
                                <button type="submit">{ "Request Consultation" }</button>
                            </form>
                        </div>
                    </BlurFade>
                </div>
            </section>

            <style>
                {r#"
                .home-accent { color: #C9A962; }
                .home-button {
                    display: inline-flex;
                    align-items: center;
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.3s;
                }
                .home-button.gold { background: #C9A962; color: #1E1E1E; }
                .home-button.ghost { border: 2px solid rgba(255,255,255,0.4); color: #fff; }
                .home-button:hover { transform: scale(1.05); }
                .home-awards { background: #1E1E1E; color: #fff; padding: 1.25rem 0; }
                .home-award { display: flex; align-items: center; gap: 0.75rem; padding: 0 2rem; white-space: nowrap; font-size: 0.875rem; }
                .home-award-year, .home-award-icon { color: #C9A962; font-weight: 600; }
                .home-award-sep { opacity: 0.3; }
                .home-award-category { opacity: 0.6; }
                .home-intro-image { position: relative; }
                .home-stats-card {
                    position: absolute;
                    right: -1rem;
                    bottom: -2rem;
                    display: flex;
                    gap: 2rem;
                    padding: 1.5rem 2rem;
                    border-radius: 0.75rem;
                    background: #fff;
                    box-shadow: 0 20px 25px -5px rgba(0,0,0,0.1);
                }
                .home-pillars { display: flex; flex-direction: column; gap: 1.5rem; margin-top: 2.5rem; }
                .home-pillar { display: flex; gap: 1rem; align-items: flex-start; }
                .home-pillar-icon {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    background: rgba(45, 90, 61, 0.1);
                    color: #2D5A3D;
                    font-size: 1.25rem;
                }
                .home-pillar h3 { margin: 0 0 0.25rem; font-size: 1.125rem; }
                .home-pillar p { margin: 0; color: #6b7280; }
                .home-tile-text { position: absolute; left: 0; right: 0; bottom: 0; padding: 1.5rem; color: #fff; }
                .home-tile-text h3 { margin: 0.5rem 0 0.25rem; font-size: 1.5rem; }
                .home-tile-text p { margin: 0; color: rgba(255,255,255,0.8); }
                .home-tile-badge { padding: 0.25rem 0.75rem; border-radius: 9999px; background: rgba(201, 169, 98, 0.9); color: #1E1E1E; font-size: 0.75rem; font-weight: 600; }
                .home-compare { width: 100%; height: 500px; border-radius: 1rem; }
                .home-compare-caption { margin-top: 1.5rem; text-align: center; color: #6b7280; }
                .home-portfolio-header { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: flex-end; gap: 1rem; margin-bottom: 3rem; }
                .home-link { color: #2D5A3D; font-weight: 600; text-decoration: none; }
                .home-projects { display: grid; gap: 1.5rem; }
                @media (min-width: 1024px) { .home-projects { grid-template-columns: 3fr 2fr; } }
                .home-project-stack { display: grid; gap: 1.5rem; }
                .home-project { position: relative; display: block; height: 100%; min-height: 280px; border-radius: 1rem; overflow: hidden; color: #fff; }
                .home-project-hero .home-project { min-height: 584px; }
                .home-project img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
                .home-project:hover img { transform: scale(1.05); }
                .home-project-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.8), transparent 60%); }
                .home-project-badge { position: absolute; top: 1.5rem; left: 1.5rem; padding: 0.5rem 1rem; border-radius: 9999px; background: #C9A962; color: #1E1E1E; font-size: 0.875rem; font-weight: 600; }
                .home-project-text { position: absolute; left: 0; right: 0; bottom: 0; padding: 2rem; }
                .home-project-text h3 { margin: 0.25rem 0; font-size: 1.875rem; }
                .home-project-text p { margin: 0; color: rgba(255,255,255,0.8); }
                .home-contact { position: relative; padding: 6rem 0; color: #fff; }
                .home-contact-background { position: absolute; inset: 0; }
                .home-contact-background img { width: 100%; height: 100%; object-fit: cover; }
                .home-contact-shade { position: absolute; inset: 0; background: rgba(30, 30, 30, 0.85); }
                .home-contact-inner { position: relative; }
                .home-contact-lead { color: rgba(255,255,255,0.8); font-size: 1.125rem; }
                .home-phones { display: flex; flex-direction: column; gap: 1rem; margin: 2rem 0; }
                .home-phone { display: flex; align-items: center; gap: 1rem; color: #fff; text-decoration: none; }
                .home-phone small { display: block; color: rgba(255,255,255,0.6); }
                .home-phone-icon { width: 3rem; height: 3rem; display: flex; align-items: center; justify-content: center; border-radius: 9999px; background: rgba(201, 169, 98, 0.2); color: #C9A962; }
                .home-areas { color: rgba(255,255,255,0.6); }
                .home-form-card { padding: 2rem; border-radius: 1rem; background: #fff; color: #1E1E1E; }
                .home-form-card h3 { margin: 0 0 0.5rem; font-size: 1.5rem; }
                .home-form-card p { margin: 0 0 1.5rem; color: #6b7280; }
                .home-form-card form { display: flex; flex-direction: column; gap: 1rem; }
                .home-form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .home-form-card input, .home-form-card select, .home-form-card textarea {
                    padding: 0.75rem 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .home-form-card button {
                    padding: 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #2D5A3D;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                "#}
            </style>
        </SiteLayout>
    }
}

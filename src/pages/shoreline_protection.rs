use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cta::{CtaButton, CtaButtonVariant, CtaSection, CtaVariant};
use crate::components::features::{FeatureList, ListItem};
use crate::components::hover_card::{CardGrid, HoverCard};
use crate::components::motion::BlurFade;
use crate::components::number_ticker::NumberTicker;
use crate::components::text_effects::{TextGenerateEffect, TextTag, TypewriterEffect};
use crate::components::video_hero::VideoHero;
use crate::config::{self, OFFICES};
use crate::layout::{scroll_to_anchor, use_scroll_to_top, SiteLayout};
use crate::Route;

const SHOWCASE_VIDEO: &str = "https://www.youtube-nocookie.com/embed/0eGl9QUy8pU?rel=0&modestbranding=1";

const THREATS: [(&str, &str); 4] = [
    ("Fluctuating water levels", "Great Lakes erosion rates can reach 17 feet per year"),
    ("High wind and wave action", "Georgian Bay storms don't forgive"),
    ("Boat traffic erosion", "Constant wake impacts weaken your shore"),
    ("Winter ice damage", "Ice heave can destroy unprotected shorelines"),
];

const SERVICES: [(&str, &str, &str); 3] = [
    (
        "✎",
        "Design & Planning",
        "Site assessment, shoreline design, and coastal engineering coordination. We handle permits and regulations.",
    ),
    (
        "⛏",
        "Construction",
        "Breakwalls, rock groynes, armour stone revetments, and water access points. Built to withstand Georgian Bay.",
    ),
    (
        "↻",
        "Restoration",
        "Repair of existing structures and remediation of sensitive coastal environments.",
    ),
];

const ARMOUR_LAYERS: [&str; 3] = [
    "Toe stones (4-16 tons) anchor the foundation",
    "Armour layer absorbs and dissipates wave energy",
    "Premium Ontario granite sourced from our own quarry",
];

struct ShorelineProject {
    name: &'static str,
    category: &'static str,
    image: &'static str,
    route: Option<Route>,
}

const PROJECTS: [ShorelineProject; 4] = [
    ShorelineProject {
        name: "On The Rocks",
        category: "$500K-$1M Award Winner",
        image: "shorelines/on-the-rocks.jpeg",
        route: Some(Route::OnTheRocks),
    },
    ShorelineProject {
        name: "Thunder Beach",
        category: "Georgian Bay Transformation",
        image: "shorelines/coastal-paradise.jpeg",
        route: Some(Route::ThunderBeach),
    },
    ShorelineProject {
        name: "Sunset Bay",
        category: "Green Stamp Award",
        image: "shorelines/sunset-bay.jpeg",
        route: None,
    },
    ShorelineProject {
        name: "Granite Shores",
        category: "$100K-$250K",
        image: "shorelines/granite-shores.jpg",
        route: None,
    },
];

fn project_tile(project: &ShorelineProject) -> Html {
    let body = html! {
        <>
            <img src={config::asset(project.image)} alt={project.name} />
            <div class="shore-project-shade"></div>
            <div class="shore-project-text">
                <h3>{ project.name }</h3>
                <p>{ project.category }</p>
            </div>
        </>
    };
    match &project.route {
        Some(route) => html! {
            <Link<Route> to={route.clone()} classes="shore-project">{ body }</Link<Route>>
        },
        None => html! { <div class="shore-project">{ body }</div> },
    }
}

#[function_component(ShorelineProtection)]
pub fn shoreline_protection() -> Html {
    use_scroll_to_top();

    let protect = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor("contact");
    });
    let armour: Vec<ListItem> = ARMOUR_LAYERS.iter().copied().map(ListItem::from).collect();
    let office = &OFFICES[0];

    html! {
        <SiteLayout>
            <VideoHero
                video_url={config::video("island-retreat.mp4")}
                poster_image={config::asset("shorelines/on-the-rocks.jpeg")}
                height="80vh"
            >
                <div class="page-hero">
                    <p class="eyebrow">
                        <TypewriterEffect text="Ontario's Only Award-Winning Shoreline Contractor" tag={TextTag::Span} speed={40} delay={0.3} animate_on_view=false />
                    </p>
                    <TextGenerateEffect
                        words="Shoreline Protection That Makes a Statement"
                        tag={TextTag::H1}
                        stagger_delay={0.06}
                        duration={0.4}
                        initial_delay={0.5}
                        animate_on_view=false
                    />
                    <BlurFade delay={0.7}>
                        <p class="hero-lead">
                            { "Engineering meets artistry. Protect your waterfront investment with solutions that don't just work. They inspire." }
                        </p>
                    </BlurFade>
                    <BlurFade delay={0.9}>
                        <div class="button-row">
                            <CtaButton href="#contact" variant={CtaButtonVariant::Secondary} onclick={protect}>
                                { "Protect Your Waterfront" }
                            </CtaButton>
                        </div>
                    </BlurFade>
                </div>
            </VideoHero>

            <section class="section">
                <div class="container split">
                    <BlurFade delay={0.1} in_view=true>
                        <h2 class="section-title">{ "Your Shoreline Is Under Constant Assault" }</h2>
                        <ul class="shore-threats">
                            { for THREATS.iter().map(|(threat, detail)| html! {
                                <li>
                                    <span class="shore-threat-icon">{ "⚠" }</span>
                                    <span><strong>{ *threat }</strong>{ ": " }{ *detail }</span>
                                </li>
                            }) }
                        </ul>
                        <p class="section-lead">
                            { "That waterfront view you paid premium for? It's at risk. Waiting isn't a strategy. It's a gamble with your investment." }
                        </p>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <img src={config::asset("projects/on-the-rocks/construction/before-construction1.jpeg")} alt="Shoreline erosion" />
                    </BlurFade>
                </div>
            </section>

            <section class="section tinted">
                <div class="container">
                    <div class="section-header centered">
                        <BlurFade delay={0.1} in_view=true>
                            <h2 class="section-title">{ "We Approach Shoreline Protection as Landscape Architecture" }</h2>
                        </BlurFade>
                        <BlurFade delay={0.2} in_view=true>
                            <p class="section-lead">
                                { "Our award-winning armour stone revetments don't just protect, they transform. Premium Ontario granite, placed with intention, designed to last generations." }
                            </p>
                        </BlurFade>
                    </div>
                    <CardGrid>
                        { for SERVICES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                            <BlurFade key={index} delay={0.2 + index as f64 * 0.1} in_view=true>
                                <HoverCard
                                    title={*title}
                                    description={*description}
                                    icon={html! { <span class="shore-service-icon">{ *icon }</span> }}
                                />
                            </BlurFade>
                        }) }
                    </CardGrid>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true>
                        <h2 class="section-title">{ "Why Boulders Beat Concrete" }</h2>
                    </BlurFade>
                    <div class="split">
                        <BlurFade delay={0.2} in_view=true>
                            <p class="section-lead">
                                { "Unlike rigid concrete walls that reflect wave energy back into the lake (causing scour erosion at the base), armour stone " }
                                <strong>{ "disperses" }</strong>
                                { " energy naturally. It works WITH the water." }
                            </p>
                            <FeatureList features={armour} class="shore-armour" />
                        </BlurFade>
                        <BlurFade delay={0.3} in_view=true>
                            <img src={config::asset("projects/on-the-rocks/construction/DJI-drone-2.jpg")} alt="Armour stone installation" />
                        </BlurFade>
                    </div>
                </div>
            </section>

            <section class="section charcoal">
                <div class="container narrow">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "See the Transformation" }</h2>
                        <p class="section-lead">
                            { "Watch how we transform Georgian Bay waterfronts with award-winning shoreline protection." }
                        </p>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <div class="shore-video">
                            <iframe
                                src={SHOWCASE_VIDEO}
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                allowfullscreen=true
                                title="Island Retreat - Award-Winning Shoreline Design"
                            ></iframe>
                        </div>
                    </BlurFade>
                    <BlurFade delay={0.3} in_view=true>
                        <p class="shore-video-caption">
                            { "\"Island Retreat\": Award-Winning Shoreline Design, Honey Harbour, Georgian Bay" }
                        </p>
                    </BlurFade>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "Award-Winning Shoreline Projects" }</h2>
                    </BlurFade>
                    <div class="shore-projects">
                        { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                            <BlurFade key={index} delay={0.1 + index as f64 * 0.1} in_view=true>
                                { project_tile(project) }
                            </BlurFade>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section forest centered">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true>
                        <h3 class="shore-authority">{ "Ontario's ONLY Award-Winning Shoreline Contractor" }</h3>
                    </BlurFade>
                    <div class="stat-row">
                        <BlurFade delay={0.2} in_view=true class="stat">
                            <div class="stat-value"><NumberTicker value={7} suffix="+" /></div>
                            <div class="stat-label">{ "LO Awards of Excellence" }</div>
                        </BlurFade>
                        <BlurFade delay={0.3} in_view=true class="stat">
                            <div class="stat-value"><NumberTicker value={2} suffix="x" /></div>
                            <div class="stat-label">{ "Green Stamp Winner" }</div>
                        </BlurFade>
                        <BlurFade delay={0.4} in_view=true class="stat">
                            <div class="stat-value">{ "$1M+" }</div>
                            <div class="stat-label">{ "Project Capability" }</div>
                        </BlurFade>
                    </div>
                </div>
            </section>

            <CtaSection
                id="contact"
                title="Ready to Protect Your Waterfront?"
                description="Book a consultation to discuss your shoreline, your goals, and your options."
                variant={CtaVariant::Noise}
                primary_action={html! {
                    <CtaButton href="/#contact" variant={CtaButtonVariant::Secondary}>{ "Book Your Consultation" }</CtaButton>
                }}
                secondary_action={html! {
                    <CtaButton href={format!("tel:{}", office.tel)} variant={CtaButtonVariant::Outline}>
                        { format!("Call {}", office.display) }
                    </CtaButton>
                }}
            />

            <style>
                {r#"
                .shore-threats { list-style: none; padding: 0; margin: 0 0 2rem; display: flex; flex-direction: column; gap: 1rem; }
                .shore-threats li { display: flex; gap: 0.75rem; align-items: flex-start; font-size: 1.125rem; }
                .shore-threat-icon { color: #C9A962; flex-shrink: 0; }
                .shore-service-icon { font-size: 1.5rem; color: #2D5A3D; }
                .shore-armour { margin-top: 2rem; }
                .shore-video { position: relative; aspect-ratio: 16 / 9; border-radius: 1rem; overflow: hidden; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.5); }
                .shore-video iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }
                .shore-video-caption { margin-top: 1.5rem; text-align: center; color: rgba(255,255,255,0.6); }
                .shore-projects { display: grid; gap: 1.5rem; }
                @media (min-width: 768px) { .shore-projects { grid-template-columns: repeat(2, 1fr); } }
                .shore-project { position: relative; display: block; height: 400px; border-radius: 1rem; overflow: hidden; color: #fff; }
                .shore-project img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
                .shore-project:hover img { transform: scale(1.05); }
                .shore-project-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.7), transparent 60%); }
                .shore-project-text { position: absolute; left: 0; bottom: 0; padding: 2rem; }
                .shore-project-text h3 { margin: 0 0 0.25rem; font-size: 1.5rem; }
                .shore-project-text p { margin: 0; color: #C9A962; }
                .shore-authority { font-size: 1.5rem; margin: 0 0 3rem; }
                "#}
            </style>
        </SiteLayout>
    }
}

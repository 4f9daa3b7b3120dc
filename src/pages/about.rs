use yew::prelude::*;

use crate::components::cta::{CtaButton, CtaButtonVariant, CtaSection, CtaVariant};
use crate::components::features::{FeatureList, ListItem, Tone};
use crate::components::hover_card::CardHoverEffect;
use crate::components::motion::BlurFade;
use crate::components::text_effects::{GradientText, TextGenerateEffect, TextTag};
use crate::config;
use crate::content;
use crate::layout::{use_scroll_to_top, SiteLayout};

struct Belief {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const BELIEFS: [Belief; 3] = [
    Belief {
        icon: "≈",
        title: "Naturally Refined",
        description: "We collaborate with nature, not impose upon it. Every design starts with the land, the water, and your vision. Native plants, natural stone, water-inspired forms that belong.",
        image: "about/our-mission.jpg",
    },
    Belief {
        icon: "❦",
        title: "Sustainably Built",
        description: "Two-time Green Stamp Award winners. We use native plants, permeable surfaces, and water management practices that give back to the environment. Sustainability isn't marketing. It's how we build.",
        image: "about/our-values.jpg",
    },
    Belief {
        icon: "✦",
        title: "Uncompromising Craft",
        description: "Every project is bespoke. Every stone placed with intention. We don't do templates, we do transformations. From 3D renders to final walkthrough, the details matter.",
        image: "design/granite-shores-design.jpg",
    },
];

const EXPECTATIONS: [&str; 5] = [
    "Tyler's personal involvement from consultation",
    "A design process that listens before it creates",
    "Crews who arrive on time and leave clean",
    "Transparent communication throughout",
    "A landscape worthy of the investment",
];

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    let expectations: Vec<ListItem> = EXPECTATIONS.iter().copied().map(ListItem::from).collect();
    let actions = html! {
        <div class="about-expect">
            <FeatureList features={expectations} variant={Tone::Dark} />
            <CtaButton href="/#contact" variant={CtaButtonVariant::Primary}>
                { "Meet Tyler: Book Your Consultation" }
            </CtaButton>
        </div>
    };

    html! {
        <SiteLayout>
            <section class="about-hero">
                <img class="about-hero-image" src={config::asset("about/header-photo.jpg")} alt="Pritty Landscapes - About Us" />
                <div class="about-hero-shade"></div>
                <div class="page-hero about-hero-text">
                    <TextGenerateEffect
                        words="A Distinctively Different Approach"
                        tag={TextTag::H1}
                        stagger_delay={0.06}
                        duration={0.4}
                        animate_on_view=false
                    />
                    <BlurFade delay={0.4}>
                        <p class="hero-lead">{ "Founded in 2017, we design landscapes inspired by water and built to last." }</p>
                    </BlurFade>
                </div>
            </section>

            <section class="section">
                <div class="container split">
                    <BlurFade delay={0.1} in_view=true>
                        <h2 class="section-title">{ "Founded on a Simple Question" }</h2>
                        <p class="section-lead">
                            { "In 2017, Tyler Pritty noticed something across Georgian Bay's waterfronts: shoreline protection that worked, but never inspired. Contractors who prioritized function over form. Band-aid solutions that protected property but diminished its beauty." }
                        </p>
                        <p class="section-lead">
                            { "He asked a simple question: " }
                            <em>{ "What if engineering and artistry weren't mutually exclusive?" }</em>
                        </p>
                        <p class="section-lead">
                            { "That question became Pritty Landscapes, and the answer has earned 7+ Landscape Ontario Awards of Excellence." }
                        </p>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <img src={config::asset("about/our-vision.jpg")} alt="Tyler Pritty's vision" />
                    </BlurFade>
                </div>
            </section>

            <section class="section tinted">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "What We Believe" }</h2>
                    </BlurFade>
                    <div class="about-beliefs">
                        { for BELIEFS.iter().enumerate().map(|(index, belief)| html! {
                            <BlurFade key={index} delay={0.2 + index as f64 * 0.1} in_view=true>
                                <CardHoverEffect class="about-belief">
                                    <img src={config::asset(belief.image)} alt={belief.title} />
                                    <div class="about-belief-body">
                                        <div class="about-belief-icon">{ belief.icon }</div>
                                        <h3>{ belief.title }</h3>
                                        <p>{ belief.description }</p>
                                    </div>
                                </CardHoverEffect>
                            </BlurFade>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container narrow centered">
                    <BlurFade delay={0.1} in_view=true>
                        <h2 class="section-title"><GradientText text="Recognition" /></h2>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <p class="section-lead">
                            { "Since 2021, our work has earned 7+ Landscape Ontario Awards of Excellence across categories from $100K to $1M. We're Ontario's only award-winning shoreline contractor. Not a title we gave ourselves, but one the industry has recognized." }
                        </p>
                    </BlurFade>
                    <div class="about-awards">
                        { for content::awards().into_iter().enumerate().map(|(index, award)| html! {
                            <BlurFade key={index} delay={0.2 + index as f64 * 0.1} in_view=true>
                                <div class="about-award">
                                    <div class="about-award-year">{ award.year }</div>
                                    <div class="about-award-project">{ award.project }</div>
                                    <div class="about-award-category">{ award.category }</div>
                                </div>
                            </BlurFade>
                        }) }
                    </div>
                </div>
            </section>

            <CtaSection
                title="What You Can Expect"
                variant={CtaVariant::GradientOrb}
                primary_action={actions}
            />

            <style>
                {r#"
                .about-hero { position: relative; height: 70vh; min-height: 500px; display: flex; align-items: center; justify-content: center; overflow: hidden; }
                .about-hero-image { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                .about-hero-shade { position: absolute; inset: 0; background: rgba(0,0,0,0.5); }
                .about-hero-text { position: relative; }
                .about-hero-text h1 { font-size: 3.5rem; }
                .about-beliefs { display: grid; gap: 2rem; }
                @media (min-width: 768px) { .about-beliefs { grid-template-columns: repeat(3, 1fr); } }
                .about-belief { height: 100%; background: #fff; border-radius: 1rem; overflow: hidden; }
                .about-belief img { width: 100%; height: 12rem; object-fit: cover; }
                .about-belief-body { padding: 1.5rem; }
                .about-belief-icon { color: #2D5A3D; font-size: 1.5rem; margin-bottom: 0.75rem; }
                .about-belief h3 { margin: 0 0 0.75rem; font-size: 1.25rem; }
                .about-belief p { margin: 0; color: #6b7280; line-height: 1.6; }
                .about-awards { display: grid; gap: 1rem; margin-top: 3rem; grid-template-columns: repeat(2, 1fr); }
                @media (min-width: 768px) { .about-awards { grid-template-columns: repeat(4, 1fr); } }
                .about-award { padding: 1.5rem; border-radius: 0.75rem; background: #F5F3EE; }
                .about-award-year { color: #C9A962; font-size: 1.5rem; font-weight: 700; }
                .about-award-project { font-weight: 600; margin: 0.5rem 0 0.25rem; }
                .about-award-category { color: #6b7280; font-size: 0.875rem; }
                .about-expect { display: flex; flex-direction: column; align-items: center; gap: 2.5rem; text-align: left; }
                "#}
            </style>
        </SiteLayout>
    }
}

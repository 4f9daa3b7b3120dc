use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::bento_grid::{BentoGallery, BentoGrid, BentoGridItem};
use crate::components::cta::{CtaButton, CtaButtonVariant, CtaSection, CtaVariant};
use crate::components::gallery::{GalleryColumns, GalleryImage, ImageGallery};
use crate::components::hover_card::{CardContent, CardGrid, CardHoverEffect};
use crate::components::motion::BlurFade;
use crate::components::testimonials::{AnimatedTestimonials, TestimonialVariant};
use crate::components::text_effects::{TextGenerateEffect, TextTag};
use crate::components::video_hero::VideoHero;
use crate::config::{self, OFFICES};
use crate::content;
use crate::layout::{use_scroll_to_top, SiteLayout};
use crate::Route;

const WALKTHROUGH_VIDEO: &str = "https://www.youtube-nocookie.com/embed/HYnvFONCZSo?rel=0&modestbranding=1";

const GALLERY: [&str; 6] = [
    "shorelines/coastal-paradise.jpeg",
    "shorelines/granite-shores.jpg",
    "shorelines/endless-views.jpg",
    "projects/on-the-rocks/gallery/DSC03985-featured.jpeg",
    "projects/on-the-rocks/gallery/DSC01981-Enhanced-NR.jpg",
    "projects/on-the-rocks/gallery/DSC03676-night.jpeg",
];

const TRANSFORMATION: [(&str, &str); 6] = [
    ("Armour Stone Revetment", "Premium Ontario granite protecting against erosion while creating natural visual appeal."),
    ("Curved Flagstone Pathways", "Natural stone pathways that follow the land's organic flow down to the water."),
    ("Native Coastal Plantings", "Carefully selected species for year-round colour and resilience in the coastal environment."),
    ("Outdoor Living Terraces", "Multiple entertaining areas oriented to capture sunset views over Georgian Bay."),
    ("Professional Landscape Lighting", "Extending the enjoyment of the space well into the evening hours."),
    ("Water Access Points", "Thoughtfully designed access to the water that integrates with the shoreline protection."),
];

const DETAILS: [(&str, &str); 4] = [
    ("Location", "Thunder Beach, Georgian Bay"),
    ("Scope", "Complete Waterfront Transformation"),
    ("Services", "Shoreline, Landscape, Outdoor Living"),
    ("Materials", "Ontario Granite, Native Plantings"),
];

const RELATED: [(&str, &str, Option<Route>); 3] = [
    ("Shoreline Protection", "Armour stone revetments, breakwalls, and coastal engineering", Some(Route::ShorelineProtection)),
    ("Landscape Design", "3D renders, architectural planning, native plantings", None),
    ("Water Features", "Ponds, waterfalls, streams, and ecosystem design", Some(Route::WaterFeatures)),
];

fn neighbours() -> Vec<GalleryImage> {
    vec![
        GalleryImage::new(config::asset("shorelines/sunset-bay.jpeg"), "Sunset Bay").with_title("Sunset Bay", "Green Stamp Award"),
        GalleryImage::new(config::asset("shorelines/granite-shores.jpg"), "Granite Shores").with_title("Granite Shores", "Award of Excellence 2024"),
        GalleryImage::new(config::asset("shorelines/endless-views.jpg"), "Endless Views").with_title("Endless Views", "Award of Excellence 2024"),
        GalleryImage::new(config::asset("shorelines/on-the-rocks.jpeg"), "On The Rocks").with_title("On The Rocks", "$500K-$1M Winner"),
    ]
}

#[function_component(ThunderBeach)]
pub fn thunder_beach() -> Html {
    use_scroll_to_top();
    let navigator = use_navigator();

    let go_to = |route: &Option<Route>| {
        let route = route.clone()?;
        let navigator = navigator.clone();
        Some(Callback::from(move |_: ()| match &navigator {
            Some(navigator) => navigator.push(&route),
            None => warn!("no navigator for {:?}", route),
        }))
    };
    let on_neighbour = Callback::from(|index: usize| info!("Neighbouring project {} selected", index));

    let gallery: Vec<GalleryImage> = GALLERY.iter().map(|path| GalleryImage::from(config::asset(path))).collect();
    let office = &OFFICES[1];

    html! {
        <SiteLayout>
            <VideoHero
                video_url={config::video("thunder-beach.mp4")}
                poster_image={config::asset("shorelines/coastal-paradise.jpeg")}
            >
                <div class="page-hero">
                    <BlurFade delay={0.3}>
                        <div class="beach-badge">{ "Georgian Bay | Waterfront Transformation" }</div>
                    </BlurFade>
                    <TextGenerateEffect words="Thunder Beach" tag={TextTag::H1} initial_delay={0.5} animate_on_view=false />
                    <BlurFade delay={0.7}>
                        <p class="hero-lead">
                            { "A complete waterfront transformation where shoreline protection meets luxury outdoor living on Georgian Bay." }
                        </p>
                    </BlurFade>
                </div>
            </VideoHero>

            <section class="section">
                <div class="container split beach-story">
                    <BlurFade delay={0.1} in_view=true>
                        <h2 class="section-title">{ "The Vision" }</h2>
                        <p class="section-lead">
                            { "This Thunder Beach property demanded a landscape as dramatic as its Georgian Bay setting: outdoor living spaces that embrace the water, protected shorelines that enhance rather than obstruct, and plantings that thrive in the coastal environment." }
                        </p>
                        <p class="section-lead">
                            { "The owners wanted both protection and beauty. They refused to sacrifice one for the other." }
                        </p>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <h2 class="section-title">{ "The Challenge" }</h2>
                        <p class="section-lead">
                            { "Georgian Bay's fluctuating water levels and relentless wave action had taken their toll on the existing shoreline. The property needed protection that would last generations, but the owners also wanted outdoor living spaces that maximized their stunning water views." }
                        </p>
                        <p class="section-lead">
                            { "We needed to engineer a solution that worked with the natural contours of the land while creating functional, beautiful outdoor spaces." }
                        </p>
                    </BlurFade>
                </div>
            </section>

            <section class="section tinted">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "The Transformation" }</h2>
                        <p class="section-lead">
                            { "Working with the natural contours of the shoreline, we designed a complete waterfront transformation." }
                        </p>
                    </BlurFade>
                    <CardGrid>
                        { for TRANSFORMATION.iter().enumerate().map(|(index, (title, description))| html! {
                            <BlurFade key={index} delay={0.2 + index as f64 * 0.1} in_view=true>
                                <CardHoverEffect>
                                    <CardContent title={*title} description={*description} />
                                </CardHoverEffect>
                            </BlurFade>
                        }) }
                    </CardGrid>
                </div>
            </section>

            <section class="section charcoal">
                <div class="container narrow">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "Watch the Transformation" }</h2>
                        <p class="section-lead">{ "See the full Thunder Beach project come to life" }</p>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <div class="beach-video">
                            <iframe
                                src={WALKTHROUGH_VIDEO}
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                allowfullscreen=true
                                title="Thunder Beach Waterfront Transformation"
                            ></iframe>
                        </div>
                    </BlurFade>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "Project Gallery" }</h2>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <ImageGallery images={gallery} columns={GalleryColumns::Three} featured_first=true />
                    </BlurFade>
                </div>
            </section>

            <section class="section tinted">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "Project Details" }</h2>
                    </BlurFade>
                    <div class="beach-details">
                        { for DETAILS.iter().enumerate().map(|(index, (label, value))| html! {
                            <BlurFade key={index} delay={0.1 + index as f64 * 0.1} in_view=true>
                                <div class="beach-detail-label">{ *label }</div>
                                <div class="beach-detail-value">{ *value }</div>
                            </BlurFade>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedTestimonials
                        testimonials={content::testimonials()}
                        variant={TestimonialVariant::Stacked}
                        auto_rotate={6}
                        title="Neighbours on the Bay"
                    />
                </div>
            </section>

            <section class="section forest">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "Your Thunder Beach Property Deserves This" }</h2>
                        <p class="section-lead">
                            { "Whether you're protecting your shoreline, reimagining your outdoor space, or starting from scratch, we bring the same award-winning approach to every Georgian Bay project." }
                        </p>
                    </BlurFade>
                    <BentoGrid class="beach-related">
                        { for RELATED.iter().map(|(title, blurb, route)| html! {
                            <BentoGridItem key={*title} onclick={go_to(route)} class="beach-related-item">
                                <h3>{ *title }</h3>
                                <p>{ *blurb }</p>
                            </BentoGridItem>
                        }) }
                    </BentoGrid>
                    <div class="beach-neighbours">
                        <BentoGallery images={neighbours()} on_image_click={on_neighbour} />
                    </div>
                </div>
            </section>

            <CtaSection
                id="contact"
                title="Ready to Transform Your Waterfront?"
                description="Every award-winning project starts with a conversation. Let's discuss your vision for your Georgian Bay property."
                variant={CtaVariant::GradientOrb}
                primary_action={html! {
                    <CtaButton href="/#contact" variant={CtaButtonVariant::Secondary}>{ "Book Your Consultation" }</CtaButton>
                }}
                secondary_action={html! {
                    <CtaButton href={format!("tel:{}", office.tel)} variant={CtaButtonVariant::Outline}>
                        { format!("Call Collingwood: {}", office.display) }
                    </CtaButton>
                }}
            />

            <style>
                {r#"
                .beach-badge { display: inline-block; margin-bottom: 1.5rem; padding: 0.5rem 1rem; border-radius: 9999px; background: rgba(201, 169, 98, 0.9); color: #1E1E1E; font-size: 0.875rem; font-weight: 600; }
                .beach-story { align-items: start; }
                .beach-video { position: relative; aspect-ratio: 16 / 9; border-radius: 1rem; overflow: hidden; }
                .beach-video iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }
                .beach-details { display: grid; gap: 2rem; grid-template-columns: repeat(2, 1fr); }
                @media (min-width: 768px) { .beach-details { grid-template-columns: repeat(4, 1fr); } }
                .beach-detail-label { color: #1A535C; font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.1em; margin-bottom: 0.5rem; }
                .beach-detail-value { font-size: 1.125rem; font-weight: 500; }
                .beach-related-item { padding: 2rem; background: rgba(255,255,255,0.08); color: #fff; }
                .beach-related-item h3 { margin: 0 0 0.5rem; font-size: 1.25rem; }
                .beach-related-item p { margin: 0; color: rgba(255,255,255,0.7); }
                .beach-neighbours { margin-top: 3rem; }
                "#}
            </style>
        </SiteLayout>
    }
}

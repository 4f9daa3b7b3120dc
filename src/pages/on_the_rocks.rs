use yew::prelude::*;

use crate::components::compare::{Compare, SlideMode};
use crate::components::cta::{CtaButton, CtaButtonVariant, CtaSection, CtaVariant};
use crate::components::gallery::{GalleryColumns, GalleryImage, ImageGallery};
use crate::components::motion::BlurFade;
use crate::components::sticky_story::{StickyScrollStory, StorySection};
use crate::components::text_effects::{TextGenerateEffect, TextTag};
use crate::config;
use crate::layout::{use_scroll_to_top, SiteLayout};

const GALLERY: [&str; 8] = [
    "projects/on-the-rocks/gallery/DSC03985-featured.jpeg",
    "projects/on-the-rocks/gallery/DSC01981-Enhanced-NR.jpg",
    "projects/on-the-rocks/gallery/DSC01972-Enhanced-NR.jpg",
    "projects/on-the-rocks/gallery/S1000376.jpg",
    "projects/on-the-rocks/gallery/S1000381.jpg",
    "projects/on-the-rocks/gallery/TYLER2020FINALS-37.jpg",
    "projects/on-the-rocks/gallery/DSC03676-night.jpeg",
    "projects/on-the-rocks/gallery/IMG_4417.jpeg",
];

const DETAILS: [(&str, &str); 4] = [
    ("Location", "Georgian Bay, Ontario"),
    ("Category", "$500,000 - $1,000,000"),
    ("Services", "Shoreline Protection, Landscape Integration"),
    ("Recognition", "LO Award of Excellence 2023"),
];

fn story() -> Vec<StorySection> {
    [
        (
            "The Vision",
            "The clients came to us with a challenging Georgian Bay property: beautiful views, but an eroding shoreline that threatened both the landscape and their investment. They didn't want just protection. They wanted a transformation that would make their waterfront the centerpiece of their property.",
            "design/coastal-paradise-design.jpg",
            "Design vision for On The Rocks",
        ),
        (
            "The Challenge",
            "Georgian Bay's fluctuating water levels and powerful wave action demanded serious engineering. But the clients also wanted beauty, a shoreline that enhanced their property rather than looking like an industrial barrier. We needed to deliver both.",
            "projects/on-the-rocks/construction/before-construction1.jpeg",
            "Shoreline before construction",
        ),
        (
            "The Transformation",
            "Premium Ontario granite, some boulders weighing up to 16 tons, placed with artistic intention. Every stone selected for colour, texture, and form. The armour stone revetment disperses wave energy naturally while creating a stunning visual statement.",
            "projects/on-the-rocks/construction/DJI-drone-2.jpg",
            "Construction in progress",
        ),
        (
            "The Result",
            "Today, this Georgian Bay waterfront stands as a testament to what's possible when engineering meets artistry. The project earned Landscape Ontario's Award of Excellence in the $500K-$1M category, their highest recognition for shoreline work.",
            "projects/on-the-rocks/gallery/DSC03985-featured.jpeg",
            "Award-winning finished project",
        ),
    ]
    .into_iter()
    .map(|(title, content, image, alt)| StorySection {
        title: title.into(),
        content: content.into(),
        image: config::asset(image).into(),
        image_alt: Some(alt.into()),
    })
    .collect()
}

#[function_component(OnTheRocks)]
pub fn on_the_rocks() -> Html {
    use_scroll_to_top();

    let gallery: Vec<GalleryImage> = GALLERY
        .iter()
        .enumerate()
        .map(|(index, path)| GalleryImage::new(config::asset(path), format!("On The Rocks, photo {}", index + 1)))
        .collect();

    html! {
        <SiteLayout>
            <section class="rocks-hero">
                <img class="rocks-hero-image" src={config::asset("projects/on-the-rocks/hero/drone-aerial.jpg")} alt="On The Rocks - Georgian Bay" />
                <div class="rocks-hero-shade"></div>
                <div class="page-hero rocks-hero-text">
                    <BlurFade delay={0.1}>
                        <div class="rocks-badge">{ "Award of Excellence | $500K-$1M Category | 2023" }</div>
                    </BlurFade>
                    <TextGenerateEffect words="On The Rocks" tag={TextTag::H1} initial_delay={0.2} animate_on_view=false />
                    <BlurFade delay={0.3}>
                        <p class="hero-lead">
                            { "Georgian Bay, Ontario. A stunning shoreline transformation that earned Landscape Ontario's highest recognition." }
                        </p>
                    </BlurFade>
                </div>
            </section>

            <StickyScrollStory sections={story()} />

            <section class="section tinted">
                <div class="container narrow">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "The Transformation" }</h2>
                        <p class="section-lead">{ "Move across the photo to reveal the dramatic before and after" }</p>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <Compare
                            first_image={config::asset("projects/on-the-rocks/construction/before-construction.jpeg")}
                            second_image={config::asset("projects/on-the-rocks/gallery/DSC03985-featured.jpeg")}
                            first_image_alt="Before - Eroding shoreline"
                            second_image_alt="After - Award-winning transformation"
                            class="rocks-compare"
                            slide_mode={SlideMode::Hover}
                            autoplay=true
                            autoplay_duration={6000}
                        />
                    </BlurFade>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "Project Gallery" }</h2>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <ImageGallery images={gallery} columns={GalleryColumns::Four} />
                    </BlurFade>
                </div>
            </section>

            <section class="section charcoal">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "Project Details" }</h2>
                    </BlurFade>
                    <div class="rocks-details">
                        { for DETAILS.iter().enumerate().map(|(index, (label, value))| html! {
                            <BlurFade key={index} delay={0.1 + index as f64 * 0.1} in_view=true>
                                <div class="rocks-detail-label">{ *label }</div>
                                <div class="rocks-detail-value">{ *value }</div>
                            </BlurFade>
                        }) }
                    </div>
                </div>
            </section>

            <CtaSection
                id="contact"
                title="Ready to Start Your Project?"
                description="Every award-winning project starts with a conversation. Let's discuss your vision."
                variant={CtaVariant::GradientOrb}
                primary_action={html! {
                    <CtaButton href="/#contact" variant={CtaButtonVariant::Secondary}>{ "Book Your Consultation" }</CtaButton>
                }}
            />

            <style>
                {r#"
                .rocks-hero { position: relative; height: 80vh; min-height: 500px; display: flex; align-items: flex-end; overflow: hidden; }
                .rocks-hero-image { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
                .rocks-hero-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.8), rgba(0,0,0,0.2)); }
                .rocks-hero-text { position: relative; width: 100%; padding-bottom: 5rem; }
                .rocks-hero-text h1 { font-size: 4rem; }
                .rocks-badge { display: inline-block; margin-bottom: 1.5rem; padding: 0.5rem 1rem; border-radius: 9999px; background: #C9A962; color: #1E1E1E; font-size: 0.875rem; font-weight: 600; }
                .rocks-compare { width: 100%; height: 500px; border-radius: 1rem; }
                .rocks-details { display: grid; gap: 2rem; grid-template-columns: repeat(2, 1fr); }
                @media (min-width: 768px) { .rocks-details { grid-template-columns: repeat(4, 1fr); } }
                .rocks-detail-label { color: #C9A962; font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.1em; margin-bottom: 0.5rem; }
                .rocks-detail-value { font-size: 1.125rem; font-weight: 500; }
                "#}
            </style>
        </SiteLayout>
    }
}

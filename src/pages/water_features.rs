use yew::prelude::*;

use crate::components::cta::{CtaButton, CtaButtonVariant, CtaSection, CtaVariant};
use crate::components::features::{FeatureItem, FeatureLayout, FeatureSection, Tone};
use crate::components::gallery::{GalleryColumns, GalleryImage, ImageGallery};
use crate::components::motion::BlurFade;
use crate::components::text_effects::{FlipWords, TextGenerateEffect, TextTag};
use crate::components::video_hero::VideoHero;
use crate::config::{self, OFFICES};
use crate::layout::{scroll_to_anchor, use_scroll_to_top, SiteLayout};

const GALLERY: [&str; 4] = [
    "homepage/backyard-pond-designer.jpg",
    "projects/magical-forest/magical-forest-1.jpg",
    "projects/magical-forest/magical-forest-image.jpg",
    "testimonials/modern-pond.jpg",
];

fn services() -> Vec<FeatureItem> {
    vec![
        FeatureItem::new(
            "Ecosystem Ponds",
            "Self-sustaining natural ponds with aquatic plants, fish, and beneficial bacteria. Low maintenance, high reward. A complete ecosystem in your backyard.",
        )
        .with_image(config::asset("homepage/backyard-pond-designer.jpg"), "Ecosystem pond"),
        FeatureItem::new(
            "Koi Ponds",
            "Engineered for fish health with proper filtration, ideal depth zones, and predator protection. Watch your koi thrive for decades.",
        )
        .with_image(config::asset("testimonials/modern-pond.jpg"), "Koi pond"),
        FeatureItem::new(
            "Waterfalls & Streams",
            "From gentle cascades to dramatic boulder drops, moving water transforms any space. The sound alone changes how you experience your property.",
        )
        .with_image(config::asset("projects/magical-forest/magical-forest-1.jpg"), "Waterfall and stream"),
    ]
}

fn benefits() -> Vec<FeatureItem> {
    [
        ("Sound & Serenity", "The sound of moving water masks traffic noise and creates a peaceful atmosphere that reduces stress."),
        ("Wildlife Habitat", "Ponds attract birds, butterflies, dragonflies, and other beneficial wildlife to your property."),
        ("Property Value", "Well-designed water features are proven to increase property value and curb appeal."),
        ("Year-Round Interest", "From spring blooms to winter ice formations, water features provide visual interest in every season."),
    ]
    .into_iter()
    .map(|(title, description)| FeatureItem::new(title, description).with_icon(html! { <span class="water-check">{ "✓" }</span> }))
    .collect()
}

#[function_component(WaterFeatures)]
pub fn water_features() -> Html {
    use_scroll_to_top();

    let bring_water = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor("contact");
    });
    let gallery: Vec<GalleryImage> = GALLERY.iter().map(|path| GalleryImage::from(config::asset(path))).collect();
    let flip: Vec<AttrValue> = ["ecosystem ponds", "koi ponds", "waterfalls", "streams"]
        .into_iter()
        .map(AttrValue::from)
        .collect();
    let office = &OFFICES[0];

    html! {
        <SiteLayout>
            <VideoHero
                video_url={config::video("backyard-pond.mp4")}
                poster_image={config::asset("homepage/backyard-pond-designer.jpg")}
                height="70vh"
            >
                <div class="page-hero">
                    <BlurFade delay={0.3}>
                        <p class="eyebrow">{ "Award-Winning Water Feature Design" }</p>
                    </BlurFade>
                    <TextGenerateEffect
                        words="Living Water Features"
                        tag={TextTag::H1}
                        stagger_delay={0.08}
                        duration={0.4}
                        initial_delay={0.5}
                        animate_on_view=false
                    />
                    <BlurFade delay={0.7}>
                        <p class="hero-lead">
                            { "Bring the magic of water to your landscape with " }
                            <FlipWords words={flip} word_class="water-flip" />
                        </p>
                    </BlurFade>
                    <BlurFade delay={0.9}>
                        <div class="button-row">
                            <CtaButton href="#contact" variant={CtaButtonVariant::Secondary} onclick={bring_water}>
                                { "Bring Water to Life" }
                            </CtaButton>
                        </div>
                    </BlurFade>
                </div>
            </VideoHero>

            <section class="section">
                <div class="container narrow centered">
                    <BlurFade delay={0.1} in_view=true>
                        <h2 class="section-title">{ "The Sound of Tranquility" }</h2>
                        <p class="section-lead">
                            { "There's something primal about water in a landscape. The sound of a waterfall cascading over granite boulders. Koi gliding beneath lily pads. The reflection of clouds in a still pond at dusk." }
                        </p>
                        <p class="section-lead water-emphasis">
                            { "We design water features that aren't just beautiful. They're alive." }
                        </p>
                    </BlurFade>
                </div>
            </section>

            <FeatureSection
                title="Our Water Feature Services"
                features={services()}
                layout={FeatureLayout::Alternating}
                badge="Ponds • Waterfalls • Streams"
            />

            <CtaSection
                badge="Award of Excellence | Water Features | 2021"
                title="\"The Magical Forest\""
                description="Our award-winning water feature cascades through a canopy of mature trees, creating an ecosystem where nature and design become one. It earned Landscape Ontario's Award of Excellence in the Special Construction - Water Features category."
                variant={CtaVariant::SplitImage}
                image={config::asset("projects/magical-forest/magical-forest-1.jpg")}
                image_alt="The Magical Forest - Award-winning water feature"
            />

            <FeatureSection
                title="Why Add Water to Your Landscape?"
                features={benefits()}
                variant={Tone::Dark}
                layout={FeatureLayout::Grid}
            />

            <section class="section">
                <div class="container">
                    <BlurFade delay={0.1} in_view=true class="section-header centered">
                        <h2 class="section-title">{ "Water Feature Gallery" }</h2>
                    </BlurFade>
                    <BlurFade delay={0.2} in_view=true>
                        <ImageGallery images={gallery} columns={GalleryColumns::Four} featured_first=true />
                    </BlurFade>
                </div>
            </section>

            <CtaSection
                id="contact"
                title="Bring the Sound of Water Home"
                description="From simple bubbling rocks to elaborate ecosystem ponds, we design water features that fit your space and your vision."
                variant={CtaVariant::Dark}
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
                .water-flip { color: #C9A962; font-weight: 600; }
                .water-emphasis { margin-top: 1.5rem; color: #2D5A3D; font-weight: 600; }
                .water-check {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: rgba(201, 169, 98, 0.2);
                    color: #C9A962;
                    font-weight: 700;
                }
                "#}
            </style>
        </SiteLayout>
    }
}

use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::gallery::{next_index, prev_index};
use crate::components::motion::{use_in_view, IN_VIEW_MARGIN};
use crate::content::Testimonial;

const STAR_PATH: &str = "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TestimonialVariant {
    #[default]
    Carousel,
    Grid,
    Marquee,
    Stacked,
}

/// Distance of card `index` behind the active one, wrapping around the deck.
pub fn stack_offset(index: usize, current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index % len + len - current % len) % len
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackPose {
    pub scale: f64,
    pub y: f64,
    pub z_index: usize,
    pub opacity: f64,
}

pub fn stack_pose(offset: usize, len: usize) -> StackPose {
    let depth = offset as f64;
    StackPose {
        scale: if offset == 0 { 1.0 } else { 0.9 - depth * 0.05 },
        y: depth * 20.0,
        z_index: len.saturating_sub(offset),
        opacity: if offset > 2 { 0.0 } else { 1.0 - depth * 0.2 },
    }
}

impl StackPose {
    fn style(&self) -> String {
        format!(
            "transform: translateY({}px) scale({}); z-index: {}; opacity: {};",
            self.y, self.scale, self.z_index, self.opacity
        )
    }
}

/// Stars lit for a rating, capped at five.
pub fn lit_stars(rating: u8) -> usize {
    usize::from(rating.min(5))
}

fn rotate_millis(seconds: u32, len: usize) -> u32 {
    if len < 2 {
        0
    } else {
        seconds.saturating_mul(1000)
    }
}

#[derive(Properties, PartialEq)]
struct CardProps {
    testimonial: Testimonial,
    #[prop_or_default]
    large: bool,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &CardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <div class={classes!("testimonial-card", props.large.then(|| "large"))}>
            <div class="testimonial-quote-mark">{ "\u{201C}" }</div>
            {
                if let Some(badge) = &t.badge {
                    html! { <div class="testimonial-badge">{ badge }</div> }
                } else {
                    html! {}
                }
            }
            <blockquote>{ format!("\u{201C}{}\u{201D}", t.quote) }</blockquote>
            {
                if let Some(rating) = t.rating {
                    let lit = lit_stars(rating);
                    html! {
                        <div class="testimonial-stars">
                            { for (0..5).map(|i| html! {
                                <svg class={classes!("star", (i < lit).then(|| "lit"))} fill="currentColor" viewBox="0 0 20 20">
                                    <path d={STAR_PATH} />
                                </svg>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="testimonial-author">
                {
                    if let Some(image) = &t.image {
                        html! { <img src={image.clone()} alt={t.name.clone()} /> }
                    } else {
                        html! {}
                    }
                }
                <div>
                    <div class="testimonial-name">{ &t.name }</div>
                    {
                        if let Some(title) = &t.title {
                            html! { <div class="testimonial-title">{ title }</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RotatingProps {
    testimonials: Vec<Testimonial>,
    auto_rotate: u32,
    #[prop_or_default]
    show_navigation: bool,
}

#[function_component(Carousel)]
fn carousel(props: &RotatingProps) -> Html {
    let current = use_state_eq(|| 0usize);
    let len = props.testimonials.len();
    {
        let current = current.clone();
        use_interval(move || current.set(next_index(*current, len)), rotate_millis(props.auto_rotate, len));
    }

    let go_prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(prev_index(*current, len)))
    };
    let go_next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_index(*current, len)))
    };

    let Some(shown) = props.testimonials.get(*current).cloned() else {
        return html! {};
    };

    html! {
        <div class="testimonial-carousel">
            <div key={*current} class="testimonial-slide">
                <TestimonialCard testimonial={shown} large=true />
            </div>
            {
                if props.show_navigation && len > 1 {
                    html! {
                        <div class="testimonial-nav">
                            <button onclick={go_prev} aria-label="Previous testimonial">{ "‹" }</button>
                            <div class="testimonial-dots">
                                { for (0..len).map(|index| {
                                    let current = current.clone();
                                    html! {
                                        <button
                                            key={index}
                                            class={classes!("dot", (index == *current).then(|| "active"))}
                                            aria-label={format!("Go to testimonial {}", index + 1)}
                                            onclick={Callback::from(move |_: MouseEvent| current.set(index))}
                                        />
                                    }
                                }) }
                            </div>
                            <button onclick={go_next} aria-label="Next testimonial">{ "›" }</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Stacked)]
fn stacked(props: &RotatingProps) -> Html {
    let current = use_state_eq(|| 0usize);
    let len = props.testimonials.len();
    {
        let current = current.clone();
        use_interval(move || current.set(next_index(*current, len)), rotate_millis(props.auto_rotate, len));
    }

    html! {
        <div class="testimonial-stack">
            { for props.testimonials.iter().enumerate().map(|(index, testimonial)| {
                let pose = stack_pose(stack_offset(index, *current, len), len);
                let current = current.clone();
                html! {
                    <div
                        key={index}
                        class="testimonial-stack-card"
                        style={pose.style()}
                        onclick={Callback::from(move |_: MouseEvent| current.set(index))}
                    >
                        <TestimonialCard testimonial={testimonial.clone()} large=true />
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTestimonialsProps {
    pub testimonials: Vec<Testimonial>,
    #[prop_or_default]
    pub variant: TestimonialVariant,
    /// Seconds between rotations; 0 disables.
    #[prop_or(5)]
    pub auto_rotate: u32,
    #[prop_or(true)]
    pub show_navigation: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

#[function_component(AnimatedTestimonials)]
pub fn animated_testimonials(props: &AnimatedTestimonialsProps) -> Html {
    let section = use_node_ref();
    let in_view = use_in_view(section.clone(), IN_VIEW_MARGIN * 2.0);

    let header = if props.title.is_some() || props.description.is_some() {
        html! {
            <div class={classes!("testimonials-header", in_view.then(|| "shown"))}>
                {
                    if let Some(title) = &props.title {
                        html! { <h2>{ title.clone() }</h2> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(description) = &props.description {
                        html! { <p>{ description.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    } else {
        html! {}
    };

    let body = match props.variant {
        TestimonialVariant::Carousel => html! {
            <Carousel
                testimonials={props.testimonials.clone()}
                auto_rotate={props.auto_rotate}
                show_navigation={props.show_navigation}
            />
        },
        TestimonialVariant::Stacked => html! {
            <Stacked testimonials={props.testimonials.clone()} auto_rotate={props.auto_rotate} />
        },
        TestimonialVariant::Grid => html! {
            <div class="testimonial-grid">
                { for props.testimonials.iter().enumerate().map(|(index, testimonial)| html! {
                    <div
                        key={index}
                        class={classes!("testimonial-grid-cell", in_view.then(|| "shown"))}
                        style={format!("transition-delay: {}s;", 0.1 * index as f64)}
                    >
                        <TestimonialCard testimonial={testimonial.clone()} />
                    </div>
                }) }
            </div>
        },
        TestimonialVariant::Marquee => html! {
            <div class="testimonial-marquee">
                <div class="testimonial-marquee-track">
                    { for props.testimonials.iter().chain(props.testimonials.iter()).enumerate().map(|(index, testimonial)| html! {
                        <div key={index} class="testimonial-marquee-cell">
                            <TestimonialCard testimonial={testimonial.clone()} />
                        </div>
                    }) }
                </div>
            </div>
        },
    };

    html! {
        <div ref={section} class={classes!("testimonials", props.class.clone())}>
            { header }
            { body }
            <style>
                {r#"
                .testimonials { padding: 4rem 0; }
                .testimonials-header { text-align: center; margin-bottom: 3rem; opacity: 0; transform: translateY(20px); transition: opacity 0.5s, transform 0.5s; }
                .testimonials-header.shown { opacity: 1; transform: none; }
                .testimonials-header h2 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
                .testimonials-header p { font-size: 1.125rem; color: #6b7280; max-width: 42rem; margin: 0 auto; }
                .testimonial-card {
                    position: relative;
                    height: 100%;
                    padding: 1.5rem;
                    background: #fff;
                    border-radius: 1rem;
                    border: 1px solid rgba(0, 0, 0, 0.08);
                    transition: box-shadow 0.3s, border-color 0.3s;
                }
                .testimonial-card:hover { box-shadow: 0 20px 25px -5px rgba(0,0,0,0.1); border-color: rgba(201, 169, 98, 0.3); }
                .testimonial-card.large { padding: 2.5rem; }
                .testimonial-card.large blockquote { font-size: 1.25rem; line-height: 1.7; }
                .testimonial-quote-mark { color: #C9A962; font-size: 3rem; line-height: 1; }
                .testimonial-badge {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 1rem;
                    border-radius: 9999px;
                    background: rgba(201, 169, 98, 0.1);
                    color: #C9A962;
                    font-size: 0.75rem;
                    font-weight: 500;
                }
                .testimonial-card blockquote { margin: 0 0 1.5rem; }
                .testimonial-stars { display: flex; gap: 0.25rem; margin-bottom: 1rem; }
                .testimonial-stars .star { width: 1.25rem; height: 1.25rem; color: #e5e7eb; }
                .testimonial-stars .star.lit { color: #C9A962; }
                .testimonial-author { display: flex; align-items: center; gap: 1rem; }
                .testimonial-author img { width: 3rem; height: 3rem; border-radius: 9999px; object-fit: cover; }
                .testimonial-name { font-weight: 600; }
                .testimonial-title { font-size: 0.875rem; color: #6b7280; }
                .testimonial-carousel { position: relative; max-width: 56rem; margin: 0 auto; padding: 0 1rem; }
                .testimonial-slide { animation: testimonialIn 0.4s cubic-bezier(0.25, 0.1, 0.25, 1); }
                @keyframes testimonialIn { from { opacity: 0; transform: translateX(50px); } to { opacity: 1; transform: none; } }
                .testimonial-nav { display: flex; justify-content: center; gap: 1rem; margin-top: 2rem; }
                .testimonial-nav > button { border: none; border-radius: 9999px; padding: 0.5rem 1rem; background: #f3f4f6; cursor: pointer; font-size: 1.25rem; }
                .testimonial-dots { display: flex; align-items: center; gap: 0.5rem; }
                .testimonial-dots .dot { width: 0.5rem; height: 0.5rem; padding: 0; border: none; border-radius: 9999px; background: rgba(107, 114, 128, 0.3); cursor: pointer; transition: all 0.3s; }
                .testimonial-dots .dot.active { width: 1.5rem; background: #C9A962; }
                .testimonial-grid { display: grid; gap: 1.5rem; grid-template-columns: 1fr; }
                @media (min-width: 768px) { .testimonial-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (min-width: 1024px) { .testimonial-grid { grid-template-columns: repeat(3, 1fr); } }
                .testimonial-grid-cell { opacity: 0; transform: translateY(30px); transition: opacity 0.5s, transform 0.5s; }
                .testimonial-grid-cell.shown { opacity: 1; transform: none; }
                .testimonial-marquee { position: relative; overflow: hidden; padding: 1rem 0; }
                .testimonial-marquee-track { display: flex; gap: 1.5rem; width: max-content; animation: testimonialScroll 30s linear infinite; }
                .testimonial-marquee-cell { flex-shrink: 0; width: 350px; }
                @keyframes testimonialScroll { from { transform: translateX(0); } to { transform: translateX(-50%); } }
                .testimonial-stack { position: relative; max-width: 42rem; height: 350px; margin: 0 auto; perspective: 1000px; }
                .testimonial-stack-card { position: absolute; inset: 0; cursor: pointer; transition: all 0.4s cubic-bezier(0.25, 0.1, 0.25, 1); }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_wrap_around_the_deck() {
        assert_eq!(stack_offset(2, 2, 4), 0);
        assert_eq!(stack_offset(3, 2, 4), 1);
        assert_eq!(stack_offset(0, 2, 4), 2);
        assert_eq!(stack_offset(1, 2, 4), 3);
        assert_eq!(stack_offset(0, 0, 0), 0);
    }

    #[test]
    fn active_card_is_full_size_on_top() {
        let pose = stack_pose(0, 4);
        assert_eq!(pose, StackPose { scale: 1.0, y: 0.0, z_index: 4, opacity: 1.0 });
    }

    #[test]
    fn cards_recede_behind_the_active_one() {
        let pose = stack_pose(1, 4);
        assert!((pose.scale - 0.85).abs() < 1e-9);
        assert_eq!(pose.y, 20.0);
        assert_eq!(pose.z_index, 3);
        assert!((pose.opacity - 0.8).abs() < 1e-9);

        let pose = stack_pose(2, 4);
        assert!((pose.scale - 0.8).abs() < 1e-9);
        assert!((pose.opacity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn cards_deeper_than_two_are_hidden() {
        assert_eq!(stack_pose(3, 4).opacity, 0.0);
        assert_eq!(stack_pose(3, 4).z_index, 1);
    }

    #[test]
    fn ratings_cap_at_five_stars() {
        assert_eq!(lit_stars(3), 3);
        assert_eq!(lit_stars(9), 5);
    }

    #[test]
    fn rotation_needs_two_cards_and_a_period() {
        assert_eq!(rotate_millis(5, 4), 5000);
        assert_eq!(rotate_millis(0, 4), 0);
        assert_eq!(rotate_millis(5, 1), 0);
    }
}

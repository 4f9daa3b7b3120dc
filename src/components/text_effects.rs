//! Animated headline treatments: word-by-word blur reveal, typewriter,
//! rotating words and a moving gradient fill.

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::motion::{use_in_view, use_reduced_motion, IN_VIEW_MARGIN};

/// Element a text effect renders as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextTag {
    H1,
    H2,
    H3,
    H4,
    P,
    Span,
    #[default]
    Div,
}

impl TextTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TextTag::H1 => "h1",
            TextTag::H2 => "h2",
            TextTag::H3 => "h3",
            TextTag::H4 => "h4",
            TextTag::P => "p",
            TextTag::Span => "span",
            TextTag::Div => "div",
        }
    }
}

pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Seconds before word `index` starts revealing.
pub fn word_delay(index: usize, initial_delay: f64, stagger: f64) -> f64 {
    initial_delay + index as f64 * stagger
}

fn word_style(visible: bool, delay: f64, duration: f64, blur: f64) -> String {
    if visible {
        format!(
            "opacity: 1; filter: blur(0px); transform: translateY(0); \
             transition: opacity {duration}s cubic-bezier(0.25, 0.1, 0.25, 1) {delay}s, \
             filter {duration}s cubic-bezier(0.25, 0.1, 0.25, 1) {delay}s, \
             transform {duration}s cubic-bezier(0.25, 0.1, 0.25, 1) {delay}s;"
        )
    } else {
        format!("opacity: 0; filter: blur({blur}px); transform: translateY(10px);")
    }
}

#[derive(Properties, PartialEq)]
pub struct TextGenerateEffectProps {
    pub words: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub word_class: Classes,
    #[prop_or(0.1)]
    pub stagger_delay: f64,
    #[prop_or(0.0)]
    pub initial_delay: f64,
    #[prop_or(0.5)]
    pub duration: f64,
    #[prop_or(true)]
    pub animate_on_view: bool,
    #[prop_or_default]
    pub tag: TextTag,
    #[prop_or(10.0)]
    pub blur_amount: f64,
}

#[function_component(TextGenerateEffect)]
pub fn text_generate_effect(props: &TextGenerateEffectProps) -> Html {
    let node = use_node_ref();
    let reduced_motion = use_reduced_motion();
    let seen = use_in_view(node.clone(), IN_VIEW_MARGIN);
    let mounted = use_state_eq(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    let words = split_words(&props.words);
    if reduced_motion {
        return html! {
            <@{props.tag.as_str()} ref={node} class={props.class.clone()}>
                { words.join(" ") }
            </@>
        };
    }

    let visible = if props.animate_on_view { seen } else { *mounted };
    html! {
        <@{props.tag.as_str()} ref={node} class={classes!("text-generate", props.class.clone())}>
            { for words.iter().enumerate().map(|(index, word)| {
                let delay = word_delay(index, props.initial_delay, props.stagger_delay);
                html! {
                    <span
                        key={format!("{}-{}", word, index)}
                        class={classes!("text-generate-word", props.word_class.clone())}
                        style={word_style(visible, delay, props.duration, props.blur_amount)}
                    >
                        { word.to_string() }
                    </span>
                }
            }) }
            <style>
                {r#"
                .text-generate {
                    display: flex;
                    flex-wrap: wrap;
                }
                .text-generate-word {
                    display: inline-block;
                    margin-right: 0.25em;
                }
                "#}
            </style>
        </@>
    }
}

/// First `count` characters of `text`, never splitting a code point.
pub fn typed_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

pub fn type_interval_ms(chars_per_second: u32) -> u32 {
    (1000 / chars_per_second.max(1)).max(1)
}

#[derive(Properties, PartialEq)]
pub struct TypewriterEffectProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Characters per second.
    #[prop_or(50)]
    pub speed: u32,
    /// Seconds before typing starts.
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(true)]
    pub show_cursor: bool,
    #[prop_or(AttrValue::Static("|"))]
    pub cursor: AttrValue,
    #[prop_or_default]
    pub tag: TextTag,
    #[prop_or(true)]
    pub animate_on_view: bool,
}

#[function_component(TypewriterEffect)]
pub fn typewriter_effect(props: &TypewriterEffectProps) -> Html {
    let node = use_node_ref();
    let reduced_motion = use_reduced_motion();
    let seen = use_in_view(node.clone(), IN_VIEW_MARGIN);
    let started = use_state_eq(|| false);
    let typed = use_state_eq(|| 0usize);
    let total = props.text.chars().count();
    let complete = reduced_motion || *typed >= total;

    let triggered = !props.animate_on_view || seen;
    {
        let started = started.clone();
        use_effect_with_deps(
            move |(armed, delay): &(bool, u64)| {
                let timeout = armed.then(|| {
                    Timeout::new(*delay as u32, move || started.set(true))
                });
                move || drop(timeout)
            },
            (triggered && !reduced_motion, (props.delay.max(0.0) * 1000.0) as u64),
        );
    }
    {
        let typed = typed.clone();
        use_effect_with_deps(
            move |(running, speed, total): &(bool, u32, usize)| {
                let total = *total;
                let interval = running.then(|| {
                    let mut count = 0usize;
                    Interval::new(type_interval_ms(*speed), move || {
                        count = (count + 1).min(total);
                        typed.set(count);
                    })
                });
                move || drop(interval)
            },
            (*started && !complete, props.speed, total),
        );
    }

    let shown = if reduced_motion {
        &*props.text
    } else {
        typed_prefix(&props.text, *typed)
    };

    html! {
        <@{props.tag.as_str()} ref={node} class={props.class.clone()}>
            { shown.to_string() }
            {
                if props.show_cursor && !complete {
                    html! { <span class="typewriter-cursor">{ props.cursor.clone() }</span> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .typewriter-cursor {
                    display: inline-block;
                    margin-left: 0.25rem;
                    animation: typewriterBlink 0.5s infinite alternate;
                }
                @keyframes typewriterBlink {
                    from { opacity: 1; }
                    to { opacity: 0; }
                }
                "#}
            </style>
        </@>
    }
}

pub fn next_word(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[derive(Properties, PartialEq)]
pub struct FlipWordsProps {
    pub words: Vec<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub word_class: Classes,
    /// Seconds each word stays up.
    #[prop_or(3.0)]
    pub display_duration: f64,
    #[prop_or(0.5)]
    pub flip_duration: f64,
}

#[function_component(FlipWords)]
pub fn flip_words(props: &FlipWordsProps) -> Html {
    let reduced_motion = use_reduced_motion();
    let current = use_state_eq(|| 0usize);

    let millis = if reduced_motion || props.words.len() < 2 {
        0
    } else {
        (props.display_duration * 1000.0) as u32
    };
    {
        let current = current.clone();
        let len = props.words.len();
        use_interval(move || current.set(next_word(*current, len)), millis);
    }

    let Some(word) = props.words.get(*current).or_else(|| props.words.first()) else {
        return html! {};
    };

    if reduced_motion {
        return html! { <span class={props.class.clone()}>{ word.clone() }</span> };
    }

    html! {
        <span class={classes!("flip-words", props.class.clone())}>
            <span
                key={*current}
                class={classes!("flip-word", props.word_class.clone())}
                style={format!("animation-duration: {}s;", props.flip_duration)}
            >
                { word.clone() }
            </span>
            <style>
                {r#"
                .flip-words {
                    display: inline-block;
                    position: relative;
                    overflow: hidden;
                    vertical-align: bottom;
                }
                .flip-word {
                    display: inline-block;
                    animation-name: flipIn;
                    animation-timing-function: cubic-bezier(0.25, 0.1, 0.25, 1);
                    animation-fill-mode: both;
                }
                @keyframes flipIn {
                    from { transform: translateY(100%) rotateX(-90deg); opacity: 0; }
                    to { transform: translateY(0) rotateX(0); opacity: 1; }
                }
                "#}
            </style>
        </span>
    }
}

pub const BRAND_GRADIENT: [&str; 4] = ["#2D5A3D", "#1A535C", "#4A90A4", "#C9A962"];

/// Gradient stops wrapped back to the first colour so the loop is seamless.
pub fn gradient_style<'a>(colors: impl IntoIterator<Item = &'a str>, duration: f64) -> String {
    let mut stops: Vec<&str> = colors.into_iter().collect();
    if let Some(first) = stops.first().copied() {
        stops.push(first);
    }
    format!(
        "background-image: linear-gradient(90deg, {}); background-size: 200% auto; \
         -webkit-background-clip: text; background-clip: text; color: transparent; \
         animation: gradientShift {}s linear infinite;",
        stops.join(", "),
        duration
    )
}

fn brand_colors() -> Vec<AttrValue> {
    BRAND_GRADIENT.into_iter().map(AttrValue::Static).collect()
}

#[derive(Properties, PartialEq)]
pub struct GradientTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_else(brand_colors)]
    pub colors: Vec<AttrValue>,
    #[prop_or(5.0)]
    pub duration: f64,
}

#[function_component(GradientText)]
pub fn gradient_text(props: &GradientTextProps) -> Html {
    html! {
        <span
            class={classes!("gradient-text", props.class.clone())}
            style={gradient_style(props.colors.iter().map(|color| &**color), props.duration)}
        >
            { props.text.clone() }
            <style>
                {r#"
                .gradient-text { display: inline-block; }
                @keyframes gradientShift {
                    from { background-position: 0% center; }
                    to { background-position: 200% center; }
                }
                "#}
            </style>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_any_whitespace() {
        assert_eq!(split_words("Crafting  waterfront\nlegacies"), vec!["Crafting", "waterfront", "legacies"]);
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn words_are_staggered() {
        assert_eq!(word_delay(0, 0.2, 0.1), 0.2);
        assert!((word_delay(3, 0.2, 0.1) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn typed_prefix_respects_char_boundaries() {
        assert_eq!(typed_prefix("Muskoka", 3), "Mus");
        assert_eq!(typed_prefix("Muskoka", 50), "Muskoka");
        assert_eq!(typed_prefix("café", 4), "café");
        assert_eq!(typed_prefix("café", 3), "caf");
        assert_eq!(typed_prefix("", 2), "");
    }

    #[test]
    fn typing_speed_maps_to_an_interval() {
        assert_eq!(type_interval_ms(50), 20);
        assert_eq!(type_interval_ms(0), 1000);
        assert_eq!(type_interval_ms(5000), 1);
    }

    #[test]
    fn flip_words_wrap() {
        assert_eq!(next_word(0, 3), 1);
        assert_eq!(next_word(2, 3), 0);
        assert_eq!(next_word(0, 0), 0);
    }

    #[test]
    fn gradient_loops_back_to_the_first_colour() {
        let style = gradient_style(BRAND_GRADIENT, 5.0);
        assert!(style.starts_with(
            "background-image: linear-gradient(90deg, #2D5A3D, #1A535C, #4A90A4, #C9A962, #2D5A3D);"
        ));
        assert!(style.contains("gradientShift 5s linear"));
    }

    #[test]
    fn tags_render_their_element_names() {
        assert_eq!(TextTag::default().as_str(), "div");
        assert_eq!(TextTag::H1.as_str(), "h1");
    }
}

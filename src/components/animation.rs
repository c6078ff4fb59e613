//! Entry and ambient animations. Descriptors are plain structs; the CSS they
//! drive is generated here and injected by the page in a `<style>` block.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// One-time reveal: opacity 0 -> 1 while the vertical offset returns to 0.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EntryAnimation {
    pub duration_ms: u32,
    pub offset_px: u32,
    pub stagger_ms: u32,
}

/// Infinite reversing loop attached to one decorative element.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AmbientLoop {
    pub keyframes: &'static str,
    pub duration_ms: u32,
}

pub const ENTRY: EntryAnimation = EntryAnimation {
    duration_ms: 600,
    offset_px: 20,
    stagger_ms: 100,
};

pub const SHIELD_LOOP: AmbientLoop = AmbientLoop {
    keyframes: "shield-pulse",
    duration_ms: 2400,
};

pub const HEADLINE_LOOP: AmbientLoop = AmbientLoop {
    keyframes: "gradient-sweep",
    duration_ms: 3000,
};

/// Per-item stagger: later items in a list start their reveal later.
pub fn stagger_delay_ms(index: u32) -> u32 {
    index * ENTRY.stagger_ms
}

/// Transition rules for the reveal wrapper.
pub fn entry_css() -> String {
    format!(
        r#"
    .fade-in {{
        opacity: 0;
        transform: translateY({offset}px);
        transition: opacity {duration}ms ease-out, transform {duration}ms ease-out;
    }}
    .fade-in.visible {{
        opacity: 1;
        transform: translateY(0);
    }}
    "#,
        offset = ENTRY.offset_px,
        duration = ENTRY.duration_ms,
    )
}

/// Keyframes for the two decorative loops on the hero.
pub fn ambient_css() -> String {
    format!(
        r#"
    @keyframes {shield} {{
        from {{ transform: rotate(-4deg) scale(1); }}
        to {{ transform: rotate(4deg) scale(1.08); }}
    }}
    .hero-shield {{
        display: inline-block;
        animation: {shield} {shield_ms}ms ease-in-out infinite alternate;
    }}
    @keyframes {sweep} {{
        from {{ background-position: 0% 50%; }}
        to {{ background-position: 100% 50%; }}
    }}
    .hero-title {{
        background: linear-gradient(90deg, #3b82f6, #7EB2FF, #3b82f6);
        background-size: 200% auto;
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
        animation: {sweep} {sweep_ms}ms ease-in-out infinite alternate;
    }}
    "#,
        shield = SHIELD_LOOP.keyframes,
        shield_ms = SHIELD_LOOP.duration_ms,
        sweep = HEADLINE_LOOP.keyframes,
        sweep_ms = HEADLINE_LOOP.duration_ms,
    )
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    /// Position within the surrounding list, drives the stagger delay.
    #[prop_or_default]
    pub index: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper that reveals its children once they scroll into view. Items
/// already in the viewport at mount reveal immediately; each item keeps its
/// reveal after firing once.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let fired = Rc::new(Cell::new(false));
                let check = {
                    let node = node.clone();
                    let visible = visible.clone();
                    let fired = fired.clone();
                    move || {
                        if fired.get() {
                            return;
                        }
                        if let (Some(element), Some(window)) =
                            (node.cast::<web_sys::Element>(), web_sys::window())
                        {
                            let viewport = window
                                .inner_height()
                                .ok()
                                .and_then(|h| h.as_f64())
                                .unwrap_or(0.0);
                            if element.get_bounding_client_rect().top() < viewport * 0.92 {
                                fired.set(true);
                                visible.set(true);
                            }
                        }
                    }
                };
                // Initial check covers above-the-fold content
                check();
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(check);
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let delay = stagger_delay_ms(props.index);
    html! {
        <div
            ref={node}
            class={classes!("fade-in", (*visible).then_some("visible"), props.class.clone())}
            style={format!("transition-delay: {delay}ms;")}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stagger_is_linear_in_index() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), ENTRY.stagger_ms);
        assert_eq!(stagger_delay_ms(3), 3 * ENTRY.stagger_ms);
    }

    #[test]
    fn entry_descriptor_has_real_motion() {
        assert!(ENTRY.duration_ms > 0);
        assert!(ENTRY.offset_px > 0);
        assert!(ENTRY.stagger_ms > 0);
    }

    #[test]
    fn entry_css_reflects_the_descriptor() {
        let css = entry_css();
        assert!(css.contains(&format!("translateY({}px)", ENTRY.offset_px)));
        assert!(css.contains(&format!("{}ms ease-out", ENTRY.duration_ms)));
    }

    #[test]
    fn ambient_css_declares_both_loops() {
        let css = ambient_css();
        for looped in [SHIELD_LOOP, HEADLINE_LOOP] {
            assert!(css.contains(&format!("@keyframes {}", looped.keyframes)));
            assert!(css.contains(&format!("{}ms ease-in-out infinite alternate", looped.duration_ms)));
        }
    }
}

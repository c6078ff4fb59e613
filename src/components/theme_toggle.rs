use yew::prelude::*;

use crate::theme::ThemeHandle;

/// Fixed top-right button flipping the display mode. The glyph shows the
/// mode a press would switch to: moon while light, sun while dark.
#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_context::<ThemeHandle>().expect("theme context not provided");

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set((*theme).toggled()))
    };

    html! {
        <button class={format!("theme-toggle {}", theme.name())} {onclick} aria-label="Toggle theme">
            <i class={(*theme).toggle_icon()}></i>
        </button>
    }
}

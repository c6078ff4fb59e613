pub mod components;
pub mod content;
pub mod pages;
pub mod theme;

use yew::prelude::*;

use crate::pages::landing::Landing;
use crate::theme::{Theme, ThemeHandle};

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_state(Theme::default);
    html! {
        <ContextProvider<ThemeHandle> context={theme}>
            <Landing />
        </ContextProvider<ThemeHandle>>
    }
}

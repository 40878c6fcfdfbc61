//! Demo dashboard shell and wasm entrypoint.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use yew::prelude::*;

use crate::components::atoms::icons::{IconMoon, IconSun};
use crate::features::dashboard::DashboardStatsCards;
use crate::models::demo_snapshot;
use crate::theme::ThemeMode;

const THEME_KEY: &str = "vantage.theme";

fn load_theme() -> ThemeMode {
    LocalStorage::get::<String>(THEME_KEY)
        .map(|value| ThemeMode::from_stored(&value))
        .unwrap_or_default()
}

fn apply_theme(theme: ThemeMode) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            if body.set_attribute("data-theme", theme.as_str()).is_err() {
                console::warn!("failed to apply theme attribute");
            }
        }
    }
}

#[function_component(VantageApp)]
pub(crate) fn vantage_app() -> Html {
    let theme = use_state(load_theme);

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                LocalStorage::set(THEME_KEY, theme.as_str()).ok();
                || ()
            },
            theme,
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    html! {
        <div class="bg-base-200 min-h-screen">
            <header class="navbar bg-base-100 shadow-sm">
                <div class="flex-1 px-2">
                    <span class="text-lg font-bold">{"Vantage"}</span>
                    <span class="text-base-content/60 px-2 text-sm">{"Team dashboard"}</span>
                </div>
                <button
                    class="btn btn-ghost btn-circle"
                    onclick={on_toggle_theme}
                    aria-label="Toggle theme"
                >
                    {match *theme {
                        ThemeMode::Light => html! { <IconMoon size="5" /> },
                        ThemeMode::Dark => html! { <IconSun size="5" /> },
                    }}
                </button>
            </header>
            <main class="mx-auto max-w-7xl p-6">
                <DashboardStatsCards snapshot={demo_snapshot()} />
            </main>
        </div>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<VantageApp>::with_root(root).render();
    } else {
        yew::Renderer::<VantageApp>::new().render();
    }
}

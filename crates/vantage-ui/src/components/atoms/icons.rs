//! SVG icon atoms drawn with `currentColor`.
//!
//! Icons inherit their color from the surrounding text and are sized with a
//! Tailwind `size-*` utility derived from the `size` prop.

use yew::prelude::*;

/// Outline or filled glyph rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconVariant {
    /// Stroke-only rendering (default).
    #[default]
    Outline,
    /// Filled rendering.
    Solid,
}

impl IconVariant {
    const fn paint(self) -> (&'static str, &'static str) {
        match self {
            Self::Outline => ("none", "currentColor"),
            Self::Solid => ("currentColor", "currentColor"),
        }
    }
}

/// Props shared by every icon component.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Additional classes for the `svg` element.
    #[prop_or_default]
    pub class: Classes,
    /// Accessible title; untitled icons are hidden from the tree.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Tailwind size token suffix, e.g. `"6"` for `size-6`.
    #[prop_or_default]
    pub size: Option<AttrValue>,
    /// Outline or solid rendering.
    #[prop_or_default]
    pub variant: IconVariant,
}

/// Renderable glyph handle: given a size token, yields the drawn icon.
pub type IconSlot = Callback<AttrValue, Html>;

fn size_class(size: &Option<AttrValue>) -> Option<String> {
    size.as_ref().map(|value| {
        let raw = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_owned()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = Classes::new();
    if let Some(size) = size_class(&props.size) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    let (fill, stroke) = props.variant.paint();
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill={fill}
            stroke={stroke}
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

/// Activity pulse glyph.
#[function_component(IconActivity)]
pub fn icon_activity(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M22 12h-2.48a2 2 0 0 0-1.93 1.46l-2.35 8.36a.25.25 0 0 1-.48 0L9.24 2.18a.25.25 0 0 0-.48 0l-2.35 8.36A2 2 0 0 1 4.49 12H2" /> },
    )
}

/// Warning triangle glyph.
#[function_component(IconAlertTriangle)]
pub fn icon_alert_triangle(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="m21.73 18l-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3M12 9v4m0 4h.01" /> },
    )
}

/// Dollar sign in a circle.
#[function_component(IconCircleDollarSign)]
pub fn icon_circle_dollar_sign(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="10" />
            <path d="M16 8h-6a2 2 0 1 0 0 4h4a2 2 0 1 1 0 4H8m4 2V6" />
        </> },
    )
}

/// Crescent moon glyph for the dark theme toggle.
#[function_component(IconMoon)]
pub fn icon_moon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M20.985 12.486a9 9 0 1 1-9.473-9.472c.405-.022.617.46.402.803a6 6 0 0 0 8.268 8.268c.344-.215.825-.004.803.401" /> },
    )
}

/// Parcel glyph.
#[function_component(IconPackage)]
pub fn icon_package(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M11 21.73a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73zm1 .27V12" />
            <path d="M3.29 7L12 12l8.71-5M7.5 4.27l9 5.15" />
        </> },
    )
}

/// Sun glyph for the light theme toggle.
#[function_component(IconSun)]
pub fn icon_sun(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
        </> },
    )
}

/// Downward trend line.
#[function_component(IconTrendingDown)]
pub fn icon_trending_down(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M16 17h6v-6M22 17l-8.5-8.5l-5 5L2 7" /> })
}

/// Upward trend line.
#[function_component(IconTrendingUp)]
pub fn icon_trending_up(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M16 7h6v6M22 7l-8.5 8.5l-5-5L2 17" /> })
}

/// People glyph.
#[function_component(IconUsers)]
pub fn icon_users(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M16 3.128a4 4 0 0 1 0 7.744M22 21v-2a4 4 0 0 0-3-3.87" />
            <circle cx="9" cy="7" r="4" />
        </> },
    )
}

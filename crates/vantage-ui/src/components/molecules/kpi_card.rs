//! KPI card molecule: title, headline value, optional change row, icon badge.

use yew::prelude::*;

use crate::components::atoms::icons::{IconSlot, IconTrendingDown, IconTrendingUp};
use crate::logic::change_row;
use crate::models::{ChangeTone, TrendDirection};

/// Size token handed to the badge icon slot.
const BADGE_ICON_SIZE: &str = "6";

/// Props for [`KpiCard`].
#[derive(Properties, PartialEq)]
pub struct KpiCardProps {
    /// Display label above the value.
    pub title: AttrValue,
    /// Headline metric, already formatted by the caller.
    pub value: AttrValue,
    /// Optional formatted delta; the change row renders only when this is
    /// present and non-empty.
    #[prop_or_default]
    pub change: Option<AttrValue>,
    /// Tone governing the change glyph and text color.
    #[prop_or_default]
    pub tone: ChangeTone,
    /// Badge glyph; receives the badge size token.
    pub icon: IconSlot,
    /// Extra classes appended to the base card styling.
    #[prop_or_default]
    pub class: Classes,
}

fn card_classes(extra: &Classes) -> Classes {
    classes!(
        "card",
        "bg-base-100/70",
        "backdrop-blur",
        "rounded-box",
        "shadow-md",
        "cursor-pointer",
        "group",
        "transition-all",
        "duration-200",
        "hover:bg-base-100/90",
        "hover:shadow-lg",
        "hover:-translate-y-0.5",
        "hover:scale-[1.02]",
        extra.clone(),
    )
}

fn trend_glyph(direction: TrendDirection) -> Html {
    match direction {
        TrendDirection::Up => html! { <IconTrendingUp size="4" /> },
        TrendDirection::Down => html! { <IconTrendingDown size="4" /> },
    }
}

/// Stateless card showing one pre-formatted metric with an optional delta
/// row and a gradient icon badge at the trailing edge.
#[function_component(KpiCard)]
pub fn kpi_card(props: &KpiCardProps) -> Html {
    let row = change_row(props.change.as_deref(), props.tone);
    html! {
        <div class={card_classes(&props.class)}>
            <div class="card-body flex-row items-start justify-between gap-4">
                <div class="min-w-0">
                    <p class="text-base-content/60 text-sm font-medium">{props.title.clone()}</p>
                    <p class="text-primary mt-2 text-3xl font-bold">{props.value.clone()}</p>
                    {row.map(|row| html! {
                        <div class={classes!("mt-2", "flex", "items-center", "gap-1", "text-sm", row.text_class)}>
                            {row.trend.map(trend_glyph).unwrap_or_default()}
                            <span>{row.text.to_owned()}</span>
                        </div>
                    }).unwrap_or_default()}
                </div>
                <div class="from-primary to-secondary rounded-box shrink-0 bg-gradient-to-br p-3 text-white shadow-lg transition-transform duration-200 group-hover:scale-110">
                    {props.icon.emit(AttrValue::from(BADGE_ICON_SIZE))}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_extends_base_classes() {
        let merged = card_classes(&classes!("col-span-2")).to_string();
        for token in ["card", "rounded-box", "shadow-md", "cursor-pointer", "group"] {
            assert!(merged.contains(token), "missing base token {token}");
        }
        assert!(merged.ends_with("col-span-2"));
    }

    #[test]
    fn empty_override_leaves_base_classes_alone() {
        let base = card_classes(&Classes::new()).to_string();
        let merged = card_classes(&classes!("col-span-2")).to_string();
        assert!(merged.starts_with(&base));
    }
}

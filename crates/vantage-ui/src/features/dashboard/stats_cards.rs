//! KPI stats card grid for the dashboard landing view.

use yew::prelude::*;

use crate::components::atoms::icons::{
    IconAlertTriangle, IconCircleDollarSign, IconPackage, IconSlot, IconUsers, IconVariant,
};
use crate::components::molecules::KpiCard;
use crate::models::{DashboardSnapshot, KpiMetric};

/// Props for [`DashboardStatsCards`].
#[derive(Properties, PartialEq)]
pub struct DashboardStatsCardsProps {
    /// Snapshot of display-ready metrics.
    pub snapshot: DashboardSnapshot,
}

fn metric_card(metric: &KpiMetric, icon: IconSlot) -> Html {
    html! {
        <KpiCard
            title={metric.title.clone()}
            value={metric.value.clone()}
            change={metric.change.clone().map(AttrValue::from)}
            tone={metric.tone}
            {icon}
        />
    }
}

/// Four-up KPI grid over a [`DashboardSnapshot`].
#[function_component(DashboardStatsCards)]
pub fn dashboard_stats_cards(props: &DashboardStatsCardsProps) -> Html {
    let snapshot = &props.snapshot;
    html! {
        <div class="grid gap-5 lg:grid-cols-2 xl:grid-cols-4">
            {metric_card(
                &snapshot.revenue,
                Callback::from(|size: AttrValue| html! {
                    <IconCircleDollarSign size={Some(size)} variant={IconVariant::Solid} />
                }),
            )}
            {metric_card(
                &snapshot.active_users,
                Callback::from(|size: AttrValue| html! { <IconUsers size={Some(size)} /> }),
            )}
            {metric_card(
                &snapshot.orders,
                Callback::from(|size: AttrValue| html! { <IconPackage size={Some(size)} /> }),
            )}
            {metric_card(
                &snapshot.error_rate,
                Callback::from(|size: AttrValue| html! { <IconAlertTriangle size={Some(size)} /> }),
            )}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod render_tests {
    use super::*;
    use crate::models::demo_snapshot;

    #[tokio::test]
    async fn grid_renders_one_card_per_metric() {
        let rendered = yew::ServerRenderer::<DashboardStatsCards>::with_props(|| {
            DashboardStatsCardsProps {
                snapshot: demo_snapshot(),
            }
        })
        .hydratable(false)
        .render()
        .await;
        for title in ["Revenue", "Active Users", "Orders", "Error Rate"] {
            assert!(rendered.contains(title), "missing card for {title}");
        }
        // Demo data carries one positive and one negative delta.
        assert!(rendered.contains("M16 7h6v6"));
        assert!(rendered.contains("M16 17h6v-6"));
        assert_eq!(rendered.matches("bg-gradient-to-br").count(), 4);
    }
}

//! Display-ready models shared by the component library and the demo shell.
//!
//! Every field is pre-formatted by the producer; the UI renders these values
//! verbatim and never re-formats numbers or currencies.

use serde::{Deserialize, Serialize};

/// Direction of a rendered trend glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    /// Upward trend.
    Up,
    /// Downward trend.
    Down,
}

/// Tone applied to a KPI change row.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeTone {
    /// Favourable movement: success color plus an up glyph.
    Positive,
    /// Unfavourable movement: error color plus a down glyph.
    Negative,
    /// No directional reading: muted text, no glyph.
    #[default]
    Neutral,
}

impl ChangeTone {
    /// Utility classes applied to the change text for this tone.
    #[must_use]
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::Positive => "text-success font-medium",
            Self::Negative => "text-error font-medium",
            Self::Neutral => "text-base-content/70",
        }
    }

    /// Trend glyph direction for this tone; `Neutral` draws none.
    #[must_use]
    pub const fn trend(self) -> Option<TrendDirection> {
        match self {
            Self::Positive => Some(TrendDirection::Up),
            Self::Negative => Some(TrendDirection::Down),
            Self::Neutral => None,
        }
    }
}

/// A single display-ready metric as the backend ships it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct KpiMetric {
    /// Display label.
    pub title: String,
    /// Headline value, already formatted.
    pub value: String,
    /// Optional formatted delta (e.g. `"+4.2%"`).
    #[serde(default)]
    pub change: Option<String>,
    /// Tone governing the change row.
    #[serde(default)]
    pub tone: ChangeTone,
}

/// Snapshot of the metrics rendered by the dashboard stats card grid.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Revenue for the current period.
    pub revenue: KpiMetric,
    /// Currently active users.
    pub active_users: KpiMetric,
    /// Orders placed in the current period.
    pub orders: KpiMetric,
    /// Request error rate.
    pub error_rate: KpiMetric,
}

/// Sample snapshot used until a live data source is wired in.
#[must_use]
pub fn demo_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        revenue: KpiMetric {
            title: "Revenue".to_owned(),
            value: "$12,400".to_owned(),
            change: Some("+4.2%".to_owned()),
            tone: ChangeTone::Positive,
        },
        active_users: KpiMetric {
            title: "Active Users".to_owned(),
            value: "1,204".to_owned(),
            change: None,
            tone: ChangeTone::Neutral,
        },
        orders: KpiMetric {
            title: "Orders".to_owned(),
            value: "3,845".to_owned(),
            change: Some("0.0%".to_owned()),
            tone: ChangeTone::Neutral,
        },
        error_rate: KpiMetric {
            title: "Error Rate".to_owned(),
            value: "0.57%".to_owned(),
            change: Some("-12%".to_owned()),
            tone: ChangeTone::Negative,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_maps_to_classes_and_trends() {
        assert_eq!(ChangeTone::Positive.text_class(), "text-success font-medium");
        assert_eq!(ChangeTone::Negative.text_class(), "text-error font-medium");
        assert_eq!(ChangeTone::Neutral.text_class(), "text-base-content/70");
        assert_eq!(ChangeTone::Positive.trend(), Some(TrendDirection::Up));
        assert_eq!(ChangeTone::Negative.trend(), Some(TrendDirection::Down));
        assert_eq!(ChangeTone::Neutral.trend(), None);
    }

    #[test]
    fn metric_defaults_cover_missing_fields() {
        let metric: KpiMetric =
            serde_json::from_str(r#"{"title":"Errors","value":"57"}"#).unwrap();
        assert_eq!(metric.change, None);
        assert_eq!(metric.tone, ChangeTone::Neutral);
    }

    #[test]
    fn tone_uses_snake_case_wire_names() {
        let tone: ChangeTone = serde_json::from_str(r#""positive""#).unwrap();
        assert_eq!(tone, ChangeTone::Positive);
        assert_eq!(serde_json::to_string(&ChangeTone::Negative).unwrap(), r#""negative""#);
    }

    #[test]
    fn demo_snapshot_exercises_every_tone() {
        let snapshot = demo_snapshot();
        assert_eq!(snapshot.revenue.tone, ChangeTone::Positive);
        assert_eq!(snapshot.error_rate.tone, ChangeTone::Negative);
        assert_eq!(snapshot.orders.tone, ChangeTone::Neutral);
        assert!(snapshot.active_users.change.is_none());
    }
}

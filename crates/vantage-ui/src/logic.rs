//! Pure UI helpers extracted from components for non-wasm testing.

use crate::models::{ChangeTone, TrendDirection};

/// Resolved presentation of a KPI card change row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeRow<'a> {
    /// The delta text, passed through verbatim.
    pub text: &'a str,
    /// Utility classes for the text span.
    pub text_class: &'static str,
    /// Trend glyph to draw ahead of the text, if any.
    pub trend: Option<TrendDirection>,
}

/// Resolve the optional change row for a card.
///
/// Returns `None` when the change string is absent, empty, or
/// whitespace-only; the tone has no effect in that case.
#[must_use]
pub fn change_row(change: Option<&str>, tone: ChangeTone) -> Option<ChangeRow<'_>> {
    let text = change.filter(|value| !value.trim().is_empty())?;
    Some(ChangeRow {
        text,
        text_class: tone.text_class(),
        trend: tone.trend(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_blank_change_yields_no_row() {
        assert_eq!(change_row(None, ChangeTone::Positive), None);
        assert_eq!(change_row(Some(""), ChangeTone::Negative), None);
        assert_eq!(change_row(Some("   "), ChangeTone::Positive), None);
    }

    #[test]
    fn positive_row_trends_up_in_success_color() {
        let row = change_row(Some("+4.2%"), ChangeTone::Positive).unwrap();
        assert_eq!(row.text, "+4.2%");
        assert_eq!(row.trend, Some(TrendDirection::Up));
        assert!(row.text_class.contains("text-success"));
    }

    #[test]
    fn negative_row_trends_down_in_error_color() {
        let row = change_row(Some("-12%"), ChangeTone::Negative).unwrap();
        assert_eq!(row.text, "-12%");
        assert_eq!(row.trend, Some(TrendDirection::Down));
        assert!(row.text_class.contains("text-error"));
    }

    #[test]
    fn neutral_row_has_no_glyph() {
        let row = change_row(Some("0.0%"), ChangeTone::Neutral).unwrap();
        assert_eq!(row.trend, None);
        assert!(row.text_class.contains("text-base-content"));
    }

    #[test]
    fn default_tone_behaves_like_neutral() {
        let row = change_row(Some("0.3%"), ChangeTone::default()).unwrap();
        assert_eq!(row.trend, None);
    }
}

// File: crates/chart-core/src/tooltip.rs
// Summary: Hover tooltip state machine (Hidden / Visible) and its label formatting.

use chrono::{Datelike, NaiveDate};

use crate::dataset::DataPoint;

/// Opacity applied while a bar is hovered.
pub const VISIBLE_OPACITY: f64 = 0.9;
/// Offset from the pointer's page position to the tooltip's top-left corner.
pub const POINTER_OFFSET: (f64, f64) = (10.0, -28.0);

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Tooltip {
    #[default]
    Hidden,
    Visible {
        date: NaiveDate,
        raw_date: String,
        value: f64,
        /// Page coordinates of the tooltip's top-left corner.
        x: f64,
        y: f64,
    },
}

impl Tooltip {
    /// Hover-enter on a bar with the pointer at page coordinates `pointer`.
    /// Re-entering while visible replaces the content.
    pub fn on_enter(&mut self, point: &DataPoint, pointer: (f64, f64)) {
        *self = Tooltip::Visible {
            date: point.date(),
            raw_date: point.raw_date().to_string(),
            value: point.value(),
            x: pointer.0 + POINTER_OFFSET.0,
            y: pointer.1 + POINTER_OFFSET.1,
        };
    }

    pub fn on_leave(&mut self) {
        *self = Tooltip::Hidden;
    }

    pub fn is_visible(&self) -> bool { matches!(self, Tooltip::Visible { .. }) }

    pub fn opacity(&self) -> f64 {
        if self.is_visible() { VISIBLE_OPACITY } else { 0.0 }
    }

    /// Inner HTML of the tooltip element.
    pub fn html(&self) -> Option<String> {
        match self {
            Tooltip::Visible { date, value, .. } => Some(tooltip_html(*date, *value)),
            Tooltip::Hidden => None,
        }
    }

    /// `data-date` of the hovered point.
    pub fn data_date(&self) -> Option<&str> {
        match self {
            Tooltip::Visible { raw_date, .. } => Some(raw_date.as_str()),
            Tooltip::Hidden => None,
        }
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            Tooltip::Visible { x, y, .. } => Some((*x, *y)),
            Tooltip::Hidden => None,
        }
    }

    /// Inline CSS for the tooltip element.
    pub fn style(&self) -> String {
        match self.position() {
            Some((x, y)) => format!("opacity: {}; left: {}px; top: {}px;", self.opacity(), x, y),
            None => format!("opacity: {};", self.opacity()),
        }
    }
}

/// `1950 Q1`: calendar year and quarter of the month.
pub fn quarter_label(date: NaiveDate) -> String {
    format!("{} Q{}", date.year(), date.month0() / 3 + 1)
}

/// `1950 Q1<br>$243.1 Billion`
pub fn tooltip_html(date: NaiveDate, value: f64) -> String {
    format!("{}<br>${} Billion", quarter_label(date), value)
}

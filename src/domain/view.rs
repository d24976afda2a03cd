// Rendered view model - pure function of session + dataset
use super::device::{Dataset, Device, HISTORY_DAYS};
use super::session::{Screen, Session};
use serde::Serialize;

pub const CHART_TITLE: &str = "Usage in Hours Over Last 30 Days";
pub const X_AXIS_TITLE: &str = "Day";
pub const Y_AXIS_TITLE: &str = "Usage Hours";
pub const SERIES_NAME: &str = "Usage in Hours";

/// Color classification of a single day's usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub fn classify(hours: u32) -> Self {
        if hours > 15 {
            Tier::High
        } else if hours > 7 {
            Tier::Medium
        } else {
            Tier::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Tier::High => "#FF9999",
            Tier::Medium => "#FFD580",
            Tier::Low => "#90EE90",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: u32,
    pub tier: Tier,
    pub color: &'static str,
    /// Height relative to the tallest bar, 0..=100.
    pub height_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub series_name: &'static str,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLabels {
    pub best: String,
    pub normal: String,
    pub worst: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorButton {
    pub id: String,
    pub healthy: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub screen: Screen,
    pub login_visible: bool,
    pub dashboard_visible: bool,
    pub selected_device: String,
    pub selectors: Vec<SelectorButton>,
    pub stats: StatLabels,
    pub chart: ChartData,
}

/// `"Day 1"` through `"Day 30"`.
pub fn day_labels() -> Vec<String> {
    (1..=HISTORY_DAYS).map(|day| format!("Day {day}")).collect()
}

pub fn stat_labels(device: &Device) -> StatLabels {
    StatLabels {
        best: format!("Best: {} hrs", device.best),
        normal: format!("Normal: {} hrs", device.normal),
        worst: format!("Worst: {} hrs", device.worst),
    }
}

pub fn chart(device: &Device) -> ChartData {
    let max = device.last_30_days.iter().copied().max().unwrap_or(0);
    let bars = day_labels()
        .into_iter()
        .zip(&device.last_30_days)
        .map(|(label, &value)| {
            let tier = Tier::classify(value);
            Bar {
                label,
                value,
                tier,
                color: tier.color(),
                height_pct: if max == 0 {
                    0
                } else {
                    (u64::from(value) * 100 / u64::from(max)) as u32
                },
            }
        })
        .collect();

    ChartData {
        title: CHART_TITLE,
        x_title: X_AXIS_TITLE,
        y_title: Y_AXIS_TITLE,
        series_name: SERIES_NAME,
        bars,
    }
}

pub fn render(session: &Session, dataset: &Dataset) -> DashboardView {
    let device = dataset.get_or_first(session.selected_index);
    let selectors = dataset
        .devices()
        .iter()
        .map(|d| SelectorButton {
            id: d.id.clone(),
            healthy: d.status.is_healthy(),
            selected: d.id == device.id,
        })
        .collect();

    DashboardView {
        screen: session.screen(),
        login_visible: !session.authenticated,
        dashboard_visible: session.authenticated,
        selected_device: device.id.clone(),
        selectors,
        stats: stat_labels(device),
        chart: chart(device),
    }
}

use serde::{Deserialize, Serialize};

/// Direction a metric moved since the previous period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Colour hint attached to a displayed value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Success,
    Danger,
    Primary,
}

impl Tone {
    pub fn text_class(&self) -> &'static str {
        match self {
            Tone::Success => "text-success",
            Tone::Danger => "text-error",
            Tone::Primary => "text-primary",
        }
    }
}

/// A headline figure shown on the dashboard.
///
/// `value` and `change` arrive already formatted; the metric is never
/// recomputed on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub tone: Tone,
}

impl Metric {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        change: impl Into<String>,
        trend: Trend,
        tone: Tone,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: change.into(),
            trend,
            tone,
        }
    }
}

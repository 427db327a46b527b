use serde::Serialize;

/// One display unit on the device. Label and value frames carry an icon and
/// a text line; the graph frame carries the sparkline data.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Frame {
    Label {
        icon: String,
        text: String,
    },
    Value {
        icon: String,
        text: String,
    },
    Graph {
        #[serde(rename = "chartData")]
        chart_data: Vec<f64>,
    },
}

/// Wire shape the device app polls: `{"frames": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct FramesResponse {
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Info,
    Warning,
    Critical,
}

impl Priority {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

/// Notification sound, played by the device.
#[derive(Debug, Clone, Serialize)]
pub struct Sound {
    pub category: String,
    pub id: String,
    pub repeat: u32,
}

impl Sound {
    /// `repeat = 0` plays the sound until the notification is dismissed.
    pub fn new(id: impl Into<String>, repeat: u32) -> Self {
        Self {
            category: "notifications".to_string(),
            id: id.into(),
            repeat,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationModel {
    pub frames: Vec<Frame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<Sound>,
}

/// Push payload for the device notification endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub priority: Priority,
    pub model: NotificationModel,
}

impl Notification {
    pub fn new(priority: Priority, frames: Vec<Frame>, sound: Option<Sound>) -> Self {
        Self {
            priority,
            model: NotificationModel { frames, sound },
        }
    }
}

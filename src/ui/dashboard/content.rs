//! Static dashboard content.
//!
//! Every value shown on the page is a constant defined here.

use crate::ui::theme::ColorToken;

pub const PAGE_TITLE: &str = "Security Dashboard";

pub mod titles {
    pub const SCORE: &str = "Security Score";
    pub const THREATS: &str = "Threat Protection";
    pub const HEALTH: &str = "System Health";
    pub const RISK_AREAS: &str = "Risk Areas";
    pub const PRIORITY_ACTIONS: &str = "Priority Actions";
    pub const BUSINESS_IMPACT: &str = "Business Impact";
}

/// Glyphs standing in for the web icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Shield,
    Zap,
    Activity,
    AlertTriangle,
    Building,
    ArrowUp,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Shield => "◈",
            Icon::Zap => "ϟ",
            Icon::Activity => "∿",
            Icon::AlertTriangle => "▲",
            Icon::Building => "▦",
            Icon::ArrowUp => "↑",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Priority {
    Critical,
    High,
    Medium,
}

pub struct SecurityScore {
    pub percent: f64,
    /// Ring size in drawing units.
    pub diameter: f64,
    pub stroke_width: f64,
    pub color: ColorToken,
    pub standing: &'static str,
    pub trend: &'static str,
}

pub const SECURITY_SCORE: SecurityScore = SecurityScore {
    percent: 78.0,
    diameter: 120.0,
    stroke_width: 8.0,
    color: ColorToken::Emerald,
    standing: "Good Standing",
    trend: "↑ 12% from last month",
};

/// A labelled figure with an icon, as in the threat protection panel.
pub struct Counter {
    pub icon: Icon,
    pub icon_color: ColorToken,
    pub label: &'static str,
    pub value: &'static str,
    pub value_color: ColorToken,
}

pub const THREAT_COUNTERS: [Counter; 2] = [
    Counter {
        icon: Icon::Shield,
        icon_color: ColorToken::Emerald,
        label: "Threats Blocked",
        value: "1,284",
        value_color: ColorToken::Cyan,
    },
    Counter {
        icon: Icon::Zap,
        icon_color: ColorToken::Cyan,
        label: "Prevention Rate",
        value: "99.8%",
        value_color: ColorToken::Emerald,
    },
];

pub struct HealthStatus {
    pub icon: Icon,
    pub label: &'static str,
    pub status: &'static str,
}

pub const SYSTEM_HEALTH: HealthStatus = HealthStatus {
    icon: Icon::Activity,
    label: "Overall Status",
    status: "Healthy",
};

pub struct RiskArea {
    pub label: &'static str,
    pub value: u16,
    pub color: ColorToken,
}

pub const RISK_AREAS: [RiskArea; 4] = [
    RiskArea {
        label: "Network Security",
        value: 85,
        color: ColorToken::Emerald,
    },
    RiskArea {
        label: "Data Protection",
        value: 92,
        color: ColorToken::Cyan,
    },
    RiskArea {
        label: "Access Control",
        value: 78,
        color: ColorToken::Teal,
    },
    RiskArea {
        label: "Compliance",
        value: 95,
        color: ColorToken::Green,
    },
];

pub struct PriorityAction {
    pub icon: Icon,
    pub text: &'static str,
    pub priority: Priority,
}

pub const PRIORITY_ACTIONS: [PriorityAction; 3] = [
    PriorityAction {
        icon: Icon::AlertTriangle,
        text: "Update firewall rules",
        priority: Priority::Critical,
    },
    PriorityAction {
        icon: Icon::Building,
        text: "Review access permissions",
        priority: Priority::High,
    },
    PriorityAction {
        icon: Icon::ArrowUp,
        text: "System update required",
        priority: Priority::Medium,
    },
];

pub struct ImpactTile {
    pub label: &'static str,
    pub value: &'static str,
}

pub const BUSINESS_IMPACT: [ImpactTile; 4] = [
    ImpactTile {
        label: "Operational Efficiency",
        value: "↑ 24%",
    },
    ImpactTile {
        label: "Cost Savings",
        value: "$12.5K",
    },
    ImpactTile {
        label: "Risk Reduction",
        value: "↓ 35%",
    },
    ImpactTile {
        label: "Compliance Score",
        value: "98/100",
    },
];

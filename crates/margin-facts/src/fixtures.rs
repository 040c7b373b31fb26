//! Demo data fixtures for the dashboard surface
//!
//! These would come from real-time monitoring and the warehouse in a
//! production deployment; the demo serves realistic canned values instead.

use serde::{Deserialize, Serialize};

/// An operational alert shown to store managers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalAlert {
    /// Stable alert identifier
    pub id: String,
    /// Short headline
    pub title: String,
    /// What was observed
    pub description: String,
    /// "high", "medium", or "low"
    pub severity: String,
    /// Recommended action
    pub action: String,
    /// Store the alert applies to, when store-specific
    pub store_id: Option<String>,
}

/// A dashboard key performance indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    /// Metric name
    pub name: String,
    /// Current value
    pub value: f64,
    /// Change against the comparison period, in percent or points
    pub change: f64,
    /// What the change is measured against
    pub period: String,
}

/// The demo operational alerts
pub fn demo_alerts() -> Vec<OperationalAlert> {
    vec![
        OperationalAlert {
            id: "alert_001".to_string(),
            title: "High Food Waste - Store #142".to_string(),
            description: "Orange Chicken waste is 15% above target. Consider reducing batch \
                size during slow periods."
                .to_string(),
            severity: "high".to_string(),
            action: "Reduce batch cooking by 20% between 2-4 PM".to_string(),
            store_id: Some("142".to_string()),
        },
        OperationalAlert {
            id: "alert_002".to_string(),
            title: "Labor Cost Alert - District 5".to_string(),
            description: "Labor costs are 2.3% above budget for the week. Review scheduling \
                optimization."
                .to_string(),
            severity: "medium".to_string(),
            action: "Review shift schedules and consider early releases during low traffic"
                .to_string(),
            store_id: None,
        },
        OperationalAlert {
            id: "alert_003".to_string(),
            title: "Inventory Shortage - Honey Walnut Shrimp".to_string(),
            description: "Projected stockout by Thursday based on current sales velocity."
                .to_string(),
            severity: "high".to_string(),
            action: "Coordinate with supply chain for emergency delivery".to_string(),
            store_id: None,
        },
    ]
}

/// The demo KPIs served when no fact data is available
pub fn demo_kpis() -> Vec<Kpi> {
    vec![
        Kpi {
            name: "Revenue".to_string(),
            value: 2_845_000.0,
            change: 5.2,
            period: "vs last month".to_string(),
        },
        Kpi {
            name: "EBITDA Margin".to_string(),
            value: 18.5,
            change: -0.8,
            period: "vs last month".to_string(),
        },
        Kpi {
            name: "Labor %".to_string(),
            value: 28.2,
            change: 1.2,
            period: "vs target".to_string(),
        },
        Kpi {
            name: "Transactions".to_string(),
            value: 156_789.0,
            change: 3.1,
            period: "vs last month".to_string(),
        },
    ]
}

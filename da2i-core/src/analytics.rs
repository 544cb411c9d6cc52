//! Page-view analytics commands.
//!
//! The analytics loader exposes a global command queue; each command is a
//! positional argument list such as `ga('create', 'UA-...', 'auto')`. This
//! module decides which commands a page load sends, the web crate pushes
//! them.

use serde_json::{json, Value};

use crate::config::DashboardConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsCommand {
    /// Register a tracker
    Create {
        tracking_id: String,
        cookie_domain: String,
    },
    /// Set a tracker field
    Set { field: String, value: Value },
    /// Send a hit of the given type
    Send { hit_type: String },
}

impl AnalyticsCommand {
    /// Positional arguments for the queue function.
    pub fn to_args(&self) -> Vec<Value> {
        match self {
            AnalyticsCommand::Create {
                tracking_id,
                cookie_domain,
            } => vec![json!("create"), json!(tracking_id), json!(cookie_domain)],
            AnalyticsCommand::Set { field, value } => {
                vec![json!("set"), json!(field), value.clone()]
            }
            AnalyticsCommand::Send { hit_type } => vec![json!("send"), json!(hit_type)],
        }
    }
}

/// Commands sent once per page load: create the tracker, anonymize the
/// client IP and record one page view.
pub fn bootstrap_commands(config: &DashboardConfig) -> Vec<AnalyticsCommand> {
    vec![
        AnalyticsCommand::Create {
            tracking_id: config.tracking_id.clone(),
            cookie_domain: config.cookie_domain.clone(),
        },
        AnalyticsCommand::Set {
            field: "anonymizeIp".to_string(),
            value: Value::Bool(config.anonymize_ip),
        },
        AnalyticsCommand::Send {
            hit_type: "pageview".to_string(),
        },
    ]
}

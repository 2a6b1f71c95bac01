//! Parameter presence rule evaluation.

use harmony_domain::{MediaEvent, ParamRule};

/// Validate parameter presence for each event against `rules`.
///
/// A rule applies to an event when `rule.on` is `"All"` or equals the
/// event's `type`. Returns one violation per (event, missing parameter)
/// pair, in encounter order.
#[must_use]
pub fn validate_param_rules(events: &[MediaEvent], rules: &[ParamRule]) -> Vec<String> {
    let mut violations = Vec::new();

    for event in events {
        for rule in rules {
            if rule.on != "All" && rule.on != event.event_type {
                continue;
            }
            for name in &rule.require {
                if event.param(name).is_none() {
                    violations.push(format!(
                        "{} missing required parameter {}",
                        event.event_type, name
                    ));
                }
            }
        }
    }

    violations
}

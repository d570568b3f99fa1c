//! Seam between placement plans and a CAD host.
//!
//! The crate never touches CAD geometry. A host resolves the footprint the
//! user picked and implements [`FootprintHost`]; [`PlacementPlan::apply_to`]
//! then drives it: one group, one instance per key, then the template is
//! hidden.

use tracing::debug;

use crate::services::placement::{Placement, PlacementPlan};

/// Operations a CAD host performs to realize a placement plan.
///
/// Errors such as an invalid footprint selection belong to the host and are
/// reported through [`FootprintHost::Error`].
pub trait FootprintHost {
    /// Host-specific error
    type Error;

    /// Creates the container every instance is grouped under.
    fn create_group(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Creates one footprint instance at the placement's transform.
    fn place_instance(&mut self, placement: &Placement) -> Result<(), Self::Error>;

    /// Hides the original footprint the instances were copied from.
    fn hide_template(&mut self) -> Result<(), Self::Error>;
}

impl PlacementPlan {
    /// Drives a host through the plan, stopping at the first host error.
    pub fn apply_to<H: FootprintHost>(&self, host: &mut H) -> Result<(), H::Error> {
        host.create_group(&self.group_name)?;
        for placement in &self.placements {
            host.place_instance(placement)?;
        }
        if self.hide_template {
            host.hide_template()?;
        }
        debug!(instances = self.placements.len(), group = %self.group_name, "applied placement plan");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Spacing;
    use crate::parser::decode_layout;
    use serde_json::json;

    #[derive(Debug, Default)]
    struct RecordingHost {
        calls: Vec<String>,
        fail_at: Option<usize>,
    }

    impl FootprintHost for RecordingHost {
        type Error = String;

        fn create_group(&mut self, name: &str) -> Result<(), String> {
            self.calls.push(format!("group {name}"));
            Ok(())
        }

        fn place_instance(&mut self, placement: &Placement) -> Result<(), String> {
            if self.fail_at == Some(placement.index) {
                return Err(format!("cannot place key {}", placement.index));
            }
            let [x, y, _] = placement.transform.translation;
            self.calls.push(format!("place {} at ({x}, {y})", placement.key.primary_label()));
            Ok(())
        }

        fn hide_template(&mut self) -> Result<(), String> {
            self.calls.push("hide".to_string());
            Ok(())
        }
    }

    fn plan() -> PlacementPlan {
        let layout = decode_layout(&json!([["a", "b"]])).unwrap();
        PlacementPlan::build(&layout, Spacing::uniform(1.0), "Switches")
    }

    #[test]
    fn test_apply_calls_host_in_order() {
        let mut host = RecordingHost::default();
        plan().apply_to(&mut host).unwrap();

        assert_eq!(
            host.calls,
            vec![
                "group Switches",
                "place a at (0.5, -0.5)",
                "place b at (1.5, -0.5)",
                "hide",
            ]
        );
    }

    #[test]
    fn test_apply_without_hiding_template() {
        let mut plan = plan();
        plan.hide_template = false;
        let mut host = RecordingHost::default();
        plan.apply_to(&mut host).unwrap();

        assert_eq!(host.calls.last().map(String::as_str), Some("place b at (1.5, -0.5)"));
    }

    #[test]
    fn test_apply_stops_at_host_error() {
        let mut host = RecordingHost {
            fail_at: Some(1),
            ..RecordingHost::default()
        };
        let err = plan().apply_to(&mut host).unwrap_err();

        assert_eq!(err, "cannot place key 1");
        assert_eq!(host.calls, vec!["group Switches", "place a at (0.5, -0.5)"]);
    }
}

//! Moving-mode ("chase") scroll on the X axis.
//!
//! The camera scrolls right at a fixed pace. A subject that drops behind the
//! left edge of the view is reported as fallen behind every tick it stays
//! there. A subject that catches up into the center band while still moving
//! right pulls the camera along with it until it stalls or drops back behind
//! center, after which the fixed-pace scroll resumes.

use crate::config::ChaseConfig;

/// Result of one chase update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseStep {
    /// New camera X.
    pub camera_x: f32,
    /// Subject was left of the camera's left edge this tick.
    pub fell_behind: bool,
}

/// Leash state carried between ticks while X is in `Moving`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChaseState {
    last_subject_x: f32,
    advancing: bool,
    centered: bool,
    tracking: bool,
}

impl ChaseState {
    pub fn new(subject_x: f32) -> Self {
        Self {
            last_subject_x: subject_x,
            ..Self::default()
        }
    }

    /// Restarts the leash around the subject's current X.
    pub fn reset(&mut self, subject_x: f32) {
        *self = Self::new(subject_x);
    }

    /// Clears the advancing, centered and tracking flags.
    pub fn clear_flags(&mut self) {
        self.advancing = false;
        self.centered = false;
        self.tracking = false;
    }

    pub fn last_subject_x(&self) -> f32 {
        self.last_subject_x
    }

    pub fn is_advancing(&self) -> bool {
        self.advancing
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    /// Camera is locked onto the subject instead of scrolling on its own.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Runs one tick against the camera's current X.
    pub fn update(
        &mut self,
        camera_x: f32,
        subject_x: f32,
        half_width: f32,
        config: &ChaseConfig,
        dt: f32,
    ) -> ChaseStep {
        self.advancing = (subject_x - self.last_subject_x).abs() > config.movement_threshold;
        self.last_subject_x = subject_x;

        let left_edge = camera_x - half_width;
        let fell_behind = subject_x < left_edge;

        self.centered = (subject_x - camera_x).abs() < config.center_zone_fraction * half_width;

        if self.centered && self.advancing && subject_x > camera_x {
            self.tracking = true;
        } else if self.tracking && (!self.advancing || subject_x <= camera_x) {
            self.tracking = false;
        }

        let camera_x = if self.tracking {
            subject_x
        } else {
            camera_x + config.speed * dt
        };

        ChaseStep {
            camera_x,
            fell_behind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn config(speed: f32) -> ChaseConfig {
        ChaseConfig {
            speed,
            ..ChaseConfig::default()
        }
    }

    #[test]
    fn test_fixed_pace_scroll_with_stationary_subject() {
        let config = config(5.0);
        let mut chase = ChaseState::new(20.0);
        let mut camera_x = 0.0;

        for _ in 0..60 {
            let step = chase.update(camera_x, 20.0, 5.0, &config, DT);
            assert!(!step.fell_behind);
            camera_x = step.camera_x;
        }

        assert!((camera_x - 5.0).abs() < 0.001);
        assert!(!chase.is_tracking());
        assert!(!chase.is_advancing());
    }

    #[test]
    fn test_fell_behind_left_edge() {
        let config = config(5.0);
        let mut chase = ChaseState::new(4.0);

        let step = chase.update(10.0, 4.0, 5.0, &config, DT);
        assert!(step.fell_behind);

        // Exactly on the edge is not behind it.
        let mut chase = ChaseState::new(5.0);
        let step = chase.update(10.0, 5.0, 5.0, &config, DT);
        assert!(!step.fell_behind);
    }

    #[test]
    fn test_tracking_engages_in_center_band_while_advancing() {
        let config = config(1.0);
        let mut chase = ChaseState::new(10.0);

        // Subject steps from 10.0 to 10.2: inside the 0.5 band, moving right, ahead of center.
        let step = chase.update(10.0, 10.2, 5.0, &config, DT);
        assert!(chase.is_centered());
        assert!(chase.is_advancing());
        assert!(chase.is_tracking());
        assert!((step.camera_x - 10.2).abs() < f32::EPSILON);

        // Keeps snapping while the subject keeps running, even past the band.
        let step = chase.update(step.camera_x, 11.5, 5.0, &config, DT);
        assert!(chase.is_tracking());
        assert!((step.camera_x - 11.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tracking_releases_when_subject_stalls() {
        let config = config(2.0);
        let mut chase = ChaseState::new(10.0);

        let step = chase.update(10.0, 10.2, 5.0, &config, DT);
        assert!(chase.is_tracking());

        let step = chase.update(step.camera_x, 10.2, 5.0, &config, DT);
        assert!(!chase.is_tracking());
        assert!((step.camera_x - (10.2 + 2.0 * DT)).abs() < 0.0001);
    }

    #[test]
    fn test_tracking_releases_when_subject_drops_behind_center() {
        let config = config(2.0);
        let mut chase = ChaseState::new(10.0);

        chase.update(10.0, 10.2, 5.0, &config, DT);
        assert!(chase.is_tracking());

        // Moving, but now left of camera center.
        chase.update(10.2, 9.9, 5.0, &config, DT);
        assert!(!chase.is_tracking());
    }

    #[test]
    fn test_subject_outside_band_does_not_engage() {
        let config = config(1.0);
        let mut chase = ChaseState::new(12.0);

        chase.update(10.0, 13.0, 5.0, &config, DT);
        assert!(chase.is_advancing());
        assert!(!chase.is_centered());
        assert!(!chase.is_tracking());
    }

    #[test]
    fn test_reset_clears_flags() {
        let config = config(1.0);
        let mut chase = ChaseState::new(10.0);
        chase.update(10.0, 10.2, 5.0, &config, DT);
        assert!(chase.is_tracking());

        chase.reset(3.0);
        assert!(!chase.is_tracking());
        assert!(!chase.is_centered());
        assert!((chase.last_subject_x() - 3.0).abs() < f32::EPSILON);
    }
}

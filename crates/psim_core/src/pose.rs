/// 2D pose: position on the ground plane plus heading (yaw, radians).
///
/// Both simulator estimates (`commanded`, `drifted`) are this shape.
/// Fields accumulate additively and are never reset or clamped.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Pose2d {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Pose2d {
    pub const ZERO: Pose2d = Pose2d {
        x: 0.0,
        y: 0.0,
        heading: 0.0,
    };

    /// Shift every field by the given deltas.
    pub fn shift(&mut self, dx: f64, dy: f64, dheading: f64) {
        self.x += dx;
        self.y += dy;
        self.heading += dheading;
    }
}

/// Inbound mecanum-wheel command.
///
/// All values are accepted unconditionally; there is no validation and no
/// error path on this type by contract.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct WheelCommand {
    pub vec_x: f64,
    pub vec_y: f64,
    pub rotation_power: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_accumulates_per_field() {
        let mut pose = Pose2d::ZERO;
        pose.shift(1.0, -2.0, 0.5);
        pose.shift(0.5, 0.5, 0.25);

        assert_eq!(pose.x, 1.5);
        assert_eq!(pose.y, -1.5);
        assert_eq!(pose.heading, 0.75);
    }
}

// src/animation/vehicle_motion.rs
//
// Delayed, eased tweens for vehicle position and opacity.
// A tween starting in the future holds its `from` value until the
// delay has passed, the same way a delayed CSS transition does.

use nannou::prelude::*;

use super::EasingType;

pub trait Lerp: Copy {
    fn lerp_to(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Vec2 {
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

#[derive(Debug, Clone)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    start_time: f32,
    duration: f32,
    easing: EasingType,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start_time: f32, duration: f32, easing: EasingType) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
            easing,
        }
    }

    pub fn value_at(&self, time: f32) -> T {
        if time <= self.start_time {
            return self.from;
        }
        if self.is_complete(time) {
            return self.to;
        }
        let t = (time - self.start_time) / self.duration;
        self.from.lerp_to(self.to, self.easing.apply(t))
    }

    pub fn is_complete(&self, time: f32) -> bool {
        time >= self.start_time + self.duration.max(0.0)
    }
}

/// Timing of one vehicle move.
#[derive(Debug, Clone, Copy)]
pub struct MotionTiming {
    pub duration: f32,
    pub easing: EasingType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delayed_tween_holds_start() {
        let tween = Tween::new(0.0_f32, 10.0, 2.0, 1.0, EasingType::Linear);
        assert_eq!(tween.value_at(0.0), 0.0);
        assert_eq!(tween.value_at(2.0), 0.0);
        assert_eq!(tween.value_at(2.5), 5.0);
        assert_eq!(tween.value_at(3.0), 10.0);
        assert_eq!(tween.value_at(10.0), 10.0);
        assert!(!tween.is_complete(2.9));
        assert!(tween.is_complete(3.0));
    }

    #[test]
    fn test_point_tween() {
        let tween = Tween::new(pt2(0.0, 0.0), pt2(100.0, -50.0), 0.0, 2.0, EasingType::Linear);
        assert_eq!(tween.value_at(1.0), pt2(50.0, -25.0));
        assert_eq!(tween.value_at(2.0), pt2(100.0, -50.0));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let tween = Tween::new(1.0_f32, 0.0, 0.5, 0.0, EasingType::EaseInOut);
        assert_eq!(tween.value_at(0.5), 1.0);
        assert_eq!(tween.value_at(0.51), 0.0);
        assert!(tween.is_complete(0.5));
    }
}

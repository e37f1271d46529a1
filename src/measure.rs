use crate::geometry::Size;

/// Space a container offers along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The container imposes no constraint.
    Unspecified,
    AtMost(u32),
    Exactly(u32),
}

impl MeasureSpec {
    fn resolve(self, fallback: u32) -> u32 {
        match self {
            MeasureSpec::Unspecified => fallback,
            MeasureSpec::AtMost(size) | MeasureSpec::Exactly(size) => size,
        }
    }
}

/// The face is always square: the shorter of the two offered sides, with
/// `fallback` standing in for an unconstrained axis. The edge is at least 1.
pub fn measure(width: MeasureSpec, height: MeasureSpec, fallback: u32) -> Size {
    let edge = width.resolve(fallback).min(height.resolve(fallback)).max(1);
    Size::square(edge)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_shorter_side() {
        let size = measure(MeasureSpec::Exactly(800), MeasureSpec::Exactly(600), 500);
        assert_eq!(size, Size::new(600, 600));

        let size = measure(MeasureSpec::AtMost(300), MeasureSpec::Exactly(900), 500);
        assert_eq!(size, Size::new(300, 300));
    }

    #[test]
    fn unconstrained_uses_fallback() {
        let size = measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified, 500);
        assert_eq!(size, Size::new(500, 500));
    }

    #[test]
    fn one_unconstrained_axis() {
        let size = measure(MeasureSpec::Unspecified, MeasureSpec::Exactly(420), 500);
        assert_eq!(size, Size::square(420));

        let size = measure(MeasureSpec::Exactly(900), MeasureSpec::Unspecified, 500);
        assert_eq!(size, Size::square(500));
    }

    #[test]
    fn zero_sizes_clamp_to_one() {
        let size = measure(MeasureSpec::Exactly(0), MeasureSpec::Exactly(600), 500);
        assert_eq!(size, Size::square(1));

        let size = measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified, 0);
        assert_eq!(size, Size::square(1));
    }
}

use crate::error::WindowError;
use crate::geometry::{Rectangle, Size};

/// Optional minimum and maximum window size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeConstraint {
    pub min: Option<Size>,
    pub max: Option<Size>,
}

impl SizeConstraint {
    pub const fn new(min: Option<Size>, max: Option<Size>) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<(), WindowError> {
        for size in [self.min, self.max].into_iter().flatten() {
            if size.is_negative() {
                return Err(WindowError::NegativeSize(size));
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max)
            && (min.width > max.width || min.height > max.height)
        {
            return Err(WindowError::InvertedSizeConstraint { min, max });
        }
        Ok(())
    }

    /// Clamp the size of `rect`, leaving its origin in place.
    ///
    /// The minimum is applied first and the maximum second, so an inverted
    /// pair resolves to the maximum.
    pub fn clamp(&self, rect: Rectangle) -> Rectangle {
        let mut clamped = rect;
        if let Some(min) = self.min {
            if clamped.width() < min.width {
                clamped = clamped.with_max_x(clamped.min().x.saturating_add(min.width));
            }
            if clamped.height() < min.height {
                clamped = clamped.with_max_y(clamped.min().y.saturating_add(min.height));
            }
        }
        if let Some(max) = self.max {
            if clamped.width() > max.width {
                clamped = clamped.with_max_x(clamped.min().x.saturating_add(max.width));
            }
            if clamped.height() > max.height {
                clamped = clamped.with_max_y(clamped.min().y.saturating_add(max.height));
            }
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn bounded() -> SizeConstraint {
        SizeConstraint::new(Some(Size::new(100, 50)), Some(Size::new(400, 300)))
    }

    #[test]
    fn unconstrained_rect_is_untouched() {
        let r = Rectangle::new(-4, 2, 30, 9);
        assert_eq!(SizeConstraint::default().clamp(r), r);
    }

    #[test]
    fn clamp_keeps_origin_and_bounds_size() {
        let c = bounded();
        for (w, h) in [(0, 0), (99, 49), (100, 50), (250, 120), (400, 300), (1000, 900)] {
            let r = Rectangle::from_origin_size(Point::new(-7, 13), Size::new(w, h));
            let out = c.clamp(r);
            assert_eq!(out.min(), r.min());
            assert!((100..=400).contains(&out.width()), "width {}", out.width());
            assert!((50..=300).contains(&out.height()), "height {}", out.height());
        }
    }

    #[test]
    fn only_min_or_only_max() {
        let r = Rectangle::new(0, 0, 5, 500);
        let min_only = SizeConstraint::new(Some(Size::new(10, 10)), None);
        assert_eq!(min_only.clamp(r).size(), Size::new(10, 500));
        let max_only = SizeConstraint::new(None, Some(Size::new(100, 100)));
        assert_eq!(max_only.clamp(r).size(), Size::new(5, 100));
    }

    #[test]
    fn huge_minimum_saturates_at_the_coordinate_limit() {
        let c = SizeConstraint::new(Some(Size::new(i32::MAX, 1)), None);
        let out = c.clamp(Rectangle::new(10, 10, 20, 20));
        assert_eq!(out.min(), Point::new(10, 10));
        assert_eq!(out.max().x, i32::MAX);
        assert_eq!(out.height(), 10);

        let max_only = SizeConstraint::new(None, Some(Size::new(i32::MAX, i32::MAX)));
        let r = Rectangle::new(-5, -5, 100, 100);
        assert_eq!(max_only.clamp(r), r);
    }

    #[test]
    fn inverted_bounds_resolve_to_max() {
        let c = SizeConstraint::new(Some(Size::new(50, 50)), Some(Size::new(20, 30)));
        assert_eq!(c.clamp(Rectangle::new(0, 0, 5, 5)).size(), Size::new(20, 30));
    }

    #[test]
    fn validate_rejects_inverted_and_negative() {
        assert!(bounded().validate().is_ok());
        let inverted = SizeConstraint::new(Some(Size::new(50, 10)), Some(Size::new(20, 30)));
        assert_eq!(
            inverted.validate(),
            Err(WindowError::InvertedSizeConstraint {
                min: Size::new(50, 10),
                max: Size::new(20, 30)
            })
        );
        let negative = SizeConstraint::new(None, Some(Size::new(-1, 3)));
        assert_eq!(
            negative.validate(),
            Err(WindowError::NegativeSize(Size::new(-1, 3)))
        );
    }
}

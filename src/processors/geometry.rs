//! Geometric primitives for region detection.
//!
//! This module provides the axis-aligned rectangle type used to describe
//! detected regions, along with conversions from imageproc contours.

use imageproc::contours::Contour;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in pixel coordinates.
///
/// `(x, y)` is the top-left corner; `w` and `h` are the extent. A `Rect`
/// produced by region extraction is always fully contained within the page
/// it was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// X-coordinate of the top-left corner.
    pub x: u32,
    /// Y-coordinate of the top-left corner.
    pub y: u32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and extent.
    #[inline]
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Computes the bounding rectangle of a contour's points.
    ///
    /// Returns `None` for an empty contour. The rectangle is inclusive of
    /// every contour point, so a contour tracing the border of a solid blob
    /// yields the blob's exact pixel bounding box.
    pub fn from_contour(contour: &Contour<u32>) -> Option<Self> {
        let first = contour.points.first()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in &contour.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            x: min_x,
            y: min_y,
            w: max_x - min_x + 1,
            h: max_y - min_y + 1,
        })
    }

    /// X-coordinate one past the right edge.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Y-coordinate one past the bottom edge.
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Number of pixels covered by the rectangle.
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.w) * u64::from(self.h)
    }

    /// Returns true if the rectangle lies entirely within a `width`x`height`
    /// image.
    ///
    /// Uses checked arithmetic so caller-constructed rectangles whose edges
    /// exceed `u32::MAX` are reported as not fitting instead of panicking.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.w > 0
            && self.h > 0
            && self.x.checked_add(self.w).is_some_and(|right| right <= width)
            && self.y.checked_add(self.h).is_some_and(|bottom| bottom <= height)
    }
}

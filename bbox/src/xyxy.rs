use super::{Rect, XYWH};
use crate::{common::*, Transform};

/// Bounding box in XYXY format, bounded by the (x0, y0) and (x1, y1) corners.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XYXY<T> {
    pub(crate) x0: T,
    pub(crate) y0: T,
    pub(crate) x1: T,
    pub(crate) y1: T,
}

impl<T> XYXY<T> {
    pub fn try_cast<V>(self) -> Option<XYXY<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(XYXY {
            x0: V::from(self.x0)?,
            y0: V::from(self.y0)?,
            x1: V::from(self.x1)?,
            y1: V::from(self.y1)?,
        })
    }
}

impl<T> XYXY<T>
where
    T: Copy + Num,
{
    pub fn transform(&self, transform: &Transform<T>) -> Self {
        XYXY {
            x0: self.x0 * transform.sx + transform.tx,
            y0: self.y0 * transform.sy + transform.ty,
            x1: self.x1 * transform.sx + transform.tx,
            y1: self.y1 * transform.sy + transform.ty,
        }
    }
}

impl<T> XYXY<T>
where
    T: Float,
{
    /// Truncates the corners toward zero and clamps them into `[0, x_limit]`
    /// and `[0, y_limit]`, yielding index ranges usable for slicing.
    pub fn to_index_ranges(
        &self,
        x_limit: usize,
        y_limit: usize,
    ) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let index = |value: T, limit: usize| -> usize {
            value
                .trunc()
                .to_usize()
                .unwrap_or(0)
                .min(limit)
        };
        let x0 = index(self.x0, x_limit);
        let y0 = index(self.y0, y_limit);
        let x1 = index(self.x1, x_limit).max(x0);
        let y1 = index(self.y1, y_limit).max(y0);
        (x0..x1, y0..y1)
    }
}

impl<T> Rect for XYXY<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn x_min(&self) -> Self::Type {
        self.x0
    }

    fn y_min(&self) -> Self::Type {
        self.y0
    }

    fn x_max(&self) -> Self::Type {
        self.x1
    }

    fn y_max(&self) -> Self::Type {
        self.y1
    }

    fn cx(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.x0 + self.w() / two
    }

    fn cy(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.y0 + self.h() / two
    }

    fn w(&self) -> Self::Type {
        self.x1 - self.x0
    }

    fn h(&self) -> Self::Type {
        self.y1 - self.y0
    }

    fn try_from_xywh(xywh: [Self::Type; 4]) -> Result<Self> {
        let [x, y, w, h] = xywh;
        Self::try_from_xyxy([x, y, x + w, y + h])
    }

    fn try_from_cxcywh(cxcywh: [Self::Type; 4]) -> Result<Self> {
        let [cx, cy, w, h] = cxcywh;
        let zero = T::zero();
        ensure!(w >= zero && h >= zero, "w and h must be non-negative");

        let two = T::one() + T::one();
        Ok(Self {
            x0: cx - w / two,
            y0: cy - h / two,
            x1: cx + w / two,
            y1: cy + h / two,
        })
    }

    fn try_from_xyxy(xyxy: [Self::Type; 4]) -> Result<Self> {
        let [x0, y0, x1, y1] = xyxy;
        ensure!(x1 >= x0 && y1 >= y0, "x1 >= x0 and y1 >= y0 must hold");

        Ok(Self { x0, y0, x1, y1 })
    }
}

impl<T> From<&XYWH<T>> for XYXY<T>
where
    T: Copy + Num,
{
    fn from(from: &XYWH<T>) -> Self {
        let XYWH { x, y, w, h } = *from;
        Self {
            x0: x,
            y0: y,
            x1: x + w,
            y1: y + h,
        }
    }
}

impl<T> From<XYWH<T>> for XYXY<T>
where
    T: Copy + Num,
{
    fn from(from: XYWH<T>) -> Self {
        Self::from(&from)
    }
}

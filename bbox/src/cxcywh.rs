use super::{Rect, XYWH};
use crate::{common::*, Transform};

/// Bounding box in CxCyWH format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CxCyWH<T> {
    pub(crate) cx: T,
    pub(crate) cy: T,
    pub(crate) w: T,
    pub(crate) h: T,
}

impl<T> CxCyWH<T> {
    pub fn try_cast<V>(self) -> Option<CxCyWH<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(CxCyWH {
            cx: V::from(self.cx)?,
            cy: V::from(self.cy)?,
            w: V::from(self.w)?,
            h: V::from(self.h)?,
        })
    }
}

impl<T> CxCyWH<T>
where
    T: Copy + Num,
{
    pub fn transform(&self, transform: &Transform<T>) -> Self {
        CxCyWH {
            cx: self.cx * transform.sx + transform.tx,
            cy: self.cy * transform.sy + transform.ty,
            w: self.w * transform.sx,
            h: self.h * transform.sy,
        }
    }
}

impl<T> Rect for CxCyWH<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn x_min(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.cx - self.w / two
    }

    fn y_min(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.cy - self.h / two
    }

    fn x_max(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.cx + self.w / two
    }

    fn y_max(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.cy + self.h / two
    }

    fn cx(&self) -> Self::Type {
        self.cx
    }

    fn cy(&self) -> Self::Type {
        self.cy
    }

    fn w(&self) -> Self::Type {
        self.w
    }

    fn h(&self) -> Self::Type {
        self.h
    }

    fn try_from_xywh(xywh: [T; 4]) -> Result<Self> {
        let [x, y, w, h] = xywh;
        let zero = T::zero();
        let two = T::one() + T::one();
        ensure!(
            w >= zero && h >= zero,
            "box width and height must be non-negative"
        );

        let cx = x + w / two;
        let cy = y + h / two;

        Ok(Self { cx, cy, w, h })
    }

    fn try_from_cxcywh(cxcywh: [T; 4]) -> Result<Self> {
        let [cx, cy, w, h] = cxcywh;
        let zero = T::zero();
        ensure!(
            w >= zero && h >= zero,
            "box width and height must be non-negative"
        );

        Ok(Self { cx, cy, w, h })
    }

    fn try_from_xyxy(xyxy: [T; 4]) -> Result<Self> {
        let [x0, y0, x1, y1] = xyxy;
        let zero = T::zero();
        let two = T::one() + T::one();
        let w = x1 - x0;
        let h = y1 - y0;
        ensure!(
            w >= zero && h >= zero,
            "box width and height must be non-negative"
        );

        let cx = x0 + w / two;
        let cy = y0 + h / two;

        Ok(Self { cx, cy, w, h })
    }
}

impl<T> From<XYWH<T>> for CxCyWH<T>
where
    T: Copy + Num,
{
    fn from(from: XYWH<T>) -> Self {
        Self::from(&from)
    }
}

impl<T> From<&XYWH<T>> for CxCyWH<T>
where
    T: Copy + Num,
{
    fn from(from: &XYWH<T>) -> Self {
        let two = T::one() + T::one();
        let XYWH { x, y, w, h } = *from;
        let cx = x + w / two;
        let cy = y + h / two;
        Self { cx, cy, w, h }
    }
}

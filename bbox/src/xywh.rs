use super::{CxCyWH, Rect};
use crate::{common::*, Transform};

/// Bounding box in XYWH format, where (x, y) is the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XYWH<T> {
    pub(crate) x: T,
    pub(crate) y: T,
    pub(crate) w: T,
    pub(crate) h: T,
}

impl<T> XYWH<T> {
    pub fn try_cast<V>(self) -> Option<XYWH<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(XYWH {
            x: V::from(self.x)?,
            y: V::from(self.y)?,
            w: V::from(self.w)?,
            h: V::from(self.h)?,
        })
    }
}

impl<T> XYWH<T>
where
    T: Copy + Num,
{
    pub fn transform(&self, transform: &Transform<T>) -> Self {
        XYWH {
            x: self.x * transform.sx + transform.tx,
            y: self.y * transform.sy + transform.ty,
            w: self.w * transform.sx,
            h: self.h * transform.sy,
        }
    }
}

impl<T> Rect for XYWH<T>
where
    T: Copy + Num + PartialOrd,
{
    type Type = T;

    fn x_min(&self) -> Self::Type {
        self.x
    }

    fn y_min(&self) -> Self::Type {
        self.y
    }

    fn x_max(&self) -> Self::Type {
        self.x + self.w
    }

    fn y_max(&self) -> Self::Type {
        self.y + self.h
    }

    fn cx(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.x + self.w / two
    }

    fn cy(&self) -> Self::Type {
        let two = T::one() + T::one();
        self.y + self.h / two
    }

    fn w(&self) -> Self::Type {
        self.w
    }

    fn h(&self) -> Self::Type {
        self.h
    }

    fn try_from_xywh(xywh: [Self::Type; 4]) -> Result<Self> {
        let [x, y, w, h] = xywh;
        let zero = T::zero();
        ensure!(w >= zero && h >= zero, "w and h must be non-negative");

        Ok(Self { x, y, w, h })
    }

    fn try_from_cxcywh(cxcywh: [Self::Type; 4]) -> Result<Self> {
        let [cx, cy, w, h] = cxcywh;
        let zero = T::zero();
        ensure!(w >= zero && h >= zero, "w and h must be non-negative");

        let two = T::one() + T::one();
        let x = cx - w / two;
        let y = cy - h / two;

        Ok(Self { x, y, w, h })
    }

    fn try_from_xyxy(xyxy: [Self::Type; 4]) -> Result<Self> {
        let [x0, y0, x1, y1] = xyxy;
        ensure!(x1 >= x0 && y1 >= y0, "x1 >= x0 and y1 >= y0 must hold");

        Ok(Self {
            x: x0,
            y: y0,
            w: x1 - x0,
            h: y1 - y0,
        })
    }
}

impl<T> From<CxCyWH<T>> for XYWH<T>
where
    T: Copy + Num,
{
    fn from(from: CxCyWH<T>) -> Self {
        Self::from(&from)
    }
}

impl<T> From<&CxCyWH<T>> for XYWH<T>
where
    T: Copy + Num,
{
    fn from(from: &CxCyWH<T>) -> Self {
        let two = T::one() + T::one();
        let CxCyWH { cx, cy, w, h } = *from;
        let x = cx - w / two;
        let y = cy - h / two;
        Self { x, y, w, h }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RectNum;
    use approx::assert_abs_diff_eq;

    #[test]
    fn xywh_from_center() {
        let center = CxCyWH::try_from_cxcywh([0.5, 0.5, 0.2, 0.4]).unwrap();
        let corner = XYWH::from(&center);
        let [x, y, w, h] = corner.xywh();
        assert_abs_diff_eq!(x, 0.4);
        assert_abs_diff_eq!(y, 0.3);
        assert_abs_diff_eq!(w, 0.2);
        assert_abs_diff_eq!(h, 0.4);

        let [cx, cy, _, _] = CxCyWH::from(&corner).cxcywh();
        assert_abs_diff_eq!(cx, 0.5);
        assert_abs_diff_eq!(cy, 0.5);
    }

    #[test]
    fn xywh_round_trip_holds_for_edges() {
        let inputs = [
            [0.1, 0.9, 0.2, 0.2],
            [0.0, 0.0, 0.0, 0.0],
            [1.0, 1.0, 0.5, 0.25],
        ];

        for [cx, cy, w, h] in inputs {
            let rect = XYWH::try_from_cxcywh([cx, cy, w, h]).unwrap();
            assert_abs_diff_eq!(rect.x_min() + rect.w(), cx + w / 2.0, epsilon = 1e-12);
            assert_abs_diff_eq!(rect.y_min(), cy - h / 2.0, epsilon = 1e-12);
        }
    }
}

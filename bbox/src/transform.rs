use super::{CxCyWH, XYWH, XYXY};
use crate::common::*;

/// Per-axis scale followed by translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transform<T> {
    pub sx: T,
    pub sy: T,
    pub tx: T,
    pub ty: T,
}

impl<T> Transform<T>
where
    T: Copy + Num,
{
    pub fn from_scale(sx: T, sy: T) -> Self {
        Self {
            sx,
            sy,
            tx: T::zero(),
            ty: T::zero(),
        }
    }

    /// Maps pixel coordinates on a `width` x `height` grid into `[0, 1]`.
    pub fn normalize(width: T, height: T) -> Self {
        Self::from_scale(T::one() / width, T::one() / height)
    }

    /// Maps `[0, 1]` coordinates onto a `width` x `height` pixel grid.
    pub fn denormalize(width: T, height: T) -> Self {
        Self::from_scale(width, height)
    }

    pub fn apply(&self, [x, y]: [T; 2]) -> [T; 2] {
        [x * self.sx + self.tx, y * self.sy + self.ty]
    }
}

impl<T> Transform<T>
where
    T: Copy + Num + Neg<Output = T>,
{
    pub fn inverse(&self) -> Self {
        let sx = T::one() / self.sx;
        let sy = T::one() / self.sy;
        let tx = -self.tx / self.sx;
        let ty = -self.ty / self.sy;

        Self { sx, sy, tx, ty }
    }
}

impl<T> Transform<T> {
    pub fn try_cast<V>(self) -> Option<Transform<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(Transform {
            sx: V::from(self.sx)?,
            sy: V::from(self.sy)?,
            tx: V::from(self.tx)?,
            ty: V::from(self.ty)?,
        })
    }
}

impl<T> Mul<&XYWH<T>> for &Transform<T>
where
    T: Copy + Num,
{
    type Output = XYWH<T>;

    fn mul(self, rhs: &XYWH<T>) -> Self::Output {
        rhs.transform(self)
    }
}

impl<T> Mul<&CxCyWH<T>> for &Transform<T>
where
    T: Copy + Num,
{
    type Output = CxCyWH<T>;

    fn mul(self, rhs: &CxCyWH<T>) -> Self::Output {
        rhs.transform(self)
    }
}

impl<T> Mul<&XYXY<T>> for &Transform<T>
where
    T: Copy + Num,
{
    type Output = XYXY<T>;

    fn mul(self, rhs: &XYXY<T>) -> Self::Output {
        rhs.transform(self)
    }
}

impl<T> Mul<&Transform<T>> for &Transform<T>
where
    T: Copy + Num,
{
    type Output = Transform<T>;

    fn mul(self, rhs: &Transform<T>) -> Self::Output {
        Transform {
            sx: self.sx * rhs.sx,
            sy: self.sy * rhs.sy,
            tx: rhs.tx * self.sx + self.tx,
            ty: rhs.ty * self.sy + self.ty,
        }
    }
}

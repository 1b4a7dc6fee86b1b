use super::{CxCyWH, XYWH, XYXY};
use crate::common::*;

/// The generic rectangle.
pub trait Rect {
    type Type;

    fn x_min(&self) -> Self::Type;
    fn y_min(&self) -> Self::Type;
    fn x_max(&self) -> Self::Type;
    fn y_max(&self) -> Self::Type;
    fn cx(&self) -> Self::Type;
    fn cy(&self) -> Self::Type;
    fn w(&self) -> Self::Type;
    fn h(&self) -> Self::Type;

    fn try_from_xywh(xywh: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;

    fn try_from_cxcywh(cxcywh: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;

    fn try_from_xyxy(xyxy: [Self::Type; 4]) -> Result<Self>
    where
        Self: Sized;
}

pub trait RectNum: Rect
where
    Self::Type: Num + PartialOrd,
{
    fn xywh(&self) -> [Self::Type; 4] {
        [self.x_min(), self.y_min(), self.w(), self.h()]
    }

    fn cxcywh(&self) -> [Self::Type; 4] {
        [self.cx(), self.cy(), self.w(), self.h()]
    }

    fn xyxy(&self) -> [Self::Type; 4] {
        [self.x_min(), self.y_min(), self.x_max(), self.y_max()]
    }

    fn wh(&self) -> [Self::Type; 2] {
        [self.w(), self.h()]
    }

    fn to_xywh(&self) -> XYWH<Self::Type> {
        XYWH {
            x: self.x_min(),
            y: self.y_min(),
            w: self.w(),
            h: self.h(),
        }
    }

    fn to_cxcywh(&self) -> CxCyWH<Self::Type> {
        CxCyWH {
            cx: self.cx(),
            cy: self.cy(),
            w: self.w(),
            h: self.h(),
        }
    }

    fn to_xyxy(&self) -> XYXY<Self::Type> {
        XYXY {
            x0: self.x_min(),
            y0: self.y_min(),
            x1: self.x_max(),
            y1: self.y_max(),
        }
    }

    fn area(&self) -> <Self::Type as Mul<Self::Type>>::Output
    where
        Self::Type: Mul<Self::Type>,
    {
        self.w() * self.h()
    }
}

impl<T> RectNum for T
where
    T: Rect,
    T::Type: Num + PartialOrd,
{
}

use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// PDF points, the native unit of length of a page (1/72 of an inch). All geometry
/// in this crate (page sizes, table origins, cell widths, font sizes) is expressed
/// in points.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    From,
    Into,
    Deref,
    DerefMut,
    Display,
)]
pub struct Pt(pub f32);

/// Inches, convertible into [Pt]
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Display)]
pub struct In(pub f32);

/// Millimetres, convertible into [Pt]
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Display)]
pub struct Mm(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Self {
        Pt(value.0 * 72.0)
    }
}

impl From<Mm> for Pt {
    fn from(value: Mm) -> Self {
        Pt(value.0 * 72.0 / 25.4)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

impl From<Pt> for f64 {
    fn from(value: Pt) -> Self {
        value.0 as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_and_millimetres_convert_to_points() {
        assert_eq!(Pt::from(In(1.0)), Pt(72.0));
        assert!((Pt::from(Mm(25.4)).0 - 72.0).abs() < 1e-4);
    }

    #[test]
    fn arithmetic() {
        let mut y = Pt(700.0);
        y -= Pt(32.0);
        assert_eq!(y, Pt(668.0));
        assert_eq!(Pt(10.0) * 0.5 + Pt(1.0), Pt(6.0));
        assert_eq!(-(Pt(4.0) / 2.0), Pt(-2.0));
        assert_eq!([Pt(1.0), Pt(2.0)].into_iter().sum::<Pt>(), Pt(3.0));
    }
}

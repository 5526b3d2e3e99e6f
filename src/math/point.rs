use core::ops::{Add, Mul, Sub};

use crate::math::*;

macro_rules! impl_accessor {
    ($name: ident) => {
        pub fn $name(&self) -> f32 {
            (self.0).$name()
        }
    };
}

macro_rules! impl_accessors {
    ( $( $name: ident),* ) => {
        $(
            impl_accessor!($name);
        )*
    }
}

#[derive(Copy, Clone)]
pub struct Point<CS: CoordinateSystem, const N: usize>(Vector<CS, { N }>);
pub type Point2D = Point<Any2D, 2>;
pub type Point3D<CS> = Point<CS, 3>;
pub type Point4D<CS> = Point<CS, 4>;

impl<CS, const N: usize> Point<CS, { N }>
where
    CS: CoordinateSystem,
{
    impl_accessors!(x, y, z, w);
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self(vec2(x, y))
    }
}

impl<CS> Point3D<CS>
where
    CS: CoordinateSystem,
{
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(vec3::<CS>(x, y, z))
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn extend(self, w: f32) -> Point4D<CS> {
        Point(self.0.extend(w))
    }
}

impl<CS> Point4D<CS>
where
    CS: CoordinateSystem,
{
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(vec4::<CS>(x, y, z, w))
    }

    pub fn truncate(self) -> Point3D<CS> {
        Point(self.0.truncate())
    }
}

impl Sub<Point2D> for Point2D {
    type Output = Vec2;

    fn sub(self, other: Point2D) -> Vec2 {
        let v0 = self.0;
        let v1 = other.0;
        vec2(v0.x() - v1.x(), v0.y() - v1.y())
    }
}

impl<CS> Sub<Point3D<CS>> for Point3D<CS>
where
    CS: CoordinateSystem,
{
    type Output = Vec3<CS>;

    fn sub(self, other: Self) -> Self::Output {
        self.0 - other.0
    }
}

impl<CS> Add<Vec3<CS>> for Point3D<CS>
where
    CS: CoordinateSystem,
{
    type Output = Point3D<CS>;

    fn add(self, other: Vec3<CS>) -> Self::Output {
        Point(self.0 + other)
    }
}

impl<CS> Sub<Point<CS, 4>> for Point<CS, 4>
where
    CS: CoordinateSystem,
{
    type Output = Vec4<CS>;

    fn sub(self, other: Self) -> Self::Output {
        self.0 - other.0
    }
}

impl<CS, const N: usize> std::fmt::Debug for Point<CS, { N }>
where
    CS: PrintableType + CoordinateSystem,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<CSF, CST> Mul<Point4D<CSF>> for Mat4<CSF, CST>
where
    CSF: CoordinateSystem,
    CST: CoordinateSystem,
{
    type Output = Point4D<CST>;
    fn mul(self, other: Point4D<CSF>) -> Self::Output {
        Point::<CST, 4>(self * other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn point_sub_gives_displacement_vector() {
        let a = Point3D::<WorldSpace>::new(3.0, 4.0, 5.0);
        let b = Point3D::<WorldSpace>::new(1.0, 1.0, 1.0);
        let d = a - b;
        assert_abs_diff_eq!(d.x(), 2.0);
        assert_abs_diff_eq!(d.y(), 3.0);
        assert_abs_diff_eq!(d.z(), 4.0);
    }

    #[test]
    fn origin_extends_to_homogeneous_point() {
        let p = Point3D::<WorldSpace>::origin().extend(1.0);
        assert_abs_diff_eq!(p.w(), 1.0);
    }
}

use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};

use crate::math::*;

#[derive(Copy, Clone)]
pub struct Vector<CS: CoordinateSystem, const N: usize> {
    arr: [f32; N],
    _coordinate_system: PhantomData<CS>,
}

impl<CS, const N: usize> Vector<CS, { N }>
where
    CS: CoordinateSystem,
{
    pub fn dot(self, other: Vector<CS, { N }>) -> f32 {
        self.arr
            .iter()
            .zip(other.arr.iter())
            .fold(0.0, |acc, (elem0, elem1)| elem0 * elem1 + acc)
    }

    pub fn x(&self) -> f32 {
        self.arr[0]
    }
    pub fn y(&self) -> f32 {
        self.arr[1]
    }
    pub fn z(&self) -> f32 {
        self.arr[2]
    }
    pub fn w(&self) -> f32 {
        self.arr[3]
    }

    pub fn len(&self) -> f32 {
        self.arr.iter().fold(0.0, |acc, e| acc + e * e).sqrt()
    }

    pub fn normalize(self) -> Self {
        let len = self.len();
        let mut arr = self.arr;
        for e in arr.iter_mut() {
            *e /= len;
        }
        Self {
            arr,
            _coordinate_system: PhantomData,
        }
    }
}

impl<CS, const N: usize> Add for Vector<CS, { N }>
where
    CS: CoordinateSystem,
{
    type Output = Self;
    fn add(self, other: Self) -> Self {
        let mut arr = self.arr;
        for (a, b) in arr.iter_mut().zip(other.arr.iter()) {
            *a += b;
        }
        Self {
            arr,
            _coordinate_system: PhantomData,
        }
    }
}

impl<CS, const N: usize> Sub for Vector<CS, { N }>
where
    CS: CoordinateSystem,
{
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        let mut arr = self.arr;
        for (a, b) in arr.iter_mut().zip(other.arr.iter()) {
            *a -= b;
        }
        Self {
            arr,
            _coordinate_system: PhantomData,
        }
    }
}

impl<CS, const N: usize> Neg for Vector<CS, { N }>
where
    CS: CoordinateSystem,
{
    type Output = Self;
    fn neg(self) -> Self {
        let mut arr = self.arr;
        for a in arr.iter_mut() {
            *a = -*a;
        }
        Self {
            arr,
            _coordinate_system: PhantomData,
        }
    }
}

impl<CS, const N: usize> Mul<f32> for Vector<CS, { N }>
where
    CS: CoordinateSystem,
{
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        let mut arr = self.arr;
        for a in arr.iter_mut() {
            *a *= scalar;
        }
        Self {
            arr,
            _coordinate_system: PhantomData,
        }
    }
}

impl<CS, const N: usize> std::fmt::Debug for Vector<CS, { N }>
where
    CS: PrintableType + CoordinateSystem,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector<{}, {}>: {:?}", N, CS::NAME, self.arr)
    }
}

pub type Vec2 = Vector<Any2D, { 2 }>;
pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vector::<Any2D, { 2 }> {
        arr: [x, y],
        _coordinate_system: PhantomData {},
    }
}

impl<CS> Vector<CS, { 2 }>
where
    CS: CoordinateSystem,
{
    pub fn cross(self, other: Vector<CS, { 2 }>) -> f32 {
        self.x() * other.y() - other.x() * self.y()
    }
}

pub type Vec3<CS> = Vector<CS, { 3 }>;
pub fn vec3<CS: CoordinateSystem>(x: f32, y: f32, z: f32) -> Vec3<CS> {
    Vector::<CS, { 3 }> {
        arr: [x, y, z],
        _coordinate_system: PhantomData {},
    }
}

impl<CS: CoordinateSystem> Vec3<CS> {
    pub fn cross(self, other: Self) -> Self {
        let v0 = self.arr;
        let v1 = other.arr;
        let x = v0[1] * v1[2] - v0[2] * v1[1];
        let y = v0[2] * v1[0] - v0[0] * v1[2];
        let z = v0[0] * v1[1] - v0[1] * v1[0];
        vec3(x, y, z)
    }

    pub fn extend(self, w: f32) -> Vec4<CS> {
        vec4(self.x(), self.y(), self.z(), w)
    }
}

pub type Vec4<CS> = Vector<CS, { 4 }>;
pub fn vec4<CS: CoordinateSystem>(x: f32, y: f32, z: f32, w: f32) -> Vec4<CS> {
    Vec4::<CS> {
        arr: [x, y, z, w],
        _coordinate_system: PhantomData {},
    }
}

impl<CS: CoordinateSystem> Vec4<CS> {
    pub fn truncate(self) -> Vec3<CS> {
        vec3(self.x(), self.y(), self.z())
    }
}

impl<CSF, CST> Mul<Vec4<CSF>> for Mat4<CSF, CST>
where
    CSF: CoordinateSystem,
    CST: CoordinateSystem,
{
    type Output = Vec4<CST>;
    fn mul(self, other: Vec4<CSF>) -> Vec4<CST> {
        let o = [other.x(), other.y(), other.z(), other.w()];
        vec4(
            (0..4).fold(0.0, |acc, k| acc + self.elem(0, k) * o[k]),
            (0..4).fold(0.0, |acc, k| acc + self.elem(1, k) * o[k]),
            (0..4).fold(0.0, |acc, k| acc + self.elem(2, k) * o[k]),
            (0..4).fold(0.0, |acc, k| acc + self.elem(3, k) * o[k]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cross_of_orthonormal_basis_vectors() {
        let x = vec3::<WorldSpace>(1.0, 0.0, 0.0);
        let y = vec3::<WorldSpace>(0.0, 1.0, 0.0);
        let z = x.cross(y);
        assert_abs_diff_eq!(z.x(), 0.0);
        assert_abs_diff_eq!(z.y(), 0.0);
        assert_abs_diff_eq!(z.z(), 1.0);
    }

    #[test]
    fn normalize_produces_unit_length() {
        let v = vec3::<WorldSpace>(3.0, 4.0, 0.0).normalize();
        assert_abs_diff_eq!(v.len(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn identity_matrix_times_vector_is_identity() {
        let m = Mat4::<WorldSpace, WorldSpace>::identity();
        let v = vec4::<WorldSpace>(1.0, 2.0, 3.0, 1.0);
        let r = m * v;
        assert_abs_diff_eq!(r.x(), 1.0);
        assert_abs_diff_eq!(r.y(), 2.0);
        assert_abs_diff_eq!(r.z(), 3.0);
        assert_abs_diff_eq!(r.w(), 1.0);
    }
}

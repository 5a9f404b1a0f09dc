//! Ray, sphere and box intersection
//!
//! The ray parameter `t` returned by every test satisfies
//! `hit = origin + direction * t` for the exact vectors the ray was built with.

use crate::foundation::math::{Mat4, Vec3, Vec4};
use thiserror::Error;

/// Rejected ray construction
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayError {
    /// Direction vector has zero length
    #[error("ray direction has zero length")]
    ZeroDirection,

    /// Origin or direction contains NaN or infinity
    #[error("ray has non-finite components")]
    NonFinite,
}

/// A ray for picking, with a validated non-zero direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin point of the ray
    pub origin: Vec3,
    /// The direction of the ray (not required to be normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray, rejecting zero-length or non-finite input
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self, RayError> {
        if !origin.iter().chain(direction.iter()).all(|c| c.is_finite()) {
            return Err(RayError::NonFinite);
        }
        if direction.norm_squared() == 0.0 {
            return Err(RayError::ZeroDirection);
        }
        Ok(Self { origin, direction })
    }

    /// Get a point along the ray at parameter t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Express this ray in another frame
    ///
    /// The origin is mapped as a position and the direction as a vector, so
    /// the parameter of any hit is unchanged by an affine `matrix`.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let o = self.origin;
        let d = self.direction;
        Self {
            origin: (matrix * Vec4::new(o.x, o.y, o.z, 1.0)).xyz(),
            direction: (matrix * Vec4::new(d.x, d.y, d.z, 0.0)).xyz(),
        }
    }
}

/// A bounding sphere used for sphere-shaped nodes
#[derive(Debug, Clone, Copy)]
pub struct BoundingSphere {
    /// The center position of the sphere
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Test ray intersection with this sphere
    ///
    /// Returns the closest positive ray parameter, or the exit parameter when
    /// the origin lies inside the sphere.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        // Solve: |origin + t*direction - center|^2 = radius^2
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / (2.0 * a);
        let t2 = (-b + sqrt_discriminant) / (2.0 * a);

        if t1 > 0.0 {
            Some(t1)
        } else if t2 > 0.0 {
            Some(t2)
        } else {
            None // Ray pointing away from sphere
        }
    }
}

/// Axis-Aligned Bounding Box used for box-shaped nodes
#[derive(Debug, Clone, Copy)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl AABB {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Check if this AABB contains a point
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Test ray intersection with this AABB using the slab method
    ///
    /// Returns the entry parameter, or 0 when the origin is inside the box.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let origin = ray.origin;
        let dir = ray.direction;
        let inv_dir = Vec3::new(
            if dir.x != 0.0 { 1.0 / dir.x } else { f32::INFINITY },
            if dir.y != 0.0 { 1.0 / dir.y } else { f32::INFINITY },
            if dir.z != 0.0 { 1.0 / dir.z } else { f32::INFINITY },
        );

        let t1 = (self.min.x - origin.x) * inv_dir.x;
        let t2 = (self.max.x - origin.x) * inv_dir.x;
        let t3 = (self.min.y - origin.y) * inv_dir.y;
        let t4 = (self.max.y - origin.y) * inv_dir.y;
        let t5 = (self.min.z - origin.z) * inv_dir.z;
        let t6 = (self.max.z - origin.z) * inv_dir.z;

        let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
        let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

        if tmax >= tmin && tmax >= 0.0 {
            Some(tmin.max(0.0))
        } else {
            None
        }
    }
}

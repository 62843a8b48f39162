#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use glam::Vec3;

use crate::camera::Ray;
use crate::consts::{EPSILON, SEAT_HEIGHT};
use crate::doc::{ObjectId, ObjectKind, Point, Room, TableShape};

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub object_id: ObjectId,
    pub kind: ObjectKind,
    /// Distance along the ray to the first surface hit.
    pub distance: f32,
}

/// Find the nearest table or seat the ray passes through.
///
/// Tables are boxes or upright cylinders standing on the floor; seats are
/// upright cylinders of `seat_radius`.
#[must_use]
pub fn hit_test(ray: &Ray, room: &Room, seat_radius: f32) -> Option<Hit> {
    let tables = room.tables().iter().filter_map(|table| {
        let distance = match table.shape {
            TableShape::Rectangular { width, length } => {
                let half = Vec3::new(width / 2.0, 0.0, length / 2.0);
                let base = table.position.at_height(0.0);
                ray_box(ray, base - half, base + half + Vec3::Y * table.height)
            }
            TableShape::Round { radius } => ray_cylinder(ray, table.position, radius, table.height),
        }?;
        Some(Hit { object_id: table.id, kind: table.kind(), distance })
    });

    let seats = room.seats().iter().filter_map(|seat| {
        let distance = ray_cylinder(ray, seat.position, seat_radius, SEAT_HEIGHT)?;
        Some(Hit { object_id: seat.id, kind: ObjectKind::Seat, distance })
    });

    tables.chain(seats).min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Slab test against an axis-aligned box. Returns the entry distance, or 0 from inside.
fn ray_box(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.dir[axis];
        if dir.abs() < EPSILON {
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }
        let t1 = (min[axis] - origin) / dir;
        let t2 = (max[axis] - origin) / dir;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max < t_min.max(0.0) {
        return None;
    }
    Some(t_min.max(0.0))
}

/// Intersect an upright capped cylinder on the floor at `center`.
fn ray_cylinder(ray: &Ray, center: Point, radius: f32, height: f32) -> Option<f32> {
    let ox = ray.origin.x - center.x;
    let oz = ray.origin.z - center.z;
    let (dx, dz) = (ray.dir.x, ray.dir.z);
    let within_height = |t: f32| {
        let y = ray.origin.y + ray.dir.y * t;
        (0.0..=height).contains(&y)
    };

    let mut best: Option<f32> = None;
    let mut consider = |t: f32| {
        if t >= 0.0 && best.is_none_or(|b| t < b) {
            best = Some(t);
        }
    };

    // Side wall.
    let a = dx * dx + dz * dz;
    if a > EPSILON {
        let b = 2.0 * (ox * dx + oz * dz);
        let c = ox * ox + oz * oz - radius * radius;
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let root = disc.sqrt();
            for t in [(-b - root) / (2.0 * a), (-b + root) / (2.0 * a)] {
                if within_height(t) {
                    consider(t);
                }
            }
        }
    }

    // Caps.
    if ray.dir.y.abs() > EPSILON {
        for cap in [0.0, height] {
            let t = (cap - ray.origin.y) / ray.dir.y;
            let (px, pz) = (ox + dx * t, oz + dz * t);
            if px * px + pz * pz <= radius * radius {
                consider(t);
            }
        }
    }

    best
}

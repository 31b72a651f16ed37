//! Perspective projection of the spinning scene
//!
//! Produces flat-shaded quads in clip space, sorted far to near so a 2D
//! backend can paint them in order without a depth buffer.

use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::sim::SceneFrame;

const FOV_Y_DEGREES: f32 = 60.0;
const NEAR: f32 = 1.0;
const FAR: f32 = 100.0;

/// Unit cube scaled, spun around the vertical axis at its corner, then placed
struct Block {
    translation: Vec3,
    scale: Vec3,
    color: [u8; 3],
}

const BLOCKS: [Block; 2] = [
    // Mast
    Block {
        translation: Vec3::new(0.0, 0.0, -10.0),
        scale: Vec3::new(0.2, 2.0, 0.2),
        color: [255, 0, 0],
    },
    // Blade
    Block {
        translation: Vec3::new(0.0, 2.0, -10.0),
        scale: Vec3::new(1.5, 0.2, 0.1),
        color: [0, 255, 0],
    },
];

/// Corner `i` of the unit cube has x = bit 0, y = bit 1, z = bit 2
const FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2],
    [4, 5, 7, 6],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [0, 2, 6, 4],
    [1, 3, 7, 5],
];
const SHADES: [f32; 6] = [0.8, 0.8, 0.5, 1.0, 0.65, 0.65];

/// One visible block face
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Corners in normalized device coordinates ([-1, 1], y up)
    pub points: [Vec2; 4],
    /// Mean distance in front of the camera
    pub depth: f32,
    pub color: [u8; 3],
}

/// Project every block face in front of the camera, farthest first
pub fn project(frame: &SceneFrame, aspect: f32) -> Vec<Polygon> {
    let proj = Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), aspect, NEAR, FAR);
    let view = Mat4::look_at_rh(Vec3::ZERO, frame.camera_direction, Vec3::Y);
    let spin = Mat4::from_rotation_y(frame.spin_degrees.to_radians());

    let mut polygons = Vec::with_capacity(BLOCKS.len() * FACES.len());
    for block in &BLOCKS {
        let model_view =
            view * Mat4::from_translation(block.translation) * spin * Mat4::from_scale(block.scale);
        let corners: [Vec4; 8] = std::array::from_fn(|i| {
            let local = Vec3::new((i & 1) as f32, ((i >> 1) & 1) as f32, ((i >> 2) & 1) as f32);
            model_view * local.extend(1.0)
        });

        for (face, shade) in FACES.into_iter().zip(SHADES) {
            let eye = face.map(|i| corners[i]);
            // View space looks down -z
            if eye.iter().any(|p| -p.z < NEAR) {
                continue;
            }
            let points = eye.map(|p| {
                let clip = proj * p;
                Vec2::new(clip.x / clip.w, clip.y / clip.w)
            });
            let depth = eye.iter().map(|p| -p.z).sum::<f32>() / 4.0;
            polygons.push(Polygon {
                points,
                depth,
                color: block.color.map(|c| (c as f32 * shade) as u8),
            });
        }
    }

    polygons.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    polygons
}

//! Light description passed to the shading stage.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// Spot-style light source.
///
/// `direction` is kept normalized by the constructor; `angle` is the cone
/// half-angle in radians. Pure data: shading is the BRDF's job.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub position: Vec3,
    pub direction: Vec3,
    pub color: Vec3,
    pub angle: f32,
    pub intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: -Vec3::Y,
            color: Vec3::ONE,
            angle: std::f32::consts::FRAC_PI_4,
            intensity: 1.0,
        }
    }
}

impl Light {
    pub fn new(position: Vec3, direction: Vec3, color: Vec3, angle: f32, intensity: f32) -> Self {
        Self {
            position,
            direction: direction.normalize(),
            color,
            angle,
            intensity,
        }
    }

    /// Emitted radiance before any distance or cone falloff.
    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity
    }

    /// Convert to GPU data format
    pub fn to_gpu_data(&self) -> GpuLightData {
        GpuLightData {
            position_angle: self.position.extend(self.angle.cos()),
            color_intensity: self.color.extend(self.intensity),
            direction: self.direction.extend(0.0),
        }
    }
}

/// GPU-friendly light data structure
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GpuLightData {
    /// xyz = position, w = cos(angle)
    pub position_angle: Vec4,
    /// xyz = color, w = intensity
    pub color_intensity: Vec4,
    /// xyz = direction, w = unused
    pub direction: Vec4,
}

//! Material parameters for PBR shading.

use glam::Vec3;

/// Surface parameters consumed by the shading math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub albedo: Vec3,
    pub metallic: f32,
    pub roughness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec3::ONE,
            metallic: 0.0,
            roughness: 0.5,
        }
    }
}

impl Material {
    pub fn new(albedo: Vec3, metallic: f32, roughness: f32) -> Self {
        Self {
            albedo,
            metallic,
            roughness,
        }
    }

    pub fn with_albedo(mut self, albedo: Vec3) -> Self {
        self.albedo = albedo;
        self
    }

    pub fn with_metallic(mut self, metallic: f32) -> Self {
        self.metallic = metallic;
        self
    }

    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    // Preset materials

    pub fn plastic(color: Vec3) -> Self {
        Self::new(color, 0.0, 0.4)
    }

    pub fn rubber(color: Vec3) -> Self {
        Self::new(color, 0.0, 0.9)
    }

    pub fn metal(color: Vec3, roughness: f32) -> Self {
        Self::new(color, 1.0, roughness)
    }

    pub fn gold() -> Self {
        Self::metal(Vec3::new(1.0, 0.766, 0.336), 0.3)
    }

    pub fn silver() -> Self {
        Self::metal(Vec3::new(0.972, 0.960, 0.915), 0.2)
    }

    pub fn copper() -> Self {
        Self::metal(Vec3::new(0.955, 0.637, 0.538), 0.4)
    }

    pub fn iron() -> Self {
        Self::metal(Vec3::new(0.56, 0.57, 0.58), 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white_dielectric() {
        let m = Material::default();
        assert_eq!(m.albedo, Vec3::ONE);
        assert_eq!(m.metallic, 0.0);
        assert_eq!(m.roughness, 0.5);
    }

    #[test]
    fn builders_override_fields() {
        let m = Material::default()
            .with_albedo(Vec3::new(0.8, 0.1, 0.1))
            .with_metallic(0.25)
            .with_roughness(0.7);
        assert_eq!(m.albedo, Vec3::new(0.8, 0.1, 0.1));
        assert_eq!(m.metallic, 0.25);
        assert_eq!(m.roughness, 0.7);
    }

    #[test]
    fn presets_split_on_metallic() {
        assert_eq!(Material::gold().metallic, 1.0);
        assert_eq!(Material::silver().metallic, 1.0);
        assert_eq!(Material::plastic(Vec3::ONE).metallic, 0.0);
        assert_eq!(Material::rubber(Vec3::ONE).roughness, 0.9);
    }
}

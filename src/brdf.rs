//! Cook-Torrance PBR shading math.
//!
//! Pure functions evaluating the microfacet specular BRDF (GGX distribution,
//! Smith geometry term, Schlick Fresnel) plus an energy-conserving Lambertian
//! diffuse term, for a single light sample. Everything here is stateless and
//! allocation-free; all direction vectors are expected to be normalized and
//! results are undefined otherwise.

use glam::Vec3;
use std::f32::consts::PI;

/// Base reflectivity of dielectric surfaces at normal incidence.
pub const DIELECTRIC_F0: f32 = 0.04;

/// Schlick approximation of the Fresnel term.
///
/// `cos_theta` is the cosine of the angle between the half-vector and the
/// view direction, `f0` the base reflectivity per color channel. Returns
/// `f0` at normal incidence and rises to 1 toward grazing angles.
pub fn fresnel_schlick(cos_theta: f32, f0: Vec3) -> Vec3 {
    f0 + (Vec3::ONE - f0) * (1.0 - cos_theta).powi(5)
}

/// GGX/Trowbridge-Reitz normal distribution function.
///
/// Statistical concentration of microfacets aligned with the half-vector
/// `h`. Low roughness concentrates the distribution around the mirror
/// direction, producing sharp highlights.
pub fn distribution_ggx(n: Vec3, h: Vec3, roughness: f32) -> f32 {
    let a = roughness * roughness;
    let a2 = a * a;
    let n_dot_h = n.dot(h).max(0.0);
    let n_dot_h2 = n_dot_h * n_dot_h;

    let denom = n_dot_h2 * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom)
}

/// Schlick-GGX geometry sub-term for a single direction.
///
/// Uses the direct-lighting roughness remap `k = (r + 1)^2 / 8`.
pub fn geometry_schlick_ggx(n_dot_x: f32, roughness: f32) -> f32 {
    let r = roughness + 1.0;
    let k = (r * r) / 8.0;
    n_dot_x / (n_dot_x * (1.0 - k) + k)
}

/// Smith geometry term: separable microfacet self-shadowing/masking,
/// combining the view and light directions independently. Zero at grazing
/// or back-facing configurations.
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, roughness: f32) -> f32 {
    let n_dot_v = n.dot(v).max(0.0);
    let n_dot_l = n.dot(l).max(0.0);
    let ggx1 = geometry_schlick_ggx(n_dot_v, roughness);
    let ggx2 = geometry_schlick_ggx(n_dot_l, roughness);
    ggx1 * ggx2
}

/// Outgoing radiance contribution of one light sample at a shaded point.
///
/// `n`, `v`, `l` are the normalized surface normal, view and light
/// directions. `n_dot_l` is caller-supplied (typically `max(dot(n, l), 0)`)
/// and is not clamped here.
#[allow(clippy::too_many_arguments)]
pub fn compute_pbr(
    n: Vec3,
    v: Vec3,
    l: Vec3,
    albedo: Vec3,
    metallic: f32,
    roughness: f32,
    light_color: Vec3,
    n_dot_l: f32,
) -> Vec3 {
    let h = (v + l).normalize();
    let n_dot_v = n.dot(v).max(0.0);
    let h_dot_v = h.dot(v).max(0.0);

    // Base reflectivity: dielectrics get a fixed low F0, metals get
    // albedo-tinted reflectivity.
    let f0 = Vec3::splat(DIELECTRIC_F0).lerp(albedo, metallic);
    let f = fresnel_schlick(h_dot_v, f0);
    let d = distribution_ggx(n, h, roughness);
    let g = geometry_smith(n, v, l, roughness);

    let numerator = d * g * f;
    let denominator = 4.0 * n_dot_v * n_dot_l + 0.001;
    let specular = numerator / denominator;

    // Energy conservation: only non-metals get diffuse.
    let k_s = f;
    let k_d = (Vec3::ONE - k_s) * (1.0 - metallic);

    let diffuse = k_d * albedo / PI;

    (diffuse + specular) * light_color * n_dot_l
}

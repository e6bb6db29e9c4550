//! Compute dispatch layout shared between host code and the shading kernel.
//!
//! The push-constant record and the workgroup tile size form a wire-format
//! contract with the GPU-side kernel: field order and width are load-bearing
//! and must match the kernel's constant block exactly.

use bytemuck::{Pod, Zeroable};

/// Workgroup tile width in pixels.
pub const WORKGROUP_WIDTH: u32 = 16;

/// Workgroup tile height in pixels.
pub const WORKGROUP_HEIGHT: u32 = 8;

/// Push constants for the shading kernel.
///
/// Two consecutive unsigned 32-bit fields with natural 4-byte alignment and
/// no padding. Written once by host code before a dispatch, read-only during
/// kernel execution. The dimensions must match the dispatch grid and output
/// image; no validation is performed here.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct PushConstants {
    pub render_width: u32,
    pub render_height: u32,
}

impl PushConstants {
    pub fn new(render_width: u32, render_height: u32) -> Self {
        Self {
            render_width,
            render_height,
        }
    }

    /// Number of workgroups along x and y needed to cover the render target.
    pub fn workgroup_count(&self) -> (u32, u32) {
        let x = (self.render_width + WORKGROUP_WIDTH - 1) / WORKGROUP_WIDTH;
        let y = (self.render_height + WORKGROUP_HEIGHT - 1) / WORKGROUP_HEIGHT;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_two_packed_u32s() {
        assert_eq!(std::mem::size_of::<PushConstants>(), 8);
        assert_eq!(std::mem::align_of::<PushConstants>(), 4);

        let pc = PushConstants::new(1920, 1080);
        let bytes = bytemuck::bytes_of(&pc);
        assert_eq!(&bytes[0..4], &1920u32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &1080u32.to_ne_bytes());
    }

    #[test]
    fn workgroup_count_covers_render_target() {
        assert_eq!(PushConstants::new(1920, 1080).workgroup_count(), (120, 135));
        assert_eq!(PushConstants::new(16, 8).workgroup_count(), (1, 1));
        assert_eq!(PushConstants::new(17, 9).workgroup_count(), (2, 2));
        assert_eq!(PushConstants::new(1, 1).workgroup_count(), (1, 1));
    }
}

/// Hands out per-atom patches of the ambient occlusion texture in row-major order.
///
/// Owned by the caller and threaded through every octagon emission of one build, so two
/// builds never share offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientOcclusionAtlas {
    texture_width: u32,
    patch_width: f32,
    offset: [f32; 2],
}

impl AmbientOcclusionAtlas {
    /// Lays out a square grid with at least one patch per atom.
    pub fn for_atom_count(atom_count: usize, texture_width: u32) -> Self {
        let patches_per_row = (atom_count.max(1) as f32).sqrt().ceil();
        let patch_width = 1.0 / patches_per_row;
        Self {
            texture_width,
            patch_width,
            offset: [patch_width / 2.0, patch_width / 2.0],
        }
    }

    /// Patch size in normalized texture coordinates.
    pub fn patch_width(&self) -> f32 {
        self.patch_width
    }

    pub fn texture_width(&self) -> u32 {
        self.texture_width
    }

    pub fn patch_texels(&self) -> f32 {
        self.patch_width * self.texture_width as f32
    }

    /// Center of the patch the next atom will receive.
    pub fn current_offset(&self) -> [f32; 2] {
        self.offset
    }

    /// Returns the current patch center and moves to the next one, wrapping to a new row
    /// once the row is used up.
    pub fn next_offset(&mut self) -> [f32; 2] {
        let assigned = self.offset;
        let [mut x, mut y] = self.offset;
        x += self.patch_width;
        if x > 1.0 - self.patch_width * 0.15 {
            x = self.patch_width / 2.0;
            y += self.patch_width;
        }
        self.offset = [x, y];
        assigned
    }
}

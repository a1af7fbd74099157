use crate::layout::{Layout, Placement, shortest_offset};

/// Slides side by side; the active one centered, neighbours a full width away.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatLayout;

impl Layout for FlatLayout {
    fn place(&self, index: usize, active: usize, count: usize) -> Placement {
        let offset = shortest_offset(index, active, count);
        Placement {
            index,
            offset,
            translate_x: offset as f32 * 100.0,
            translate_z: 0.0,
            rotate_y_deg: 0.0,
            z_index: count as i32 - offset.abs() as i32,
            is_active: index == active,
        }
    }

    fn x_unit(&self) -> &'static str {
        "%"
    }
}

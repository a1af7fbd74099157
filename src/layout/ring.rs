use crate::layout::{Layout, Placement, shortest_offset};

/// Slides on a circle seen from the front: the active slide nearest the
/// viewer, the rest rotating away around the Y axis.
#[derive(Debug, Clone, Copy)]
pub struct RingLayout {
    radius: f32,
}

impl RingLayout {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl Layout for RingLayout {
    fn place(&self, index: usize, active: usize, count: usize) -> Placement {
        let offset = shortest_offset(index, active, count);
        let step = 360.0 / count.max(1) as f32;
        let angle = offset as f32 * step;
        let theta = angle.to_radians();

        let translate_x = self.radius * theta.sin();
        let translate_z = self.radius * (theta.cos() - 1.0);

        Placement {
            index,
            offset,
            translate_x,
            translate_z,
            rotate_y_deg: angle,
            // Depth ranges over [-2r, 0]; nearer slides get the larger index.
            z_index: (2.0 * self.radius + translate_z).round() as i32,
            is_active: index == active,
        }
    }

    fn x_unit(&self) -> &'static str {
        "px"
    }
}

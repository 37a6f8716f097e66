use crate::ray::Ray;

/// A packed line segment, `[x0, y0, x1, y1]`, ready for vertex upload.
pub type LineSegment = [f32; 4];

/// Packs each ray's start and end point into a flat segment list.
///
/// This is the renderer handoff: segment order matches ray order, so a renderer can map a
/// vertex index back to the ray it came from without any side tables.
pub fn collect_line_segments(rays: impl IntoIterator<Item = Ray>) -> Vec<LineSegment> {
    rays.into_iter()
        .map(|ray| {
            let start = ray.start().as_2f();
            let end = ray.end().as_2f();

            [start.x(), start.y(), end.x(), end.y()]
        })
        .collect()
}

/// A raw byte view of packed segments, as uploaded to a vertex buffer.
#[inline]
pub fn line_segment_bytes(segments: &[LineSegment]) -> &[u8] {
    bytemuck::cast_slice(segments)
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    use crate::cascade::Cascade;
    use crate::config::CascadeConfig;
    use crate::probe::ProbeGrid;
    use crate::ray::LevelRays;

    use radiance_cascades_core::{Point2, RadialInterval};

    fn flatland_config() -> CascadeConfig {
        CascadeConfig {
            base_probe_radius: 16.0,
            base_ray_count: 4,
            branching_factor: 1,
            min_level: 0,
            max_level: 3,
            domain_width: 1024.0,
            domain_height: 1024.0,
        }
    }

    #[test]
    fn segments_follow_ray_order() {
        let grid = ProbeGrid::new(8.0, Point2([16.0, 16.0]));
        let rays = LevelRays::new(grid, 4, RadialInterval::new(2.0, 6.0));

        let segments = collect_line_segments(rays.clone());
        assert_eq!(segments.len(), rays.clone().count());

        for (segment, ray) in segments.iter().zip(rays) {
            assert_eq!(segment[0], ray.start().x() as f32);
            assert_eq!(segment[1], ray.start().y() as f32);
            assert_eq!(segment[2], ray.end().x() as f32);
            assert_eq!(segment[3], ray.end().y() as f32);
        }
    }

    #[test]
    fn byte_view_is_four_floats_per_segment() {
        let cascade = Cascade::generate(flatland_config()).unwrap();
        let segments = collect_line_segments(cascade.rays(3).unwrap());

        let bytes = line_segment_bytes(&segments);
        assert_eq!(bytes.len(), segments.len() * 4 * std::mem::size_of::<f32>());
    }
}

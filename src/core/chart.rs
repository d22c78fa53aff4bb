use std::fmt::Display;
use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::core::config::Arena;
use crate::core::state::SamplePoint;
use crate::core::target::Target;
use crate::core::window::flight_window;

const CHART_SIZE_PX: (u32, u32) = (1200, 600);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to draw chart: {0}")]
    Draw(String),
}

fn draw_err<E: Display>(err: E) -> ChartError {
    ChartError::Draw(err.to_string())
}

/// Converts a display-space sample into launch-relative distance and height
/// above ground.
pub fn to_chart_coords(arena: &Arena, point: SamplePoint) -> (f64, f64) {
    (point.x - arena.launch_origin_x, arena.height_of(point.y))
}

/// Writes a PNG of the flown path, an optional drag-free reference path
/// (already in chart coordinates) and the target.
pub fn render_png(
    path: &Path,
    caption: &str,
    arena: &Arena,
    target: &Target,
    points: &[SamplePoint],
    reference: &[(f64, f64)],
) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, CHART_SIZE_PX).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let (max_x, max_y) = flight_window(arena, points);
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(0.0..max_x, 0.0..max_y)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance")
        .y_desc("Height")
        .draw()
        .map_err(draw_err)?;

    let target_left = target.x - arena.launch_origin_x;
    let target_top = arena.height_of(target.y);
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(target_left, 0.0), (target_left + target.width, target_top)],
            RED.mix(0.4).filled(),
        )))
        .map_err(draw_err)?;

    if !reference.is_empty() {
        chart
            .draw_series(LineSeries::new(
                reference.iter().copied(),
                &BLACK.mix(0.35),
            ))
            .map_err(draw_err)?
            .label("Drag-free")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));
    }

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| to_chart_coords(arena, *p)),
            &BLUE,
        ))
        .map_err(draw_err)?
        .label("Simulated")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_coords_measure_from_origin_and_ground() {
        let arena = Arena::default();
        let (x, h) = to_chart_coords(&arena, SamplePoint { x: 120.0, y: 350.0 });
        assert_eq!(x, 100.0);
        assert_eq!(h, 50.0);
    }
}

use serde::Serialize;

/// Position and velocity of one projectile, in display coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct KinematicState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl KinematicState {
    pub fn speed(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}

/// Telemetry accumulated over one flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct FlightMeasurement {
    pub elapsed_time: f64,
    pub max_height: f64,
    /// Horizontal distance from the launch origin, recorded on landing or hit.
    pub final_range: Option<f64>,
    pub landed: bool,
}

impl FlightMeasurement {
    pub(crate) fn record_height(&mut self, height: f64) {
        if height > self.max_height {
            self.max_height = height;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// Decimated flight path: a point is kept only once the projectile has moved
/// more than `min_spacing` horizontally from the last kept point.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Trajectory {
    points: Vec<SamplePoint>,
    min_spacing: f64,
}

impl Trajectory {
    pub fn new(min_spacing: f64) -> Self {
        Self {
            points: Vec::new(),
            min_spacing,
        }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<SamplePoint> {
        self.points.last().copied()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub(crate) fn restart(&mut self, min_spacing: f64) {
        self.points.clear();
        self.min_spacing = min_spacing;
    }

    /// Appends the point if it is far enough from the previous one. Returns
    /// whether it was kept.
    pub fn record(&mut self, x: f64, y: f64) -> bool {
        let keep = match self.points.last() {
            None => true,
            Some(last) => (x - last.x).abs() > self.min_spacing,
        };
        if keep {
            self.points.push(SamplePoint { x, y });
        }
        keep
    }
}

//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// Stable entity identifier, assigned monotonically by the entity store.
/// Never reused within a session; all cross-system references use this
/// rather than a raw ECS handle.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u64);

/// 3D position in simulation space (meters, Cartesian).
/// x = East, y = North, z = Up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity in simulation space (m/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Unit direction vector. Constructed normalized; zero-length inputs
/// collapse to +y (North) rather than NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking. Advanced by the host-supplied delta each tick,
/// so the tick rate is whatever the host render loop delivers.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Range to another position in meters (3D distance).
    pub fn range_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Bearing to another position in radians (0 = North, clockwise),
    /// measured in the horizontal plane.
    pub fn bearing_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.atan2(dy).rem_euclid(std::f64::consts::TAU)
    }

    /// Unit direction from this position toward another.
    pub fn direction_to(&self, other: &Position) -> Direction {
        Direction::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Velocity along a direction at the given speed.
    pub fn along(dir: Direction, speed: f64) -> Self {
        Self {
            x: dir.x * speed,
            y: dir.y * speed,
            z: dir.z * speed,
        }
    }

    /// Speed magnitude (m/s).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Direction {
    /// Normalize the given components. A zero vector yields +y.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let mag = (x * x + y * y + z * z).sqrt();
        if mag < 1e-12 {
            return Self {
                x: 0.0,
                y: 1.0,
                z: 0.0,
            };
        }
        Self {
            x: x / mag,
            y: y / mag,
            z: z / mag,
        }
    }

    /// Rotate this direction around the vertical (z) axis by `angle` radians.
    /// Used for spread-shot fanning in the horizontal plane.
    pub fn rotated_about_z(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

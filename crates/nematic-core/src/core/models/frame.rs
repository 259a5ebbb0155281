use nalgebra::Point3;

/// A directed link between two particles of a frame.
///
/// The bond vector of `Bond { i, j }` points from particle `i` to particle `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
}

impl Bond {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

impl From<(usize, usize)> for Bond {
    fn from((i, j): (usize, usize)) -> Self {
        Self { i, j }
    }
}

/// One simulation snapshot: particle positions and bond connectivity.
///
/// A frame is immutable once constructed. Bond indices are not validated here;
/// an index that does not name a particle is reported when bond vectors are
/// extracted, so the error can carry the bond's position in the connectivity list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    positions: Vec<Point3<f64>>,
    bonds: Vec<Bond>,
}

impl Frame {
    /// Creates a frame from particle positions (indexed by particle id) and bonds.
    pub fn new(positions: Vec<Point3<f64>>, bonds: Vec<Bond>) -> Self {
        Self { positions, bonds }
    }

    /// Particle positions, indexed by particle id.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Bond connectivity in its original order.
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn num_particles(&self) -> usize {
        self.positions.len()
    }

    pub fn num_bonds(&self) -> usize {
        self.bonds.len()
    }

    pub fn position(&self, index: usize) -> Option<&Point3<f64>> {
        self.positions.get(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondKind {
    /// Triangle edges along a row.
    IntraRow,
    /// Apex bead of one row to the base beads of the next.
    InterRow,
    /// Stacking bond to the same site one layer up.
    InterLayer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BondTerm {
    pub i: usize,
    pub j: usize,
    pub kind: BondKind,
    pub funct: u8,
    pub r0: f64,
    pub k_force: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleKind {
    /// Interior angle of an in-row triangle.
    Triangle,
    /// Collinear angle along a rail, spanning two triangles.
    Straight,
    /// Angle at a shared vertex between two rows, twice the triangle angle.
    Vertex,
    /// Interior angle of a triangle bridging two rows.
    InterRow,
    /// Right angle between an in-plane edge and a stacking bond.
    InterLayer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AngleTerm {
    pub i: usize,
    pub j: usize,
    pub k: usize,
    pub kind: AngleKind,
    pub funct: u8,
    pub theta0: f64,
    pub k_force: f64,
}

/// A four-body torsion record, used for both proper and improper dihedrals.
#[derive(Debug, Clone, PartialEq)]
pub struct TorsionTerm {
    pub i: usize,
    pub j: usize,
    pub k: usize,
    pub l: usize,
    pub funct: u8,
    pub phi0: f64,
    pub k_force: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionRestraint {
    pub atom: usize,
    pub funct: u8,
    pub k_force: [f64; 3],
}

#[derive(Debug, Clone, Default)]
pub struct Topology {
    pub bonds: Vec<BondTerm>,
    pub angles: Vec<AngleTerm>,
    pub dihedrals: Vec<TorsionTerm>,
    pub impropers: Vec<TorsionTerm>,
}

impl Topology {
    pub fn bond_count(&self, kind: BondKind) -> usize {
        self.bonds.iter().filter(|b| b.kind == kind).count()
    }

    pub fn angle_count(&self, kind: AngleKind) -> usize {
        self.angles.iter().filter(|a| a.kind == kind).count()
    }

    /// Every bead index referenced by any bonded term.
    pub fn referenced_indices(&self) -> impl Iterator<Item = usize> + '_ {
        let bonds = self.bonds.iter().flat_map(|b| [b.i, b.j]);
        let angles = self.angles.iter().flat_map(|a| [a.i, a.j, a.k]);
        let torsions = self
            .dihedrals
            .iter()
            .chain(&self.impropers)
            .flat_map(|t| [t.i, t.j, t.k, t.l]);
        bonds.chain(angles).chain(torsions)
    }
}

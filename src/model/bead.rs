use super::lattice::Site;

/// A coarse-grained graphene bead placed on the lattice.
#[derive(Debug, Clone, PartialEq)]
pub struct Bead {
    pub index: usize,
    pub site: Site,
    pub position: [f64; 3],
}

impl Bead {
    pub fn new(index: usize, site: Site, position: [f64; 3]) -> Self {
        Self {
            index,
            site,
            position,
        }
    }
}

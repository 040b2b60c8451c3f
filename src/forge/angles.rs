use super::params::ForceFieldParams;
use crate::model::lattice::{ColumnKind, LatticeDimensions, Site};
use crate::model::topology::{AngleKind, AngleTerm};

struct AngleSink<'a> {
    params: &'a ForceFieldParams,
    out: Vec<AngleTerm>,
}

impl AngleSink<'_> {
    fn push(&mut self, [i, j, k]: [usize; 3], kind: AngleKind, theta0: f64) {
        self.out.push(AngleTerm {
            i,
            j,
            k,
            kind,
            funct: self.params.angles.funct,
            theta0,
            k_force: self.params.angles.k,
        });
    }

    /// The three rotations of a triangle (a, b, c): centred on b, a and c.
    fn triangle(&mut self, a: usize, b: usize, c: usize, kind: AngleKind, theta0: f64) {
        self.push([a, b, c], kind, theta0);
        self.push([b, a, c], kind, theta0);
        self.push([b, c, a], kind, theta0);
    }
}

pub fn generate_angles(
    dims: &LatticeDimensions,
    bond_angle: f64,
    params: &ForceFieldParams,
) -> Vec<AngleTerm> {
    let mut sink = AngleSink {
        params,
        out: Vec::new(),
    };
    in_plane(dims, bond_angle, &mut sink);
    inter_row(dims, bond_angle, &mut sink);
    inter_layer(dims, &mut sink);
    sink.out
}

fn in_plane(dims: &LatticeDimensions, bond_angle: f64, sink: &mut AngleSink<'_>) {
    let straight = sink.params.angles.straight;
    let vertex = 2.0 * bond_angle;

    for (layer, row) in dims.rows() {
        for column in 1..=dims.atoms_per_row() - 2 {
            let site = Site::new(layer, row, column);
            let at = |rows, columns| dims.index_at(site, 0, rows, columns);
            let (Some(m), Some(n), Some(o)) = (at(0, 0), at(0, 1), at(0, 2)) else {
                continue;
            };

            sink.triangle(m, n, o, AngleKind::Triangle, bond_angle);

            if let Some(p) = at(0, 4) {
                sink.push([m, o, p], AngleKind::Straight, straight);
            }

            let (Some(q), Some(s), Some(r)) = (at(1, 0), at(1, 1), at(1, 2)) else {
                continue;
            };
            let hinge = match site.kind() {
                ColumnKind::Base => n,
                ColumnKind::Apex => s,
            };
            sink.push([m, hinge, q], AngleKind::Vertex, vertex);
            sink.push([o, hinge, r], AngleKind::Vertex, vertex);
        }
    }
}

fn inter_row(dims: &LatticeDimensions, bond_angle: f64, sink: &mut AngleSink<'_>) {
    for (layer, row) in dims.inner_rows() {
        for column in 1..dims.atoms_per_row() {
            let site = Site::new(layer, row, column);
            if site.kind() != ColumnKind::Apex {
                continue;
            }
            let at = |rows, columns| dims.index_at(site, 0, rows, columns);
            let (Some(m), Some(n), Some(o)) = (at(0, 0), at(1, -1), at(1, 1)) else {
                continue;
            };

            sink.triangle(m, n, o, AngleKind::InterRow, bond_angle);

            // The second triangle closes on the next apex of the same row.
            if let Some(p) = at(0, 2) {
                sink.push([o, m, p], AngleKind::InterRow, bond_angle);
                sink.push([o, p, m], AngleKind::InterRow, bond_angle);
                sink.push([m, o, p], AngleKind::InterRow, bond_angle);
            }
        }
    }
}

fn inter_layer(dims: &LatticeDimensions, sink: &mut AngleSink<'_>) {
    let right = sink.params.angles.inter_layer;

    for site in dims.sites() {
        if site.column > dims.atoms_per_row() - 2 {
            continue;
        }
        let (Some(m), Some(n), Some(above_n), Some(above_m)) = (
            dims.index_at(site, 0, 0, 0),
            dims.index_at(site, 0, 0, 1),
            dims.index_at(site, 1, 0, 1),
            dims.index_at(site, 1, 0, 0),
        ) else {
            continue;
        };
        sink.push([m, n, above_n], AngleKind::InterLayer, right);
        sink.push([n, m, above_m], AngleKind::InterLayer, right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angles_for(nt: usize, nr: usize, nl: usize) -> (LatticeDimensions, Vec<AngleTerm>) {
        let dims = LatticeDimensions::new(nt, nr, nl).unwrap();
        let angles = generate_angles(&dims, 60.0, &ForceFieldParams::default());
        (dims, angles)
    }

    fn triplets(angles: &[AngleTerm], kind: AngleKind) -> Vec<[usize; 3]> {
        angles
            .iter()
            .filter(|a| a.kind == kind)
            .map(|a| [a.i, a.j, a.k])
            .collect()
    }

    #[test]
    fn single_triangle_has_three_rotations_only() {
        let (_, angles) = angles_for(1, 1, 1);
        assert_eq!(
            triplets(&angles, AngleKind::Triangle),
            vec![[1, 2, 3], [2, 1, 3], [2, 3, 1]]
        );
        assert_eq!(angles.len(), 3);
        assert!(angles.iter().all(|a| a.theta0 == 60.0 && a.k_force == 500.0));
    }

    #[test]
    fn straight_angles_span_two_triangles_in_every_layer() {
        let (dims, angles) = angles_for(2, 1, 2);
        let straight = triplets(&angles, AngleKind::Straight);
        let offset = dims.atoms_per_layer();
        assert_eq!(straight, vec![[1, 3, 5], [1 + offset, 3 + offset, 5 + offset]]);
        assert!(
            angles
                .iter()
                .filter(|a| a.kind == AngleKind::Straight)
                .all(|a| a.theta0 == 180.0)
        );
    }

    #[test]
    fn vertex_angles_hinge_on_the_shared_bead() {
        let (_, angles) = angles_for(1, 2, 1);
        // Row 0: beads 1..=3, row 1: beads 4..=6; column 1 is a base column.
        assert_eq!(
            triplets(&angles, AngleKind::Vertex),
            vec![[1, 2, 4], [3, 2, 6]]
        );
        assert!(
            angles
                .iter()
                .filter(|a| a.kind == AngleKind::Vertex)
                .all(|a| a.theta0 == 120.0)
        );

        let (_, angles) = angles_for(2, 2, 1);
        let vertex = triplets(&angles, AngleKind::Vertex);
        // Column 2 is an apex column: the hinge is bead (row 1, column 3) = 8.
        assert!(vertex.contains(&[2, 8, 7]));
        assert!(vertex.contains(&[4, 8, 9]));
    }

    #[test]
    fn inter_row_triangles_stay_inside_the_layer() {
        let (dims, angles) = angles_for(1, 2, 2);
        let inter = triplets(&angles, AngleKind::InterRow);
        // Apex bead 2 of each layer with base beads 4 and 6 of the next row;
        // the closing apex (column 4) does not exist for a single triangle.
        let offset = dims.atoms_per_layer();
        assert_eq!(
            inter,
            vec![
                [2, 4, 6],
                [4, 2, 6],
                [4, 6, 2],
                [2 + offset, 4 + offset, 6 + offset],
                [4 + offset, 2 + offset, 6 + offset],
                [4 + offset, 6 + offset, 2 + offset],
            ]
        );
    }

    #[test]
    fn inter_row_closing_triangle_uses_next_apex() {
        let (_, angles) = angles_for(2, 2, 1);
        let inter = triplets(&angles, AngleKind::InterRow);
        assert_eq!(
            inter[..6].to_vec(),
            vec![[2, 6, 8], [6, 2, 8], [6, 8, 2], [8, 2, 4], [8, 4, 2], [2, 8, 4]]
        );
        // The last apex (column 4) has no neighbour apex at column 6.
        assert_eq!(inter.len(), 9);
    }

    #[test]
    fn inter_layer_angles_are_right_angles() {
        let (dims, angles) = angles_for(1, 1, 2);
        assert_eq!(
            triplets(&angles, AngleKind::InterLayer),
            vec![[1, 2, 5], [2, 1, 4]]
        );
        assert!(
            angles
                .iter()
                .filter(|a| a.kind == AngleKind::InterLayer)
                .all(|a| a.theta0 == 90.0)
        );
        assert_eq!(dims.total_atoms(), 6);
    }

    #[test]
    fn single_layer_has_no_inter_layer_angles() {
        let (_, angles) = angles_for(5, 5, 1);
        assert!(triplets(&angles, AngleKind::InterLayer).is_empty());
    }

    #[test]
    fn custom_bond_angle_propagates() {
        let dims = LatticeDimensions::new(2, 2, 1).unwrap();
        let angles = generate_angles(&dims, 55.0, &ForceFieldParams::default());
        for a in &angles {
            let expected = match a.kind {
                AngleKind::Triangle | AngleKind::InterRow => 55.0,
                AngleKind::Vertex => 110.0,
                AngleKind::Straight => 180.0,
                AngleKind::InterLayer => 90.0,
            };
            assert_eq!(a.theta0, expected);
        }
    }

    #[test]
    fn every_index_is_in_range() {
        for (nt, nr, nl) in [(1, 1, 1), (5, 5, 5), (4, 3, 2), (1, 4, 3)] {
            let (dims, angles) = angles_for(nt, nr, nl);
            assert!(
                angles
                    .iter()
                    .flat_map(|a| [a.i, a.j, a.k])
                    .all(|idx| (1..=dims.total_atoms()).contains(&idx))
            );
        }
    }
}

use thiserror::Error;

/// Lattice counts that cannot describe a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// A count that must be at least one was zero.
    #[error("invalid lattice dimension: {name} must be at least 1 (got {value})")]
    Zero {
        /// Name of the offending count.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// The bead count does not fit in a `usize`.
    #[error(
        "lattice of {triangles_per_row} triangles x {rows_per_layer} rows x {layer_count} layers is too large to index"
    )]
    TooLarge {
        triangles_per_row: usize,
        rows_per_layer: usize,
        layer_count: usize,
    },
}

/// Which rail of the triangulated strip a column sits on.
///
/// Odd columns form the lower rail ([`Base`](ColumnKind::Base)), even columns the
/// upper rail ([`Apex`](ColumnKind::Apex)) half a row spacing above it. The two
/// kinds carry the two interleaved triangle orientations of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Base,
    Apex,
}

impl ColumnKind {
    #[inline]
    pub fn of(column: usize) -> Self {
        if column % 2 == 1 {
            ColumnKind::Base
        } else {
            ColumnKind::Apex
        }
    }
}

/// A lattice position: layer and row are 0-based, column is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    pub layer: usize,
    pub row: usize,
    pub column: usize,
}

impl Site {
    pub fn new(layer: usize, row: usize, column: usize) -> Self {
        Self { layer, row, column }
    }

    #[inline]
    pub fn kind(&self) -> ColumnKind {
        ColumnKind::of(self.column)
    }
}

/// Shape of a stacked triangulated graphene lattice.
///
/// Owns the bead index formula; every enumerator resolves sites to indices
/// through [`index`](Self::index) and checks bounds through
/// [`contains`](Self::contains) or [`shift`](Self::shift).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeDimensions {
    triangles_per_row: usize,
    rows_per_layer: usize,
    layer_count: usize,
}

impl LatticeDimensions {
    /// Creates lattice dimensions, rejecting any count below one.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Zero`] naming the first zero count, or
    /// [`DimensionError::TooLarge`] when the bead count overflows `usize`.
    pub fn new(
        triangles_per_row: usize,
        rows_per_layer: usize,
        layer_count: usize,
    ) -> Result<Self, DimensionError> {
        for (name, value) in [
            ("triangles_per_row", triangles_per_row),
            ("rows_per_layer", rows_per_layer),
            ("layer_count", layer_count),
        ] {
            if value < 1 {
                return Err(DimensionError::Zero { name, value });
            }
        }

        // Every derived count and index is bounded by the total.
        triangles_per_row
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .and_then(|n| n.checked_mul(rows_per_layer))
            .and_then(|n| n.checked_mul(layer_count))
            .ok_or(DimensionError::TooLarge {
                triangles_per_row,
                rows_per_layer,
                layer_count,
            })?;

        Ok(Self {
            triangles_per_row,
            rows_per_layer,
            layer_count,
        })
    }

    #[inline]
    pub fn triangles_per_row(&self) -> usize {
        self.triangles_per_row
    }

    #[inline]
    pub fn rows_per_layer(&self) -> usize {
        self.rows_per_layer
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    #[inline]
    pub fn atoms_per_row(&self) -> usize {
        2 * self.triangles_per_row + 1
    }

    #[inline]
    pub fn atoms_per_layer(&self) -> usize {
        self.atoms_per_row() * self.rows_per_layer
    }

    #[inline]
    pub fn total_atoms(&self) -> usize {
        self.atoms_per_layer() * self.layer_count
    }

    /// Returns `true` if the site lies inside the lattice.
    #[inline]
    pub fn contains(&self, site: Site) -> bool {
        site.layer < self.layer_count
            && site.row < self.rows_per_layer
            && (1..=self.atoms_per_row()).contains(&site.column)
    }

    /// 1-based bead index of a site.
    ///
    /// The site must be inside the lattice; callers obtain sites from the
    /// iterators or from [`shift`](Self::shift), which never yield anything else.
    #[inline]
    pub fn index(&self, site: Site) -> usize {
        debug_assert!(self.contains(site), "site {site:?} outside {self:?}");
        site.column + self.atoms_per_row() * site.row + self.atoms_per_layer() * site.layer
    }

    /// Inverse of [`index`](Self::index).
    #[cfg(test)]
    fn site(&self, index: usize) -> Option<Site> {
        if index == 0 || index > self.total_atoms() {
            return None;
        }
        let zero_based = index - 1;
        let layer = zero_based / self.atoms_per_layer();
        let in_layer = zero_based % self.atoms_per_layer();
        Some(Site::new(
            layer,
            in_layer / self.atoms_per_row(),
            in_layer % self.atoms_per_row() + 1,
        ))
    }

    /// Moves a site by the given layer, row and column offsets.
    ///
    /// Returns `None` when the target falls outside the lattice.
    pub fn shift(&self, site: Site, layers: isize, rows: isize, columns: isize) -> Option<Site> {
        let target = Site::new(
            site.layer.checked_add_signed(layers)?,
            site.row.checked_add_signed(rows)?,
            site.column.checked_add_signed(columns)?,
        );
        self.contains(target).then_some(target)
    }

    /// Index of the site reached by [`shift`](Self::shift), if any.
    #[inline]
    pub fn index_at(
        &self,
        site: Site,
        layers: isize,
        rows: isize,
        columns: isize,
    ) -> Option<usize> {
        self.shift(site, layers, rows, columns)
            .map(|target| self.index(target))
    }

    /// All sites in ascending index order.
    pub fn sites(&self) -> impl Iterator<Item = Site> + '_ {
        self.rows().flat_map(move |(layer, row)| {
            (1..=self.atoms_per_row()).map(move |column| Site::new(layer, row, column))
        })
    }

    /// All `(layer, row)` pairs in ascending order.
    pub fn rows(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.layer_count)
            .flat_map(move |layer| (0..self.rows_per_layer).map(move |row| (layer, row)))
    }

    /// `(layer, row)` pairs whose next row exists in the same layer.
    pub fn inner_rows(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows()
            .filter(move |&(layer, row)| self.contains(Site::new(layer, row + 1, 1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn dims(nt: usize, nr: usize, nl: usize) -> LatticeDimensions {
        LatticeDimensions::new(nt, nr, nl).expect("valid dimensions")
    }

    #[test]
    fn derived_counts_follow_triangle_count() {
        let d = dims(5, 5, 5);
        assert_eq!(d.atoms_per_row(), 11);
        assert_eq!(d.atoms_per_layer(), 55);
        assert_eq!(d.total_atoms(), 275);

        let single = dims(1, 1, 1);
        assert_eq!(single.atoms_per_row(), 3);
        assert_eq!(single.total_atoms(), 3);
    }

    #[test]
    fn rejects_zero_counts() {
        assert_eq!(
            LatticeDimensions::new(0, 5, 5),
            Err(DimensionError::Zero {
                name: "triangles_per_row",
                value: 0
            })
        );
        assert!(matches!(
            LatticeDimensions::new(5, 0, 5),
            Err(DimensionError::Zero {
                name: "rows_per_layer",
                ..
            })
        ));

        let err = LatticeDimensions::new(5, 5, 0).unwrap_err();
        assert!(matches!(err, DimensionError::Zero { name: "layer_count", .. }));
        assert!(err.to_string().contains("layer_count must be at least 1"));
    }

    #[test]
    fn rejects_counts_whose_bead_total_overflows() {
        for (nt, nr, nl) in [
            (usize::MAX / 4, 5, 1),
            (usize::MAX / 2, 1, 1),
            (1, usize::MAX / 2, 2),
            (5, usize::MAX / 11, 2),
        ] {
            assert_eq!(
                LatticeDimensions::new(nt, nr, nl),
                Err(DimensionError::TooLarge {
                    triangles_per_row: nt,
                    rows_per_layer: nr,
                    layer_count: nl,
                }),
                "{nt} x {nr} x {nl}"
            );
        }

        let widest = LatticeDimensions::new((usize::MAX - 1) / 2, 1, 1).unwrap();
        assert_eq!(widest.total_atoms(), usize::MAX);
    }

    #[test]
    fn index_formula_matches_layout() {
        let d = dims(5, 5, 5);
        assert_eq!(d.index(Site::new(0, 0, 1)), 1);
        assert_eq!(d.index(Site::new(0, 0, 11)), 11);
        assert_eq!(d.index(Site::new(0, 1, 1)), 12);
        assert_eq!(d.index(Site::new(1, 0, 1)), 56);
        assert_eq!(d.index(Site::new(4, 4, 11)), 275);
    }

    #[test]
    fn index_is_injective_and_contiguous() {
        for (nt, nr, nl) in [(1, 1, 1), (2, 3, 4), (5, 5, 5), (7, 1, 3)] {
            let d = dims(nt, nr, nl);
            let indices: Vec<usize> = d.sites().map(|s| d.index(s)).collect();
            let unique: HashSet<usize> = indices.iter().copied().collect();
            assert_eq!(unique.len(), indices.len());
            assert_eq!(indices, (1..=d.total_atoms()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn site_inverts_index() {
        let d = dims(3, 4, 2);
        for site in d.sites() {
            assert_eq!(d.site(d.index(site)), Some(site));
        }
        assert_eq!(d.site(0), None);
        assert_eq!(d.site(d.total_atoms() + 1), None);
    }

    #[test]
    fn shift_stays_inside_lattice() {
        let d = dims(2, 2, 2);
        let origin = Site::new(0, 0, 1);
        assert_eq!(d.shift(origin, 0, 0, -1), None);
        assert_eq!(d.shift(origin, 0, -1, 0), None);
        assert_eq!(d.shift(origin, 0, 0, 4), Some(Site::new(0, 0, 5)));
        assert_eq!(d.shift(origin, 0, 0, 5), None);
        assert_eq!(d.shift(origin, 0, 2, 0), None);
        assert_eq!(d.shift(origin, 1, 1, 0), Some(Site::new(1, 1, 1)));
        assert_eq!(d.shift(origin, 2, 0, 0), None);
        assert_eq!(d.index_at(origin, 0, 1, 0), Some(6));
    }

    #[test]
    fn column_kind_alternates() {
        assert_eq!(Site::new(0, 0, 1).kind(), ColumnKind::Base);
        assert_eq!(Site::new(0, 0, 2).kind(), ColumnKind::Apex);
        assert_eq!(Site::new(3, 2, 11).kind(), ColumnKind::Base);
    }

    #[test]
    fn inner_rows_skip_last_row_of_each_layer() {
        let d = dims(1, 3, 2);
        let inner: Vec<_> = d.inner_rows().collect();
        assert_eq!(inner, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

        let flat = dims(5, 1, 3);
        assert_eq!(flat.inner_rows().count(), 0);
    }
}

use std::io::{self, Write};

use graphene_forge::{AngleKind, BondKind, GrapheneSheet};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

const BOND_KINDS: [(BondKind, &str); 3] = [
    (BondKind::IntraRow, "Intra-row"),
    (BondKind::InterRow, "Inter-row"),
    (BondKind::InterLayer, "Inter-layer"),
];

const ANGLE_KINDS: [(AngleKind, &str); 5] = [
    (AngleKind::Triangle, "Triangle"),
    (AngleKind::Straight, "Straight"),
    (AngleKind::Vertex, "Vertex"),
    (AngleKind::InterRow, "Inter-row"),
    (AngleKind::InterLayer, "Inter-layer"),
];

pub fn print_lattice_info(sheet: &GrapheneSheet) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let dims = &sheet.dimensions;
    let (width, length) = sheet.size();
    let [bx, by, bz] = sheet.box_size;

    let rows = vec![
        ("Triangles/Row", dims.triangles_per_row().to_string()),
        ("Rows/Layer", dims.rows_per_layer().to_string()),
        ("Layers", dims.layer_count().to_string()),
        ("Beads", sheet.bead_count().to_string()),
        ("Bead Type", sheet.bead_type.clone()),
        ("Bond Length (nm)", format!("{:.3}", sheet.bond_length)),
        ("Sheet (nm)", format!("{:.3} × {:.3}", width, length)),
        ("Box (nm)", format!("{:.3} × {:.3} × {:.3}", bx, by, bz)),
    ];

    print_kv_table(&mut out, "Lattice Summary", &rows);
}

pub fn print_topology(sheet: &GrapheneSheet) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let topology = &sheet.topology;
    let rows: [(&str, usize, &str); 5] = [
        ("Bonds", topology.bonds.len(), "terms"),
        ("Angles", topology.angles.len(), "terms"),
        ("Dihedrals", topology.dihedrals.len(), "terms"),
        ("Impropers", topology.impropers.len(), "terms"),
        ("Restraints", sheet.restraints.len(), "beads"),
    ];

    let _ = writeln!(out, "{}┌─ Bonded Topology ─┐", INDENT);
    let _ = writeln!(out, "{}┌─────────────────────┬────────┬────────┐", INDENT);
    let _ = writeln!(out, "{}│ Category            │  Count │ Unit   │", INDENT);
    let _ = writeln!(out, "{}├─────────────────────┼────────┼────────┤", INDENT);

    for (cat, count, unit) in &rows {
        let _ = writeln!(out, "{}│ {:<19} │ {:>6} │ {:<6} │", INDENT, cat, count, unit);
    }

    let _ = writeln!(out, "{}└─────────────────────┴────────┴────────┘", INDENT);
}

pub fn print_term_distribution(sheet: &GrapheneSheet) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let topology = &sheet.topology;

    let bonds: Vec<(String, usize)> = BOND_KINDS
        .iter()
        .map(|&(kind, name)| (name.to_string(), topology.bond_count(kind)))
        .filter(|(_, count)| *count > 0)
        .collect();
    print_distribution_table(&mut out, "Bond Categories", &bonds, topology.bonds.len());

    let angles: Vec<(String, usize)> = ANGLE_KINDS
        .iter()
        .map(|&(kind, name)| (name.to_string(), topology.angle_count(kind)))
        .filter(|(_, count)| *count > 0)
        .collect();
    print_distribution_table(&mut out, "Angle Categories", &angles, topology.angles.len());
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    if total == 0 {
        return;
    }

    let name_w = 12usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{left}{}{mid}{}{mid}{}{right}",
            INDENT,
            "─".repeat(name_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(dist_w + 2)
        )
    };

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Category", "Count", "Distribution",
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (name, count) in data {
        let pct = (*count as f64 / total as f64) * 100.0;
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(name, name_w),
            count,
            dist_cell,
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Metric", "Value",
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{v_line}┤",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let empty = max_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphene_forge::{SheetConfig, build_sheet};

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(make_bar(50.0, 10), "█████░░░░░");
        assert_eq!(make_bar(0.0, 4), "░░░░");
        assert_eq!(make_bar(100.0, 4), "████");
    }

    #[test]
    fn distribution_rows_are_aligned() {
        let sheet = build_sheet(&SheetConfig::default()).unwrap();
        let bonds: Vec<(String, usize)> = BOND_KINDS
            .iter()
            .map(|&(kind, name)| (name.to_string(), sheet.topology.bond_count(kind)))
            .collect();

        let mut buf = Vec::new();
        print_distribution_table(&mut buf, "Bond Categories", &bonds, sheet.topology.bonds.len());
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 3 + bonds.len() + 1);
        let widths: Vec<usize> = lines[1..].iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
        assert!(lines.iter().any(|l| l.contains("Inter-layer")));
    }

    #[test]
    fn empty_distribution_prints_nothing() {
        let mut buf = Vec::new();
        print_distribution_table(&mut buf, "Angle Categories", &[], 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn kv_table_clips_long_values() {
        let mut buf = Vec::new();
        let rows = vec![("Box (nm)", "x".repeat(200))];
        print_kv_table(&mut buf, "Lattice Summary", &rows);
        let text = String::from_utf8(buf).unwrap();
        let widths: Vec<usize> = text.lines().skip(1).map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}

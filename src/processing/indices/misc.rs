// src/processing/indices/misc.rs
use super::{IndexDefinition, IndexGroup, B1, B2, B3N, B4, B5, B6, B7, B8, B9};
use crate::processing::masked::{MaskedImage, MaskedPlane};

pub static INDICES: &[IndexDefinition] = &[
    IndexDefinition {
        name: "RDB6",
        group: IndexGroup::Misc,
        expression: "(B4 + B7) / (B6 * B2)",
        reference: "Rowan et al., 2005",
        formula: rdb6,
    },
    IndexDefinition {
        name: "RDB8",
        group: IndexGroup::Misc,
        expression: "(B7 + B9) / (B8 * B2)",
        reference: "Rowan et al., 2005",
        formula: rdb8,
    },
    IndexDefinition {
        name: "Ferrous_iron_2",
        group: IndexGroup::Misc,
        expression: "(B5 / B3N) + (B1 / B2)",
        reference: "Rowan & Mars, 2003",
        formula: ferrous_iron_2,
    },
    IndexDefinition {
        name: "Ferric_oxide",
        group: IndexGroup::Misc,
        expression: "B6 / B3N",
        reference: "Cudahy, 2012",
        formula: ferric_oxide,
    },
    IndexDefinition {
        name: "Gossan",
        group: IndexGroup::Misc,
        expression: "B6 / B2",
        reference: "Volesky et al., 2012",
        formula: gossan,
    },
    IndexDefinition {
        name: "Opaque_index",
        group: IndexGroup::Misc,
        expression: "B1 / B4",
        reference: "Cudahy, 2012",
        formula: opaque_index,
    },
    IndexDefinition {
        name: "Silicates",
        group: IndexGroup::Misc,
        expression: "B5 / B4",
        reference: "Cudahy, 2012",
        formula: silicates,
    },
    IndexDefinition {
        name: "Burn_index",
        group: IndexGroup::Misc,
        expression: "(B3N - B5) / (B3N + B6)",
        reference: "Hudak et al., 2004",
        formula: burn_index,
    },
    IndexDefinition {
        name: "Salinity",
        group: IndexGroup::Misc,
        expression: "(B4 - B5) / (B4 + B5)",
        reference: "Al-Khaier, 2003",
        formula: salinity,
    },
];

/// Relative absorption band depth around Band 6, normalized by Band 2.
fn rdb6(x: &MaskedImage<'_>) -> MaskedPlane {
    (x.band(B4) + x.band(B7)) / (x.band(B6) * x.band(B2))
}

/// Relative absorption band depth around Band 8, normalized by Band 2.
fn rdb8(x: &MaskedImage<'_>) -> MaskedPlane {
    (x.band(B7) + x.band(B9)) / (x.band(B8) * x.band(B2))
}

fn ferrous_iron_2(x: &MaskedImage<'_>) -> MaskedPlane {
    (x.band(B5) / x.band(B3N)) + (x.band(B1) / x.band(B2))
}

fn ferric_oxide(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B6) / x.band(B3N)
}

fn gossan(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B6) / x.band(B2)
}

fn opaque_index(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B1) / x.band(B4)
}

fn silicates(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B5) / x.band(B4)
}

fn burn_index(x: &MaskedImage<'_>) -> MaskedPlane {
    let b3n = x.band(B3N);
    (&b3n - x.band(B5)) / (&b3n + x.band(B6))
}

fn salinity(x: &MaskedImage<'_>) -> MaskedPlane {
    let (b4, b5) = (x.band(B4), x.band(B5));
    (&b4 - &b5) / (&b4 + &b5)
}

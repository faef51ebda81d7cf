// src/processing/indices/vnir.rs
use super::{IndexDefinition, IndexGroup, B1, B2, B3N};
use crate::processing::masked::{MaskedImage, MaskedPlane};

pub static INDICES: &[IndexDefinition] = &[
    IndexDefinition {
        name: "VI",
        group: IndexGroup::Vnir,
        expression: "B3N / B2",
        reference: "Pour & Hashim, 2011",
        formula: vi,
    },
    IndexDefinition {
        name: "NDVI",
        group: IndexGroup::Vnir,
        expression: "(B3N - B2) / (B3N + B2)",
        reference: "Rouse et al., 1974",
        formula: ndvi,
    },
    IndexDefinition {
        name: "STVI",
        group: IndexGroup::Vnir,
        expression: "(B3N / B2) * (B1 / B2)",
        reference: "Pour & Hashim, 2011",
        formula: stvi,
    },
    IndexDefinition {
        name: "Ferric_iron",
        group: IndexGroup::Vnir,
        expression: "B2 / B1",
        reference: "Rowan & Mars, 2003",
        formula: ferric_iron,
    },
    IndexDefinition {
        name: "Ferrous_iron_1",
        group: IndexGroup::Vnir,
        expression: "B1 / B2",
        reference: "Rowan et al., 2005",
        formula: ferrous_iron_1,
    },
];

/// Vegetation index
fn vi(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B3N) / x.band(B2)
}

/// Normalized difference vegetation index
fn ndvi(x: &MaskedImage<'_>) -> MaskedPlane {
    let (b2, b3n) = (x.band(B2), x.band(B3N));
    (&b3n - &b2) / (&b3n + &b2)
}

fn stvi(x: &MaskedImage<'_>) -> MaskedPlane {
    let b2 = x.band(B2);
    (x.band(B3N) / &b2) * (x.band(B1) / &b2)
}

fn ferric_iron(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B2) / x.band(B1)
}

fn ferrous_iron_1(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B1) / x.band(B2)
}

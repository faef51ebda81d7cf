// src/processing/indices/swir.rs
use super::{IndexDefinition, IndexGroup, B4, B5, B6, B7, B8, B9};
use crate::processing::masked::{MaskedImage, MaskedPlane};

pub static INDICES: &[IndexDefinition] = &[
    IndexDefinition {
        name: "AlOH",
        group: IndexGroup::Swir,
        expression: "B5 / B7",
        reference: "Cudahy, 2012",
        formula: al_oh_group,
    },
    IndexDefinition {
        name: "Laterite",
        group: IndexGroup::Swir,
        expression: "B4 / B5",
        reference: "Bierwirth, 2002",
        formula: laterite,
    },
    IndexDefinition {
        name: "Alunite",
        group: IndexGroup::Swir,
        expression: "(B7 / B5) * (B7 / B8)",
        reference: "Bierwirth, 2002",
        formula: alunite,
    },
    IndexDefinition {
        name: "CCE",
        group: IndexGroup::Swir,
        expression: "(B8 + B9) / B8",
        reference: "Rowan & Mars, 2003",
        formula: cce,
    },
    IndexDefinition {
        name: "Clay_1",
        group: IndexGroup::Swir,
        expression: "(B5 + B7) / B6",
        reference: "Rowan & Mars, 2003",
        formula: clay_1,
    },
    IndexDefinition {
        name: "Clay_2",
        group: IndexGroup::Swir,
        expression: "(B5 * B7) / B6^2",
        reference: "Bierwirth, 2002",
        formula: clay_2,
    },
    IndexDefinition {
        name: "Kaolinitic",
        group: IndexGroup::Swir,
        expression: "B7 / B5",
        reference: "Hewson et al., 2005",
        formula: kaolinitic,
    },
    IndexDefinition {
        name: "Kaolin_group",
        group: IndexGroup::Swir,
        expression: "B6 / B5",
        reference: "Cudahy, 2012",
        formula: kaolin_group,
    },
    IndexDefinition {
        name: "Kaolinite",
        group: IndexGroup::Swir,
        expression: "(B4 / B5) * (B8 / B6)",
        reference: "Pour & Hashim, 2011",
        formula: kaolinite,
    },
    IndexDefinition {
        name: "Muscovite",
        group: IndexGroup::Swir,
        expression: "B7 / B6",
        reference: "Hewson et al., 2005",
        formula: muscovite,
    },
    IndexDefinition {
        name: "OH_1",
        group: IndexGroup::Swir,
        expression: "(B7 / B6) * (B4 / B6)",
        reference: "Pour & Hashim, 2011",
        formula: oh_1,
    },
    IndexDefinition {
        name: "OH_2",
        group: IndexGroup::Swir,
        expression: "(B4 * B7 / B6) / B6",
        reference: "Ninomiya et al., 2005",
        formula: oh_2,
    },
    IndexDefinition {
        name: "OH_3",
        group: IndexGroup::Swir,
        expression: "(B4 * B7 / B5) / B5",
        reference: "Ninomiya et al., 2005",
        formula: oh_3,
    },
    IndexDefinition {
        name: "PHI",
        group: IndexGroup::Swir,
        expression: "B5 / B6",
        reference: "Hewson et al., 2005",
        formula: phi,
    },
    IndexDefinition {
        name: "AKP",
        group: IndexGroup::Swir,
        expression: "(B4 + B6) / B5",
        reference: "Rowan & Mars, 2003",
        formula: akp,
    },
    IndexDefinition {
        name: "Amphibole",
        group: IndexGroup::Swir,
        expression: "B6 / B8",
        reference: "Bierwirth, 2002",
        formula: amphibole,
    },
    IndexDefinition {
        name: "Calcite",
        group: IndexGroup::Swir,
        expression: "(B6 / B8) * (B9 / B8)",
        reference: "Pour & Hashim, 2011",
        formula: calcite,
    },
    IndexDefinition {
        name: "Dolomite",
        group: IndexGroup::Swir,
        expression: "(B6 + B8) / B7",
        reference: "Rowan & Mars, 2003",
        formula: dolomite,
    },
    IndexDefinition {
        name: "MgOH_group",
        group: IndexGroup::Swir,
        expression: "(B6 + B9) / (B7 + B8)",
        reference: "Cudahy, 2012",
        formula: mgoh_group,
    },
    IndexDefinition {
        name: "MgOH_1",
        group: IndexGroup::Swir,
        expression: "(B6 + B9) / B8",
        reference: "Hewson et al., 2005",
        formula: mgoh_1,
    },
    IndexDefinition {
        name: "MgOH_2",
        group: IndexGroup::Swir,
        expression: "B7 / B8",
        reference: "Cudahy, 2012",
        formula: mgoh_2,
    },
];

fn al_oh_group(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B5) / x.band(B7)
}

/// Alteration / laterite
fn laterite(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B4) / x.band(B5)
}

fn alunite(x: &MaskedImage<'_>) -> MaskedPlane {
    let b7 = x.band(B7);
    (&b7 / x.band(B5)) * (&b7 / x.band(B8))
}

fn cce(x: &MaskedImage<'_>) -> MaskedPlane {
    let b8 = x.band(B8);
    (&b8 + x.band(B9)) / &b8
}

fn clay_1(x: &MaskedImage<'_>) -> MaskedPlane {
    (x.band(B5) + x.band(B7)) / x.band(B6)
}

fn clay_2(x: &MaskedImage<'_>) -> MaskedPlane {
    (x.band(B5) * x.band(B7)) / x.band(B6).square()
}

fn kaolinitic(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B7) / x.band(B5)
}

fn kaolin_group(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B6) / x.band(B5)
}

fn kaolinite(x: &MaskedImage<'_>) -> MaskedPlane {
    (x.band(B4) / x.band(B5)) * (x.band(B8) / x.band(B6))
}

fn muscovite(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B7) / x.band(B6)
}

fn oh_1(x: &MaskedImage<'_>) -> MaskedPlane {
    let b6 = x.band(B6);
    (x.band(B7) / &b6) * (x.band(B4) / &b6)
}

// OH_2 and OH_3 divide twice by the same band; keep the left-to-right
// grouping so a masked divisor masks the pixel at the first division.
fn oh_2(x: &MaskedImage<'_>) -> MaskedPlane {
    let b6 = x.band(B6);
    (x.band(B4) * x.band(B7) / &b6) / &b6
}

fn oh_3(x: &MaskedImage<'_>) -> MaskedPlane {
    let b5 = x.band(B5);
    (x.band(B4) * x.band(B7) / &b5) / &b5
}

fn phi(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B5) / x.band(B6)
}

fn akp(x: &MaskedImage<'_>) -> MaskedPlane {
    (x.band(B4) + x.band(B6)) / x.band(B5)
}

fn amphibole(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B6) / x.band(B8)
}

fn calcite(x: &MaskedImage<'_>) -> MaskedPlane {
    let b8 = x.band(B8);
    (x.band(B6) / &b8) * (x.band(B9) / &b8)
}

fn dolomite(x: &MaskedImage<'_>) -> MaskedPlane {
    (x.band(B6) + x.band(B8)) / x.band(B7)
}

fn mgoh_group(x: &MaskedImage<'_>) -> MaskedPlane {
    (x.band(B6) + x.band(B9)) / (x.band(B7) + x.band(B8))
}

fn mgoh_1(x: &MaskedImage<'_>) -> MaskedPlane {
    (x.band(B6) + x.band(B9)) / x.band(B8)
}

fn mgoh_2(x: &MaskedImage<'_>) -> MaskedPlane {
    x.band(B7) / x.band(B8)
}

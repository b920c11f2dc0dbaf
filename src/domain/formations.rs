//! Formation catalog
//!
//! Static offset lists for well-known patterns, grouped the way a host menu
//! shows them. Offsets are `(row, col)` relative to the anchor cell. The engine
//! never interprets names; `stamp_pattern` only sees the offsets.

use serde::Serialize;

pub type Offset = (i32, i32);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Formation {
    pub name: &'static str,
    pub cells: &'static [Offset],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationCategory {
    pub title: &'static str,
    pub formations: &'static [Formation],
}

pub const CATALOG: &[FormationCategory] = &[
    FormationCategory {
        title: "Still Lifes",
        formations: &[
            Formation {
                name: "Block",
                cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
            },
            Formation {
                name: "Beehive",
                cells: &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
            },
        ],
    },
    FormationCategory {
        title: "Oscillators",
        formations: &[
            Formation {
                name: "Blinker",
                cells: &[(0, 0), (0, 1), (0, 2)],
            },
            Formation {
                name: "Beacon",
                cells: &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
            },
            Formation {
                name: "Toad",
                cells: &[(0, 1), (0, 2), (1, 0), (2, 3), (3, 1), (3, 2)],
            },
            Formation {
                name: "Clock",
                cells: &[(0, 2), (1, 0), (1, 2), (2, 1), (2, 3), (3, 1)],
            },
        ],
    },
    FormationCategory {
        title: "Spaceships",
        formations: &[
            // Travels one cell down and one right every 4 generations
            Formation {
                name: "Glider",
                cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            },
        ],
    },
    FormationCategory {
        title: "Glider Guns",
        formations: &[Formation {
            name: "Gosper Glider Gun",
            cells: &[
                (1, 23),
                (2, 22), (2, 24),
                (3, 12), (3, 13), (3, 21), (3, 23), (3, 24), (3, 35), (3, 36),
                (4, 11), (4, 13), (4, 20), (4, 21), (4, 23), (4, 24), (4, 35), (4, 36),
                (5, 1), (5, 2), (5, 10), (5, 17), (5, 18), (5, 19), (5, 21), (5, 23), (5, 24),
                (6, 1), (6, 2), (6, 10), (6, 13), (6, 16), (6, 19), (6, 22), (6, 24),
                (7, 10), (7, 17), (7, 18), (7, 23),
                (8, 11), (8, 13),
                (9, 12), (9, 13),
            ],
        }],
    },
];

/// Case-insensitive lookup across every category
pub fn find(name: &str) -> Option<&'static Formation> {
    CATALOG
        .iter()
        .flat_map(|category| category.formations.iter())
        .find(|formation| formation.name.eq_ignore_ascii_case(name))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FormationManifest<'a> {
    format_version: u32,
    categories: &'a [FormationCategory],
}

/// JSON description of the catalog for hosts that build their own menus
pub fn manifest_json() -> String {
    let out = FormationManifest {
        format_version: 1,
        categories: CATALOG,
    };
    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
}

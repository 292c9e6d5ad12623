use cubiomes::enums::MCVersion;

/// Declaration order matters: lookup is first-match, so `"1.16.1"` and
/// `"1.16.5"` must be tried before the shorter `"1.16"` prefix.
const VERSIONS: &[(&str, MCVersion)] = &[
    ("1.0", MCVersion::MC_1_0),
    ("1.1", MCVersion::MC_1_1),
    ("1.2", MCVersion::MC_1_2),
    ("1.3", MCVersion::MC_1_3),
    ("1.4", MCVersion::MC_1_4),
    ("1.5", MCVersion::MC_1_5),
    ("1.6", MCVersion::MC_1_6),
    ("1.7", MCVersion::MC_1_7),
    ("1.8", MCVersion::MC_1_8),
    ("1.9", MCVersion::MC_1_9),
    ("1.10", MCVersion::MC_1_10),
    ("1.11", MCVersion::MC_1_11),
    ("1.12", MCVersion::MC_1_12),
    ("1.13", MCVersion::MC_1_13),
    ("1.14", MCVersion::MC_1_14),
    ("1.15", MCVersion::MC_1_15),
    ("1.16.1", MCVersion::MC_1_16_1),
    ("1.16.5", MCVersion::MC_1_16_5),
    ("1.16", MCVersion::MC_1_16),
    ("1.17", MCVersion::MC_1_17),
    ("1.17.1", MCVersion::MC_1_17_1),
    ("1.18", MCVersion::MC_1_18),
    ("1.18.2", MCVersion::MC_1_18_2),
    ("1.19", MCVersion::MC_1_19),
    ("1.19.2", MCVersion::MC_1_19_2),
    ("1.19.4", MCVersion::MC_1_19_4),
    ("1.20", MCVersion::MC_1_20),
    ("1.20.6", MCVersion::MC_1_20_6),
    ("1.21", MCVersion::MC_1_21),
];

/// Parses a version string into an `MCVersion`, or `None` if it is not a
/// recognised release.
pub fn parse(s: &str) -> Option<MCVersion> {
    VERSIONS
        .iter()
        .find(|(name, _)| *name == s)
        .map(|(_, v)| *v)
}

/// Names in declaration order, for discovery endpoints.
pub fn names() -> impl Iterator<Item = &'static str> {
    VERSIONS.iter().map(|(name, _)| *name)
}

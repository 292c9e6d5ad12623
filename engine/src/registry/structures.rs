use cubiomes::enums::StructureType;

/// Structure kinds the engine knows how to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum StructureTag {
    Feature,
    DesertPyramid,
    JungleTemple,
    SwampHut,
    Igloo,
    Village,
    OceanRuin,
    Shipwreck,
    Monument,
    Mansion,
    Outpost,
    RuinedPortal,
    AncientCity,
    Treasure,
    Fortress,
    Bastion,
    EndCity,
    TrailRuins,
    TrialChambers,
}

/// Declaration order matches the order structure queries are validated in,
/// and the order `names()` enumerates them for discovery endpoints.
const STRUCTURES: &[(&str, StructureTag)] = &[
    ("feature", StructureTag::Feature),
    ("desert_pyramid", StructureTag::DesertPyramid),
    ("jungle_temple", StructureTag::JungleTemple),
    ("swamp_hut", StructureTag::SwampHut),
    ("igloo", StructureTag::Igloo),
    ("village", StructureTag::Village),
    ("ocean_ruin", StructureTag::OceanRuin),
    ("shipwreck", StructureTag::Shipwreck),
    ("monument", StructureTag::Monument),
    ("mansion", StructureTag::Mansion),
    ("outpost", StructureTag::Outpost),
    ("ruined_portal", StructureTag::RuinedPortal),
    ("ancient_city", StructureTag::AncientCity),
    ("treasure", StructureTag::Treasure),
    ("fortress", StructureTag::Fortress),
    ("bastion", StructureTag::Bastion),
    ("end_city", StructureTag::EndCity),
    ("trail_ruins", StructureTag::TrailRuins),
    ("trial_chambers", StructureTag::TrialChambers),
];

pub fn parse(name: &str) -> Option<StructureTag> {
    STRUCTURES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, t)| *t)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    STRUCTURES.iter().map(|(name, _)| *name)
}

impl From<StructureTag> for StructureType {
    fn from(tag: StructureTag) -> StructureType {
        match tag {
            StructureTag::Feature => StructureType::Feature,
            StructureTag::DesertPyramid => StructureType::Desert_Pyramid,
            StructureTag::JungleTemple => StructureType::Jungle_Temple,
            StructureTag::SwampHut => StructureType::Swamp_Hut,
            StructureTag::Igloo => StructureType::Igloo,
            StructureTag::Village => StructureType::Village,
            StructureTag::OceanRuin => StructureType::Ocean_Ruin,
            StructureTag::Shipwreck => StructureType::Shipwreck,
            StructureTag::Monument => StructureType::Monument,
            StructureTag::Mansion => StructureType::Mansion,
            StructureTag::Outpost => StructureType::Outpost,
            StructureTag::RuinedPortal => StructureType::Ruined_Portal,
            StructureTag::AncientCity => StructureType::Ancient_City,
            StructureTag::Treasure => StructureType::Treasure,
            StructureTag::Fortress => StructureType::Fortress,
            StructureTag::Bastion => StructureType::Bastion,
            StructureTag::EndCity => StructureType::End_City,
            StructureTag::TrailRuins => StructureType::Trail_Ruins,
            StructureTag::TrialChambers => StructureType::Trial_Chambers,
        }
    }
}

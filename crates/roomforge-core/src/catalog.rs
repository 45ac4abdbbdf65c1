//! Furniture catalogue: kinds, categories, placement rules, and per-room
//! recipes.
//!
//! The catalogue ships placeholder footprints. Real meshes are a rendering
//! backend concern, referenced only through the opaque `asset` handle on
//! each item.

use glam::Vec2;

/// Which placement strategy the solver applies to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementRule {
    AgainstWall,
    Center,
    Corner,
    NearWindow,
}

/// Visual category of a furniture item, used for placeholder heights and
/// colors during scene assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FurnitureCategory {
    Seating,
    Table,
    DiningTable,
    Storage,
    Bed,
    Desk,
    Decor,
    Appliance,
}

/// A concrete catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FurnitureKind {
    Sofa,
    CoffeeTable,
    TvStand,
    SideTable,
    Plant,
    Bed,
    Nightstand,
    Wardrobe,
    Dresser,
    DiningTable,
    Chair,
    Counter,
    Appliance,
    Shelf,
    Vanity,
    Toilet,
    Desk,
    OfficeChair,
    Bookshelf,
}

impl FurnitureKind {
    /// Default footprint in meters (width along the wall, depth into the
    /// room).
    pub fn footprint(&self) -> Vec2 {
        match self {
            FurnitureKind::Sofa => Vec2::new(2.0, 0.9),
            FurnitureKind::CoffeeTable => Vec2::new(1.1, 0.6),
            FurnitureKind::TvStand => Vec2::new(1.6, 0.4),
            FurnitureKind::SideTable => Vec2::new(0.5, 0.5),
            FurnitureKind::Plant => Vec2::new(0.4, 0.4),
            FurnitureKind::Bed => Vec2::new(1.6, 2.1),
            FurnitureKind::Nightstand => Vec2::new(0.5, 0.4),
            FurnitureKind::Wardrobe => Vec2::new(1.8, 0.6),
            FurnitureKind::Dresser => Vec2::new(1.2, 0.5),
            FurnitureKind::DiningTable => Vec2::new(1.4, 0.8),
            FurnitureKind::Chair => Vec2::new(0.45, 0.45),
            FurnitureKind::Counter => Vec2::new(2.0, 0.6),
            FurnitureKind::Appliance => Vec2::new(0.6, 0.6),
            FurnitureKind::Shelf => Vec2::new(1.0, 0.35),
            FurnitureKind::Vanity => Vec2::new(0.9, 0.5),
            FurnitureKind::Toilet => Vec2::new(0.4, 0.65),
            FurnitureKind::Desk => Vec2::new(1.4, 0.7),
            FurnitureKind::OfficeChair => Vec2::new(0.6, 0.6),
            FurnitureKind::Bookshelf => Vec2::new(1.2, 0.35),
        }
    }

    pub fn category(&self) -> FurnitureCategory {
        match self {
            FurnitureKind::Sofa | FurnitureKind::Chair | FurnitureKind::OfficeChair => {
                FurnitureCategory::Seating
            }
            FurnitureKind::CoffeeTable | FurnitureKind::SideTable | FurnitureKind::Nightstand => {
                FurnitureCategory::Table
            }
            FurnitureKind::DiningTable => FurnitureCategory::DiningTable,
            FurnitureKind::TvStand
            | FurnitureKind::Wardrobe
            | FurnitureKind::Dresser
            | FurnitureKind::Counter
            | FurnitureKind::Shelf
            | FurnitureKind::Vanity
            | FurnitureKind::Bookshelf => FurnitureCategory::Storage,
            FurnitureKind::Bed => FurnitureCategory::Bed,
            FurnitureKind::Desk => FurnitureCategory::Desk,
            FurnitureKind::Plant => FurnitureCategory::Decor,
            FurnitureKind::Appliance | FurnitureKind::Toilet => FurnitureCategory::Appliance,
        }
    }

    pub fn placement_rule(&self) -> PlacementRule {
        match self {
            FurnitureKind::Sofa
            | FurnitureKind::TvStand
            | FurnitureKind::Bed
            | FurnitureKind::Nightstand
            | FurnitureKind::Wardrobe
            | FurnitureKind::Dresser
            | FurnitureKind::Counter
            | FurnitureKind::Appliance
            | FurnitureKind::Shelf
            | FurnitureKind::Vanity
            | FurnitureKind::Toilet
            | FurnitureKind::Bookshelf => PlacementRule::AgainstWall,
            FurnitureKind::CoffeeTable
            | FurnitureKind::DiningTable
            | FurnitureKind::Chair
            | FurnitureKind::OfficeChair => PlacementRule::Center,
            FurnitureKind::SideTable | FurnitureKind::Plant => PlacementRule::Corner,
            FurnitureKind::Desk => PlacementRule::NearWindow,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            FurnitureKind::Sofa => "sofa",
            FurnitureKind::CoffeeTable => "coffee-table",
            FurnitureKind::TvStand => "tv-stand",
            FurnitureKind::SideTable => "side-table",
            FurnitureKind::Plant => "plant",
            FurnitureKind::Bed => "bed",
            FurnitureKind::Nightstand => "nightstand",
            FurnitureKind::Wardrobe => "wardrobe",
            FurnitureKind::Dresser => "dresser",
            FurnitureKind::DiningTable => "dining-table",
            FurnitureKind::Chair => "chair",
            FurnitureKind::Counter => "counter",
            FurnitureKind::Appliance => "appliance",
            FurnitureKind::Shelf => "shelf",
            FurnitureKind::Vanity => "vanity",
            FurnitureKind::Toilet => "toilet",
            FurnitureKind::Desk => "desk",
            FurnitureKind::OfficeChair => "office-chair",
            FurnitureKind::Bookshelf => "bookshelf",
        }
    }

    pub const ALL: [FurnitureKind; 19] = [
        FurnitureKind::Sofa,
        FurnitureKind::CoffeeTable,
        FurnitureKind::TvStand,
        FurnitureKind::SideTable,
        FurnitureKind::Plant,
        FurnitureKind::Bed,
        FurnitureKind::Nightstand,
        FurnitureKind::Wardrobe,
        FurnitureKind::Dresser,
        FurnitureKind::DiningTable,
        FurnitureKind::Chair,
        FurnitureKind::Counter,
        FurnitureKind::Appliance,
        FurnitureKind::Shelf,
        FurnitureKind::Vanity,
        FurnitureKind::Toilet,
        FurnitureKind::Desk,
        FurnitureKind::OfficeChair,
        FurnitureKind::Bookshelf,
    ];
}

/// Supported room types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomKind {
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    Office,
}

impl RoomKind {
    /// Which furniture a room of this type gets by default.
    pub fn recipe(&self) -> &'static [FurnitureKind] {
        match self {
            RoomKind::LivingRoom => &[
                FurnitureKind::Sofa,
                FurnitureKind::CoffeeTable,
                FurnitureKind::TvStand,
                FurnitureKind::SideTable,
                FurnitureKind::Plant,
            ],
            RoomKind::Bedroom => &[
                FurnitureKind::Bed,
                FurnitureKind::Nightstand,
                FurnitureKind::Wardrobe,
                FurnitureKind::Dresser,
                FurnitureKind::Plant,
            ],
            RoomKind::Kitchen => &[
                FurnitureKind::DiningTable,
                FurnitureKind::Chair,
                FurnitureKind::Counter,
                FurnitureKind::Appliance,
                FurnitureKind::Shelf,
            ],
            RoomKind::Bathroom => &[
                FurnitureKind::Vanity,
                FurnitureKind::Toilet,
                FurnitureKind::Plant,
            ],
            RoomKind::Office => &[
                FurnitureKind::Desk,
                FurnitureKind::OfficeChair,
                FurnitureKind::Bookshelf,
                FurnitureKind::Plant,
            ],
        }
    }
}

/// Supported interior design styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomStyle {
    Modern,
    Scandinavian,
    Industrial,
    Minimalist,
    Bohemian,
    Classic,
    Japanese,
    Mediterranean,
}

impl RoomStyle {
    pub fn slug(&self) -> &'static str {
        match self {
            RoomStyle::Modern => "modern",
            RoomStyle::Scandinavian => "scandinavian",
            RoomStyle::Industrial => "industrial",
            RoomStyle::Minimalist => "minimalist",
            RoomStyle::Bohemian => "bohemian",
            RoomStyle::Classic => "classic",
            RoomStyle::Japanese => "japanese",
            RoomStyle::Mediterranean => "mediterranean",
        }
    }

    pub const ALL: [RoomStyle; 8] = [
        RoomStyle::Modern,
        RoomStyle::Scandinavian,
        RoomStyle::Industrial,
        RoomStyle::Minimalist,
        RoomStyle::Bohemian,
        RoomStyle::Classic,
        RoomStyle::Japanese,
        RoomStyle::Mediterranean,
    ];
}

/// A furniture item handed to the placement solver. The catalogue fills
/// footprint and placement rule from the kind's defaults; callers may
/// override both for custom items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FurnitureItem {
    pub id: String,
    pub kind: FurnitureKind,
    pub category: FurnitureCategory,
    /// [width along wall, depth into room] in meters.
    pub footprint: Vec2,
    pub placement: PlacementRule,
    /// Opaque visual-asset reference, passed through to the rendering
    /// backend.
    pub asset: String,
}

impl FurnitureItem {
    pub fn new(kind: FurnitureKind, style: RoomStyle) -> Self {
        Self {
            id: format!("{}-{}", kind.slug(), style.slug()),
            kind,
            category: kind.category(),
            footprint: kind.footprint(),
            placement: kind.placement_rule(),
            asset: format!("/assets/furniture/{}/{}.glb", style.slug(), kind.slug()),
        }
    }

    pub fn with_footprint(mut self, footprint: Vec2) -> Self {
        self.footprint = footprint;
        self
    }

    pub fn with_placement(mut self, placement: PlacementRule) -> Self {
        self.placement = placement;
        self
    }
}

/// Furniture items for a room type and style combination.
pub fn furniture_for_room(room: RoomKind, style: RoomStyle) -> Vec<FurnitureItem> {
    room.recipe()
        .iter()
        .map(|kind| FurnitureItem::new(*kind, style))
        .collect()
}

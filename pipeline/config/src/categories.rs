//! Built-in project lists.
//!
//! Two categories chosen so that students working blind should recover two
//! clusters: animal/ape community projects and fantasy/art collectibles.

use types::Category;

/// Label of the animal/ape category.
pub const CATEGORY_A_ANIMAL_APE: &str = "CATEGORY_A_ANIMAL_APE";
/// Label of the fantasy/art category.
pub const CATEGORY_B_FANTASY_ART: &str = "CATEGORY_B_FANTASY_ART";

const ANIMAL_APE: [&str; 20] = [
    "BoredApeYachtClub",
    "Mutant Ape Yacht Club",
    "0xApes",
    "Bored Ape Kennel Club",
    "Angry Ape Army",
    "Angry Apes Society",
    "Ape Invaders",
    "Desperate ApeWives",
    "apekidsclub",
    "CyberKongz",
    "Rumble Kong League",
    "Alpha Kongs Club",
    "Cool Cats",
    "Lazy Lions",
    "Pudgy Penguins",
    "LilPudgys",
    "Sappy Seals",
    "Tubby Cats",
    "Anonymice",
    "Boss Beauties",
];

const FANTASY_ART: [&str; 19] = [
    "Azuki",
    "CloneX",
    "Doodles",
    "Moonbirds",
    "CryptoPunks",
    "World of Women",
    "VeeFriends",
    "DigiDaigaku",
    "Murakami.Flowers",
    "Akutars",
    "Imaginary Ones",
    "The Humanoids",
    "Wizards & Dragons Game",
    "Lives of Asuna",
    "Galactic Apes",
    "MOAR by Joan Cornella",
    "AlphaBetty Doodles",
    "Chimpers",
    "a KID called BEAST",
];

/// The default category lists, in collection order.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(CATEGORY_A_ANIMAL_APE, ANIMAL_APE),
        Category::new(CATEGORY_B_FANTASY_ART, FANTASY_ART),
    ]
}

//! Static page copy served alongside the interaction state.
//!
//! The presentation layer renders these as-is; nothing in the core mutates
//! them.

pub const TITLE: &str = "Feline Fascination";
pub const TAGLINE: &str = "Discover the Wonderful World of Cats";

/// Bullet points for the "Characteristics of Cats" card.
pub const CHARACTERISTICS: &[&str] = &[
    "Independent nature",
    "Excellent hunters with sharp claws and teeth",
    "Flexible bodies and quick reflexes",
    "Keen senses, especially hearing and night vision",
    "Communicate through vocalizations, body language, and scent",
];

/// Bullet points for the "Popular Cat Breeds" card.
pub const BREEDS: &[&str] = &[
    "Siamese",
    "Persian",
    "Maine Coon",
    "Bengal",
    "Scottish Fold",
];

/// Gallery shown when the config does not list its own images.
/// The first entry is the hero image.
pub const DEFAULT_IMAGES: &[&str] = &[
    "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4d/Cat_November_2010-1a.jpg/1200px-Cat_November_2010-1a.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/b/bc/Juvenile_Ragdoll.jpg/1200px-Juvenile_Ragdoll.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/6/68/Orange_tabby_cat_sitting_on_fallen_leaves-Hisashi-01A.jpg/1200px-Orange_tabby_cat_sitting_on_fallen_leaves-Hisashi-01A.jpg",
    "https://upload.wikimedia.org/wikipedia/commons/thumb/1/15/Cat_August_2010-4.jpg/1200px-Cat_August_2010-4.jpg",
];

pub fn default_images() -> Vec<String> {
    DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect()
}

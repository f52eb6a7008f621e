use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_RAW_BASE: &str = "https://raw.githubusercontent.com/maartenvandenbroeck/Dog-Breeds-Dataset/main";
pub const DEFAULT_TREE_BASE: &str = "https://github.com/maartenvandenbroeck/Dog-Breeds-Dataset/tree/main";

/// Breeds whose dataset folder does not follow the usual naming
const FOLDER_OVERRIDES: &[(&str, &str)] = &[
    ("Cirnechi dell’Etna", "Cirnechi_dell_Etna"),
    ("Cirneco dell’Etna", "Cirnechi_dell_Etna"),
    ("Chien d’Artois", "Chien_dArtois"),
    ("St. John’s Water Dog", "St_Johns_Water_Dog"),
];

/// Convert a breed name into the dataset's folder name
///
/// Accents are folded to ASCII, punctuation is dropped and spaces become
/// underscores.
pub fn breed_folder(breed: &str) -> String {
    if let Some((_, folder)) = FOLDER_OVERRIDES.iter().find(|(name, _)| *name == breed) {
        return folder.to_string();
    }

    breed
        .nfkd()
        .filter(|c| c.is_ascii())
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_ascii_whitespace())
        .collect::<String>()
        .trim()
        .replace(' ', "_")
}

/// Builds photo links keyed by breed name
///
/// Links are only constructed, never fetched.
#[derive(Debug, Clone)]
pub struct ImageLinks {
    raw_base: String,
    tree_base: String,
}

impl ImageLinks {
    pub fn new(raw_base: impl Into<String>, tree_base: impl Into<String>) -> Self {
        Self {
            raw_base: raw_base.into().trim_end_matches('/').to_string(),
            tree_base: tree_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Best-guess URL of the first photo for a breed
    pub fn image_url(&self, breed: &str) -> String {
        let folder = urlencoding::encode(&breed_folder(breed)).into_owned();
        format!("{}/{}/{}_1.jpg", self.raw_base, folder, folder)
    }

    /// Link to the breed's folder, for browsing more photos
    pub fn folder_url(&self, breed: &str) -> String {
        let folder = urlencoding::encode(&breed_folder(breed)).into_owned();
        format!("{}/{}", self.tree_base, folder)
    }
}

impl Default for ImageLinks {
    fn default() -> Self {
        Self::new(DEFAULT_RAW_BASE, DEFAULT_TREE_BASE)
    }
}

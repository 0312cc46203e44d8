//! Classification of placed blocks.
//!
//! Works on the block identifier alone (`minecraft:red_shulker_box` or the
//! translation key `block.minecraft.red_shulker_box`).

/// Identifier suffix shared by every shulker box variant.
const CONTAINER_ID: &str = "shulker_box";

/// Color reported for identifiers that are not shulker boxes.
pub const UNKNOWN_COLOR: &str = "Unknown";

/// Whether the block identifier names a shulker box.
pub fn is_container(block_id: &str) -> bool {
    block_id.contains(CONTAINER_ID)
}

/// Capitalized color name from a block identifier.
///
/// The undyed box yields an empty string.
pub fn color_label(block_id: &str) -> String {
    if !is_container(block_id) {
        return UNKNOWN_COLOR.to_string();
    }

    let name = block_id.rsplit(|c: char| c == '.' || c == ':').next().unwrap_or(block_id);
    if name == CONTAINER_ID {
        return String::new();
    }
    capitalize_words(&name.replace("_shulker_box", "").replace('_', " "))
}

/// Uppercase the first letter of each word and lowercase the rest.
pub fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_container() {
        assert!(is_container("minecraft:shulker_box"));
        assert!(is_container("block.minecraft.light_blue_shulker_box"));
        assert!(!is_container("minecraft:chest"));
    }

    #[test]
    fn test_color_label() {
        assert_eq!(color_label("minecraft:red_shulker_box"), "Red");
        assert_eq!(color_label("block.minecraft.light_gray_shulker_box"), "Light Gray");
        assert_eq!(color_label("minecraft:shulker_box"), "");
        assert_eq!(color_label("block.minecraft.shulker_box"), "");
        assert_eq!(color_label("minecraft:barrel"), "Unknown");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("light BLUE"), "Light Blue");
        assert_eq!(capitalize_words("  red  "), "Red");
        assert_eq!(capitalize_words(""), "");
    }
}

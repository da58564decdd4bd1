//! The 22 cards of the Major Arcana.
//!
//! The catalog is fixed at compile time and never mutated. Cards are drawn
//! by uniform random index through a [`RandomSource`](crate::RandomSource).

use crate::error::{CoreError, CoreResult};
use crate::language::Language;
use crate::random::RandomSource;

/// A tarot card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// English name, e.g. "The Fool".
    pub name_en: &'static str,
    /// Traditional Chinese name, e.g. "愚者".
    pub name_zh: &'static str,
    /// Relative path of the card face image.
    pub image_ref: &'static str,
}

impl Card {
    /// The card's name in the given language.
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.name_en,
            Language::Zh => self.name_zh,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name_en, self.name_zh)
    }
}

const fn card(name_en: &'static str, name_zh: &'static str, image_ref: &'static str) -> Card {
    Card {
        name_en,
        name_zh,
        image_ref,
    }
}

/// The Major Arcana, in traditional order (0 = The Fool).
pub const MAJOR_ARCANA: &[Card] = &[
    card("The Fool", "愚者", "cards/00-the-fool.jpg"),
    card("The Magician", "魔術師", "cards/01-the-magician.jpg"),
    card("The High Priestess", "女祭司", "cards/02-the-high-priestess.jpg"),
    card("The Empress", "皇后", "cards/03-the-empress.jpg"),
    card("The Emperor", "皇帝", "cards/04-the-emperor.jpg"),
    card("The Hierophant", "教皇", "cards/05-the-hierophant.jpg"),
    card("The Lovers", "戀人", "cards/06-the-lovers.jpg"),
    card("The Chariot", "戰車", "cards/07-the-chariot.jpg"),
    card("Strength", "力量", "cards/08-strength.jpg"),
    card("The Hermit", "隱者", "cards/09-the-hermit.jpg"),
    card("Wheel of Fortune", "命運之輪", "cards/10-wheel-of-fortune.jpg"),
    card("Justice", "正義", "cards/11-justice.jpg"),
    card("The Hanged Man", "倒吊人", "cards/12-the-hanged-man.jpg"),
    card("Death", "死神", "cards/13-death.jpg"),
    card("Temperance", "節制", "cards/14-temperance.jpg"),
    card("The Devil", "惡魔", "cards/15-the-devil.jpg"),
    card("The Tower", "高塔", "cards/16-the-tower.jpg"),
    card("The Star", "星星", "cards/17-the-star.jpg"),
    card("The Moon", "月亮", "cards/18-the-moon.jpg"),
    card("The Sun", "太陽", "cards/19-the-sun.jpg"),
    card("Judgement", "審判", "cards/20-judgement.jpg"),
    card("The World", "世界", "cards/21-the-world.jpg"),
];

/// Draw one card uniformly at random from the catalog.
pub fn draw(rng: &mut dyn RandomSource) -> Card {
    MAJOR_ARCANA[rng.index(MAJOR_ARCANA.len())]
}

/// Find a card by its English or Chinese name (English match is case-insensitive).
pub fn find(name: &str) -> CoreResult<Card> {
    let needle = name.trim();
    MAJOR_ARCANA
        .iter()
        .find(|c| c.name_en.eq_ignore_ascii_case(needle) || c.name_zh == needle)
        .copied()
        .ok_or_else(|| CoreError::CardNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Sequence;

    #[test]
    fn catalog_has_22_cards() {
        assert_eq!(MAJOR_ARCANA.len(), 22);
        assert_eq!(MAJOR_ARCANA[0].name_en, "The Fool");
        assert_eq!(MAJOR_ARCANA[21].name_en, "The World");
    }

    #[test]
    fn names_and_images_are_unique() {
        for (i, a) in MAJOR_ARCANA.iter().enumerate() {
            for b in &MAJOR_ARCANA[i + 1..] {
                assert_ne!(a.name_en, b.name_en);
                assert_ne!(a.name_zh, b.name_zh);
                assert_ne!(a.image_ref, b.image_ref);
            }
        }
    }

    #[test]
    fn localized_name() {
        let fool = MAJOR_ARCANA[0];
        assert_eq!(fool.name(Language::En), "The Fool");
        assert_eq!(fool.name(Language::Zh), "愚者");
    }

    #[test]
    fn draw_uses_random_index() {
        let mut rng = Sequence::new(vec![13, 17]);
        assert_eq!(draw(&mut rng).name_en, "Death");
        assert_eq!(draw(&mut rng).name_en, "The Star");
    }

    #[test]
    fn find_by_either_name() {
        assert_eq!(find("the moon").unwrap().name_zh, "月亮");
        assert_eq!(find("愚者").unwrap().name_en, "The Fool");
        assert!(matches!(find("The Joker"), Err(CoreError::CardNotFound(_))));
    }
}

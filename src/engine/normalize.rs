use std::borrow::Cow;

use crate::engine::prelude::*;

/// Read-only view of a card's colors, used when evaluating color questions.
///
/// Cards that carry `colors` directly are borrowed as is. Multi-faced cards
/// without a card level `colors` list get the colors of their first two
/// faces combined. The combined list only lives as long as the view and is
/// never written back into the card.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorView<'a> {
    colors: Cow<'a, [String]>,
}

impl<'a> ColorView<'a> {
    pub fn of(card: &'a Card) -> Self {
        if let Some(colors) = &card.colors {
            return Self { colors: Cow::Borrowed(colors.as_slice()) };
        }

        let colors = match &card.card_faces {
            Some(faces) => {
                log::trace!("normalize: combining face colors for '{}'", card.name);
                faces
                    .iter()
                    .take(2)
                    .flat_map(|face| face.colors.iter().flatten().cloned())
                    .collect()
            }
            None => vec![],
        };
        Self { colors: Cow::Owned(colors) }
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.iter().any(|code| Color::from_code(code) == Some(color))
    }

    /// Number of color entries. Faces sharing a color count it twice.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

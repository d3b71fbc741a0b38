//! Armament loadouts attached to a spaceship.
//!
//! A loadout is the ordered list of `(title, quantity)` pairs a ship carries.
//! Titles are unique within one loadout: when a title repeats in the input,
//! the later quantity replaces the earlier one and the entry keeps the
//! position of its first occurrence.

use std::collections::HashMap;

use super::spaceship::{SpaceshipValidationError, exceeds_text_limit};

/// One armament entry: a catalogue title and how many the ship carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArmamentItem {
    title: String,
    quantity: u32,
}

impl ArmamentItem {
    /// Title as stored in the shared armament catalogue.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Number of units carried.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Validated, de-duplicated list of armament items.
///
/// # Examples
/// ```
/// use fleet_backend::domain::ArmamentLoadout;
///
/// let loadout = ArmamentLoadout::try_from_pairs([
///     ("Turbolaser", 60),
///     ("Ion Cannon", 60),
///     ("Turbolaser", 40),
/// ])
/// .expect("valid loadout");
///
/// let titles: Vec<_> = loadout.iter().map(|item| (item.title(), item.quantity())).collect();
/// assert_eq!(titles, vec![("Turbolaser", 40), ("Ion Cannon", 60)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArmamentLoadout {
    items: Vec<ArmamentItem>,
}

impl ArmamentLoadout {
    /// An empty loadout.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a loadout from raw pairs.
    ///
    /// Titles are trimmed; a blank title fails with
    /// [`SpaceshipValidationError::ArmamentTitleRequired`] and an overlong one
    /// with [`SpaceshipValidationError::ArmamentTitleTooLong`], both carrying
    /// the zero-based input position.
    pub fn try_from_pairs<I, S>(pairs: I) -> Result<Self, SpaceshipValidationError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut items: Vec<ArmamentItem> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (index, (raw_title, quantity)) in pairs.into_iter().enumerate() {
            let title = raw_title.as_ref().trim();
            if title.is_empty() {
                return Err(SpaceshipValidationError::ArmamentTitleRequired { index });
            }
            if exceeds_text_limit(title) {
                return Err(SpaceshipValidationError::ArmamentTitleTooLong { index });
            }
            match positions.get(title) {
                Some(&position) => {
                    if let Some(existing) = items.get_mut(position) {
                        existing.quantity = quantity;
                    }
                }
                None => {
                    positions.insert(title.to_owned(), items.len());
                    items.push(ArmamentItem {
                        title: title.to_owned(),
                        quantity,
                    });
                }
            }
        }

        Ok(Self { items })
    }

    /// Iterate over the items in loadout order.
    pub fn iter(&self) -> impl Iterator<Item = &ArmamentItem> {
        self.items.iter()
    }

    /// Distinct titles in loadout order.
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(ArmamentItem::title).collect()
    }

    /// Quantity carried for `title`, if present.
    pub fn quantity_of(&self, title: &str) -> Option<u32> {
        self.items
            .iter()
            .find(|item| item.title == title)
            .map(ArmamentItem::quantity)
    }

    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the loadout carries nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compare two loadouts as sets of `(title, quantity)` pairs.
    pub fn same_items_as(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .items
                .iter()
                .all(|item| other.quantity_of(&item.title) == Some(item.quantity))
    }
}

impl<'a> IntoIterator for &'a ArmamentLoadout {
    type Item = &'a ArmamentItem;
    type IntoIter = std::slice::Iter<'a, ArmamentItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

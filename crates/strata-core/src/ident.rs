//! BEM entity identifiers using string interning for efficient storage and comparison
//!
//! This module provides the [`Name`] type with an efficient string-interner based
//! approach, plus the structured [`BemIdent`] identifier built from names.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient name storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient name segment type using string interning
///
/// A [`Name`] holds one segment of a BEM identifier (a block name, an element
/// name, a modifier name, or a modifier value). Interning makes names cheap to
/// copy, compare, and use as map keys.
///
/// # Examples
///
/// ```
/// use strata_core::ident::Name;
///
/// // Create names from segments
/// let block = Name::new("button");
/// let elem = Name::new("icon");
///
/// assert_eq!(block, "button");
/// assert_ne!(block, elem);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name(DefaultSymbol);

impl Name {
    /// Creates a `Name` from &str.
    ///
    /// # Arguments
    ///
    /// * `segment` - The string representation of the name segment
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::ident::Name;
    ///
    /// let block = Name::new("menu");
    /// let modifier = Name::new("theme");
    /// ```
    pub fn new(segment: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(segment);
        Self(symbol)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Name {
    /// Creates a `Name` from a string slice
    ///
    /// This is a convenience implementation that calls `Name::new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::ident::Name;
    ///
    /// let name: Name = "sidebar".into();
    /// assert_eq!(name, "sidebar");
    /// ```
    fn from(segment: &str) -> Self {
        Self::new(segment)
    }
}

impl PartialEq<str> for Name {
    /// Allows direct comparison with string slices: `name == "string"`
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::ident::Name;
    ///
    /// let name = Name::new("button");
    /// assert!(name == "button");
    /// ```
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Name {
    /// Allows direct comparison with string references: `name == &string`
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::ident::Name;
    ///
    /// let name = Name::new("button");
    /// let segment = "button";
    /// assert!(name == segment);
    /// ```
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// The value carried by a BEM modifier.
///
/// Boolean modifiers (`button_disabled`) carry no value and are represented by
/// [`ModValue::Flag`]. Key-value modifiers (`button_theme_dark`) carry a name
/// segment in [`ModValue::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModValue {
    /// Boolean modifier without a value part.
    Flag,
    /// Modifier with an explicit value part.
    Value(Name),
}

/// A modifier applied to a block or an element: a name plus its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BemMod {
    name: Name,
    value: ModValue,
}

impl BemMod {
    /// Creates a modifier from its name and value.
    pub fn new(name: impl Into<Name>, value: ModValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Creates a boolean modifier.
    pub fn flag(name: impl Into<Name>) -> Self {
        Self::new(name, ModValue::Flag)
    }

    /// Creates a key-value modifier.
    pub fn with_value(name: impl Into<Name>, value: impl Into<Name>) -> Self {
        Self::new(name, ModValue::Value(value.into()))
    }

    /// The modifier name segment.
    pub fn name(&self) -> Name {
        self.name
    }

    /// The modifier value.
    pub fn value(&self) -> ModValue {
        self.value
    }
}

/// Canonical identifier for one BEM entity.
///
/// Every payload file stem and every declaration entry resolves to a
/// `BemIdent`: a block name, an optional element name, and an optional
/// modifier. The same entity always resolves to the same identifier, so
/// identifiers can be used directly as graph node keys.
///
/// # Examples
///
/// ```
/// use strata_core::ident::BemIdent;
///
/// let block = BemIdent::block("popup");
/// let elem = BemIdent::block("popup").with_elem("tail");
/// let themed = BemIdent::block("popup").with_mod("theme", "dark");
///
/// assert_eq!(block.to_string(), "popup");
/// assert_eq!(elem.to_string(), "popup__tail");
/// assert_eq!(themed.to_string(), "popup_theme_dark");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BemIdent {
    block: Name,
    elem: Option<Name>,
    modifier: Option<BemMod>,
}

impl BemIdent {
    /// Creates a block-level identifier.
    pub fn block(block: impl Into<Name>) -> Self {
        Self {
            block: block.into(),
            elem: None,
            modifier: None,
        }
    }

    /// Returns this identifier with an element name attached.
    pub fn with_elem(self, elem: impl Into<Name>) -> Self {
        Self {
            elem: Some(elem.into()),
            ..self
        }
    }

    /// Returns this identifier with a boolean modifier attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::ident::BemIdent;
    ///
    /// let disabled = BemIdent::block("button").with_flag("disabled");
    /// assert_eq!(disabled.to_string(), "button_disabled");
    /// ```
    pub fn with_flag(self, name: impl Into<Name>) -> Self {
        Self {
            modifier: Some(BemMod::flag(name)),
            ..self
        }
    }

    /// Returns this identifier with a key-value modifier attached.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::ident::BemIdent;
    ///
    /// let large = BemIdent::block("button").with_elem("icon").with_mod("size", "large");
    /// assert_eq!(large.to_string(), "button__icon_size_large");
    /// ```
    pub fn with_mod(self, name: impl Into<Name>, value: impl Into<Name>) -> Self {
        Self {
            modifier: Some(BemMod::with_value(name, value)),
            ..self
        }
    }

    /// Returns this identifier with the given modifier attached.
    pub fn with_modifier(self, modifier: BemMod) -> Self {
        Self {
            modifier: Some(modifier),
            ..self
        }
    }

    /// The block name segment.
    pub fn block_name(&self) -> Name {
        self.block
    }

    /// The element name segment, when this identifier names an element.
    pub fn elem_name(&self) -> Option<Name> {
        self.elem
    }

    /// The modifier, when this identifier names a modifier entity.
    pub fn modifier(&self) -> Option<BemMod> {
        self.modifier
    }

    /// Returns `true` when this identifier names a bare block.
    pub fn is_block(&self) -> bool {
        self.elem.is_none() && self.modifier.is_none()
    }

    /// Returns `true` when this identifier has an element part.
    pub fn has_elem(&self) -> bool {
        self.elem.is_some()
    }

    /// Returns `true` when this identifier has a modifier part.
    pub fn has_modifier(&self) -> bool {
        self.modifier.is_some()
    }

    /// The entity this modifier applies to: the identifier minus its modifier.
    ///
    /// Returns `None` for identifiers without a modifier part.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::ident::BemIdent;
    ///
    /// let themed = BemIdent::block("popup").with_elem("tail").with_mod("theme", "dark");
    /// let subject = themed.subject().unwrap();
    /// assert_eq!(subject, BemIdent::block("popup").with_elem("tail"));
    /// ```
    pub fn subject(&self) -> Option<BemIdent> {
        self.modifier?;
        Some(Self {
            modifier: None,
            ..*self
        })
    }

    /// The block that owns this element: the identifier minus its element.
    ///
    /// Returns `None` for identifiers without an element part. The modifier
    /// part, if any, is dropped along with the element.
    pub fn owning_block(&self) -> Option<BemIdent> {
        self.elem?;
        Some(Self::block(self.block))
    }

    /// The block-level twin of an element modifier: same block, same modifier,
    /// no element.
    ///
    /// Returns `None` unless this identifier has both an element part and a
    /// modifier part.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::ident::BemIdent;
    ///
    /// let elem_mod = BemIdent::block("menu").with_elem("item").with_flag("hidden");
    /// let twin = elem_mod.block_counterpart().unwrap();
    /// assert_eq!(twin, BemIdent::block("menu").with_flag("hidden"));
    /// ```
    pub fn block_counterpart(&self) -> Option<BemIdent> {
        self.elem?;
        let modifier = self.modifier?;
        Some(Self::block(self.block).with_modifier(modifier))
    }
}

impl fmt::Display for BemIdent {
    /// Writes the canonical stem form: `block`, `block__elem`, `block_mod`,
    /// `block_mod_val`, `block__elem_mod`, or `block__elem_mod_val`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.block)?;
        if let Some(elem) = self.elem {
            write!(f, "__{}", elem)?;
        }
        if let Some(modifier) = self.modifier {
            write!(f, "_{}", modifier.name)?;
            if let ModValue::Value(value) = modifier.value {
                write!(f, "_{}", value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_new() {
        let name1 = Name::new("button");
        let name2 = Name::new("button");
        let name3 = Name::new("menu");

        assert_eq!(name1, name2);
        assert_ne!(name1, name3);
        assert_eq!(name1, "button");
    }

    #[test]
    fn test_name_display() {
        let name = Name::new("popup-tail");
        assert_eq!(format!("{}", name), "popup-tail");
    }

    #[test]
    fn test_name_from_trait() {
        let name1: Name = "header".into();
        let name2 = Name::new("header");

        assert_eq!(name1, name2);
        assert_eq!(name1, "header");
    }

    #[test]
    fn test_name_partial_eq_str() {
        let name = Name::new("button");

        assert!(name == "button");
        assert!(name != "menu");

        let empty = Name::new("");
        assert!(empty == "");
        assert!(empty != "button");
    }

    #[test]
    fn test_name_hash_and_eq() {
        use std::collections::HashMap;

        let key1 = Name::new("block-a");
        let key2 = Name::new("block-a");
        let key3 = Name::new("block-b");

        let mut map = HashMap::new();
        map.insert(key1, "value1");
        map.insert(key3, "value2");

        assert_eq!(map.get(&key2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_display_block() {
        let ident = BemIdent::block("button");
        assert_eq!(ident.to_string(), "button");
    }

    #[test]
    fn test_display_elem() {
        let ident = BemIdent::block("button").with_elem("icon");
        assert_eq!(ident.to_string(), "button__icon");
    }

    #[test]
    fn test_display_block_flag_mod() {
        let ident = BemIdent::block("button").with_flag("disabled");
        assert_eq!(ident.to_string(), "button_disabled");
    }

    #[test]
    fn test_display_block_value_mod() {
        let ident = BemIdent::block("button").with_mod("theme", "dark");
        assert_eq!(ident.to_string(), "button_theme_dark");
    }

    #[test]
    fn test_display_elem_mods() {
        let flag = BemIdent::block("menu").with_elem("item").with_flag("current");
        let valued = BemIdent::block("menu").with_elem("item").with_mod("size", "xl");

        assert_eq!(flag.to_string(), "menu__item_current");
        assert_eq!(valued.to_string(), "menu__item_size_xl");
    }

    #[test]
    fn test_same_entity_same_ident() {
        let first = BemIdent::block("popup").with_elem("tail").with_mod("theme", "dark");
        let second = BemIdent::block("popup").with_elem("tail").with_mod("theme", "dark");

        assert_eq!(first, second);

        let flag = BemIdent::block("popup").with_elem("tail").with_flag("theme");
        assert_ne!(first, flag);
    }

    #[test]
    fn test_shape_predicates() {
        let block = BemIdent::block("page");
        let elem = BemIdent::block("page").with_elem("footer");
        let block_mod = BemIdent::block("page").with_flag("fixed");
        let elem_mod = BemIdent::block("page").with_elem("footer").with_flag("fixed");

        assert!(block.is_block());
        assert!(!elem.is_block());
        assert!(!block_mod.is_block());

        assert!(elem.has_elem() && !elem.has_modifier());
        assert!(!block_mod.has_elem() && block_mod.has_modifier());
        assert!(elem_mod.has_elem() && elem_mod.has_modifier());
    }

    #[test]
    fn test_subject() {
        let block_mod = BemIdent::block("button").with_mod("theme", "dark");
        let elem_mod = BemIdent::block("button").with_elem("icon").with_flag("hidden");
        let plain = BemIdent::block("button").with_elem("icon");

        assert_eq!(block_mod.subject(), Some(BemIdent::block("button")));
        assert_eq!(
            elem_mod.subject(),
            Some(BemIdent::block("button").with_elem("icon"))
        );
        assert_eq!(plain.subject(), None);
    }

    #[test]
    fn test_owning_block() {
        let elem = BemIdent::block("menu").with_elem("item");
        let elem_mod = BemIdent::block("menu").with_elem("item").with_flag("current");
        let block_mod = BemIdent::block("menu").with_flag("horizontal");

        assert_eq!(elem.owning_block(), Some(BemIdent::block("menu")));
        assert_eq!(elem_mod.owning_block(), Some(BemIdent::block("menu")));
        assert_eq!(block_mod.owning_block(), None);
        assert_eq!(BemIdent::block("menu").owning_block(), None);
    }

    #[test]
    fn test_block_counterpart() {
        let elem_flag = BemIdent::block("menu").with_elem("item").with_flag("hidden");
        let elem_valued = BemIdent::block("menu").with_elem("item").with_mod("size", "m");

        assert_eq!(
            elem_flag.block_counterpart(),
            Some(BemIdent::block("menu").with_flag("hidden"))
        );
        assert_eq!(
            elem_valued.block_counterpart(),
            Some(BemIdent::block("menu").with_mod("size", "m"))
        );

        assert_eq!(BemIdent::block("menu").block_counterpart(), None);
        assert_eq!(
            BemIdent::block("menu").with_elem("item").block_counterpart(),
            None
        );
        assert_eq!(
            BemIdent::block("menu").with_flag("hidden").block_counterpart(),
            None
        );
    }

    #[test]
    fn test_ident_as_map_key() {
        use std::collections::HashMap;

        let mut weights: HashMap<BemIdent, u32> = HashMap::new();
        weights.insert(BemIdent::block("base"), 0);
        weights.insert(BemIdent::block("base").with_elem("row"), 1);

        assert_eq!(weights.get(&BemIdent::block("base")), Some(&0));
        assert_eq!(
            weights.get(&BemIdent::block("base").with_elem("row")),
            Some(&1)
        );
        assert_eq!(weights.len(), 2);
    }

    #[test]
    fn test_modifier_accessors() {
        let valued = BemIdent::block("grid").with_mod("cols", "12");
        let modifier = valued.modifier().unwrap();

        assert_eq!(modifier.name(), Name::new("cols"));
        assert_eq!(modifier.value(), ModValue::Value(Name::new("12")));

        let flag = BemIdent::block("grid").with_flag("fluid");
        assert_eq!(flag.modifier().unwrap().value(), ModValue::Flag);
    }
}

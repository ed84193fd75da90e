/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::collections::HashMap;
use std::fmt;
use std::str;

/// Represents a specific atomic number.
///
/// Usable as the species label of a [`Cell`]; elements order by atomic number.
///
/// [`Cell`]: struct.Cell.html
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Element(u16);

#[derive(Debug, Fail)]
#[fail(display = "Unable to parse {}: {:?}", kind, text)]
pub struct ElementParseError {
    text: String,
    kind: &'static str, // "element", "element symbol"
}

impl ElementParseError {
    fn new(kind: &'static str, s: &str) -> Self
    { ElementParseError { text: s.to_string(), kind } }
}

impl Element {
    pub fn from_atomic_number(n: u32) -> Option<Self>
    {
        match NUMBER_TO_ENTRY.contains_key(&n) {
            true => Some(Element(n as u16)),
            false => None,
        }
    }

    /// Look up an element by its exact (case-sensitive) symbol.
    pub fn from_symbol(s: &str) -> Result<Self, ElementParseError>
    {
        let &n = SYMBOL_TO_NUMBER.get(s).ok_or_else(|| ElementParseError::new("element symbol", s))?;
        Ok(Element(n))
    }

    pub fn atomic_number(&self) -> u32
    { self.0.into() }

    pub fn symbol(&self) -> &'static str
    { self.entry().1 }

    pub fn name(&self) -> &'static str
    { self.entry().2 }

    // every Element is constructed from the table, so the lookup cannot fail
    fn entry(&self) -> &'static (u16, &'static str, &'static str)
    { NUMBER_TO_ENTRY[&self.atomic_number()] }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Display::fmt(self.symbol(), f) }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match f.alternate() {
            false => fmt::Debug::fmt(self.symbol(), f),
            true  => fmt::Debug::fmt(self.name(), f),
        }
    }
}

/// Accepts a symbol or a name, in any case.
impl str::FromStr for Element {
    type Err = ElementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let &n = LOWERCASE_TO_NUMBER.get(&s.to_ascii_lowercase()).ok_or_else(|| ElementParseError::new("element", s))?;
        Ok(Element(n))
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Serialize, Deserialize, ser, de};

    impl Serialize for Element {
        fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.symbol().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Element {
        fn deserialize<D: de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            raw.parse().map_err(|_| {
                de::Error::invalid_value(de::Unexpected::Str(&raw), &"an element name or symbol")
            })
        }
    }
}

lazy_static!{
    static ref SYMBOL_TO_NUMBER: HashMap<&'static str, u16> =
        TABLE.iter().map(|&(num, sym, _)| (sym, num)).collect();

    static ref NUMBER_TO_ENTRY: HashMap<u32, &'static (u16, &'static str, &'static str)> =
        TABLE.iter().map(|entry| (u32::from(entry.0), entry)).collect();

    static ref LOWERCASE_TO_NUMBER: HashMap<String, u16> =
    {
        let mut map = HashMap::new();
        for &(num, sym, name) in TABLE {
            map.insert(sym.to_ascii_lowercase(), num);
            map.insert(name.to_ascii_lowercase(), num);
        }
        map
    };
}

macro_rules! define_elements {
    (
        pub mod $consts:ident {
            $( ($num:expr, $sym:expr, $name:expr, $NAME:ident), )+
        }
    ) => {
        const TABLE: &[(u16, &str, &str)] = &[ $( ($num, $sym, $name), )+ ];

        // Define associated constants for convenience
        impl Element {
            $( pub const $NAME: Element = Element($num); )+
        }

        // Also put them in a mod, where they can be imported to be used unqualified.
        pub mod $consts {
            use super::*;

            $( pub const $NAME: Element = Element::$NAME; )+
        }
    };
}

define_elements! {
    pub mod consts {
        (1,  "H",  "Hydrogen",   HYDROGEN),
        (2,  "He", "Helium",     HELIUM),
        (3,  "Li", "Lithium",    LITHIUM),
        (4,  "Be", "Beryllium",  BERYLLIUM),
        (5,  "B",  "Boron",      BORON),
        (6,  "C",  "Carbon",     CARBON),
        (7,  "N",  "Nitrogen",   NITROGEN),
        (8,  "O",  "Oxygen",     OXYGEN),
        (9,  "F",  "Fluorine",   FLUORINE),
        (10, "Ne", "Neon",       NEON),
        (11, "Na", "Sodium",     SODIUM),
        (12, "Mg", "Magnesium",  MAGNESIUM),
        (13, "Al", "Aluminum",   ALUMINUM),
        (14, "Si", "Silicon",    SILICON),
        (15, "P",  "Phosphorus", PHOSPHORUS),
        (16, "S",  "Sulfur",     SULFUR),
        (17, "Cl", "Chlorine",   CHLORINE),
        (18, "Ar", "Argon",      ARGON),
        (19, "K",  "Potassium",  POTASSIUM),
        (20, "Ca", "Calcium",    CALCIUM),
        (21, "Sc", "Scandium",   SCANDIUM),
        (22, "Ti", "Titanium",   TITANIUM),
        (23, "V",  "Vanadium",   VANADIUM),
        (24, "Cr", "Chromium",   CHROMIUM),
        (25, "Mn", "Manganese",  MANGANESE),
        (26, "Fe", "Iron",       IRON),
        (27, "Co", "Cobalt",     COBALT),
        (28, "Ni", "Nickel",     NICKEL),
        (29, "Cu", "Copper",     COPPER),
        (30, "Zn", "Zinc",       ZINC),
        (31, "Ga", "Gallium",    GALLIUM),
        (32, "Ge", "Germanium",  GERMANIUM),
        (33, "As", "Arsenic",    ARSENIC),
        (34, "Se", "Selenium",   SELENIUM),
        (35, "Br", "Bromine",    BROMINE),
        (36, "Kr", "Krypton",    KRYPTON),
        (37, "Rb", "Rubidium",   RUBIDIUM),
        (38, "Sr", "Strontium",  STRONTIUM),
        (39, "Y",  "Yttrium",    YTTRIUM),
        (40, "Zr", "Zirconium",  ZIRCONIUM),
        (41, "Nb", "Niobium",    NIOBIUM),
        (42, "Mo", "Molybdenum", MOLYBDENUM),
        (43, "Tc", "Technetium", TECHNETIUM),
        (44, "Ru", "Ruthenium",  RUTHENIUM),
        (45, "Rh", "Rhodium",    RHODIUM),
        (46, "Pd", "Palladium",  PALLADIUM),
        (47, "Ag", "Silver",     SILVER),
        (48, "Cd", "Cadmium",    CADMIUM),
        (49, "In", "Indium",     INDIUM),
        (50, "Sn", "Tin",        TIN),
        (51, "Sb", "Antimony",   ANTIMONY),
        (52, "Te", "Tellurium",  TELLURIUM),
        (53, "I",  "Iodine",     IODINE),
        (54, "Xe", "Xenon",      XENON),
        (55, "Cs", "Cesium",     CESIUM),
        (56, "Ba", "Barium",     BARIUM),
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn lookups() {
        assert_eq!(Element::from_symbol("Zn").unwrap(), Element::ZINC);
        assert!(Element::from_symbol("zn").is_err());
        assert_eq!("zn".parse::<Element>().unwrap(), consts::ZINC);
        assert_eq!("SULFUR".parse::<Element>().unwrap(), Element::SULFUR);
        assert!("Kryptonite".parse::<Element>().is_err());

        assert_eq!(Element::from_atomic_number(6), Some(Element::CARBON));
        assert_eq!(Element::from_atomic_number(0), None);
        assert_eq!(Element::CARBON.atomic_number(), 6);
        assert_eq!(Element::IRON.symbol(), "Fe");
        assert_eq!(Element::IRON.name(), "Iron");
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{}", Element::SODIUM), "Na");
        assert_eq!(format!("{:?}", Element::SODIUM), "\"Na\"");
        assert_eq!(format!("{:#?}", Element::SODIUM), "\"Sodium\"");
    }

    #[test]
    fn table_is_consistent() {
        for (i, &(num, sym, _)) in TABLE.iter().enumerate() {
            assert_eq!(usize::from(num), i + 1);
            assert_eq!(Element::from_symbol(sym).unwrap().atomic_number(), u32::from(num));
        }
        assert!(Element::SULFUR < Element::ZINC);
    }
}

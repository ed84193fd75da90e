/* ************************************************************************ **
** This file is part of symcell, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! YAML settings.
//!
//! Reading goes through the `YamlRead` trait, which uses `serde_ignored`
//! to warn about keys that were not recognized (most likely typos).

#![allow(non_snake_case)]

use std::io::Read;

/// Provides an alternative to `serde_yaml::from_reader` that reports unused keys.
pub trait YamlRead: for<'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, serde_yaml::Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, serde_yaml::Error> {
        // serde_ignored needs a Deserializer, and serde_yaml only offers one for Value.
        Self::from_value(value_from_dyn_reader(r)?)
    }

    fn from_value(value: serde_yaml::Value) -> Result<Self, serde_yaml::Error>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl YamlRead for $Type {
            fn from_value(value: serde_yaml::Value) -> Result<$Type, serde_yaml::Error> {
                serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused config item (possible typo?): {}", path),
                )
            }
        }
    };
}

derive_yaml_read!{serde_yaml::Value}

fn value_from_dyn_reader(r: &mut dyn Read) -> Result<serde_yaml::Value, serde_yaml::Error>
{ serde_yaml::from_reader(r) }

/// Tolerances for symmetry analysis.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Tolerance for comparing fractional positions and Gram matrices.
    ///
    /// Point operations are tested against the square root of this value.
    #[serde(default = "_settings__symprec")]
    pub symprec: f64,

    /// Threshold for Delaunay reduction. `None` uses `symprec`.
    #[serde(default)]
    pub reduction_prec: Option<f64>,
}
derive_yaml_read!{Settings}

fn _settings__symprec() -> f64 { 1e-5 }

impl Default for Settings {
    fn default() -> Self
    { Settings { symprec: _settings__symprec(), reduction_prec: None } }
}

impl Settings {
    pub fn reduction_prec(&self) -> f64
    { self.reduction_prec.unwrap_or(self.symprec) }

    /// Check that the tolerances are usable.
    pub fn validate(&self) -> Result<(), failure::Error>
    {
        ensure!(self.symprec > 0.0, "symprec must be positive (got {})", self.symprec);
        if let Some(prec) = self.reduction_prec {
            ensure!(prec > 0.0, "reduction-prec must be positive (got {})", prec);
        }
        Ok(())
    }
}

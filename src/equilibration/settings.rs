use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Error, Debug)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings for Sinkhorn-Knopp equilibration and the normalization that
/// follows it.
///
/// The defaults reproduce the behaviour expected by the outer solver:
/// 50 fixed Sinkhorn-Knopp sweeps on squared magnitudes, followed by
/// normalization in the (scaled) Frobenius norm.
///
/// ```no_run
/// use equilsparse::equilibration::EquilibrationSettingsBuilder;
///
/// let settings = EquilibrationSettingsBuilder::<f64>::default()
///     .sinkhorn_max_iter(100)
///     .sinkhorn_tol(1e-6)
///     .build()
///     .unwrap();
/// ```

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquilibrationSettings<T: FloatT> {
    ///norm whose row / column aggregates are balanced
    #[builder(default = "NormType::Two")]
    pub equilibrate_norm: NormType,

    ///norm used to rescale the equilibrated matrix to unit size
    #[builder(default = "NormType::Frobenius")]
    pub normalize_norm: NormType,

    ///maximum number of Sinkhorn-Knopp sweeps
    #[builder(default = "50")]
    pub sinkhorn_max_iter: u32,

    ///early exit tolerance on the relative column aggregate
    ///imbalance.  Zero disables the check.
    #[builder(default = "T::zero()")]
    pub sinkhorn_tol: T,

    ///maximum power iterations for the 2-norm estimate
    #[builder(default = "50")]
    pub normest_max_iter: u32,

    ///relative tolerance for the 2-norm estimate
    #[builder(default = "(1e-4).as_T()")]
    pub normest_tol: T,

    ///seed for the power iteration starting vector
    #[builder(default = "0x5eed_1e55_u64")]
    pub normest_seed: u64,
}

impl<T> Default for EquilibrationSettings<T>
where
    T: FloatT,
{
    fn default() -> EquilibrationSettings<T> {
        EquilibrationSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> EquilibrationSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are legal.  Settings assembled with the
    /// builder are always checked; this is for settings modified in place.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_norm("equilibrate_norm", self.equilibrate_norm)?;
        validate_norm("normalize_norm", self.normalize_norm)?;
        validate_iter("sinkhorn_max_iter", self.sinkhorn_max_iter)?;
        validate_iter("normest_max_iter", self.normest_max_iter)?;
        validate_tol("sinkhorn_tol", self.sinkhorn_tol)?;
        validate_tol("normest_tol", self.normest_tol)?;
        Ok(())
    }

    /// True if equilibration operates on squared magnitudes
    pub(crate) fn is_squared(&self) -> bool {
        matches!(self.equilibrate_norm, NormType::Two | NormType::Frobenius)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for EquilibrationSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        EquilibrationSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> EquilibrationSettingsBuilder<T>
where
    T: FloatT,
{
    /// check any fields that have been explicitly set
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(norm) = self.equilibrate_norm {
            validate_norm("equilibrate_norm", norm)?;
        }
        if let Some(norm) = self.normalize_norm {
            validate_norm("normalize_norm", norm)?;
        }
        if let Some(iter) = self.sinkhorn_max_iter {
            validate_iter("sinkhorn_max_iter", iter)?;
        }
        if let Some(iter) = self.normest_max_iter {
            validate_iter("normest_max_iter", iter)?;
        }
        if let Some(tol) = self.sinkhorn_tol {
            validate_tol("sinkhorn_tol", tol)?;
        }
        if let Some(tol) = self.normest_tol {
            validate_tol("normest_tol", tol)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

// 1-norm row and column aggregates are not symmetric under
// transposition, so neither step supports it
fn validate_norm(field: &'static str, norm: NormType) -> Result<(), SettingsError> {
    match norm {
        NormType::Two | NormType::Frobenius => Ok(()),
        NormType::One => Err(SettingsError::BadFieldValue(field)),
    }
}

fn validate_iter(field: &'static str, iter: u32) -> Result<(), SettingsError> {
    if iter == 0 {
        Err(SettingsError::BadFieldValue(field))
    } else {
        Ok(())
    }
}

fn validate_tol<T: FloatT>(field: &'static str, tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

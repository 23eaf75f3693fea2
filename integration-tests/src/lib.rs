//! Scenario files for end-to-end head-loss tests.
//!
//! A scenario file is TOML holding a list of `[[scenario]]` tables. Each
//! scenario gives raw SI inputs, a [`HeadLossMethod`], and the values (or the
//! error kind) the evaluation is expected to produce.

use headloss_hydraulics::{
    FlowConditions, FlowRegime, HeadLossError, HeadLossMethod, InvalidInputError, PipeFlowSpec,
    PipeGeometry,
};
use serde::Deserialize;
use uom::si::{
    f64::{KinematicViscosity, Length, VolumeRate},
    kinematic_viscosity::square_meter_per_second,
    length::meter,
    volume_rate::cubic_meter_per_second,
};

/// Top-level layout of a scenario file.
#[derive(Debug, Deserialize)]
pub struct ScenarioFile {
    pub scenario: Vec<Scenario>,
}

impl ScenarioFile {
    /// Parses a scenario file from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid scenario file.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// One head-loss problem and its expected outcome.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub diameter_m: f64,
    pub length_m: f64,
    #[serde(default)]
    pub roughness_m: f64,
    pub flow_rate_m3_per_s: f64,
    pub viscosity_m2_per_s: Option<f64>,
    pub method: HeadLossMethod,
    pub expect: Expect,
}

/// Expected results; absent fields are not checked.
#[derive(Debug, Default, Deserialize)]
pub struct Expect {
    pub head_loss_m: Option<f64>,
    pub regime: Option<FlowRegime>,
    pub friction_factor: Option<f64>,
    pub iterations: Option<usize>,
    pub error: Option<ErrorKind>,
}

/// Coarse error classification used by scenario expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ErrorKind {
    InvalidInput,
    Domain,
    NumericalInstability,
}

impl From<&HeadLossError> for ErrorKind {
    fn from(err: &HeadLossError) -> Self {
        match err {
            HeadLossError::InvalidInput(_) => Self::InvalidInput,
            HeadLossError::Domain(_) => Self::Domain,
            HeadLossError::NumericalInstability(_) => Self::NumericalInstability,
        }
    }
}

impl Scenario {
    /// Builds the typed problem from the raw scenario inputs.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInputError`] if geometry or flow inputs violate
    /// their physical constraints.
    pub fn to_spec(&self) -> Result<PipeFlowSpec, InvalidInputError> {
        let geometry = PipeGeometry::new(
            Length::new::<meter>(self.diameter_m),
            Length::new::<meter>(self.length_m),
            Length::new::<meter>(self.roughness_m),
        )?;

        let flow_rate = VolumeRate::new::<cubic_meter_per_second>(self.flow_rate_m3_per_s);
        let flow = match self.viscosity_m2_per_s {
            Some(nu) => FlowConditions::new(
                flow_rate,
                KinematicViscosity::new::<square_meter_per_second>(nu),
            )?,
            None => FlowConditions::without_viscosity(flow_rate)?,
        };

        Ok(PipeFlowSpec {
            geometry,
            flow,
            method: self.method,
        })
    }
}

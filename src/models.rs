//! Data models for the prediction cycle: raw form input, the clamped
//! sensor reading record fed to the model, and the verdict it maps to.

use serde::Deserialize;

// ---

/// Declared bound and default for each input control, mirrored by the form
/// page and enforced by clamping on submission.
pub const AIR_TEMP_BOUNDS: (f64, f64) = (250.0, 350.0);
pub const PROCESS_TEMP_BOUNDS: (f64, f64) = (250.0, 350.0);
pub const ROT_SPEED_BOUNDS: (i64, i64) = (1000, 3000);
pub const TORQUE_BOUNDS: (f64, f64) = (0.0, 100.0);
pub const TOOL_WEAR_BOUNDS: (i64, i64) = (0, 300);

pub const AIR_TEMP_DEFAULT: f64 = 300.0;
pub const PROCESS_TEMP_DEFAULT: f64 = 310.0;
pub const ROT_SPEED_DEFAULT: u32 = 1500;
pub const TORQUE_DEFAULT: f64 = 40.0;
pub const TOOL_WEAR_DEFAULT: u32 = 50;

/// Raw sensor values as submitted by the input form.
///
/// Rotational speed and tool wear are integer fields, matching the controls
/// that collect them; signed here so out-of-range submissions below zero can
/// still be parsed and clamped rather than failing deserialization.
#[derive(Debug, Deserialize)]
pub struct RawSensorInput {
    // ---
    pub air_temperature: f64,
    pub process_temperature: f64,
    pub rotational_speed: i64,
    pub torque: f64,
    pub tool_wear: i64,
}

/// One machine condition observation, clamped to the declared bounds.
///
/// Field order matches the order the scaler and classifier were fitted on:
/// {air temp, process temp, rotational speed, torque, tool wear}. Reordering
/// these silently corrupts predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReadings {
    // ---
    pub air_temperature_k: f64,
    pub process_temperature_k: f64,
    pub rotational_speed_rpm: u32,
    pub torque_nm: f64,
    pub tool_wear_min: u32,
}

impl RawSensorInput {
    /// Clamp each value to its declared bound, yielding the record fed to
    /// the model. Policy is clamp-to-nearest-bound, never rejection.
    pub fn to_clamped(&self) -> SensorReadings {
        // ---
        SensorReadings {
            air_temperature_k: self.air_temperature.clamp(AIR_TEMP_BOUNDS.0, AIR_TEMP_BOUNDS.1),
            process_temperature_k: self
                .process_temperature
                .clamp(PROCESS_TEMP_BOUNDS.0, PROCESS_TEMP_BOUNDS.1),
            rotational_speed_rpm: self
                .rotational_speed
                .clamp(ROT_SPEED_BOUNDS.0, ROT_SPEED_BOUNDS.1) as u32,
            torque_nm: self.torque.clamp(TORQUE_BOUNDS.0, TORQUE_BOUNDS.1),
            tool_wear_min: self.tool_wear.clamp(TOOL_WEAR_BOUNDS.0, TOOL_WEAR_BOUNDS.1) as u32,
        }
    }
}

impl SensorReadings {
    /// A record holding every control's declared default value.
    pub fn defaults() -> Self {
        // ---
        SensorReadings {
            air_temperature_k: AIR_TEMP_DEFAULT,
            process_temperature_k: PROCESS_TEMP_DEFAULT,
            rotational_speed_rpm: ROT_SPEED_DEFAULT,
            torque_nm: TORQUE_DEFAULT,
            tool_wear_min: TOOL_WEAR_DEFAULT,
        }
    }

    /// Feature vector in fit order. The only place field order is encoded.
    pub fn to_features(&self) -> [f64; 5] {
        // ---
        [
            self.air_temperature_k,
            self.process_temperature_k,
            self.rotational_speed_rpm as f64,
            self.torque_nm,
            self.tool_wear_min as f64,
        ]
    }
}

/// Human-readable mapping of the classifier's binary label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Normal,
    FailureLikely,
}

impl Verdict {
    /// Label `1` means failure likely, anything else means normal.
    pub fn from_label(label: u8) -> Self {
        // ---
        if label == 1 {
            Verdict::FailureLikely
        } else {
            Verdict::Normal
        }
    }

    /// Message shown in the result panel.
    pub fn message(&self) -> &'static str {
        // ---
        match self {
            Verdict::Normal => "Machine Operating Normally",
            Verdict::FailureLikely => "Machine Failure Likely",
        }
    }
}

//! HTML rendering for the single prediction page.
//!
//! Internal sibling of the `routes` modules, not a subrouter: `index.rs` and
//! `predict.rs` both render the same page, with and without a verdict panel.
//! The form posts to `/predict`; inference runs only on that explicit action.

use crate::models::{
    AIR_TEMP_BOUNDS, PROCESS_TEMP_BOUNDS, ROT_SPEED_BOUNDS, TOOL_WEAR_BOUNDS, TORQUE_BOUNDS,
};
use crate::{SensorReadings, Verdict};

// ---

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; background: #f7f7f7; }\n\
.layout { display: flex; min-height: 100vh; }\n\
.sidebar { width: 280px; padding: 1.5rem; background: #eceff4; border-right: 1px solid #d0d4dc; }\n\
.sidebar label { display: block; margin-bottom: 1rem; font-size: 0.9rem; }\n\
.sidebar input { width: 100%; margin-top: 0.25rem; padding: 0.3rem; }\n\
.sidebar button { width: 100%; padding: 0.5rem; margin-top: 0.5rem; }\n\
main { flex: 1; padding: 2rem; max-width: 720px; }\n\
.result { padding: 0.75rem 1rem; border-radius: 4px; margin: 1rem 0; }\n\
.result.success { background: #e2f0e4; border: 1px solid #5a9e64; color: #2d5a33; }\n\
.result.error { background: #f6dfdf; border: 1px solid #c45b5b; color: #7a2727; }\n\
details { margin-top: 1.5rem; }\n\
";

/// Render the full page: sidebar form, optional result panel, and the static
/// model information panel. `readings` pre-fills the controls so submitted
/// values survive the round trip.
pub fn render(readings: &SensorReadings, verdict: Option<Verdict>) -> String {
    // ---
    let result_panel = match verdict {
        Some(Verdict::Normal) => format!(
            r#"<p class="result success">{}</p>"#,
            Verdict::Normal.message()
        ),
        Some(Verdict::FailureLikely) => format!(
            r#"<p class="result error">{}</p>"#,
            Verdict::FailureLikely.message()
        ),
        None => String::new(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Predictive Maintenance</title>
<style>
{style}
</style>
</head>
<body>
<div class="layout">
<form class="sidebar" method="post" action="/predict">
<h2>Input Machine Parameters</h2>
<label>Air temperature [K]
<input type="number" name="air_temperature" min="{at_min}" max="{at_max}" step="0.1" value="{at}">
</label>
<label>Process temperature [K]
<input type="number" name="process_temperature" min="{pt_min}" max="{pt_max}" step="0.1" value="{pt}">
</label>
<label>Rotational speed [rpm]
<input type="number" name="rotational_speed" min="{rs_min}" max="{rs_max}" step="1" value="{rs}">
</label>
<label>Torque [Nm]
<input type="number" name="torque" min="{tq_min}" max="{tq_max}" step="0.1" value="{tq}">
</label>
<label>Tool wear [min]
<input type="number" name="tool_wear" min="{tw_min}" max="{tw_max}" step="1" value="{tw}">
</label>
<button type="submit">Predict Machine Condition</button>
</form>
<main>
<h1>Predictive Maintenance System</h1>
<p>Predict machine failure based on sensor readings.</p>
{result_panel}
<details>
<summary>Model Information</summary>
<p>
<strong>Model:</strong> Support Vector Machine (RBF Kernel)<br>
<strong>Preprocessing:</strong> StandardScaler<br>
<strong>Output:</strong> Binary classification
</p>
</details>
</main>
</div>
</body>
</html>
"#,
        style = STYLE,
        at_min = AIR_TEMP_BOUNDS.0,
        at_max = AIR_TEMP_BOUNDS.1,
        at = readings.air_temperature_k,
        pt_min = PROCESS_TEMP_BOUNDS.0,
        pt_max = PROCESS_TEMP_BOUNDS.1,
        pt = readings.process_temperature_k,
        rs_min = ROT_SPEED_BOUNDS.0,
        rs_max = ROT_SPEED_BOUNDS.1,
        rs = readings.rotational_speed_rpm,
        tq_min = TORQUE_BOUNDS.0,
        tq_max = TORQUE_BOUNDS.1,
        tq = readings.torque_nm,
        tw_min = TOOL_WEAR_BOUNDS.0,
        tw_max = TOOL_WEAR_BOUNDS.1,
        tw = readings.tool_wear_min,
        result_panel = result_panel,
    )
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_page_without_verdict_has_no_result_panel() {
        // ---
        let body = render(&SensorReadings::defaults(), None);

        assert!(!body.contains("class=\"result"));
        assert!(body.contains("Predict Machine Condition"));
        assert!(body.contains("Input Machine Parameters"));
    }

    #[test]
    fn test_page_prefills_declared_defaults_and_bounds() {
        // ---
        let body = render(&SensorReadings::defaults(), None);

        assert!(body.contains(r#"name="air_temperature" min="250" max="350" step="0.1" value="300""#));
        assert!(body.contains(r#"name="rotational_speed" min="1000" max="3000" step="1" value="1500""#));
        assert!(body.contains(r#"name="tool_wear" min="0" max="300" step="1" value="50""#));
    }

    #[test]
    fn test_verdict_styling() {
        // ---
        let ok = render(&SensorReadings::defaults(), Some(Verdict::Normal));
        assert!(ok.contains(r#"class="result success""#));
        assert!(ok.contains("Machine Operating Normally"));

        let bad = render(&SensorReadings::defaults(), Some(Verdict::FailureLikely));
        assert!(bad.contains(r#"class="result error""#));
        assert!(bad.contains("Machine Failure Likely"));
    }
}

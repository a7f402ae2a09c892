//! Text rendering of a search [`Outcome`].
//!
//! A found outcome prints two JSON lines: the first step of every shortest
//! path in search order, then an object keyed by each distinct first step
//! (serialized exactly as in the first line) with its fraction.

use mazewalk_paths::Outcome;
use serde_json::{Map, Value};

/// Printed when the target cannot be reached.
pub const NO_PATH: &str = "no path found";

pub fn render(outcome: &Outcome) -> Result<String, serde_json::Error> {
    match outcome {
        Outcome::NoPath => Ok(NO_PATH.to_owned()),
        Outcome::AtTarget => Ok("[]\n{}".to_owned()),
        Outcome::Found(fs) => {
            let steps = serde_json::to_string(&fs.steps)?;
            let mut dist = Map::new();
            for (p, f) in &fs.distribution {
                dist.insert(serde_json::to_string(p)?, Value::from(*f));
            }
            Ok(format!("{steps}\n{}", Value::Object(dist)))
        }
    }
}

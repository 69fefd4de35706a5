//! Printing predictions for the `predict` subcommand.

use std::io::Write;

use parley_nlu::{IntentScore, PredictionResult, Predictor, score_intents};
use serde::Serialize;

use crate::config::PredictArgs;
use crate::error::Result;

#[derive(Serialize)]
struct Explained<'a> {
    prediction: &'a PredictionResult,
    scores: Vec<IntentScore>,
}

/// Predict `args`' utterance and write pretty JSON to `out`.
pub fn write_prediction(
    predictor: &Predictor,
    args: &PredictArgs,
    out: &mut impl Write,
) -> Result<()> {
    let text = args.utterance();
    let prediction = predictor.predict(&text);

    if args.explain {
        serde_json::to_writer_pretty(
            &mut *out,
            &Explained {
                prediction: &prediction,
                scores: score_intents(&text),
            },
        )?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &prediction)?;
    }
    writeln!(out)?;

    Ok(())
}

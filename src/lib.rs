use crate::{
    classify::{classifier::classify_traced, lexicon::Lexicon},
    fill::response::{FillDecision, acknowledge_save, decide_fill},
    snapshot::parse::{latest_structure, parse_request},
    trace::{logger::TraceLogger, trace::TraceEvent},
};

pub mod classify;
pub mod cli;
pub mod fill;
pub mod report;
pub mod snapshot;
pub mod trace;

/// Handle one fill request delivered as raw JSON: parse it, classify the
/// most recent snapshot context, then apply the password gate.
///
/// Never fails across the boundary. A malformed request or an empty
/// context list is "nothing to fill", reported only on the trace channel.
pub fn handle_fill_request(
    raw: &str,
    lexicon: &Lexicon,
    prompt: &str,
    tracer: Option<&TraceLogger>,
) -> FillDecision {
    let Some(request) = parse_request(raw) else {
        emit(tracer, TraceEvent::now("structure_missing").with_detail("malformed request"));
        return FillDecision::NoOp;
    };

    let Some(structure) = latest_structure(&request) else {
        emit(tracer, TraceEvent::now("structure_missing").with_detail("no contexts"));
        return FillDecision::NoOp;
    };

    let result = classify_traced(structure, lexicon, tracer);
    let decision = decide_fill(&result, prompt);

    match &decision {
        FillDecision::Offer(_) => emit(tracer, TraceEvent::now("fill_offered")),
        FillDecision::NoOp => emit(tracer, TraceEvent::now("fill_noop")),
    }

    decision
}

/// Handle a save request. Deliberately does nothing; credential
/// persistence belongs to external collaborators.
pub fn handle_save_request(tracer: Option<&TraceLogger>) {
    acknowledge_save(tracer);
}

fn emit(tracer: Option<&TraceLogger>, event: TraceEvent) {
    if let Some(t) = tracer {
        t.log(&event);
    }
}

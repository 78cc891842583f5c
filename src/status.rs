//! Response status inference over a collection of per-error status codes.

/// Reduce the status codes of an error document to one response status.
///
/// Works on the distinct set of values; an absent status is its own distinct
/// value and matches neither range below.
///
/// 1. A single distinct value is returned as-is (so `[404, 404]` yields 404,
///    not 400). A single distinct *absent* value yields 500: errors that
///    carry no status information cannot classify the response, and 500 is
///    the fallback for every other unclassifiable case.
/// 2. All values within 400..=499 yield 400.
/// 3. All values within 500..=599 yield 500.
/// 4. Anything else (mixed ranges, out-of-range values, absent values mixed
///    with present ones) yields 500.
///
/// An empty input also yields 500; the response constructors never produce
/// one, since an error object cannot itself be empty.
pub fn infer_status(statuses: &[Option<u16>]) -> u16 {
    let mut distinct: Vec<Option<u16>> = Vec::new();
    for status in statuses {
        if !distinct.contains(status) {
            distinct.push(*status);
        }
    }

    match distinct.as_slice() {
        [Some(status)] => *status,
        [] | [None] => 500,
        codes if codes.iter().all(|c| matches!(c, Some(400..=499))) => 400,
        codes if codes.iter().all(|c| matches!(c, Some(500..=599))) => 500,
        _ => 500,
    }
}

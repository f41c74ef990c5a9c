use tracing::warn;
use tribune_types::{Diagnostic, FlightRecord};

/// Landing length in front of each flight: the distance from the previous
/// flight's end (or from the origin, for the first flight) to this flight's start.
pub fn landing_lengths(flights: &[FlightRecord]) -> Vec<f64> {
    flights
        .iter()
        .enumerate()
        .map(|(i, flight)| {
            let reference_x = if i == 0 { 0.0 } else { flights[i - 1].end_x };
            flight.start_x - reference_x
        })
        .collect()
}

/// Flag every flight whose landing length is negative.
pub fn check_landings(flights: &[FlightRecord], lengths: &[f64]) -> Vec<Diagnostic> {
    flights
        .iter()
        .zip(lengths)
        .filter(|(_, &length)| length < 0.0)
        .map(|(flight, &length)| {
            warn!(row = flight.row, length, "stair flight overlaps previous landing");
            Diagnostic::NegativeLanding {
                row: flight.row,
                length,
            }
        })
        .collect()
}

//! # Reading DIMACS files
//!
//! Maximum flow instances in the format of the first DIMACS implementation challenge. Every line
//! starts with a character that determines its meaning:
//!
//! ```text
//! c A comment
//! p max 4 5
//! n 1 s
//! n 4 t
//! a 1 2 5
//! ```
//!
//! The problem line `p max <n> <m>` gives the number of vertices and arcs, `n <id> s` and
//! `n <id> t` designate the source and sink, and `a <tail> <head> <capacity>` describes an arc.
//! Vertex ids start at 1. Lines starting with any other character are ignored.
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, warn};

use crate::data::network::{Capacity, CapacityArc, FlowNetwork, Vertex};
use crate::io::error::{FileLocation, ImportError, ParseError};

/// The only problem kind this reader understands.
const PROBLEM_KIND: &str = "max";

/// Parse a maximum flow instance.
///
/// This method is not "defensive": extra values at the end of a line are ignored. The number of
/// vertices on the problem line is trusted, solving allocates memory linear in it. The number of
/// arcs is only a hint.
///
/// # Arguments
///
/// * `text`: The contents of the file.
///
/// # Errors
///
/// A `ParseError` if a line can't be read or the problem line, source or sink is missing. A
/// `NetworkError` if the file describes an invalid network, e.g. with an arc to a vertex that
/// doesn't exist.
pub fn parse<C: Capacity + FromStr>(text: &str) -> Result<FlowNetwork<C>, ImportError> {
    let mut problem = None;
    let mut source = None;
    let mut sink = None;
    let mut arcs = Vec::new();

    for file_location in into_lines(text) {
        let (_, line) = file_location;
        let mut fields = line.split_whitespace().skip(1);

        match line.as_bytes()[0] {
            b'p' => {
                if problem.is_some() {
                    let error =
                        ParseError::with_file_location("Second problem line", file_location);
                    return Err(error.into());
                }
                let (kind, nr_vertices, nr_arcs) = fields.next_tuple().ok_or_else(|| {
                    ParseError::with_file_location("Incomplete problem line", file_location)
                })?;
                if kind != PROBLEM_KIND {
                    warn!(
                        "Problem kind \"{kind}\" instead of \"{PROBLEM_KIND}\", reading it as a \
                        maximum flow instance",
                    );
                }
                let nr_vertices =
                    parse_number::<usize>(nr_vertices, "number of vertices", file_location)?;
                let nr_arcs = parse_number::<usize>(nr_arcs, "number of arcs", file_location)?;

                // Each line holds at most one arc
                arcs.reserve(nr_arcs.min(text.lines().count()));
                problem = Some((nr_vertices, nr_arcs));
            }
            b'n' => {
                require_problem(problem, file_location)?;
                let (id, designation) = fields.next_tuple().ok_or_else(|| {
                    ParseError::with_file_location("Incomplete vertex line", file_location)
                })?;
                let vertex = parse_vertex(id, file_location)?;
                let terminal = match designation {
                    "s" => &mut source,
                    "t" => &mut sink,
                    _ => return Err(ParseError::with_file_location(
                        format!("Vertex designation \"{designation}\" is neither \"s\" nor \"t\""),
                        file_location,
                    ).into()),
                };
                if let Some(previous) = terminal.replace(vertex) {
                    warn!(
                        "Vertex {} designated \"{designation}\" again, replacing vertex {}",
                        vertex + 1,
                        previous + 1,
                    );
                }
            }
            b'a' => {
                require_problem(problem, file_location)?;
                let (tail, head, capacity) = fields.next_tuple().ok_or_else(|| {
                    ParseError::with_file_location("Incomplete arc line", file_location)
                })?;
                arcs.push(CapacityArc::new(
                    parse_vertex(tail, file_location)?,
                    parse_vertex(head, file_location)?,
                    parse_number::<C>(capacity, "capacity", file_location)?,
                ));
            }
            _ => {}
        }
    }

    let (nr_vertices, nr_arcs) = problem.ok_or_else(|| ParseError::new("Missing problem line"))?;
    let source = source.ok_or_else(|| ParseError::new("No vertex designated as the source"))?;
    let sink = sink.ok_or_else(|| ParseError::new("No vertex designated as the sink"))?;
    if arcs.len() != nr_arcs {
        warn!("Problem line announces {nr_arcs} arcs, but {} were read", arcs.len());
    }
    debug!("Read network with {nr_vertices} vertices and {} arcs", arcs.len());

    Ok(FlowNetwork::new(nr_vertices, source, sink, arcs)?)
}

/// Parse the value of a solution file.
///
/// The value is read from the first line of the form `s <value>`, other lines are ignored. A file
/// with several solution lines is read up to the first one, later lines are never looked at.
///
/// # Errors
///
/// If there is no such line, or the value can't be parsed.
pub fn parse_solution<C: Capacity + FromStr>(text: &str) -> Result<C, ImportError> {
    let file_location = into_lines(text)
        .find(|(_, line)| line.starts_with('s'))
        .ok_or_else(|| ParseError::new("Missing solution line"))?;
    let (_, line) = file_location;
    let value = line.split_whitespace().nth(1)
        .ok_or_else(|| ParseError::with_file_location("Incomplete solution line", file_location))?;

    Ok(parse_number(value, "flow value", file_location)?)
}

/// Split a file into numbered lines, skipping empty ones.
///
/// # Return value
///
/// An iterator over lines with their line number, counting from 1.
fn into_lines(text: &str) -> impl Iterator<Item = FileLocation<'_>> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line))
        .filter(|(_, line)| !line.is_empty())
}

fn require_problem(
    problem: Option<(usize, usize)>,
    file_location: FileLocation,
) -> Result<(), ParseError> {
    match problem {
        Some(_) => Ok(()),
        None => Err(ParseError::with_file_location("Line before the problem line", file_location)),
    }
}

/// Read a vertex id, converting it from the 1-based ids of the file.
fn parse_vertex(token: &str, file_location: FileLocation) -> Result<Vertex, ParseError> {
    match parse_number::<usize>(token, "vertex id", file_location)? {
        0 => Err(ParseError::with_file_location("Vertex ids start at 1", file_location)),
        id => Ok(id - 1),
    }
}

fn parse_number<T: FromStr>(
    token: &str,
    what: &str,
    file_location: FileLocation,
) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::with_file_location(
        format!("Could not parse {what} \"{token}\""),
        file_location,
    ))
}

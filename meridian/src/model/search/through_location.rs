use crate::model::graph::{EdgeId, GraphError, GraphReader};
use crate::model::location::CorrelatedLocation;

/// narrow a through location's origin candidate edges to the edge the prior
/// path leg arrived on.
///
/// when the prior point is a graph node every candidate is kept. when the
/// prior point is mid-edge and the through edge enters a not-through
/// region, narrowing would block legitimate transitions through that
/// region, so the candidates are also kept. otherwise the candidate set
/// collapses to exactly the through edge, provided it is among the current
/// candidates.
pub fn adjust_origin(
    origin: &mut CorrelatedLocation,
    prior_is_node: bool,
    through_edge: EdgeId,
    reader: &dyn GraphReader,
) -> Result<(), GraphError> {
    if prior_is_node {
        // TODO: remove the opposing through edge from the candidates unless
        // all outbound edges enter not-through regions. for now keep all
        // edges.
        return Ok(());
    }

    let edge = reader.directed_edge(through_edge)?;
    if edge.not_thru {
        return Ok(());
    }

    let matched = origin
        .edges
        .iter()
        .find(|candidate| candidate.id == through_edge)
        .cloned();
    if let Some(candidate) = matched {
        origin.edges.clear();
        origin.edges.push(candidate);
    }
    Ok(())
}

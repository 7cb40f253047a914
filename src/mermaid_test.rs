use super::*;

// =============================================================================
// Registry shape
// =============================================================================

#[test]
fn all_lists_eight_types_in_display_order() {
    let ids: Vec<&str> = DiagramType::ALL.iter().map(|t| t.id()).collect();
    assert_eq!(
        ids,
        vec!["flowchart", "sequence", "mindmap", "entity-relationship", "class", "state", "gantt", "pie"]
    );
}

#[test]
fn default_is_flowchart() {
    assert_eq!(DiagramType::DEFAULT, DiagramType::Flowchart);
    assert_eq!(DiagramType::DEFAULT.id(), "flowchart");
}

#[test]
fn supported_list_joins_ids_in_order() {
    assert_eq!(
        DiagramType::supported_list(),
        "flowchart, sequence, mindmap, entity-relationship, class, state, gantt, pie"
    );
}

// =============================================================================
// from_id
// =============================================================================

#[test]
fn from_id_round_trips_every_type() {
    for diagram_type in DiagramType::ALL {
        assert_eq!(DiagramType::from_id(diagram_type.id()), Some(diagram_type));
    }
}

#[test]
fn from_id_unknown_is_none() {
    assert_eq!(DiagramType::from_id("uml"), None);
    assert_eq!(DiagramType::from_id(""), None);
    assert_eq!(DiagramType::from_id("graph TD"), None);
}

#[test]
fn from_id_is_exact_match_only() {
    assert_eq!(DiagramType::from_id("Flowchart"), None);
    assert_eq!(DiagramType::from_id("FLOWCHART"), None);
    assert_eq!(DiagramType::from_id(" flowchart"), None);
    assert_eq!(DiagramType::from_id("flowchart "), None);
}

// =============================================================================
// mermaid_prefix
// =============================================================================

#[test]
fn prefixes_match_mermaid_syntax() {
    assert_eq!(DiagramType::Flowchart.mermaid_prefix(), "graph TD");
    assert_eq!(DiagramType::Sequence.mermaid_prefix(), "sequenceDiagram");
    assert_eq!(DiagramType::Mindmap.mermaid_prefix(), "mindmap");
    assert_eq!(DiagramType::EntityRelationship.mermaid_prefix(), "erDiagram");
    assert_eq!(DiagramType::Class.mermaid_prefix(), "classDiagram");
    assert_eq!(DiagramType::State.mermaid_prefix(), "stateDiagram-v2");
    assert_eq!(DiagramType::Gantt.mermaid_prefix(), "gantt");
    assert_eq!(DiagramType::Pie.mermaid_prefix(), "pie");
}

#[test]
fn every_prefix_is_non_empty() {
    for diagram_type in DiagramType::ALL {
        assert!(!diagram_type.mermaid_prefix().is_empty());
    }
}

//! Diagram type registry.
//!
//! DESIGN
//! ======
//! Single source of truth for the supported Mermaid.js diagram families and
//! the leading syntax token each family requires ("graph TD",
//! "sequenceDiagram", ...). The mapping is fixed at compile time; request
//! validation and prefix enforcement both go through it.

/// A supported Mermaid.js diagram family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramType {
    Flowchart,
    Sequence,
    Mindmap,
    EntityRelationship,
    Class,
    State,
    Gantt,
    Pie,
}

impl DiagramType {
    /// All supported types, in the order clients see them.
    pub const ALL: [DiagramType; 8] = [
        DiagramType::Flowchart,
        DiagramType::Sequence,
        DiagramType::Mindmap,
        DiagramType::EntityRelationship,
        DiagramType::Class,
        DiagramType::State,
        DiagramType::Gantt,
        DiagramType::Pie,
    ];

    /// Type assumed when a request does not name one.
    pub const DEFAULT: DiagramType = DiagramType::Flowchart;

    /// Parse a wire identifier. Exact match only; unknown ids return `None`.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "flowchart" => Some(Self::Flowchart),
            "sequence" => Some(Self::Sequence),
            "mindmap" => Some(Self::Mindmap),
            "entity-relationship" => Some(Self::EntityRelationship),
            "class" => Some(Self::Class),
            "state" => Some(Self::State),
            "gantt" => Some(Self::Gantt),
            "pie" => Some(Self::Pie),
            _ => None,
        }
    }

    /// Wire identifier for this type.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::Mindmap => "mindmap",
            Self::EntityRelationship => "entity-relationship",
            Self::Class => "class",
            Self::State => "state",
            Self::Gantt => "gantt",
            Self::Pie => "pie",
        }
    }

    /// The syntax token valid Mermaid code for this family starts with.
    #[must_use]
    pub fn mermaid_prefix(self) -> &'static str {
        match self {
            Self::Flowchart => "graph TD",
            Self::Sequence => "sequenceDiagram",
            Self::Mindmap => "mindmap",
            Self::EntityRelationship => "erDiagram",
            Self::Class => "classDiagram",
            Self::State => "stateDiagram-v2",
            Self::Gantt => "gantt",
            Self::Pie => "pie",
        }
    }

    /// Comma-separated list of all supported ids, for error messages.
    #[must_use]
    pub fn supported_list() -> String {
        Self::ALL.map(Self::id).join(", ")
    }
}

#[cfg(test)]
#[path = "mermaid_test.rs"]
mod tests;

use std::collections::BTreeMap;

use crate::domain::{ElementId, ElementRef, Interface, PropertyValue, Requirement};

/// A leaf element of the model — a concrete part with no further
/// decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Identifier of the component.
    pub id: ElementId,
    /// Short name of the component.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Named properties of the component. Keys are unique within the
    /// component; ordering is by key.
    pub properties: BTreeMap<String, PropertyValue>,
    /// Requirements allocated to the component.
    pub requirements: Vec<Requirement>,
}

impl Component {
    /// Create a component with no description, properties, or
    /// requirements.
    pub fn new(id: impl Into<ElementId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            properties: BTreeMap::new(),
            requirements: Vec::new(),
        }
    }
}

/// A system node in the model tree.
///
/// A system owns its subsystems, components, interfaces, and
/// requirements by value — the tree has no shared mutable state and,
/// because ownership is by value, a system can never be its own
/// descendant. Interface endpoints remain weak references by id and
/// may still dangle or duplicate; see the
/// [`analysis`](crate::analysis) module.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    /// Identifier of the system.
    pub id: ElementId,
    /// Short name of the system.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Child systems, owned by value.
    pub subsystems: Vec<System>,
    /// Leaf components of this system.
    pub components: Vec<Component>,
    /// Directed interfaces declared at this level of the tree.
    pub interfaces: Vec<Interface>,
    /// Requirements allocated to the system itself.
    pub requirements: Vec<Requirement>,
}

impl System {
    /// Create an empty system.
    pub fn new(id: impl Into<ElementId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            subsystems: Vec::new(),
            components: Vec::new(),
            interfaces: Vec::new(),
            requirements: Vec::new(),
        }
    }

    /// Flattens the tree into every element reachable from this node,
    /// root first.
    ///
    /// Order is deterministic: each system is emitted, then its
    /// components, then its interfaces, then its subsystems are walked
    /// depth-first in declaration order. The walk uses an explicit
    /// work stack so arbitrarily deep trees cannot overflow the native
    /// call stack.
    #[must_use]
    pub fn elements(&self) -> Vec<ElementRef<'_>> {
        let mut out = Vec::new();
        let mut stack = vec![self];

        while let Some(system) = stack.pop() {
            out.push(ElementRef::System(system));
            out.extend(system.components.iter().map(ElementRef::Component));
            out.extend(system.interfaces.iter().map(ElementRef::Interface));
            // Reversed so subsystems pop in declaration order.
            stack.extend(system.subsystems.iter().rev());
        }

        out
    }

    /// Iterates over every interface declared anywhere in the tree.
    pub fn all_interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.elements().into_iter().filter_map(|element| {
            if let ElementRef::Interface(interface) = element {
                Some(interface)
            } else {
                None
            }
        })
    }

    /// Iterates over every requirement allocated anywhere in the tree,
    /// in element walk order.
    pub fn all_requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.elements()
            .into_iter()
            .flat_map(|element| element.requirements().iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InterfaceType;

    fn deep_tree(depth: usize) -> System {
        let mut system = System::new("LEAF", "Leaf");
        for level in (0..depth).rev() {
            let mut parent = System::new(format!("SYS-{level}"), format!("Level {level}"));
            parent.subsystems.push(system);
            system = parent;
        }
        system
    }

    #[test]
    fn elements_walk_is_root_first_and_depth_first() {
        let mut root = System::new("ROOT", "Root");
        root.components.push(Component::new("C1", "Alpha"));
        root.interfaces.push(Interface::new(
            "IF-1",
            "Bus",
            "C1",
            "C2",
            InterfaceType::Data,
        ));

        let mut left = System::new("LEFT", "Left");
        left.components.push(Component::new("C2", "Beta"));
        let right = System::new("RIGHT", "Right");
        root.subsystems.push(left);
        root.subsystems.push(right);

        let elements = root.elements();
        let ids: Vec<_> = elements
            .iter()
            .map(|element| element.id().as_str().to_string())
            .collect();

        assert_eq!(ids, ["ROOT", "C1", "IF-1", "LEFT", "C2", "RIGHT"]);
        assert_eq!(elements[0].name(), "Root");
        assert_eq!(elements[1].kind(), crate::domain::ElementKind::Component);
    }

    #[test]
    fn deep_trees_do_not_overflow_the_stack() {
        let system = deep_tree(5_000);
        assert_eq!(system.elements().len(), 5_001);
    }

    #[test]
    fn all_requirements_spans_every_element_kind() {
        use crate::domain::{Priority, Requirement, RequirementType, Verification};

        let requirement = |id: &str| {
            Requirement::new(
                id,
                id,
                "shall",
                RequirementType::Functional,
                Priority::Medium,
                Verification::Test,
            )
        };

        let mut root = System::new("ROOT", "Root");
        root.requirements.push(requirement("R-SYS"));

        let mut component = Component::new("C1", "Alpha");
        component.requirements.push(requirement("R-COMP"));
        root.components.push(component);

        let mut interface = Interface::new("IF-1", "Bus", "C1", "C1", InterfaceType::Data);
        interface.requirements.push(requirement("R-IF"));
        root.interfaces.push(interface);

        let ids: Vec<_> = root
            .all_requirements()
            .map(|req| req.id.as_str().to_string())
            .collect();
        assert_eq!(ids, ["R-SYS", "R-COMP", "R-IF"]);
    }
}

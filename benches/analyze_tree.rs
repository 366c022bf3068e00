//! This bench test builds a moderately large system tree and times
//! the coverage and conflict analyses over it.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use gantry::{
    analyze_coverage, detect_conflicts, Component, Interface, InterfaceType, Priority,
    Requirement, RequirementType, System, Verification,
};

/// Generates a three-level tree with interlinked components and a mix
/// of critical requirements.
fn build_tree() -> System {
    let mut root = System::new("SYS-ROOT", "Root");

    for sub_index in 0..10 {
        let mut subsystem = System::new(format!("SUB-{sub_index}"), format!("Subsystem {sub_index}"));

        for comp_index in 0..10 {
            let id = format!("C-{sub_index}-{comp_index}");
            let mut component = Component::new(id.clone(), format!("Component {comp_index}"));

            let priority = if comp_index % 3 == 0 {
                Priority::Critical
            } else {
                Priority::Medium
            };
            component.requirements.push(Requirement::new(
                format!("R-{sub_index}-{comp_index}"),
                "Duty cycle",
                "The component shall meet its duty cycle.",
                RequirementType::Performance,
                priority,
                Verification::Test,
            ));
            subsystem.components.push(component);

            if comp_index > 0 {
                subsystem.interfaces.push(Interface::new(
                    format!("IF-{sub_index}-{comp_index}"),
                    "Chain",
                    format!("C-{sub_index}-{}", comp_index - 1),
                    id,
                    InterfaceType::Data,
                ));
            }
        }

        root.subsystems.push(subsystem);
    }

    root
}

fn analyze_tree(c: &mut Criterion) {
    let tree = build_tree();

    c.bench_function("analyze coverage", |b| {
        b.iter(|| analyze_coverage(&tree));
    });

    c.bench_function("detect conflicts", |b| {
        b.iter(|| detect_conflicts(&tree));
    });
}

criterion_group!(benches, analyze_tree);
criterion_main!(benches);

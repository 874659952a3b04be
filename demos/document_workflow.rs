//! Document Workflow
//!
//! This example attaches a state machine to a document and drives it
//! through review and publication.
//!
//! Key concepts:
//! - Registering hooks declares which transitions exist
//! - Before hooks can veto a transition
//! - After hooks see the new state
//! - The owner reads its machine through a bound `StateView`
//!
//! Run with: cargo run --example document_workflow

use stateful::binding::{BindError, StateSlot, Stateful};
use stateful::builder::MachineBuilder;
use stateful::core::{State, StateView};
use stateful::state_enum;
use std::sync::Mutex;

state_enum! {
    enum DocState {
        Draft,
        InReview,
        Published,
        Archived,
    }
}

#[derive(Default)]
struct Document {
    machine: StateSlot<DocState>,
    body: String,
    approvals: Mutex<u32>,
}

impl Stateful<DocState> for Document {
    fn set_state_machine(&mut self, machine: StateView<DocState>) -> Result<(), BindError> {
        self.machine.fill(machine)
    }
}

fn describe(doc: &Document) -> String {
    match (doc.machine.previous(), doc.machine.current()) {
        (Some(previous), Some(current)) => format!("{} -> {}", previous.name(), current.name()),
        (None, Some(current)) => format!("at {}", current.name()),
        _ => "unbound".to_string(),
    }
}

fn main() {
    println!("=== Document Workflow Example ===\n");

    let mut machine = MachineBuilder::<DocState, Document, String>::new()
        .initial(DocState::Draft)
        .before(DocState::Draft, DocState::InReview, |doc: &Document| {
            if doc.body.trim().is_empty() {
                return Err("cannot review an empty document".to_string());
            }
            println!("  [before] submitting for review ({})", describe(doc));
            Ok(())
        })
        .after(DocState::InReview, DocState::InReview, |doc: &Document| {
            let mut approvals = doc.approvals.lock().map_err(|e| e.to_string())?;
            *approvals += 1;
            println!("  [after] approval #{} recorded", *approvals);
            Ok(())
        })
        .before(DocState::InReview, DocState::Published, |doc: &Document| {
            let approvals = *doc.approvals.lock().map_err(|e| e.to_string())?;
            if approvals < 2 {
                return Err(format!("needs 2 approvals, has {approvals}"));
            }
            Ok(())
        })
        .after(DocState::InReview, DocState::Published, |doc: &Document| {
            println!("  [after] published ({})", describe(doc));
            Ok(())
        })
        .after(DocState::Published, DocState::Archived, |doc: &Document| {
            println!("  [after] archived ({})", describe(doc));
            Ok(())
        })
        .build()
        .expect("initial state is set");

    let doc = Document {
        body: "Release notes for 1.0".to_string(),
        ..Document::default()
    };
    let doc = machine.bind(doc).expect("fresh document has an empty slot");

    println!("Initial state: {:?}", machine.current());
    println!("Reachable: {:?}\n", machine.available_transitions());

    for target in [
        DocState::Published,
        DocState::InReview,
        DocState::InReview,
        DocState::Published,
        DocState::InReview,
        DocState::Published,
        DocState::Archived,
    ] {
        println!("Requesting {:?}", target);
        match machine.transition(target) {
            Ok(_) => println!("  now {}\n", describe(&doc)),
            Err(err) => {
                let committed = err.is_committed();
                println!("  refused: {err} (state committed: {committed})");
                if let Some(reason) = err.into_hook_error() {
                    println!("  hook said: {reason}");
                }
                println!();
            }
        }
    }

    println!("Path: {:?}", machine.history().get_path());
    println!("Terminal: {}", machine.is_terminal());

    println!("\n=== Example Complete ===");
}

//! Property tests: no command sequence can put two elements with the same
//! identity into a book, and a rejected command never changes the model.

mod common;

use clientele_core::commands::{EditPersonDescriptor, EditPolicyDescriptor, EditTaskDescriptor};
use clientele_core::model::person::Name;
use clientele_core::model::policy::PolicyNumber;
use clientele_core::model::task::TaskDescription;
use clientele_core::{apply, Command, Index, Model};
use common::{todo, PersonBuilder, PolicyBuilder};
use proptest::prelude::*;

const NUMBERS: [&str; 4] = ["POL1", "POL2", "POL3", "POL4"];
const NAMES: [&str; 4] = ["Amy Bee", "amy  bee", "Bob Choo", "BOB CHOO"];
const DESCRIPTIONS: [&str; 4] = ["Étude review", "étude REVIEW", "call Bob", "CALL BOB"];

#[derive(Debug, Clone)]
enum Step {
    AddPolicy(usize),
    EditPolicy(usize, usize),
    DeletePolicy(usize),
    AddPerson(usize),
    EditPerson(usize, usize),
    AddTask(usize),
    EditTask(usize, usize),
    MarkTask(usize),
    UnmarkTask(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..NUMBERS.len()).prop_map(Step::AddPolicy),
        (1usize..6, 0..NUMBERS.len()).prop_map(|(i, n)| Step::EditPolicy(i, n)),
        (1usize..6).prop_map(Step::DeletePolicy),
        (0..NAMES.len()).prop_map(Step::AddPerson),
        (1usize..6, 0..NAMES.len()).prop_map(|(i, n)| Step::EditPerson(i, n)),
        (0..DESCRIPTIONS.len()).prop_map(Step::AddTask),
        (1usize..6, 0..DESCRIPTIONS.len()).prop_map(|(i, n)| Step::EditTask(i, n)),
        (1usize..6).prop_map(Step::MarkTask),
        (1usize..6).prop_map(Step::UnmarkTask),
    ]
}

fn to_command(step: &Step) -> Command {
    let index = |one_based: usize| Index::from_one_based(one_based).unwrap();
    match *step {
        Step::AddPolicy(n) => Command::AddPolicy(PolicyBuilder::new().with_number(NUMBERS[n]).build()),
        Step::EditPolicy(i, n) => Command::EditPolicy {
            index: index(i),
            descriptor: EditPolicyDescriptor {
                policy_number: Some(PolicyNumber::parse(NUMBERS[n]).unwrap()),
                ..Default::default()
            },
        },
        Step::DeletePolicy(i) => Command::DeletePolicy { index: index(i) },
        Step::AddPerson(n) => Command::AddPerson(PersonBuilder::new().with_name(NAMES[n]).build()),
        Step::EditPerson(i, n) => Command::EditPerson {
            index: index(i),
            descriptor: EditPersonDescriptor {
                name: Some(Name::parse(NAMES[n]).unwrap()),
                ..Default::default()
            },
        },
        Step::AddTask(n) => Command::AddTask(todo(DESCRIPTIONS[n])),
        Step::EditTask(i, n) => Command::EditTask {
            index: index(i),
            descriptor: EditTaskDescriptor {
                description: Some(TaskDescription::parse(DESCRIPTIONS[n]).unwrap()),
                ..Default::default()
            },
        },
        Step::MarkTask(i) => Command::MarkTask { index: index(i) },
        Step::UnmarkTask(i) => Command::UnmarkTask { index: index(i) },
    }
}

fn assert_unique(model: &Model) -> Result<(), TestCaseError> {
    let policies = model.policy_book().policies().as_slice();
    for (i, a) in policies.iter().enumerate() {
        for b in &policies[i + 1..] {
            prop_assert!(!a.is_same_policy(b), "duplicate policy {}", a.policy_number);
        }
    }
    let persons = model.address_book().persons().as_slice();
    for (i, a) in persons.iter().enumerate() {
        for b in &persons[i + 1..] {
            prop_assert!(!a.is_same_person(b), "duplicate person {}", a.name);
        }
    }
    let tasks = model.task_list().tasks().as_slice();
    for (i, a) in tasks.iter().enumerate() {
        for b in &tasks[i + 1..] {
            prop_assert!(!a.is_same_task(b), "duplicate task {}", a);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn identities_stay_unique(steps in prop::collection::vec(step(), 1..40)) {
        let mut model = Model::default();
        for step in &steps {
            let before = model.clone();
            if apply(&mut model, to_command(step)).is_err() {
                prop_assert_eq!(&model, &before);
                prop_assert_eq!(model.revision(), before.revision());
            }
            assert_unique(&model)?;
        }
    }

    #[test]
    fn revision_moves_on_every_successful_mutation(count in 1usize..=NUMBERS.len()) {
        let mut model = Model::default();
        for number in &NUMBERS[..count] {
            let before = model.revision();
            apply(&mut model, Command::AddPolicy(PolicyBuilder::new().with_number(number).build()))
                .unwrap();
            prop_assert!(model.revision() > before);
        }
    }
}

//! Reducer and selector properties over generated action sequences.

use std::collections::BTreeSet;

use proptest::prelude::*;
use proptest::sample::Index;
use todolist_core::store::selectors::select_filtered_tasks;
use todolist_core::store::{TasksAction, TodolistsAction};
use todolist_core::{reduce, Action, FilterValue, RootState, Task, TaskPriority, TaskStatus, Todolist};

const LIST: &str = "tl";

#[derive(Debug, Clone)]
enum Step {
    Create(u8),
    Delete(u8),
    Fetch(BTreeSet<u8>),
    AddTask(u8, u16),
}

fn todolist_id(n: u8) -> String {
    format!("tl-{n}")
}

fn todolist(id: &str) -> Todolist {
    Todolist {
        id: id.to_string(),
        title: id.to_string(),
        added_date: String::new(),
        order: 0,
    }
}

fn task(todolist_id: &str, id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        todo_list_id: todolist_id.to_string(),
        title: id.to_string(),
        description: None,
        status,
        priority: TaskPriority::Middle,
        start_date: None,
        deadline: None,
        added_date: String::new(),
        order: 0,
    }
}

impl Step {
    fn into_action(self) -> Action {
        match self {
            Step::Create(n) => TodolistsAction::Created(todolist(&todolist_id(n))).into(),
            Step::Delete(n) => TodolistsAction::Deleted { id: todolist_id(n) }.into(),
            Step::Fetch(ids) => TodolistsAction::Fetched(
                ids.into_iter().map(|n| todolist(&todolist_id(n))).collect(),
            )
            .into(),
            Step::AddTask(n, t) => {
                TasksAction::Created(task(&todolist_id(n), &format!("task-{t}"), TaskStatus::New))
                    .into()
            }
        }
    }
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u8..6).prop_map(Step::Create),
        (0u8..6).prop_map(Step::Delete),
        prop::collection::btree_set(0u8..6, 0..4).prop_map(Step::Fetch),
        (0u8..6, any::<u16>()).prop_map(|(n, t)| Step::AddTask(n, t)),
    ]
}

fn arb_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::New),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Completed),
        Just(TaskStatus::Draft),
    ]
}

/// One todolist holding tasks `t0..tn` with the given statuses, in order.
fn state_with_tasks(statuses: &[TaskStatus]) -> RootState {
    let mut state = RootState::default();
    reduce(&mut state, TodolistsAction::Fetched(vec![todolist(LIST)]));
    reduce(
        &mut state,
        TasksAction::Fetched {
            todolist_id: LIST.to_string(),
            tasks: statuses
                .iter()
                .enumerate()
                .map(|(i, status)| task(LIST, &format!("t{i}"), *status))
                .collect(),
        },
    );
    state
}

fn sorted<'a>(ids: impl Iterator<Item = &'a String>) -> Vec<&'a String> {
    let mut ids: Vec<&String> = ids.collect();
    ids.sort();
    ids
}

proptest! {
    /// Task mapping keys equal todolist ids after every settled action.
    #[test]
    fn task_keys_match_todolists(steps in prop::collection::vec(arb_step(), 0..40)) {
        let mut state = RootState::default();
        for step in steps {
            reduce(&mut state, step.into_action());
            prop_assert_eq!(
                sorted(state.tasks.keys()),
                sorted(state.todolists.iter().map(|tl| &tl.id))
            );
        }
    }

    #[test]
    fn created_task_lands_at_index_zero(statuses in prop::collection::vec(arb_status(), 0..20)) {
        let mut state = state_with_tasks(&statuses);
        let before = state.tasks[LIST].clone();

        reduce(&mut state, TasksAction::Created(task(LIST, "fresh", TaskStatus::New)));

        let after = &state.tasks[LIST];
        prop_assert_eq!(&after[0].id, "fresh");
        prop_assert_eq!(&after[1..], &before[..]);
    }

    #[test]
    fn delete_removes_one_and_keeps_order(
        statuses in prop::collection::vec(arb_status(), 1..20),
        victim in any::<Index>(),
    ) {
        let mut state = state_with_tasks(&statuses);
        let mut expected = state.tasks[LIST].clone();
        let removed = expected.remove(victim.index(statuses.len()));

        reduce(
            &mut state,
            TasksAction::Deleted { todolist_id: LIST.to_string(), task_id: removed.id },
        );

        prop_assert_eq!(&state.tasks[LIST], &expected);
    }

    #[test]
    fn filter_selects_by_status(statuses in prop::collection::vec(arb_status(), 0..30)) {
        let state = state_with_tasks(&statuses);
        let all = &state.tasks[LIST];

        for (filter, keep) in [
            (FilterValue::All, None),
            (FilterValue::Active, Some(TaskStatus::New)),
            (FilterValue::Completed, Some(TaskStatus::Completed)),
        ] {
            let mut filtered = state.clone();
            reduce(&mut filtered, TodolistsAction::FilterChanged { id: LIST.to_string(), filter });

            let selected: Vec<&Task> = select_filtered_tasks(&filtered, LIST);
            let expected: Vec<&Task> = all
                .iter()
                .filter(|task| keep.map_or(true, |status| task.status == status))
                .collect();
            prop_assert_eq!(selected, expected);
        }
    }
}

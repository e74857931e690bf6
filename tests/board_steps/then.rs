//! Then steps for chore board BDD scenarios.

use super::world::BoardWorld;
use chorewheel::task::domain::{Pool, TaskId, ViewEntry};
use rstest_bdd_macros::then;

fn names(entries: &[ViewEntry]) -> Vec<&str> {
    entries.iter().map(ViewEntry::name).collect()
}

fn expected_names(list: &str) -> Vec<&str> {
    list.split(',').map(str::trim).collect()
}

#[then("the completion succeeds")]
fn completion_succeeds(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_completion
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result in scenario world"))?;
    if let Err(err) = result {
        return Err(eyre::eyre!("unexpected completion failure: {err}"));
    }
    Ok(())
}

#[then("the completion fails because the task is not pending")]
fn completion_not_found(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_completion
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result in scenario world"))?;
    match result {
        Err(err) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected a not-found completion, got {other:?}")),
    }
}

#[then("the pools are unchanged")]
fn pools_unchanged(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let before = world
        .snapshot_before
        .clone()
        .ok_or_else(|| eyre::eyre!("missing snapshot before completion"))?;
    let after = world.board()?.snapshot()?;
    eyre::ensure!(after == before, "pools changed: {before:?} -> {after:?}");
    Ok(())
}

#[then(r#"task {id:u64} is in the "{pool}" pool"#)]
fn task_in_pool(world: &mut BoardWorld, id: u64, pool: String) -> Result<(), eyre::Report> {
    let expected = Pool::try_from(pool.as_str())?;
    let view = world.current_view()?;
    let entries = match expected {
        Pool::Available => &view.available,
        Pool::Pending => &view.pending,
        Pool::Stashed => &view.stashed,
    };
    eyre::ensure!(
        entries.iter().any(|entry| entry.id() == Some(TaskId::new(id))),
        "task {id} is not in the {expected} pool"
    );

    let snapshot = world.board()?.snapshot()?;
    let occurrences = [&snapshot.available, &snapshot.pending, &snapshot.stashed]
        .into_iter()
        .flatten()
        .filter(|task| task.id() == TaskId::new(id))
        .count();
    eyre::ensure!(occurrences == 1, "task {id} appears in {occurrences} pools");
    Ok(())
}

#[then("the pending pool is empty")]
fn pending_pool_empty(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let view = world.current_view()?;
    eyre::ensure!(view.pending.is_empty(), "pending pool: {:?}", names(&view.pending));
    Ok(())
}

#[then("the overdue bucket is empty")]
fn overdue_empty(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let view = world.current_view()?;
    eyre::ensure!(view.overdue.is_empty(), "overdue: {:?}", names(&view.overdue));
    Ok(())
}

#[then(r#"the overdue bucket lists "{list}""#)]
fn overdue_lists(world: &mut BoardWorld, list: String) -> Result<(), eyre::Report> {
    let view = world.current_view()?;
    eyre::ensure!(
        names(&view.overdue) == expected_names(&list),
        "overdue: {:?}",
        names(&view.overdue)
    );
    Ok(())
}

#[then("this week is empty")]
fn this_week_empty(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let view = world.current_view()?;
    eyre::ensure!(view.this_week.is_empty(), "this week: {:?}", names(&view.this_week));
    Ok(())
}

#[then(r#"this week lists "{list}""#)]
fn this_week_lists(world: &mut BoardWorld, list: String) -> Result<(), eyre::Report> {
    let view = world.current_view()?;
    eyre::ensure!(
        names(&view.this_week) == expected_names(&list),
        "this week: {:?}",
        names(&view.this_week)
    );
    Ok(())
}

#[then(r#"today shows "{placeholder}""#)]
fn today_shows_placeholder(
    world: &mut BoardWorld,
    placeholder: String,
) -> Result<(), eyre::Report> {
    let view = world.current_view()?;
    let [entry] = view.today.as_slice() else {
        return Err(eyre::eyre!("expected one placeholder, got {:?}", names(&view.today)));
    };
    eyre::ensure!(entry.name() == placeholder, "today shows '{}'", entry.name());
    eyre::ensure!(!entry.is_actionable(), "placeholder carries an id");
    Ok(())
}

#[then(r#"today lists "{list}""#)]
fn today_lists(world: &mut BoardWorld, list: String) -> Result<(), eyre::Report> {
    let view = world.current_view()?;
    eyre::ensure!(
        names(&view.today) == expected_names(&list),
        "today: {:?}",
        names(&view.today)
    );
    eyre::ensure!(view.today.iter().all(ViewEntry::is_actionable));
    Ok(())
}

#[then("only pending chores are offered for completion")]
fn only_pending_actionable(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let view = world.current_view()?;
    let pending: Vec<TaskId> = view.pending.iter().filter_map(ViewEntry::id).collect();
    eyre::ensure!(view.actionable_ids() == pending);
    Ok(())
}

#[then(r#"the current day label is "{label}""#)]
fn current_day_label(world: &mut BoardWorld, label: String) -> Result<(), eyre::Report> {
    let view = world.current_view()?;
    eyre::ensure!(
        view.current_day_label == label,
        "label is '{}'",
        view.current_day_label
    );
    Ok(())
}

#[then("the refreshed board was published")]
fn refreshed_board_published(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let published = world
        .publisher
        .latest()
        .ok_or_else(|| eyre::eyre!("no board was published"))?;
    eyre::ensure!(published == world.current_view()?, "published board is stale");
    Ok(())
}

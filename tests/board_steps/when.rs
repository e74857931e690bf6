//! When steps for chore board BDD scenarios.

use super::world::{BoardWorld, parse_day, run_async};
use chorewheel::task::services::CompleteTaskRequest;
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn complete(world: &mut BoardWorld, request: CompleteTaskRequest) -> Result<(), eyre::Report> {
    let service = world.board()?;
    let before = service.snapshot().wrap_err("snapshot before completion")?;
    let result = run_async(service.complete_task(request));

    world.snapshot_before = Some(before);
    world.last_completion = Some(result);
    world.last_view = None;
    Ok(())
}

#[when("task {id:u64} is marked done and returned to the pool")]
fn task_marked_done_and_returned(world: &mut BoardWorld, id: u64) -> Result<(), eyre::Report> {
    complete(world, CompleteTaskRequest::from_return_flag(id, true))
}

#[when("task {id:u64} is marked done and stashed")]
fn task_marked_done_and_stashed(world: &mut BoardWorld, id: u64) -> Result<(), eyre::Report> {
    complete(world, CompleteTaskRequest::from_return_flag(id, false))
}

#[when("the board is viewed")]
fn board_is_viewed(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let view = run_async(world.board()?.refresh()).wrap_err("refresh scenario board")?;
    world.last_view = Some(view);
    Ok(())
}

#[when(r#"the day advances to "{day}""#)]
fn day_advances(world: &mut BoardWorld, day: String) -> Result<(), eyre::Report> {
    let target = parse_day(&day)?;
    run_async(world.board()?.advance_day(target)).wrap_err("advance scenario day")?;
    world.last_view = None;
    Ok(())
}

//! When steps for story tree BDD scenarios.

use super::world::{StoryWorld, run_async};
use rstest_bdd_macros::when;

#[when("the board is synchronised")]
fn synchronise_board(world: &mut StoryWorld) {
    run_async(
        world
            .source
            .put(world.board.clone(), world.snapshot.clone()),
    );
    world.last_sync_result = Some(run_async(world.service.sync(&world.board)));
}

//! Given steps for story tree BDD scenarios.

use super::world::{BACKLOG_LIST, StoryWorld, split_list};
use rstest_bdd_macros::given;
use storyline::story::domain::{ListId, MemberId, RawList};

#[given(r#"a board card "{name}" at position {pos:u32}"#)]
fn board_card_at_position(world: &mut StoryWorld, name: String, pos: u32) {
    world.add_card(&name, f64::from(pos), BACKLOG_LIST, Vec::new());
}

#[given(r#"a board card "{name}" assigned to "{members}""#)]
fn board_card_with_members(world: &mut StoryWorld, name: String, members: String) {
    let member_ids = split_list(&members).into_iter().map(MemberId::new).collect();
    world.add_card(&name, 1.0, BACKLOG_LIST, member_ids);
}

#[given(r#"a board card "{name}" in list "{list}""#)]
fn board_card_in_list(world: &mut StoryWorld, name: String, list: String) {
    let list_id = format!("list-{}", world.snapshot.lists.len());
    world.snapshot.lists.push(RawList {
        id: ListId::new(list_id.clone()),
        name: list,
    });
    world.add_card(&name, 1.0, &list_id, Vec::new());
}

//! Then steps for story tree BDD scenarios.

use super::world::{StoryWorld, find_story, split_list};
use chrono::NaiveDate;
use rstest_bdd_macros::then;
use storyline::story::domain::{IssueNode, StoryId, StoryNode};

fn issue(world: &StoryWorld, id: u64) -> Result<&IssueNode, eyre::Report> {
    world
        .synced()?
        .forest()
        .issue(StoryId::new(id))
        .ok_or_else(|| eyre::eyre!("issue {id} missing from forest"))
}

fn ids(children: &[StoryNode]) -> Vec<String> {
    children.iter().map(|child| child.id.to_string()).collect()
}

#[then(r#"issue {id:u64} has children "{expected}""#)]
fn issue_has_children(world: &StoryWorld, id: u64, expected: String) -> Result<(), eyre::Report> {
    let found = ids(&issue(world, id)?.children);
    if found != split_list(&expected) {
        return Err(eyre::eyre!("issue {id} children were {found:?}"));
    }
    Ok(())
}

#[then(r#"story {id:u64} has children "{expected}""#)]
fn story_has_children(world: &StoryWorld, id: u64, expected: String) -> Result<(), eyre::Report> {
    let forest = world.synced()?.forest();
    let story = forest
        .issues
        .iter()
        .find_map(|root| find_story(&root.children, StoryId::new(id)))
        .ok_or_else(|| eyre::eyre!("story {id} missing from forest"))?;
    let found = ids(&story.children);
    if found != split_list(&expected) {
        return Err(eyre::eyre!("story {id} children were {found:?}"));
    }
    Ok(())
}

#[then("issue {id:u64} has no children")]
fn issue_has_no_children(world: &StoryWorld, id: u64) -> Result<(), eyre::Report> {
    let root = issue(world, id)?;
    if !root.children.is_empty() {
        return Err(eyre::eyre!(
            "expected no children, found {:?}",
            ids(&root.children)
        ));
    }
    Ok(())
}

#[then("no invalid cards are reported")]
fn no_invalid_cards(world: &StoryWorld) -> Result<(), eyre::Report> {
    let invalids = &world.synced()?.forest().invalids;
    if !invalids.is_empty() {
        return Err(eyre::eyre!("unexpected invalid cards: {invalids:?}"));
    }
    Ok(())
}

#[then(r#"the invalid cards are "{expected}""#)]
fn invalid_cards_are(world: &StoryWorld, expected: String) -> Result<(), eyre::Report> {
    let found: Vec<String> = world
        .synced()?
        .forest()
        .invalids
        .iter()
        .map(|invalid| invalid.title.clone())
        .collect();
    if found != split_list(&expected) {
        return Err(eyre::eyre!("invalid cards were {found:?}"));
    }
    Ok(())
}

#[then(r#"issue {id:u64} is assigned to "{expected}""#)]
fn issue_is_assigned_to(world: &StoryWorld, id: u64, expected: String) -> Result<(), eyre::Report> {
    let found: Vec<String> = issue(world, id)?
        .members
        .iter()
        .map(|member| member.username.clone())
        .collect();
    if found != split_list(&expected) {
        return Err(eyre::eyre!("issue {id} members were {found:?}"));
    }
    Ok(())
}

#[then(r#"issue {id:u64} is due on "{date}""#)]
fn issue_is_due_on(world: &StoryWorld, id: u64, date: String) -> Result<(), eyre::Report> {
    let expected = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|err| eyre::eyre!("bad date {date}: {err}"))?;
    let due = issue(world, id)?
        .sprint
        .as_ref()
        .map(storyline::story::domain::Sprint::due_date);
    if due != Some(expected) {
        return Err(eyre::eyre!("issue {id} due date was {due:?}"));
    }
    Ok(())
}

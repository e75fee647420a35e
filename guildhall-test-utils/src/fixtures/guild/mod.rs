use crate::TestContext;

pub mod data;
pub mod fake;
pub mod mockito;

impl TestContext {
    pub fn guild<'a>(&'a mut self) -> GuildFixtures<'a> {
        GuildFixtures { setup: self }
    }
}

pub struct GuildFixtures<'a> {
    pub setup: &'a mut TestContext,
}

use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn oba<'a>(&'a mut self) -> ObaFixtures<'a> {
        ObaFixtures { setup: self }
    }
}

pub struct ObaFixtures<'a> {
    pub setup: &'a mut TestContext,
}

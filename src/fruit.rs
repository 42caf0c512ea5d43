use anyhow::Result;
use std::io::Write;

pub const DEFAULT_NAME: &str = "Apple";

pub trait Fruit {
    fn name(&self) -> &str;

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Fruit: {}", self.name())?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fruits {
    name: String,
}

impl Default for Fruits {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl Fruits {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fruit for Fruits {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Food {
    base: Fruits,
}

impl Food {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fruit for Food {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Fruit: {} (from food class)", self.name())?;
        Ok(())
    }
}

use std::path::Path;

use clap::Parser;

use crate::{config::Config, Error};

#[derive(Debug, Default, Parser, Clone, Copy)]
pub struct Show;

impl Show {
    pub fn run(self, config: &Config, store: &Path) -> Result<(), Error> {
        println!("{:#?}", config);
        println!("ledger: {}", store.display());
        Ok(())
    }
}

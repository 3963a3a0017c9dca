use clap::Args;

use crate::catalog::{catalog, filter_symptoms};

#[derive(Args, Debug)]
pub struct SymptomsArgs {
    /// Case-insensitive substring to filter by
    #[arg(long)]
    pub(crate) search: Option<String>,
}

pub fn handle(args: SymptomsArgs) -> anyhow::Result<()> {
    let names = match args.search.as_deref() {
        Some(search) => filter_symptoms(search),
        None => catalog().to_vec(),
    };
    for name in names {
        println!("{name}");
    }
    Ok(())
}

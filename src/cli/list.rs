use std::io::Write;
use tracing::debug;

use crate::cli::commands::ListArgs;
use crate::errors::AssetError;
use crate::store::AssetStore;

pub fn handle_list(store: &AssetStore, args: &ListArgs, out: &mut impl Write) -> Result<(), AssetError> {
    let names = store.list(args.asset_type)?;
    debug!(asset_type = %args.asset_type, count = names.len(), "Listing assets");
    for name in &names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

use std::io::Write;
use serde_json::Value;
use tracing::info;

use crate::cli::commands::{CertificateArgs, CredentialArgs, NameArgs};
use crate::config::credentials::redact_password;
use crate::errors::AssetError;
use crate::store::AssetStore;

pub fn handle_get_variable(store: &AssetStore, args: &NameArgs, out: &mut impl Write) -> Result<(), AssetError> {
    let value = store.get_variable(&args.name)?;
    print_json(out, &value)
}

pub fn handle_get_credential(store: &AssetStore, args: &CredentialArgs, out: &mut impl Write) -> Result<(), AssetError> {
    let mut credential = store.get_credential(&args.name)?;
    if !args.show_password {
        credential = redact_password(&credential);
    }
    print_json(out, &serde_json::to_value(&credential)?)
}

pub fn handle_get_connection(store: &AssetStore, args: &NameArgs, out: &mut impl Write) -> Result<(), AssetError> {
    let fields = store.get_connection(&args.name)?;
    print_json(out, &fields)
}

pub fn handle_get_certificate(store: &AssetStore, args: &CertificateArgs, out: &mut impl Write) -> Result<(), AssetError> {
    let der = store.get_certificate(&args.name)?;
    std::fs::write(&args.out, &der)?;
    info!(name = %args.name, out = %args.out.display(), "Exported certificate");
    writeln!(out, "Wrote {} bytes to {}", der.len(), args.out.display())?;
    Ok(())
}

fn print_json(out: &mut impl Write, value: &Value) -> Result<(), AssetError> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", rendered)?;
    Ok(())
}

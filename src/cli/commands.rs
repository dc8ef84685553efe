use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use crate::store::AssetType;

#[derive(Parser)]
#[command(
    name = "automation-assets",
    version,
    about = "Read and update automation assets in a local JSON document"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Asset document to use (overrides the settings file and AUTOMATION_ASSET_FILE)
    #[arg(long, global = true)]
    pub asset_file: Option<PathBuf>,

    /// YAML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a variable's value as JSON
    GetVariable(NameArgs),
    /// Set an existing variable's value
    SetVariable(SetVariableArgs),
    /// Print a credential as {username, password}
    GetCredential(CredentialArgs),
    /// Print a connection's fields as JSON
    GetConnection(NameArgs),
    /// Export a certificate as PKCS#12
    GetCertificate(CertificateArgs),
    /// List asset names of one type
    List(ListArgs),
}

#[derive(Args, Clone)]
pub struct NameArgs {
    /// Asset name
    pub name: String,
}

#[derive(Args, Clone)]
pub struct SetVariableArgs {
    /// Variable name
    pub name: String,

    /// New value, parsed as JSON; anything else is stored as a string
    pub value: String,
}

#[derive(Args, Clone)]
pub struct CredentialArgs {
    /// Credential name
    pub name: String,

    /// Print the password instead of [REDACTED]
    #[arg(long)]
    pub show_password: bool,
}

#[derive(Args, Clone)]
pub struct CertificateArgs {
    /// Certificate asset name
    pub name: String,

    /// Destination for the PKCS#12 bytes
    #[arg(short, long)]
    pub out: PathBuf,
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// variable, credential, connection, or certificate
    pub asset_type: AssetType,
}
